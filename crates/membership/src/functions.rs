//! Piecewise-Linear Membership Functions
//!
//! Each function maps a raw measurement to a degree of membership. The
//! branch chains are evaluated top to bottom with no clamping beyond the
//! breakpoints, so a NaN input falls through to the final branch.

/// Voltage deviation is low: full below 2, falling to zero at 5
pub fn voltage_low(x: f64) -> f64 {
    if x <= 2.0 {
        1.0
    } else if x <= 5.0 {
        (5.0 - x) / 3.0
    } else {
        0.0
    }
}

/// Voltage deviation is medium: triangle over [3, 7] peaking at 5
pub fn voltage_medium(x: f64) -> f64 {
    if (3.0..5.0).contains(&x) {
        (x - 3.0) / 2.0
    } else if (5.0..=7.0).contains(&x) {
        (7.0 - x) / 2.0
    } else {
        0.0
    }
}

/// Voltage deviation is high: zero up to 6, rising to full at 9
pub fn voltage_high(x: f64) -> f64 {
    if x <= 6.0 {
        0.0
    } else if x <= 9.0 {
        (x - 6.0) / 3.0
    } else {
        1.0
    }
}

/// Frequency variation is stable: full below 0.2, falling to zero at 0.6
pub fn frequency_stable(x: f64) -> f64 {
    if x <= 0.2 {
        1.0
    } else if x <= 0.6 {
        (0.6 - x) / 0.4
    } else {
        0.0
    }
}

/// Frequency variation is unstable: zero up to 0.4, rising to full at 0.8
pub fn frequency_unstable(x: f64) -> f64 {
    if x <= 0.4 {
        0.0
    } else if x <= 0.8 {
        (x - 0.4) / 0.4
    } else {
        1.0
    }
}

/// Load imbalance is balanced: full below 10, falling to zero at 25
pub fn load_balanced(x: f64) -> f64 {
    if x <= 10.0 {
        1.0
    } else if x <= 25.0 {
        (25.0 - x) / 15.0
    } else {
        0.0
    }
}

/// Load imbalance is unbalanced: zero up to 15, rising to full at 35
pub fn load_unbalanced(x: f64) -> f64 {
    if x <= 15.0 {
        0.0
    } else if x <= 35.0 {
        (x - 15.0) / 20.0
    } else {
        1.0
    }
}
