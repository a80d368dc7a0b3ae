//! Weighted-Average Defuzzification

use rule_base::FiringStrengths;

/// Collapse rule strengths into a crisp severity score.
///
/// Height method: each rule contributes its crisp weight, weighted by its
/// firing strength. Sums run in rule order. Returns exactly `0.0` when no
/// rule fires.
pub fn defuzzify(strengths: &FiringStrengths) -> f64 {
    let (weighted, total) = strengths
        .iter()
        .fold((0.0, 0.0), |(weighted, total), (rule, s)| {
            (weighted + s * rule.weight, total + s)
        });

    if total > 0.0 {
        weighted / total
    } else {
        0.0
    }
}
