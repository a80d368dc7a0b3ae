//! End-to-end severity scenarios for representative segment readings

use inference_engine::infer;
use mitigation::Category;

const TOLERANCE: f64 = 1e-9;

struct Scenario {
    voltage: f64,
    frequency: f64,
    load: f64,
    severity: f64,
    category: Category,
}

const SCENARIOS: &[Scenario] = &[
    Scenario { voltage: 8.0, frequency: 0.8, load: 30.0, severity: 100.0, category: Category::High },
    Scenario { voltage: 5.5, frequency: 0.7, load: 20.0, severity: 53.076923076923080, category: Category::Moderate },
    Scenario { voltage: 3.0, frequency: 0.1, load: 8.0, severity: 10.0, category: Category::Low },
    Scenario { voltage: 7.0, frequency: 0.4, load: 12.0, severity: 50.0, category: Category::Moderate },
    Scenario { voltage: 5.0, frequency: 0.3, load: 35.0, severity: 70.0, category: Category::Moderate },
    Scenario { voltage: 6.0, frequency: 0.7, load: 15.0, severity: 55.714285714285715, category: Category::Moderate },
];

#[test]
fn test_reference_scenarios() {
    for s in SCENARIOS {
        let result = infer(s.voltage, s.frequency, s.load);
        assert!(
            (result.severity - s.severity).abs() < TOLERANCE,
            "({}, {}, {}) -> {} expected {}",
            s.voltage,
            s.frequency,
            s.load,
            result.severity,
            s.severity
        );
        assert_eq!(result.category(), s.category);
        assert_eq!(result.mitigation(), s.category.message());
    }
}

#[test]
fn test_severity_stays_in_range_across_domain() {
    for vi in 0..=20 {
        for fi in 0..=10 {
            for li in 0..=20 {
                let v = vi as f64 * 0.5;
                let f = fi as f64 * 0.1;
                let l = li as f64 * 2.0;
                let result = infer(v, f, l);
                assert!(
                    (0.0..=100.0).contains(&result.severity),
                    "({v}, {f}, {l}) -> {}",
                    result.severity
                );
                if result.strengths.total() > 0.0 {
                    assert!(result.severity >= 10.0 - TOLERANCE);
                } else {
                    assert_eq!(result.severity, 0.0);
                }
            }
        }
    }
}

#[test]
fn test_out_of_domain_inputs_are_defined() {
    let result = infer(-3.0, 2.5, 120.0);
    assert!(result.severity.is_finite());
    assert!((0.0..=100.0).contains(&result.severity));
}
