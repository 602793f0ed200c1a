//! Helper functions for integration tests

use harmonic_rs::physics::{EnergyCurve, SystemParameters};

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

/// Parameters with every physical constant set to one
pub fn unit_parameters(oscillators: u32, energy: f64) -> SystemParameters {
    SystemParameters::new(oscillators, energy, 1.0, 1.0, 1.0).expect("unit parameters are valid")
}

/// Assert that the Γ column never decreases along the curve
pub fn assert_volume_non_decreasing(curve: &EnergyCurve, message: &str) {
    for (i, pair) in curve.volumes().windows(2).enumerate() {
        assert!(
            pair[1] >= pair[0],
            "{}: Γ decreases between samples {} and {} ({} > {})",
            message,
            i,
            i + 1,
            pair[0],
            pair[1]
        );
    }
}
