//! Domain errors for system parameters
//!
//! Invalid inputs are rejected before any formula is evaluated. Numerical
//! singularities (gamma poles, logarithm of a non-positive density) are NOT
//! errors: they propagate as non-finite `f64` values.

use thiserror::Error;

use super::constants::{MAX_OSCILLATORS, MIN_OSCILLATORS};

/// Rejection of a parameter set or of an inapplicable derived quantity
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// N outside `[MIN_OSCILLATORS, MAX_OSCILLATORS]`
    #[error("number of oscillators must be in [{min}, {max}], got {value}", min = MIN_OSCILLATORS, max = MAX_OSCILLATORS)]
    OscillatorCount { value: u32 },

    /// Energy negative or not finite
    #[error("energy must be finite and non-negative, got {value}")]
    Energy { value: f64 },

    /// A parameter that must be strictly positive (mass, frequency, Planck constant)
    #[error("{name} must be finite and strictly positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    /// The phase-space contour only exists for a single oscillator
    #[error("phase-space contour is only available for N = 1, got N = {oscillators}")]
    ContourUnavailable { oscillators: u32 },
}
