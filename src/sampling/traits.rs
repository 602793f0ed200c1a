//! Energy sampler traits and types
//!
//! # Design Philosophy
//!
//! - `Sampler` trait: the method that lays out the energy grid
//! - `SamplingConfiguration`: grid size and bounds
//! - `Scenario` (see `scenario`): which model, around which energy
//!
//! The same scenario can be sampled by different samplers, and the same
//! sampler works with every `StatisticalModel`.

use crate::physics::constants::{DEFAULT_SAMPLE_COUNT, ENERGY_SAMPLE_MIN, ENERGY_SPAN_FACTOR};
use crate::physics::EnergyCurve;
use crate::sampling::Scenario;

// =================================================================================================
// Sampling configuration
// =================================================================================================

/// Configuration of the energy grid
///
/// The grid runs from `energy_min` to `span_factor · E_ref`, both endpoints
/// included, with `sample_count` evenly spaced points.
///
/// # Examples
///
/// ```rust
/// use harmonic_rs::sampling::SamplingConfiguration;
///
/// // 500 points over [0.01, 2E]
/// let config = SamplingConfiguration::default();
/// assert_eq!(config.sample_count, 500);
///
/// // Coarser grid for a quick preview
/// let config = SamplingConfiguration::default().with_sample_count(50);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SamplingConfiguration {
    /// Number of samples (default: 500)
    pub sample_count: usize,

    /// Lowest sampled energy (default: 0.01)
    pub energy_min: f64,

    /// Highest sampled energy as a multiple of the reference energy (default: 2)
    pub span_factor: f64,
}

impl Default for SamplingConfiguration {
    fn default() -> Self {
        Self {
            sample_count: DEFAULT_SAMPLE_COUNT,
            energy_min: ENERGY_SAMPLE_MIN,
            span_factor: ENERGY_SPAN_FACTOR,
        }
    }
}

impl SamplingConfiguration {
    /// Create a configuration
    pub fn new(sample_count: usize, energy_min: f64, span_factor: f64) -> Self {
        Self {
            sample_count,
            energy_min,
            span_factor,
        }
    }

    /// Builder pattern: set sample count
    pub fn with_sample_count(mut self, sample_count: usize) -> Self {
        self.sample_count = sample_count;
        self
    }

    /// Builder pattern: set lowest energy
    pub fn with_energy_min(mut self, energy_min: f64) -> Self {
        self.energy_min = energy_min;
        self
    }

    /// Builder pattern: set span factor
    pub fn with_span_factor(mut self, span_factor: f64) -> Self {
        self.span_factor = span_factor;
        self
    }

    /// Upper bound of the grid for a given reference energy
    pub fn energy_max(&self, reference_energy: f64) -> f64 {
        self.span_factor * reference_energy
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.sample_count < 2 {
            return Err(format!(
                "Sample count must be at least 2, got {}",
                self.sample_count
            ));
        }
        if !self.energy_min.is_finite() || self.energy_min < 0.0 {
            return Err(format!(
                "Lowest sampled energy must be finite and non-negative, got {}",
                self.energy_min
            ));
        }
        if !self.span_factor.is_finite() || self.span_factor <= 0.0 {
            return Err(format!(
                "Span factor must be finite and positive, got {}",
                self.span_factor
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Sampler trait
// =================================================================================================

/// Trait for energy samplers
///
/// # Responsibility
///
/// Lays out an energy grid and evaluates the scenario's model on it.
/// Does NOT know the physics (that's the model's job).
///
/// Non-finite model values are kept in the curve, never clamped.
pub trait Sampler {
    /// Sample Γ(E) and Ω(E) over the configured grid
    ///
    /// # Errors
    ///
    /// Returns `Err` when the configuration or the scenario is invalid.
    fn sample(
        &self,
        scenario: &Scenario,
        config: &SamplingConfiguration,
    ) -> Result<EnergyCurve, String>;

    /// Name of the sampler
    fn name(&self) -> &str;
}

// =================================================================================================
// Tests
// =================================================================================================
