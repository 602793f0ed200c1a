//! Uniform energy grid
//!
//! The grid is a linspace: `sample_count` points from `energy_min` to
//! `span_factor · E_ref`, both included.
//!
//! # Parallel evaluation
//!
//! With the `parallel` feature enabled, grids with at least
//! [`parallel_threshold()`](crate::sampling::parallel_threshold) points are
//! evaluated with Rayon. Every sample is independent, so the result is
//! identical to the sequential one.

use crate::physics::{EnergyCurve, EnergySample, StatisticalModel};
use crate::sampling::{self, Sampler, SamplingConfiguration, Scenario};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

// =================================================================================================
// Linear Sampler
// =================================================================================================

/// Evenly spaced energy sampler
///
/// # Example
///
/// ```rust
/// use harmonic_rs::models::HarmonicOscillators;
/// use harmonic_rs::physics::{ComputationMode, SystemParameters};
/// use harmonic_rs::sampling::{LinearSampler, Sampler, SamplingConfiguration, Scenario};
///
/// let model = HarmonicOscillators::new(SystemParameters::default(), ComputationMode::Dimensional);
/// let scenario = Scenario::new(Box::new(model));
///
/// let curve = LinearSampler::new()
///     .sample(&scenario, &SamplingConfiguration::default())
///     .unwrap();
///
/// assert_eq!(curve.len(), 500);
/// assert_eq!(curve.energies()[0], 0.01);
/// assert_eq!(curve.energies()[499], 20.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearSampler;

impl LinearSampler {
    /// Create a new linear sampler
    pub fn new() -> Self {
        Self
    }
}

/// Evaluate one grid point
#[inline]
fn evaluate(model: &dyn StatisticalModel, energy: f64) -> EnergySample {
    EnergySample {
        energy,
        density: model.density_of_states(energy),
        volume: model.phase_space_volume(energy),
    }
}

impl Sampler for LinearSampler {
    fn sample(
        &self,
        scenario: &Scenario,
        config: &SamplingConfiguration,
    ) -> Result<EnergyCurve, String> {
        // ====== Step 1: Validation ======

        config.validate()?;
        scenario.validate()?;

        // ====== Step 2: Grid ======

        let energy_max = config.energy_max(scenario.reference_energy());
        let energies = sampling::linspace(config.energy_min, energy_max, config.sample_count);

        // ====== Step 3: Evaluation ======

        let model = scenario.model.as_ref();

        #[cfg(feature = "parallel")]
        let samples: Vec<EnergySample> = if energies.len() >= sampling::parallel_threshold() {
            energies.par_iter().map(|&e| evaluate(model, e)).collect()
        } else {
            energies.iter().map(|&e| evaluate(model, e)).collect()
        };

        #[cfg(not(feature = "parallel"))]
        let samples: Vec<EnergySample> = energies.iter().map(|&e| evaluate(model, e)).collect();

        let curve = EnergyCurve::from_samples(samples);

        // ====== Step 4: Diagnostics ======

        log::debug!(
            "{}: sampled {} energies over [{}, {}] with {}",
            scenario.get_model_name(),
            curve.len(),
            config.energy_min,
            energy_max,
            self.name()
        );

        let non_finite = curve.non_finite_count();
        if non_finite > 0 {
            log::warn!(
                "{}: {} of {} samples are not finite (numerical singularity)",
                scenario.get_model_name(),
                non_finite,
                curve.len()
            );
        }

        Ok(curve)
    }

    fn name(&self) -> &str {
        "Linear grid"
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ComputationMode;

    struct QuadraticModel;

    impl StatisticalModel for QuadraticModel {
        fn phase_space_volume(&self, energy: f64) -> f64 {
            energy * energy
        }

        fn density_of_states(&self, energy: f64) -> f64 {
            2.0 * energy
        }

        fn reference_energy(&self) -> f64 {
            5.0
        }

        fn name(&self) -> &str {
            "Quadratic"
        }

        fn mode(&self) -> ComputationMode {
            ComputationMode::Dimensionless
        }
    }

    struct SingularModel;

    impl StatisticalModel for SingularModel {
        fn phase_space_volume(&self, energy: f64) -> f64 {
            energy
        }

        fn density_of_states(&self, energy: f64) -> f64 {
            1.0 / (energy - 1.0)
        }

        fn reference_energy(&self) -> f64 {
            1.0
        }

        fn name(&self) -> &str {
            "Singular"
        }

        fn mode(&self) -> ComputationMode {
            ComputationMode::Dimensional
        }
    }

    #[test]
    fn test_linear_sampler_creation() {
        let sampler = LinearSampler::new();
        assert_eq!(sampler.name(), "Linear grid");
    }

    #[test]
    fn test_grid_bounds_and_values() {
        let scenario = Scenario::new(Box::new(QuadraticModel));
        let config = SamplingConfiguration::new(11, 0.0, 2.0);
        let curve = LinearSampler::new().sample(&scenario, &config).unwrap();

        assert_eq!(curve.len(), 11);
        assert_eq!(curve.energies()[0], 0.0);
        assert_eq!(curve.energies()[10], 10.0);
        assert!((curve.energies()[3] - 3.0).abs() < 1e-12);
        assert!((curve.volumes()[3] - 9.0).abs() < 1e-12);
        assert!((curve.densities()[3] - 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_singularity_is_propagated() {
        // Grid [0, 2] with 3 points hits E = 1 exactly
        let scenario = Scenario::new(Box::new(SingularModel));
        let config = SamplingConfiguration::new(3, 0.0, 2.0);
        let curve = LinearSampler::new().sample(&scenario, &config).unwrap();

        assert!(curve.densities()[1].is_infinite());
        assert_eq!(curve.non_finite_count(), 1);
    }

    #[test]
    fn test_invalid_configuration_rejected() {
        let scenario = Scenario::new(Box::new(QuadraticModel));
        let config = SamplingConfiguration::default().with_sample_count(1);
        assert!(LinearSampler::new().sample(&scenario, &config).is_err());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let scenario = Scenario::new(Box::new(QuadraticModel));
        let config = SamplingConfiguration::default().with_sample_count(257);

        let sequential = {
            let _guard = sampling::ThresholdGuard::save(usize::MAX);
            LinearSampler::new().sample(&scenario, &config).unwrap()
        };
        let parallel = {
            let _guard = sampling::ThresholdGuard::save(2);
            LinearSampler::new().sample(&scenario, &config).unwrap()
        };

        assert_eq!(sequential, parallel);
    }
}
