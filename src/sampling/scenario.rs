//! Sampling scenario definition
//!
//! A scenario combines a statistical model with the reference energy the
//! grid is built around.
use crate::physics::StatisticalModel;

/// Sampling scenario
///
/// Defines what to sample:
/// - Statistical model (formulas)
/// - Reference energy E_ref (the grid spans `[energy_min, span_factor · E_ref]`)
///
/// # Design
///
/// The reference energy defaults to the model's own energy, and can be
/// overridden to explore another range with the same model.
///
/// # Examples
///
/// ```rust
/// use harmonic_rs::models::HarmonicOscillators;
/// use harmonic_rs::physics::{ComputationMode, SystemParameters};
/// use harmonic_rs::sampling::Scenario;
///
/// let model = HarmonicOscillators::new(SystemParameters::default(), ComputationMode::Dimensional);
/// let scenario = Scenario::new(Box::new(model));
/// assert_eq!(scenario.reference_energy(), 10.0);
///
/// let zoomed = scenario.with_reference_energy(2.0);
/// assert_eq!(zoomed.reference_energy(), 2.0);
/// ```
pub struct Scenario {
    /// Statistical model (formulas)
    pub model: Box<dyn StatisticalModel>,

    reference_energy: f64,
}

impl Scenario {
    /// Create a scenario around the model's own energy
    pub fn new(model: Box<dyn StatisticalModel>) -> Self {
        let reference_energy = model.reference_energy();
        Self {
            model,
            reference_energy,
        }
    }

    /// Same model, other reference energy
    pub fn with_reference_energy(mut self, reference_energy: f64) -> Self {
        self.reference_energy = reference_energy;
        self
    }

    /// Reference energy the grid is built around
    pub fn reference_energy(&self) -> f64 {
        self.reference_energy
    }

    /// Verifying scenario content
    pub fn validate(&self) -> Result<(), String> {
        if !self.reference_energy.is_finite() || self.reference_energy < 0.0 {
            return Err(format!(
                "Reference energy must be finite and non-negative, got {}",
                self.reference_energy
            ));
        }
        Ok(())
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }
}

impl std::fmt::Debug for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scenario")
            .field("name", &self.get_model_name())
            .field("mode", &self.model.mode())
            .field("reference energy", &self.reference_energy)
            .finish()
    }
}

// ================================================================================================
// Tests
// ================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::ComputationMode;

    // Mocking a statistical model
    struct MockModel {
        energy: f64,
    }

    impl StatisticalModel for MockModel {
        fn phase_space_volume(&self, energy: f64) -> f64 {
            energy
        }

        fn density_of_states(&self, _energy: f64) -> f64 {
            1.0
        }

        fn reference_energy(&self) -> f64 {
            self.energy
        }

        fn name(&self) -> &str {
            "MockModel"
        }

        fn mode(&self) -> ComputationMode {
            ComputationMode::Dimensionless
        }
    }

    #[test]
    fn test_scenario_creation() {
        let scenario = Scenario::new(Box::new(MockModel { energy: 4.0 }));
        assert_eq!(scenario.get_model_name(), "MockModel");
        assert_eq!(scenario.reference_energy(), 4.0);
        assert!(scenario.validate().is_ok());
    }

    #[test]
    fn test_scenario_rejects_bad_reference_energy() {
        let scenario = Scenario::new(Box::new(MockModel { energy: 4.0 }))
            .with_reference_energy(f64::INFINITY);
        assert!(scenario.validate().is_err());

        let scenario = Scenario::new(Box::new(MockModel { energy: -1.0 }));
        assert!(scenario.validate().is_err());
    }

    #[test]
    fn test_scenario_debug() {
        let scenario = Scenario::new(Box::new(MockModel { energy: 4.0 }));
        let text = format!("{:?}", scenario);
        assert!(text.contains("MockModel"));
        assert!(text.contains("Dimensionless"));
    }
}
