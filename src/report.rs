//! One full evaluation pass
//!
//! A [`Report`] is what the calculator shows after every input change:
//! the point values Γ, Ω, S at the requested energy, the Ω(E) and Γ(E)
//! curves, and, for a single oscillator, the phase-space contour.
//!
//! ```text
//! SystemParameters + ComputationMode
//!          │
//!          ├── evaluate()            → PhaseSpaceResult
//!          ├── LinearSampler         → EnergyCurve
//!          └── (N = 1) contour       → PhaseSpaceContour
//! ```
//!
//! # Example
//!
//! ```rust
//! use harmonic_rs::physics::{ComputationMode, SystemParameters};
//! use harmonic_rs::report::Report;
//!
//! let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0).unwrap();
//! let report = Report::compute(params, ComputationMode::Dimensionless).unwrap();
//!
//! assert!(report.contour.is_some());
//! assert!(report.to_string().contains("Entropy S(E): 0.0000"));
//! ```

use std::fmt;

use crate::models::{HarmonicOscillators, PhaseSpaceContour};
use crate::physics::{ComputationMode, EnergyCurve, PhaseSpaceResult, StatisticalModel, SystemParameters};
use crate::sampling::{LinearSampler, Sampler, SamplingConfiguration, Scenario};

/// Message shown instead of the contour when N > 1
pub const CONTOUR_UNAVAILABLE_NOTE: &str = "The phase-space representation is only available for N = 1.";

/// Result of one evaluation pass
#[derive(Debug, Clone)]
pub struct Report {
    /// Inputs
    pub parameters: SystemParameters,

    /// Unit convention used for every value of the report
    pub mode: ComputationMode,

    /// Γ, Ω, S at the requested energy
    pub result: PhaseSpaceResult,

    /// Ω(E) and Γ(E) over the sampled range
    pub curve: EnergyCurve,

    /// H(x, p) = E ellipse, only for N = 1
    pub contour: Option<PhaseSpaceContour>,
}

impl Report {
    /// Evaluate with the default sampling (500 points over `[0.01, 2E]`)
    pub fn compute(parameters: SystemParameters, mode: ComputationMode) -> Result<Self, String> {
        Self::with_configuration(parameters, mode, &SamplingConfiguration::default())
    }

    /// Evaluate with a custom sampling configuration
    ///
    /// `parameters` are valid by construction; only the sampling step can
    /// fail.
    ///
    /// # Errors
    ///
    /// Returns the sampler's message if the sampling configuration is
    /// invalid. Non-finite values are not errors.
    pub fn with_configuration(
        parameters: SystemParameters,
        mode: ComputationMode,
        config: &SamplingConfiguration,
    ) -> Result<Self, String> {
        let model = HarmonicOscillators::new(parameters, mode);

        // ====== Point values ======

        let result = model.evaluate();
        log::debug!("{} at {}: {:?}", model.name(), parameters, result);

        // ====== Curves ======

        let scenario = Scenario::new(Box::new(model));
        let curve = LinearSampler::new().sample(&scenario, config)?;

        // ====== Contour (N = 1 only) ======

        let contour = PhaseSpaceContour::for_parameters(&parameters).ok();

        Ok(Self {
            parameters,
            mode,
            result,
            curve,
            contour,
        })
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Results ({})", self.mode)?;
        writeln!(f, "{}", self.parameters)?;
        writeln!(f, "{}", self.result)?;
        match &self.contour {
            Some(contour) => write!(
                f,
                "Phase-space contour: x_max = {:.4}, p_max = {:.4}",
                contour.x_max(),
                contour.p_max()
            ),
            None => write!(f, "{}", CONTOUR_UNAVAILABLE_NOTE),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_report_single_oscillator() {
        let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0).unwrap();
        let report = Report::compute(params, ComputationMode::Dimensional).unwrap();

        assert_relative_eq!(report.result.volume, 1.5915, epsilon = 1e-4);
        assert_relative_eq!(report.result.density, 0.15915, epsilon = 1e-5);
        assert_eq!(report.curve.len(), 500);
        assert!(report.contour.is_some());
    }

    #[test]
    fn test_report_many_oscillators_has_no_contour() {
        let report = Report::compute(SystemParameters::default(), ComputationMode::Dimensional).unwrap();
        assert!(report.contour.is_none());
        assert!(report.to_string().ends_with(CONTOUR_UNAVAILABLE_NOTE));
    }

    #[test]
    fn test_report_display_format() {
        let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0).unwrap();
        let report = Report::compute(params, ComputationMode::Dimensional).unwrap();
        let text = report.to_string();

        assert!(text.starts_with("Results (Full (with units))"));
        assert!(text.contains("Phase-space volume Γ(E): 1.5915e+00"));
        assert!(text.contains("Density of states Ω(E): 1.5915e-01"));
        assert!(text.contains("Entropy S(E): -1.8379"));
    }

    #[test]
    fn test_report_custom_sampling() {
        let config = SamplingConfiguration::default().with_sample_count(20);
        let report = Report::with_configuration(
            SystemParameters::default(),
            ComputationMode::Dimensionless,
            &config,
        )
        .unwrap();
        assert_eq!(report.curve.len(), 20);
        assert_eq!(report.mode, ComputationMode::Dimensionless);
    }

    #[test]
    fn test_report_rejects_bad_sampling() {
        let config = SamplingConfiguration::default().with_sample_count(0);
        let err = Report::with_configuration(SystemParameters::default(), ComputationMode::Dimensional, &config)
            .unwrap_err();
        assert_eq!(err, "Sample count must be at least 2, got 0");
    }

    #[test]
    fn test_report_accepts_every_constructed_parameter_set() {
        // Bounds of the accepted domain: no second validation layer rejects them
        for params in [
            SystemParameters::new(1, 0.0, 1e-6, 1e-6, 1e-6).unwrap(),
            SystemParameters::new(100, 1e3, 1e3, 1e3, 1e3).unwrap(),
        ] {
            let report = Report::compute(params, ComputationMode::Dimensionless).unwrap();
            assert_eq!(report.parameters, params);
        }
    }
}
