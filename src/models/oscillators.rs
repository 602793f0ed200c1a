//! N classical one-dimensional harmonic oscillators
//!
//! Each oscillator has the Hamiltonian
//!
//! $$H(p, x) = \frac{p^2}{2m} + \frac{1}{2} m \omega^2 x^2, \qquad \omega = 2\pi\nu$$
//!
//! The region $H \le E$ of the $2N$-dimensional phase space is a
//! hyper-ellipsoid; its volume in units of $h^N$ is the cumulative count of
//! microstates Γ(E), and Ω(E) is the density of states.
//!
//! # Formulas
//!
//! | Mode            | Γ(E)                           | Ω(E)                                  |
//! |-----------------|--------------------------------|---------------------------------------|
//! | `Dimensional`   | E^N / (h^N (mω)^N Γ(N+1))      | N E^(N−1) / (h^N (mω)^N Γ(N))         |
//! | `Dimensionless` | (E/hν)^N / Γ(N+1)              | N (E/hν)^(N−1) / (hν Γ(N))            |
//!
//! Both Ω formulas carry a factor N over the derivative of their Γ:
//! Ω = N · dΓ/dE in either mode, so Ω equals dΓ/dE only for N = 1. The
//! extra 1/(hν) of the dimensionless Ω is the change of variable E ↦ E/hν.
//! With mω = ν (i.e. m = 1/2π) the two modes give identical values.
//!
//! Gamma poles are not special-cased: `statrs` returns a non-finite value
//! there and it propagates.
//!
//! # Example
//!
//! ```rust
//! use harmonic_rs::models::HarmonicOscillators;
//! use harmonic_rs::physics::{ComputationMode, StatisticalModel, SystemParameters};
//!
//! let params = SystemParameters::new(3, 10.0, 1.0, 1.0, 1.0).unwrap();
//! let model = HarmonicOscillators::new(params, ComputationMode::Dimensional);
//!
//! let expected = 1000.0 / ((2.0 * std::f64::consts::PI).powi(3) * 6.0);
//! assert!((model.phase_space_volume(10.0) - expected).abs() < 1e-9);
//! ```

use statrs::function::gamma::gamma;

use crate::physics::{ComputationMode, StatisticalModel, SystemParameters};

// =================================================================================================
// Closed-form expressions
// =================================================================================================

/// Cumulative phase-space volume Γ(E) under `mode`
///
/// `energy` is the evaluation point; the other inputs come from `params`
/// (its own reference energy is ignored).
pub fn phase_space_volume(mode: ComputationMode, params: &SystemParameters, energy: f64) -> f64 {
    let n = params.oscillators() as i32;
    let n_factorial = gamma(params.oscillators() as f64 + 1.0);

    match mode {
        ComputationMode::Dimensional => {
            let m_omega = params.mass() * params.angular_frequency();
            energy.powi(n) / (params.planck().powi(n) * m_omega.powi(n) * n_factorial)
        }
        ComputationMode::Dimensionless => {
            (energy / params.quantum()).powi(n) / n_factorial
        }
    }
}

/// Density of states Ω(E) under `mode`
///
/// For N = 1 the energy factor is E^0 = 1, including at E = 0.
pub fn density_of_states(mode: ComputationMode, params: &SystemParameters, energy: f64) -> f64 {
    let n = params.oscillators() as i32;
    let n_real = params.oscillators() as f64;
    let gamma_n = gamma(n_real);

    match mode {
        ComputationMode::Dimensional => {
            let m_omega = params.mass() * params.angular_frequency();
            n_real * energy.powi(n - 1) / (params.planck().powi(n) * m_omega.powi(n) * gamma_n)
        }
        ComputationMode::Dimensionless => {
            let quantum = params.quantum();
            n_real * (energy / quantum).powi(n - 1) / (quantum * gamma_n)
        }
    }
}

// =================================================================================================
// Model
// =================================================================================================

/// System of N identical classical harmonic oscillators
///
/// Holds one validated parameter set and one computation mode, so Γ and Ω
/// obtained from the same model always share the mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonicOscillators {
    parameters: SystemParameters,
    mode: ComputationMode,
}

impl HarmonicOscillators {
    /// Create a model
    ///
    /// # Example
    ///
    /// ```rust
    /// use harmonic_rs::models::HarmonicOscillators;
    /// use harmonic_rs::physics::{ComputationMode, SystemParameters};
    ///
    /// let model = HarmonicOscillators::new(SystemParameters::default(), ComputationMode::Dimensional);
    /// assert_eq!(model.parameters().oscillators(), 3);
    /// ```
    pub fn new(parameters: SystemParameters, mode: ComputationMode) -> Self {
        Self { parameters, mode }
    }

    /// System parameters
    pub fn parameters(&self) -> &SystemParameters {
        &self.parameters
    }

    /// Same parameters, other mode
    pub fn with_mode(self, mode: ComputationMode) -> Self {
        Self { mode, ..self }
    }
}

impl StatisticalModel for HarmonicOscillators {
    fn phase_space_volume(&self, energy: f64) -> f64 {
        phase_space_volume(self.mode, &self.parameters, energy)
    }

    fn density_of_states(&self, energy: f64) -> f64 {
        density_of_states(self.mode, &self.parameters, energy)
    }

    fn reference_energy(&self) -> f64 {
        self.parameters.energy()
    }

    fn name(&self) -> &str {
        match self.mode {
            ComputationMode::Dimensional => "Harmonic oscillators (dimensional)",
            ComputationMode::Dimensionless => "Harmonic oscillators (dimensionless)",
        }
    }

    fn mode(&self) -> ComputationMode {
        self.mode
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn params(n: u32, energy: f64) -> SystemParameters {
        SystemParameters::new(n, energy, 1.0, 1.0, 1.0).unwrap()
    }

    #[test]
    fn test_single_oscillator_dimensional() {
        let p = params(1, 10.0);
        let model = HarmonicOscillators::new(p, ComputationMode::Dimensional);

        let result = model.evaluate();
        assert_relative_eq!(result.volume, 10.0 / (2.0 * PI), max_relative = 1e-12);
        assert_relative_eq!(result.density, 1.0 / (2.0 * PI), max_relative = 1e-12);
        assert_relative_eq!(result.entropy, -(2.0 * PI).ln(), max_relative = 1e-12);
        assert_relative_eq!(result.entropy, -1.8379, epsilon = 1e-4);
    }

    #[test]
    fn test_single_oscillator_dimensionless() {
        let p = params(1, 10.0);
        let model = HarmonicOscillators::new(p, ComputationMode::Dimensionless);

        let result = model.evaluate();
        assert_relative_eq!(result.volume, 10.0, max_relative = 1e-12);
        assert_relative_eq!(result.density, 1.0, max_relative = 1e-12);
        assert_relative_eq!(result.entropy, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_three_oscillators_dimensional() {
        let p = params(3, 10.0);
        let gamma_value = phase_space_volume(ComputationMode::Dimensional, &p, 10.0);
        let expected = 1000.0 / ((2.0 * PI).powi(3) * 6.0);
        assert_relative_eq!(gamma_value, expected, max_relative = 1e-12);
        assert_relative_eq!(gamma_value, 0.6719, epsilon = 1e-4);

        let omega = density_of_states(ComputationMode::Dimensional, &p, 10.0);
        let expected = 3.0 * 100.0 / ((2.0 * PI).powi(3) * 2.0);
        assert_relative_eq!(omega, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_dimensionless_hand_values() {
        // N = 2, E = 6, h = 2, ν = 1.5 -> E/hν = 2
        let p = SystemParameters::new(2, 6.0, 1.0, 1.5, 2.0).unwrap();
        let gamma_value = phase_space_volume(ComputationMode::Dimensionless, &p, 6.0);
        assert_relative_eq!(gamma_value, 4.0 / 2.0, max_relative = 1e-12);

        // Ω = 2 · 2^1 / (3 · Γ(2)) = 4/3
        let omega = density_of_states(ComputationMode::Dimensionless, &p, 6.0);
        assert_relative_eq!(omega, 4.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_energy() {
        let one = params(1, 0.0);
        // E^0 = 1 even at E = 0
        assert_relative_eq!(
            density_of_states(ComputationMode::Dimensionless, &one, 0.0),
            1.0,
            max_relative = 1e-12
        );
        assert_eq!(phase_space_volume(ComputationMode::Dimensionless, &one, 0.0), 0.0);

        let two = params(2, 0.0);
        let model = HarmonicOscillators::new(two, ComputationMode::Dimensional);
        let result = model.evaluate();
        assert_eq!(result.density, 0.0);
        assert_eq!(result.entropy, f64::NEG_INFINITY);
    }

    #[test]
    fn test_modes_agree_when_m_omega_equals_nu() {
        let p = SystemParameters::new(4, 7.5, 1.0 / (2.0 * PI), 1.3, 0.7).unwrap();
        for energy in [0.01, 1.0, 7.5, 15.0] {
            assert_relative_eq!(
                phase_space_volume(ComputationMode::Dimensional, &p, energy),
                phase_space_volume(ComputationMode::Dimensionless, &p, energy),
                max_relative = 1e-10
            );
            assert_relative_eq!(
                density_of_states(ComputationMode::Dimensional, &p, energy),
                density_of_states(ComputationMode::Dimensionless, &p, energy),
                max_relative = 1e-10
            );
        }
    }

    #[test]
    fn test_density_is_n_times_volume_derivative() {
        let step = 1e-5;
        for n in [1u32, 2, 5] {
            let p = SystemParameters::new(n, 3.0, 2.0, 0.8, 1.1).unwrap();
            for mode in ComputationMode::ALL {
                let model = HarmonicOscillators::new(p, mode);
                let derivative = (model.phase_space_volume(3.0 + step)
                    - model.phase_space_volume(3.0 - step))
                    / (2.0 * step);
                assert_relative_eq!(
                    model.density_of_states(3.0),
                    n as f64 * derivative,
                    max_relative = 1e-6
                );
            }
        }
    }

    #[test]
    fn test_large_system_stays_finite() {
        let p = params(100, 20.0);
        for mode in ComputationMode::ALL {
            let result = HarmonicOscillators::new(p, mode).evaluate();
            assert!(result.volume.is_finite() && result.volume >= 0.0);
            assert!(result.density.is_finite() && result.density >= 0.0);
        }
    }

    #[test]
    fn test_model_metadata() {
        let model = HarmonicOscillators::new(params(2, 1.0), ComputationMode::Dimensional);
        assert_eq!(model.mode(), ComputationMode::Dimensional);
        assert_eq!(model.reference_energy(), 1.0);
        assert_eq!(model.name(), "Harmonic oscillators (dimensional)");

        let model = model.with_mode(ComputationMode::Dimensionless);
        assert_eq!(model.name(), "Harmonic oscillators (dimensionless)");
    }
}
