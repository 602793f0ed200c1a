//! System parameters
//!
//! A [`SystemParameters`] value is the complete input of one evaluation:
//! the number of oscillators and the four physical scalars. It is validated
//! on construction; every accessor therefore returns a value that the
//! formulas accept without further checks.

use std::fmt;

use super::constants::{
    DEFAULT_ENERGY, DEFAULT_FREQUENCY, DEFAULT_MASS, DEFAULT_OSCILLATORS, DEFAULT_PLANCK,
    MAX_OSCILLATORS, MIN_OSCILLATORS, TWO_PI,
};
use super::error::ParameterError;

/// Physical parameters of a system of N identical one-dimensional oscillators
///
/// # Fields
///
/// - `oscillators`: N, in `[1, 100]`
/// - `energy`: total energy E (E ≥ 0)
/// - `mass`: particle mass m (m > 0)
/// - `frequency`: natural frequency ν in Hz (ν > 0)
/// - `planck`: Planck constant h (h > 0)
///
/// The angular frequency ω = 2πν is derived, never stored.
///
/// # Example
///
/// ```rust
/// use harmonic_rs::physics::SystemParameters;
///
/// let params = SystemParameters::new(3, 10.0, 1.0, 1.0, 1.0).unwrap();
/// assert!((params.angular_frequency() - 2.0 * std::f64::consts::PI).abs() < 1e-12);
///
/// // Builder style, starting from the calculator defaults
/// let params = SystemParameters::default()
///     .with_oscillators(1)
///     .and_then(|p| p.with_energy(4.0))
///     .unwrap();
/// assert_eq!(params.oscillators(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SystemParameters {
    oscillators: u32,
    energy: f64,
    mass: f64,
    frequency: f64,
    planck: f64,
}

impl SystemParameters {
    /// Create and validate a parameter set
    ///
    /// # Errors
    ///
    /// Returns a [`ParameterError`] when N is outside `[1, 100]`, when E is
    /// negative or not finite, or when m, ν or h is not strictly positive.
    pub fn new(
        oscillators: u32,
        energy: f64,
        mass: f64,
        frequency: f64,
        planck: f64,
    ) -> Result<Self, ParameterError> {
        let params = Self {
            oscillators,
            energy,
            mass,
            frequency,
            planck,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every constraint of the parameter set
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(MIN_OSCILLATORS..=MAX_OSCILLATORS).contains(&self.oscillators) {
            return Err(ParameterError::OscillatorCount {
                value: self.oscillators,
            });
        }

        if !self.energy.is_finite() || self.energy < 0.0 {
            return Err(ParameterError::Energy { value: self.energy });
        }

        for (name, value) in [
            ("mass", self.mass),
            ("frequency", self.frequency),
            ("planck constant", self.planck),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ParameterError::NonPositive { name, value });
            }
        }

        Ok(())
    }

    // ========================================== Accessors ========================================

    /// Number of oscillators N
    pub fn oscillators(&self) -> u32 {
        self.oscillators
    }

    /// Total energy E
    pub fn energy(&self) -> f64 {
        self.energy
    }

    /// Particle mass m
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Natural frequency ν (Hz)
    pub fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Planck constant h
    pub fn planck(&self) -> f64 {
        self.planck
    }

    /// Angular frequency ω = 2πν
    pub fn angular_frequency(&self) -> f64 {
        TWO_PI * self.frequency
    }

    /// Single-oscillator energy quantum hν
    pub fn quantum(&self) -> f64 {
        self.planck * self.frequency
    }

    // =========================================== Builders ========================================

    /// Replace N, re-validating
    pub fn with_oscillators(self, oscillators: u32) -> Result<Self, ParameterError> {
        Self::new(oscillators, self.energy, self.mass, self.frequency, self.planck)
    }

    /// Replace E, re-validating
    pub fn with_energy(self, energy: f64) -> Result<Self, ParameterError> {
        Self::new(self.oscillators, energy, self.mass, self.frequency, self.planck)
    }

    /// Replace m, re-validating
    pub fn with_mass(self, mass: f64) -> Result<Self, ParameterError> {
        Self::new(self.oscillators, self.energy, mass, self.frequency, self.planck)
    }

    /// Replace ν, re-validating
    pub fn with_frequency(self, frequency: f64) -> Result<Self, ParameterError> {
        Self::new(self.oscillators, self.energy, self.mass, frequency, self.planck)
    }

    /// Replace h, re-validating
    pub fn with_planck(self, planck: f64) -> Result<Self, ParameterError> {
        Self::new(self.oscillators, self.energy, self.mass, self.frequency, planck)
    }
}

impl Default for SystemParameters {
    fn default() -> Self {
        Self {
            oscillators: DEFAULT_OSCILLATORS,
            energy: DEFAULT_ENERGY,
            mass: DEFAULT_MASS,
            frequency: DEFAULT_FREQUENCY,
            planck: DEFAULT_PLANCK,
        }
    }
}

impl fmt::Display for SystemParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "N = {}, E = {:.2}, m = {:.2}, ν = {:.2} Hz, h = {:.2}",
            self.oscillators, self.energy, self.mass, self.frequency, self.planck
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
