//! Statistical model traits and types
//!
//! This module defines the core API of the physics layer:
//! - `ComputationMode`: the unit convention a model evaluates under
//! - `Observable`: type-safe identifiers for the computed quantities
//! - `StatisticalModel`: trait for every model exposing Γ(E) and Ω(E)
//! - `entropy`: S = k_B·ln Ω

use std::fmt;

use super::constants::BOLTZMANN_CONSTANT;
use super::data::PhaseSpaceResult;

// =================================================================================================
// Computation mode (unit convention)
// =================================================================================================

/// Unit convention used to evaluate Γ(E) and Ω(E)
///
/// The two conventions are physically equivalent but numerically distinct:
///
/// | Mode            | Γ(E)                                   |
/// |-----------------|----------------------------------------|
/// | `Dimensional`   | E^N / (h^N (mω)^N Γ(N+1))              |
/// | `Dimensionless` | (E / hν)^N / Γ(N+1)                    |
///
/// A mode is fixed for a whole evaluation: Γ and Ω reported together are
/// always computed under the same variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ComputationMode {
    /// Full expression carrying the units of m, ω and h
    #[default]
    Dimensional,

    /// Energy measured in units of the quantum hν
    Dimensionless,
}

impl ComputationMode {
    /// Both modes, in display order
    pub const ALL: [ComputationMode; 2] = [ComputationMode::Dimensional, ComputationMode::Dimensionless];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            ComputationMode::Dimensional => "Full (with units)",
            ComputationMode::Dimensionless => "Dimensionless (E / hν)^N",
        }
    }

    /// Phase-space volume formula of this mode, in LaTeX
    pub fn volume_formula(&self) -> &'static str {
        match self {
            ComputationMode::Dimensional => {
                r"\Gamma_N(E) = \frac{E^N}{h^N (m \omega)^N \Gamma(N+1)} \quad \text{where } \omega = 2\pi \nu"
            }
            ComputationMode::Dimensionless => {
                r"\Gamma_N(E) = \frac{1}{\Gamma(N+1)} \left( \frac{E}{h \nu} \right)^N"
            }
        }
    }
}

impl fmt::Display for ComputationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =================================================================================================
// Observables (type-safe identifiers)
// =================================================================================================

/// Quantities computed by a statistical model
///
/// Used for plot labels and export headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Observable {
    /// Cumulative phase-space volume Γ(E)
    PhaseSpaceVolume,

    /// Density of states Ω(E)
    DensityOfStates,

    /// Entropy S(E)
    Entropy,
}

impl Observable {
    /// Short symbol, e.g. `Ω(E)`
    pub fn symbol(&self) -> &'static str {
        match self {
            Observable::PhaseSpaceVolume => "Γ(E)",
            Observable::DensityOfStates => "Ω(E)",
            Observable::Entropy => "S(E)",
        }
    }

    /// Full name
    pub fn name(&self) -> &'static str {
        match self {
            Observable::PhaseSpaceVolume => "Phase-space volume",
            Observable::DensityOfStates => "Density of states",
            Observable::Entropy => "Entropy",
        }
    }
}

impl fmt::Display for Observable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.symbol())
    }
}

// =================================================================================================
// Entropy
// =================================================================================================

/// Entropy S = k_B·ln Ω
///
/// Not guarded: Ω = 0 gives −∞ and Ω < 0 gives NaN, so that the anomaly
/// reaches the display layer.
///
/// # Example
///
/// ```rust
/// use harmonic_rs::physics::entropy;
///
/// assert_eq!(entropy(1.0), 0.0);
/// assert!((entropy(std::f64::consts::E) - 1.0).abs() < 1e-12);
/// assert!(entropy(0.0).is_infinite());
/// ```
#[inline]
pub fn entropy(density: f64) -> f64 {
    BOLTZMANN_CONSTANT * density.ln()
}

// =================================================================================================
// Statistical Model Trait
// =================================================================================================

/// Trait for statistical models of a microcanonical ensemble
///
/// # Responsibility
///
/// Evaluates the phase-space volume Γ(E) and the density of states Ω(E)
/// at any energy, for a fixed set of system parameters and a fixed
/// computation mode. Sampling over an energy range is the sampler's job.
///
/// Implementations must be pure: the same energy always yields the same
/// values, and evaluations may run concurrently.
pub trait StatisticalModel: Send + Sync {
    /// Cumulative phase-space volume Γ(E)
    fn phase_space_volume(&self, energy: f64) -> f64;

    /// Density of states Ω(E)
    fn density_of_states(&self, energy: f64) -> f64;

    /// Reference energy of the system (the E the user asked about)
    fn reference_energy(&self) -> f64;

    /// Name of the model (used to display and logging)
    fn name(&self) -> &str;

    /// Mode the model evaluates under
    fn mode(&self) -> ComputationMode;

    /// Entropy S(E) = k_B·ln Ω(E)
    fn entropy_at(&self, energy: f64) -> f64 {
        entropy(self.density_of_states(energy))
    }

    /// Γ, Ω and S at the reference energy
    fn evaluate(&self) -> PhaseSpaceResult {
        let energy = self.reference_energy();
        PhaseSpaceResult::from_volume_and_density(
            self.phase_space_volume(energy),
            self.density_of_states(energy),
        )
    }
}

// =================================================================================================
// Tests
// =================================================================================================
