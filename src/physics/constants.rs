//! Physical and numerical constants
//!
//! Every constant the model depends on lives here, so that no formula reads
//! ambient mutable state. The unit convention of the crate fixes the
//! Boltzmann constant to one: entropies are reported in units of k_B.

use std::f64::consts::PI;

/// Boltzmann constant k_B (unit convention: k_B = 1)
pub const BOLTZMANN_CONSTANT: f64 = 1.0;

/// Full turn in radians, used for ω = 2πν
pub const TWO_PI: f64 = 2.0 * PI;

// =================================================================================================
// Parameter bounds
// =================================================================================================

/// Smallest admissible number of oscillators
pub const MIN_OSCILLATORS: u32 = 1;

/// Largest admissible number of oscillators
pub const MAX_OSCILLATORS: u32 = 100;

// =================================================================================================
// Default system (initial values of the calculator form)
// =================================================================================================

/// Default number of oscillators N
pub const DEFAULT_OSCILLATORS: u32 = 3;

/// Default total energy E
pub const DEFAULT_ENERGY: f64 = 10.0;

/// Default particle mass m
pub const DEFAULT_MASS: f64 = 1.0;

/// Default natural frequency ν (Hz)
pub const DEFAULT_FREQUENCY: f64 = 1.0;

/// Default Planck constant h
pub const DEFAULT_PLANCK: f64 = 1.0;

// =================================================================================================
// Sampling
// =================================================================================================

/// Lower end of the sampled energy range
pub const ENERGY_SAMPLE_MIN: f64 = 0.01;

/// Upper end of the sampled energy range, as a multiple of the reference energy
pub const ENERGY_SPAN_FACTOR: f64 = 2.0;

/// Number of energy samples used for the Ω(E) and Γ(E) curves
pub const DEFAULT_SAMPLE_COUNT: usize = 500;

/// Number of angular samples used for the N = 1 phase-space contour
pub const CONTOUR_SAMPLE_COUNT: usize = 500;

/// Hamiltonian of a single oscillator, in LaTeX
pub const HAMILTONIAN_LATEX: &str =
    r"H = \sum_{i=1}^N \left( \frac{p_i^2}{2m} + \frac{1}{2} m (2\pi \nu)^2 x_i^2 \right)";
