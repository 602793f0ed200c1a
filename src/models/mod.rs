//! Statistical models
//!
//! All models implement the [`StatisticalModel`](crate::physics::StatisticalModel) trait.
//! The sampler calls `phase_space_volume` and `density_of_states` at each
//! grid energy. Models are responsible for the physics, the sampler for the
//! energy grid.
//!
//! # Available Models
//!
//! ## [`HarmonicOscillators`] - N classical 1-D oscillators
//!
//! Closed-form Γ(E) and Ω(E) under either
//! [`ComputationMode`](crate::physics::ComputationMode). The free functions
//! [`phase_space_volume`] and [`density_of_states`] expose the same formulas
//! with the mode passed explicitly.
//!
//! # Phase-space contour
//!
//! [`PhaseSpaceContour`] is the H(x, p) = E ellipse of a single oscillator.
//! It only exists for N = 1.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod contour;
pub mod oscillators;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use contour::PhaseSpaceContour;
pub use oscillators::{density_of_states, phase_space_volume, HarmonicOscillators};
