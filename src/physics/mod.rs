//! Physics layer
//!
//! This module provides the traits and value types shared by every
//! statistical model of the crate.
//!
//! # Core Concepts
//!
//! - **System parameters**: N, E, m, ν, h, validated once on construction
//! - **Computation mode**: the unit convention (`Dimensional` or
//!   `Dimensionless`) a model evaluates under
//! - **Statistical model**: evaluates Γ(E) and Ω(E); S follows from Ω
//!
//! # Architecture
//!
//! Physical models are **separate from energy sampling**:
//! - The model provides the **formulas** (physics)
//! - The sampler provides the **grid** they are evaluated on (numerics)
//!
//! # Example
//!
//! ```rust
//! use harmonic_rs::physics::{ComputationMode, StatisticalModel, SystemParameters};
//! use harmonic_rs::models::HarmonicOscillators;
//!
//! let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0).unwrap();
//! let model = HarmonicOscillators::new(params, ComputationMode::Dimensionless);
//!
//! let result = model.evaluate();
//! assert!((result.volume - 10.0).abs() < 1e-12);
//! assert!((result.density - 1.0).abs() < 1e-12);
//! assert!(result.entropy.abs() < 1e-12);
//! ```

pub mod constants;
pub mod data;
pub mod error;
pub mod parameters;
pub mod traits;

// re-export commonly used types for convenience
pub use constants::BOLTZMANN_CONSTANT;
pub use data::{format_scientific, EnergyCurve, EnergySample, PhaseSpaceResult};
pub use error::ParameterError;
pub use parameters::SystemParameters;
pub use traits::{entropy, ComputationMode, Observable, StatisticalModel};
