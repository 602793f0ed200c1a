//! harmonic-rs: Phase space of classical harmonic oscillators
//!
//! Computes, for N independent one-dimensional harmonic oscillators with
//! Hamiltonian H(p, x) = p²/2m + ½mω²x², the cumulative phase-space volume
//! Γ(E), the density of states Ω(E) and the entropy S(E) = k_B ln Ω(E).
//!
//! # Architecture
//!
//! harmonic-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Sampling**
//!    - Statistical models define the closed-form quantities (what to compute)
//!    - Samplers lay out the energy grid (where to compute them)
//!
//! 2. **Explicit unit convention**
//!    - Every evaluation carries a [`ComputationMode`](physics::ComputationMode):
//!      full units, or energies measured in quanta hν
//!
//! # Quick Start
//!
//! ```rust
//! use harmonic_rs::physics::{ComputationMode, StatisticalModel, SystemParameters};
//! use harmonic_rs::models::HarmonicOscillators;
//! use harmonic_rs::report::Report;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // 1. Validate the inputs
//! let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0)?;
//!
//! // 2. Point values
//! let model = HarmonicOscillators::new(params, ComputationMode::Dimensionless);
//! let result = model.evaluate();
//! assert!((result.volume - 10.0).abs() < 1e-12);
//! assert!(result.entropy.abs() < 1e-12);
//!
//! // 3. Full pass: point values, curves and contour
//! let report = Report::compute(params, ComputationMode::Dimensional)?;
//! println!("{}", report);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: Parameters, result types and the model trait
//! - [`models`]: Harmonic oscillator formulas and the phase-space contour
//! - [`sampling`]: Energy grids and curve sampling
//! - [`report`]: One complete evaluation pass
//! - [`output`]: Plots and CSV export

// Core modules
pub mod physics;

pub mod models;
pub mod sampling;

pub mod output;
pub mod report;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use harmonic_rs::prelude::*;
    //!
    //! let report = Report::compute(SystemParameters::default(), ComputationMode::Dimensional).unwrap();
    //! assert_eq!(report.curve.len(), 500);
    //! ```
    pub use crate::physics::{ComputationMode,
                             EnergyCurve,
                             Observable,
                             ParameterError,
                             PhaseSpaceResult,
                             StatisticalModel,
                             SystemParameters};
    pub use crate::models::{HarmonicOscillators, PhaseSpaceContour};
    pub use crate::sampling::{LinearSampler,
                              Sampler,
                              SamplingConfiguration,
                              Scenario};
    pub use crate::report::Report;
}
