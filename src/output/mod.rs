//! Output of oscillator results
//!
//! - **Visualization**: PNG/SVG plots using plotters
//! - **Export**: CSV data for external analysis
//!
//! # Architecture
//!
//! ```text
//! output/
//! ├── mod.rs              ← This file
//! ├── visualization/      ← Plots
//! │   ├── mod.rs
//! │   ├── config.rs
//! │   ├── curves.rs
//! │   └── contour.rs
//! └── export/             ← Data export
//!     ├── mod.rs
//!     └── csv.rs
//! ```
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use harmonic_rs::output::{export_energy_curve_csv, plot_density_of_states};
//!
//! let report = Report::compute(params, ComputationMode::Dimensional)?;
//!
//! plot_density_of_states(&report.curve, params.oscillators(), "omega.png", None)?;
//! export_energy_curve_csv(&report.curve, "curve.csv", None)?;
//! ```
//!
//! Both sub-modules take the result types directly (`EnergyCurve`,
//! `PhaseSpaceContour`) and return `Result<(), Box<dyn Error>>`.

pub mod export;
pub mod visualization;

pub use visualization::{
    plot_curves_comparison,
    plot_density_of_states,
    plot_phase_space_contour,
    plot_phase_space_volume,
    PlotConfig,
};

pub use export::{export_contour_csv, export_energy_curve_csv, CsvConfig, CsvMetadata};
