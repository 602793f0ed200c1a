//! Export of oscillator results to data files
//!
//! # Available formats
//!
//! | Format  | Module   | Functions |
//! |---------|----------|-----------|
//! | CSV     | [`csv`]  | [`export_energy_curve_csv`], [`export_contour_csv`] |
//!
//! # Usage example
//!
//! ```rust,ignore
//! use harmonic_rs::output::export::{export_energy_curve_csv, CsvConfig, CsvMetadata};
//!
//! let report = Report::compute(params, ComputationMode::Dimensionless)?;
//! let config = CsvConfig::default().with_metadata(CsvMetadata::from_report(&report));
//!
//! export_energy_curve_csv(&report.curve, "curve.csv", Some(&config))?;
//! ```

pub mod csv;

// Re-export so users can write `use harmonic_rs::output::export::{CsvConfig, ...}`
pub use csv::{export_contour_csv, export_energy_curve_csv, CsvConfig, CsvMetadata};
