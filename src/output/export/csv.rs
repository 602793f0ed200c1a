//! CSV export of energy curves and phase-space contours
//!
//! The files open in spreadsheets, pandas, gnuplot and most data tools.
//!
//! # Features
//!
//! - **Metadata support**: Optional `#` comment header with the system parameters
//! - **Customizable**: Delimiter, decimal separator, precision
//! - **Faithful values**: Non-finite Ω or Γ are written as `inf` / `NaN`
//!
//! # Quick Examples
//!
//! ## Energy curve
//!
//! ```rust,ignore
//! use harmonic_rs::output::export::export_energy_curve_csv;
//!
//! let report = Report::compute(params, ComputationMode::Dimensional)?;
//! export_energy_curve_csv(&report.curve, "curve.csv", None)?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! energy,omega,gamma
//! 0.010000,0.000002,0.000000
//! ...
//! ```
//!
//! ## With Metadata
//!
//! ```rust,ignore
//! use harmonic_rs::output::export::{export_energy_curve_csv, CsvConfig, CsvMetadata};
//!
//! let config = CsvConfig::default()
//!     .with_metadata(CsvMetadata::from_report(&report));
//!
//! export_energy_curve_csv(&report.curve, "curve.csv", Some(&config))?;
//! ```
//!
//! **Output** (`curve.csv`):
//! ```csv
//! # Harmonic Oscillator Phase-Space Data
//! # Generated: 2026-02-11T15:30:00+00:00
//! # Model: Harmonic oscillators (dimensional)
//! # Mode: Full (with units)
//! # Oscillators: 3
//! # Energy: 10
//! ...
//! #
//! energy,omega,gamma
//! ...
//! ```
//!
//! ## Contour
//!
//! ```rust,ignore
//! if let Some(contour) = &report.contour {
//!     export_contour_csv(contour, "ellipse.csv", Some(&CsvConfig::european()))?;
//! }
//! ```

use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};

use crate::models::PhaseSpaceContour;
use crate::physics::{ComputationMode, EnergyCurve, StatisticalModel, SystemParameters};
use crate::report::Report;

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust,ignore
/// let config = CsvConfig {
///     delimiter: ';',
///     precision: 10,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct CsvConfig {
    /// Column delimiter (default: ',')
    pub delimiter: char,

    /// Decimal separator (default: '.')
    pub decimal_separator: char,

    /// Number of decimal places for floating-point values (default: 6)
    pub precision: usize,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ',',
            decimal_separator: '.',
            precision: 6,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// European CSV format: `;` between columns, `,` as decimal point
    pub fn european() -> Self {
        Self {
            delimiter: ';',
            decimal_separator: ',',
            ..Default::default()
        }
    }

    /// 12 decimal places
    pub fn high_precision() -> Self {
        Self {
            precision: 12,
            ..Default::default()
        }
    }

    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set precision
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are `Some` appear in the header.
#[derive(Debug, Clone, Default)]
pub struct CsvMetadata {
    /// Model name (e.g. "Harmonic oscillators (dimensional)")
    pub model_name: Option<String>,

    /// Computation mode label
    pub mode: Option<String>,

    /// Number of oscillators N
    pub oscillators: Option<u32>,

    /// Reference energy E
    pub energy: Option<f64>,

    /// Mass m
    pub mass: Option<f64>,

    /// Frequency ν (Hz)
    pub frequency: Option<f64>,

    /// Planck constant h
    pub planck: Option<f64>,

    /// Number of rows in the data section
    pub sample_count: Option<usize>,

    /// Additional custom parameters
    pub custom: Vec<(String, String)>,
}

impl CsvMetadata {
    /// Metadata describing `parameters` evaluated in `mode`
    pub fn from_parameters(parameters: &SystemParameters, mode: ComputationMode) -> Self {
        Self {
            mode: Some(mode.label().to_string()),
            oscillators: Some(parameters.oscillators()),
            energy: Some(parameters.energy()),
            mass: Some(parameters.mass()),
            frequency: Some(parameters.frequency()),
            planck: Some(parameters.planck()),
            ..Default::default()
        }
    }

    /// Metadata for the curve of a report
    pub fn from_report(report: &Report) -> Self {
        let model = crate::models::HarmonicOscillators::new(report.parameters, report.mode);
        Self {
            model_name: Some(model.name().to_string()),
            sample_count: Some(report.curve.len()),
            ..Self::from_parameters(&report.parameters, report.mode)
        }
    }

    /// Add custom parameter
    pub fn add_custom(&mut self, key: String, value: String) {
        self.custom.push((key, value));
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Write metadata header comments
fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> Result<(), Box<dyn Error>> {
    writeln!(out, "# Harmonic Oscillator Phase-Space Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(mode) = &metadata.mode {
        writeln!(out, "# Mode: {}", mode)?;
    }

    // System parameters
    if let Some(n) = metadata.oscillators {
        writeln!(out, "# Oscillators: {}", n)?;
    }
    if let Some(energy) = metadata.energy {
        writeln!(out, "# Energy: {}", energy)?;
    }
    if let Some(mass) = metadata.mass {
        writeln!(out, "# Mass: {}", mass)?;
    }
    if let Some(frequency) = metadata.frequency {
        writeln!(out, "# Frequency: {} Hz", frequency)?;
    }
    if let Some(planck) = metadata.planck {
        writeln!(out, "# Planck constant: {}", planck)?;
    }
    if let Some(samples) = metadata.sample_count {
        writeln!(out, "# Samples: {}", samples)?;
    }

    for (key, value) in &metadata.custom {
        writeln!(out, "# {}: {}", key, value)?;
    }

    writeln!(out, "#")?;

    Ok(())
}

/// Format number with configured precision and decimal separator
fn format_number(value: f64, config: &CsvConfig) -> String {
    let formatted = format!("{:.prec$}", value, prec = config.precision);

    if config.decimal_separator != '.' {
        formatted.replace('.', &config.decimal_separator.to_string())
    } else {
        formatted
    }
}

/// Open `output_path` and write the metadata block and column header
fn open_with_header(
    output_path: &str,
    columns: &[&str],
    config: &CsvConfig,
) -> Result<BufWriter<File>, Box<dyn Error>> {
    let mut out = BufWriter::new(File::create(output_path)?);

    if config.include_metadata
        && let Some(metadata) = &config.metadata
    {
        write_metadata_header(&mut out, metadata)?;
    }

    writeln!(out, "{}", columns.join(&config.delimiter.to_string()))?;

    Ok(out)
}

fn write_row<W: Write>(out: &mut W, values: &[f64], config: &CsvConfig) -> Result<(), Box<dyn Error>> {
    let row: Vec<String> = values.iter().map(|v| format_number(*v, config)).collect();
    writeln!(out, "{}", row.join(&config.delimiter.to_string()))?;
    Ok(())
}

// =============================================================================
// Export Functions
// =============================================================================

/// Export an energy curve: one row `energy, Ω(E), Γ(E)` per sample
///
/// # Errors
///
/// - Empty curve
/// - NaN or Inf energy
/// - File creation or write errors
///
/// Non-finite Ω or Γ values are not errors; they are written as-is.
///
/// # Example
///
/// ```rust,ignore
/// export_energy_curve_csv(&report.curve, "curve.csv", None)?;
/// ```
pub fn export_energy_curve_csv(
    curve: &EnergyCurve,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {

    // ============================= Validation =============================

    if curve.is_empty() {
        return Err("Empty data: energy curve has no samples".into());
    }

    if curve.energies().iter().any(|e| !e.is_finite()) {
        return Err("Invalid data: NaN or Inf detected in energy column".into());
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    // ============================= Write ==================================

    let mut out = open_with_header(output_path, &["energy", "omega", "gamma"], configuration)?;

    for sample in curve.samples() {
        write_row(&mut out, &[sample.energy, sample.density, sample.volume], configuration)?;
    }

    out.flush()?;

    log::debug!("Exported {} curve samples to {}", curve.len(), output_path);

    Ok(())
}

/// Export a phase-space contour: one row `x, p` per point
///
/// # Errors
///
/// - Empty contour
/// - File creation or write errors
pub fn export_contour_csv(
    contour: &PhaseSpaceContour,
    output_path: &str,
    configuration: Option<&CsvConfig>,
) -> Result<(), Box<dyn Error>> {
    if contour.is_empty() {
        return Err("Empty data: contour has no points".into());
    }

    let binding = CsvConfig::default();
    let configuration = configuration.unwrap_or(&binding);

    let mut out = open_with_header(output_path, &["x", "p"], configuration)?;

    for (x, p) in contour.iter() {
        write_row(&mut out, &[x, p], configuration)?;
    }

    out.flush()?;

    log::debug!("Exported {} contour points to {}", contour.len(), output_path);

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
