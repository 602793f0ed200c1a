//! Energy-curve plotting
//!
//! Line plots of Ω(E) and Γ(E) over the sampled energy range.
//!
//! # Available functions
//!
//! - [`plot_density_of_states`]  - Ω vs E
//! - [`plot_phase_space_volume`] - Γ vs E (green)
//! - [`plot_curves_comparison`]  - overlay one observable of several curves
//!
//! Non-finite samples (gamma poles, overflow) are skipped when drawing so
//! the finite part of the curve stays readable.
//!
//! # Usage
//!
//! ```rust,ignore
//! use harmonic_rs::output::visualization::{plot_density_of_states, plot_phase_space_volume};
//!
//! let report = Report::compute(params, ComputationMode::Dimensional)?;
//! plot_density_of_states(&report.curve, 3, "omega.png", None)?;
//! plot_phase_space_volume(&report.curve, 3, "gamma.svg", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::{finite_points, padded_range, Backend};
use crate::physics::{EnergyCurve, Observable};

// =================================================================================================
// Public API
// =================================================================================================

/// Plot the density of states Ω(E)
///
/// # Arguments
///
/// * `curve`       - Sampled energy curve
/// * `oscillators` - N, used in the default title
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses defaults
///
/// # Errors
///
/// Returns `Err` if the curve has no finite sample or the backend cannot
/// write to `output_path`.
pub fn plot_density_of_states(
    curve: &EnergyCurve,
    oscillators: u32,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::density_of_states(oscillators, NO_TITLE);
    let config = config.unwrap_or(&default_config);
    plot_curves_comparison(
        &[(config.legend.as_str(), curve)],
        Observable::DensityOfStates,
        output_path,
        Some(&single_series(config)),
    )
}

/// Plot the cumulative phase-space volume Γ(E)
///
/// Same arguments and errors as [`plot_density_of_states`].
pub fn plot_phase_space_volume(
    curve: &EnergyCurve,
    oscillators: u32,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    let default_config = PlotConfig::phase_space_volume(oscillators, NO_TITLE);
    let config = config.unwrap_or(&default_config);
    plot_curves_comparison(
        &[(config.legend.as_str(), curve)],
        Observable::PhaseSpaceVolume,
        output_path,
        Some(&single_series(config)),
    )
}

/// Overlay one observable of several curves on the same axes
///
/// Useful to compare the two computation modes, or several N.
/// `Observable::Entropy` plots S = ln Ω.
///
/// # Arguments
///
/// * `curves`      - `(legend label, curve)` pairs
/// * `observable`  - Quantity to draw on the y axis
/// * `output_path` - Output file path (`.png` or `.svg`)
/// * `config`      - Optional plot configuration; series colors come from
///                   `config.series_colors` or the default palette
///
/// # Example
///
/// ```rust,ignore
/// plot_curves_comparison(
///     &[("Dimensional", &dimensional.curve), ("Dimensionless", &dimensionless.curve)],
///     Observable::PhaseSpaceVolume,
///     "modes.png",
///     None,
/// )?;
/// ```
pub fn plot_curves_comparison(
    curves: &[(&str, &EnergyCurve)],
    observable: Observable,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if curves.is_empty() {
        return Err("No curves provided".into());
    }

    let default_config = PlotConfig::for_observable(observable);
    let config = config.unwrap_or(&default_config);

    // ====== Extract finite series ======

    let series: Vec<(&str, Vec<(f64, f64)>)> = curves
        .iter()
        .map(|(label, curve)| {
            let values = match observable {
                Observable::DensityOfStates => curve.densities().to_vec(),
                Observable::PhaseSpaceVolume => curve.volumes().to_vec(),
                Observable::Entropy => curve.entropies(),
            };
            (*label, finite_points(curve.energies(), &values))
        })
        .collect();

    let x_range = padded_range(series.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.0)), 0.0)
        .ok_or("No finite samples to plot")?;
    let y_range = padded_range(series.iter().flat_map(|(_, pts)| pts.iter().map(|p| p.1)), 0.05)
        .ok_or("No finite samples to plot")?;

    log::debug!(
        "Plotting {} series of {} to {}",
        series.len(),
        observable.symbol(),
        output_path
    );

    match Backend::from_path(output_path) {
        Backend::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_curves_impl(backend, &series, config, x_range, y_range)
        }
        Backend::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_curves_impl(backend, &series, config, x_range, y_range)
        }
    }
}

// =================================================================================================
// Implementation
// =================================================================================================

/// Single-series config: the palette's first color is the config's line color
fn single_series(config: &PlotConfig) -> PlotConfig {
    let mut config = config.clone();
    config.series_colors = Some(vec![config.line_color]);
    config
}

/// Implementation for curve plotting with concrete backend
fn plot_curves_impl<DB: DrawingBackend>(
    backend: DB,
    series: &[(&str, Vec<(f64, f64)>)],
    config: &PlotConfig,
    x_range: (f64, f64),
    y_range: (f64, f64),
) -> Result<(), Box<dyn Error>>
where
    DB::ErrorType: 'static,
{
    let root = backend.into_drawing_area();
    root.fill(&config.background)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(&config.title, ("sans-serif", 40).into_font())
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(80)
        .build_cartesian_2d(x_range.0..x_range.1, y_range.0..y_range.1)?;

    let x_formatter = |x: &f64| format!("{:.2}", x);
    let y_formatter = |y: &f64| format!("{:.2e}", y);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&x_formatter)
        .y_label_formatter(&y_formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    for (i, (label, points)) in series.iter().enumerate() {
        let color = config.get_series_color(i);
        chart
            .draw_series(LineSeries::new(
                points.iter().copied(),
                ShapeStyle::from(&color).stroke_width(config.line_width),
            ))?
            .label(*label)
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(config.background.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;

    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
