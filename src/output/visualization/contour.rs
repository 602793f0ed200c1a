//! Phase-space contour plotting
//!
//! Draws the ellipse H(p, x) = E of a single oscillator in the (x, p) plane.
//! Both axes are symmetric around zero and extend 10% beyond the turning
//! points.
//!
//! # Usage
//!
//! ```rust,ignore
//! use harmonic_rs::models::PhaseSpaceContour;
//! use harmonic_rs::output::visualization::plot_phase_space_contour;
//!
//! let contour = PhaseSpaceContour::for_parameters(&params)?;
//! plot_phase_space_contour(&contour, "ellipse.png", None)?;
//! ```

use plotters::prelude::*;
use std::error::Error;

use super::config::{PlotConfig, NO_TITLE};
use super::Backend;
use crate::models::PhaseSpaceContour;

/// Axis extent relative to the turning point
const AXIS_MARGIN: f64 = 1.1;

/// Plot the energy ellipse of a single oscillator
///
/// # Arguments
///
/// * `contour`     - Contour built for N = 1
/// * `output_path` - Output file path (`.png` → bitmap, `.svg` → vector)
/// * `config`      - Optional plot configuration; `None` uses
///                   [`PlotConfig::phase_space_contour`]
///
/// # Errors
///
/// Returns `Err` if the contour is empty or the backend cannot write to
/// `output_path`.
pub fn plot_phase_space_contour(
    contour: &PhaseSpaceContour,
    output_path: &str,
    config: Option<&PlotConfig>,
) -> Result<(), Box<dyn Error>> {
    if contour.is_empty() {
        return Err("Contour has no points".into());
    }

    let default_config = PlotConfig::phase_space_contour(NO_TITLE);
    let config = config.unwrap_or(&default_config);

    let x_extent = axis_extent(contour.x_max());
    let p_extent = axis_extent(contour.p_max());

    log::debug!(
        "Plotting phase-space contour (E = {}, {} points) to {}",
        contour.energy(),
        contour.len(),
        output_path
    );

    match Backend::from_path(output_path) {
        Backend::Svg => {
            let backend = SVGBackend::new(output_path, (config.width, config.height));
            plot_contour_impl(backend, contour, config, x_extent, p_extent)
        }
        Backend::Bitmap => {
            let backend = BitMapBackend::new(output_path, (config.width, config.height));
            plot_contour_impl(backend, contour, config, x_extent, p_extent)
        }
    }
}

/// Half-width of a symmetric axis; a zero-energy contour still gets `[-1, 1]`
fn axis_extent(turning_point: f64) -> f64 {
    if turning_point > 0.0 {
        turning_point * AXIS_MARGIN
    } else {
        1.0
    }
}

fn plot_contour_impl<DB: DrawingBackend>(
    backend: DB,
    contour: &PhaseSpaceContour,
    config: &PlotConfig,
    x_extent: f64,
    p_extent: f64,
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
        .y_label_area_size(60)
        .build_cartesian_2d(-x_extent..x_extent, -p_extent..p_extent)?;

    let formatter = |v: &f64| format!("{:.2}", v);

    let mut mesh = chart.configure_mesh();
    mesh.x_desc(&config.xlabel)
        .y_desc(&config.ylabel)
        .x_label_formatter(&formatter)
        .y_label_formatter(&formatter);
    if !config.show_grid {
        mesh.disable_mesh();
    }
    mesh.draw()?;

    let color = config.line_color;
    chart
        .draw_series(LineSeries::new(
            contour.iter(),
            ShapeStyle::from(&color).stroke_width(config.line_width),
        ))?
        .label(config.legend.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::SystemParameters;
    use tempfile::tempdir;

    #[test]
    fn test_axis_extent() {
        assert!((axis_extent(2.0) - 2.2).abs() < 1e-12);
        assert_eq!(axis_extent(0.0), 1.0);
    }

    #[test]
    fn test_plot_rejects_empty_contour() {
        let params = SystemParameters::new(1, 1.0, 1.0, 1.0, 1.0).unwrap();
        let contour = PhaseSpaceContour::new(&params, 0).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.png");

        assert!(plot_phase_space_contour(&contour, path.to_str().unwrap(), None).is_err());
    }

    #[test]
    fn test_plot_contour_png() {
        let params = SystemParameters::new(1, 2.0, 0.5, 3.0, 1.0).unwrap();
        let contour = PhaseSpaceContour::for_parameters(&params).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("ellipse.png");
        let path = path.to_str().unwrap();

        plot_phase_space_contour(&contour, path, None).unwrap();
        assert!(std::fs::metadata(path).unwrap().len() > 0);
    }

    #[test]
    fn test_plot_contour_svg() {
        let params = SystemParameters::new(1, 10.0, 1.0, 1.0, 1.0).unwrap();
        let contour = PhaseSpaceContour::for_parameters(&params).unwrap();
        let dir = tempdir().unwrap();
        let path = dir.path().join("ellipse.svg");
        let path = path.to_str().unwrap();

        plot_phase_space_contour(&contour, path, None).unwrap();
        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("H(p, x) = E"));
    }
}
