//! Visualization of oscillator results
//!
//! This module renders the energy curves and the phase-space contour using
//! the `plotters` library.
//!
//! # Organization
//!
//! - **config**: Shared plot configuration (`PlotConfig`)
//! - **curves**: Energy plots (Ω(E), Γ(E), comparisons)
//! - **contour**: Phase-space ellipse for a single oscillator
//!
//! # Quick Start
//!
//! ## Energy curves
//!
//! ```rust,ignore
//! use harmonic_rs::output::visualization::{plot_density_of_states, PlotConfig};
//!
//! let report = Report::compute(params, ComputationMode::Dimensional)?;
//!
//! // Default config
//! plot_density_of_states(&report.curve, 3, "omega.png", None)?;
//!
//! // Custom config
//! let mut config = PlotConfig::density_of_states(3, "Three oscillators");
//! config.line_width = 3;
//! plot_density_of_states(&report.curve, 3, "omega.svg", Some(&config))?;
//! ```
//!
//! ## Phase-space contour (N = 1)
//!
//! ```rust,ignore
//! use harmonic_rs::output::visualization::plot_phase_space_contour;
//!
//! if let Some(contour) = &report.contour {
//!     plot_phase_space_contour(contour, "ellipse.png", None)?;
//! }
//! ```
//!
//! # When to Use Which Module
//!
//! | Use Case | Module | Function |
//! |----------|--------|----------|
//! | Density of states | `curves` | `plot_density_of_states` |
//! | Phase-space volume | `curves` | `plot_phase_space_volume` |
//! | Compare modes or N | `curves` | `plot_curves_comparison` |
//! | Energy ellipse | `contour` | `plot_phase_space_contour` |

pub mod config;
pub mod contour;
pub mod curves;

pub use config::{IntoOptionalTitle, PlotConfig, NO_TITLE};

pub use curves::{plot_curves_comparison, plot_density_of_states, plot_phase_space_volume};

pub use contour::plot_phase_space_contour;

// =================================================================================================
// Shared helpers
// =================================================================================================

/// Drawing backend selected from the output file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    Svg,
    Bitmap,
}

impl Backend {
    /// `.svg` (any case) selects the vector backend, anything else a bitmap
    pub(crate) fn from_path(path: &str) -> Self {
        let is_svg = std::path::Path::new(path)
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));

        if is_svg { Backend::Svg } else { Backend::Bitmap }
    }
}

/// Pair `xs` with `ys`, dropping points where either coordinate is non-finite
pub(crate) fn finite_points(xs: &[f64], ys: &[f64]) -> Vec<(f64, f64)> {
    xs.iter()
        .zip(ys.iter())
        .filter(|(x, y)| x.is_finite() && y.is_finite())
        .map(|(&x, &y)| (x, y))
        .collect()
}

/// `[min, max]` of `values`, widened by `margin_fraction` of the span
///
/// A degenerate span (single value, constant curve) is widened by one unit
/// (or by the value's magnitude when larger) so the chart still has an
/// extent. Returns `None` for an empty iterator.
pub(crate) fn padded_range(
    values: impl Iterator<Item = f64>,
    margin_fraction: f64,
) -> Option<(f64, f64)> {
    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })?;

    let span = max - min;
    if span <= 0.0 {
        let pad = min.abs().max(1.0) * 0.5;
        return Some((min - pad, max + pad));
    }

    let margin = span * margin_fraction;
    Some((min - margin, max + margin))
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_extension() {
        assert_eq!(Backend::from_path("plot.svg"), Backend::Svg);
        assert_eq!(Backend::from_path("out/PLOT.SVG"), Backend::Svg);
        assert_eq!(Backend::from_path("plot.png"), Backend::Bitmap);
        assert_eq!(Backend::from_path("plot"), Backend::Bitmap);
    }

    #[test]
    fn test_finite_points_skips_singularities() {
        let xs = [0.0, 1.0, 2.0, 3.0];
        let ys = [f64::INFINITY, 1.0, f64::NAN, 9.0];

        assert_eq!(finite_points(&xs, &ys), vec![(1.0, 1.0), (3.0, 9.0)]);
    }

    #[test]
    fn test_padded_range() {
        assert_eq!(padded_range([0.0, 10.0].into_iter(), 0.1), Some((-1.0, 11.0)));
        assert_eq!(padded_range([2.0, 5.0].into_iter(), 0.0), Some((2.0, 5.0)));
        assert!(padded_range(std::iter::empty(), 0.1).is_none());
    }

    #[test]
    fn test_padded_range_degenerate_span() {
        assert_eq!(padded_range([1.0].into_iter(), 0.05), Some((0.5, 1.5)));
        assert_eq!(padded_range([4.0, 4.0].into_iter(), 0.05), Some((2.0, 6.0)));
        assert_eq!(padded_range([0.0].into_iter(), 0.05), Some((-0.5, 0.5)));
    }
}
