//! Plot configuration shared across visualization modules
//!
//! This module defines the configuration used by the energy-curve plots
//! and the phase-space contour plot.

use plotters::prelude::*;

use crate::physics::Observable;

/// Configuration for customizing plots
///
/// # Fields
///
/// - `width`, `height`: Dimensions in pixels
/// - `title`: Plot title
/// - `xlabel`, `ylabel`: Axis labels
/// - `legend`: Legend label of the main series
/// - `line_color`: Line color for single-series plots
/// - `series_colors`: Optional colors for comparison plots (one per series)
/// - `background`: Background color
/// - `line_width`: Line thickness in pixels
/// - `show_grid`: Whether to show grid lines
///
/// # Example
///
/// ```rust,ignore
/// use harmonic_rs::output::visualization::PlotConfig;
/// use plotters::prelude::*;
///
/// let mut config = PlotConfig::density_of_states(3, NO_TITLE);
/// config.line_color = RED;
/// config.width = 1920;
/// config.height = 1080;
/// ```
#[derive(Clone)]
pub struct PlotConfig {
    /// Image width in pixels (default: 1024)
    pub width: u32,

    /// Image height in pixels (default: 768)
    pub height: u32,

    /// Plot title (default: "Plot")
    pub title: String,

    /// X-axis label (default: "Energy E")
    pub xlabel: String,

    /// Y-axis label (default: empty, set by plot type)
    pub ylabel: String,

    /// Legend label of the main series (default: empty, set by plot type)
    pub legend: String,

    /// Line color for single-series plots (default: BLUE)
    pub line_color: RGBColor,

    /// Optional colors for comparison plots (one per series)
    ///
    /// If None, uses default palette: [BLUE, GREEN, RED, MAGENTA, CYAN, ...]
    pub series_colors: Option<Vec<RGBColor>>,

    /// Background color (default: WHITE)
    pub background: RGBColor,

    /// Line width in pixels (default: 2)
    pub line_width: u32,

    /// Show grid lines (default: true)
    pub show_grid: bool,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            title: "Plot".to_string(),
            xlabel: "Energy E".to_string(),
            ylabel: String::new(),
            legend: String::new(),
            line_color: BLUE,
            series_colors: None,
            background: WHITE,
            line_width: 2,
            show_grid: true,
        }
    }
}

/// Helper trait to accept both `String` and `None` for optional titles
pub trait IntoOptionalTitle {
    fn into_optional_title(self) -> Option<String>;
}

impl IntoOptionalTitle for &str {
    fn into_optional_title(self) -> Option<String> {
        Some(self.to_string())
    }
}

impl IntoOptionalTitle for String {
    fn into_optional_title(self) -> Option<String> {
        Some(self)
    }
}

impl<T: IntoOptionalTitle> IntoOptionalTitle for Option<T> {
    fn into_optional_title(self) -> Option<String> {
        self.and_then(|t| t.into_optional_title())
    }
}

/// Constant for no title (default title will be used)
///
/// # Example
///
/// ```rust,ignore
/// let config = PlotConfig::density_of_states(3, NO_TITLE);
/// ```
pub const NO_TITLE: Option<&str> = None;

impl PlotConfig {
    /// Create config for Ω(E) plots
    ///
    /// Default title: "Density of states for N = {oscillators}"
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let config = PlotConfig::density_of_states(3, NO_TITLE);
    /// let config = PlotConfig::density_of_states(3, "Ω for three oscillators");
    /// ```
    pub fn density_of_states(oscillators: u32, title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::for_observable(Observable::DensityOfStates);
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| format!("Density of states for N = {}", oscillators));
        config
    }

    /// Create config for Γ(E) plots
    ///
    /// Default title: "Phase-space volume for N = {oscillators}", green line
    pub fn phase_space_volume(oscillators: u32, title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::for_observable(Observable::PhaseSpaceVolume);
        config.line_color = GREEN;
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| format!("Phase-space volume for N = {}", oscillators));
        config
    }

    /// Create config for the N = 1 phase-space contour
    ///
    /// Sets axis labels to position / momentum and legend to "H(p, x) = E"
    pub fn phase_space_contour(title: impl IntoOptionalTitle) -> Self {
        let mut config = Self::default();
        config.xlabel = "x (position)".to_string();
        config.ylabel = "p (momentum)".to_string();
        config.legend = "H(p, x) = E".to_string();
        config.title = title
            .into_optional_title()
            .unwrap_or_else(|| "Energy contour in phase space (N = 1)".to_string());
        config
    }

    /// Base config whose y label and legend name `observable`
    pub fn for_observable(observable: Observable) -> Self {
        let mut config = Self::default();
        config.ylabel = observable.to_string();
        config.legend = observable.symbol().to_string();
        config
    }

    /// Create config for comparison plots with custom colors
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use plotters::prelude::*;
    ///
    /// let config = PlotConfig::series_colors(vec![RED, BLUE]);
    /// ```
    pub fn series_colors(colors: Vec<RGBColor>) -> Self {
        let mut config = Self::default();
        config.series_colors = Some(colors);
        config
    }

    /// Get color for series at index i
    ///
    /// Uses custom colors if provided, otherwise falls back to default palette
    pub(crate) fn get_series_color(&self, series_index: usize) -> RGBColor {
        if let Some(ref colors) = self.series_colors
            && series_index < colors.len()
        {
            return colors[series_index];
        }

        // Default palette
        let default_colors = [
            BLUE,
            GREEN,
            RED,
            MAGENTA,
            CYAN,
            BLACK,
            RGBColor(255, 165, 0), // Orange
            RGBColor(128, 0, 128), // Purple
        ];

        default_colors[series_index % default_colors.len()]
    }
}

// =================================================================================================
// Tests
// =================================================================================================
