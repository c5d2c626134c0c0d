use serde::{Deserialize, Serialize};

use crate::core::{BinningMode, DotPlotOptions, FormattingConfig, Viewport};
use crate::error::{PlotError, PlotResult};
use crate::render::Color;

/// Colors and axis geometry used when building a `PlotFrame`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotStyle {
    pub dot_color: Color,
    pub axis_color: Color,
    pub fit_line_color: Color,
    pub label_color: Color,
    pub label_font_size_px: f64,
    /// Height reserved under the plot area for the axis line, ticks and labels.
    pub axis_band_px: f64,
    pub major_tick_length_px: f64,
    pub minor_tick_length_px: f64,
    pub stroke_width_px: f64,
}

impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            dot_color: Color::rgb(0.12, 0.35, 0.70),
            axis_color: Color::rgb(0.20, 0.20, 0.20),
            fit_line_color: Color::rgb(0.80, 0.15, 0.15),
            label_color: Color::rgb(0.10, 0.10, 0.10),
            label_font_size_px: 12.0,
            axis_band_px: 32.0,
            major_tick_length_px: 8.0,
            minor_tick_length_px: 4.0,
            stroke_width_px: 1.0,
        }
    }
}

impl PlotStyle {
    pub fn validate(self) -> PlotResult<Self> {
        for color in [
            self.dot_color,
            self.axis_color,
            self.fit_line_color,
            self.label_color,
        ] {
            color.validate()?;
        }
        for (name, value) in [
            ("label font size", self.label_font_size_px),
            ("axis band", self.axis_band_px),
            ("major tick length", self.major_tick_length_px),
            ("minor tick length", self.minor_tick_length_px),
            ("stroke width", self.stroke_width_px),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(PlotError::InvalidConfig(format!(
                    "{name} must be finite and > 0"
                )));
            }
        }
        Ok(self)
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so hosts can persist display preferences (tolerance, label
/// precision, colors) and hand them back on the next session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotEngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub formatting: FormattingConfig,
    #[serde(default)]
    pub dot_plot: DotPlotOptions,
    #[serde(default = "default_show_regression_line")]
    pub show_regression_line: bool,
    #[serde(default)]
    pub style: PlotStyle,
}

impl PlotEngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            formatting: FormattingConfig::default(),
            dot_plot: DotPlotOptions::default(),
            show_regression_line: default_show_regression_line(),
            style: PlotStyle::default(),
        }
    }

    #[must_use]
    pub fn with_formatting(mut self, formatting: FormattingConfig) -> Self {
        self.formatting = formatting;
        self
    }

    #[must_use]
    pub fn with_dot_diameter_px(mut self, dot_diameter_px: f64) -> Self {
        self.dot_plot.dot_diameter_px = dot_diameter_px;
        self
    }

    #[must_use]
    pub fn with_binning(mut self, binning: BinningMode) -> Self {
        self.dot_plot.binning = binning;
        self
    }

    #[must_use]
    pub fn with_regression_line(mut self, show: bool) -> Self {
        self.show_regression_line = show;
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: PlotStyle) -> Self {
        self.style = style;
        self
    }

    /// Viewport left for dots and points once the axis band is reserved.
    pub fn plot_area(self) -> PlotResult<Viewport> {
        let viewport = self.viewport.ensure_valid()?;
        let band = self.style.axis_band_px.ceil();
        let height = f64::from(viewport.height) - band;
        if height < 1.0 {
            return Err(PlotError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        // `height` is below `viewport.height`, so it fits in u32.
        Ok(Viewport::new(viewport.width, height as u32))
    }

    pub fn validate(self) -> PlotResult<Self> {
        self.formatting.validate()?;
        self.dot_plot
            .validate()
            .map_err(|e| PlotError::InvalidConfig(e.to_string()))?;
        self.style.validate()?;
        self.plot_area()?;
        Ok(self)
    }

    pub fn to_json_pretty(self) -> PlotResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> PlotResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| PlotError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()
    }
}

fn default_show_regression_line() -> bool {
    true
}
