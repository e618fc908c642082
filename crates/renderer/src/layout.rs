//! Chart layout configuration.
//!
//! Every value has a default matching the published chart, so an empty
//! YAML/JSON document deserializes to the standard layout.

use heatmap_common::Color;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::palette::default_palette;

/// Outer margins around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 120.0,
            right: 5.0,
            bottom: 120.0,
            left: 90.0,
        }
    }
}

/// Legend strip geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendLayout {
    pub width: f64,
    pub height: f64,
    /// Legend axis position below the bottom edge of the plot.
    pub offset_y: f64,
}

impl Default for LegendLayout {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 30.0,
            offset_y: 80.0,
        }
    }
}

/// Tooltip placement relative to the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipLayout {
    pub offset_x: f64,
    pub offset_y: f64,
    pub opacity: f64,
    pub width: f64,
    pub height: f64,
}

impl Default for TooltipLayout {
    fn default() -> Self {
        Self {
            offset_x: -50.0,
            offset_y: -85.0,
            opacity: 0.8,
            width: 130.0,
            height: 60.0,
        }
    }
}

/// Complete layout for one rendered chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    /// Outer document width.
    pub width: f64,
    /// Outer document height.
    pub height: f64,
    pub margin: Margin,
    pub legend: LegendLayout,
    pub tooltip: TooltipLayout,
    pub title: String,
    pub x_label: String,
    /// Only years divisible by this get an x-axis label.
    pub year_tick_interval: i32,
    /// Quantile palette, cool to warm.
    pub palette: Vec<Color>,
    pub background: Option<Color>,
    pub font_family: String,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 1400.0,
            height: 600.0,
            margin: Margin::default(),
            legend: LegendLayout::default(),
            tooltip: TooltipLayout::default(),
            title: "Monthly Global Land-Surface Temperature".to_string(),
            x_label: "Years".to_string(),
            year_tick_interval: 10,
            palette: default_palette(),
            background: Some(Color::rgb(255, 255, 255)),
            font_family: "sans-serif".to_string(),
        }
    }
}

impl ChartLayout {
    /// Minimum palette size: two open-ended outer buckets plus one interior.
    pub const MIN_PALETTE: usize = 3;

    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.plot_width() <= 0.0 || self.plot_height() <= 0.0 {
            return Err(RenderError::InvalidLayout(format!(
                "plot area {}x{} is empty",
                self.plot_width(),
                self.plot_height()
            )));
        }
        if self.legend.width <= 0.0 {
            return Err(RenderError::InvalidLayout("legend width must be positive".into()));
        }
        if self.year_tick_interval <= 0 {
            return Err(RenderError::InvalidLayout(
                "year tick interval must be positive".into(),
            ));
        }
        if self.palette.len() < Self::MIN_PALETTE {
            return Err(RenderError::PaletteTooSmall {
                min: Self::MIN_PALETTE,
                got: self.palette.len(),
            });
        }
        Ok(())
    }
}
