//! SVG rendering for the monthly temperature-variance heat map.
//!
//! Pipeline pieces:
//! - Scales (band, quantile, linear)
//! - Axes and color legend
//! - Cell grid and chart document
//! - Hover tooltip state machine
//! - PNG rasterization

pub mod axis;
pub mod chart;
pub mod error;
pub mod layout;
pub mod legend;
pub mod palette;
pub mod raster;
pub mod scale;
pub mod svg;
pub mod tooltip;

pub use chart::{Chart, ChartScales};
pub use error::{RenderError, RenderResult};
pub use layout::ChartLayout;
pub use tooltip::{Point, PointerEvent, TooltipContent, TooltipState};
