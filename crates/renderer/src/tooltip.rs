//! Hover tooltip state machine.
//!
//! A single shared tooltip is either idle (hidden) or showing one record.
//! Cells keep no hover state of their own: entering any cell replaces the
//! tooltip content wholesale, leaving hides it.

use heatmap_common::{to_fixed, EnrichedRecord};

use crate::layout::TooltipLayout;
use crate::svg::Element;

/// Pointer position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Pointer events delivered to a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Enter { record: EnrichedRecord, pointer: Point },
    Leave,
}

/// Text lines shown for a hovered record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub year: i32,
    /// "2009 - January"
    pub heading: String,
    /// "7.0 °C"
    pub temperature: String,
    /// "+0.3 °C" or "-0.3 °C"
    pub variance: String,
}

/// Signed variance with an explicit '+' for non-negative values.
pub fn format_variance(variance: f64) -> String {
    let sign = if variance < 0.0 { "" } else { "+" };
    format!("{}{} °C", sign, to_fixed(variance, 1))
}

impl TooltipContent {
    pub fn for_record(record: &EnrichedRecord) -> Self {
        Self {
            year: record.year,
            heading: format!("{} - {}", record.year, record.month),
            temperature: format!("{} °C", to_fixed(record.temperature, 1)),
            variance: format_variance(record.variance),
        }
    }

    pub fn lines(&self) -> [&str; 3] {
        [self.heading.as_str(), self.temperature.as_str(), self.variance.as_str()]
    }

    /// Newline-joined form, used for SVG `<title>` hover text.
    pub fn to_plain_text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Shared tooltip state: `Idle` or hovering one record.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum TooltipState {
    #[default]
    Idle,
    Hover { record: EnrichedRecord, pointer: Point },
}

impl TooltipState {
    pub fn pointer_enter(self, record: EnrichedRecord, pointer: Point) -> Self {
        TooltipState::Hover { record, pointer }
    }

    pub fn pointer_leave(self) -> Self {
        TooltipState::Idle
    }

    pub fn apply(self, event: PointerEvent) -> Self {
        match event {
            PointerEvent::Enter { record, pointer } => self.pointer_enter(record, pointer),
            PointerEvent::Leave => self.pointer_leave(),
        }
    }

    pub fn is_visible(&self) -> bool {
        matches!(self, TooltipState::Hover { .. })
    }

    pub fn hovered(&self) -> Option<&EnrichedRecord> {
        match self {
            TooltipState::Hover { record, .. } => Some(record),
            TooltipState::Idle => None,
        }
    }

    pub fn content(&self) -> Option<TooltipContent> {
        self.hovered().map(TooltipContent::for_record)
    }

    /// Draw the tooltip group. Idle tooltips are emitted fully transparent
    /// so the document structure does not depend on hover state.
    pub fn render(&self, layout: &TooltipLayout) -> Element {
        let base = Element::new("g")
            .attr("id", "tooltip")
            .attr("pointer-events", "none");

        let TooltipState::Hover { record, pointer } = self else {
            return base.attr("opacity", 0);
        };

        let content = TooltipContent::for_record(record);
        let mut text = Element::new("text")
            .attr("fill", "white")
            .attr("font-size", 12)
            .attr("text-anchor", "middle");
        for (i, line) in content.lines().iter().enumerate() {
            text.push(
                Element::new("tspan")
                    .num("x", layout.width / 2.0)
                    .num("y", 18.0 * (i + 1) as f64)
                    .text(*line),
            );
        }

        base.attr("opacity", layout.opacity)
            .attr("data-year", record.year)
            .translate(pointer.x + layout.offset_x, pointer.y + layout.offset_y)
            .child(
                Element::new("rect")
                    .attr("class", "tooltip-background")
                    .num("width", layout.width)
                    .num("height", layout.height)
                    .attr("rx", 4)
                    .attr("fill", "black"),
            )
            .child(text)
    }
}
