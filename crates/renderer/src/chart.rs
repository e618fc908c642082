//! Heat-map chart assembly.
//!
//! A [`Chart`] owns the scales built from one [`Dataset`] and a
//! [`ChartLayout`]; both are fixed at construction. Rendering is a pure
//! function of the chart and a [`TooltipState`], so rendering the same
//! input twice yields byte-identical output.

use std::collections::HashMap;

use heatmap_common::{Color, Dataset, EnrichedRecord, Month};
use tracing::{debug, instrument};

use crate::axis::{Axis, Orientation, Tick};
use crate::error::RenderResult;
use crate::layout::ChartLayout;
use crate::legend::Legend;
use crate::scale::{BandScale, LinearScale, QuantileScale};
use crate::svg::{escape, fmt_num, Element};
use crate::tooltip::{Point, TooltipContent, TooltipState};

/// Offset of the title and caption above the plot area.
const TITLE_Y: f64 = -70.0;
const DESCRIPTION_Y: f64 = -40.0;
const X_LABEL_GAP: f64 = 40.0;

/// The four scales derived from a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartScales {
    /// Year to horizontal band.
    pub x: BandScale<i32>,
    /// Month to vertical band.
    pub y: BandScale<Month>,
    /// Temperature to palette color.
    pub color: QuantileScale<Color>,
    /// Temperature to legend pixel.
    pub legend: LinearScale,
}

impl ChartScales {
    pub fn build(dataset: &Dataset, layout: &ChartLayout) -> RenderResult<Self> {
        let records = dataset.records();

        let x = BandScale::new(records.iter().map(|r| r.year), (0.0, layout.plot_width()))?;
        let y = BandScale::new(records.iter().map(|r| r.month), (0.0, layout.plot_height()))?;
        let color = QuantileScale::new(dataset.temperatures(), layout.palette.clone())?;
        let legend = LinearScale::new(
            (dataset.min_temp(), dataset.max_temp()),
            (0.0, layout.legend.width),
        );

        Ok(Self { x, y, color, legend })
    }
}

pub struct Chart<'a> {
    dataset: &'a Dataset,
    layout: ChartLayout,
    scales: ChartScales,
    cells: HashMap<(i32, Month), usize>,
}

impl<'a> Chart<'a> {
    #[instrument(skip_all, fields(records = dataset.len()))]
    pub fn new(dataset: &'a Dataset, layout: ChartLayout) -> RenderResult<Self> {
        layout.validate()?;
        let scales = ChartScales::build(dataset, &layout)?;

        let mut cells = HashMap::with_capacity(dataset.len());
        for (i, r) in dataset.records().iter().enumerate() {
            cells.entry((r.year, r.month)).or_insert(i);
        }

        debug!(
            years = scales.x.domain().len(),
            months = scales.y.domain().len(),
            quantiles = ?scales.color.quantiles(),
            "Scales built"
        );

        Ok(Self {
            dataset,
            layout,
            scales,
            cells,
        })
    }

    pub fn dataset(&self) -> &Dataset {
        self.dataset
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn scales(&self) -> &ChartScales {
        &self.scales
    }

    /// Bottom axis labelled only on years divisible by the tick interval.
    pub fn x_axis(&self) -> Axis {
        let x = &self.scales.x;
        let ticks = x
            .domain()
            .iter()
            .filter(|&&year| year % self.layout.year_tick_interval == 0)
            .filter_map(|&year| {
                Some(Tick {
                    position: x.center(year)?,
                    label: year.to_string(),
                })
            })
            .collect();

        Axis::new(Orientation::Bottom, x.range(), ticks).tick_size_outer(0.0)
    }

    /// Left axis with full month names.
    pub fn y_axis(&self) -> Axis {
        let y = &self.scales.y;
        let ticks = y
            .domain()
            .iter()
            .filter_map(|&month| {
                Some(Tick {
                    position: y.center(month)?,
                    label: month.name().to_string(),
                })
            })
            .collect();

        Axis::new(Orientation::Left, y.range(), ticks).tick_size_outer(0.0)
    }

    pub fn legend(&self) -> Legend {
        Legend::build(&self.scales.color, &self.scales.legend, &self.layout.legend)
    }

    /// One rectangle for a record, tagged with its year, month and
    /// temperature.
    pub fn cell(&self, record: &EnrichedRecord) -> Option<Element> {
        let x = self.scales.x.scale(record.year)?;
        let y = self.scales.y.scale(record.month)?;
        let fill = self.scales.color.scale(record.temperature);

        Some(
            Element::new("rect")
                .attr("class", "cell")
                .attr("data-month", record.month.index())
                .attr("data-year", record.year)
                .attr("data-temp", record.temperature)
                .num("x", x)
                .num("y", y)
                .num("width", self.scales.x.bandwidth())
                .num("height", self.scales.y.bandwidth())
                .attr("fill", fill)
                .child(
                    Element::new("title")
                        .text(TooltipContent::for_record(record).to_plain_text()),
                ),
        )
    }

    /// "1753 - 2015: base temperature 8.66 °C"
    pub fn description(&self) -> String {
        let (first, last) = self.dataset.year_range();
        format!(
            "{} - {}: base temperature {} °C",
            first,
            last,
            self.dataset.base_temperature()
        )
    }

    /// Record under a pointer given in document coordinates.
    pub fn hit_test(&self, pointer: Point) -> Option<&EnrichedRecord> {
        let year = self.scales.x.invert(pointer.x - self.layout.margin.left)?;
        let month = self.scales.y.invert(pointer.y - self.layout.margin.top)?;
        let index = *self.cells.get(&(year, month))?;
        self.dataset.records().get(index)
    }

    /// Advance the tooltip state for a pointer move.
    pub fn pointer_move(&self, state: TooltipState, pointer: Point) -> TooltipState {
        match self.hit_test(pointer) {
            Some(record) if state.hovered() == Some(record) => state,
            Some(record) => state.pointer_enter(*record, pointer),
            None if state.is_visible() => state.pointer_leave(),
            None => state,
        }
    }

    /// Tooltip state as if the pointer rested on the center of a cell.
    pub fn hover_cell(&self, year: i32, month: Month) -> Option<TooltipState> {
        let index = *self.cells.get(&(year, month))?;
        let record = self.dataset.records().get(index)?;
        let pointer = Point::new(
            self.layout.margin.left + self.scales.x.center(year)?,
            self.layout.margin.top + self.scales.y.center(month)?,
        );
        Some(TooltipState::Idle.pointer_enter(*record, pointer))
    }

    /// Build the full SVG tree.
    pub fn document(&self, tooltip: &TooltipState) -> Element {
        let layout = &self.layout;
        let (pw, ph) = (layout.plot_width(), layout.plot_height());

        let mut cells = Element::new("g").attr("class", "cells");
        for record in self.dataset.records() {
            if let Some(cell) = self.cell(record) {
                cells.push(cell);
            }
        }

        let plot = Element::new("g")
            .translate(layout.margin.left, layout.margin.top)
            .child(self.x_axis().render().attr("id", "x-axis").translate(0.0, ph))
            .child(self.y_axis().render().attr("id", "y-axis").translate(0.0, 0.0))
            .child(cells)
            .child(
                Element::new("text")
                    .attr("class", "x-label")
                    .num("x", (pw - layout.margin.left) / 2.0)
                    .num("y", ph + X_LABEL_GAP)
                    .text(layout.x_label.clone()),
            )
            .child(
                Element::new("text")
                    .attr("id", "title")
                    .num("x", pw / 2.0)
                    .num("y", TITLE_Y)
                    .attr("text-anchor", "end")
                    .num("dx", layout.width * 0.07)
                    .attr("font-size", 24)
                    .text(layout.title.clone()),
            )
            .child(
                Element::new("text")
                    .attr("id", "description")
                    .num("x", pw / 2.0)
                    .num("y", DESCRIPTION_Y)
                    .attr("text-anchor", "end")
                    .num("dx", layout.width * 0.06)
                    .attr("font-size", 16)
                    .text(self.description()),
            )
            .child(
                self.legend()
                    .render()
                    .translate(layout.margin.left, ph + layout.legend.offset_y),
            );

        let mut svg = Element::new("svg")
            .attr("xmlns", "http://www.w3.org/2000/svg")
            .num("width", layout.width)
            .num("height", layout.height)
            .attr(
                "viewBox",
                format!("0 0 {} {}", fmt_num(layout.width), fmt_num(layout.height)),
            )
            .attr("class", "graph-svg")
            .attr("font-family", layout.font_family.clone());

        if let Some(bg) = layout.background {
            svg.push(
                Element::new("rect")
                    .attr("class", "background")
                    .attr("width", "100%")
                    .attr("height", "100%")
                    .attr("fill", bg),
            );
        }

        svg.child(plot).child(tooltip.render(&layout.tooltip))
    }

    pub fn to_svg(&self, tooltip: &TooltipState) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{}",
            self.document(tooltip)
        )
    }

    /// Standalone HTML page embedding the SVG.
    pub fn to_html(&self, tooltip: &TooltipState) -> String {
        format!(
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape(&self.layout.title),
            self.document(tooltip)
        )
    }
}
