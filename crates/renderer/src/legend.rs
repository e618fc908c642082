//! Color legend: a strip of palette segments over a temperature axis.
//!
//! Only the interior buckets are drawn. The first and last buckets are
//! open-ended in the data sense, so a palette of N colors yields N - 2
//! segments, each spanning its bucket's temperature extent.

use heatmap_common::{to_fixed, Color};

use crate::axis::{Axis, Orientation, Tick};
use crate::layout::LegendLayout;
use crate::scale::{LinearScale, QuantileScale};
use crate::svg::Element;

#[derive(Debug, Clone, PartialEq)]
pub struct LegendSegment {
    pub color: Color,
    /// Temperature interval covered by this segment.
    pub extent: (f64, f64),
    pub x: f64,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Legend {
    pub segments: Vec<LegendSegment>,
    pub axis: Axis,
    pub height: f64,
}

impl Legend {
    pub fn build(color: &QuantileScale<Color>, position: &LinearScale, layout: &LegendLayout) -> Self {
        let buckets = color.range().len();

        let segments = (1..buckets.saturating_sub(1))
            .filter_map(|i| {
                let (lo, hi) = color.invert_extent(i)?;
                let x = position.scale(lo);
                Some(LegendSegment {
                    color: color.range()[i],
                    extent: (lo, hi),
                    x,
                    width: position.scale(hi) - x,
                })
            })
            .collect();

        let ticks = color
            .quantiles()
            .iter()
            .map(|&q| Tick {
                position: position.scale(q),
                label: to_fixed(q, 1),
            })
            .collect();

        Self {
            segments,
            axis: Axis::new(Orientation::Bottom, position.range(), ticks),
            height: layout.height,
        }
    }

    pub fn render(&self) -> Element {
        let mut strip = Element::new("g");
        for seg in &self.segments {
            strip.push(
                Element::new("rect")
                    .attr("class", "legend-cell")
                    .num("x", seg.x)
                    .num("y", -self.height)
                    .num("width", seg.width)
                    .num("height", self.height)
                    .attr("fill", seg.color)
                    .attr("stroke", "black"),
            );
        }

        Element::new("g")
            .attr("id", "legend")
            .child(strip)
            .child(self.axis.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::default_palette;
    use test_utils::assert_approx_eq;

    fn legend() -> Legend {
        let samples: Vec<f64> = (0..=110).map(|i| i as f64 / 10.0).collect();
        let color = QuantileScale::new(samples, default_palette()).unwrap();
        let position = LinearScale::new((0.0, 11.0), (0.0, 500.0));
        Legend::build(&color, &position, &LegendLayout::default())
    }

    #[test]
    fn test_segment_count_excludes_outer_buckets() {
        let l = legend();
        assert_eq!(l.segments.len(), 9);
        assert_eq!(l.segments[0].color, default_palette()[1]);
        assert_eq!(l.segments[8].color, default_palette()[9]);
    }

    #[test]
    fn test_segments_are_contiguous() {
        let l = legend();
        for pair in l.segments.windows(2) {
            assert_approx_eq!(pair[0].x + pair[0].width, pair[1].x, 1e-9);
        }
    }

    #[test]
    fn test_ticks_at_quantiles() {
        let l = legend();
        assert_eq!(l.axis.ticks.len(), 10);
        assert_eq!(l.axis.ticks[0].label, "1.0");
        assert_eq!(l.axis.ticks[9].label, "10.0");
    }

    #[test]
    fn test_tick_labels_round_ties_up() {
        let color = QuantileScale::new([8.25, 8.25, 8.25], default_palette()).unwrap();
        let position = LinearScale::new((8.25, 8.25), (0.0, 500.0));
        let l = Legend::build(&color, &position, &LegendLayout::default());
        assert!(l.axis.ticks.iter().all(|t| t.label == "8.3"));
    }

    #[test]
    fn test_render_has_id_and_cells() {
        let g = legend().render();
        assert_eq!(g.get_attr("id"), Some("legend"));
        assert_eq!(g.find_all_by_class("legend-cell").len(), 9);
        assert_eq!(g.find_all_by_class("tick").len(), 10);
    }
}
