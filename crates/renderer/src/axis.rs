//! Axis rendering: a domain line plus tick marks with labels.

use crate::svg::{fmt_num, Element};

/// Default tick length, in pixels.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between the tick end and its label.
pub const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Offset along the axis, in pixels.
    pub position: f64,
    pub label: String,
}

/// A horizontal or vertical axis ready to be drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub orientation: Orientation,
    /// Pixel extent of the domain line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size_inner: f64,
    /// Length of the end caps on the domain line; zero for none.
    pub tick_size_outer: f64,
}

impl Axis {
    pub fn new(orientation: Orientation, range: (f64, f64), ticks: Vec<Tick>) -> Self {
        Self {
            orientation,
            range,
            ticks,
            tick_size_inner: TICK_SIZE,
            tick_size_outer: TICK_SIZE,
        }
    }

    pub fn tick_size_outer(mut self, size: f64) -> Self {
        self.tick_size_outer = size;
        self
    }

    fn domain_path(&self) -> String {
        let (r0, r1) = (fmt_num(self.range.0), fmt_num(self.range.1));
        let outer = self.tick_size_outer;
        match self.orientation {
            Orientation::Bottom if outer == 0.0 => format!("M{},0H{}", r0, r1),
            Orientation::Bottom => {
                let k = fmt_num(outer);
                format!("M{},{}V0H{}V{}", r0, k, r1, k)
            }
            Orientation::Left if outer == 0.0 => format!("M0,{}V{}", r0, r1),
            Orientation::Left => {
                let k = fmt_num(-outer);
                format!("M{},{}H0V{}H{}", k, r0, r1, k)
            }
        }
    }

    fn tick_element(&self, tick: &Tick) -> Element {
        let offset = self.tick_size_inner.max(0.0) + TICK_PADDING;
        let g = Element::new("g").attr("class", "tick");

        match self.orientation {
            Orientation::Bottom => g
                .translate(tick.position, 0.0)
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .num("y2", self.tick_size_inner),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .num("y", offset)
                        .attr("dy", "0.71em")
                        .text(tick.label.clone()),
                ),
            Orientation::Left => g
                .translate(0.0, tick.position)
                .child(
                    Element::new("line")
                        .attr("stroke", "currentColor")
                        .num("x2", -self.tick_size_inner),
                )
                .child(
                    Element::new("text")
                        .attr("fill", "currentColor")
                        .num("x", -offset)
                        .attr("dy", "0.32em")
                        .text(tick.label.clone()),
                ),
        }
    }

    /// Build the axis group. Position it with a `transform` on the result.
    pub fn render(&self) -> Element {
        let anchor = match self.orientation {
            Orientation::Bottom => "middle",
            Orientation::Left => "end",
        };

        let mut g = Element::new("g")
            .attr("fill", "none")
            .attr("font-size", 10)
            .attr("text-anchor", anchor)
            .child(
                Element::new("path")
                    .attr("class", "domain")
                    .attr("stroke", "currentColor")
                    .attr("d", self.domain_path()),
            );

        for tick in &self.ticks {
            g.push(self.tick_element(tick));
        }
        g
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticks() -> Vec<Tick> {
        vec![
            Tick { position: 10.0, label: "a".into() },
            Tick { position: 20.0, label: "b".into() },
        ]
    }

    #[test]
    fn test_bottom_axis_no_outer_ticks() {
        let g = Axis::new(Orientation::Bottom, (0.0, 100.0), ticks())
            .tick_size_outer(0.0)
            .render();
        let path = g.find_all_by_name("path")[0];
        assert_eq!(path.get_attr("d"), Some("M0,0H100"));
        assert_eq!(g.find_all_by_class("tick").len(), 2);
    }

    #[test]
    fn test_bottom_axis_outer_ticks() {
        let g = Axis::new(Orientation::Bottom, (0.0, 500.0), vec![]).render();
        let path = g.find_all_by_name("path")[0];
        assert_eq!(path.get_attr("d"), Some("M0,6V0H500V6"));
    }

    #[test]
    fn test_left_axis_tick_layout() {
        let g = Axis::new(Orientation::Left, (0.0, 30.0), ticks()).render();
        assert_eq!(g.get_attr("text-anchor"), Some("end"));
        let tick = g.find_all_by_class("tick")[1];
        assert_eq!(tick.get_attr("transform"), Some("translate(0,20)"));
        assert_eq!(tick.text_content(), "b");
    }
}
