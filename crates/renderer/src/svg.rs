//! Minimal SVG document tree.
//!
//! Charts are built as an [`Element`] tree first and serialized last, so
//! tests can query the tree (by id, class, or attribute) without parsing
//! markup back.

use std::fmt::{self, Write};

/// Format a coordinate deterministically: integers print bare, everything
/// else with at most three decimals and no trailing zeros.
pub fn fmt_num(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }
    let rounded = (value * 1000.0).round() / 1000.0;
    if rounded == rounded.trunc() {
        // avoids "-0"
        return format!("{}", rounded as i64);
    }
    let s = format!("{:.3}", rounded);
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Escape text for XML character data and attribute values.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An SVG element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, replacing any previous value.
    pub fn attr(mut self, name: &'static str, value: impl fmt::Display) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Set a numeric attribute using [`fmt_num`].
    pub fn num(self, name: &'static str, value: f64) -> Self {
        self.attr(name, fmt_num(value))
    }

    pub fn set_attr(&mut self, name: &'static str, value: impl fmt::Display) {
        let value = value.to_string();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    pub fn translate(self, x: f64, y: f64) -> Self {
        let value = format!("translate({},{})", fmt_num(x), fmt_num(y));
        self.attr("transform", value)
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    pub fn push(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|n| match n {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for node in &self.children {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(e) => out.push_str(&e.text_content()),
            }
        }
        out
    }

    /// Depth-first iterator over this element and every descendant.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = vec![self];
        for child in self.children() {
            out.extend(child.descendants());
        }
        out
    }

    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.descendants()
            .into_iter()
            .find(|e| e.get_attr("id") == Some(id))
    }

    pub fn find_all_by_class(&self, class: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| {
                e.get_attr("class")
                    .is_some_and(|c| c.split_whitespace().any(|c| c == class))
            })
            .collect()
    }

    pub fn find_all_by_name(&self, name: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.name == name)
            .collect()
    }

    fn write_to(&self, out: &mut String, depth: usize) -> fmt::Result {
        let indent = "  ".repeat(depth);
        write!(out, "{}<{}", indent, self.name)?;
        for (name, value) in &self.attrs {
            write!(out, " {}=\"{}\"", name, escape(value))?;
        }

        if self.children.is_empty() {
            return writeln!(out, "/>");
        }

        // Text-only elements stay on one line so whitespace is not rendered.
        if self.children.iter().all(|n| matches!(n, Node::Text(_))) {
            write!(out, ">")?;
            for node in &self.children {
                if let Node::Text(t) = node {
                    out.push_str(&escape(t));
                }
            }
            return writeln!(out, "</{}>", self.name);
        }

        writeln!(out, ">")?;
        for node in &self.children {
            match node {
                Node::Element(e) => e.write_to(out, depth + 1)?,
                Node::Text(t) => writeln!(out, "{}  {}", indent, escape(t))?,
            }
        }
        writeln!(out, "{}</{}>", indent, self.name)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_to(&mut out, 0)?;
        f.write_str(&out)
    }
}
