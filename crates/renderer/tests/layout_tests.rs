//! Tests for layout configuration parsing.

use heatmap_common::Color;
use renderer::ChartLayout;

#[test]
fn test_empty_yaml_is_default() {
    let layout: ChartLayout = serde_yaml::from_str("{}").unwrap();
    assert_eq!(layout, ChartLayout::default());
}

#[test]
fn test_partial_yaml_overrides() {
    let yaml = r##"
width: 1000
margin:
  left: 60
legend:
  width: 300
title: "Custom"
palette: ["#000000", "#808080", "#ffffff"]
"##;
    let layout: ChartLayout = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(layout.width, 1000.0);
    assert_eq!(layout.margin.left, 60.0);
    assert_eq!(layout.margin.top, 120.0);
    assert_eq!(layout.legend.width, 300.0);
    assert_eq!(layout.legend.height, 30.0);
    assert_eq!(layout.title, "Custom");
    assert_eq!(layout.palette[1], Color::rgb(0x80, 0x80, 0x80));
    assert!(layout.validate().is_ok());
}

#[test]
fn test_bad_palette_color_fails() {
    let result: Result<ChartLayout, _> = serde_json::from_str(r#"{ "palette": ["nope"] }"#);
    assert!(result.is_err());
}
