//! Tests for full chart assembly.

use std::collections::HashSet;

use heatmap_common::{Dataset, Month, ValidationMode};
use renderer::{Chart, ChartLayout, TooltipState};
use test_utils::{
    assert_approx_eq, create_seasonal_records, dataset_json, small_dataset_json,
    synthetic_dataset_json, REAL_DATASET_HEAD,
};

fn small_dataset() -> Dataset {
    Dataset::from_json(&small_dataset_json(), ValidationMode::Strict).unwrap()
}

// ============================================================================
// Cells
// ============================================================================

#[test]
fn test_one_cell_per_record() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let doc = chart.document(&TooltipState::Idle);

    let cells = doc.find_all_by_class("cell");
    assert_eq!(cells.len(), 36);

    let pairs: HashSet<(String, String)> = cells
        .iter()
        .map(|c| {
            (
                c.get_attr("data-year").unwrap().to_string(),
                c.get_attr("data-month").unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(pairs.len(), 36);
}

#[test]
fn test_cell_attributes_match_records() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let doc = chart.document(&TooltipState::Idle);

    for (cell, rec) in doc.find_all_by_class("cell").iter().zip(ds.records()) {
        let year: i32 = cell.get_attr("data-year").unwrap().parse().unwrap();
        let month: u8 = cell.get_attr("data-month").unwrap().parse().unwrap();
        let temp: f64 = cell.get_attr("data-temp").unwrap().parse().unwrap();
        assert_eq!(year, rec.year);
        assert_eq!(month, rec.month.index());
        assert_eq!(temp, rec.temperature);
        assert!(month < 12);
    }
}

#[test]
fn test_cells_tile_the_plot() {
    let ds = small_dataset();
    let layout = ChartLayout::default();
    let chart = Chart::new(&ds, layout.clone()).unwrap();
    let scales = chart.scales();

    assert_approx_eq!(scales.x.bandwidth(), layout.plot_width() / 3.0, 1e-9);
    assert_approx_eq!(scales.y.bandwidth(), layout.plot_height() / 12.0, 1e-9);
    assert_eq!(scales.x.scale(2009), Some(0.0));
    assert_eq!(scales.y.scale(Month::from_index(0).unwrap()), Some(0.0));
}

#[test]
fn test_cell_fill_is_monotonic_in_temperature() {
    let ds = Dataset::from_json(
        &dataset_json(8.66, &create_seasonal_records(1900, 30)),
        ValidationMode::Strict,
    )
    .unwrap();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let color = &chart.scales().color;

    let mut temps: Vec<f64> = ds.temperatures().collect();
    temps.sort_by(f64::total_cmp);
    for pair in temps.windows(2) {
        assert!(color.bucket(pair[0]) <= color.bucket(pair[1]));
    }
    assert_eq!(color.bucket(ds.min_temp()), 0);
    assert_eq!(color.bucket(ds.max_temp()), 10);
}

// ============================================================================
// Axes, title, legend
// ============================================================================

#[test]
fn test_x_axis_labels_decades_only() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let doc = chart.document(&TooltipState::Idle);

    let x_axis = doc.find_by_id("x-axis").unwrap();
    let labels: Vec<String> = x_axis
        .find_all_by_class("tick")
        .iter()
        .map(|t| t.text_content())
        .collect();
    assert_eq!(labels, vec!["2010".to_string()]);
    assert_eq!(x_axis.get_attr("transform"), Some("translate(0,360)"));
}

#[test]
fn test_x_axis_labels_every_decade_in_span() {
    let json = synthetic_dataset_json(1753, 47, 8.66, -2.0, 2.0);
    let ds = Dataset::from_json(&json, ValidationMode::Strict).unwrap();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();

    let labels: Vec<String> = chart.x_axis().ticks.into_iter().map(|t| t.label).collect();
    assert_eq!(labels, vec!["1760", "1770", "1780", "1790"]);
    assert_eq!(chart.scales().x.domain().len(), 47);
}

#[test]
fn test_y_axis_month_names() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let doc = chart.document(&TooltipState::Idle);

    let y_axis = doc.find_by_id("y-axis").unwrap();
    let labels: Vec<String> = y_axis
        .find_all_by_class("tick")
        .iter()
        .map(|t| t.text_content())
        .collect();
    assert_eq!(labels.len(), 12);
    assert_eq!(labels[0], "January");
    assert_eq!(labels[11], "December");
}

#[test]
fn test_title_and_description() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let doc = chart.document(&TooltipState::Idle);

    assert_eq!(
        doc.find_by_id("title").unwrap().text_content(),
        "Monthly Global Land-Surface Temperature"
    );
    assert_eq!(
        doc.find_by_id("description").unwrap().text_content(),
        "2009 - 2011: base temperature 8 °C"
    );
}

#[test]
fn test_description_keeps_base_precision() {
    let ds = Dataset::from_json(REAL_DATASET_HEAD, ValidationMode::Strict).unwrap();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    assert_eq!(chart.description(), "1753 - 1753: base temperature 8.66 °C");
}

#[test]
fn test_legend_segments_and_ticks() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
    let doc = chart.document(&TooltipState::Idle);

    let legend = doc.find_by_id("legend").unwrap();
    assert_eq!(legend.find_all_by_class("legend-cell").len(), 11 - 2);

    let ticks = legend.find_all_by_class("tick");
    assert_eq!(ticks.len(), 10);
    for tick in ticks {
        let label = tick.text_content();
        let decimals = label.split('.').nth(1).unwrap();
        assert_eq!(decimals.len(), 1, "tick label {label} not 1 decimal");
    }
}

#[test]
fn test_custom_palette_changes_segment_count() {
    let ds = small_dataset();
    let layout = ChartLayout {
        palette: renderer::palette::default_palette()[..5].to_vec(),
        ..Default::default()
    };
    let chart = Chart::new(&ds, layout).unwrap();
    assert_eq!(chart.legend().segments.len(), 3);
}

// ============================================================================
// Determinism
// ============================================================================

#[test]
fn test_rerun_is_identical() {
    let a = {
        let ds = small_dataset();
        let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
        chart.to_svg(&TooltipState::Idle)
    };
    let b = {
        let ds = small_dataset();
        let chart = Chart::new(&ds, ChartLayout::default()).unwrap();
        chart.to_svg(&TooltipState::Idle)
    };
    assert_eq!(a, b);
}

#[test]
fn test_svg_and_html_output() {
    let ds = small_dataset();
    let chart = Chart::new(&ds, ChartLayout::default()).unwrap();

    let svg = chart.to_svg(&TooltipState::Idle);
    assert!(svg.starts_with("<?xml"));
    assert!(svg.contains("id=\"x-axis\""));
    assert!(svg.contains("id=\"y-axis\""));
    assert!(svg.contains("id=\"tooltip\""));

    let html = chart.to_html(&TooltipState::Idle);
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<svg"));
}

#[test]
fn test_invalid_layout_rejected() {
    let ds = small_dataset();
    let layout = ChartLayout {
        year_tick_interval: 0,
        ..Default::default()
    };
    assert!(Chart::new(&ds, layout).is_err());
}
