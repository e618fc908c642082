//! Common test fixtures for heat-map tests.
//!
//! This module provides pre-defined test data that represents common
//! scenarios in chart rendering.

use crate::generators::{create_monthly_records, dataset_json, RawTuple};

/// Base temperature used by the small synthetic fixtures.
pub const SMALL_BASE_TEMPERATURE: f64 = 8.0;

/// First year of the small fixture; 2010 is its only decade year.
pub const SMALL_FIRST_YEAR: i64 = 2009;

/// 3 years x 12 months, base 8.0, variance evenly spread over [-1, 1].
pub fn small_dataset_records() -> Vec<RawTuple> {
    create_monthly_records(SMALL_FIRST_YEAR, 3, -1.0, 1.0)
}

/// JSON form of [`small_dataset_records`].
pub fn small_dataset_json() -> String {
    dataset_json(SMALL_BASE_TEMPERATURE, &small_dataset_records())
}

/// The first few records of the real dataset, verbatim.
pub const REAL_DATASET_HEAD: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 1, "variance": -1.366 },
    { "year": 1753, "month": 2, "variance": -2.223 },
    { "year": 1753, "month": 3, "variance": 0.211 },
    { "year": 1753, "month": 4, "variance": -0.843 },
    { "year": 1753, "month": 5, "variance": -0.771 },
    { "year": 1753, "month": 6, "variance": -0.187 }
  ]
}"#;

/// Document with records that fail validation (months 0 and 13).
pub const DATASET_WITH_BAD_MONTHS: &str = r#"{
  "baseTemperature": 8.66,
  "monthlyVariance": [
    { "year": 1753, "month": 0, "variance": 0.1 },
    { "year": 1753, "month": 1, "variance": 0.2 },
    { "year": 1753, "month": 13, "variance": 0.3 }
  ]
}"#;

/// Not a dataset at all.
pub const MALFORMED_JSON: &str = r#"{ "baseTemperature": "#;
