//! Raw dataset schema and the enrichment pass that feeds the renderer.
//!
//! The source JSON looks like:
//!
//! ```json
//! { "baseTemperature": 8.66,
//!   "monthlyVariance": [ { "year": 1753, "month": 1, "variance": -1.366 } ] }
//! ```
//!
//! Months arrive one-indexed and leave zero-indexed. Every enriched record
//! carries `temperature = round1(baseTemperature + variance)`.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{HeatmapError, HeatmapResult};
use crate::month::Month;
use crate::number::round1;

/// Public location of the monthly global land-surface temperature dataset.
pub const DEFAULT_DATA_URL: &str =
    "https://raw.githubusercontent.com/freeCodeCamp/ProjectReferenceData/master/global-temperature.json";

/// Years outside this range are treated as malformed input.
const YEAR_RANGE: std::ops::RangeInclusive<i64> = 0..=9999;

/// Top-level document as served by the data source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDataset {
    pub base_temperature: f64,
    pub monthly_variance: Vec<RawRecord>,
}

impl RawDataset {
    /// Parse the source JSON document.
    pub fn from_json(json: &str) -> HeatmapResult<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// One month of one year as received (month is one-indexed).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub year: i64,
    pub month: i64,
    pub variance: f64,
}

impl RawRecord {
    fn check(&self) -> Result<Month, String> {
        if !YEAR_RANGE.contains(&self.year) {
            return Err(format!("year {} out of range", self.year));
        }
        if !self.variance.is_finite() {
            return Err(format!("variance {} is not finite", self.variance));
        }
        Month::from_number(self.month).map_err(|e| e.to_string())
    }
}

/// A record after month zero-indexing and temperature derivation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnrichedRecord {
    pub year: i32,
    pub month: Month,
    pub variance: f64,
    pub temperature: f64,
}

/// How non-conforming raw records are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationMode {
    /// Drop invalid records with a warning.
    #[default]
    Lenient,
    /// Fail on the first invalid record.
    Strict,
}

/// Enriched, validated dataset. Read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    base_temperature: f64,
    records: Vec<EnrichedRecord>,
    min_temp: f64,
    max_temp: f64,
    min_year: i32,
    max_year: i32,
    rejected: usize,
}

impl Dataset {
    /// Validate and enrich raw records, preserving input order.
    pub fn from_raw(raw: &RawDataset, mode: ValidationMode) -> HeatmapResult<Self> {
        let base = raw.base_temperature;
        if !base.is_finite() {
            return Err(HeatmapError::InvalidBaseTemperature(base));
        }

        let mut records = Vec::with_capacity(raw.monthly_variance.len());
        let mut rejected = 0;

        for (index, rec) in raw.monthly_variance.iter().enumerate() {
            match rec.check() {
                Ok(month) => records.push(EnrichedRecord {
                    year: rec.year as i32,
                    month,
                    variance: rec.variance,
                    temperature: round1(base + rec.variance),
                }),
                Err(reason) if mode == ValidationMode::Strict => {
                    return Err(HeatmapError::InvalidRecord { index, reason });
                }
                Err(reason) => {
                    warn!(index, reason = %reason, "Dropping invalid record");
                    rejected += 1;
                }
            }
        }

        let first = records.first().ok_or(HeatmapError::EmptyDataset)?;
        let (mut min_temp, mut max_temp) = (first.temperature, first.temperature);
        let (mut min_year, mut max_year) = (first.year, first.year);
        for r in &records {
            min_temp = min_temp.min(r.temperature);
            max_temp = max_temp.max(r.temperature);
            min_year = min_year.min(r.year);
            max_year = max_year.max(r.year);
        }

        debug!(
            records = records.len(),
            rejected,
            min_temp,
            max_temp,
            "Dataset enriched"
        );

        Ok(Self {
            base_temperature: base,
            records,
            min_temp,
            max_temp,
            min_year,
            max_year,
            rejected,
        })
    }

    /// Parse and enrich in one step.
    pub fn from_json(json: &str, mode: ValidationMode) -> HeatmapResult<Self> {
        Self::from_raw(&RawDataset::from_json(json)?, mode)
    }

    pub fn base_temperature(&self) -> f64 {
        self.base_temperature
    }

    pub fn records(&self) -> &[EnrichedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn min_temp(&self) -> f64 {
        self.min_temp
    }

    pub fn max_temp(&self) -> f64 {
        self.max_temp
    }

    /// Inclusive (first, last) year.
    pub fn year_range(&self) -> (i32, i32) {
        (self.min_year, self.max_year)
    }

    /// Number of raw records dropped during lenient validation.
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    pub fn temperatures(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|r| r.temperature)
    }
}
