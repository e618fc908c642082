//! Generators for synthetic monthly-variance datasets.
//!
//! Records are `(year, month, variance)` tuples with one-indexed months,
//! exactly as the upstream data source serves them.

use std::io::Write;

use serde_json::json;
use tempfile::NamedTempFile;

/// A raw record tuple: (year, one-indexed month, variance).
pub type RawTuple = (i64, i64, f64);

/// Creates `years * 12` records starting at `first_year`, with variance
/// spread evenly across `[variance_lo, variance_hi]` in input order.
///
/// # Example
///
/// ```
/// use test_utils::create_monthly_records;
///
/// let records = create_monthly_records(2009, 3, -1.0, 1.0);
/// assert_eq!(records.len(), 36);
/// assert_eq!(records[0], (2009, 1, -1.0));
/// assert_eq!(records[35], (2011, 12, 1.0));
/// ```
pub fn create_monthly_records(
    first_year: i64,
    years: usize,
    variance_lo: f64,
    variance_hi: f64,
) -> Vec<RawTuple> {
    let count = years * 12;
    let step = if count > 1 {
        (variance_hi - variance_lo) / (count - 1) as f64
    } else {
        0.0
    };

    (0..count)
        .map(|i| {
            let year = first_year + (i / 12) as i64;
            let month = (i % 12) as i64 + 1;
            let variance = if i + 1 == count {
                variance_hi
            } else {
                variance_lo + step * i as f64
            };
            (year, month, variance)
        })
        .collect()
}

/// Creates records whose variance follows a seasonal sine wave plus a
/// linear warming trend, similar in shape to the real dataset.
pub fn create_seasonal_records(first_year: i64, years: usize) -> Vec<RawTuple> {
    let mut records = Vec::with_capacity(years * 12);
    for y in 0..years {
        for m in 0..12 {
            let season = (m as f64 / 12.0 * std::f64::consts::TAU).sin();
            let trend = y as f64 * 0.01;
            records.push((first_year + y as i64, m as i64 + 1, season + trend - 0.5));
        }
    }
    records
}

/// Serializes records into the source JSON document shape.
pub fn dataset_json(base_temperature: f64, records: &[RawTuple]) -> String {
    let monthly: Vec<_> = records
        .iter()
        .map(|&(year, month, variance)| json!({ "year": year, "month": month, "variance": variance }))
        .collect();

    json!({
        "baseTemperature": base_temperature,
        "monthlyVariance": monthly,
    })
    .to_string()
}

/// Convenience wrapper: evenly spread synthetic dataset as JSON.
pub fn synthetic_dataset_json(
    first_year: i64,
    years: usize,
    base_temperature: f64,
    variance_lo: f64,
    variance_hi: f64,
) -> String {
    dataset_json(
        base_temperature,
        &create_monthly_records(first_year, years, variance_lo, variance_hi),
    )
}

/// Writes JSON to a temporary file that lives as long as the handle.
pub fn write_temp_json(json: &str) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile()?;
    file.write_all(json.as_bytes())?;
    file.flush()?;
    Ok(file)
}
