//! Error types for heat-map loading and rendering.

use thiserror::Error;

/// Result type alias using HeatmapError.
pub type HeatmapResult<T> = Result<T, HeatmapError>;

/// Primary error type for dataset and chart operations.
#[derive(Debug, Error)]
pub enum HeatmapError {
    // === Input Errors ===
    #[error("Failed to fetch dataset: {0}")]
    Fetch(String),

    #[error("Failed to parse dataset: {0}")]
    Parse(String),

    #[error("Invalid record at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("Invalid base temperature: {0}")]
    InvalidBaseTemperature(f64),

    #[error("Dataset contains no usable records")]
    EmptyDataset,

    // === Value Errors ===
    #[error("Month index out of range: {0}")]
    InvalidMonth(i64),

    #[error("Invalid color: {0}")]
    InvalidColor(String),

    // === Output Errors ===
    #[error("I/O error: {0}")]
    Io(String),
}

impl HeatmapError {
    /// Whether the error originated before any chart could be built.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HeatmapError::Fetch(_)
                | HeatmapError::Parse(_)
                | HeatmapError::InvalidRecord { .. }
                | HeatmapError::InvalidBaseTemperature(_)
                | HeatmapError::EmptyDataset
        )
    }
}

impl From<std::io::Error> for HeatmapError {
    fn from(err: std::io::Error) -> Self {
        HeatmapError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for HeatmapError {
    fn from(err: serde_json::Error) -> Self {
        HeatmapError::Parse(format!("JSON error: {}", err))
    }
}
