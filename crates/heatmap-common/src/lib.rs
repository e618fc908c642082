//! Common types shared by the temperature heat-map renderer and its CLI.

pub mod color;
pub mod dataset;
pub mod error;
pub mod month;
pub mod number;

pub use color::Color;
pub use dataset::{
    Dataset, EnrichedRecord, RawDataset, RawRecord, ValidationMode, DEFAULT_DATA_URL,
};
pub use error::{HeatmapError, HeatmapResult};
pub use month::Month;
pub use number::{round1, to_fixed};
