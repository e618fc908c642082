//! Dataset loading from the remote source or a local file.
//!
//! Single attempt, no retries: if the load fails nothing is rendered.

use std::path::PathBuf;
use std::time::Duration;

use heatmap_common::{HeatmapError, HeatmapResult, RawDataset};
use reqwest::Client;
use tracing::{debug, info, instrument};

/// Where the dataset comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Url(String),
    File(PathBuf),
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Url(url) => f.write_str(url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loads the raw dataset document.
pub struct Loader {
    client: Client,
}

impl Loader {
    /// Create a loader whose HTTP requests give up after `timeout`.
    pub fn new(timeout: Duration) -> HeatmapResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .connect_timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| HeatmapError::Fetch(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client })
    }

    #[instrument(skip(self), fields(source = %source))]
    pub async fn load(&self, source: &DataSource) -> HeatmapResult<RawDataset> {
        let raw = match source {
            DataSource::Url(url) => self.fetch(url).await?,
            DataSource::File(path) => {
                let content = tokio::fs::read_to_string(path).await?;
                RawDataset::from_json(&content)?
            }
        };

        info!(
            records = raw.monthly_variance.len(),
            base_temperature = raw.base_temperature,
            "Dataset loaded"
        );
        Ok(raw)
    }

    async fn fetch(&self, url: &str) -> HeatmapResult<RawDataset> {
        debug!(url = %url, "Fetching dataset");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| HeatmapError::Fetch(e.to_string()))?;

        let body = response
            .text()
            .await
            .map_err(|e| HeatmapError::Fetch(e.to_string()))?;

        RawDataset::from_json(&body)
    }
}
