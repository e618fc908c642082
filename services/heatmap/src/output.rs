//! Rendering the chart into bytes and writing them out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use renderer::{raster, Chart, TooltipState};
use tokio::fs;
use tracing::info;

use crate::config::OutputFormat;

/// Serialize the chart in the requested format.
pub fn render_bytes(
    chart: &Chart<'_>,
    tooltip: &TooltipState,
    format: OutputFormat,
    png_scale: f32,
) -> Result<Vec<u8>> {
    let bytes = match format {
        OutputFormat::Svg => chart.to_svg(tooltip).into_bytes(),
        OutputFormat::Html => chart.to_html(tooltip).into_bytes(),
        OutputFormat::Png => raster::svg_to_png(&chart.to_svg(tooltip), png_scale)
            .context("Failed to rasterize chart")?,
    };
    Ok(bytes)
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".partial");
    path.with_file_name(name)
}

/// Write via a `.partial` file and rename, so a failed write never leaves a
/// truncated chart at `path`.
pub async fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let temp = partial_path(path);
    fs::write(&temp, bytes)
        .await
        .with_context(|| format!("Failed to write {}", temp.display()))?;

    if let Err(e) = fs::rename(&temp, path).await {
        fs::remove_file(&temp).await.ok();
        return Err(e).with_context(|| format!("Failed to move output to {}", path.display()));
    }

    info!(path = %path.display(), bytes = bytes.len(), "Chart written");
    Ok(())
}
