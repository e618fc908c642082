//! Configuration: layout files, output formats, and hover snapshots.
//!
//! Layout comes from an optional YAML file; anything it leaves out keeps
//! the built-in default.

use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use heatmap_common::Month;
use renderer::ChartLayout;
use tracing::{debug, info};

/// Output file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Html,
    Png,
}

impl OutputFormat {
    /// Guess the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "svg" => Some(OutputFormat::Svg),
            "html" | "htm" => Some(OutputFormat::Html),
            "png" => Some(OutputFormat::Png),
            _ => None,
        }
    }
}

/// Load a layout from YAML, or the default layout when no path is given.
pub fn load_layout(path: Option<&Path>) -> Result<ChartLayout> {
    let Some(path) = path else {
        debug!("No layout file, using defaults");
        return Ok(ChartLayout::default());
    };

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout file {}", path.display()))?;
    let layout = parse_layout(&content)
        .with_context(|| format!("Invalid layout file {}", path.display()))?;

    info!(path = %path.display(), "Loaded layout");
    Ok(layout)
}

pub fn parse_layout(yaml: &str) -> Result<ChartLayout> {
    let layout: ChartLayout = serde_yaml::from_str(yaml).context("Failed to parse layout YAML")?;
    layout.validate()?;
    Ok(layout)
}

/// A cell to render with the tooltip showing, written as `YEAR-MONTH`
/// with a one-indexed month (e.g. `1900-7`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoverSpec {
    pub year: i32,
    pub month: Month,
}

impl FromStr for HoverSpec {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let Some((year, month)) = s.split_once('-') else {
            bail!("expected YEAR-MONTH, got '{}'", s);
        };
        let year: i32 = year
            .trim()
            .parse()
            .with_context(|| format!("invalid year '{}'", year))?;
        let month: i64 = month
            .trim()
            .parse()
            .with_context(|| format!("invalid month '{}'", month))?;

        Ok(Self {
            year,
            month: Month::from_number(month)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_format_from_path() {
        assert_eq!(OutputFormat::from_path(Path::new("a.svg")), Some(OutputFormat::Svg));
        assert_eq!(OutputFormat::from_path(Path::new("a.HTML")), Some(OutputFormat::Html));
        assert_eq!(OutputFormat::from_path(Path::new("out/a.png")), Some(OutputFormat::Png));
        assert_eq!(OutputFormat::from_path(Path::new("a.txt")), None);
        assert_eq!(OutputFormat::from_path(Path::new("a")), None);
    }

    #[test]
    fn test_hover_spec() {
        let h: HoverSpec = "1900-7".parse().unwrap();
        assert_eq!(h.year, 1900);
        assert_eq!(h.month.name(), "July");
        assert!("1900".parse::<HoverSpec>().is_err());
        assert!("1900-13".parse::<HoverSpec>().is_err());
        assert!("abc-1".parse::<HoverSpec>().is_err());
    }

    #[test]
    fn test_parse_layout_rejects_invalid() {
        assert!(parse_layout("year_tick_interval: 5").is_ok());
        assert!(parse_layout("year_tick_interval: 0").is_err());
        assert!(parse_layout("width: [").is_err());
    }

    #[test]
    fn test_load_layout_from_file() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "title: From file\nlegend:\n  width: 400").unwrap();

        let layout = load_layout(Some(file.path())).unwrap();
        assert_eq!(layout.title, "From file");
        assert_eq!(layout.legend.width, 400.0);
        assert_eq!(load_layout(None).unwrap(), ChartLayout::default());
    }
}
