//! Monthly global land-surface temperature heat map.
//!
//! Loads the variance dataset once, then:
//! - Validates and enriches records (zero-indexed months, absolute temps)
//! - Builds band, quantile, and linear scales
//! - Renders axes, cells, titles, and legend to SVG, HTML, or PNG
//! - Optionally renders a tooltip snapshot for one hovered cell

mod config;
mod loader;
mod output;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use heatmap_common::{Dataset, ValidationMode, DEFAULT_DATA_URL};
use renderer::{Chart, TooltipState};
use tracing::{error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use config::{HoverSpec, OutputFormat};
use loader::{DataSource, Loader};

#[derive(Parser, Debug)]
#[command(name = "heatmap")]
#[command(about = "Render the monthly global land-surface temperature heat map")]
struct Args {
    /// Dataset URL
    #[arg(long, env = "HEATMAP_DATA_URL", default_value = DEFAULT_DATA_URL)]
    url: String,

    /// Read the dataset from a local JSON file instead of fetching it
    #[arg(short, long, env = "HEATMAP_INPUT")]
    input: Option<PathBuf>,

    /// Output file
    #[arg(short, long, env = "HEATMAP_OUTPUT", default_value = "heatmap.svg")]
    output: PathBuf,

    /// Output format (default: inferred from the output extension, else svg)
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// YAML layout file (margins, sizes, palette, titles)
    #[arg(long, env = "HEATMAP_LAYOUT")]
    layout: Option<PathBuf>,

    /// Fail on the first invalid record instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Render with the tooltip shown for one cell, as YEAR-MONTH (e.g. 1900-7)
    #[arg(long)]
    hover: Option<HoverSpec>,

    /// Pixel scale for PNG output
    #[arg(long, default_value = "1.0")]
    png_scale: f32,

    /// HTTP timeout in seconds
    #[arg(long, env = "HEATMAP_TIMEOUT_SECS", default_value = "30")]
    timeout_secs: u64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    fn source(&self) -> DataSource {
        match &self.input {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Url(self.url.clone()),
        }
    }

    fn output_format(&self) -> OutputFormat {
        self.format
            .or_else(|| OutputFormat::from_path(&self.output))
            .unwrap_or(OutputFormat::Svg)
    }
}

fn init_tracing(log_level: &str, json: bool) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let builder = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .with_writer(std::io::stderr);

    if json {
        tracing::subscriber::set_global_default(builder.json().finish())?;
    } else {
        tracing::subscriber::set_global_default(builder.finish())?;
    }
    Ok(())
}

async fn run(args: &Args) -> Result<()> {
    let layout = config::load_layout(args.layout.as_deref())?;
    let format = args.output_format();
    let mode = if args.strict {
        ValidationMode::Strict
    } else {
        ValidationMode::Lenient
    };

    let loader = Loader::new(Duration::from_secs(args.timeout_secs))?;
    let source = args.source();
    let raw = loader
        .load(&source)
        .await
        .with_context(|| format!("Failed to load dataset from {}", source))?;

    let dataset = Dataset::from_raw(&raw, mode).context("Dataset failed validation")?;
    if dataset.rejected() > 0 {
        warn!(rejected = dataset.rejected(), "Some records were dropped");
    }

    let chart = Chart::new(&dataset, layout).context("Failed to build chart")?;

    let tooltip = match args.hover {
        Some(spec) => chart.hover_cell(spec.year, spec.month).with_context(|| {
            format!("No cell for {} {}", spec.month, spec.year)
        })?,
        None => TooltipState::Idle,
    };

    let bytes = output::render_bytes(&chart, &tooltip, format, args.png_scale)?;
    output::write_output(&args.output, &bytes).await?;

    let (first, last) = dataset.year_range();
    info!(
        records = dataset.len(),
        first_year = first,
        last_year = last,
        min_temp = dataset.min_temp(),
        max_temp = dataset.max_temp(),
        format = ?format,
        "Heat map rendered"
    );
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();
    init_tracing(&args.log_level, args.json_logs)?;

    info!(source = %args.source(), output = %args.output.display(), "Starting heat map render");

    if let Err(e) = run(&args).await {
        error!(error = %format!("{:#}", e), "Heat map render failed");
        return Err(e);
    }
    Ok(())
}
