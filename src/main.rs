use crate::app_config::AppConfig;
use crate::fetch::{HttpFetcher, new_client};
use crate::pipeline::{ExportSettings, TrackExporter};
use clap::{Parser, ValueHint};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};

mod app_config;
mod domain;
mod extensions;
mod fetch;
mod loader;
mod pipeline;

#[derive(Parser, Debug)]
#[command(version, about = "Create GPX files from an extracted track data export", long_about = None)]
struct Cli {
    /// Folder with the extracted export data
    #[arg(value_hint = ValueHint::DirPath)]
    directory: PathBuf,

    /// Additional configuration file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Author written into every GPX file, defaults to the third word of the folder name
    #[arg(long)]
    author: Option<String>,

    /// Only use series files present in the folder, never download them
    #[arg(long)]
    offline: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load(cli.config.as_deref())?;
    info!("✅  Loaded configuration");

    let settings = ExportSettings::resolve(&config, &cli.directory, cli.author.as_deref(), cli.offline);
    match &settings.author {
        Some(author) => info!("✅  Writing tracks for author '{}'", author),
        None => info!("✅  Writing tracks without an author"),
    }

    let fetcher = HttpFetcher::new(new_client(&config)?);
    let exporter = TrackExporter::new(Box::new(fetcher), cli.directory, settings);
    let summary = exporter.export_all().await?;

    for outcome in summary.outcomes() {
        if let Err(err) = &outcome.result {
            error!("❌ '{}': {}", outcome.track, err);
        }
    }

    if summary.failed() > 0 {
        return Ok(ExitCode::FAILURE);
    }

    info!("🔥 {} GPX file(s) written", summary.written_files().count());
    Ok(ExitCode::SUCCESS)
}
