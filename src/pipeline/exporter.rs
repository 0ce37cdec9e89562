use crate::app_config::AppConfig;
use crate::domain::{GpxDocument, SeriesReference, TrackRecord};
use crate::extensions::path_ext::ExportPath;
use crate::fetch::{Fetch, FetchError, ensure_local, local_file_name};
use crate::loader::{JsonFileError, load_elevations, load_overview, load_points, load_timestamps};
use crate::pipeline::RunSummary;
use crate::pipeline::consistency::check;
use crate::pipeline::document::{DocumentError, to_gpx, write_gpx};
use crate::pipeline::file_name::build_file_name;
use crate::pipeline::merger::{MergeError, merge};
use crate::pipeline::start_time::parse_start_time;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Run-wide values shared read-only by every track.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSettings {
    pub overview_file: String,
    pub author: Option<String>,
    pub creator: String,
    pub fetch_remote: bool,
}

impl ExportSettings {
    /// An explicit author wins over the configured one, which wins over the folder name.
    pub fn resolve(config: &AppConfig, directory: &Path, author: Option<&str>, offline: bool) -> Self {
        let author = author
            .map(str::trim)
            .filter(|author| !author.is_empty())
            .or(config.export().author())
            .map(str::to_owned)
            .or_else(|| directory.author_from_folder_name());

        ExportSettings {
            overview_file: config.export().overview_file().to_owned(),
            author,
            creator: config.gpx().creator().to_owned(),
            fetch_remote: config.fetch().enabled() && !offline,
        }
    }
}

/// Turns every track of an export directory into a GPX file next to the export data.
#[derive(Debug)]
pub struct TrackExporter {
    fetcher: Box<dyn Fetch>,
    directory: PathBuf,
    settings: ExportSettings,
}

impl TrackExporter {
    pub fn new(fetcher: Box<dyn Fetch>, directory: impl Into<PathBuf>, settings: ExportSettings) -> Self {
        TrackExporter {
            fetcher,
            directory: directory.into(),
            settings,
        }
    }

    /// Exports the tracks one after the other. A failing track is recorded and skipped.
    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    pub async fn export_all(&self) -> Result<RunSummary, ExportError> {
        let records = load_overview(&self.directory.join(&self.settings.overview_file)).await?;

        info!("🛰️ Exporting {} track(s)...", records.len());
        let mut summary = RunSummary::default();
        for record in &records {
            let result = self.export_track(record).await;
            if let Err(err) = &result {
                warn!(track = record.name, "⚠️ Failed to export '{}': {}", record.name, err);
            }
            summary.push(record.name.as_str(), result);
        }

        info!("🛰️ Exporting {} track(s)... OK, {} written, {} failed", records.len(), summary.succeeded(), summary.failed());
        Ok(summary)
    }

    #[instrument(skip_all, fields(track = %record.name))]
    pub async fn export_track(&self, record: &TrackRecord) -> Result<PathBuf, TrackError> {
        debug!(distance = ?record.distance, duration = ?record.duration, "🔹 Exporting track");

        let iso = record.start_time_iso().ok_or(TrackError::MissingStartTime)?;
        let start_time = parse_start_time(iso).map_err(|source| TrackError::StartTime {
            value: iso.to_owned(),
            source,
        })?;
        let file_name = build_file_name(&start_time, &record.name);

        let points = load_points(&self.ensure_local(&record.points).await?).await?;
        let elevations = load_elevations(&self.ensure_local(&record.altitudes).await?).await?;
        let timestamps = load_timestamps(&self.ensure_local(&record.timestamps).await?).await?;

        if let Some(inconsistency) = check(points.points.len(), elevations.elevations.len(), timestamps.offsets.len()) {
            warn!(
                points_file = record.points.name,
                elevations_file = record.altitudes.name,
                timestamps_file = record.timestamps.name,
                "⚠️ {} ({})",
                inconsistency,
                file_name
            );
        }

        let document = GpxDocument {
            name: record.name.clone(),
            description: record.comment().map(str::to_owned),
            author: self.settings.author.clone(),
            keywords: record.keywords(),
            start_time,
            points: merge(&points, &elevations, &timestamps, start_time)?,
        };

        let output = self.directory.join(&file_name);
        write_gpx(&to_gpx(&document, &self.settings.creator)?, &output).await?;

        info!(points = document.points.len(), "🗺️ Written {}", output.string_file_name());
        Ok(output)
    }

    async fn ensure_local(&self, reference: &SeriesReference) -> Result<PathBuf, FetchError> {
        if !self.settings.fetch_remote {
            // Offline runs still find files an earlier run downloaded under the URL's name
            let file_name = local_file_name(&reference.name, reference.remote_url())?;
            return Ok(self.directory.join(file_name));
        }
        ensure_local(self.fetcher.as_ref(), &self.directory, &reference.name, reference.remote_url()).await
    }
}

#[derive(Error, Debug)]
pub enum TrackError {
    #[error("the track has no start time")]
    MissingStartTime,
    #[error("invalid start time '{value}': {source}")]
    StartTime { value: String, source: chrono::ParseError },
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Series(#[from] JsonFileError),
    #[error(transparent)]
    Merge(#[from] MergeError),
    #[error(transparent)]
    Document(#[from] DocumentError),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("unable to load the track overview: {0}")]
    Overview(#[from] JsonFileError),
}
