mod consistency;
mod document;
mod exporter;
mod file_name;
mod merger;
mod start_time;
mod summary;

pub use exporter::{ExportSettings, TrackError, TrackExporter};
pub use summary::RunSummary;
