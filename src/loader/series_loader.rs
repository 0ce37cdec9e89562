use crate::domain::{ElevationSeries, PointSeries, TimestampSeries};
use crate::loader::JsonFileError;
use crate::loader::json_file::read_json;
use std::path::Path;
use tracing::{debug, instrument};

#[instrument(level = "debug")]
pub async fn load_points(path: &Path) -> Result<PointSeries, JsonFileError> {
    let series = read_json::<PointSeries>(path).await?;
    debug!("📍 Loaded {} points", series.points.len());
    Ok(series)
}

#[instrument(level = "debug")]
pub async fn load_elevations(path: &Path) -> Result<ElevationSeries, JsonFileError> {
    let series = read_json::<ElevationSeries>(path).await?;
    debug!("⛰️ Loaded {} elevations", series.elevations.len());
    Ok(series)
}

#[instrument(level = "debug")]
pub async fn load_timestamps(path: &Path) -> Result<TimestampSeries, JsonFileError> {
    let series = read_json::<TimestampSeries>(path).await?;
    debug!("🕑 Loaded {} timestamps", series.offsets.len());
    Ok(series)
}
