use crate::domain::TrackRecord;
use crate::loader::JsonFileError;
use crate::loader::json_file::read_json;
use std::path::Path;
use tracing::{info, instrument};

#[instrument]
pub async fn load_overview(path: &Path) -> Result<Vec<TrackRecord>, JsonFileError> {
    info!("📁 Loading track overview...");
    let records = read_json::<Vec<TrackRecord>>(path).await?;
    info!("📁 Loading track overview... OK, {} tracks found", records.len());
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[tokio::test]
    async fn load_overview_keeps_the_order_of_the_file() -> Result<(), JsonFileError> {
        let path = PathBuf::from(format!("{}/tests/resources/track_data.json", env!("CARGO_MANIFEST_DIR")));
        assert!(path.is_file(), "expected path to be a file");

        let records = load_overview(&path).await?;

        let names = records.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, vec!["Morning Ride", "Evening: Loop / Hills"]);
        Ok(())
    }

    #[tokio::test]
    async fn load_overview_fails_when_the_root_is_not_an_array() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("track data.json");
        tokio::fs::write(&path, r#"{"name": "Morning Ride"}"#).await?;

        let result = load_overview(&path).await;

        assert!(matches!(result, Err(JsonFileError::Decode { .. })));
        Ok(())
    }
}
