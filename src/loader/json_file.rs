use serde::de::DeserializeOwned;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::task::JoinError;
use tokio::{fs, task};
use tracing::instrument;

/// Reads `path` and decodes its JSON content into `T`.
#[instrument(level = "debug")]
pub async fn read_json<T>(path: &Path) -> Result<T, JsonFileError>
where
    T: DeserializeOwned + Send + 'static,
{
    let io_error = |source: io::Error| JsonFileError::Io {
        source,
        path: path.to_path_buf(),
    };

    if !fs::metadata(path).await.map_err(io_error)?.is_file() {
        return Err(JsonFileError::NotAFile { path: path.to_path_buf() });
    }

    let content = fs::read_to_string(path).await.map_err(io_error)?;

    let path = path.to_path_buf();
    task::spawn_blocking(move || serde_json::from_str::<T>(&content).map_err(|source| JsonFileError::Decode { source, path })).await?
}

#[derive(Error, Debug)]
pub enum JsonFileError {
    #[error("'{}' is not a file", path.display())]
    NotAFile { path: PathBuf },
    #[error("unable to read '{}': {source}", path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("unable to decode '{}': {source}", path.display())]
    Decode { source: serde_json::Error, path: PathBuf },
    #[error(transparent)]
    JoinError(#[from] JoinError),
}
