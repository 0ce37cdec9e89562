use async_trait::async_trait;
use futures::StreamExt;
use reqwest::{Client, StatusCode};
use std::fmt::Debug;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

/// Downloads a remote file to a local path.
#[async_trait]
pub trait Fetch: Debug + Send + Sync {
    async fn fetch_to(&self, url: &str, destination: &Path) -> Result<(), FetchError>;
}

#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        HttpFetcher { client }
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    #[instrument(skip(self, destination))]
    async fn fetch_to(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
        let response = self.client.get(url).send().await?;
        if response.status() != StatusCode::OK {
            return Err(FetchError::Status {
                url: url.to_owned(),
                status: response.status(),
            });
        }

        let io_error = |source: io::Error| FetchError::Io {
            source,
            path: destination.to_path_buf(),
        };

        let mut file = fs::File::create(destination).await.map_err(io_error)?;
        let mut stream = response.bytes_stream();
        let mut written = 0;
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            file.write_all(&chunk).await.map_err(io_error)?;
            written += chunk.len();
        }
        file.flush().await.map_err(io_error)?;

        debug!(bytes = written, "🔸 Downloaded {}", url);
        Ok(())
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("failed to fetch the file: {0}")]
    Request(#[from] reqwest::Error),
    #[error("bad status {status} for '{url}'")]
    Status { url: String, status: StatusCode },
    #[error("failed to write '{}': {source}", path.display())]
    Io { source: io::Error, path: PathBuf },
    #[error("no local file name given and none can be derived from '{url}'")]
    MissingFileName { url: String },
}
