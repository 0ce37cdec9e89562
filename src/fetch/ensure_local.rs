use crate::fetch::{Fetch, FetchError};
use reqwest::Url;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument, warn};

/// Makes sure `file_name` is present in `directory`, downloading it from `url` when it isn't.
///
/// Existing files are never overwritten and blank URLs mean the file is expected to be local
/// already. The local name is resolved with [`local_file_name`].
/// Downloads go to a scratch file which is only renamed onto the destination once complete.
/// Returns the local path of the file.
#[instrument(skip(fetcher, directory))]
pub async fn ensure_local(fetcher: &dyn Fetch, directory: &Path, file_name: &str, url: Option<&str>) -> Result<PathBuf, FetchError> {
    let file_name = local_file_name(file_name, url)?;
    let Some(url) = non_blank(url) else {
        return Ok(directory.join(file_name));
    };

    let destination = directory.join(&file_name);
    let exists = fs::try_exists(&destination).await.map_err(|source| FetchError::Io {
        source,
        path: destination.clone(),
    })?;
    if exists {
        return Ok(destination);
    }

    let scratch = directory.join(format!(".{}.part", file_name));
    if let Err(err) = fetcher.fetch_to(url, &scratch).await {
        remove_scratch(&scratch).await;
        return Err(err);
    }

    if let Err(source) = fs::rename(&scratch, &destination).await {
        remove_scratch(&scratch).await;
        return Err(FetchError::Io { source, path: destination });
    }

    info!("💾 JSON file saved as {}", file_name);
    Ok(destination)
}

/// The name a series file has in the export directory. An empty name falls back to the last
/// path segment of `url`, so earlier downloads are found again without fetching.
pub fn local_file_name(file_name: &str, url: Option<&str>) -> Result<String, FetchError> {
    match (file_name.trim(), non_blank(url)) {
        ("", Some(url)) => file_name_from_url(url),
        (name, _) => Ok(name.to_owned()),
    }
}

fn non_blank(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|url| !url.is_empty())
}

fn file_name_from_url(url: &str) -> Result<String, FetchError> {
    Url::parse(url)
        .ok()
        .and_then(|url| url.path_segments().and_then(|mut segments| segments.next_back().map(str::to_owned)))
        .filter(|segment| !segment.is_empty() && segment != "." && segment != "..")
        .ok_or_else(|| FetchError::MissingFileName { url: url.to_owned() })
}

async fn remove_scratch(scratch: &Path) {
    match fs::remove_file(scratch).await {
        Ok(()) => {}
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!("⚠️ Unable to remove '{}': {}", scratch.display(), err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::HttpFetcher;
    use async_trait::async_trait;
    use reqwest::Client;
    use std::sync::Mutex;
    use test_log::test;

    /// Fails the test when a download is attempted.
    #[derive(Debug)]
    struct NoNetwork;

    #[async_trait]
    impl Fetch for NoNetwork {
        async fn fetch_to(&self, url: &str, _destination: &Path) -> Result<(), FetchError> {
            panic!("unexpected fetch of {}", url);
        }
    }

    /// Writes a fixed body and remembers the requested URLs.
    #[derive(Debug, Default)]
    struct Recording {
        urls: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Fetch for Recording {
        async fn fetch_to(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
            self.urls.lock().unwrap().push(url.to_owned());
            std::fs::write(destination, "{}").map_err(|source| FetchError::Io {
                source,
                path: destination.to_path_buf(),
            })
        }
    }

    /// Leaves a partial file behind and then fails.
    #[derive(Debug)]
    struct Truncating;

    #[async_trait]
    impl Fetch for Truncating {
        async fn fetch_to(&self, url: &str, destination: &Path) -> Result<(), FetchError> {
            std::fs::write(destination, "{\"poi").unwrap();
            Err(FetchError::MissingFileName { url: url.to_owned() })
        }
    }

    #[test(tokio::test)]
    async fn an_existing_file_is_never_fetched() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        std::fs::write(dir.path().join("points.json"), "local")?;

        let path = ensure_local(&NoNetwork, dir.path(), "points.json", Some("http://example.com/points.json")).await?;

        assert_eq!(path, dir.path().join("points.json"));
        assert_eq!(std::fs::read_to_string(&path)?, "local");

        Ok(())
    }

    #[test(tokio::test)]
    async fn an_empty_url_succeeds_without_the_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        for url in [None, Some(""), Some("   ")] {
            let path = ensure_local(&NoNetwork, dir.path(), "points.json", url).await?;
            assert_eq!(path, dir.path().join("points.json"));
            assert!(!path.exists());
        }

        Ok(())
    }

    #[test(tokio::test)]
    async fn a_missing_file_is_fetched_once() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let fetcher = Recording::default();

        ensure_local(&fetcher, dir.path(), "points.json", Some("http://example.com/p.json")).await?;
        let path = ensure_local(&fetcher, dir.path(), "points.json", Some("http://example.com/p.json")).await?;

        assert_eq!(*fetcher.urls.lock().unwrap(), vec!["http://example.com/p.json".to_string()]);
        assert_eq!(std::fs::read_to_string(&path)?, "{}");
        assert!(!dir.path().join(".points.json.part").exists());

        Ok(())
    }

    #[test(tokio::test)]
    async fn the_file_name_is_derived_from_the_url_when_empty() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let fetcher = Recording::default();

        let path = ensure_local(&fetcher, dir.path(), "", Some("http://example.com/files/dates_7.json?v=2")).await?;

        assert_eq!(path, dir.path().join("dates_7.json"));
        assert!(path.is_file());

        Ok(())
    }

    #[test]
    fn local_file_name_falls_back_to_the_url() {
        let url = Some("http://example.com/files/remote_points.json");

        assert_eq!(local_file_name("points.json", url).unwrap(), "points.json");
        assert_eq!(local_file_name("", url).unwrap(), "remote_points.json");
        assert_eq!(local_file_name(" ", url).unwrap(), "remote_points.json");
        assert_eq!(local_file_name("", Some("  ")).unwrap(), "");
        assert_eq!(local_file_name("", None).unwrap(), "");
        assert!(matches!(local_file_name("", Some("not a url")), Err(FetchError::MissingFileName { .. })));
    }

    #[test(tokio::test)]
    async fn an_url_without_a_file_name_fails() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let result = ensure_local(&NoNetwork, dir.path(), "", Some("http://example.com/")).await;

        assert!(matches!(result, Err(FetchError::MissingFileName { .. })));

        Ok(())
    }

    #[test(tokio::test)]
    async fn a_failed_fetch_leaves_no_file_behind() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;

        let result = ensure_local(&Truncating, dir.path(), "points.json", Some("http://example.com/points.json")).await;

        assert!(result.is_err());
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

        Ok(())
    }

    #[test(tokio::test)]
    async fn downloads_over_http_only_once() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/altitudes.json")
            .with_status(200)
            .with_body(r#"{"altitudes": [100, 105]}"#)
            .expect(1)
            .create_async()
            .await;

        let dir = tempfile::tempdir()?;
        let fetcher = HttpFetcher::new(Client::new());
        let url = format!("{}/altitudes.json", server.url());

        ensure_local(&fetcher, dir.path(), "altitudes.json", Some(&url)).await?;
        let path = ensure_local(&fetcher, dir.path(), "altitudes.json", Some(&url)).await?;

        mock.assert_async().await;
        assert_eq!(std::fs::read_to_string(path)?, r#"{"altitudes": [100, 105]}"#);

        Ok(())
    }

    #[test(tokio::test)]
    async fn a_bad_status_leaves_no_file_behind() -> Result<(), Box<dyn std::error::Error>> {
        let mut server = mockito::Server::new_async().await;
        let _mock = server.mock("GET", "/dates.json").with_status(500).with_body("oops").create_async().await;

        let dir = tempfile::tempdir()?;
        let url = format!("{}/dates.json", server.url());
        let result = ensure_local(&HttpFetcher::new(Client::new()), dir.path(), "dates.json", Some(&url)).await;

        assert!(matches!(result, Err(FetchError::Status { .. })));
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

        Ok(())
    }
}
