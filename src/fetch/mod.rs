mod client;
mod ensure_local;
mod fetcher;

pub use client::new_client;
pub use ensure_local::{ensure_local, local_file_name};
pub use fetcher::{Fetch, FetchError, HttpFetcher};
