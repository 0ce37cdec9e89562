use config::{Config, ConfigError};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    export: Export,
    fetch: Fetch,
    gpx: Gpx,
}

impl AppConfig {
    pub fn load(extra_file: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("export.overview_file", "track data.json")?
            .set_default("fetch.enabled", true)?
            .set_default("fetch.timeout", "30s")?
            .set_default("gpx.creator", env!("CARGO_PKG_NAME"))?
            .add_source(config::File::with_name(env!("CARGO_PKG_NAME")).required(false));

        if let Some(path) = extra_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        builder
            .add_source(config::Environment::with_prefix("TRACK2GPX").prefix_separator("__").separator("__"))
            .build()?
            .try_deserialize()
    }

    pub fn export(&self) -> &Export {
        &self.export
    }

    pub fn fetch(&self) -> &Fetch {
        &self.fetch
    }

    pub fn gpx(&self) -> &Gpx {
        &self.gpx
    }
}

#[derive(Debug, Deserialize)]
pub struct Export {
    overview_file: String,
    author: Option<String>,
}

impl Export {
    pub fn overview_file(&self) -> &str {
        &self.overview_file
    }

    pub fn author(&self) -> Option<&str> {
        self.author.as_deref().filter(|author| !author.trim().is_empty())
    }
}

#[derive(Debug, Deserialize)]
pub struct Fetch {
    enabled: bool,
    #[serde(with = "humantime_serde")]
    timeout: Duration,
}

impl Fetch {
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[derive(Debug, Deserialize)]
pub struct Gpx {
    creator: String,
}

impl Gpx {
    pub fn creator(&self) -> &str {
        &self.creator
    }
}

#[cfg(test)]
pub struct AppConfigBuilder {
    config: AppConfig,
}

#[cfg(test)]
impl AppConfigBuilder {
    pub fn new() -> Self {
        AppConfigBuilder {
            config: AppConfig {
                export: Export {
                    overview_file: "track data.json".to_string(),
                    author: None,
                },
                fetch: Fetch {
                    enabled: true,
                    timeout: Duration::from_secs(2),
                },
                gpx: Gpx {
                    creator: "track2gpx".to_string(),
                },
            },
        }
    }

    pub fn author(mut self, author: &str) -> Self {
        self.config.export.author = Some(author.to_string());
        self
    }

    pub fn fetch_enabled(mut self, enabled: bool) -> Self {
        self.config.fetch.enabled = enabled;
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}
