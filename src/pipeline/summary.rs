use crate::pipeline::TrackError;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub struct TrackOutcome {
    pub track: String,
    pub result: Result<PathBuf, TrackError>,
}

/// Per-track results of one run, in overview order.
#[derive(Debug, Default)]
pub struct RunSummary {
    outcomes: Vec<TrackOutcome>,
}

impl RunSummary {
    pub fn push(&mut self, track: impl Into<String>, result: Result<PathBuf, TrackError>) {
        self.outcomes.push(TrackOutcome { track: track.into(), result });
    }

    pub fn outcomes(&self) -> &[TrackOutcome] {
        &self.outcomes
    }

    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|outcome| outcome.result.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    pub fn written_files(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|outcome| outcome.result.as_deref().ok())
    }
}
