use crate::domain::MergedPoint;
use chrono::{DateTime, Utc};

/// Everything written for one track: metadata plus a single track with a single segment.
#[derive(Debug, Clone, PartialEq)]
pub struct GpxDocument {
    pub name: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub keywords: Option<String>,
    pub start_time: DateTime<Utc>,
    pub points: Vec<MergedPoint>,
}
