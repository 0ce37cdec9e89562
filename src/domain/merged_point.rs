use chrono::{DateTime, Utc};

/// One GPS fix. Elevation and time are only known when their series covered this index.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<f64>, // Units as supplied by the export
    pub time: Option<DateTime<Utc>>,
}
