use serde::Deserialize;

/// Coordinates as `[latitude, longitude, ...]`, one entry per sample.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PointSeries {
    pub points: Vec<Vec<f64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ElevationSeries {
    #[serde(rename = "altitudes")]
    pub elevations: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TimestampSeries {
    #[serde(rename = "dates")]
    pub offsets: Vec<Offset>,
}

/// Milliseconds elapsed since the start of the track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset(pub i64);

impl Offset {
    pub fn millis(&self) -> i64 {
        self.0
    }
}

impl From<Vec<Vec<f64>>> for PointSeries {
    fn from(points: Vec<Vec<f64>>) -> Self {
        PointSeries { points }
    }
}

impl From<Vec<f64>> for ElevationSeries {
    fn from(elevations: Vec<f64>) -> Self {
        ElevationSeries { elevations }
    }
}

impl From<Vec<i64>> for TimestampSeries {
    fn from(offsets: Vec<i64>) -> Self {
        TimestampSeries {
            offsets: offsets.into_iter().map(Offset).collect(),
        }
    }
}
