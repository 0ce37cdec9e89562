use crate::domain::{ElevationSeries, MergedPoint, PointSeries, TimestampSeries};
use chrono::{DateTime, TimeDelta, Utc};
use thiserror::Error;

/// Zips the three series into one point per coordinate.
///
/// The points series decides the length of the result. Elevation and time are attached only for
/// indices covered by their series, trailing points of a shorter series go without.
pub fn merge(
    points: &PointSeries,
    elevations: &ElevationSeries,
    timestamps: &TimestampSeries,
    start_time: DateTime<Utc>,
) -> Result<Vec<MergedPoint>, MergeError> {
    points
        .points
        .iter()
        .enumerate()
        .map(|(index, coordinates)| {
            let &[latitude, longitude, ..] = coordinates.as_slice() else {
                return Err(MergeError::IncompletePoint {
                    index,
                    values: coordinates.len(),
                });
            };

            let time = timestamps
                .offsets
                .get(index)
                .map(|offset| {
                    TimeDelta::try_milliseconds(offset.millis())
                        .and_then(|delta| start_time.checked_add_signed(delta))
                        .ok_or(MergeError::TimeOutOfRange { index, offset: offset.millis() })
                })
                .transpose()?;

            Ok(MergedPoint {
                latitude,
                longitude,
                elevation: elevations.elevations.get(index).copied(),
                time,
            })
        })
        .collect()
}

#[derive(Error, Debug, PartialEq)]
pub enum MergeError {
    #[error("point {index} has {values} value(s), expected latitude and longitude")]
    IncompletePoint { index: usize, values: usize },
    #[error("timestamp offset {offset} ms of point {index} is out of range")]
    TimeOutOfRange { index: usize, offset: i64 },
}
