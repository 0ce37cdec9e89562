use chrono::{DateTime, NaiveDateTime, ParseError, Utc};

const START_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S.%3fZ";

/// Parses the recorded start of a track, e.g. `2023-09-14T07:00:00.000Z`.
pub fn parse_start_time(value: &str) -> Result<DateTime<Utc>, ParseError> {
    NaiveDateTime::parse_from_str(value, START_TIME_FORMAT).map(|time| time.and_utc())
}
