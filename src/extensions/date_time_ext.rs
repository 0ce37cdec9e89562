use chrono::{DateTime, Utc};
use time::OffsetDateTime;
use time::error::ComponentRange;

pub trait ToGpxTime {
    fn to_gpx_time(&self) -> Result<gpx::Time, ComponentRange>;
}

impl ToGpxTime for DateTime<Utc> {
    fn to_gpx_time(&self) -> Result<gpx::Time, ComponentRange> {
        let offset_date_time = OffsetDateTime::from_unix_timestamp(self.timestamp())?.replace_nanosecond(self.timestamp_subsec_nanos())?;
        Ok(offset_date_time.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    #[rstest]
    #[case(Utc.with_ymd_and_hms(2023, 9, 14, 7, 0, 0).unwrap(), 1_694_674_800, 0)]
    #[case(Utc.with_ymd_and_hms(1970, 1, 1, 0, 0, 0).unwrap(), 0, 0)]
    #[case(Utc.timestamp_millis_opt(1_694_674_860_250).unwrap(), 1_694_674_860, 250_000_000)]
    fn converts_to_gpx_time(#[case] input: DateTime<Utc>, #[case] expected_seconds: i64, #[case] expected_nanos: u32) {
        let converted: OffsetDateTime = input.to_gpx_time().unwrap().into();
        assert_eq!(converted.unix_timestamp(), expected_seconds);
        assert_eq!(converted.nanosecond(), expected_nanos);
    }
}
