mod gpx_document;
mod merged_point;
mod series;
mod track_record;

pub use gpx_document::GpxDocument;
pub use merged_point::MergedPoint;
pub use series::{ElevationSeries, Offset, PointSeries, TimestampSeries};
pub use track_record::{SeriesReference, TrackRecord};
