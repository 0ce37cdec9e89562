use crate::domain::{GpxDocument, MergedPoint};
use crate::extensions::date_time_ext::ToGpxTime;
use geo_types::Point;
use gpx::errors::GpxError;
use gpx::{Gpx, GpxVersion, Metadata, Person, Track, TrackSegment, Waypoint};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use time::error::ComponentRange;
use tokio::fs;
use tracing::instrument;

pub fn to_gpx(document: &GpxDocument, creator: &str) -> Result<Gpx, DocumentError> {
    let metadata = Metadata {
        name: Some(document.name.clone()),
        description: document.description.clone(),
        author: document.author.as_ref().map(|name| Person {
            name: Some(name.clone()),
            ..Default::default()
        }),
        time: Some(document.start_time.to_gpx_time()?),
        keywords: document.keywords.clone(),
        ..Default::default()
    };

    let segment = TrackSegment {
        points: document.points.iter().map(to_waypoint).collect::<Result<Vec<_>, _>>()?,
    };

    let mut track = Track::new();
    track.name = Some(document.name.clone());
    track.comment = document.description.clone();
    track.segments.push(segment);

    Ok(Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(creator.to_owned()),
        metadata: Some(metadata),
        tracks: vec![track],
        ..Default::default()
    })
}

fn to_waypoint(point: &MergedPoint) -> Result<Waypoint, ComponentRange> {
    // GPX points are (x, y) = (longitude, latitude)
    let mut waypoint = Waypoint::new(Point::new(point.longitude, point.latitude));
    waypoint.elevation = point.elevation;
    waypoint.time = point.time.as_ref().map(ToGpxTime::to_gpx_time).transpose()?;
    Ok(waypoint)
}

/// Serializes the whole document before creating `path`, so the file is written in one go.
#[instrument(skip(gpx))]
pub async fn write_gpx(gpx: &Gpx, path: &Path) -> Result<(), DocumentError> {
    let mut payload = Vec::new();
    gpx::write(gpx, &mut payload)?;

    fs::write(path, payload).await.map_err(|source| DocumentError::Io {
        source,
        path: path.to_path_buf(),
    })
}

#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("time not representable in GPX: {0}")]
    Time(#[from] ComponentRange),
    #[error("unable to serialize GPX: {0}")]
    Gpx(#[from] GpxError),
    #[error("unable to write '{}': {source}", path.display())]
    Io { source: io::Error, path: PathBuf },
}
