use std::fmt;

/// Series lengths that disagree with each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Inconsistency {
    pub points: usize,
    pub elevations: usize,
    pub timestamps: usize,
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "track data size not consistent, counting {} trackpoints, {} elevations and {} timestamps. The GPX may represent the trip less accurately, the bigger the difference is",
            self.points, self.elevations, self.timestamps
        )
    }
}

pub fn check(points: usize, elevations: usize, timestamps: usize) -> Option<Inconsistency> {
    if points == elevations && points == timestamps {
        None
    } else {
        Some(Inconsistency {
            points,
            elevations,
            timestamps,
        })
    }
}
