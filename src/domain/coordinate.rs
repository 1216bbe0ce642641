use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// Geographic point in decimal degrees
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Divide both components by `count`
    ///
    /// Callers guarantee `count > 0`; the aggregator checks this before
    /// summing anything.
    pub fn scaled_down(self, count: usize) -> Self {
        let n = count as f64;
        Self::new(self.latitude / n, self.longitude / n)
    }
}

impl Add for Coordinate {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.latitude + other.latitude, self.longitude + other.longitude)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
