//! Integer grid coordinates.

use serde::{Deserialize, Serialize};

/// A point on the integer grid used by instance files.
///
/// Coordinates are integers as read from the file; distances between points
/// are exact Euclidean `f64` values (no truncation).
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::Point;
///
/// let a = Point::new(0, 0);
/// let b = Point::new(3, 4);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: i32,
    y: i32,
}

impl Point {
    /// Creates a point at the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// X-coordinate.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Euclidean distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        (dx * dx + dy * dy).sqrt()
    }
}
