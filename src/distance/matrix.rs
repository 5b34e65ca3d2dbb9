//! Dense distance matrix.

use crate::models::{Point, ProblemInstance};

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once per instance and shared by all searches; route sets never
/// recompute coordinate distances.
///
/// # Examples
///
/// ```
/// use vrptw_ls::distance::DistanceMatrix;
/// use vrptw_ls::models::Point;
///
/// let dm = DistanceMatrix::from_points(&[Point::new(0, 0), Point::new(3, 4)]);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean matrix from a list of points.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Computes the matrix for an instance: location 0 is the operative
    /// depot, location `i + 1` is client `i`.
    pub fn from_instance(instance: &ProblemInstance) -> Self {
        let mut points = Vec::with_capacity(instance.num_clients() + 1);
        points.push(instance.depot().point());
        points.extend(instance.clients().iter().map(|c| c.point()));
        Self::from_points(&points)
    }

    /// Creates a matrix from an explicit n×n grid.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations.
    pub fn size(&self) -> usize {
        self.size
    }
}
