//! Distance computations.
//!
//! Provides a dense Euclidean distance matrix over the instance's
//! locations: index 0 is the operative depot, index `i + 1` is client `i`.

mod matrix;

pub use matrix::DistanceMatrix;

/// Matrix location of the operative depot.
pub const DEPOT_LOCATION: usize = 0;

/// Matrix location of client `client` (its index in the instance's client
/// list).
pub fn client_location(client: usize) -> usize {
    client + 1
}
