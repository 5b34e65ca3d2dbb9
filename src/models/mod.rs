//! Domain model types for the VRPTW engine.
//!
//! Provides the core abstractions: integer-grid points, clients with
//! demands and time windows, depots, the immutable problem instance,
//! trucks owning ordered stage sequences, and the route set that a search
//! improves.

mod client;
mod instance;
mod point;
mod route_set;
mod truck;

pub use client::{Client, Depot, TimeWindow};
pub use instance::ProblemInstance;
pub use point::Point;
pub use route_set::RouteSet;
pub use truck::Truck;
