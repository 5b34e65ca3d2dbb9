//! Serializable snapshot of a solution for exporters and renderers.

use serde::{Deserialize, Serialize};

use crate::distance::DistanceMatrix;
use crate::models::{Point, ProblemInstance, RouteSet};

/// One route, in visiting order, with its totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RouteView {
    /// Client ids in visiting order.
    pub clients: Vec<String>,
    /// Client locations in visiting order, depot excluded.
    pub points: Vec<Point>,
    /// Total demand carried.
    pub load: i32,
    /// Route distance including both depot legs.
    pub distance: f64,
}

/// A whole solution, detached from the search state. String ids and
/// plain values only, ready for JSON or plotting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SolutionView {
    /// Instance name.
    pub instance: String,
    /// Depot location.
    pub depot: Point,
    /// Vehicle capacity shared by all routes.
    pub capacity: i32,
    /// Non-empty routes.
    pub routes: Vec<RouteView>,
    /// Sum of all route distances.
    pub total_distance: f64,
}

impl SolutionView {
    /// Snapshots `rs` against its instance.
    pub fn from_route_set(
        rs: &RouteSet,
        instance: &ProblemInstance,
        dm: &DistanceMatrix,
    ) -> Self {
        let clients = instance.clients();
        let routes: Vec<RouteView> = (0..rs.num_routes())
            .filter(|&r| !rs.truck(r).is_empty())
            .map(|r| {
                let truck = rs.truck(r);
                RouteView {
                    clients: truck.stages().iter().map(|&c| clients[c].id().to_string()).collect(),
                    points: truck.stages().iter().map(|&c| clients[c].point()).collect(),
                    load: truck.load(),
                    distance: rs.route_distance(r, dm),
                }
            })
            .collect();
        let total_distance = routes.iter().map(|r| r.distance).sum();
        Self {
            instance: instance.name().to_string(),
            depot: instance.depot().point(),
            capacity: instance.max_capacity(),
            routes,
            total_distance,
        }
    }

    /// Number of vehicles in use.
    pub fn num_vehicles(&self) -> usize {
        self.routes.len()
    }
}
