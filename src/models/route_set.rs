//! Route set: the solution representation.

use crate::distance::{client_location, DistanceMatrix, DEPOT_LOCATION};
use crate::models::{Client, Truck};

/// A complete solution: a partition of all clients into ordered routes.
///
/// Invariants, upheld by every operator:
///
/// - every client index appears in exactly one route, exactly once;
/// - every route's load stays within its truck's capacity.
///
/// A `positions` index maps each client to its owning route and stage
/// position, so "which route holds client X" is O(1) instead of a scan.
/// Operators keep it current for the routes they touch.
///
/// Cloning copies the id sequences and the index only — client data lives
/// in the instance and is never duplicated per candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSet {
    trucks: Vec<Truck>,
    positions: Vec<(usize, usize)>,
}

impl RouteSet {
    /// Builds a route set from explicit client-index sequences, one per
    /// truck, with a uniform capacity. Loads are computed from `clients`.
    ///
    /// # Panics
    ///
    /// Panics if the sequences do not cover every client exactly once.
    ///
    /// # Examples
    ///
    /// ```
    /// use vrptw_ls::models::{Client, Point, RouteSet, TimeWindow};
    ///
    /// let clients = vec![
    ///     Client::new("c1", Point::new(5, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
    ///     Client::new("c2", Point::new(10, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
    /// ];
    /// let rs = RouteSet::from_routes(vec![vec![0], vec![1]], &clients, 10);
    /// assert_eq!(rs.num_routes(), 2);
    /// assert_eq!(rs.locate(1), (1, 0));
    /// ```
    pub fn from_routes(routes: Vec<Vec<usize>>, clients: &[Client], capacity: i32) -> Self {
        let mut trucks = Vec::with_capacity(routes.len());
        for (id, route) in routes.into_iter().enumerate() {
            let mut truck = Truck::new(id, capacity);
            for client in route {
                truck.push_stage(client, clients[client].demand());
            }
            trucks.push(truck);
        }
        Self::from_trucks(trucks, clients.len())
    }

    /// Builds a route set from trucks covering `num_clients` clients.
    ///
    /// # Panics
    ///
    /// Panics if some client in `0..num_clients` is missing from the
    /// stage sequences (the coverage invariant would be broken from the
    /// start).
    pub fn from_trucks(trucks: Vec<Truck>, num_clients: usize) -> Self {
        let total: usize = trucks.iter().map(|t| t.len()).sum();
        assert!(
            total == num_clients,
            "route set must cover every client exactly once ({total} stages for {num_clients} clients)"
        );
        let mut set = Self {
            trucks,
            positions: vec![(usize::MAX, usize::MAX); num_clients],
        };
        set.rebuild_positions();
        set
    }

    /// All routes.
    pub fn trucks(&self) -> &[Truck] {
        &self.trucks
    }

    /// The route at `r`.
    ///
    /// # Panics
    ///
    /// Panics if `r` is out of bounds.
    pub fn truck(&self, r: usize) -> &Truck {
        &self.trucks[r]
    }

    /// Number of routes (including empty ones not yet pruned).
    pub fn num_routes(&self) -> usize {
        self.trucks.len()
    }

    /// Number of clients covered by this route set.
    pub fn num_clients(&self) -> usize {
        self.positions.len()
    }

    /// The route and stage position holding `client`.
    pub fn locate(&self, client: usize) -> (usize, usize) {
        self.positions[client]
    }

    pub(crate) fn truck_mut(&mut self, r: usize) -> &mut Truck {
        &mut self.trucks[r]
    }

    pub(crate) fn set_position(&mut self, client: usize, route: usize, pos: usize) {
        self.positions[client] = (route, pos);
    }

    /// Refreshes the position index for every stage of route `r`.
    pub(crate) fn reindex_route(&mut self, r: usize) {
        for pos in 0..self.trucks[r].len() {
            let client = self.trucks[r].stages()[pos];
            self.positions[client] = (r, pos);
        }
    }

    fn rebuild_positions(&mut self) {
        for slot in self.positions.iter_mut() {
            *slot = (usize::MAX, usize::MAX);
        }
        for r in 0..self.trucks.len() {
            self.reindex_route(r);
        }
        assert!(
            self.positions.iter().all(|&(r, _)| r != usize::MAX),
            "route set does not cover every client"
        );
    }

    /// Distance of route `r`: depot → first stage → … → last stage → depot.
    pub fn route_distance(&self, r: usize, dm: &DistanceMatrix) -> f64 {
        let stages = self.trucks[r].stages();
        if stages.is_empty() {
            return 0.0;
        }
        let mut dist = dm.get(DEPOT_LOCATION, client_location(stages[0]));
        for pair in stages.windows(2) {
            dist += dm.get(client_location(pair[0]), client_location(pair[1]));
        }
        dist += dm.get(client_location(stages[stages.len() - 1]), DEPOT_LOCATION);
        dist
    }

    /// Total distance across all routes.
    pub fn total_distance(&self, dm: &DistanceMatrix) -> f64 {
        (0..self.trucks.len())
            .map(|r| self.route_distance(r, dm))
            .sum()
    }

    /// Duration of route `r`, clamping forward to each client's ready time
    /// when the truck arrives early, then adding its service time.
    pub fn route_duration(&self, r: usize, clients: &[Client], dm: &DistanceMatrix) -> f64 {
        let mut time = 0.0;
        let mut prev = DEPOT_LOCATION;
        for &c in self.trucks[r].stages() {
            let loc = client_location(c);
            time += dm.get(prev, loc);
            time = time.max(clients[c].window().ready());
            time += clients[c].service();
            prev = loc;
        }
        time + dm.get(prev, DEPOT_LOCATION)
    }

    /// Drops routes that no longer serve any client and rebuilds the
    /// position index. Called after each accepted move.
    pub fn prune_empty(&mut self) {
        if self.trucks.iter().any(|t| t.is_empty()) {
            self.trucks.retain(|t| !t.is_empty());
            self.rebuild_positions();
        }
    }

    /// Full invariant check: index agreement, exact coverage, and load
    /// bookkeeping within capacity. Intended for tests and debug builds.
    pub fn is_consistent(&self, clients: &[Client]) -> bool {
        let total_stages: usize = self.trucks.iter().map(|t| t.len()).sum();
        if total_stages != self.positions.len() {
            return false;
        }
        for (client, &(r, pos)) in self.positions.iter().enumerate() {
            if r >= self.trucks.len() || pos >= self.trucks[r].len() {
                return false;
            }
            if self.trucks[r].stages()[pos] != client {
                return false;
            }
        }
        for truck in &self.trucks {
            let load: i32 = truck.stages().iter().map(|&c| clients[c].demand()).sum();
            if load != truck.load() || load > truck.capacity() {
                return false;
            }
        }
        true
    }
}
