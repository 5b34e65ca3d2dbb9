//! Greedy insertion builder.
//!
//! # Algorithm
//!
//! Clients are taken in ready-time-ascending order (canonical,
//! deterministic) or in a seeded random order. Each client is appended to
//! the active route while its demand fits the remaining capacity;
//! otherwise the route is closed and a fresh one opened. No backtracking:
//! the result always covers every client, possibly with more routes than
//! the theoretical minimum.
//!
//! The time-window-aware variant additionally requires the running route
//! duration to reach each client before its window closes; clients that
//! fit by capacity but not by time are deferred and retried once the
//! active route closes. A client is always accepted onto an empty route,
//! so construction terminates even when a window is unreachable.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::distance::{client_location, DistanceMatrix, DEPOT_LOCATION};
use crate::error::ConfigError;
use crate::models::{ProblemInstance, RouteSet, Truck};

/// Order in which the builder considers clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertionOrder {
    /// Ready-time ascending, ties by client index. Deterministic default.
    ReadyTime,
    /// Seeded random shuffle.
    Randomized,
}

/// Builder configuration.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Client consideration order.
    pub order: InsertionOrder,
    /// When set, also require time-window reachability (the stricter
    /// builder variant). Capacity stays a hard constraint either way.
    pub respect_time_windows: bool,
    /// Seed for [`InsertionOrder::Randomized`]; unseeded draws from the
    /// OS entropy source.
    pub seed: Option<u64>,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            order: InsertionOrder::ReadyTime,
            respect_time_windows: false,
            seed: None,
        }
    }
}

/// Builds a complete initial route set by greedy insertion.
///
/// Fails fast with a [`ConfigError`] on unusable instances (non-positive
/// capacity, no clients, oversized demands, …) rather than looping.
///
/// # Examples
///
/// ```
/// use vrptw_ls::construct::{build_initial, BuildOptions};
/// use vrptw_ls::distance::DistanceMatrix;
/// use vrptw_ls::models::{Client, Depot, Point, ProblemInstance, TimeWindow};
///
/// let depot = Depot::new("d1", Point::new(0, 0), TimeWindow::new(0.0, 1000.0));
/// let clients = vec![
///     Client::new("c1", Point::new(5, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
///     Client::new("c2", Point::new(10, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
///     Client::new("c3", Point::new(15, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
/// ];
/// let instance = ProblemInstance::new("line", "", "vrptw", vec![depot], clients, 10);
/// let dm = DistanceMatrix::from_instance(&instance);
///
/// let rs = build_initial(&instance, &dm, &BuildOptions::default()).unwrap();
/// assert_eq!(rs.num_routes(), 2);
/// ```
pub fn build_initial(
    instance: &ProblemInstance,
    dm: &DistanceMatrix,
    options: &BuildOptions,
) -> Result<RouteSet, ConfigError> {
    instance.validate()?;
    let clients = instance.clients();
    let capacity = instance.max_capacity();

    let mut order: Vec<usize> = (0..clients.len()).collect();
    match options.order {
        InsertionOrder::ReadyTime => {
            order.sort_by(|&a, &b| {
                clients[a]
                    .window()
                    .ready()
                    .total_cmp(&clients[b].window().ready())
                    .then(a.cmp(&b))
            });
        }
        InsertionOrder::Randomized => {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            order.shuffle(&mut rng);
        }
    }

    let mut queue: VecDeque<usize> = order.into();
    let mut deferred: Vec<usize> = Vec::new();
    let mut trucks: Vec<Truck> = Vec::new();
    let mut next_id = 1;
    let mut current = Truck::new(0, capacity);
    let mut time = 0.0;
    let mut prev = DEPOT_LOCATION;

    let mut close_route =
        |current: &mut Truck, trucks: &mut Vec<Truck>, time: &mut f64, prev: &mut usize| {
            let finished = std::mem::replace(current, Truck::new(next_id, capacity));
            next_id += 1;
            trucks.push(finished);
            *time = 0.0;
            *prev = DEPOT_LOCATION;
        };

    loop {
        let Some(c) = queue.pop_front() else {
            if deferred.is_empty() {
                break;
            }
            // Time-deferred clients get a fresh route to retry on.
            close_route(&mut current, &mut trucks, &mut time, &mut prev);
            for d in deferred.drain(..).rev() {
                queue.push_front(d);
            }
            continue;
        };

        let client = &clients[c];
        if current.fits(client.demand()) {
            let arrival = time + dm.get(prev, client_location(c));
            let window_ok = !options.respect_time_windows
                || current.is_empty()
                || !client.window().is_violated(arrival);
            if window_ok {
                time = arrival.max(client.window().ready()) + client.service();
                prev = client_location(c);
                current.push_stage(c, client.demand());
            } else {
                deferred.push(c);
            }
        } else {
            // Route full: close it, then retry the deferred clients and
            // this one in their original relative order.
            close_route(&mut current, &mut trucks, &mut time, &mut prev);
            queue.push_front(c);
            for d in deferred.drain(..).rev() {
                queue.push_front(d);
            }
        }
    }

    if !current.is_empty() {
        trucks.push(current);
    }
    Ok(RouteSet::from_trucks(trucks, clients.len()))
}
