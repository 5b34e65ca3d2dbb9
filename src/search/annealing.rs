//! Simulated annealing driver.
//!
//! # Algorithm
//!
//! Each iteration draws one random feasible neighbor. A shorter neighbor
//! is always accepted; a longer one is accepted with probability
//! `exp((current - candidate) / T)`. The temperature cools geometrically
//! by the cooling rate every iteration, and the best route set seen over
//! the whole run is returned regardless of where the walk ends.
//!
//! The initial temperature is calibrated from the instance itself: a
//! burn-in of random probes from the starting point measures the mean
//! worsening step `Δ⁺`, and `T0 = -mean(Δ⁺) / ln(alpha)` makes such a
//! step initially acceptable with probability around `alpha`.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

use crate::distance::DistanceMatrix;
use crate::error::ConfigError;
use crate::io::{RunTrace, TraceRecord};
use crate::models::{Client, RouteSet};
use crate::ops::OperatorKind;
use crate::search::neighborhood::random_neighbor;

/// Default geometric cooling rate.
pub const DEFAULT_COOLING_RATE: f64 = 0.8;

/// Default iteration budget.
pub const DEFAULT_MAX_ITERATIONS: usize = 1000;

/// Temperature used when the burn-in finds no worsening step to measure.
const FALLBACK_TEMPERATURE: f64 = 1.0;

/// Configuration for a simulated annealing run.
#[derive(Debug, Clone)]
pub struct SimulatedAnnealing {
    kinds: Vec<OperatorKind>,
    alpha: f64,
    max_iter: usize,
    seed: Option<u64>,
}

/// Result of an annealing run.
#[derive(Debug, Clone)]
pub struct AnnealOutcome {
    /// The best route set seen during the walk, empty routes pruned.
    pub best: RouteSet,
    /// Total distance of `best`.
    pub best_distance: f64,
    /// Number of accepted moves, improving or not.
    pub accepted: usize,
    /// The calibrated starting temperature.
    pub initial_temperature: f64,
    /// Trace of the best-so-far improvements, starting with the initial
    /// state.
    pub trace: RunTrace,
}

impl SimulatedAnnealing {
    /// An annealer drawing moves from `kinds`, with default cooling rate
    /// and iteration budget.
    pub fn new(kinds: Vec<OperatorKind>) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyOperatorSet);
        }
        Ok(Self {
            kinds,
            alpha: DEFAULT_COOLING_RATE,
            max_iter: DEFAULT_MAX_ITERATIONS,
            seed: None,
        })
    }

    /// An annealer over every operator kind.
    pub fn all_operators() -> Self {
        Self {
            kinds: OperatorKind::ALL.to_vec(),
            alpha: DEFAULT_COOLING_RATE,
            max_iter: DEFAULT_MAX_ITERATIONS,
            seed: None,
        }
    }

    /// Sets the geometric cooling rate, which must lie strictly in
    /// `(0, 1)`.
    pub fn with_cooling_rate(mut self, alpha: f64) -> Result<Self, ConfigError> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::InvalidCoolingRate(alpha));
        }
        self.alpha = alpha;
        Ok(self)
    }

    /// Sets the iteration budget, which must be positive. The burn-in
    /// uses the same number of probes.
    pub fn with_max_iterations(mut self, max_iter: usize) -> Result<Self, ConfigError> {
        if max_iter == 0 {
            return Err(ConfigError::ZeroIterationBudget);
        }
        self.max_iter = max_iter;
        Ok(self)
    }

    /// Fixes the RNG seed for a reproducible walk.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Measures the mean worsening step among `self.max_iter` random
    /// probes from `rs`.
    fn calibrate_temperature<R: Rng + ?Sized>(
        &self,
        rs: &RouteSet,
        clients: &[Client],
        dm: &DistanceMatrix,
        rng: &mut R,
    ) -> f64 {
        let incumbent = rs.total_distance(dm);
        let mut sum = 0.0;
        let mut count = 0usize;
        for _ in 0..self.max_iter {
            if let Some(candidate) = random_neighbor(rs, clients, dm, &self.kinds, rng) {
                let delta = candidate.distance - incumbent;
                if delta > 0.0 {
                    sum += delta;
                    count += 1;
                }
            }
        }
        if count == 0 {
            return FALLBACK_TEMPERATURE;
        }
        -(sum / count as f64) / self.alpha.ln()
    }

    /// Runs the anneal from `initial` and returns the best route set
    /// seen.
    pub fn run(
        &self,
        initial: RouteSet,
        clients: &[Client],
        dm: &DistanceMatrix,
    ) -> AnnealOutcome {
        let start = Instant::now();
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut current = initial;
        current.prune_empty();
        let mut current_distance = current.total_distance(dm);
        let mut best = current.clone();
        let mut best_distance = current_distance;

        let initial_temperature = self.calibrate_temperature(&current, clients, dm, &mut rng);
        let mut temperature = initial_temperature;
        debug!(initial_temperature, alpha = self.alpha, "temperature calibrated");

        let mut trace = RunTrace::new();
        trace.push(TraceRecord {
            iteration: 0,
            distance: current_distance,
            operator: None,
            vehicles: current.num_routes(),
            elapsed_secs: 0.0,
        });

        let mut accepted = 0usize;
        for iteration in 1..=self.max_iter {
            let Some(candidate) = random_neighbor(&current, clients, dm, &self.kinds, &mut rng)
            else {
                debug!(iteration, "no feasible neighbor found, stopping early");
                break;
            };

            let take = candidate.distance < current_distance
                || ((current_distance - candidate.distance) / temperature).exp()
                    > rng.random::<f64>();
            if take {
                current = candidate.routes;
                current.prune_empty();
                current_distance = candidate.distance;
                accepted += 1;
                if current_distance < best_distance {
                    best = current.clone();
                    best_distance = current_distance;
                    trace.push(TraceRecord {
                        iteration,
                        distance: best_distance,
                        operator: Some(candidate.kind),
                        vehicles: best.num_routes(),
                        elapsed_secs: start.elapsed().as_secs_f64(),
                    });
                }
            }
            temperature *= self.alpha;
        }

        info!(
            accepted,
            best_distance,
            vehicles = best.num_routes(),
            "simulated annealing finished"
        );
        AnnealOutcome {
            best,
            best_distance,
            accepted,
            initial_temperature,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, TimeWindow};

    fn client(id: &str, x: i32, y: i32, demand: i32) -> Client {
        Client::new(id, Point::new(x, y), demand, TimeWindow::new(0.0, 1000.0), 0.0)
    }

    fn clustered() -> (Vec<Client>, DistanceMatrix, RouteSet) {
        // Two spatial clusters, started with the clusters split across
        // routes.
        let clients = vec![
            client("a1", 10, 0, 3),
            client("a2", 11, 1, 3),
            client("a3", 10, 2, 3),
            client("b1", -10, 0, 3),
            client("b2", -11, 1, 3),
            client("b3", -10, 2, 3),
        ];
        let mut points = vec![Point::new(0, 0)];
        points.extend(clients.iter().map(|c| c.point()));
        let dm = DistanceMatrix::from_points(&points);
        let rs = RouteSet::from_routes(vec![vec![0, 3, 1], vec![4, 2, 5]], &clients, 10);
        (clients, dm, rs)
    }

    #[test]
    fn test_anneal_never_returns_worse_than_initial() {
        let (clients, dm, rs) = clustered();
        let initial = rs.total_distance(&dm);
        let outcome = SimulatedAnnealing::all_operators()
            .with_seed(11)
            .run(rs, &clients, &dm);
        assert!(outcome.best_distance <= initial);
        assert!((outcome.best.total_distance(&dm) - outcome.best_distance).abs() < 1e-9);
        assert!(outcome.best.is_consistent(&clients));
    }

    #[test]
    fn test_anneal_is_seeded_deterministic() {
        let (clients, dm, rs) = clustered();
        let run = |seed| {
            SimulatedAnnealing::all_operators()
                .with_seed(seed)
                .run(rs.clone(), &clients, &dm)
        };
        let a = run(42);
        let b = run(42);
        assert_eq!(a.best, b.best);
        assert_eq!(a.accepted, b.accepted);
        assert_eq!(a.initial_temperature, b.initial_temperature);
    }

    #[test]
    fn test_calibrated_temperature_is_positive() {
        let (clients, dm, rs) = clustered();
        let outcome = SimulatedAnnealing::all_operators()
            .with_seed(5)
            .run(rs, &clients, &dm);
        assert!(outcome.initial_temperature > 0.0);
    }

    #[test]
    fn test_trace_records_best_improvements_in_order() {
        let (clients, dm, rs) = clustered();
        let outcome = SimulatedAnnealing::all_operators()
            .with_seed(17)
            .run(rs, &clients, &dm);
        let records = outcome.trace.records();
        assert!(records[0].operator.is_none());
        for pair in records.windows(2) {
            assert!(pair[1].distance < pair[0].distance);
            assert!(pair[1].iteration > pair[0].iteration);
        }
        assert_eq!(outcome.trace.final_distance(), Some(outcome.best_distance));
    }

    #[test]
    fn test_config_validation() {
        assert_eq!(
            SimulatedAnnealing::new(Vec::new()).unwrap_err(),
            ConfigError::EmptyOperatorSet
        );
        assert_eq!(
            SimulatedAnnealing::all_operators()
                .with_cooling_rate(1.0)
                .unwrap_err(),
            ConfigError::InvalidCoolingRate(1.0)
        );
        assert_eq!(
            SimulatedAnnealing::all_operators()
                .with_cooling_rate(0.0)
                .unwrap_err(),
            ConfigError::InvalidCoolingRate(0.0)
        );
        assert_eq!(
            SimulatedAnnealing::all_operators()
                .with_max_iterations(0)
                .unwrap_err(),
            ConfigError::ZeroIterationBudget
        );
    }

    #[test]
    fn test_single_client_stays_put() {
        let clients = vec![client("c1", 5, 0, 2)];
        let dm = DistanceMatrix::from_points(&[Point::new(0, 0), Point::new(5, 0)]);
        let rs = RouteSet::from_routes(vec![vec![0]], &clients, 10);
        let outcome = SimulatedAnnealing::all_operators()
            .with_seed(1)
            .run(rs.clone(), &clients, &dm);
        assert_eq!(outcome.best, rs);
        assert_eq!(outcome.initial_temperature, FALLBACK_TEMPERATURE);
    }
}
