//! High-level facade tying an instance to construction and search.

use crate::construct::{build_initial, BuildOptions};
use crate::distance::DistanceMatrix;
use crate::error::ConfigError;
use crate::io::SolutionView;
use crate::models::{ProblemInstance, RouteSet};
use crate::search::{AnnealOutcome, HillClimb, HillClimbOutcome, SimulatedAnnealing};

/// One instance, its precomputed distance matrix, and the entry points a
/// driver needs.
///
/// # Examples
///
/// ```
/// use vrptw_ls::construct::BuildOptions;
/// use vrptw_ls::io::parse_instance;
/// use vrptw_ls::search::HillClimb;
/// use vrptw_ls::Solver;
///
/// let instance = parse_instance("\
/// NAME : line3
/// MAX_QUANTITY : 10
/// DATA_DEPOTS
/// d1 0 0 0 1000
/// DATA_CLIENTS
/// c1 5 0 0 100 4 0
/// c2 10 0 0 100 4 0
/// c3 15 0 0 100 4 0
/// EOF
/// ").unwrap();
///
/// let solver = Solver::new(&instance).unwrap();
/// let initial = solver.generate_initial(&BuildOptions::default()).unwrap();
/// let outcome = solver.hill_climb(&HillClimb::all_operators(), initial);
/// assert!(outcome.converged);
/// ```
#[derive(Debug)]
pub struct Solver<'a> {
    instance: &'a ProblemInstance,
    matrix: DistanceMatrix,
}

impl<'a> Solver<'a> {
    /// Validates the instance and precomputes its distance matrix.
    pub fn new(instance: &'a ProblemInstance) -> Result<Self, ConfigError> {
        instance.validate()?;
        Ok(Self {
            instance,
            matrix: DistanceMatrix::from_instance(instance),
        })
    }

    /// The instance being solved.
    pub fn instance(&self) -> &ProblemInstance {
        self.instance
    }

    /// The precomputed distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Builds an initial route set by greedy insertion.
    pub fn generate_initial(&self, options: &BuildOptions) -> Result<RouteSet, ConfigError> {
        build_initial(self.instance, &self.matrix, options)
    }

    /// Descends from `initial` to a local optimum.
    pub fn hill_climb(&self, climber: &HillClimb, initial: RouteSet) -> HillClimbOutcome {
        climber.run(initial, self.instance.clients(), &self.matrix)
    }

    /// Anneals from `initial` and returns the best route set seen.
    pub fn simulated_anneal(
        &self,
        annealer: &SimulatedAnnealing,
        initial: RouteSet,
    ) -> AnnealOutcome {
        annealer.run(initial, self.instance.clients(), &self.matrix)
    }

    /// Total distance of a route set under this instance's matrix.
    pub fn total_distance(&self, rs: &RouteSet) -> f64 {
        rs.total_distance(&self.matrix)
    }

    /// Detached snapshot of a route set for export.
    pub fn snapshot(&self, rs: &RouteSet) -> SolutionView {
        SolutionView::from_route_set(rs, self.instance, &self.matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Client, Depot, Point, TimeWindow};
    use crate::search::SimulatedAnnealing;

    fn instance() -> ProblemInstance {
        let depot = Depot::new("d1", Point::new(0, 0), TimeWindow::new(0.0, 1000.0));
        let clients = vec![
            Client::new("c1", Point::new(1, 0), 5, TimeWindow::new(0.0, 100.0), 0.0),
            Client::new("c2", Point::new(10, 0), 5, TimeWindow::new(0.0, 100.0), 0.0),
            Client::new("c3", Point::new(2, 0), 5, TimeWindow::new(0.0, 100.0), 0.0),
            Client::new("c4", Point::new(11, 0), 5, TimeWindow::new(0.0, 100.0), 0.0),
        ];
        ProblemInstance::new("pairs", "", "vrptw", vec![depot], clients, 10)
    }

    #[test]
    fn test_new_rejects_invalid_instance() {
        // Depot presence is checked before the client list.
        let bad = ProblemInstance::new("bad", "", "", vec![], vec![], 10);
        assert_eq!(Solver::new(&bad).unwrap_err(), ConfigError::NoDepot);

        let depot = Depot::new("d1", Point::new(0, 0), TimeWindow::new(0.0, 1000.0));
        let empty = ProblemInstance::new("empty", "", "", vec![depot], vec![], 10);
        assert_eq!(Solver::new(&empty).unwrap_err(), ConfigError::NoClients);
    }

    #[test]
    fn test_full_pipeline_hill_climb() {
        let inst = instance();
        let solver = Solver::new(&inst).expect("valid");
        let initial = solver
            .generate_initial(&BuildOptions::default())
            .expect("valid");
        let start = solver.total_distance(&initial);

        let outcome = solver.hill_climb(&HillClimb::all_operators(), initial);
        assert!(outcome.converged);
        assert!(solver.total_distance(&outcome.best) <= start);
        assert!(outcome.best.is_consistent(inst.clients()));

        let view = solver.snapshot(&outcome.best);
        assert_eq!(view.instance, "pairs");
        assert_eq!(view.num_vehicles(), outcome.best.num_routes());
    }

    #[test]
    fn test_full_pipeline_annealing() {
        let inst = instance();
        let solver = Solver::new(&inst).expect("valid");
        let initial = solver
            .generate_initial(&BuildOptions::default())
            .expect("valid");
        let start = solver.total_distance(&initial);

        let annealer = SimulatedAnnealing::all_operators().with_seed(23);
        let outcome = solver.simulated_anneal(&annealer, initial);
        assert!(outcome.best_distance <= start);
        assert!(outcome.best.is_consistent(inst.clients()));
    }
}
