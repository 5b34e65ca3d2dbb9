//! # vrptw-ls
//!
//! Local search engine for the vehicle routing problem with time windows:
//! capacitated route models, validated move operators, and hill-climbing
//! and simulated annealing drivers over their neighborhoods.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Client, Depot, Truck, RouteSet, ProblemInstance)
//! - [`distance`] — Euclidean distance matrix over depot and clients
//! - [`construct`] — Greedy construction of an initial route set
//! - [`ops`] — Move operators (relocate, exchange, reverse, 2-opt, cross-exchange)
//! - [`search`] — Neighborhood enumeration and the search drivers
//! - [`io`] — Instance files, run traces, and solution snapshots
//! - [`error`] — Infeasibility, configuration, and parse errors
//!
//! ## Example
//!
//! ```
//! use vrptw_ls::construct::BuildOptions;
//! use vrptw_ls::models::{Client, Depot, Point, ProblemInstance, TimeWindow};
//! use vrptw_ls::search::HillClimb;
//! use vrptw_ls::Solver;
//!
//! let depot = Depot::new("d1", Point::new(0, 0), TimeWindow::new(0.0, 1000.0));
//! let clients = vec![
//!     Client::new("c1", Point::new(5, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
//!     Client::new("c2", Point::new(10, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
//!     Client::new("c3", Point::new(15, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
//! ];
//! let instance = ProblemInstance::new("line3", "", "vrptw", vec![depot], clients, 10);
//!
//! let solver = Solver::new(&instance).unwrap();
//! let initial = solver.generate_initial(&BuildOptions::default()).unwrap();
//! let outcome = solver.hill_climb(&HillClimb::all_operators(), initial);
//! assert!(solver.total_distance(&outcome.best) <= 50.0);
//! ```

pub mod construct;
pub mod distance;
pub mod error;
pub mod io;
pub mod models;
pub mod ops;
pub mod search;

mod solver;

pub use solver::Solver;
