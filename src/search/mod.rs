//! Search drivers over the operator neighborhoods.
//!
//! - [`HillClimb`] — deterministic first-improvement descent to a local
//!   optimum.
//! - [`SimulatedAnnealing`] — randomized walk with geometric cooling,
//!   returning the best route set seen.
//! - [`neighborhood`] — the enumeration and sampling primitives both
//!   drivers are built on.

pub mod neighborhood;

mod annealing;
mod hill_climb;

pub use annealing::{
    AnnealOutcome, SimulatedAnnealing, DEFAULT_COOLING_RATE, DEFAULT_MAX_ITERATIONS,
};
pub use hill_climb::{HillClimb, HillClimbOutcome};
pub use neighborhood::{
    batch, best_of_batch, first_improvement, random_neighbor, Candidate, MAX_SEGMENT_LEN,
};
