//! Hill-climbing driver: strict first-improvement descent.
//!
//! # Algorithm
//!
//! From the initial route set, repeatedly take the first strictly
//! improving neighbor under the configured operator kinds and prune any
//! route the step emptied. The climb ends when the whole neighborhood is
//! exhausted without improvement (a local optimum, the normal
//! termination) or when the optional step cap is reached.

use std::time::Instant;

use tracing::{debug, info};

use crate::distance::DistanceMatrix;
use crate::error::ConfigError;
use crate::io::{RunTrace, TraceRecord};
use crate::models::{Client, RouteSet};
use crate::ops::OperatorKind;
use crate::search::neighborhood::first_improvement;

/// Configuration for a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimb {
    kinds: Vec<OperatorKind>,
    max_steps: Option<usize>,
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone)]
pub struct HillClimbOutcome {
    /// The final route set, empty routes pruned.
    pub best: RouteSet,
    /// Number of improving steps accepted.
    pub accepted_steps: usize,
    /// Whether the run ended at a local optimum rather than at the step
    /// cap.
    pub converged: bool,
    /// Per-step trace, starting with the initial state.
    pub trace: RunTrace,
}

impl HillClimb {
    /// A climber drawing moves from `kinds`.
    pub fn new(kinds: Vec<OperatorKind>) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::EmptyOperatorSet);
        }
        Ok(Self {
            kinds,
            max_steps: None,
        })
    }

    /// A climber over every operator kind.
    pub fn all_operators() -> Self {
        Self {
            kinds: OperatorKind::ALL.to_vec(),
            max_steps: None,
        }
    }

    /// Caps the number of accepted steps.
    pub fn with_max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// Runs the climb from `initial` to a local optimum.
    pub fn run(
        &self,
        initial: RouteSet,
        clients: &[Client],
        dm: &DistanceMatrix,
    ) -> HillClimbOutcome {
        let start = Instant::now();
        let mut current = initial;
        current.prune_empty();
        let mut distance = current.total_distance(dm);

        let mut trace = RunTrace::new();
        trace.push(TraceRecord {
            iteration: 0,
            distance,
            operator: None,
            vehicles: current.num_routes(),
            elapsed_secs: 0.0,
        });

        let mut accepted_steps = 0;
        let mut converged = false;
        loop {
            if self.max_steps.is_some_and(|cap| accepted_steps >= cap) {
                break;
            }
            let Some(candidate) = first_improvement(&current, clients, dm, &self.kinds) else {
                converged = true;
                break;
            };
            current = candidate.routes;
            current.prune_empty();
            distance = candidate.distance;
            accepted_steps += 1;
            debug!(
                step = accepted_steps,
                operator = %candidate.kind,
                distance,
                "accepted improving move"
            );
            trace.push(TraceRecord {
                iteration: accepted_steps,
                distance,
                operator: Some(candidate.kind),
                vehicles: current.num_routes(),
                elapsed_secs: start.elapsed().as_secs_f64(),
            });
        }

        info!(
            accepted_steps,
            converged,
            distance,
            vehicles = current.num_routes(),
            "hill climb finished"
        );
        HillClimbOutcome {
            best: current,
            accepted_steps,
            converged,
            trace,
        }
    }
}
