//! Immutable problem instance.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

use super::{Client, Depot};

/// A parsed VRPTW instance: depots, clients, and a uniform vehicle capacity.
///
/// Immutable after load. The declared depot/client counts from the file
/// header are kept for reference but the actual lists are authoritative.
/// Only the first depot is operative — multi-depot routing is not supported.
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::{Client, Depot, Point, ProblemInstance, TimeWindow};
///
/// let depot = Depot::new("d1", Point::new(0, 0), TimeWindow::new(0.0, 1000.0));
/// let clients = vec![
///     Client::new("c1", Point::new(5, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
/// ];
/// let instance = ProblemInstance::new("tiny", "", "vrptw", vec![depot], clients, 10);
/// assert!(instance.validate().is_ok());
/// assert_eq!(instance.num_clients(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemInstance {
    name: String,
    description: String,
    kind: String,
    depots: Vec<Depot>,
    clients: Vec<Client>,
    declared_depots: usize,
    declared_clients: usize,
    max_capacity: i32,
}

impl ProblemInstance {
    /// Creates an instance. Declared counts default to the actual list
    /// lengths; use [`with_declared_counts`](Self::with_declared_counts)
    /// to keep the (informational) header values from a file.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
        depots: Vec<Depot>,
        clients: Vec<Client>,
        max_capacity: i32,
    ) -> Self {
        let declared_depots = depots.len();
        let declared_clients = clients.len();
        Self {
            name: name.into(),
            description: description.into(),
            kind: kind.into(),
            depots,
            clients,
            declared_depots,
            declared_clients,
            max_capacity,
        }
    }

    /// Overrides the declared counts with the values from a file header.
    pub fn with_declared_counts(mut self, depots: usize, clients: usize) -> Self {
        self.declared_depots = depots;
        self.declared_clients = clients;
        self
    }

    /// Instance name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-text description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Free-text instance type.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// All depots.
    pub fn depots(&self) -> &[Depot] {
        &self.depots
    }

    /// The operative depot (the first one).
    ///
    /// # Panics
    ///
    /// Panics if the instance has no depot; [`validate`](Self::validate)
    /// rejects such instances.
    pub fn depot(&self) -> &Depot {
        &self.depots[0]
    }

    /// All clients, in load order. Route sets reference clients by their
    /// index in this slice.
    pub fn clients(&self) -> &[Client] {
        &self.clients
    }

    /// Number of clients actually loaded.
    pub fn num_clients(&self) -> usize {
        self.clients.len()
    }

    /// Declared depot count from the file header (informational).
    pub fn declared_depots(&self) -> usize {
        self.declared_depots
    }

    /// Declared client count from the file header (informational).
    pub fn declared_clients(&self) -> usize {
        self.declared_clients
    }

    /// Uniform vehicle capacity.
    pub fn max_capacity(&self) -> i32 {
        self.max_capacity
    }

    /// Checks the instance is usable for search.
    ///
    /// Rejects: non-positive capacity, missing depot, empty client list,
    /// duplicate client ids, negative demands, demands no vehicle could
    /// carry, and inverted time windows.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_capacity <= 0 {
            return Err(ConfigError::NonPositiveCapacity(self.max_capacity));
        }
        if self.depots.is_empty() {
            return Err(ConfigError::NoDepot);
        }
        if self.clients.is_empty() {
            return Err(ConfigError::NoClients);
        }
        let mut seen = HashSet::new();
        for client in &self.clients {
            if !seen.insert(client.id()) {
                return Err(ConfigError::DuplicateClientId(client.id().to_string()));
            }
            if client.demand() < 0 {
                return Err(ConfigError::NegativeDemand {
                    id: client.id().to_string(),
                    demand: client.demand(),
                });
            }
            if client.demand() > self.max_capacity {
                return Err(ConfigError::DemandExceedsCapacity {
                    id: client.id().to_string(),
                    demand: client.demand(),
                    capacity: self.max_capacity,
                });
            }
            if client.window().is_inverted() {
                return Err(ConfigError::InvertedTimeWindow {
                    id: client.id().to_string(),
                    ready: client.window().ready(),
                    due: client.window().due(),
                });
            }
        }
        Ok(())
    }
}
