//! Error taxonomy for the routing engine.
//!
//! Three failure classes with different recovery semantics:
//!
//! - [`Infeasible`] — a candidate move violates a constraint. Recovered
//!   locally by the neighborhood enumerator (the candidate is discarded and
//!   enumeration continues); never surfaced to a driver as a failure.
//! - [`ConfigError`] — invalid instance or search configuration. Fatal,
//!   raised before any search begins.
//! - [`ParseError`] — malformed instance file. Fatal, raised before any
//!   instance is constructed.

use thiserror::Error;

/// A move operator rejected a candidate transformation.
///
/// Infeasibility is a pruning signal, not an error: enumeration skips the
/// candidate and moves on. The route set is left untouched whenever one of
/// these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Infeasible {
    /// The receiving route cannot absorb the extra demand.
    #[error("route {route} is full: load {load} {delta:+} exceeds capacity {capacity}")]
    CapacityExceeded {
        /// Index of the receiving route.
        route: usize,
        /// Load of the receiving route before the move.
        load: i32,
        /// Net demand change the move would apply.
        delta: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// Exchange or cross-exchange was given the same client twice.
    #[error("cannot exchange client {client} with itself")]
    SameClient {
        /// The offending client index.
        client: usize,
    },
    /// The operands must lie in two distinct routes.
    #[error("operands lie in the same route")]
    SameRoute,
    /// A client index beyond the instance's client arena.
    #[error("unknown client index {client}")]
    UnknownClient {
        /// The offending client index.
        client: usize,
    },
    /// A route index beyond the route set.
    #[error("route index {route} out of bounds ({routes} routes)")]
    RouteOutOfBounds {
        /// The offending route index.
        route: usize,
        /// Number of routes in the set.
        routes: usize,
    },
    /// A stage position beyond the route's length.
    #[error("position {pos} out of bounds in route {route} (length {len})")]
    PositionOutOfBounds {
        /// Route the position refers to.
        route: usize,
        /// The offending position.
        pos: usize,
        /// Length of the route.
        len: usize,
    },
    /// A segment does not fit inside its route.
    #[error("segment of length {len} starting at {start} out of bounds in route {route}")]
    SegmentOutOfBounds {
        /// Route the segment refers to.
        route: usize,
        /// Start position of the segment.
        start: usize,
        /// Requested segment length.
        len: usize,
    },
}

/// Invalid problem instance or search configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Vehicle capacity must be strictly positive.
    #[error("vehicle capacity must be positive, got {0}")]
    NonPositiveCapacity(i32),
    /// The instance declares no clients.
    #[error("instance has no clients")]
    NoClients,
    /// The instance declares no depot.
    #[error("instance has no depot")]
    NoDepot,
    /// Two clients share an id.
    #[error("duplicate client id {0:?}")]
    DuplicateClientId(String),
    /// A client demand is negative.
    #[error("client {id:?} has negative demand {demand}")]
    NegativeDemand {
        /// Client id as written in the instance file.
        id: String,
        /// The negative demand.
        demand: i32,
    },
    /// A single client's demand exceeds the vehicle capacity, so no route
    /// could ever carry it.
    #[error("client {id:?} demand {demand} exceeds vehicle capacity {capacity}")]
    DemandExceedsCapacity {
        /// Client id as written in the instance file.
        id: String,
        /// The oversized demand.
        demand: i32,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A time window with `ready > due`.
    #[error("client {id:?} has an inverted time window ({ready} > {due})")]
    InvertedTimeWindow {
        /// Client id as written in the instance file.
        id: String,
        /// Window open.
        ready: f64,
        /// Window close.
        due: f64,
    },
    /// A driver was configured with no operator kinds.
    #[error("no move operators selected")]
    EmptyOperatorSet,
    /// Simulated annealing cooling rate outside `(0, 1)`.
    #[error("cooling rate must lie in (0, 1), got {0}")]
    InvalidCoolingRate(f64),
    /// Simulated annealing iteration budget of zero.
    #[error("iteration budget must be positive")]
    ZeroIterationBudget,
}

/// Malformed instance file.
#[derive(Error, Debug)]
pub enum ParseError {
    /// The file could not be read.
    #[error("failed to read instance file")]
    Io(#[from] std::io::Error),
    /// A header line (`KEY : value`) with nothing after the colon.
    #[error("line {line}: missing value after ':'")]
    MissingValue {
        /// 1-based line number.
        line: usize,
    },
    /// A field that should be numeric is not.
    #[error("line {line}: invalid number {value:?}")]
    InvalidNumber {
        /// 1-based line number.
        line: usize,
        /// The offending token.
        value: String,
    },
    /// A data row with the wrong number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    MalformedRow {
        /// 1-based line number.
        line: usize,
        /// Fields expected for this section.
        expected: usize,
        /// Fields found.
        found: usize,
    },
}
