//! Move operators: pure, validated transformations of a route set.
//!
//! - [`relocate`] — move one client to another position
//! - [`exchange`] — swap two clients' positions
//! - [`reverse`] — flip a sub-sequence of one route
//! - [`two_opt`] — exchange the tails of two routes
//! - [`cross_exchange`] — swap two contiguous segments between routes
//!
//! Every operator shares one contract: the caller clones the incumbent
//! first, the operator either applies the whole move or returns
//! [`Infeasible`](crate::error::Infeasible) leaving the route set
//! untouched, and the coverage and capacity invariants hold afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};

mod cross_exchange;
mod exchange;
mod relocate;
mod reverse;
mod two_opt;

pub use cross_exchange::cross_exchange;
pub use exchange::exchange;
pub use relocate::relocate;
pub use reverse::reverse;
pub use two_opt::two_opt;

/// The operator families a search may draw moves from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OperatorKind {
    /// [`relocate`]
    Relocate,
    /// [`exchange`]
    Exchange,
    /// [`reverse`]
    Reverse,
    /// [`two_opt`]
    TwoOpt,
    /// [`cross_exchange`]
    CrossExchange,
}

impl OperatorKind {
    /// All operator kinds, in enumeration order.
    pub const ALL: [OperatorKind; 5] = [
        OperatorKind::Relocate,
        OperatorKind::Exchange,
        OperatorKind::Reverse,
        OperatorKind::TwoOpt,
        OperatorKind::CrossExchange,
    ];

    /// Stable name used in traces and logs.
    pub fn name(&self) -> &'static str {
        match self {
            OperatorKind::Relocate => "relocate",
            OperatorKind::Exchange => "exchange",
            OperatorKind::Reverse => "reverse",
            OperatorKind::TwoOpt => "two-opt",
            OperatorKind::CrossExchange => "cross-exchange",
        }
    }
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
