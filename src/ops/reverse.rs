//! Reverse: flip a sub-sequence of one route.
//!
//! Load is unchanged, so the only feasibility concern is bounds. Applying
//! the same reversal twice restores the original route.

use crate::error::Infeasible;
use crate::models::RouteSet;

/// Reverses the stages `[start, end]` (inclusive) of route `r`.
pub fn reverse(rs: &mut RouteSet, r: usize, start: usize, end: usize) -> Result<(), Infeasible> {
    if r >= rs.num_routes() {
        return Err(Infeasible::RouteOutOfBounds {
            route: r,
            routes: rs.num_routes(),
        });
    }
    let len = rs.truck(r).len();
    if start > end || end >= len {
        return Err(Infeasible::PositionOutOfBounds {
            route: r,
            pos: end,
            len,
        });
    }
    rs.truck_mut(r).reverse_range(start, end);
    rs.reindex_route(r);
    Ok(())
}
