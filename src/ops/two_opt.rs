//! 2-Opt: exchange the tails of two routes.
//!
//! # Algorithm
//!
//! Cut route `a` before stage `pos_a` and route `b` before `pos_b`, then
//! reconnect each head with the other's tail:
//!
//! ```text
//! A = [a₀, …, a_{pa-1} | a_{pa}, …]      A' = [a₀, …, a_{pa-1} | b_{pb}, …]
//! B = [b₀, …, b_{pb-1} | b_{pb}, …]      B' = [b₀, …, b_{pb-1} | a_{pa}, …]
//! ```
//!
//! A cut position equal to the route length moves an empty tail, which
//! appends the other route's suffix.
//!
//! # Feasibility
//!
//! The routes must be distinct and each head plus the incoming tail must
//! stay within capacity.

use crate::error::Infeasible;
use crate::models::{Client, RouteSet};

/// Swaps the suffixes of `route_a` (from `pos_a`) and `route_b` (from
/// `pos_b`).
///
/// On error the route set is untouched.
pub fn two_opt(
    rs: &mut RouteSet,
    clients: &[Client],
    route_a: usize,
    pos_a: usize,
    route_b: usize,
    pos_b: usize,
) -> Result<(), Infeasible> {
    if route_a == route_b {
        return Err(Infeasible::SameRoute);
    }
    for &r in &[route_a, route_b] {
        if r >= rs.num_routes() {
            return Err(Infeasible::RouteOutOfBounds {
                route: r,
                routes: rs.num_routes(),
            });
        }
    }
    let len_a = rs.truck(route_a).len();
    let len_b = rs.truck(route_b).len();
    if pos_a > len_a {
        return Err(Infeasible::PositionOutOfBounds {
            route: route_a,
            pos: pos_a,
            len: len_a,
        });
    }
    if pos_b > len_b {
        return Err(Infeasible::PositionOutOfBounds {
            route: route_b,
            pos: pos_b,
            len: len_b,
        });
    }

    let tail_demand = |r: usize, pos: usize| -> i32 {
        rs.truck(r).stages()[pos..]
            .iter()
            .map(|&c| clients[c].demand())
            .sum()
    };
    let demand_a = tail_demand(route_a, pos_a);
    let demand_b = tail_demand(route_b, pos_b);

    let head_a = rs.truck(route_a).load() - demand_a;
    if head_a + demand_b > rs.truck(route_a).capacity() {
        return Err(Infeasible::CapacityExceeded {
            route: route_a,
            load: head_a,
            delta: demand_b,
            capacity: rs.truck(route_a).capacity(),
        });
    }
    let head_b = rs.truck(route_b).load() - demand_b;
    if head_b + demand_a > rs.truck(route_b).capacity() {
        return Err(Infeasible::CapacityExceeded {
            route: route_b,
            load: head_b,
            delta: demand_a,
            capacity: rs.truck(route_b).capacity(),
        });
    }

    let tail_a = rs.truck_mut(route_a).split_off_tail(pos_a, demand_a);
    let tail_b = rs.truck_mut(route_b).split_off_tail(pos_b, demand_b);
    rs.truck_mut(route_a).append_tail(tail_b, demand_b);
    rs.truck_mut(route_b).append_tail(tail_a, demand_a);
    rs.reindex_route(route_a);
    rs.reindex_route(route_b);
    Ok(())
}
