//! Exchange: swap two clients' positions.
//!
//! # Feasibility
//!
//! When the clients lie in different routes, each route must stay within
//! capacity after dropping its own client and taking the other's demand.
//! Swapping a client with itself is rejected rather than silently
//! succeeding.

use crate::error::Infeasible;
use crate::models::{Client, RouteSet};

/// Swaps the routes/positions of `c1` and `c2`.
///
/// On error the route set is untouched.
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::{Client, Point, RouteSet, TimeWindow};
/// use vrptw_ls::ops::exchange;
///
/// let clients = vec![
///     Client::new("c1", Point::new(5, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
///     Client::new("c2", Point::new(10, 0), 6, TimeWindow::new(0.0, 100.0), 0.0),
/// ];
/// let mut rs = RouteSet::from_routes(vec![vec![0], vec![1]], &clients, 10);
/// exchange(&mut rs, &clients, 0, 1).expect("both fit");
/// assert_eq!(rs.truck(0).stages(), &[1]);
/// assert_eq!(rs.truck(1).stages(), &[0]);
/// ```
pub fn exchange(
    rs: &mut RouteSet,
    clients: &[Client],
    c1: usize,
    c2: usize,
) -> Result<(), Infeasible> {
    if c1 == c2 {
        return Err(Infeasible::SameClient { client: c1 });
    }
    for &c in &[c1, c2] {
        if c >= clients.len() {
            return Err(Infeasible::UnknownClient { client: c });
        }
    }

    let (r1, p1) = rs.locate(c1);
    let (r2, p2) = rs.locate(c2);
    let d1 = clients[c1].demand();
    let d2 = clients[c2].demand();

    if r1 != r2 {
        let t1 = rs.truck(r1);
        if t1.load() - d1 + d2 > t1.capacity() {
            return Err(Infeasible::CapacityExceeded {
                route: r1,
                load: t1.load(),
                delta: d2 - d1,
                capacity: t1.capacity(),
            });
        }
        let t2 = rs.truck(r2);
        if t2.load() - d2 + d1 > t2.capacity() {
            return Err(Infeasible::CapacityExceeded {
                route: r2,
                load: t2.load(),
                delta: d1 - d2,
                capacity: t2.capacity(),
            });
        }
    }

    rs.truck_mut(r1).set_stage(p1, c2);
    rs.truck_mut(r2).set_stage(p2, c1);
    if r1 != r2 {
        rs.truck_mut(r1).adjust_load(d2 - d1);
        rs.truck_mut(r2).adjust_load(d1 - d2);
    }
    rs.set_position(c1, r2, p2);
    rs.set_position(c2, r1, p1);
    Ok(())
}
