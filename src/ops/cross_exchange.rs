//! Cross-exchange: swap two contiguous segments between distinct routes.
//!
//! # Feasibility
//!
//! The segments must lie in two different routes, fit within their routes'
//! bounds, and each route must stay within capacity after taking the other
//! segment's demand.

use crate::error::Infeasible;
use crate::models::{Client, RouteSet};

/// Swaps the segment of `len1` stages starting at client `start1` with the
/// segment of `len2` stages starting at client `start2`.
///
/// The start arguments are client indices; each segment runs forward from
/// the named client's stage position. On error the route set is untouched.
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::{Client, Point, RouteSet, TimeWindow};
/// use vrptw_ls::ops::cross_exchange;
///
/// let clients: Vec<Client> = (0..5)
///     .map(|i| Client::new(
///         format!("c{i}"),
///         Point::new(i, 0),
///         1,
///         TimeWindow::new(0.0, 100.0),
///         0.0,
///     ))
///     .collect();
/// let mut rs = RouteSet::from_routes(vec![vec![0, 1, 2], vec![3, 4]], &clients, 10);
/// cross_exchange(&mut rs, &clients, 1, 2, 3, 1).expect("fits");
/// assert_eq!(rs.truck(0).stages(), &[0, 3]);
/// assert_eq!(rs.truck(1).stages(), &[1, 2, 4]);
/// ```
pub fn cross_exchange(
    rs: &mut RouteSet,
    clients: &[Client],
    start1: usize,
    len1: usize,
    start2: usize,
    len2: usize,
) -> Result<(), Infeasible> {
    if start1 == start2 {
        return Err(Infeasible::SameClient { client: start1 });
    }
    for &c in &[start1, start2] {
        if c >= clients.len() {
            return Err(Infeasible::UnknownClient { client: c });
        }
    }

    let (r1, p1) = rs.locate(start1);
    let (r2, p2) = rs.locate(start2);
    if r1 == r2 {
        return Err(Infeasible::SameRoute);
    }
    if len1 == 0 || p1 + len1 > rs.truck(r1).len() {
        return Err(Infeasible::SegmentOutOfBounds {
            route: r1,
            start: p1,
            len: len1,
        });
    }
    if len2 == 0 || p2 + len2 > rs.truck(r2).len() {
        return Err(Infeasible::SegmentOutOfBounds {
            route: r2,
            start: p2,
            len: len2,
        });
    }

    let segment_demand = |r: usize, p: usize, len: usize| -> i32 {
        rs.truck(r).stages()[p..p + len]
            .iter()
            .map(|&c| clients[c].demand())
            .sum()
    };
    let d1 = segment_demand(r1, p1, len1);
    let d2 = segment_demand(r2, p2, len2);

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

    let seg2: Vec<usize> = rs.truck(r2).stages()[p2..p2 + len2].to_vec();
    let seg1 = rs.truck_mut(r1).splice_range(p1, len1, seg2, d2 - d1);
    rs.truck_mut(r2).splice_range(p2, len2, seg1, d1 - d2);
    rs.reindex_route(r1);
    rs.reindex_route(r2);
    Ok(())
}
