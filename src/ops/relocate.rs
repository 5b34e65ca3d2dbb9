//! Relocate: move one client to another position.
//!
//! # Feasibility
//!
//! Moving across routes requires the destination to have capacity for the
//! client's demand. Moving within a route is always capacity-neutral and
//! is allowed without a check.

use crate::error::Infeasible;
use crate::models::{Client, RouteSet};

/// Moves `client` out of its current route and inserts it into `to_route`
/// at stage position `at`.
///
/// On error the route set is untouched.
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::{Client, Point, RouteSet, TimeWindow};
/// use vrptw_ls::ops::relocate;
///
/// let clients = vec![
///     Client::new("c1", Point::new(5, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
///     Client::new("c2", Point::new(10, 0), 4, TimeWindow::new(0.0, 100.0), 0.0),
/// ];
/// let mut rs = RouteSet::from_routes(vec![vec![0], vec![1]], &clients, 10);
/// relocate(&mut rs, &clients, 1, 0, 1).expect("fits");
/// assert_eq!(rs.truck(0).stages(), &[0, 1]);
/// assert!(rs.truck(1).is_empty());
/// ```
pub fn relocate(
    rs: &mut RouteSet,
    clients: &[Client],
    client: usize,
    to_route: usize,
    at: usize,
) -> Result<(), Infeasible> {
    if client >= clients.len() {
        return Err(Infeasible::UnknownClient { client });
    }
    if to_route >= rs.num_routes() {
        return Err(Infeasible::RouteOutOfBounds {
            route: to_route,
            routes: rs.num_routes(),
        });
    }

    let (from_route, from_pos) = rs.locate(client);
    let demand = clients[client].demand();
    let dest = rs.truck(to_route);

    // Insertion happens after removal, so a same-route move has one fewer
    // valid slot.
    let slots = if from_route == to_route {
        dest.len() - 1
    } else {
        dest.len()
    };
    if at > slots {
        return Err(Infeasible::PositionOutOfBounds {
            route: to_route,
            pos: at,
            len: slots,
        });
    }
    if from_route != to_route && !dest.fits(demand) {
        return Err(Infeasible::CapacityExceeded {
            route: to_route,
            load: dest.load(),
            delta: demand,
            capacity: dest.capacity(),
        });
    }

    rs.truck_mut(from_route).remove_stage(from_pos, demand);
    rs.truck_mut(to_route).insert_stage(at, client, demand);
    rs.reindex_route(from_route);
    if to_route != from_route {
        rs.reindex_route(to_route);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Point, TimeWindow};

    fn client(id: &str, x: i32, demand: i32) -> Client {
        Client::new(id, Point::new(x, 0), demand, TimeWindow::new(0.0, 1000.0), 0.0)
    }

    fn two_routes() -> (Vec<Client>, RouteSet) {
        let clients = vec![
            client("c1", 5, 4),
            client("c2", 10, 4),
            client("c3", 15, 8),
        ];
        let rs = RouteSet::from_routes(vec![vec![0, 1], vec![2]], &clients, 10);
        (clients, rs)
    }

    #[test]
    fn test_relocate_across_routes() {
        let clients = vec![client("c1", 5, 4), client("c2", 10, 4), client("c3", 15, 4)];
        let mut rs = RouteSet::from_routes(vec![vec![0, 1], vec![2]], &clients, 10);
        relocate(&mut rs, &clients, 1, 1, 1).expect("4 + 4 fits in 10");
        assert_eq!(rs.truck(0).stages(), &[0]);
        assert_eq!(rs.truck(1).stages(), &[2, 1]);
        assert_eq!(rs.truck(0).load(), 4);
        assert_eq!(rs.truck(1).load(), 8);
        assert!(rs.is_consistent(&clients));
    }

    #[test]
    fn test_relocate_capacity_exceeded_leaves_routes_unchanged() {
        let (clients, mut rs) = two_routes();
        let before = rs.clone();
        let err = relocate(&mut rs, &clients, 0, 1, 0).unwrap_err();
        assert!(matches!(err, Infeasible::CapacityExceeded { route: 1, .. }));
        assert_eq!(rs, before);
    }

    #[test]
    fn test_relocate_within_route() {
        let (clients, mut rs) = two_routes();
        relocate(&mut rs, &clients, 0, 0, 1).expect("intra-route always fits");
        assert_eq!(rs.truck(0).stages(), &[1, 0]);
        assert_eq!(rs.truck(0).load(), 8);
        assert!(rs.is_consistent(&clients));
    }

    #[test]
    fn test_relocate_empties_origin() {
        let clients = vec![client("c1", 5, 4), client("c2", 10, 4)];
        let mut rs = RouteSet::from_routes(vec![vec![0], vec![1]], &clients, 10);
        relocate(&mut rs, &clients, 0, 1, 0).expect("fits");
        assert!(rs.truck(0).is_empty());
        assert_eq!(rs.truck(1).stages(), &[0, 1]);
        assert!(rs.is_consistent(&clients));
        rs.prune_empty();
        assert_eq!(rs.num_routes(), 1);
    }

    #[test]
    fn test_relocate_unknown_client() {
        let (clients, mut rs) = two_routes();
        assert_eq!(
            relocate(&mut rs, &clients, 99, 0, 0),
            Err(Infeasible::UnknownClient { client: 99 })
        );
    }

    #[test]
    fn test_relocate_route_out_of_bounds() {
        let (clients, mut rs) = two_routes();
        assert_eq!(
            relocate(&mut rs, &clients, 0, 5, 0),
            Err(Infeasible::RouteOutOfBounds { route: 5, routes: 2 })
        );
    }

    #[test]
    fn test_relocate_position_out_of_bounds() {
        let (clients, mut rs) = two_routes();
        // Same-route move: two stages leave one valid insertion slot past 0.
        assert!(matches!(
            relocate(&mut rs, &clients, 0, 0, 2),
            Err(Infeasible::PositionOutOfBounds { pos: 2, .. })
        ));
    }
}
