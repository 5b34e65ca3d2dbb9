//! Neighborhood enumeration over the move operators.
//!
//! Every candidate is produced clone-first: the incumbent is copied, the
//! move applied to the copy, and the copy kept only if the operator
//! accepts it. Infeasible candidates are a pruning signal, logged at
//! trace level and skipped.
//!
//! Three access patterns:
//!
//! - [`first_improvement`] — deterministic scan in storage order,
//!   returning the first strictly better neighbor;
//! - [`best_of_batch`] — deterministic scan collecting up to a budget of
//!   feasible neighbors, the budget split evenly across operator kinds,
//!   reduced to the shortest one (which may be worse than the incumbent);
//! - [`random_neighbor`] — one feasible neighbor drawn at random, the
//!   probe simulated annealing consumes.

use rand::Rng;
use tracing::trace;

use crate::distance::DistanceMatrix;
use crate::models::{Client, RouteSet};
use crate::ops::{cross_exchange, exchange, relocate, reverse, two_opt, OperatorKind};

/// Cross-exchange segments longer than this are not enumerated; longer
/// swaps are reachable as compositions of shorter ones.
pub const MAX_SEGMENT_LEN: usize = 3;

const EPSILON: f64 = 1e-10;

/// How many failed random probes [`random_neighbor`] tolerates before
/// giving up on the draw.
const RANDOM_PROBE_ATTEMPTS: usize = 50;

/// A feasible neighbor of an incumbent route set.
#[derive(Debug, Clone)]
pub struct Candidate {
    /// The operator family that produced this neighbor.
    pub kind: OperatorKind,
    /// The neighbor itself, fully applied.
    pub routes: RouteSet,
    /// Total distance of `routes`, precomputed.
    pub distance: f64,
}

/// One fully-parameterized move, not yet applied.
#[derive(Debug, Clone, Copy)]
enum Move {
    Relocate { client: usize, route: usize, at: usize },
    Exchange { c1: usize, c2: usize },
    Reverse { route: usize, start: usize, end: usize },
    TwoOpt { route_a: usize, pos_a: usize, route_b: usize, pos_b: usize },
    CrossExchange { start1: usize, len1: usize, start2: usize, len2: usize },
}

impl Move {
    fn kind(&self) -> OperatorKind {
        match self {
            Move::Relocate { .. } => OperatorKind::Relocate,
            Move::Exchange { .. } => OperatorKind::Exchange,
            Move::Reverse { .. } => OperatorKind::Reverse,
            Move::TwoOpt { .. } => OperatorKind::TwoOpt,
            Move::CrossExchange { .. } => OperatorKind::CrossExchange,
        }
    }

    fn apply(
        &self,
        rs: &mut RouteSet,
        clients: &[Client],
    ) -> Result<(), crate::error::Infeasible> {
        match *self {
            Move::Relocate { client, route, at } => relocate(rs, clients, client, route, at),
            Move::Exchange { c1, c2 } => exchange(rs, clients, c1, c2),
            Move::Reverse { route, start, end } => reverse(rs, route, start, end),
            Move::TwoOpt {
                route_a,
                pos_a,
                route_b,
                pos_b,
            } => two_opt(rs, clients, route_a, pos_a, route_b, pos_b),
            Move::CrossExchange {
                start1,
                len1,
                start2,
                len2,
            } => cross_exchange(rs, clients, start1, len1, start2, len2),
        }
    }
}

/// Clones the incumbent, applies `mv`, and returns the result as a
/// candidate when feasible.
fn try_move(
    rs: &RouteSet,
    clients: &[Client],
    dm: &DistanceMatrix,
    mv: Move,
) -> Option<Candidate> {
    let mut routes = rs.clone();
    match mv.apply(&mut routes, clients) {
        Ok(()) => {
            let distance = routes.total_distance(dm);
            Some(Candidate {
                kind: mv.kind(),
                routes,
                distance,
            })
        }
        Err(reason) => {
            trace!(operator = %mv.kind(), %reason, "candidate pruned");
            None
        }
    }
}

/// Enumerates every move of `kind` on `rs` in a fixed storage order.
///
/// The order depends only on the route set's current shape, so repeated
/// calls on an unchanged incumbent replay the same sequence.
fn moves_of_kind(rs: &RouteSet, kind: OperatorKind) -> Vec<Move> {
    let n = rs.num_clients();
    let mut moves = Vec::new();
    match kind {
        OperatorKind::Relocate => {
            for client in 0..n {
                let (from, from_pos) = rs.locate(client);
                for route in 0..rs.num_routes() {
                    let slots = if route == from {
                        rs.truck(route).len() - 1
                    } else {
                        rs.truck(route).len()
                    };
                    for at in 0..=slots {
                        if route == from && at == from_pos {
                            continue;
                        }
                        moves.push(Move::Relocate { client, route, at });
                    }
                }
            }
        }
        OperatorKind::Exchange => {
            for c1 in 0..n {
                for c2 in c1 + 1..n {
                    moves.push(Move::Exchange { c1, c2 });
                }
            }
        }
        OperatorKind::Reverse => {
            for route in 0..rs.num_routes() {
                let len = rs.truck(route).len();
                for start in 0..len {
                    for end in start + 1..len {
                        moves.push(Move::Reverse { route, start, end });
                    }
                }
            }
        }
        OperatorKind::TwoOpt => {
            for route_a in 0..rs.num_routes() {
                for route_b in route_a + 1..rs.num_routes() {
                    let len_a = rs.truck(route_a).len();
                    let len_b = rs.truck(route_b).len();
                    for pos_a in 0..=len_a {
                        for pos_b in 0..=len_b {
                            if pos_a == len_a && pos_b == len_b {
                                continue;
                            }
                            moves.push(Move::TwoOpt {
                                route_a,
                                pos_a,
                                route_b,
                                pos_b,
                            });
                        }
                    }
                }
            }
        }
        OperatorKind::CrossExchange => {
            for start1 in 0..n {
                for start2 in start1 + 1..n {
                    for len1 in 1..=MAX_SEGMENT_LEN {
                        for len2 in 1..=MAX_SEGMENT_LEN {
                            moves.push(Move::CrossExchange {
                                start1,
                                len1,
                                start2,
                                len2,
                            });
                        }
                    }
                }
            }
        }
    }
    moves
}

/// Draws one random move of `kind`, uniformly over the raw parameter
/// space. The draw may be infeasible or a no-op; callers retry.
fn random_move<R: Rng + ?Sized>(rs: &RouteSet, kind: OperatorKind, rng: &mut R) -> Option<Move> {
    let n = rs.num_clients();
    let routes = rs.num_routes();
    if n == 0 || routes == 0 {
        return None;
    }
    let mv = match kind {
        OperatorKind::Relocate => {
            let client = rng.random_range(0..n);
            let route = rng.random_range(0..routes);
            let (from, _) = rs.locate(client);
            let slots = if route == from {
                rs.truck(route).len() - 1
            } else {
                rs.truck(route).len()
            };
            Move::Relocate {
                client,
                route,
                at: rng.random_range(0..=slots),
            }
        }
        OperatorKind::Exchange => Move::Exchange {
            c1: rng.random_range(0..n),
            c2: rng.random_range(0..n),
        },
        OperatorKind::Reverse => {
            let route = rng.random_range(0..routes);
            let len = rs.truck(route).len();
            if len < 2 {
                return None;
            }
            let start = rng.random_range(0..len - 1);
            let end = rng.random_range(start + 1..len);
            Move::Reverse { route, start, end }
        }
        OperatorKind::TwoOpt => {
            let route_a = rng.random_range(0..routes);
            let route_b = rng.random_range(0..routes);
            Move::TwoOpt {
                route_a,
                pos_a: rng.random_range(0..=rs.truck(route_a).len()),
                route_b,
                pos_b: rng.random_range(0..=rs.truck(route_b).len()),
            }
        }
        OperatorKind::CrossExchange => Move::CrossExchange {
            start1: rng.random_range(0..n),
            len1: rng.random_range(1..=MAX_SEGMENT_LEN),
            start2: rng.random_range(0..n),
            len2: rng.random_range(1..=MAX_SEGMENT_LEN),
        },
    };
    Some(mv)
}

/// Scans the neighborhood in deterministic order and returns the first
/// candidate strictly better than the incumbent.
///
/// `None` means the neighborhood under `kinds` is exhausted without
/// improvement, which is how hill-climbing detects a local optimum.
pub fn first_improvement(
    rs: &RouteSet,
    clients: &[Client],
    dm: &DistanceMatrix,
    kinds: &[OperatorKind],
) -> Option<Candidate> {
    let incumbent = rs.total_distance(dm);
    for &kind in kinds {
        for mv in moves_of_kind(rs, kind) {
            if let Some(candidate) = try_move(rs, clients, dm, mv) {
                if candidate.distance < incumbent - EPSILON {
                    return Some(candidate);
                }
            }
        }
    }
    None
}

/// Collects up to `budget` feasible candidates in storage order, the
/// budget split evenly across `kinds`.
///
/// Infeasible trials are skipped without consuming the quota: each
/// kind's scan runs until its quota of feasible candidates is full or
/// its moves are exhausted. Repeated calls on an unchanged incumbent
/// return the same candidates. Callers wanting their own ranking (or
/// the full spread) use this; [`best_of_batch`] is the common
/// min-by-distance reduction.
pub fn batch(
    rs: &RouteSet,
    clients: &[Client],
    dm: &DistanceMatrix,
    kinds: &[OperatorKind],
    budget: usize,
) -> Vec<Candidate> {
    if kinds.is_empty() {
        return Vec::new();
    }
    let per_kind = (budget / kinds.len()).max(1);
    let mut candidates = Vec::new();
    for &kind in kinds {
        let mut found = 0usize;
        for mv in moves_of_kind(rs, kind) {
            if found == per_kind {
                break;
            }
            if let Some(candidate) = try_move(rs, clients, dm, mv) {
                candidates.push(candidate);
                found += 1;
            }
        }
    }
    candidates
}

/// Like [`batch`], reduced to the shortest feasible candidate found.
///
/// Unlike [`first_improvement`] the winner may be worse than the
/// incumbent; acceptance is the caller's policy.
pub fn best_of_batch(
    rs: &RouteSet,
    clients: &[Client],
    dm: &DistanceMatrix,
    kinds: &[OperatorKind],
    budget: usize,
) -> Option<Candidate> {
    batch(rs, clients, dm, kinds, budget)
        .into_iter()
        .min_by(|a, b| a.distance.total_cmp(&b.distance))
}

/// Draws one feasible neighbor at random, retrying infeasible probes a
/// bounded number of times.
pub fn random_neighbor<R: Rng + ?Sized>(
    rs: &RouteSet,
    clients: &[Client],
    dm: &DistanceMatrix,
    kinds: &[OperatorKind],
    rng: &mut R,
) -> Option<Candidate> {
    if kinds.is_empty() {
        return None;
    }
    for _ in 0..RANDOM_PROBE_ATTEMPTS {
        let kind = kinds[rng.random_range(0..kinds.len())];
        let Some(mv) = random_move(rs, kind, rng) else {
            continue;
        };
        if let Some(candidate) = try_move(rs, clients, dm, mv) {
            return Some(candidate);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::models::{Point, TimeWindow};

    fn client(id: &str, x: i32, y: i32, demand: i32) -> Client {
        Client::new(id, Point::new(x, y), demand, TimeWindow::new(0.0, 1000.0), 0.0)
    }

    /// Two interleaved routes on a line; swapping c2 and c3 is the obvious
    /// improvement.
    fn tangled() -> (Vec<Client>, DistanceMatrix, RouteSet) {
        let clients = vec![
            client("c1", 1, 0, 2),
            client("c2", 10, 0, 2),
            client("c3", 2, 0, 2),
            client("c4", 11, 0, 2),
        ];
        let mut points = vec![Point::new(0, 0)];
        points.extend(clients.iter().map(|c| c.point()));
        let dm = DistanceMatrix::from_points(&points);
        let rs = RouteSet::from_routes(vec![vec![0, 1], vec![2, 3]], &clients, 10);
        (clients, dm, rs)
    }

    #[test]
    fn test_first_improvement_finds_better_neighbor() {
        let (clients, dm, rs) = tangled();
        let incumbent = rs.total_distance(&dm);
        let candidate =
            first_improvement(&rs, &clients, &dm, &OperatorKind::ALL).expect("improvable");
        assert!(candidate.distance < incumbent);
        assert!(candidate.routes.is_consistent(&clients));
    }

    #[test]
    fn test_first_improvement_is_deterministic() {
        let (clients, dm, rs) = tangled();
        let a = first_improvement(&rs, &clients, &dm, &OperatorKind::ALL).expect("improvable");
        let b = first_improvement(&rs, &clients, &dm, &OperatorKind::ALL).expect("improvable");
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.routes, b.routes);
    }

    #[test]
    fn test_first_improvement_none_at_optimum() {
        // One client, one route: no move can shorten anything.
        let clients = vec![client("c1", 5, 0, 2)];
        let dm = DistanceMatrix::from_points(&[Point::new(0, 0), Point::new(5, 0)]);
        let rs = RouteSet::from_routes(vec![vec![0]], &clients, 10);
        assert!(first_improvement(&rs, &clients, &dm, &OperatorKind::ALL).is_none());
    }

    #[test]
    fn test_first_improvement_leaves_incumbent_untouched() {
        let (clients, dm, rs) = tangled();
        let before = rs.clone();
        let _ = first_improvement(&rs, &clients, &dm, &OperatorKind::ALL);
        assert_eq!(rs, before);
    }

    #[test]
    fn test_best_of_batch_returns_feasible_candidate() {
        let (clients, dm, rs) = tangled();
        let candidate =
            best_of_batch(&rs, &clients, &dm, &OperatorKind::ALL, 100).expect("moves exist");
        assert!(candidate.routes.is_consistent(&clients));
        assert!((candidate.routes.total_distance(&dm) - candidate.distance).abs() < 1e-9);
    }

    #[test]
    fn test_best_of_batch_empty_kinds() {
        let (clients, dm, rs) = tangled();
        assert!(best_of_batch(&rs, &clients, &dm, &[], 100).is_none());
    }

    #[test]
    fn test_best_of_batch_is_batch_minimum() {
        let (clients, dm, rs) = tangled();
        let all = batch(&rs, &clients, &dm, &OperatorKind::ALL, 60);
        let best = best_of_batch(&rs, &clients, &dm, &OperatorKind::ALL, 60)
            .expect("batch nonempty");
        assert!(!all.is_empty());
        assert!(all.iter().all(|c| best.distance <= c.distance));
    }

    #[test]
    fn test_batch_is_deterministic() {
        let (clients, dm, rs) = tangled();
        let a = batch(&rs, &clients, &dm, &OperatorKind::ALL, 40);
        let b = batch(&rs, &clients, &dm, &OperatorKind::ALL, 40);
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            assert_eq!(x.kind, y.kind);
            assert_eq!(x.routes, y.routes);
        }
    }

    #[test]
    fn test_batch_quota_counts_only_feasible_candidates() {
        // Both routes saturated: every cross-route relocate is infeasible
        // but plenty of intra-route relocates remain. Skipped trials must
        // not eat into the quota.
        let clients: Vec<Client> = (0..6)
            .map(|i| client(&format!("c{i}"), i + 1, 0, 5))
            .collect();
        let mut points = vec![Point::new(0, 0)];
        points.extend(clients.iter().map(|c| c.point()));
        let dm = DistanceMatrix::from_points(&points);
        let rs = RouteSet::from_routes(vec![vec![0, 1, 2], vec![3, 4, 5]], &clients, 15);

        let feasible = batch(&rs, &clients, &dm, &[OperatorKind::Relocate], usize::MAX);
        assert!(feasible.len() >= 10);

        let quota = 10;
        let got = batch(&rs, &clients, &dm, &[OperatorKind::Relocate], quota);
        assert_eq!(got.len(), quota);
        for c in &got {
            assert!(c.routes.is_consistent(&clients));
        }
    }

    #[test]
    fn test_random_neighbor_is_seeded_deterministic() {
        let (clients, dm, rs) = tangled();
        let a = random_neighbor(
            &rs,
            &clients,
            &dm,
            &OperatorKind::ALL,
            &mut StdRng::seed_from_u64(99),
        )
        .expect("probe lands");
        let b = random_neighbor(
            &rs,
            &clients,
            &dm,
            &OperatorKind::ALL,
            &mut StdRng::seed_from_u64(99),
        )
        .expect("probe lands");
        assert_eq!(a.kind, b.kind);
        assert_eq!(a.routes, b.routes);
    }

    #[test]
    fn test_single_kind_enumeration_only_uses_that_kind() {
        let (clients, dm, rs) = tangled();
        if let Some(c) = first_improvement(&rs, &clients, &dm, &[OperatorKind::Exchange]) {
            assert_eq!(c.kind, OperatorKind::Exchange);
        }
        let mut rng = StdRng::seed_from_u64(3);
        if let Some(c) = random_neighbor(&rs, &clients, &dm, &[OperatorKind::Reverse], &mut rng) {
            assert_eq!(c.kind, OperatorKind::Reverse);
        }
    }
}
