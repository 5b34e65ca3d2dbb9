//! Truck owning an ordered stage sequence.

/// A capacity-limited vehicle and the ordered clients it visits.
///
/// Stages hold client indices into the instance's client list. The running
/// load is maintained by every mutation so `load ≤ capacity` can be checked
/// in O(1); operators verify feasibility before mutating.
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::Truck;
///
/// let t = Truck::new(0, 100);
/// assert_eq!(t.capacity(), 100);
/// assert!(t.is_empty());
/// assert!(t.fits(100));
/// assert!(!t.fits(101));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Truck {
    id: usize,
    capacity: i32,
    load: i32,
    stages: Vec<usize>,
}

impl Truck {
    /// Creates an empty truck.
    pub fn new(id: usize, capacity: i32) -> Self {
        Self {
            id,
            capacity,
            load: 0,
            stages: Vec::new(),
        }
    }

    /// Truck id, unique within a route set.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Maximum load.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// Current load (sum of assigned demands).
    pub fn load(&self) -> i32 {
        self.load
    }

    /// Ordered client indices visited by this truck.
    pub fn stages(&self) -> &[usize] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the truck serves no clients.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Returns `true` if `extra` more demand still fits.
    pub fn fits(&self, extra: i32) -> bool {
        self.load + extra <= self.capacity
    }

    pub(crate) fn push_stage(&mut self, client: usize, demand: i32) {
        self.stages.push(client);
        self.load += demand;
    }

    pub(crate) fn insert_stage(&mut self, pos: usize, client: usize, demand: i32) {
        self.stages.insert(pos, client);
        self.load += demand;
    }

    pub(crate) fn remove_stage(&mut self, pos: usize, demand: i32) -> usize {
        self.load -= demand;
        self.stages.remove(pos)
    }

    /// Replaces the client at `pos` without touching the load; the caller
    /// adjusts loads via [`adjust_load`](Self::adjust_load) when the swap
    /// crosses routes.
    pub(crate) fn set_stage(&mut self, pos: usize, client: usize) {
        self.stages[pos] = client;
    }

    pub(crate) fn adjust_load(&mut self, delta: i32) {
        self.load += delta;
    }

    pub(crate) fn reverse_range(&mut self, start: usize, end: usize) {
        self.stages[start..=end].reverse();
    }

    /// Splits off the suffix starting at `pos`, removing `demand` load.
    pub(crate) fn split_off_tail(&mut self, pos: usize, demand: i32) -> Vec<usize> {
        self.load -= demand;
        self.stages.split_off(pos)
    }

    /// Appends a suffix, adding `demand` load.
    pub(crate) fn append_tail(&mut self, tail: Vec<usize>, demand: i32) {
        self.stages.extend(tail);
        self.load += demand;
    }

    /// Replaces `len` stages starting at `start` with `replacement`,
    /// applying `load_delta`. Returns the removed segment.
    pub(crate) fn splice_range(
        &mut self,
        start: usize,
        len: usize,
        replacement: Vec<usize>,
        load_delta: i32,
    ) -> Vec<usize> {
        self.load += load_delta;
        self.stages
            .splice(start..start + len, replacement)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_remove_track_load() {
        let mut t = Truck::new(0, 20);
        t.push_stage(3, 5);
        t.push_stage(7, 8);
        assert_eq!(t.stages(), &[3, 7]);
        assert_eq!(t.load(), 13);
        assert_eq!(t.remove_stage(0, 5), 3);
        assert_eq!(t.stages(), &[7]);
        assert_eq!(t.load(), 8);
    }

    #[test]
    fn test_insert_stage() {
        let mut t = Truck::new(0, 20);
        t.push_stage(1, 2);
        t.push_stage(3, 2);
        t.insert_stage(1, 2, 4);
        assert_eq!(t.stages(), &[1, 2, 3]);
        assert_eq!(t.load(), 8);
    }

    #[test]
    fn test_fits() {
        let mut t = Truck::new(0, 10);
        t.push_stage(0, 6);
        assert!(t.fits(4));
        assert!(!t.fits(5));
    }

    #[test]
    fn test_reverse_range() {
        let mut t = Truck::new(0, 100);
        for (c, d) in [(0, 1), (1, 1), (2, 1), (3, 1)] {
            t.push_stage(c, d);
        }
        t.reverse_range(1, 3);
        assert_eq!(t.stages(), &[0, 3, 2, 1]);
    }

    #[test]
    fn test_tail_swap_bookkeeping() {
        let mut a = Truck::new(0, 20);
        a.push_stage(0, 4);
        a.push_stage(1, 4);
        let mut b = Truck::new(1, 20);
        b.push_stage(2, 6);
        b.push_stage(3, 6);

        let tail_a = a.split_off_tail(1, 4);
        let tail_b = b.split_off_tail(1, 6);
        a.append_tail(tail_b, 6);
        b.append_tail(tail_a, 4);

        assert_eq!(a.stages(), &[0, 3]);
        assert_eq!(b.stages(), &[2, 1]);
        assert_eq!(a.load(), 10);
        assert_eq!(b.load(), 10);
    }

    #[test]
    fn test_splice_range() {
        let mut t = Truck::new(0, 100);
        for (c, d) in [(0, 2), (1, 3), (2, 4), (3, 5)] {
            t.push_stage(c, d);
        }
        // Replace [1, 2] (demand 7) with [9] (demand 1).
        let removed = t.splice_range(1, 2, vec![9], 1 - 7);
        assert_eq!(removed, vec![1, 2]);
        assert_eq!(t.stages(), &[0, 9, 3]);
        assert_eq!(t.load(), 8);
    }
}
