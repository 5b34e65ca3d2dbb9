//! Constructive heuristics for building an initial route set.
//!
//! - [`build_initial`] — greedy capacity bin-packing in ready-time or
//!   randomized order, with an optional time-window-aware variant.

mod greedy;

pub use greedy::{build_initial, BuildOptions, InsertionOrder};
