//! Instance loading and solution export.
//!
//! - [`parse_instance`] / [`read_instance`] — the line-oriented
//!   header/data instance format;
//! - [`RunTrace`] — per-iteration search traces with CSV export;
//! - [`SolutionView`] — a serializable snapshot of a finished solution.

mod reader;
mod trace;
mod view;

pub use reader::{parse_instance, read_instance};
pub use trace::{RunTrace, TraceRecord};
pub use view::{RouteView, SolutionView};
