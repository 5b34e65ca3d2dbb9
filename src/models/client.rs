//! Clients, depots, and time windows.

use serde::{Deserialize, Serialize};

use super::Point;

/// A service time window.
///
/// A vehicle arriving before `ready` waits; arriving after `due` is a
/// violation when time-window feasibility is enforced. Construction is
/// unchecked — inverted windows are caught by instance validation.
///
/// # Examples
///
/// ```
/// use vrptw_ls::models::TimeWindow;
///
/// let tw = TimeWindow::new(100.0, 200.0);
/// assert_eq!(tw.waiting_time(80.0), 20.0);
/// assert!(tw.is_violated(250.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    ready: f64,
    due: f64,
}

impl TimeWindow {
    /// Creates a time window.
    pub fn new(ready: f64, due: f64) -> Self {
        Self { ready, due }
    }

    /// Earliest service start.
    pub fn ready(&self) -> f64 {
        self.ready
    }

    /// Latest allowable arrival.
    pub fn due(&self) -> f64 {
        self.due
    }

    /// Returns `true` if `ready > due`.
    pub fn is_inverted(&self) -> bool {
        self.ready > self.due
    }

    /// Waiting time when arriving at the given time (zero if within or
    /// after the window).
    pub fn waiting_time(&self, arrival: f64) -> f64 {
        if arrival < self.ready {
            self.ready - arrival
        } else {
            0.0
        }
    }

    /// Returns `true` if arriving at the given time is too late.
    pub fn is_violated(&self, arrival: f64) -> bool {
        arrival > self.due
    }
}

/// A client to be served exactly once by one vehicle.
///
/// Identity is the string id from the instance file; inside a route set
/// clients are referenced by their dense index in the instance's client
/// list. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    id: String,
    point: Point,
    demand: i32,
    window: TimeWindow,
    service: f64,
}

impl Client {
    /// Creates a client.
    pub fn new(
        id: impl Into<String>,
        point: Point,
        demand: i32,
        window: TimeWindow,
        service: f64,
    ) -> Self {
        Self {
            id: id.into(),
            point,
            demand,
            window,
            service,
        }
    }

    /// Client id as written in the instance file.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location of this client.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Quantity to deliver at this client.
    pub fn demand(&self) -> i32 {
        self.demand
    }

    /// Service time window.
    pub fn window(&self) -> TimeWindow {
        self.window
    }

    /// Service duration at this client.
    pub fn service(&self) -> f64 {
        self.service
    }
}

/// A depot where every route starts and ends.
///
/// The window is the span during which trucks may depart and return.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Depot {
    id: String,
    point: Point,
    window: TimeWindow,
}

impl Depot {
    /// Creates a depot.
    pub fn new(id: impl Into<String>, point: Point, window: TimeWindow) -> Self {
        Self {
            id: id.into(),
            point,
            window,
        }
    }

    /// Depot id as written in the instance file.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Location of this depot.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Departure/return window.
    pub fn window(&self) -> TimeWindow {
        self.window
    }
}
