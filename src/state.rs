//! Pure interaction state for the route picker.
//!
//! [`TripState`] holds everything the flow decides on: the selected points
//! and the status of the latest routing attempt. No widget or network types
//! appear here; transitions are plain methods so they can be tested alone.

use crate::geo::Point;

/// Where the latest routing attempt stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    /// Nothing requested since startup or the last reset.
    Idle,
    /// A request is in flight.
    Computing,
    /// The latest resolved request produced a route.
    RouteFound,
    /// The latest resolved attempt failed.
    Failed(Failure),
}

/// Why a routing attempt failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    /// Fewer than two points were selected; no request was sent.
    NotEnoughPoints,
    /// The service answered and declined, with its own message.
    Service(String),
    /// The exchange with the service broke down before a verdict.
    Transport,
}

/// A snapshot of one routing request taken at send time.
///
/// The selection may change while the request is in flight; the snapshot is
/// what actually went on the wire.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    seq: u64,
    points: Vec<Point>,
}

impl PendingRequest {
    /// Request counter, strictly increasing over the life of the state.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

/// The selected points plus the status of the latest routing attempt.
#[derive(Debug, Clone)]
pub struct TripState {
    points: Vec<Point>,
    status: Status,
    next_seq: u64,
}

impl TripState {
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            status: Status::Idle,
            next_seq: 1,
        }
    }

    /// Selected points in selection order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Appends a point to the selection. Duplicates are kept.
    pub fn select_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Starts a routing attempt over the current selection.
    ///
    /// With fewer than two points the attempt fails locally and `None` is
    /// returned. Otherwise the status moves to [`Status::Computing`] and the
    /// returned snapshot captures the selection as of this call.
    pub fn begin_request(&mut self) -> Option<PendingRequest> {
        if self.points.len() < 2 {
            self.status = Status::Failed(Failure::NotEnoughPoints);
            return None;
        }
        let seq = self.next_seq;
        self.next_seq += 1;
        self.status = Status::Computing;
        Some(PendingRequest {
            seq,
            points: self.points.clone(),
        })
    }

    pub fn finish_found(&mut self) {
        self.status = Status::RouteFound;
    }

    pub fn finish_rejected(&mut self, message: String) {
        self.status = Status::Failed(Failure::Service(message));
    }

    pub fn finish_transport_failure(&mut self) {
        self.status = Status::Failed(Failure::Transport);
    }

    /// Returns to the startup state: no points, idle status.
    ///
    /// Requests already in flight are not cancelled; the counter keeps
    /// climbing so their sequence numbers stay unambiguous in logs.
    pub fn reset(&mut self) {
        self.points.clear();
        self.status = Status::Idle;
    }
}

impl Default for TripState {
    fn default() -> Self {
        Self::new()
    }
}
