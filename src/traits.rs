//! Core seams for the route picker.
//!
//! These are intentionally minimal. The map widget and the routing backend
//! live behind these traits so the interaction flow can be driven against
//! any concrete widget or transport.

use std::error::Error;
use std::fmt;

use crate::geo::{LatLngBounds, Point};
use crate::polyline::Polyline;
use crate::route::RouteResult;

/// The map widget as seen by the interaction flow.
///
/// Handles returned from `place_marker` and `draw_path` are opaque; the
/// caller keeps them and gives them back to remove the piece they stand for.
pub trait MapCanvas {
    type Marker;
    type Path;

    /// Installs the base tile layer, centered once at startup.
    fn render_base_layer(&mut self, center: Point, zoom: f64);

    /// Places a marker with a visible label, returning its handle.
    fn place_marker(&mut self, at: Point, label: &str) -> Self::Marker;

    fn remove_marker(&mut self, marker: Self::Marker);

    /// Draws a path overlay along `line`, returning its handle.
    fn draw_path(&mut self, line: &Polyline) -> Self::Path;

    fn remove_path(&mut self, path: Self::Path);

    /// Moves the viewport so the whole box is visible.
    fn fit_bounds(&mut self, bounds: LatLngBounds);
}

/// The routing backend as seen by the interaction flow.
pub trait RouteService {
    /// Asks the backend for a route through `points`, in order.
    ///
    /// A reply the service produced, including a rejection, is `Ok`; `Err`
    /// means the exchange itself failed and no verdict was received.
    fn find_route(&self, points: &[Point]) -> Result<RouteReply, TransportError>;
}

/// A verdict the routing service actually delivered.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteReply {
    Found(RouteResult),
    Rejected { message: String },
}

/// The exchange with the routing service failed before any verdict arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportError {
    detail: String,
}

impl TransportError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "routing transport failure: {}", self.detail)
    }
}

impl Error for TransportError {}
