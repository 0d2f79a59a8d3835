//! Request and result types for the routing service exchange.

use serde::{Deserialize, Serialize};

use crate::geo::Point;
use crate::polyline::Polyline;

/// Body of a routing request: the selected waypoints in selection order.
///
/// Serializes as `{"points": [[lat, lng], ...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteRequest {
    pub points: Vec<Point>,
}

impl RouteRequest {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// One step of the computed itinerary.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Leg {
    /// 1-based position of the leg within the route.
    pub step: u32,
    /// Display name of the leg's start waypoint.
    pub from: String,
    /// Display name of the leg's end waypoint.
    pub to: String,
    /// Leg length in meters.
    pub distance: f64,
}

/// A successfully computed route.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    /// Geometry to draw as the path overlay.
    pub route: Polyline,
    /// Total route length in meters.
    pub total_dist: f64,
    /// Per-leg breakdown shown in the itinerary panel.
    pub details: Vec<Leg>,
}
