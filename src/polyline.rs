//! Polyline representation for route geometries.
//!
//! Stores the decoded coordinate sequence a route overlay is drawn from.
//! The positional pair encoding lives at the service boundary; inside the
//! crate a polyline is a plain list of [`Point`]s.

use crate::geo::{LatLngBounds, Point};

/// A route geometry as an ordered list of coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The smallest box containing every point, or `None` when empty.
    pub fn bounds(&self) -> Option<LatLngBounds> {
        let mut points = self.points.iter();
        let mut bounds = LatLngBounds::of(*points.next()?);
        for point in points {
            bounds.extend(*point);
        }
        Some(bounds)
    }
}
