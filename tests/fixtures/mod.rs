//! Test fixtures for route-picker.
//!
//! Provides:
//! - A map widget double that records every call and tracks live handles
//! - A scripted routing service replaying queued replies
//! - Real Ho Chi Minh City locations for realistic selections

// Compiled into every test binary; not all binaries use every helper.
#![allow(dead_code)]


pub use saigon_locations::*;

use std::cell::RefCell;
use std::collections::VecDeque;

use route_picker::geo::{LatLngBounds, Point};
use route_picker::polyline::Polyline;
use route_picker::route::{Leg, RouteResult};
use route_picker::traits::{MapCanvas, RouteReply, RouteService, TransportError};

/// Map widget double. Handles are plain ids; removing one moves it from the
/// live list to the removed list, so tests can assert what is on screen.
#[derive(Debug, Default)]
pub struct MockCanvas {
    next_id: u32,
    pub base_layers: Vec<(Point, f64)>,
    pub markers: Vec<(u32, Point, String)>,
    pub removed_markers: Vec<u32>,
    pub paths: Vec<(u32, Polyline)>,
    pub removed_paths: Vec<u32>,
    pub fitted: Vec<LatLngBounds>,
}

impl MockCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Labels of the markers currently on the map, in placement order.
    pub fn live_marker_labels(&self) -> Vec<&str> {
        self.markers
            .iter()
            .map(|(_, _, label)| label.as_str())
            .collect()
    }

    /// The path overlay currently on the map, if any.
    ///
    /// Panics when more than one overlay is live: the picker never stacks
    /// overlays, so two live paths mean a replaced overlay was not removed.
    pub fn live_path(&self) -> Option<&Polyline> {
        assert!(
            self.paths.len() <= 1,
            "expected at most one live path overlay, found {}",
            self.paths.len()
        );
        self.paths.first().map(|(_, line)| line)
    }
}

impl MapCanvas for MockCanvas {
    type Marker = u32;
    type Path = u32;

    fn render_base_layer(&mut self, center: Point, zoom: f64) {
        self.base_layers.push((center, zoom));
    }

    fn place_marker(&mut self, at: Point, label: &str) -> u32 {
        self.next_id += 1;
        self.markers.push((self.next_id, at, label.to_string()));
        self.next_id
    }

    fn remove_marker(&mut self, marker: u32) {
        self.markers.retain(|(id, _, _)| *id != marker);
        self.removed_markers.push(marker);
    }

    fn draw_path(&mut self, line: &Polyline) -> u32 {
        self.next_id += 1;
        self.paths.push((self.next_id, line.clone()));
        self.next_id
    }

    fn remove_path(&mut self, path: u32) {
        self.paths.retain(|(id, _)| *id != path);
        self.removed_paths.push(path);
    }

    fn fit_bounds(&mut self, bounds: LatLngBounds) {
        self.fitted.push(bounds);
    }
}

/// Routing service double. Tests queue replies up front; each call records
/// the points it was asked about and pops the next reply.
#[derive(Debug, Default)]
pub struct ScriptedService {
    replies: RefCell<VecDeque<Result<RouteReply, TransportError>>>,
    requests: RefCell<Vec<Vec<Point>>>,
}

impl ScriptedService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_reply(&self, reply: Result<RouteReply, TransportError>) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Point lists sent so far, in call order.
    pub fn requests(&self) -> Vec<Vec<Point>> {
        self.requests.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

impl RouteService for ScriptedService {
    fn find_route(&self, points: &[Point]) -> Result<RouteReply, TransportError> {
        self.requests.borrow_mut().push(points.to_vec());
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("ScriptedService called with no reply queued")
    }
}

/// Builds a found route running straight through `points`, one leg per
/// consecutive pair, with `total_dist` split evenly across the legs.
pub fn route_through(points: &[Point], total_dist: f64) -> RouteResult {
    let leg_count = points.len().saturating_sub(1).max(1);
    let per_leg = total_dist / leg_count as f64;
    let details = points
        .windows(2)
        .enumerate()
        .map(|(i, _)| Leg {
            step: (i + 1) as u32,
            from: format!("Point {}", i + 1),
            to: format!("Point {}", i + 2),
            distance: per_leg,
        })
        .collect();

    RouteResult {
        route: Polyline::new(points.to_vec()),
        total_dist,
        details,
    }
}
