//! Render layer: owns widget handles and on-screen text.
//!
//! [`MapView`] translates state into calls on a [`MapCanvas`] and keeps the
//! sidebar, status line, and itinerary panel as plain strings. It never
//! decides anything about the trip; the flow in `planner` does that and
//! tells the view what to show.

use crate::geo::Point;
use crate::route::RouteResult;
use crate::state::{Failure, Status};
use crate::traits::MapCanvas;

/// Itinerary panel text before any route has been shown.
pub const ITINERARY_PLACEHOLDER: &str = "no route yet";

/// Itinerary panel text while a request is in flight.
pub const ITINERARY_LOADING: &str = "loading route data...";

/// Initial viewport for the base layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapConfig {
    pub center: Point,
    pub zoom: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            center: Point::new(10.7797, 106.7001),
            zoom: 15.0,
        }
    }
}

/// Everything currently on screen: widget handles plus panel text.
pub struct MapView<C: MapCanvas> {
    markers: Vec<C::Marker>,
    overlay: Option<C::Path>,
    sidebar: Vec<String>,
    status_line: String,
    itinerary: Vec<String>,
}

impl<C: MapCanvas> MapView<C> {
    /// Renders the base layer and starts with empty panels.
    pub fn new(config: MapConfig, canvas: &mut C) -> Self {
        canvas.render_base_layer(config.center, config.zoom);
        Self {
            markers: Vec::new(),
            overlay: None,
            sidebar: Vec::new(),
            status_line: String::new(),
            itinerary: vec![ITINERARY_PLACEHOLDER.to_string()],
        }
    }

    /// Places a labeled marker and refreshes the sidebar listing.
    pub fn place_marker(&mut self, canvas: &mut C, at: Point, label: &str) {
        let marker = canvas.place_marker(at, label);
        self.markers.push(marker);
        self.rebuild_sidebar();
    }

    /// Swaps the path overlay for the new geometry and fills the itinerary.
    ///
    /// The viewport is fitted to the geometry; an empty geometry still
    /// replaces the overlay but leaves the viewport alone.
    pub fn render_route(&mut self, canvas: &mut C, result: &RouteResult) {
        if let Some(old) = self.overlay.take() {
            canvas.remove_path(old);
        }
        self.overlay = Some(canvas.draw_path(&result.route));
        if let Some(bounds) = result.route.bounds() {
            canvas.fit_bounds(bounds);
        }

        self.itinerary.clear();
        self.itinerary.push(total_line(result.total_dist));
        for leg in &result.details {
            self.itinerary
                .push(leg_line(leg.step, &leg.from, &leg.to, leg.distance));
        }
    }

    pub fn show_itinerary_loading(&mut self) {
        self.itinerary.clear();
        self.itinerary.push(ITINERARY_LOADING.to_string());
    }

    pub fn clear_itinerary(&mut self) {
        self.itinerary.clear();
    }

    pub fn show_status(&mut self, status: &Status) {
        self.status_line = status_text(status);
    }

    /// Removes every marker and the overlay, restoring the startup panels.
    pub fn clear(&mut self, canvas: &mut C) {
        for marker in self.markers.drain(..) {
            canvas.remove_marker(marker);
        }
        if let Some(path) = self.overlay.take() {
            canvas.remove_path(path);
        }
        self.sidebar.clear();
        self.status_line.clear();
        self.itinerary.clear();
        self.itinerary.push(ITINERARY_PLACEHOLDER.to_string());
    }

    pub fn sidebar(&self) -> &[String] {
        &self.sidebar
    }

    pub fn status_line(&self) -> &str {
        &self.status_line
    }

    pub fn itinerary(&self) -> &[String] {
        &self.itinerary
    }

    pub fn marker_count(&self) -> usize {
        self.markers.len()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    fn rebuild_sidebar(&mut self) {
        self.sidebar = (1..=self.markers.len())
            .map(|n| format!("Point {n}"))
            .collect();
    }
}

fn status_text(status: &Status) -> String {
    match status {
        Status::Idle => String::new(),
        Status::Computing => "computing route...".to_string(),
        Status::RouteFound => "route found".to_string(),
        Status::Failed(Failure::NotEnoughPoints) => "select at least 2 points".to_string(),
        Status::Failed(Failure::Service(message)) => format!("error: {message}"),
        Status::Failed(Failure::Transport) => "could not reach the routing service".to_string(),
    }
}

/// Header line of the itinerary. Distances arrive in meters and are shown
/// in kilometers with two decimals.
fn total_line(total_dist: f64) -> String {
    format!("total distance: {:.2} km", total_dist / 1000.0)
}

fn leg_line(step: u32, from: &str, to: &str, distance: f64) -> String {
    format!("leg {step}: {from} -> {to} ({distance} m)")
}
