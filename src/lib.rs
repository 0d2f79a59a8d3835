//! route-picker core
//!
//! Interaction and rendering flow for picking waypoints on a map and
//! requesting a route through them from a routing service.

pub mod traits;
pub mod planner;
pub mod state;
pub mod view;
pub mod service;
pub mod geo;
pub mod route;
pub mod polyline;
