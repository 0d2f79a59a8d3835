//! Interaction flow for the route picker.
//!
//! [`RoutePlanner`] owns the pure [`TripState`] and the [`MapView`] render
//! layer and drives both in response to the three user actions: clicking
//! the map, asking for a route, and resetting.
//!
//! Replies are applied in arrival order. When overlapping requests resolve
//! out of order, the reply that resolves last overwrites the screen,
//! whatever its send order was. A reply arriving after a reset is applied
//! the same way: reset clears the screen but cancels nothing in flight.

use tracing::{debug, error, warn};

use crate::geo::Point;
use crate::state::{PendingRequest, TripState};
use crate::traits::{MapCanvas, RouteReply, RouteService, TransportError};
use crate::view::{MapConfig, MapView};

pub struct RoutePlanner<C: MapCanvas> {
    state: TripState,
    view: MapView<C>,
}

impl<C: MapCanvas> RoutePlanner<C> {
    pub fn new(config: MapConfig, canvas: &mut C) -> Self {
        Self {
            state: TripState::new(),
            view: MapView::new(config, canvas),
        }
    }

    pub fn state(&self) -> &TripState {
        &self.state
    }

    pub fn view(&self) -> &MapView<C> {
        &self.view
    }

    /// Adds the clicked point to the selection and marks it on the map.
    pub fn click(&mut self, canvas: &mut C, at: Point) {
        self.state.select_point(at);
        let label = format!("Point {}", self.state.points().len());
        self.view.place_marker(canvas, at, &label);
    }

    /// Requests a route over the current selection and applies the reply.
    ///
    /// Blocks until the service answers. Callers that interleave requests
    /// themselves use [`Self::begin_find_path`] and
    /// [`Self::complete_find_path`] directly.
    pub fn find_path<S: RouteService>(&mut self, canvas: &mut C, service: &S) {
        let Some(pending) = self.begin_find_path() else {
            return;
        };
        let reply = service.find_route(pending.points());
        self.complete_find_path(canvas, pending, reply);
    }

    /// First half of a route request: validates the selection and snapshots
    /// it for sending.
    ///
    /// Returns `None` when fewer than two points are selected; the failure
    /// is already on screen in that case and nothing should be sent.
    pub fn begin_find_path(&mut self) -> Option<PendingRequest> {
        let pending = self.state.begin_request();
        if let Some(pending) = &pending {
            debug!(
                "route request {} started with {} points",
                pending.seq(),
                pending.points().len()
            );
            self.view.show_itinerary_loading();
        }
        self.view.show_status(self.state.status());
        pending
    }

    /// Second half of a route request: applies whatever the service said.
    ///
    /// A found route replaces the overlay and itinerary and fits the
    /// viewport. A rejection or transport failure clears the itinerary and
    /// shows the failure, leaving any previous overlay and the selection
    /// untouched.
    pub fn complete_find_path(
        &mut self,
        canvas: &mut C,
        pending: PendingRequest,
        reply: Result<RouteReply, TransportError>,
    ) {
        match reply {
            Ok(RouteReply::Found(result)) => {
                debug!(
                    "route request {} found a route of {} legs",
                    pending.seq(),
                    result.details.len()
                );
                self.state.finish_found();
                self.view.render_route(canvas, &result);
            }
            Ok(RouteReply::Rejected { message }) => {
                warn!("route request {} rejected: {}", pending.seq(), message);
                self.state.finish_rejected(message);
                self.view.clear_itinerary();
            }
            Err(err) => {
                error!("route request {} failed: {}", pending.seq(), err);
                self.state.finish_transport_failure();
                self.view.clear_itinerary();
            }
        }
        self.view.show_status(self.state.status());
    }

    /// Returns map and panels to their startup appearance.
    pub fn reset(&mut self, canvas: &mut C) {
        self.state.reset();
        self.view.clear(canvas);
    }
}
