//! HTTP adapter for the routing backend.

use serde::Deserialize;

use crate::geo::Point;
use crate::polyline::Polyline;
use crate::route::{Leg, RouteRequest, RouteResult};
use crate::traits::{RouteReply, RouteService, TransportError};

#[derive(Debug, Clone)]
pub struct RoutingConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpRouteService {
    config: RoutingConfig,
    client: reqwest::blocking::Client,
}

impl HttpRouteService {
    pub fn new(config: RoutingConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/api/find-path",
            self.config.base_url.trim_end_matches('/')
        )
    }
}

impl RouteService for HttpRouteService {
    fn find_route(&self, points: &[Point]) -> Result<RouteReply, TransportError> {
        let body = RouteRequest::new(points.to_vec());

        // The backend answers declined requests with a failure body under a
        // non-2xx status; the verdict is read from the body either way.
        let reply = self
            .client
            .post(self.endpoint())
            .json(&body)
            .send()
            .and_then(|resp| resp.json::<WireReply>())?;

        reply.into_reply()
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        TransportError::new(err.to_string())
    }
}

#[derive(Debug, Deserialize)]
struct WireReply {
    success: bool,
    message: Option<String>,
    route: Option<Vec<Point>>,
    total_dist: Option<f64>,
    details: Option<Vec<Leg>>,
}

impl WireReply {
    fn into_reply(self) -> Result<RouteReply, TransportError> {
        if !self.success {
            let message = self
                .message
                .unwrap_or_else(|| "routing service reported an unspecified error".to_string());
            return Ok(RouteReply::Rejected { message });
        }

        match (self.route, self.total_dist, self.details) {
            (Some(route), Some(total_dist), Some(details)) => {
                Ok(RouteReply::Found(RouteResult {
                    route: Polyline::new(route),
                    total_dist,
                    details,
                }))
            }
            _ => Err(TransportError::new(
                "success reply is missing route, total_dist, or details",
            )),
        }
    }
}
