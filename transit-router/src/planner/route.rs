//! Route report types.

use chrono::Duration;
use serde::Serialize;

use crate::domain::{Mode, StopId};

/// One stop along a reported route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PathStep {
    /// The stop reached
    pub stop: StopId,
    /// Mode of the edge used to reach it (`None` for the first step)
    pub mode: Option<Mode>,
    /// Cumulative minutes from the source on arrival
    pub eta: u64,
    /// Cumulative distance from the source on arrival
    pub distance: u64,
}

/// The fastest route between two stops.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    pub source: StopId,
    pub destination: StopId,

    /// Total minutes from source to destination
    pub eta_minutes: u64,

    /// Total distance along the route
    pub distance: u64,

    /// Stops in travel order, starting with the source.
    /// Empty when source and destination are the same stop.
    pub steps: Vec<PathStep>,
}

impl Route {
    /// Route from a stop to itself.
    pub fn stay(stop: StopId) -> Self {
        Self {
            source: stop,
            destination: stop,
            eta_minutes: 0,
            distance: 0,
            steps: Vec::new(),
        }
    }

    /// Build a route from its steps, taking the totals from the final step.
    ///
    /// Returns `None` if there are no steps.
    pub fn from_steps(source: StopId, destination: StopId, steps: Vec<PathStep>) -> Option<Self> {
        let last = *steps.last()?;
        Some(Self {
            source,
            destination,
            eta_minutes: last.eta,
            distance: last.distance,
            steps,
        })
    }

    /// Returns the total travel time as a Duration.
    ///
    /// Returns `None` if the minute count is beyond what a Duration can hold.
    pub fn travel_time(&self) -> Option<Duration> {
        i64::try_from(self.eta_minutes)
            .ok()
            .and_then(Duration::try_minutes)
    }

    /// Returns the number of edges travelled.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }

    /// Returns the mode of each hop in travel order.
    pub fn modes(&self) -> Vec<Mode> {
        self.steps.iter().filter_map(|s| s.mode).collect()
    }
}

/// Result of a route query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteOutcome {
    /// A route exists
    Found(Route),

    /// The destination cannot be reached from the source
    NoPath {
        source: StopId,
        destination: StopId,
    },
}

impl RouteOutcome {
    /// Returns the route, if one was found.
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Found(route) => Some(route),
            RouteOutcome::NoPath { .. } => None,
        }
    }

    /// Returns true if a route was found.
    pub fn is_found(&self) -> bool {
        matches!(self, RouteOutcome::Found(_))
    }
}
