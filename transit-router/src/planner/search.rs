//! Fastest-route search.
//!
//! Dijkstra's algorithm keyed on ETA, using a dense O(N²) selection scan.
//! Two rules make the reported path deterministic when several paths share
//! the minimum ETA:
//!
//! - the next stop to settle is the unsettled stop with the lowest ETA, and
//!   among equal ETAs the lowest stop id;
//! - a record is only overwritten by a strictly lower ETA, so the first
//!   path found at a given ETA is kept.

use tracing::{debug, trace};

use crate::domain::StopId;
use crate::network::Network;

use super::record::{RouteRecord, RouteTable};
use super::route::{Route, RouteOutcome};

/// Error from a route query.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// The query names a stop outside the network
    #[error("{role} stop {stop} is out of range: network has {node_count} stops")]
    StopOutOfRange {
        role: &'static str,
        stop: StopId,
        node_count: usize,
    },
}

/// A request for the fastest route between two stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteQuery {
    /// Where the trip starts.
    pub source: StopId,

    /// Where the trip ends.
    pub destination: StopId,
}

impl RouteQuery {
    /// Create a new route query.
    pub fn new(source: StopId, destination: StopId) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Check both stops exist in a network of `node_count` stops.
    pub fn validate(&self, node_count: usize) -> Result<(), QueryError> {
        for (role, stop) in [("source", self.source), ("destination", self.destination)] {
            if !stop.is_within(node_count) {
                return Err(QueryError::StopOutOfRange {
                    role,
                    stop,
                    node_count,
                });
            }
        }
        Ok(())
    }
}

/// Answers route queries against a populated network.
///
/// The router only reads the network. Each query builds its own
/// [`RouteTable`], so one network can serve any number of routers or
/// queries at once.
#[derive(Debug, Clone, Copy)]
pub struct Router<'a> {
    network: &'a Network,
}

impl<'a> Router<'a> {
    /// Create a router over a network.
    pub fn new(network: &'a Network) -> Self {
        Self { network }
    }

    /// Find the fastest route for a query.
    ///
    /// An unreachable destination is a normal outcome
    /// ([`RouteOutcome::NoPath`]); only invalid stop ids are errors.
    pub fn route(&self, query: &RouteQuery) -> Result<RouteOutcome, QueryError> {
        query.validate(self.network.node_count())?;

        if query.source == query.destination {
            debug!(stop = %query.source, "route to self");
            return Ok(RouteOutcome::Found(Route::stay(query.source)));
        }

        let table = self.relax(query.source);

        let outcome = match table
            .path_to(query.destination)
            .and_then(|steps| Route::from_steps(query.source, query.destination, steps))
        {
            Some(route) => RouteOutcome::Found(route),
            None => RouteOutcome::NoPath {
                source: query.source,
                destination: query.destination,
            },
        };

        debug!(
            source = %query.source,
            destination = %query.destination,
            reached = table.reached_count(),
            found = outcome.is_found(),
            "route query complete"
        );

        Ok(outcome)
    }

    /// Compute route records for every stop from `source`.
    pub fn route_table(&self, source: StopId) -> Result<RouteTable, QueryError> {
        RouteQuery::new(source, source).validate(self.network.node_count())?;
        Ok(self.relax(source))
    }

    /// Run the relaxation. `source` must already be validated.
    fn relax(&self, source: StopId) -> RouteTable {
        let node_count = self.network.node_count();
        let mut table = RouteTable::new(source, node_count);
        let mut settled = vec![false; node_count];

        for _ in 0..node_count {
            let Some(current) = next_to_settle(table.records(), &settled) else {
                // Everything left is unreachable
                break;
            };
            settled[current] = true;

            let base = table.records()[current];
            trace!(stop = current, eta = base.eta, "settled stop");

            let edges = self
                .network
                .edges_from(StopId::new(current))
                .unwrap_or_default();
            let records = table.records_mut();

            for edge in edges {
                let candidate_eta = base.eta + u64::from(edge.eta);
                let target = &mut records[edge.destination.index()];

                // Strictly lower only: equal-ETA alternatives never replace the first found
                if candidate_eta < target.eta {
                    *target = RouteRecord {
                        eta: candidate_eta,
                        distance: base.distance + u64::from(edge.distance),
                        predecessor: Some(StopId::new(current)),
                        mode: Some(edge.mode),
                    };
                }
            }
        }

        table
    }
}

/// Pick the unsettled, reached stop with the lowest ETA.
///
/// Scans in id order and keeps the first minimum, so ties go to the lowest id.
fn next_to_settle(records: &[RouteRecord], settled: &[bool]) -> Option<usize> {
    let mut best: Option<(usize, u64)> = None;

    for (idx, record) in records.iter().enumerate() {
        if settled[idx] || !record.is_reached() {
            continue;
        }
        if best.is_none_or(|(_, eta)| record.eta < eta) {
            best = Some((idx, record.eta));
        }
    }

    best.map(|(idx, _)| idx)
}
