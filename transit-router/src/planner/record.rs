//! Per-query route records.

use crate::domain::{Mode, StopId};

use super::route::PathStep;

/// Best known way of reaching one stop during a single query.
///
/// `distance`, `predecessor` and `mode` only ever change together with an
/// ETA improvement: distance is whatever the fastest known path covers, not
/// an independently minimised quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteRecord {
    /// Cumulative minutes from the source, or [`RouteRecord::UNREACHED`].
    pub eta: u64,

    /// Cumulative distance along the path that achieves `eta`.
    pub distance: u64,

    /// Previous stop on that path (`None` for the source and unreached stops).
    pub predecessor: Option<StopId>,

    /// Mode of the edge used to arrive here.
    pub mode: Option<Mode>,
}

impl RouteRecord {
    /// ETA sentinel for stops not reached yet. Larger than any attainable sum.
    pub const UNREACHED: u64 = u64::MAX;

    /// Record of a stop nothing has reached.
    pub const fn unreached() -> Self {
        Self {
            eta: Self::UNREACHED,
            distance: Self::UNREACHED,
            predecessor: None,
            mode: None,
        }
    }

    /// Record of the query's source stop.
    pub const fn origin() -> Self {
        Self {
            eta: 0,
            distance: 0,
            predecessor: None,
            mode: None,
        }
    }

    /// Returns true if some path to this stop is known.
    pub const fn is_reached(&self) -> bool {
        self.eta != Self::UNREACHED
    }
}

/// Route records for every stop of a network, relative to one source.
///
/// Created fresh for each query and dropped with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTable {
    source: StopId,
    records: Vec<RouteRecord>,
}

impl RouteTable {
    /// Create a table where only `source` is reached.
    pub(crate) fn new(source: StopId, node_count: usize) -> Self {
        let mut records = vec![RouteRecord::unreached(); node_count];
        records[source.index()] = RouteRecord::origin();
        Self { source, records }
    }

    /// Returns the source stop.
    pub fn source(&self) -> StopId {
        self.source
    }

    /// Get the record for a stop, if the stop exists.
    pub fn get(&self, stop: StopId) -> Option<&RouteRecord> {
        self.records.get(stop.index())
    }

    /// Iterate over every stop's record in id order.
    pub fn iter(&self) -> impl Iterator<Item = (StopId, &RouteRecord)> + '_ {
        self.records
            .iter()
            .enumerate()
            .map(|(idx, record)| (StopId::new(idx), record))
    }

    /// Returns the number of stops that have a known path from the source.
    pub fn reached_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_reached()).count()
    }

    pub(crate) fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    pub(crate) fn records_mut(&mut self) -> &mut [RouteRecord] {
        &mut self.records
    }

    /// Walk predecessor links from `destination` back to the source.
    ///
    /// Returns the steps in source-to-destination order, or `None` if the
    /// destination is unreached. The first step is the source itself and
    /// carries no mode.
    pub fn path_to(&self, destination: StopId) -> Option<Vec<PathStep>> {
        let record = self.get(destination)?;
        if !record.is_reached() {
            return None;
        }

        let mut steps = Vec::new();
        let mut current = Some(destination);
        while let Some(stop) = current {
            let record = &self.records[stop.index()];
            steps.push(PathStep {
                stop,
                mode: record.mode,
                eta: record.eta,
                distance: record.distance,
            });
            // Predecessor chains are acyclic, so this bounds a corrupt table only
            if steps.len() > self.records.len() {
                return None;
            }
            current = record.predecessor;
        }

        steps.reverse();
        Some(steps)
    }
}
