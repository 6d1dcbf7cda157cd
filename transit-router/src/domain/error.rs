//! Network construction errors.
//!
//! The network is static and fully known before any query runs, so every
//! error here is a configuration error: it is surfaced to whoever is building
//! the network and the network is left unchanged.

use super::StopId;

/// Errors raised while populating a transit network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// A connection names a stop the network does not have
    #[error("stop {stop} is out of range: network has {node_count} stops")]
    StopOutOfRange { stop: StopId, node_count: usize },

    /// Both ends of a connection are the same stop
    #[error("connection from stop {0} to itself is not allowed")]
    SelfLoop(StopId),

    /// A stop's outgoing edge list is full
    #[error("stop {stop} already has {capacity} outgoing edges")]
    CapacityExceeded { stop: StopId, capacity: usize },
}
