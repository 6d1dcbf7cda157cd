//! Transit network store.
//!
//! A network is a fixed set of stops, each owning an ordered list of outgoing
//! edges. Edges are always inserted as a mirrored pair, so the network is
//! effectively undirected. Several edges may join the same pair of stops,
//! one per transport option, each with its own distance and travel time.
//!
//! Networks are populated once during setup and only read afterwards; a
//! `&Network` can be shared freely between concurrent route queries.

mod config;
pub mod file;
mod reference;

use chrono::Duration;
use tracing::{debug, trace};

use crate::domain::{Mode, NetworkError, StopId};

pub use config::NetworkConfig;
pub use file::{ConnectionSpec, LoadError, NetworkFile, load_network};
pub use reference::{REFERENCE_CONNECTIONS, reference_network};

/// A directed edge leaving a stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Stop this edge leads to
    pub destination: StopId,
    /// Physical distance covered
    pub distance: u32,
    /// Minutes needed to traverse the edge
    pub eta: u32,
    /// How the edge is travelled
    pub mode: Mode,
}

impl Edge {
    /// Returns the traversal time as a Duration.
    pub fn travel_time(&self) -> Duration {
        Duration::minutes(i64::from(self.eta))
    }
}

/// A multimodal transit network with a fixed number of stops.
#[derive(Debug, Clone)]
pub struct Network {
    /// Outgoing edges per stop, in insertion order.
    stops: Vec<Vec<Edge>>,

    /// Maximum outgoing edges per stop.
    edge_capacity: usize,

    /// Number of successful `add_connection` calls.
    connections: usize,
}

impl Network {
    /// Create a network with `config.node_count` stops and no connections.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            stops: vec![Vec::new(); config.node_count],
            edge_capacity: config.edge_capacity,
            connections: 0,
        }
    }

    /// Connect two distinct stops in both directions.
    ///
    /// Appends `a → b` to `a`'s edges and the mirrored `b → a` to `b`'s
    /// edges, both with the same attributes. Every check runs before either
    /// insertion, so on error the network is unchanged.
    pub fn add_connection(
        &mut self,
        a: StopId,
        b: StopId,
        distance: u32,
        eta: u32,
        mode: Mode,
    ) -> Result<(), NetworkError> {
        for stop in [a, b] {
            if !stop.is_within(self.stops.len()) {
                return Err(NetworkError::StopOutOfRange {
                    stop,
                    node_count: self.stops.len(),
                });
            }
        }

        if a == b {
            return Err(NetworkError::SelfLoop(a));
        }

        for stop in [a, b] {
            if self.stops[stop.index()].len() >= self.edge_capacity {
                return Err(NetworkError::CapacityExceeded {
                    stop,
                    capacity: self.edge_capacity,
                });
            }
        }

        self.stops[a.index()].push(Edge {
            destination: b,
            distance,
            eta,
            mode,
        });
        self.stops[b.index()].push(Edge {
            destination: a,
            distance,
            eta,
            mode,
        });
        self.connections += 1;

        trace!(%a, %b, distance, eta, %mode, "added connection");
        Ok(())
    }

    /// Returns the number of stops.
    pub fn node_count(&self) -> usize {
        self.stops.len()
    }

    /// Returns the number of connections (each counted once, not per direction).
    pub fn connection_count(&self) -> usize {
        self.connections
    }

    /// Returns true if no connections have been added.
    pub fn is_empty(&self) -> bool {
        self.connections == 0
    }

    /// Get the outgoing edges of a stop in insertion order.
    ///
    /// Returns `None` if the stop is not part of this network.
    pub fn edges_from(&self, stop: StopId) -> Option<&[Edge]> {
        self.stops.get(stop.index()).map(Vec::as_slice)
    }

    /// Iterate over every stop with its outgoing edges, in id order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &[Edge])> + '_ {
        self.stops
            .iter()
            .enumerate()
            .map(|(idx, edges)| (StopId::new(idx), edges.as_slice()))
    }
}

/// Builder for populating a network from a literal connection table.
///
/// The first rejected connection is kept and returned from [`build`];
/// later connections are ignored once an error has occurred.
///
/// [`build`]: NetworkBuilder::build
///
/// # Example
///
/// ```
/// use transit_router::domain::Mode;
/// use transit_router::network::{NetworkBuilder, NetworkConfig};
///
/// let network = NetworkBuilder::new(NetworkConfig::with_node_count(3))
///     .connect(0, 1, 5, 10, Mode::Bus)
///     .connect(1, 2, 4, 6, Mode::Metro)
///     .build()
///     .unwrap();
/// assert_eq!(network.connection_count(), 2);
///
/// let err = NetworkBuilder::new(NetworkConfig::with_node_count(3))
///     .connect(0, 3, 5, 10, Mode::Bus)
///     .build();
/// assert!(err.is_err());
/// ```
#[derive(Debug)]
pub struct NetworkBuilder {
    network: Network,
    error: Option<NetworkError>,
}

impl NetworkBuilder {
    /// Create a builder for an empty network.
    pub fn new(config: NetworkConfig) -> Self {
        Self {
            network: Network::new(config),
            error: None,
        }
    }

    /// Add a bidirectional connection between stops `a` and `b`.
    pub fn connect(mut self, a: usize, b: usize, distance: u32, eta: u32, mode: Mode) -> Self {
        if self.error.is_none() {
            let result = self.network.add_connection(
                StopId::new(a),
                StopId::new(b),
                distance,
                eta,
                mode,
            );
            if let Err(err) = result {
                self.error = Some(err);
            }
        }
        self
    }

    /// Build the network, or return the first connection error.
    pub fn build(self) -> Result<Network, NetworkError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        debug!(
            stops = self.network.node_count(),
            connections = self.network.connection_count(),
            "network built"
        );
        Ok(self.network)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(idx: usize) -> StopId {
        StopId::new(idx)
    }

    #[test]
    fn empty_network() {
        let network = Network::new(NetworkConfig::default());
        assert!(network.is_empty());
        assert_eq!(network.node_count(), 20);
        assert_eq!(network.connection_count(), 0);
        assert_eq!(network.edges_from(stop(0)), Some(&[] as &[Edge]));
    }

    #[test]
    fn connection_is_mirrored() {
        let mut network = Network::new(NetworkConfig::with_node_count(4));
        network
            .add_connection(stop(0), stop(2), 7, 15, Mode::Walk)
            .unwrap();

        assert_eq!(network.connection_count(), 1);
        assert_eq!(
            network.edges_from(stop(0)).unwrap(),
            &[Edge {
                destination: stop(2),
                distance: 7,
                eta: 15,
                mode: Mode::Walk,
            }]
        );
        assert_eq!(
            network.edges_from(stop(2)).unwrap(),
            &[Edge {
                destination: stop(0),
                distance: 7,
                eta: 15,
                mode: Mode::Walk,
            }]
        );
        assert!(network.edges_from(stop(1)).unwrap().is_empty());
    }

    #[test]
    fn parallel_edges_are_kept_in_order() {
        let mut network = Network::new(NetworkConfig::with_node_count(2));
        network
            .add_connection(stop(0), stop(1), 5, 10, Mode::Bus)
            .unwrap();
        network
            .add_connection(stop(0), stop(1), 5, 15, Mode::Walk)
            .unwrap();

        let modes: Vec<Mode> = network
            .edges_from(stop(0))
            .unwrap()
            .iter()
            .map(|e| e.mode)
            .collect();
        assert_eq!(modes, vec![Mode::Bus, Mode::Walk]);
        assert_eq!(network.edges_from(stop(1)).unwrap().len(), 2);
        assert_eq!(network.connection_count(), 2);
    }

    #[test]
    fn reject_out_of_range_stop() {
        let mut network = Network::new(NetworkConfig::with_node_count(3));
        let err = network
            .add_connection(stop(1), stop(3), 1, 1, Mode::Bus)
            .unwrap_err();

        assert_eq!(
            err,
            NetworkError::StopOutOfRange {
                stop: stop(3),
                node_count: 3
            }
        );
        assert!(network.is_empty());
        assert!(network.edges_from(stop(1)).unwrap().is_empty());
    }

    #[test]
    fn reject_self_loop() {
        let mut network = Network::new(NetworkConfig::with_node_count(3));
        let err = network
            .add_connection(stop(1), stop(1), 1, 1, Mode::Walk)
            .unwrap_err();

        assert_eq!(err, NetworkError::SelfLoop(stop(1)));
        assert!(network.is_empty());
    }

    #[test]
    fn capacity_exceeded_leaves_network_unchanged() {
        let mut network = Network::new(NetworkConfig::new(3, 1));
        network
            .add_connection(stop(0), stop(1), 1, 1, Mode::Bus)
            .unwrap();

        // Stop 2 has room but stop 1 is full, so nothing is inserted at either end
        let err = network
            .add_connection(stop(2), stop(1), 1, 1, Mode::Bus)
            .unwrap_err();

        assert_eq!(
            err,
            NetworkError::CapacityExceeded {
                stop: stop(1),
                capacity: 1
            }
        );
        assert!(network.edges_from(stop(2)).unwrap().is_empty());
        assert_eq!(network.edges_from(stop(1)).unwrap().len(), 1);
        assert_eq!(network.connection_count(), 1);
    }

    #[test]
    fn edges_from_unknown_stop() {
        let network = Network::new(NetworkConfig::with_node_count(2));
        assert!(network.edges_from(stop(2)).is_none());
    }

    #[test]
    fn stops_iterates_in_id_order() {
        let network = NetworkBuilder::new(NetworkConfig::with_node_count(3))
            .connect(2, 0, 1, 1, Mode::Metro)
            .build()
            .unwrap();

        let degrees: Vec<(StopId, usize)> = network
            .stops()
            .map(|(id, edges)| (id, edges.len()))
            .collect();
        assert_eq!(degrees, vec![(stop(0), 1), (stop(1), 0), (stop(2), 1)]);
    }

    #[test]
    fn edge_travel_time() {
        let edge = Edge {
            destination: stop(1),
            distance: 5,
            eta: 10,
            mode: Mode::Bus,
        };
        assert_eq!(edge.travel_time(), Duration::minutes(10));
    }

    #[test]
    fn builder() {
        let network = NetworkBuilder::new(NetworkConfig::with_node_count(4))
            .connect(0, 1, 5, 10, Mode::Bus)
            .connect(1, 2, 6, 8, Mode::Metro)
            .connect(2, 3, 4, 7, Mode::Walk)
            .build()
            .unwrap();

        assert_eq!(network.connection_count(), 3);
        assert_eq!(network.edges_from(stop(1)).unwrap().len(), 2);
    }

    #[test]
    fn builder_reports_first_error() {
        let err = NetworkBuilder::new(NetworkConfig::with_node_count(4))
            .connect(0, 1, 5, 10, Mode::Bus)
            .connect(2, 2, 1, 1, Mode::Walk) // first error
            .connect(0, 9, 1, 1, Mode::Walk) // ignored
            .build()
            .unwrap_err();

        assert_eq!(err, NetworkError::SelfLoop(stop(2)));
    }
}
