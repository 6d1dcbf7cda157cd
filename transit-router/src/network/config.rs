//! Network sizing configuration.

/// Fixed dimensions of a transit network, decided before it is populated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NetworkConfig {
    /// Number of stops. Stops are addressed as `0..node_count`.
    pub node_count: usize,

    /// Maximum number of outgoing edges a single stop may hold.
    /// Each connection adds one outgoing edge at both of its stops.
    pub edge_capacity: usize,
}

impl NetworkConfig {
    /// Create a new configuration with the given dimensions.
    pub fn new(node_count: usize, edge_capacity: usize) -> Self {
        Self {
            node_count,
            edge_capacity,
        }
    }

    /// Default configuration resized to `node_count` stops.
    pub fn with_node_count(node_count: usize) -> Self {
        Self {
            node_count,
            ..Self::default()
        }
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            node_count: 20,
            edge_capacity: 50,
        }
    }
}
