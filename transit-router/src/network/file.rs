//! Network definitions loaded from JSON.
//!
//! A network file lists the stop count and every connection:
//!
//! ```json
//! {
//!   "node_count": 3,
//!   "edge_capacity": 50,
//!   "connections": [
//!     { "from": 0, "to": 1, "distance": 5, "eta": 10, "mode": "bus" },
//!     { "from": 1, "to": 2, "distance": 6, "eta": 8, "mode": "metro" }
//!   ]
//! }
//! ```
//!
//! `edge_capacity` is optional and defaults to the standard per-stop capacity.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{Network, NetworkConfig};
use crate::domain::{Mode, NetworkError, StopId};

/// Errors from loading a network definition.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read network file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The definition is not valid JSON or has the wrong shape
    #[error("invalid network definition: {0}")]
    Json(#[from] serde_json::Error),

    /// A connection was rejected by the network store
    #[error("connection #{index} rejected: {source}")]
    Connection { index: usize, source: NetworkError },
}

/// One bidirectional connection in a network file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSpec {
    pub from: StopId,
    pub to: StopId,
    pub distance: u32,
    pub eta: u32,
    pub mode: Mode,
}

/// Serialized form of a network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkFile {
    /// Number of stops
    pub node_count: usize,

    /// Outgoing edge capacity per stop
    #[serde(default = "default_edge_capacity")]
    pub edge_capacity: usize,

    /// Connections in insertion order
    #[serde(default)]
    pub connections: Vec<ConnectionSpec>,
}

fn default_edge_capacity() -> usize {
    NetworkConfig::default().edge_capacity
}

impl NetworkFile {
    /// Parse a definition from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Populate a network from this definition.
    ///
    /// Connections are inserted in file order, which fixes the tie-break
    /// order the router sees.
    pub fn into_network(self) -> Result<Network, LoadError> {
        let mut network = Network::new(NetworkConfig::new(self.node_count, self.edge_capacity));
        for (index, conn) in self.connections.into_iter().enumerate() {
            network
                .add_connection(conn.from, conn.to, conn.distance, conn.eta, conn.mode)
                .map_err(|source| LoadError::Connection { index, source })?;
        }
        Ok(network)
    }
}

/// Read and build a network from a JSON file.
pub fn load_network(path: &Path) -> Result<Network, LoadError> {
    let json = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let network = NetworkFile::from_json(&json)?.into_network()?;

    debug!(
        path = %path.display(),
        stops = network.node_count(),
        connections = network.connection_count(),
        "loaded network file"
    );
    Ok(network)
}
