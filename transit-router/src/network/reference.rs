//! Built-in reference network.
//!
//! Twenty stops joined by bus, metro and walking connections. Several stop
//! pairs are served by more than one mode with different travel times.

use super::{Network, NetworkBuilder, NetworkConfig};
use crate::domain::Mode::{self, Bus, Metro, Walk};
use crate::domain::NetworkError;

/// Connections of the reference network as `(a, b, distance, eta, mode)`.
pub const REFERENCE_CONNECTIONS: [(usize, usize, u32, u32, Mode); 47] = [
    (0, 1, 5, 10, Bus),
    (0, 1, 5, 15, Walk),
    (0, 2, 7, 15, Walk),
    (0, 2, 7, 7, Bus),
    (1, 3, 6, 8, Metro),
    (1, 3, 6, 15, Bus),
    (1, 4, 8, 12, Bus),
    (1, 4, 8, 19, Metro),
    (2, 5, 5, 9, Metro),
    (2, 5, 5, 17, Walk),
    (3, 6, 4, 7, Bus),
    (3, 6, 4, 17, Metro),
    (3, 6, 4, 27, Walk),
    (3, 7, 10, 15, Walk),
    (3, 7, 10, 10, Bus),
    (4, 8, 5, 20, Metro),
    (4, 8, 5, 30, Bus),
    (4, 8, 5, 40, Walk),
    (5, 9, 7, 12, Bus),
    (5, 9, 7, 6, Metro),
    (6, 10, 8, 10, Metro),
    (6, 10, 8, 5, Bus),
    (7, 11, 12, 20, Bus),
    (8, 12, 6, 19, Metro),
    (8, 12, 6, 9, Bus),
    (9, 13, 7, 11, Bus),
    (10, 14, 5, 8, Metro),
    (10, 14, 5, 28, Bus),
    (11, 15, 10, 18, Bus),
    (12, 16, 9, 14, Bus),
    (12, 16, 9, 24, Metro),
    (13, 17, 6, 10, Metro),
    (14, 18, 7, 12, Bus),
    (15, 19, 8, 30, Metro),
    (15, 19, 8, 20, Bus),
    (15, 19, 8, 45, Walk),
    // Cross links between the main corridors
    (4, 9, 9, 13, Bus),
    (5, 10, 7, 9, Metro),
    (6, 11, 6, 8, Walk),
    (7, 12, 5, 7, Metro),
    (8, 13, 10, 16, Bus),
    (9, 14, 8, 11, Metro),
    (10, 15, 7, 10, Bus),
    (11, 16, 9, 12, Metro),
    (12, 17, 8, 10, Bus),
    (13, 18, 7, 9, Metro),
    (14, 19, 6, 8, Bus),
];

/// Build the reference network with the default configuration.
pub fn reference_network() -> Result<Network, NetworkError> {
    REFERENCE_CONNECTIONS
        .iter()
        .fold(
            NetworkBuilder::new(NetworkConfig::default()),
            |builder, &(a, b, distance, eta, mode)| builder.connect(a, b, distance, eta, mode),
        )
        .build()
}
