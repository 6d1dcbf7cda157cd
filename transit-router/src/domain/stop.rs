//! Stop identifier type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when a stop id cannot be parsed or lies outside the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidStop {
    /// Input is not a non-negative integer
    #[error("invalid stop id {input:?}: must be a non-negative integer")]
    NotANumber { input: String },

    /// Index is not below the network's stop count
    #[error("stop {index} is out of range: network has {node_count} stops")]
    OutOfRange { index: usize, node_count: usize },
}

/// Index of a stop in a transit network.
///
/// Stops are addressed densely as `0..node_count`. A `StopId` on its own does
/// not know which network it belongs to, so anything that accepts one from
/// outside (the network store, the router) checks it against its own stop
/// count. Use [`StopId::parse`] or [`StopId::checked`] at input boundaries.
///
/// # Examples
///
/// ```
/// use transit_router::domain::StopId;
///
/// let stop = StopId::parse("7", 20).unwrap();
/// assert_eq!(stop.index(), 7);
///
/// // Outside the network
/// assert!(StopId::parse("20", 20).is_err());
///
/// // Not a number
/// assert!(StopId::parse("-1", 20).is_err());
/// assert!(StopId::parse("seven", 20).is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StopId(usize);

impl StopId {
    /// Wrap a raw index without range checking.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Wrap a raw index, rejecting it unless `index < node_count`.
    pub fn checked(index: usize, node_count: usize) -> Result<Self, InvalidStop> {
        if index >= node_count {
            return Err(InvalidStop::OutOfRange { index, node_count });
        }
        Ok(Self(index))
    }

    /// Parse a stop id from user input and check it against `node_count`.
    ///
    /// Surrounding whitespace is ignored.
    pub fn parse(s: &str, node_count: usize) -> Result<Self, InvalidStop> {
        let index = s
            .trim()
            .parse::<usize>()
            .map_err(|_| InvalidStop::NotANumber {
                input: s.to_string(),
            })?;
        Self::checked(index, node_count)
    }

    /// Returns the raw index.
    pub const fn index(self) -> usize {
        self.0
    }

    /// Returns true if this stop exists in a network of `node_count` stops.
    pub const fn is_within(self, node_count: usize) -> bool {
        self.0 < node_count
    }
}

impl fmt::Debug for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StopId({})", self.0)
    }
}

impl fmt::Display for StopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
