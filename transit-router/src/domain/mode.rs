//! Transport mode type.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown transport mode label.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid transport mode {label:?}: expected one of bus, metro, walk")]
pub struct InvalidMode {
    label: String,
}

/// The transport method used to traverse a single edge.
///
/// The vocabulary is closed: a label outside it is a configuration error,
/// never truncated or coerced.
///
/// # Examples
///
/// ```
/// use transit_router::domain::Mode;
///
/// assert_eq!(Mode::parse("metro").unwrap(), Mode::Metro);
/// assert_eq!(Mode::Bus.to_string(), "bus");
///
/// assert!(Mode::parse("Metro").is_err());
/// assert!(Mode::parse("tram").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Bus,
    Metro,
    Walk,
}

impl Mode {
    /// Every supported mode, in label order.
    pub const ALL: [Mode; 3] = [Mode::Bus, Mode::Metro, Mode::Walk];

    /// Parse a mode from its lower-case label.
    pub fn parse(s: &str) -> Result<Self, InvalidMode> {
        match s {
            "bus" => Ok(Mode::Bus),
            "metro" => Ok(Mode::Metro),
            "walk" => Ok(Mode::Walk),
            _ => Err(InvalidMode {
                label: s.to_string(),
            }),
        }
    }

    /// Returns the lower-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Bus => "bus",
            Mode::Metro => "metro",
            Mode::Walk => "walk",
        }
    }
}

impl FromStr for Mode {
    type Err = InvalidMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mode::parse(s)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
