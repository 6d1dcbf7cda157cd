//! Domain types for the transit router.
//!
//! Identifiers and labels are validated at construction time, so code that
//! receives these types can trust their validity.

mod error;
mod mode;
mod stop;

pub use error::NetworkError;
pub use mode::{InvalidMode, Mode};
pub use stop::{InvalidStop, StopId};
