//! Fastest-route planner.
//!
//! Given a populated [`Network`](crate::network::Network) and a pair of
//! stops, finds the path with the lowest total ETA and reports its distance
//! and the transport mode of every hop.
//!
//! Distance is reported alongside the ETA-optimal path; it is never
//! minimised on its own.

mod record;
mod report;
mod route;
mod search;


pub use record::{RouteRecord, RouteTable};
pub use report::{render_json, render_text};
pub use route::{PathStep, Route, RouteOutcome};
pub use search::{QueryError, RouteQuery, Router};
