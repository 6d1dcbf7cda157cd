//! Multimodal transit router.
//!
//! Answers: "What is the fastest way from this stop to that one?" over a
//! static network of bus, metro and walking connections, reporting the
//! travel time, the distance covered and the mode of every hop.

pub mod domain;
pub mod network;
pub mod planner;
