//! Console rendering of route outcomes.

use std::fmt::Write;

use super::route::{Route, RouteOutcome};

/// Render an outcome as the plain-text report printed by the CLI.
///
/// ```text
/// Fastest route from node 0 to node 6:
///     ETA: 25 minutes
///     Total Distance: 15 units
/// Path: 0 -> (bus) -> 1 -> (metro) -> 3 -> (bus) -> 6
/// ```
pub fn render_text(outcome: &RouteOutcome) -> String {
    match outcome {
        RouteOutcome::Found(route) => render_route(route),
        RouteOutcome::NoPath {
            source,
            destination,
        } => format!("No path found from node {source} to node {destination}."),
    }
}

/// Render an outcome as pretty-printed JSON.
pub fn render_json(outcome: &RouteOutcome) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(outcome)
}

fn render_route(route: &Route) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "Fastest route from node {} to node {}:",
        route.source, route.destination
    );
    let _ = writeln!(out, "    ETA: {} minutes", route.eta_minutes);
    let _ = writeln!(out, "    Total Distance: {} units", route.distance);
    let _ = write!(out, "Path: {}", render_path(route));
    out
}

fn render_path(route: &Route) -> String {
    if route.steps.is_empty() {
        return route.source.to_string();
    }

    let mut path = String::new();
    for step in &route.steps {
        if let Some(mode) = step.mode {
            let _ = write!(path, " -> ({mode}) -> ");
        }
        let _ = write!(path, "{}", step.stop);
    }
    path
}
