//! Command-line arguments and query input handling.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use transit_router::domain::{InvalidStop, StopId};
use transit_router::planner::RouteQuery;

/// Find the fastest route between two stops of a multimodal transit network.
#[derive(Debug, Parser)]
#[command(name = "transit-router", version)]
pub struct Args {
    /// JSON network definition. The built-in reference network is used when omitted.
    #[arg(long, value_name = "FILE")]
    pub network: Option<PathBuf>,

    /// Source stop id. Prompted for when omitted.
    #[arg(long)]
    pub from: Option<String>,

    /// Destination stop id. Prompted for when omitted.
    #[arg(long)]
    pub to: Option<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

/// Source or destination input that does not name a stop of the network.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid node numbers! Please choose between 0 and {max_id}.")]
pub struct InvalidQuery {
    max_id: usize,
}

/// Highest valid stop id, as shown in prompts and messages.
pub fn max_stop_id(node_count: usize) -> usize {
    node_count.saturating_sub(1)
}

/// Turn raw source and destination input into a query.
pub fn parse_query(
    node_count: usize,
    source: &str,
    destination: &str,
) -> Result<RouteQuery, InvalidQuery> {
    let invalid = |_: InvalidStop| InvalidQuery {
        max_id: max_stop_id(node_count),
    };
    let source = StopId::parse(source, node_count).map_err(invalid)?;
    let destination = StopId::parse(destination, node_count).map_err(invalid)?;
    Ok(RouteQuery::new(source, destination))
}

/// Ask for a stop id on `output` and read one line from `input`.
///
/// Returns an empty string at end of input.
pub fn prompt<R: BufRead, W: Write>(
    role: &str,
    max_id: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "Enter the {role} node (0-{max_id}): ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Resolve source and destination input, prompting for whichever is missing.
///
/// After any prompt a newline is written so the report starts on its own line.
pub fn read_stops<R: BufRead, W: Write>(
    from: Option<&str>,
    to: Option<&str>,
    max_id: usize,
    input: &mut R,
    output: &mut W,
) -> io::Result<(String, String)> {
    let mut prompted = false;
    let mut read = |given: Option<&str>, role: &str| match given {
        Some(s) => Ok(s.to_string()),
        None => {
            prompted = true;
            prompt(role, max_id, &mut *input, &mut *output)
        }
    };
    let source = read(from, "source")?;
    let destination = read(to, "destination")?;

    if prompted {
        writeln!(output)?;
    }
    Ok((source, destination))
}
