mod cli;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use transit_router::domain::NetworkError;
use transit_router::network::{LoadError, load_network, reference_network};
use transit_router::planner::{QueryError, Router, render_json, render_text};

use cli::{Args, Format, max_stop_id, parse_query, read_stops};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("reference network: {0}")]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Query(#[from] QueryError),

    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("failed to encode report: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<ExitCode, CliError> {
    let network = match &args.network {
        Some(path) => load_network(path)?,
        None => reference_network()?,
    };
    let max_id = max_stop_id(network.node_count());

    let (source, destination) = read_stops(
        args.from.as_deref(),
        args.to.as_deref(),
        max_id,
        &mut io::stdin().lock(),
        &mut io::stdout(),
    )?;

    let query = match parse_query(network.node_count(), &source, &destination) {
        Ok(query) => query,
        Err(invalid) => {
            println!("{invalid}");
            return Ok(ExitCode::FAILURE);
        }
    };

    let outcome = Router::new(&network).route(&query)?;

    let report = match args.format {
        Format::Text => render_text(&outcome),
        Format::Json => render_json(&outcome)?,
    };
    println!("{report}");

    Ok(ExitCode::SUCCESS)
}
