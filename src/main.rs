//! Command line driver: solves a request file and prints the response.

use std::path::PathBuf;

use clap::Parser;
use tracing::{debug, trace};

use u_tsp::models::Algorithm;
use u_tsp::selector::SolveRequest;

#[derive(Parser)]
#[command(version, about, author, long_about = None)]
struct Cli {
    /// Increases log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Solve request JSON: matrix, sourceIndex, algorithms, genetic, seed.
    #[arg(value_name = "REQUEST")]
    request: PathBuf,

    /// Overrides the request's algorithms.
    #[arg(short, long, value_delimiter = ',', value_name = "ALGORITHMS")]
    algorithms: Vec<Algorithm>,

    /// Overrides the waypoint every route starts at.
    #[arg(long, value_name = "SOURCE")]
    source_index: Option<usize>,

    /// Seeds the population solver for reproducible runs.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Number of generations of the population solver.
    #[arg(long, value_name = "GENERATIONS")]
    generations: Option<usize>,

    /// Tours kept per generation (at least 2).
    #[arg(long = "population-size", value_name = "SIZE")]
    population_size: Option<usize>,

    /// Probability in [0, 1] that a child is swap-mutated.
    #[arg(long = "mutation-rate", value_name = "RATE")]
    mutation_rate: Option<f64>,
}

fn main() -> u_tsp::Result<()> {
    let cli = Cli::parse();

    let tracing_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(std::io::stderr)
        .init();
    debug!("Verbose level: {}", cli.verbose);

    trace!("Reading request from {:?}", cli.request);
    let json = std::fs::read_to_string(&cli.request)?;
    let mut request = SolveRequest::from_json(&json)?;

    if !cli.algorithms.is_empty() {
        request.algorithms = cli.algorithms;
    }
    if let Some(source) = cli.source_index {
        request.source_index = source;
    }
    if let Some(seed) = cli.seed {
        request.seed = Some(seed);
    }
    if let Some(generations) = cli.generations {
        request.genetic = request.genetic.with_generations(generations);
    }
    if let Some(size) = cli.population_size {
        request.genetic = request.genetic.with_population_size(size);
    }
    if let Some(rate) = cli.mutation_rate {
        request.genetic = request.genetic.with_mutation_rate(rate);
    }
    trace!("Request options: {:?}", request.options());

    let response = request.run()?;
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
