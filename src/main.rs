//! u-tsp CLI: approximate Euclidean TSP tours from a point map.

use std::fs::File;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;
use log::{info, LevelFilter};

use u_tsp::config::SolverConfig;
use u_tsp::constructive::ClusterCount;
use u_tsp::io::{read_map, write_outcome, OutputMode};
use u_tsp::models::DistanceMetric;
use u_tsp::selection::CandidateSelector;
use u_tsp::{logging, Result};

#[derive(Parser)]
#[command(name = "u-tsp")]
#[command(about = "Approximate Euclidean TSP tours from competing heuristics")]
#[command(version)]
struct Cli {
    /// Map file: a point count followed by coordinate pairs (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output: path, length, summary, or json
    #[arg(short, long, default_value = "path")]
    mode: OutputMode,

    /// JSON configuration file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Random tours tried by the random pipeline
    #[arg(long)]
    random_restarts: Option<usize>,

    /// Nearest-neighbor + 2-opt attempts
    #[arg(long)]
    optimized_restarts: Option<usize>,

    /// Pass ceiling for 2-opt
    #[arg(long)]
    two_opt_passes: Option<usize>,

    /// Positions considered by pairwise swap
    #[arg(long)]
    swap_depth: Option<usize>,

    /// Random + pairwise swap attempts (0 disables the swap pipeline)
    #[arg(long)]
    swap_restarts: Option<usize>,

    /// Cluster count for clustered construction, or 'sqrt'
    #[arg(long)]
    clusters: Option<ClusterCount>,

    /// Nearest-neighbor attempts inside each cluster
    #[arg(long)]
    cluster_restarts: Option<usize>,

    /// Starting clusters tried when ordering centroids
    #[arg(long)]
    centroid_restarts: Option<usize>,

    /// Neighbor comparison metric: euclidean or rounded
    #[arg(long)]
    metric: Option<DistanceMetric>,

    /// Run pipelines in parallel
    #[arg(long)]
    parallel: bool,

    /// Log level: off, error, warn, info, debug, trace
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

impl Cli {
    fn solver_config(&self) -> Result<SolverConfig> {
        let mut config = match &self.config {
            Some(path) => SolverConfig::from_json_file(path)?,
            None => SolverConfig::default(),
        };
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(n) = self.random_restarts {
            config = config.with_random_restarts(n);
        }
        if let Some(n) = self.optimized_restarts {
            config = config.with_optimized_restarts(n);
        }
        if let Some(n) = self.two_opt_passes {
            config = config.with_two_opt_max_passes(n);
        }
        if let Some(n) = self.swap_depth {
            config = config.with_swap_depth(n);
        }
        if let Some(n) = self.swap_restarts {
            config = config.with_swap_restarts(n);
        }
        if let Some(clusters) = self.clusters {
            config = config.with_clusters(clusters);
        }
        if let Some(n) = self.cluster_restarts {
            config = config.with_cluster_local_restarts(n);
        }
        if let Some(n) = self.centroid_restarts {
            config = config.with_centroid_restarts(n);
        }
        if let Some(metric) = self.metric {
            config = config.with_metric(metric);
        }
        if self.parallel {
            config = config.with_parallel(true);
        }
        config.validate()?;
        Ok(config)
    }
}

fn run(cli: &Cli) -> Result<()> {
    let now = Instant::now();
    logging::init_logger(cli.log_level)?;
    let config = cli.solver_config()?;

    let geometry = match &cli.input {
        Some(path) => read_map(BufReader::new(File::open(path)?))?,
        None => read_map(io::stdin().lock())?,
    };
    info!("input: n={} seed={}", geometry.size(), config.seed);

    let outcome = CandidateSelector::from_config(&config).select(&geometry)?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_outcome(&mut out, &outcome, cli.mode)?;

    info!(
        "output: n={} length={:.4} time={:.2}s",
        outcome.best_tour().len(),
        outcome.best_tour().length(),
        now.elapsed().as_secs_f32()
    );
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
