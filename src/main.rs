//! FFBNET - CLI Entry Point
//!
//! Trains a fixed filter bank network on Lissajous curves.

use clap::{Parser, Subcommand};
use ffbnet::signals::{ExampleProvider, LissajousPairs};
use ffbnet::trainer::reconstruction_errors;
use ffbnet::{batch_cost, benchmark, Config, FilterBankNet, HillClimber};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ffbnet")]
#[command(version)]
#[command(about = "Hash-switched filter bank network trained by hill climbing")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Train a network on the Lissajous batch
    Train {
        /// Configuration file (YAML)
        #[arg(short, long, default_value = "config.yaml")]
        config: PathBuf,

        /// Number of steps, overriding the config
        #[arg(short, long)]
        steps: Option<u64>,

        /// Perturber seed, overriding the config
        #[arg(long)]
        seed: Option<u64>,

        /// Quiet mode (minimal output)
        #[arg(short, long)]
        quiet: bool,
    },

    /// Run performance benchmark
    Benchmark {
        /// Number of steps
        #[arg(short, long, default_value = "1000")]
        steps: u64,

        /// Vector length (power of two)
        #[arg(short, long, default_value = "256")]
        vector_len: usize,

        /// Number of layers
        #[arg(short, long, default_value = "5")]
        depth: usize,
    },

    /// Generate default configuration file
    Init {
        /// Output path
        #[arg(short, long, default_value = "config.yaml")]
        output: PathBuf,
    },
}

/// Initialize logging; `RUST_LOG` overrides `default_level`
fn init_logging(default_level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Train {
            config,
            steps,
            seed,
            quiet,
        } => run_training(config, steps, seed, quiet),

        Commands::Benchmark {
            steps,
            vector_len,
            depth,
        } => {
            init_logging("info");
            run_benchmark(steps, vector_len, depth)
        }

        Commands::Init { output } => {
            init_logging("info");
            generate_config(output)
        }
    }
}

fn run_training(
    config_path: PathBuf,
    steps: Option<u64>,
    seed: Option<u64>,
    quiet: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let loaded = config_path.exists();
    let mut config = if loaded {
        Config::from_file(&config_path)?
    } else {
        Config::default()
    };
    init_logging(&config.logging.log_level);
    if loaded {
        log::info!("Loaded config from: {:?}", config_path);
    } else {
        log::info!("Using default configuration");
    }
    if let Some(s) = steps {
        config.training.steps = s;
    }
    if seed.is_some() {
        config.training.rng_seed = seed;
    }
    config.validate()?;
    if quiet {
        config.logging.report_interval = config.training.steps.max(1);
    }

    let mut net = FilterBankNet::from_config(&config)?;
    let examples = LissajousPairs::default().examples(config.network.vector_len)?;
    let initial_cost = batch_cost(&net, &examples)?;

    let mut climber = HillClimber::from_config(&config)?;
    let stats = climber.run(&mut net, &examples, config.training.steps)?;

    println!();
    println!("{}", stats);
    println!("Initial cost: {:.4}", initial_cost);
    if !quiet {
        for (i, err) in reconstruction_errors(&net, &examples)?.iter().enumerate() {
            println!("  Example {}: error {:.4}", i, err);
        }
    }

    Ok(())
}

fn run_benchmark(
    steps: u64,
    vector_len: usize,
    depth: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    println!("Running benchmark...");
    println!("  Steps: {}", steps);
    println!("  Network: {} x {} layers", vector_len, depth);
    println!();

    let result = benchmark(steps, vector_len, depth)?;
    println!("{}", result);

    Ok(())
}

fn generate_config(output: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::default();
    config.save(&output)?;
    println!("Generated default configuration: {:?}", output);
    Ok(())
}
