//! Schelling segregation simulation - CLI driver
//!
//! Presentation layer for the engine: parses parameters, steps the
//! simulation round by round, renders grid snapshots and statistics to the
//! terminal, and optionally writes the full run output as JSON. The engine
//! itself has no timing or I/O dependency; the inter-round delay lives here.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use schelling::{
    RelocationPolicy, SimConfig, SimState, SimulationOutput, TerminalState,
};

#[derive(Parser, Debug)]
#[command(name = "schelling")]
#[command(about = "Schelling model of housing segregation")]
struct Args {
    /// TOML configuration file; flags below override nothing when set
    #[arg(long)]
    config: Option<PathBuf>,

    /// Random seed for reproducibility
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Grid side length N
    #[arg(long, default_value_t = 20)]
    size: usize,

    /// Target fraction of red agents
    #[arg(long, default_value_t = 0.45)]
    red: f64,

    /// Target fraction of blue agents
    #[arg(long, default_value_t = 0.45)]
    blue: f64,

    /// Target fraction of empty sites
    #[arg(long, default_value_t = 0.10)]
    empty: f64,

    /// Neighborhood radius R
    #[arg(long, default_value_t = 1)]
    radius: usize,

    /// Similarity threshold in [0, 1]
    #[arg(long, default_value_t = 0.5)]
    similarity: f64,

    /// Occupancy threshold in [0, 1]
    #[arg(long, default_value_t = 0.0)]
    occupancy: f64,

    /// Maximum number of rounds
    #[arg(long, default_value_t = 100)]
    max_rounds: u64,

    /// Relocation policy
    #[arg(long, value_enum, default_value_t = PolicyArg::Nearest)]
    policy: PolicyArg,

    /// Delay between rounds in milliseconds (presentation pacing only)
    #[arg(long, default_value_t = 0)]
    delay_ms: u64,

    /// Write the full run output as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,

    /// Skip per-round grid rendering
    #[arg(long)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyArg {
    /// Nearest empty site where the agent would be satisfied
    Nearest,
    /// First available empty site, unconditionally
    First,
}

impl From<PolicyArg> for RelocationPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Nearest => RelocationPolicy::NearestSatisfying,
            PolicyArg::First => RelocationPolicy::FirstAvailable,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "schelling=info".into()),
        )
        .init();

    let args = Args::parse();

    let config = match build_config(&args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    println!("Schelling Segregation Simulation");
    println!("================================");
    println!("Grid: {}x{}", config.size, config.size);
    println!(
        "Fractions: red {:.2}, blue {:.2}, empty {:.2}",
        config.red_fraction, config.blue_fraction, config.empty_fraction
    );
    println!(
        "Thresholds: similarity {:.2}, occupancy {:.2} (radius {})",
        config.similarity_threshold, config.occupancy_threshold, config.radius
    );
    println!("Seed: {}  Policy: {:?}", config.rng_seed, config.policy);
    println!();

    let mut sim = match schelling::Simulation::new(config.clone()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if !args.quiet {
        println!("Initial grid:");
        print!("{}", sim.snapshot().render());
        println!();
    }

    let start = Instant::now();
    let mut rounds = Vec::new();
    let terminal = loop {
        if sim.rounds_completed() >= config.max_rounds {
            break TerminalState::Exhausted;
        }
        let record = sim.step();
        rounds.push(record);
        println!(
            "[Round {:>3}] {:.2}% satisfied, {} relocations",
            record.round,
            record.percent_satisfied(),
            record.relocations
        );
        if sim.state() == SimState::Converged {
            break TerminalState::Converged;
        }
        if args.delay_ms > 0 {
            std::thread::sleep(Duration::from_millis(args.delay_ms));
        }
    };
    let elapsed = start.elapsed();

    println!();
    if !args.quiet {
        println!("Final grid:");
        print!("{}", sim.snapshot().render());
        println!();
    }

    let output = SimulationOutput::new(
        sim.snapshot(),
        rounds,
        terminal,
        sim.total_relocations(),
        elapsed,
    );
    println!("{}", output.summary());
    println!("Wall time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);

    if let Some(path) = &args.output {
        if let Err(e) = std::fs::write(path, output.to_json()) {
            eprintln!("Warning: could not write output to {}: {}", path.display(), e);
        } else {
            println!("Full output written to {}", path.display());
        }
    }
}

/// Assemble the engine configuration from a TOML file or CLI flags
fn build_config(args: &Args) -> schelling::Result<SimConfig> {
    if let Some(path) = &args.config {
        return SimConfig::load(path);
    }
    let config = SimConfig {
        size: args.size,
        red_fraction: args.red,
        blue_fraction: args.blue,
        empty_fraction: args.empty,
        radius: args.radius,
        similarity_threshold: args.similarity,
        occupancy_threshold: args.occupancy,
        max_rounds: args.max_rounds,
        rng_seed: args.seed,
        policy: args.policy.into(),
    };
    config.validate()?;
    Ok(config)
}
