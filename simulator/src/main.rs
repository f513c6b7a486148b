use anyhow::Context;
use clap::Parser;
use crapsim_execution::{NoopObserver, TracingObserver};
use crapsim_simulator::{run_session, Config, StrategyName};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Simulate craps hands against a betting strategy.", long_about = None)]
struct Args {
    /// Number of hands to play
    #[arg(short = 'n', long)]
    hands: Option<u32>,

    /// Starting bankroll
    #[arg(short, long)]
    balance: Option<i64>,

    #[arg(short, long, value_enum)]
    strategy: Option<StrategyName>,

    /// Seed for the dice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file of recorded rolls to replay first
    #[arg(short = 'f', long)]
    rolls: Option<PathBuf>,

    /// YAML config file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    log_level: Option<String>,

    /// Log every roll and settlement
    #[arg(short, long)]
    detail: bool,
}

fn main() -> anyhow::Result<()> {
    // Parse args
    let args = Args::parse();

    // Load config
    let mut config = match &args.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    if let Some(hands) = args.hands {
        config.hands = hands;
    }
    if let Some(balance) = args.balance {
        config.balance = balance;
    }
    if let Some(strategy) = args.strategy {
        config.strategy = strategy;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.rolls.is_some() {
        config.rolls = args.rolls;
    }
    if let Some(log_level) = args.log_level {
        config.log_level = log_level;
    }
    config.detail |= args.detail;
    let config = config.validate().context("invalid configuration")?;

    // Create logger
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!(
        "simulating {} hand(s) with {} (seed {}, {} recorded rolls)",
        config.hands,
        config.strategy.strategy().name(),
        config.seed,
        config.rolls.len()
    );
    info!("table minimum: {}", config.rules.min_bet());

    // Run session
    let summary = if config.detail {
        run_session(&config, &mut TracingObserver)
    } else {
        run_session(&config, &mut NoopObserver)
    }
    .context("session aborted")?;

    println!("{summary}");
    Ok(())
}
