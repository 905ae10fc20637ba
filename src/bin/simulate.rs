use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use connect_m::ai::PolicyKind;
use connect_m::config::AppConfig;
use connect_m::game::PieceColor;
use connect_m::simulation::simulate_parallel;

/// Pit two bots against each other over many games.
#[derive(Parser)]
#[command(name = "simulate", about = "Run bot-vs-bot Connect-M simulations")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of games
    #[arg(short = 'n', long)]
    num_games: Option<usize>,

    /// Yellow bot
    #[arg(long, value_enum)]
    player1: Option<PolicyKind>,

    /// Red bot
    #[arg(long, value_enum)]
    player2: Option<PolicyKind>,

    /// Worker threads, one board each
    #[arg(long)]
    threads: Option<usize>,

    /// Base seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Color that moves first
    #[arg(long, value_enum)]
    first: Option<PieceColor>,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    #[arg(long)]
    m: Option<usize>,

    /// Print a TOML file with every default value and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.print_default_config {
        print!("{}", AppConfig::default_toml().context("serializing default config")?);
        return Ok(());
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    let sim = &mut config.simulation;
    if let Some(n) = cli.num_games {
        sim.num_games = n;
    }
    if let Some(player) = cli.player1 {
        sim.player1 = player;
    }
    if let Some(player) = cli.player2 {
        sim.player2 = player;
    }
    if let Some(threads) = cli.threads {
        sim.threads = threads;
    }
    if cli.seed.is_some() {
        sim.seed = cli.seed;
    }
    if let Some(first) = cli.first {
        sim.first = first;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(m) = cli.m {
        config.board.m = m;
    }
    config.validate().context("validating configuration")?;

    let stats = simulate_parallel(&config.board, &config.simulation).context("running simulation")?;
    let sim = &config.simulation;

    println!(
        "Bot 1 ({}) wins: {:.2}%",
        sim.player1.name(),
        100.0 * stats.win_rate(PieceColor::Yellow)
    );
    println!(
        "Bot 2 ({}) wins: {:.2}%",
        sim.player2.name(),
        100.0 * stats.win_rate(PieceColor::Red)
    );
    println!("Ties: {:.2}%", 100.0 * stats.draw_rate());
    println!("Average game length: {:.1} moves", stats.average_game_length());

    Ok(())
}
