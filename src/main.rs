use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use connect_m::config::AppConfig;
use connect_m::ui::{App, BoardMode, PlayerKind};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::EnvFilter;

/// Play Connect-M in the terminal.
#[derive(Parser)]
#[command(name = "connect-m", about = "Play Connect-M in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[arg(long)]
    rows: Option<usize>,

    #[arg(long)]
    cols: Option<usize>,

    /// Pieces in a row needed to win
    #[arg(long)]
    m: Option<usize>,

    /// Board implementation to play on
    #[arg(long, value_enum)]
    mode: Option<BoardMode>,

    /// Yellow player (moves first)
    #[arg(long, value_enum)]
    player1: Option<PlayerKind>,

    /// Red player
    #[arg(long, value_enum)]
    player2: Option<PlayerKind>,

    /// Delay before a bot moves, in milliseconds
    #[arg(long)]
    bot_delay_ms: Option<u64>,

    /// Write logs to this file (the terminal is taken by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("creating log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
            )
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    }

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    if let Some(cols) = cli.cols {
        config.board.cols = cols;
    }
    if let Some(m) = cli.m {
        config.board.m = m;
    }
    if let Some(mode) = cli.mode {
        config.tui.mode = mode;
    }
    if let Some(player) = cli.player1 {
        config.tui.player1 = player;
    }
    if let Some(player) = cli.player2 {
        config.tui.player2 = player;
    }
    if let Some(delay) = cli.bot_delay_ms {
        config.tui.bot_delay_ms = delay;
    }
    config.validate().context("validating configuration")?;

    let board = config
        .tui
        .mode
        .build(&config.board)
        .context("creating board")?;
    let mut app = App::new(board, &config.tui);

    run_terminal(&mut app).context("running terminal UI")
}

fn run_terminal(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
