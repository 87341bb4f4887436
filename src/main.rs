use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tictactoe_tui::config::AppConfig;
use tictactoe_tui::ui::App;

/// Play tic-tac-toe in the terminal.
#[derive(Parser)]
#[command(name = "tictactoe", about = "Play tic-tac-toe in the terminal")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Start in single-player mode against the AI
    #[arg(long)]
    vs_ai: bool,

    /// Override the AI move delay in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(delay) = cli.delay_ms {
        config.ai.move_delay_ms = delay;
    }
    config.validate().context("invalid configuration")?;

    run(&config, cli.vs_ai).context("terminal UI error")
}

fn run(config: &AppConfig, vs_ai: bool) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config, vs_ai);
    let res = app.run(&mut terminal);

    // Restore terminal — always runs, even on error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
