use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::AppConfig;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Two-player Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", version, about)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Display name for player one (overrides the config file)
    #[arg(long)]
    player_one: Option<String>,

    /// Display name for player two (overrides the config file)
    #[arg(long)]
    player_two: Option<String>,

    /// Append logs to this file (the TUI owns the terminal, so logging
    /// is off unless a file is given)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_tracing(path)?;
    }

    // Load configuration
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(name) = cli.player_one {
        config.players.one = name;
    }
    if let Some(name) = cli.player_two {
        config.players.two = name;
    }

    run(&config)
}

fn run(config: &AppConfig) -> Result<()> {
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(config);
    let result = app.run(&mut terminal);

    // Restore the terminal even when the loop failed.
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    result.context("running the game loop")
}

fn init_tracing(path: &Path) -> Result<()> {
    let file = File::options()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["connect-four"]).expect("should parse");
        assert_eq!(cli.config, PathBuf::from("config.toml"));
        assert!(cli.player_one.is_none());
        assert!(cli.player_two.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::try_parse_from([
            "connect-four",
            "--config",
            "custom.toml",
            "--player-one",
            "Alice",
            "--player-two",
            "Bob",
            "--log-file",
            "game.log",
        ])
        .expect("should parse");

        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert_eq!(cli.player_one.as_deref(), Some("Alice"));
        assert_eq!(cli.player_two.as_deref(), Some("Bob"));
        assert_eq!(cli.log_file, Some(PathBuf::from("game.log")));
    }
}
