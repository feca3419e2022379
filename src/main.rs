use std::io;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use minimax_connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::{GameOutcome, GameState, Player};
use minimax_connect_four::ui::App;

/// Play Connect Four against an alpha-beta minimax agent.
#[derive(Parser)]
#[command(name = "connect-four", about = "Connect Four with a minimax agent")]
struct Cli {
    /// Run a headless agent-vs-agent match (stdout output, no TUI)
    #[arg(long)]
    headless: bool,

    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the board side length
    #[arg(long)]
    size: Option<usize>,

    /// Override the search depth
    #[arg(long)]
    depth: Option<usize>,

    /// Override the opponent strategy: minimax or random
    #[arg(long)]
    opponent: Option<String>,

    /// Override the random opponent's seed
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides, then re-validate the merged result
    if let Some(size) = cli.size {
        config.game.board_size = size;
    }
    if let Some(depth) = cli.depth {
        config.search.depth = depth;
    }
    if let Some(opponent) = cli.opponent {
        config.game.opponent = opponent;
    }
    if let Some(seed) = cli.seed {
        config.game.seed = Some(seed);
    }
    config.validate().context("validating configuration")?;

    if cli.headless {
        run_headless(&config)
    } else {
        run_interactive(&config)
    }
}

fn build_opponent(config: &AppConfig) -> Result<Box<dyn Agent>> {
    match config.game.opponent.as_str() {
        "minimax" => Ok(Box::new(MinimaxAgent::new(config.search.depth))),
        "random" => Ok(Box::new(match config.game.seed {
            Some(seed) => RandomAgent::with_seed(seed),
            None => RandomAgent::new(),
        })),
        other => bail!("unknown opponent '{}' (expected 'minimax' or 'random')", other),
    }
}

/// Minimax (Red) against the configured opponent (Yellow), moves printed
/// to stdout.
fn run_headless(config: &AppConfig) -> Result<()> {
    let mut red: Box<dyn Agent> = Box::new(MinimaxAgent::new(config.search.depth));
    let mut yellow = build_opponent(config)?;

    let size = config.game.board_size;
    println!(
        "{} (Red) vs {} (Yellow) on a {size}x{size} board",
        red.name(),
        yellow.name()
    );

    let mut state = GameState::new(size);
    while !state.is_terminal() {
        let player = state.current_player();
        let agent = match player {
            Player::Red => &mut red,
            Player::Yellow => &mut yellow,
        };
        let col = agent.select_move(state.board(), player);
        state
            .apply_move_mut(col)
            .with_context(|| format!("{} played column {}", player.name(), col + 1))?;
        println!("{} plays column {}", player.name(), col + 1);
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) => println!("{} wins!", player.name()),
        Some(GameOutcome::Draw) => println!("It's a draw!"),
        None => unreachable!("terminal state without an outcome"),
    }
    Ok(())
}

fn run_interactive(config: &AppConfig) -> Result<()> {
    let bot = build_opponent(config)?;

    // Setup terminal
    enable_raw_mode().context("enabling raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("entering alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("creating terminal")?;

    let mut app = App::new(config.game.board_size, bot);
    let res = app.run(&mut terminal);

    // Restore terminal, even when the app errored
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the match UI")
}
