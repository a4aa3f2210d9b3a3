//! Terminal 2048 runner (default binary).
//!
//! Interactive play renders through the framebuffer view; `--episodes N`
//! switches to a headless simulation that prints a JSON summary.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tui_2048::core::{GameConfig, GameSnapshot, GameState, TileRng};
use tui_2048::headless::{self, HeadlessConfig, Policy};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::{Cell, GameAction, DEFAULT_SIZE, DEFAULT_TARGET};

#[derive(Parser, Debug)]
#[command(name = "tui-2048")]
#[command(version, about = "Play 2048 in the terminal or run headless simulations")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Tile value that counts as a win
    #[arg(long, default_value_t = DEFAULT_TARGET)]
    target: Cell,

    /// Seed for tile spawns (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Run this many games headless and print a JSON summary instead of playing
    #[arg(long)]
    episodes: Option<u32>,

    /// Move policy for headless mode
    #[arg(long, value_enum, default_value = "random")]
    policy: Policy,

    /// Maximum moves per headless episode (0 = unlimited)
    #[arg(long, default_value_t = 0)]
    max_steps: u32,

    /// Tracing filter, e.g. "info", "tui_2048_core=debug"
    #[arg(long, default_value = "info")]
    log: String,

    /// Write logs to this file (interactive mode never logs to the terminal)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args)?;

    let config = GameConfig::new(args.size, args.target);
    config.validate()?;
    info!(size = config.size, target = config.target, seed = ?args.seed, "starting");

    match args.episodes {
        Some(episodes) => {
            let seed = args.seed.unwrap_or_else(|| rand::thread_rng().gen());
            run_headless(&args, config, seed, episodes)
        }
        None => run_interactive(config, args.seed),
    }
}

fn init_tracing(args: &Args) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_new(&args.log)
        .with_context(|| format!("invalid log filter {:?}", args.log))?;

    match &args.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_ansi(false)
                        .with_writer(Mutex::new(file)),
                )
                .init();
        }
        // Headless output goes to stdout, so logs go to stderr. Interactive
        // mode without a log file keeps the subscriber silent.
        None if args.episodes.is_some() => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
                .init();
        }
        None => {}
    }
    Ok(())
}

fn run_headless(args: &Args, config: GameConfig, seed: u64, episodes: u32) -> Result<()> {
    let summary = headless::run(&HeadlessConfig {
        game: config,
        episodes,
        seed,
        max_steps: args.max_steps,
        policy: args.policy,
    })?;
    let json = serde_json::to_string_pretty(&summary).context("encoding summary")?;
    println!("{}", json);
    Ok(())
}

fn run_interactive(config: GameConfig, seed: Option<u64>) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    // A fixed seed replays the same spawns; otherwise draw from entropy.
    let result = match seed {
        Some(seed) => GameState::new(config, seed)
            .map_err(anyhow::Error::from)
            .and_then(|game| play(&mut term, game)),
        None => GameState::with_rng(config, SmallRng::from_entropy())
            .map_err(anyhow::Error::from)
            .and_then(|game| play(&mut term, game)),
    };

    // Always try to restore terminal state.
    if let Err(e) = term.exit() {
        warn!(error = %e, "failed to restore terminal");
    }
    result
}

fn play<R: TileRng>(term: &mut TerminalRenderer, mut game: GameState<R>) -> Result<()> {
    let view = GameView::default();
    let mut snap = GameSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        view.render_into(&snap, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        match event::read().context("reading terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!(score = game.score(), max_tile = game.max_tile(), "quit");
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(GameAction::Move(dir)) if snap.playable() => {
                        let result = game.apply_move(dir)?;
                        debug!(?dir, ?result, "move");
                    }
                    Some(GameAction::Move(dir)) => {
                        debug!(?dir, "ignoring move on finished game");
                    }
                    Some(GameAction::Restart) => {
                        game.restart();
                        term.invalidate();
                    }
                    None => {}
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}
