//! Space garbage terminal runner (default binary).
//!
//! Loads config and frame assets, seeds the scene, then resumes every task
//! once per fixed tick and flushes the framebuffer to the terminal.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use space_garbage::core::{FrameLibrary, Game, GameConfig, MemoryCanvas, ScriptedInput, TaskKind};
use space_garbage::input::TerminalInput;
use space_garbage::term::{FrameBuffer, TerminalRenderer};

const HEADLESS_ROWS: u16 = 24;
const HEADLESS_COLUMNS: u16 = 80;

/// Dodge, and eventually shoot, the space garbage.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file overriding the default tuning.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory holding the `craft`, `obstacle` and `obstacle-variant-2` frame folders.
    #[arg(long, value_name = "DIR", default_value = "assets/frames")]
    frames: PathBuf,

    /// RNG seed; defaults to one derived from the clock.
    #[arg(long)]
    seed: Option<u64>,

    /// Override the tick interval in milliseconds.
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Write logs to this file (filtered by RUST_LOG, default `info`).
    #[arg(long, value_name = "FILE", env = "SPACE_GARBAGE_LOG_FILE")]
    log_file: Option<PathBuf>,

    /// Run this many ticks on an in-memory canvas and print a summary
    /// instead of taking over the terminal.
    #[arg(long, value_name = "TICKS")]
    headless: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(tick_ms) = cli.tick_ms {
        config.tick_ms = tick_ms;
        config.validate().context("invalid --tick-ms")?;
    }

    let frames = FrameLibrary::load(&cli.frames)
        .with_context(|| format!("failed to load frames from {}", cli.frames.display()))?;
    let seed = cli.seed.unwrap_or_else(clock_seed);

    if let Some(ticks) = cli.headless {
        return run_headless(config, &frames, seed, ticks);
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config, &frames, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    config: GameConfig,
    frames: &FrameLibrary,
    seed: u64,
) -> Result<()> {
    let (width, height) = crossterm::terminal::size().context("failed to query terminal size")?;
    let tick = Duration::from_millis(config.tick_ms);

    let mut fb = FrameBuffer::new(width, height);
    let mut game = Game::new(config, frames, &mut fb, seed);
    let mut input = TerminalInput::new();
    tracing::info!(width, height, seed, "game started");

    loop {
        game.tick(&mut fb, &mut input);
        term.present(&fb)?;
        if game.world_mut().take_bells() > 0 {
            term.bell()?;
        }

        input.drain().context("failed to read terminal input")?;
        if input.quit_requested() {
            tracing::info!(
                tick = game.world().tick(),
                year = game.world().year(),
                game_over = game.is_game_over(),
                "quit requested"
            );
            return Ok(());
        }

        // Fixed interval; render cost is not subtracted.
        std::thread::sleep(tick);
    }
}

fn run_headless(config: GameConfig, frames: &FrameLibrary, seed: u64, ticks: u64) -> Result<()> {
    let mut canvas = MemoryCanvas::new(HEADLESS_ROWS, HEADLESS_COLUMNS);
    let mut input = ScriptedInput::idle();
    let mut game = Game::new(config, frames, &mut canvas, seed);

    let mut bells = 0;
    for _ in 0..ticks {
        game.tick(&mut canvas, &mut input);
        bells += game.world_mut().take_bells();
    }

    let world = game.world();
    let obstacles = game
        .scheduler()
        .kinds()
        .filter(|kind| matches!(kind, TaskKind::Obstacle(_)))
        .count();
    println!("{}", canvas.contents());
    println!(
        "seed={seed} ticks={} year={} tasks={} obstacles={obstacles} explosions={} craft_alive={} game_over={} footprints={}/{} bells={bells}",
        world.tick(),
        world.year(),
        game.task_count(),
        game.count(TaskKind::Explosion),
        game.craft_alive(),
        game.is_game_over(),
        world.collisions.insertions(),
        world.collisions.removals(),
    );
    Ok(())
}

fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
