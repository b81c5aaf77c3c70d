//! Headless Blockfall runner (default binary).
//!
//! Drives the engine the way a windowed host would: one tick per interval,
//! with player commands delivered between ticks. Commands come from a
//! scripted input source instead of a keyboard, so a whole game can be
//! replayed from its seed. Nothing is drawn; the result is a text summary
//! or the final snapshot as JSON.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use blockfall::core::{Engine, EngineConfig, GameSnapshot, RandomSource, SimpleRng, TickOutcome};
use blockfall::types::GameAction;

/// Run a falling-block game without a display.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
struct Args {
    /// Piece RNG seed (overrides BLOCKFALL_SEED; default: from the clock)
    #[arg(long)]
    seed: Option<u32>,

    /// Stop after this many ticks even if the game is still running
    #[arg(long, default_value = "10000", value_name = "N")]
    max_ticks: u64,

    /// Tick interval in milliseconds (overrides BLOCKFALL_TICK_MS)
    #[arg(long, value_name = "MS")]
    tick_ms: Option<u64>,

    /// Wait the tick interval between ticks instead of running flat out
    #[arg(long)]
    realtime: bool,

    /// Print the final snapshot as JSON instead of a summary
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    let seed = config.resolve_seed();

    info!(seed, tick_ms = config.tick_interval.as_millis() as u64, "starting game");

    let snapshot = run(&args, &config, seed);

    if args.json {
        let json = serde_json::to_string_pretty(&snapshot).context("serialize final snapshot")?;
        println!("{json}");
    } else {
        print_summary(seed, &snapshot);
    }

    Ok(())
}

fn load_config(args: &Args) -> Result<EngineConfig> {
    let mut config = EngineConfig::from_env().context("read BLOCKFALL_* environment")?;
    if let Some(ms) = args.tick_ms {
        config = config.with_tick_ms(ms).context("--tick-ms")?;
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    Ok(config)
}

fn run(args: &Args, config: &EngineConfig, seed: u32) -> GameSnapshot {
    let mut engine = Engine::new(seed);
    // Separate stream so input never perturbs the piece sequence.
    let mut input = SimpleRng::new(seed.rotate_left(16) ^ 0x9e37_79b9);
    let tick_duration = config.tick_interval;
    let mut last_tick = Instant::now();

    for _ in 0..args.max_ticks {
        // Commands are serialized ahead of the tick: never interleaved with it.
        let action = GameAction::ALL[input.next_below(GameAction::ALL.len() as u32) as usize];
        let applied = engine.apply_action(action);
        debug!(action = action.as_str(), applied, "input");

        match engine.tick() {
            TickOutcome::Locked(event) => {
                debug!(
                    lines = event.lines_cleared,
                    points = event.points,
                    score = engine.score(),
                    "locked"
                );
            }
            TickOutcome::GameOver | TickOutcome::Idle => break,
            TickOutcome::Moved => {}
        }

        if args.realtime {
            let wait = tick_duration
                .checked_sub(last_tick.elapsed())
                .unwrap_or(Duration::ZERO);
            thread::sleep(wait);
            last_tick = Instant::now();
        }
    }

    if !engine.is_game_over() {
        info!(ticks = engine.tick_count(), "tick limit reached");
    }

    engine.snapshot()
}

fn print_summary(seed: u32, snapshot: &GameSnapshot) {
    println!("seed:    {seed}");
    println!("phase:   {}", snapshot.phase.as_str());
    println!("ticks:   {}", snapshot.tick_count);
    println!("pieces:  {}", snapshot.pieces_locked);
    println!("lines:   {}", snapshot.lines);
    println!("score:   {}", snapshot.score);
}
