use std::fs;
use std::io::stderr;
use std::path::PathBuf;

use anyhow::{Context, Result, ensure};
use clap::Parser;
use dungeon_core::{Cell, CommandOutcome, Direction, Game, SessionState, SimConfig};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tracing::{Level, debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 10_000)]
    ticks: u32,
    /// Optional TOML file overriding the default simulation config
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Write the recorded input journal here when the run finishes
    #[arg(long)]
    journal_out: Option<PathBuf>,
}

#[derive(Clone, Copy)]
enum HostInput {
    Start,
    Acknowledge,
    Move(Direction),
    ToggleSound,
}

const HOST_INPUTS: [HostInput; 9] = [
    HostInput::Start,
    HostInput::Acknowledge,
    HostInput::Move(Direction::Up),
    HostInput::Move(Direction::Down),
    HostInput::Move(Direction::Left),
    HostInput::Move(Direction::Right),
    HostInput::Move(Direction::Right),
    HostInput::Move(Direction::Down),
    HostInput::ToggleSound,
];

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn load_config(path: Option<&PathBuf>) -> Result<SimConfig> {
    let Some(path) = path else {
        return Ok(SimConfig::default());
    };
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    SimConfig::from_toml_str(&raw).with_context(|| format!("Invalid config: {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(stderr)
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_ref())?;
    let cell_size = config.grid.cell_size;

    info!(seed = args.seed, ticks = args.ticks, "starting fuzz harness");
    let mut game = Game::new(config, args.seed)?;
    ensure!(game.start_recording() == CommandOutcome::Applied, "fresh game refused recording");
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut sessions = 0_u32;
    let mut last_score = 0;
    for tick in 0..args.ticks {
        match choose(&mut rng, &HOST_INPUTS) {
            HostInput::Start => {
                if game.request_start() == CommandOutcome::Applied {
                    sessions += 1;
                    last_score = 0;
                }
            }
            HostInput::Acknowledge => {
                game.request_acknowledge();
            }
            HostInput::Move(direction) => {
                game.request_move(direction);
            }
            HostInput::ToggleSound => {
                let enabled = !game.sound_enabled();
                game.set_sound_enabled(enabled);
            }
        }

        let dt = (rng.next_u64() % 50) as f32 / 1_000.0;
        game.tick(dt);

        let snapshot = game.snapshot();
        let hero = snapshot.hero;
        ensure!(!snapshot.walls.contains(&hero.cell), "hero inside wall at tick {tick}");
        for col in 0..snapshot.width {
            ensure!(
                snapshot.walls.contains(&Cell::new(col, 0))
                    && snapshot.walls.contains(&Cell::new(col, snapshot.height - 1)),
                "border wall missing at column {col}"
            );
        }
        if !hero.moving {
            ensure!(hero.pixel == hero.cell.to_pixel(cell_size), "resting hero off its cell");
        }
        if snapshot.state != SessionState::Menu {
            ensure!(hero.score >= last_score, "score decreased at tick {tick}");
            last_score = hero.score;
        }
        if snapshot.state == SessionState::GameOver {
            ensure!(hero.health == 0, "game over with health left at tick {tick}");
        }
        let state = snapshot.state;
        let score = hero.score;
        let events = game.drain_log();
        debug!(tick, ?state, score, events = events.len(), "fuzz step");
    }

    info!(sessions, hash = game.snapshot_hash(), "fuzzing completed successfully");

    if let Some(path) = args.journal_out {
        let journal = game.take_journal().context("recording was started")?;
        fs::write(&path, journal.to_json()?)
            .with_context(|| format!("Failed to write journal: {}", path.display()))?;
        info!(path = %path.display(), "journal written");
    }
    Ok(())
}
