use std::fs;
use std::io::stderr;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Parser;
use dungeon_core::{InputJournal, ReplayResult, SessionState, replay_journal};
use serde::Serialize;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the journal JSON file to replay
    #[arg(short, long)]
    journal: PathBuf,
    /// Fail unless the final snapshot hash matches this value
    #[arg(long)]
    expect_hash: Option<u64>,
    /// Print the result as JSON instead of plain lines
    #[arg(long)]
    json: bool,
}

#[derive(Serialize)]
struct ReplayReport {
    seed: u64,
    inputs: usize,
    final_tick: u64,
    final_state: &'static str,
    final_score: u32,
    treasures_collected: usize,
    final_snapshot_hash: u64,
}

impl ReplayReport {
    fn new(journal: &InputJournal, result: &ReplayResult) -> Self {
        Self {
            seed: journal.seed,
            inputs: journal.inputs.len(),
            final_tick: result.final_tick,
            final_state: state_name(result.final_state),
            final_score: result.final_score,
            treasures_collected: result.treasures_collected,
            final_snapshot_hash: result.final_snapshot_hash,
        }
    }
}

fn state_name(state: SessionState) -> &'static str {
    match state {
        SessionState::Menu => "menu",
        SessionState::Playing => "playing",
        SessionState::GameOver => "game_over",
        SessionState::Victory => "victory",
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .with_writer(stderr)
        .init();

    let args = Args::parse();

    let journal_data = fs::read_to_string(&args.journal)
        .with_context(|| format!("Failed to read journal file: {}", args.journal.display()))?;
    let journal = InputJournal::from_json(&journal_data)
        .with_context(|| "Failed to deserialize journal JSON")?;
    info!(seed = journal.seed, inputs = journal.inputs.len(), "replaying journal");

    let result = replay_journal(&journal).context("Replay failed")?;
    let report = ReplayReport::new(&journal, &result);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Replay complete.");
        println!("Final Tick: {}", report.final_tick);
        println!("State: {}", report.final_state);
        println!("Score: {}", report.final_score);
        println!("Treasures: {}", report.treasures_collected);
        println!("Snapshot Hash: {}", report.final_snapshot_hash);
    }

    if let Some(expected) = args.expect_hash
        && expected != result.final_snapshot_hash
    {
        bail!("snapshot hash mismatch: expected {expected}, got {}", result.final_snapshot_hash);
    }
    Ok(())
}
