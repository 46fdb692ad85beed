//! Conquest CLI - drive the bot engine offline.
//!
//! Single binary that provides:
//! - `conquest replay` - feed a recorded game through the engine
//! - `conquest plan` - plan one turn and show the queue
//! - `conquest config` - print the effective configuration

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing_subscriber::{fmt, EnvFilter};

use conquest_brain::{
    Engine, EngineConfig, RecordingDispatch, TieredStrategy, TurnReport, WanderStrategy,
};
use conquest_core::{
    GameUpdate, Move, MoveMode, PlayerId, SnapshotDecoder, SnapshotError, TurnSnapshot,
};

#[derive(Parser)]
#[command(name = "conquest")]
#[command(about = "Fog-of-war conquest bot engine", version)]
struct Cli {
    /// Engine configuration (YAML); defaults when absent
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the configured random seed
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Decision strategy
    #[arg(long, global = true, value_enum, default_value_t = StrategyKind::Tiered)]
    strategy: StrategyKind,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Feed a recorded game through the engine, one JSON line per dispatched move
    Replay {
        /// JSON array of snapshots or server updates
        input: PathBuf,

        /// Shape of the recorded turns
        #[arg(long, value_enum, default_value_t = InputFormat::Snapshots)]
        format: InputFormat,

        /// Our seat, needed to decode raw updates
        #[arg(long, default_value_t = 0)]
        player: u32,
    },

    /// Plan a single turn and print the posture and queued moves
    Plan {
        /// JSON snapshot
        snapshot: PathBuf,
    },

    /// Print the effective configuration as YAML
    Config,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyKind {
    Tiered,
    Wander,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    /// Full per-turn snapshots
    Snapshots,
    /// Diff-encoded `game_update` messages
    Updates,
}

#[derive(Serialize)]
struct DispatchLine {
    turn: u32,
    mode: Option<MoveMode>,
    source: usize,
    target: usize,
    send_half: bool,
}

#[derive(Serialize)]
struct PlanOutput {
    #[serde(flatten)]
    report: TurnReport,
    moves: Vec<Move>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let builder = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr);
    if cli.json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    let config = load_config(cli.config.as_deref(), cli.seed)?;

    match cli.command {
        Commands::Replay {
            input,
            format,
            player,
        } => {
            let turns = load_turns(&input, format, PlayerId(player))?;
            replay(build_engine(config, cli.strategy), turns)
        }
        Commands::Plan { snapshot } => plan(build_engine(config, cli.strategy), &snapshot),
        Commands::Config => {
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>, seed: Option<u64>) -> Result<EngineConfig> {
    let config = match path {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::load_or_default(Path::new("conquest.yaml"))?,
    };
    Ok(match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    })
}

fn build_engine(config: EngineConfig, strategy: StrategyKind) -> Engine {
    match strategy {
        StrategyKind::Tiered => Engine::with_strategy(config, Box::new(TieredStrategy::new())),
        StrategyKind::Wander => Engine::with_strategy(config, Box::new(WanderStrategy::new())),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

/// Decode every recorded turn up front; bad turns are kept as errors and skipped during replay.
fn load_turns(
    path: &Path,
    format: InputFormat,
    player: PlayerId,
) -> Result<Vec<Result<TurnSnapshot, SnapshotError>>> {
    match format {
        InputFormat::Snapshots => {
            let snapshots: Vec<TurnSnapshot> = read_json(path)?;
            Ok(snapshots.into_iter().map(Ok).collect())
        }
        InputFormat::Updates => {
            let updates: Vec<GameUpdate> = read_json(path)?;
            let mut decoder = SnapshotDecoder::new(player);
            Ok(updates.iter().map(|u| decoder.apply(u)).collect())
        }
    }
}

fn replay(mut engine: Engine, turns: Vec<Result<TurnSnapshot, SnapshotError>>) -> Result<()> {
    tracing::info!(
        turns = turns.len(),
        strategy = engine.strategy_name(),
        "Starting replay"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut dispatch = RecordingDispatch::new();
    let mut skipped = 0usize;

    for turn in turns {
        let snapshot = match turn {
            Ok(snapshot) => snapshot,
            Err(err) => {
                skipped += 1;
                tracing::warn!(error = %err, "Skipping undecodable turn");
                continue;
            }
        };
        match engine.tick(&snapshot, &mut dispatch) {
            Ok(Some(command)) => {
                let line = DispatchLine {
                    turn: snapshot.turn,
                    mode: engine.history().latest().map(|m| m.mode),
                    source: command.source,
                    target: command.target,
                    send_half: command.send_half,
                };
                serde_json::to_writer(&mut out, &line)?;
                writeln!(out)?;
            }
            Ok(None) => {}
            Err(_) => skipped += 1,
        }
    }

    tracing::info!(
        dispatched = dispatch.commands.len(),
        skipped,
        "Replay finished"
    );
    Ok(())
}

fn plan(mut engine: Engine, path: &Path) -> Result<()> {
    let snapshot: TurnSnapshot = read_json(path)?;
    let report = engine
        .observe(&snapshot)
        .with_context(|| format!("Invalid snapshot in {}", path.display()))?;

    let output = PlanOutput {
        report,
        moves: engine.queue().iter().copied().collect(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
