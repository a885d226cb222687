use std::io;
use std::path::PathBuf;

use clap::Parser;
use grid_snake::script::{self, ScriptFrame};
use grid_snake::{ConfigError, Game, GameConfig};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_FRAME_COUNT: usize = 600;

/// Headless host that drives the snake simulation from a scripted key sequence.
#[derive(Debug, Parser)]
#[command(name = "snake-sim", version, about)]
struct Cli {
    /// JSON config file; flags below override its fields.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width in cells.
    #[arg(long)]
    width: Option<i32>,

    /// Grid height in cells.
    #[arg(long)]
    height: Option<i32>,

    /// Base move interval in seconds.
    #[arg(long)]
    interval: Option<f32>,

    /// Floor for the move interval in seconds.
    #[arg(long)]
    min_interval: Option<f32>,

    /// Seed for food placement.
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// JSON array of `{ "dt": f32, "held": [..] }` frames to replay.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Frames to run with no keys held when no script is given.
    #[arg(long, default_value_t = DEFAULT_FRAME_COUNT)]
    frames: usize,

    /// Frame delta in seconds when no script is given.
    #[arg(long, default_value_t = DEFAULT_FRAME_DT)]
    dt: f32,
}

#[derive(Debug, Error)]
enum SimError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to load script: {0}")]
    Script(#[from] io::Error),
}

fn main() -> Result<(), SimError> {
    init_tracing();
    let cli = Cli::parse();

    if let Err(error) = run(cli) {
        error!(%error, "simulation failed");
        return Err(error);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), SimError> {
    let config = resolve_config(&cli)?;
    let mut game = Game::new(config, cli.seed)?;
    info!(
        width = config.width,
        height = config.height,
        seed = cli.seed,
        "=== snake-sim startup ==="
    );

    let frames = match &cli.script {
        Some(path) => script::load_script(path)?,
        None => vec![
            ScriptFrame {
                dt: cli.dt,
                held: Vec::new(),
            };
            cli.frames
        ],
    };

    let summary = script::replay(&mut game, &frames);
    info!(
        frames = summary.frames,
        steps = summary.steps,
        events = summary.events.len(),
        "replay finished"
    );

    println!("{}", game.status_text());
    Ok(())
}

fn resolve_config(cli: &Cli) -> Result<GameConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    if let Some(width) = cli.width {
        config.width = width;
    }
    if let Some(height) = cli.height {
        config.height = height;
    }
    if let Some(interval) = cli.interval {
        config.base_move_interval = interval;
    }
    if let Some(min_interval) = cli.min_interval {
        config.min_move_interval = min_interval;
    }

    config.validate()?;
    Ok(config)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}
