//! Headless simulation: the autopilot plays one session without a terminal.

use anyhow::{anyhow, Result};
use serde::Serialize;

use crate::core::autopilot::steer;
use crate::core::{GameConfig, GameState, Snapshot};
use crate::types::{GameEvent, Phase, TICK_MS};

pub const DEFAULT_SEED: u32 = 1;
/// About one minute of play at the interactive frame rate.
pub const DEFAULT_FRAMES: u32 = 3750;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimArgs {
    pub seed: Option<u32>,
    pub frames: u32,
    pub pretty: bool,
}

impl Default for SimArgs {
    fn default() -> Self {
        Self {
            seed: None,
            frames: DEFAULT_FRAMES,
            pretty: false,
        }
    }
}

/// Parse `[--seed N] [--frames N] [--pretty]` (program name excluded).
pub fn parse_sim_args(args: &[String]) -> Result<SimArgs> {
    let mut out = SimArgs::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("sim: missing value for --seed"))?;
                out.seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("sim: invalid --seed value: {}", v))?,
                );
            }
            "--frames" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("sim: missing value for --frames"))?;
                out.frames = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("sim: invalid --frames value: {}", v))?;
            }
            "--pretty" => out.pretty = true,
            other => return Err(anyhow!("sim: unknown argument: {}", other)),
        }
        i += 1;
    }
    Ok(out)
}

/// What the simulator prints.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimReport {
    pub seed: u32,
    pub frames: u32,
    pub elapsed_ms: u64,
    pub phase: Phase,
    #[serde(flatten)]
    pub snapshot: Snapshot,
    pub spawned: u32,
    pub apples_in_play: usize,
    pub spawn_interval_ms: f32,
}

/// Start a session and let the autopilot play until it loses or `frames`
/// frames have passed.
pub fn run_sim(seed: u32, frames: u32, config: GameConfig) -> SimReport {
    let mut game = GameState::with_config(seed, config);
    game.start();

    let mut played = 0u32;
    let mut spawned = 0u32;
    while played < frames && !game.is_over() {
        let input = steer(&game);
        game.tick(TICK_MS, input);
        played += 1;
        for event in game.take_events() {
            if let GameEvent::Spawned { .. } = event {
                spawned += 1;
            }
        }
    }

    log::info!(
        "sim seed={} finished after {} frames: score {}, over={}",
        seed,
        played,
        game.score(),
        game.is_over()
    );

    SimReport {
        seed,
        frames: played,
        elapsed_ms: played as u64 * TICK_MS as u64,
        phase: game.phase(),
        snapshot: game.snapshot(),
        spawned,
        apples_in_play: game.apples().len(),
        spawn_interval_ms: game.spawn_interval_ms(),
    }
}
