//! Environment configuration for the binaries.
//!
//! | variable                     | meaning                              |
//! |------------------------------|--------------------------------------|
//! | `APPLE_CATCHER_SEED`         | RNG seed (u32); clock-derived if unset |
//! | `APPLE_CATCHER_PLATE_SPEED`  | plate speed in px/s                  |
//! | `APPLE_CATCHER_APPLE_SPEED`  | base apple fall speed in px/s        |
//! | `APPLE_CATCHER_LOG_PATH`     | log file; logging is off when unset  |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, ensure, Result};

use crate::core::GameConfig;

pub const ENV_SEED: &str = "APPLE_CATCHER_SEED";
pub const ENV_PLATE_SPEED: &str = "APPLE_CATCHER_PLATE_SPEED";
pub const ENV_APPLE_SPEED: &str = "APPLE_CATCHER_APPLE_SPEED";
pub const ENV_LOG_PATH: &str = "APPLE_CATCHER_LOG_PATH";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub seed: Option<u32>,
    pub game: GameConfig,
    pub log_path: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: None,
            game: GameConfig::default(),
            log_path: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary lookup so tests do not touch the process env.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        let mut config = Self::default();

        if let Some(v) = var(ENV_SEED) {
            config.seed = Some(parse_var(ENV_SEED, &v)?);
        }
        if let Some(v) = var(ENV_PLATE_SPEED) {
            config.game.plate_speed = parse_var(ENV_PLATE_SPEED, &v)?;
        }
        if let Some(v) = var(ENV_APPLE_SPEED) {
            config.game.apple_base_speed = parse_var(ENV_APPLE_SPEED, &v)?;
        }
        config.log_path = var(ENV_LOG_PATH).map(PathBuf::from);

        validate(&config.game)?;
        Ok(config)
    }

    /// The configured seed, or one derived from the wall clock.
    pub fn seed_or_clock(&self) -> u32 {
        self.seed.unwrap_or_else(clock_seed)
    }
}

fn parse_var<T: FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .parse::<T>()
        .map_err(|_| anyhow!("{}: invalid value: {:?}", key, value))
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

/// Reject configurations the game loop cannot run with.
pub fn validate(game: &GameConfig) -> Result<()> {
    let positive = [
        ("width", game.width),
        ("height", game.height),
        ("plate_width", game.plate_width),
        ("plate_height", game.plate_height),
        ("plate_speed", game.plate_speed),
        ("apple_size", game.apple_size),
        ("apple_base_speed", game.apple_base_speed),
        ("spawn_interval_floor_ms", game.spawn_interval_floor_ms),
    ];
    for (name, value) in positive {
        ensure!(
            value.is_finite() && value > 0.0,
            "{} must be positive, got {}",
            name,
            value
        );
    }
    ensure!(
        game.apple_speed_per_point >= 0.0 && game.spawn_interval_step_ms >= 0.0,
        "difficulty steps must not be negative"
    );
    ensure!(
        game.spawn_interval_floor_ms <= game.spawn_interval_initial_ms,
        "spawn interval floor {} ms is above the initial interval {} ms",
        game.spawn_interval_floor_ms,
        game.spawn_interval_initial_ms
    );
    ensure!(
        game.plate_width <= game.width,
        "plate is wider than the playfield"
    );
    Ok(())
}
