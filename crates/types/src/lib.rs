//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no I/O, making them usable in any context
//! (game loop, presentation shell, terminal rendering, headless simulation).
//!
//! # Playfield
//!
//! The game runs on a logical playfield measured in pixels, y growing downward:
//!
//! - **Width**: 800
//! - **Height**: 600 (an apple whose y passes this line is missed)
//!
//! # Timing and tuning defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Frame interval of the interactive loop (~60 FPS) |
//! | `SPAWN_INTERVAL_INITIAL_MS` | 1500 | Time between apples at session start |
//! | `SPAWN_INTERVAL_FLOOR_MS` | 500 | Fastest spawn cadence |
//! | `SPAWN_INTERVAL_STEP_MS` | 25 | Interval decrement per spawn |
//! | `PLATE_SPEED` | 400 | Plate speed (px/s) while a direction is held |
//! | `APPLE_BASE_SPEED` | 150 | Fall speed (px/s) of apples spawned at score 0 |
//! | `APPLE_SPEED_PER_POINT` | 10 | Extra fall speed per point of score at spawn |
//! | `STATIC_REDRAW_MS` | 100 | Redraw bound for screens that do not animate |
//!
//! # Examples
//!
//! ```
//! use apple_catcher_types::{Command, FrameInput, Phase};
//!
//! assert_eq!(Command::Restart.as_str(), "restart");
//! assert_eq!(FrameInput::LEFT.direction(), -1.0);
//! assert!(Phase::GameOver.is_over());
//! ```

use serde::{Deserialize, Serialize};

/// Playfield width in logical pixels
pub const PLAYFIELD_WIDTH: f32 = 800.0;

/// Playfield height in logical pixels (the miss line)
pub const PLAYFIELD_HEIGHT: f32 = 600.0;

/// Fixed frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Spawn interval at session start
pub const SPAWN_INTERVAL_INITIAL_MS: f32 = 1500.0;

/// Spawn interval never drops below this
pub const SPAWN_INTERVAL_FLOOR_MS: f32 = 500.0;

/// Amount the spawn interval shrinks after every spawn
pub const SPAWN_INTERVAL_STEP_MS: f32 = 25.0;

/// Horizontal distance apples keep from either playfield edge at spawn
pub const SPAWN_INSET: f32 = 50.0;

/// Apples appear this far above the visible area
pub const SPAWN_Y: f32 = -24.0;

/// Plate width
pub const PLATE_WIDTH: f32 = 100.0;

/// Plate height
pub const PLATE_HEIGHT: f32 = 20.0;

/// Vertical center of the plate
pub const PLATE_Y: f32 = 550.0;

/// Plate speed in px/s while left or right is held
pub const PLATE_SPEED: f32 = 400.0;

/// Apple footprint (square)
pub const APPLE_SIZE: f32 = 24.0;

/// Fall speed of an apple spawned at score 0 (px/s)
pub const APPLE_BASE_SPEED: f32 = 150.0;

/// Fall speed added per point of score at spawn time (px/s)
pub const APPLE_SPEED_PER_POINT: f32 = 10.0;

/// Upper bound on simultaneously falling apples
pub const MAX_APPLES: usize = 32;

/// Upper bound on events queued between two drains
pub const MAX_PENDING_EVENTS: usize = 64;

/// Redraw bound for static screens (start overlay, game over)
pub const STATIC_REDRAW_MS: u64 = 100;

/// How long the "+1" catch flash stays on screen
pub const CATCH_FLASH_MS: u32 = 400;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn difficulty_defaults() {
        assert_eq!(SPAWN_INTERVAL_INITIAL_MS, 1500.0);
        assert_eq!(SPAWN_INTERVAL_FLOOR_MS, 500.0);
        assert!(SPAWN_INTERVAL_STEP_MS > 0.0);
        assert!(SPAWN_INSET * 2.0 < PLAYFIELD_WIDTH);
        assert!(PLATE_Y + PLATE_HEIGHT / 2.0 < PLAYFIELD_HEIGHT);
    }

    #[test]
    fn command_names_are_lowercase() {
        assert_eq!(Command::Start.as_str(), "start");
        assert_eq!(Command::Restart.as_str(), "restart");
    }

    #[test]
    fn frame_input_direction_cancels_out() {
        assert_eq!(FrameInput::IDLE.direction(), 0.0);
        assert_eq!(FrameInput::RIGHT.direction(), 1.0);
        assert_eq!(FrameInput { left: true, right: true }.direction(), 0.0);
    }
}

/// Lifecycle of one game loop
///
/// `NotStarted → Active → GameOver`, with `GameOver → Active` on restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NotStarted,
    Active,
    GameOver,
}

impl Phase {
    pub fn is_active(&self) -> bool {
        matches!(self, Phase::Active)
    }

    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::NotStarted => "not_started",
            Phase::Active => "active",
            Phase::GameOver => "game_over",
        }
    }
}

/// Commands the presentation shell relays into the game loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Leave the start overlay and begin the first session
    Start,
    /// Begin a fresh session after game over
    Restart,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Restart => "restart",
        }
    }
}

/// Held-key state sampled once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
}

impl FrameInput {
    pub const IDLE: Self = Self {
        left: false,
        right: false,
    };
    pub const LEFT: Self = Self {
        left: true,
        right: false,
    };
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
    };

    /// -1.0 for left, 1.0 for right, 0.0 for neither or both
    pub fn direction(&self) -> f32 {
        match (self.left, self.right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Events emitted by the game loop, drained by observers.
///
/// `Caught` exists for cosmetic feedback only; the authoritative score is
/// always the snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Started,
    Spawned { x: f32, speed: f32 },
    Caught { x: f32, score: u32 },
    GameOver { score: u32 },
    Restarted,
}
