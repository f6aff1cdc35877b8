//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules, state management, and simulation logic.
//! It has **no dependencies** on the terminal, input devices, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical apple placement
//! - **Testable**: Every rule is driven by `tick(elapsed_ms, input)`
//! - **Portable**: Runs in the terminal, headless, or under a benchmark
//!
//! # Module Structure
//!
//! - [`game_state`]: Plate, apples, scoring, difficulty ramp and lifecycle
//! - [`snapshot`]: Read-only views handed to the presentation layer
//! - [`geometry`]: Bounding boxes for catch detection
//! - [`config`]: Tunable parameters (speeds, sizes, spawn timing)
//! - [`rng`]: Seeded LCG for spawn positions
//! - [`autopilot`]: Plate steering used by the simulator
//!
//! # Game Rules
//!
//! - **Lifecycle**: `NotStarted → Active → GameOver`, restart returns to `Active`
//! - **Spawning**: one apple whenever more than the spawn interval has elapsed;
//!   the interval shrinks by a fixed step after each spawn, floored at 500ms
//! - **Fall speed**: `base + score * per_point`, frozen when the apple spawns
//! - **Catch**: an apple overlapping the plate is removed and scores 1
//! - **Miss**: the first apple past the bottom edge ends the game
//!
//! # Example
//!
//! ```
//! use apple_catcher_core::GameState;
//! use apple_catcher_types::FrameInput;
//!
//! let mut game = GameState::new(12345);
//! game.start();
//!
//! // One 16ms frame with "right" held.
//! game.tick(16, FrameInput::RIGHT);
//!
//! let snap = game.snapshot();
//! assert_eq!(snap.score, 0);
//! assert!(!snap.is_over);
//! ```

pub mod autopilot;
pub mod config;
pub mod game_state;
pub mod geometry;
pub mod rng;
pub mod snapshot;

pub use apple_catcher_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use game_state::{Apple, Body, GameState, Plate, Round};
pub use geometry::Aabb;
pub use rng::SimpleRng;
pub use snapshot::{SceneSnapshot, Snapshot};
