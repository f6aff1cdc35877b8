//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::Command`]s and tracks which movement keys are
//! held, including on terminals that never emit key-release events.

pub mod handler;
pub mod map;

pub use apple_catcher_types as types;

pub use handler::{HeldKeys, HorizontalDirection};
pub use map::{handle_key_event, should_quit};
