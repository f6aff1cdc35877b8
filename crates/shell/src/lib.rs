//! Presentation shell.
//!
//! Sits between the host loop and the game: relays `start`/`restart`, mirrors
//! `{score, is_over}` from the events the game emits, and produces the view
//! model the terminal renders. The shell owns at most one game per play
//! session and drops it on dismount.

pub mod session;
pub mod view;

pub use apple_catcher_core as core;
pub use apple_catcher_types as types;

pub use session::Shell;
pub use view::{Overlay, ShellView};
