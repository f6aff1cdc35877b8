//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. The view
//! renders into a plain framebuffer (pure, unit-testable) and the renderer
//! flushes only the cells that changed since the previous frame.
//!
//! The playfield is measured in logical pixels; [`GameView`] scales it onto
//! whatever grid of character cells the terminal offers.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod throttle;

pub use apple_catcher_core as core;
pub use apple_catcher_shell as shell;
pub use apple_catcher_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::RenderThrottle;
