//! Apple Catcher (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and hosts the pieces
//! shared by both binaries: environment configuration, logger setup and the
//! headless simulator.

pub mod config;
pub mod logging;
pub mod sim;

pub use apple_catcher_core as core;
pub use apple_catcher_input as input;
pub use apple_catcher_shell as shell;
pub use apple_catcher_term as term;
pub use apple_catcher_types as types;
