//! View model handed to the renderer.

use crate::types::Phase;

/// Which overlay covers the playfield.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Overlay {
    /// Nothing started yet: title and "press Enter"
    Start,
    /// Playing, no overlay
    None,
    /// Game over panel on top of the frozen playfield
    GameOver,
}

impl Overlay {
    /// Start overlay wins over everything, game over only shows once a game ran.
    pub fn for_phase(phase: Option<Phase>) -> Self {
        match phase {
            None | Some(Phase::NotStarted) => Overlay::Start,
            Some(Phase::Active) => Overlay::None,
            Some(Phase::GameOver) => Overlay::GameOver,
        }
    }

    /// Static screens do not animate and can be redrawn lazily.
    pub fn is_static(&self) -> bool {
        !matches!(self, Overlay::None)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShellView {
    pub overlay: Overlay,
    pub score: u32,
    /// A "+1" is visible near the plate
    pub catch_flash: bool,
}

impl ShellView {
    pub fn show_hud(&self) -> bool {
        self.overlay != Overlay::Start
    }
}

impl Default for ShellView {
    fn default() -> Self {
        Self {
            overlay: Overlay::Start,
            score: 0,
            catch_flash: false,
        }
    }
}
