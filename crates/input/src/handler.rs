//! Held-key tracking for terminal environments.
//!
//! The plate moves while a direction is held, so the game needs "is left held
//! right now", not individual key presses. Terminals with the kitty keyboard
//! protocol report releases; everywhere else a press (or auto-repeat) counts
//! as held until a timeout passes without another one.

use crossterm::event::KeyCode;

use crate::types::FrameInput;

/// Direction a movement key stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

impl HorizontalDirection {
    pub fn from_key(code: KeyCode) -> Self {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
                HorizontalDirection::Left
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
                HorizontalDirection::Right
            }
            _ => HorizontalDirection::None,
        }
    }
}

// Must outlast the OS auto-repeat delay (commonly 250-600ms), otherwise a
// held key flickers off between the first press and the first repeat.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 600;

/// Tracks which movement keys are held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    /// Milliseconds since the last press/repeat, `None` when released.
    left_age_ms: Option<u32>,
    right_age_ms: Option<u32>,
    release_events: bool,
    key_release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            left_age_ms: None,
            right_age_ms: None,
            release_events: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    /// Trust release events instead of timing out held keys.
    pub fn with_release_events(mut self, enabled: bool) -> Self {
        self.release_events = enabled;
        self
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press or auto-repeat. Returns false for non-movement keys.
    pub fn handle_key_press(&mut self, code: KeyCode) -> bool {
        match HorizontalDirection::from_key(code) {
            HorizontalDirection::Left => {
                self.left_age_ms = Some(0);
                if !self.release_events {
                    // Without release events the newest direction wins.
                    self.right_age_ms = None;
                }
                true
            }
            HorizontalDirection::Right => {
                self.right_age_ms = Some(0);
                if !self.release_events {
                    self.left_age_ms = None;
                }
                true
            }
            HorizontalDirection::None => false,
        }
    }

    pub fn handle_key_release(&mut self, code: KeyCode) {
        match HorizontalDirection::from_key(code) {
            HorizontalDirection::Left => self.left_age_ms = None,
            HorizontalDirection::Right => self.right_age_ms = None,
            HorizontalDirection::None => {}
        }
    }

    /// Age held keys by one frame and auto-release stale ones.
    pub fn update(&mut self, elapsed_ms: u32) {
        if self.release_events {
            return;
        }
        let timeout = self.key_release_timeout_ms;
        for age in [&mut self.left_age_ms, &mut self.right_age_ms] {
            if let Some(ms) = age {
                let next = ms.saturating_add(elapsed_ms);
                *age = if next > timeout { None } else { Some(next) };
            }
        }
    }

    pub fn frame_input(&self) -> FrameInput {
        FrameInput {
            left: self.left_age_ms.is_some(),
            right: self.right_age_ms.is_some(),
        }
    }

    pub fn reset(&mut self) {
        self.left_age_ms = None;
        self.right_age_ms = None;
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
