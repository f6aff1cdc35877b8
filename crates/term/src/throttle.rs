//! Redraw throttling for screens that do not animate.

use crate::types::STATIC_REDRAW_MS;

/// Decides whether a frame is worth drawing.
///
/// While the game is running every frame is drawn. On static screens (start
/// overlay, game over) a redraw happens right away when the visible content
/// changes and otherwise at most once per `min_static_interval_ms`.
#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last: Option<(u64, u64)>,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last: None,
        }
    }

    /// `now_ms` is any monotonic clock; `fingerprint` hashes what is visible.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, is_static: bool) -> bool {
        let render = match self.last {
            None => true,
            Some(_) if !is_static => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.min_static_interval_ms,
        };
        if render {
            self.last = Some((now_ms, fingerprint));
        }
        render
    }

    /// Forget the last frame so the next call always renders.
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

impl Default for RenderThrottle {
    fn default() -> Self {
        Self::new(STATIC_REDRAW_MS)
    }
}
