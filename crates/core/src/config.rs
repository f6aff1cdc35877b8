//! Tunable game parameters.
//!
//! Defaults come from the constants in `apple_catcher_types`. Tests and the
//! environment layer in the binary construct variations of this struct.

use serde::{Deserialize, Serialize};

use crate::types::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: f32,
    pub height: f32,
    pub plate_width: f32,
    pub plate_height: f32,
    pub plate_y: f32,
    /// px/s while a direction is held
    pub plate_speed: f32,
    pub apple_size: f32,
    /// px/s for an apple spawned at score 0
    pub apple_base_speed: f32,
    pub apple_speed_per_point: f32,
    pub spawn_inset: f32,
    pub spawn_y: f32,
    pub spawn_interval_initial_ms: f32,
    pub spawn_interval_floor_ms: f32,
    pub spawn_interval_step_ms: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: PLAYFIELD_WIDTH,
            height: PLAYFIELD_HEIGHT,
            plate_width: PLATE_WIDTH,
            plate_height: PLATE_HEIGHT,
            plate_y: PLATE_Y,
            plate_speed: PLATE_SPEED,
            apple_size: APPLE_SIZE,
            apple_base_speed: APPLE_BASE_SPEED,
            apple_speed_per_point: APPLE_SPEED_PER_POINT,
            spawn_inset: SPAWN_INSET,
            spawn_y: SPAWN_Y,
            spawn_interval_initial_ms: SPAWN_INTERVAL_INITIAL_MS,
            spawn_interval_floor_ms: SPAWN_INTERVAL_FLOOR_MS,
            spawn_interval_step_ms: SPAWN_INTERVAL_STEP_MS,
        }
    }
}

impl GameConfig {
    /// Fall speed for an apple spawned at `score`.
    pub fn apple_speed_at(&self, score: u32) -> f32 {
        self.apple_base_speed + score as f32 * self.apple_speed_per_point
    }

    /// Next spawn interval after one spawn, never below the floor.
    pub fn next_spawn_interval(&self, current_ms: f32) -> f32 {
        (current_ms - self.spawn_interval_step_ms).max(self.spawn_interval_floor_ms)
    }

    /// Leftmost and rightmost plate centers.
    pub fn plate_x_bounds(&self) -> (f32, f32) {
        let half = self.plate_width / 2.0;
        (half, (self.width - half).max(half))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apple_speed_scales_with_score() {
        let cfg = GameConfig::default();
        assert_eq!(cfg.apple_speed_at(0), APPLE_BASE_SPEED);
        assert_eq!(
            cfg.apple_speed_at(5),
            APPLE_BASE_SPEED + 5.0 * APPLE_SPEED_PER_POINT
        );
    }

    #[test]
    fn spawn_interval_decays_to_floor() {
        let cfg = GameConfig::default();
        let mut interval = cfg.spawn_interval_initial_ms;
        let mut prev = interval;
        for _ in 0..1000 {
            interval = cfg.next_spawn_interval(interval);
            assert!(interval <= prev);
            assert!(interval >= cfg.spawn_interval_floor_ms);
            prev = interval;
        }
        assert_eq!(interval, cfg.spawn_interval_floor_ms);
    }

    #[test]
    fn plate_bounds_keep_plate_on_screen() {
        let cfg = GameConfig::default();
        let (lo, hi) = cfg.plate_x_bounds();
        assert_eq!(lo, PLATE_WIDTH / 2.0);
        assert_eq!(hi, PLAYFIELD_WIDTH - PLATE_WIDTH / 2.0);
    }

    #[test]
    fn config_serializes_to_json() {
        let cfg = GameConfig::default();
        let json = serde_json::to_string(&cfg).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
