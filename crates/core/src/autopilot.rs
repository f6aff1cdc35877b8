//! Autopilot: steers the plate under the lowest catchable apple.
//!
//! Used by the headless simulator and benchmarks. Pure function of the
//! current state, so it plugs into the same `tick` path as keyboard input.

use crate::game_state::{Apple, GameState, Plate};
use crate::types::FrameInput;

/// Input that moves the plate toward the apple closest to the bottom.
pub fn steer(state: &GameState) -> FrameInput {
    steer_towards(state.plate(), state.apples())
}

pub fn steer_towards(plate: &Plate, apples: &[Apple]) -> FrameInput {
    let Some(target) = lowest_catchable(plate, apples) else {
        return FrameInput::IDLE;
    };

    // Stop once the apple is well inside the plate to avoid jitter.
    let deadband = plate.width / 4.0;
    let dx = target.x - plate.x;
    if dx < -deadband {
        FrameInput::LEFT
    } else if dx > deadband {
        FrameInput::RIGHT
    } else {
        FrameInput::IDLE
    }
}

fn lowest_catchable<'a>(plate: &Plate, apples: &'a [Apple]) -> Option<&'a Apple> {
    apples
        .iter()
        .filter(|a| a.y <= plate.y)
        .max_by(|a, b| a.y.total_cmp(&b.y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn apple(x: f32, y: f32) -> Apple {
        Apple {
            x,
            y,
            size: 24.0,
            speed: 150.0,
        }
    }

    #[test]
    fn idle_without_apples() {
        let plate = Plate::new(&GameConfig::default());
        assert_eq!(steer_towards(&plate, &[]), FrameInput::IDLE);
    }

    #[test]
    fn follows_lowest_apple() {
        let plate = Plate::new(&GameConfig::default());
        let apples = [apple(700.0, 100.0), apple(100.0, 300.0)];
        assert_eq!(steer_towards(&plate, &apples), FrameInput::LEFT);
    }

    #[test]
    fn ignores_apples_below_plate() {
        let plate = Plate::new(&GameConfig::default());
        let apples = [apple(100.0, plate.y + 10.0), apple(700.0, 50.0)];
        assert_eq!(steer_towards(&plate, &apples), FrameInput::RIGHT);
    }

    #[test]
    fn holds_still_when_aligned() {
        let plate = Plate::new(&GameConfig::default());
        let apples = [apple(plate.x + 5.0, 200.0)];
        assert_eq!(steer_towards(&plate, &apples), FrameInput::IDLE);
    }

    #[test]
    fn autopilot_scores_in_a_real_game() {
        let mut state = GameState::new(2024);
        state.start();
        for _ in 0..(60 * 20) {
            let input = steer(&state);
            state.tick(16, input);
        }
        assert!(state.score() > 0);
    }
}
