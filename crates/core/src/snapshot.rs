use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};

use crate::config::GameConfig;
use crate::game_state::{Apple, Body, Plate};
use crate::types::{Phase, MAX_APPLES};

/// Read-only copy of the state the presentation layer cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub score: u32,
    pub is_over: bool,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneSnapshot {
    pub phase: Phase,
    pub score: u32,
    pub episode_id: u32,
    pub width: f32,
    pub height: f32,
    pub plate: Plate,
    pub apples: ArrayVec<Apple, MAX_APPLES>,
    pub spawn_interval_ms: f32,
}

impl SceneSnapshot {
    pub fn clear(&mut self) {
        let config = GameConfig::default();
        self.phase = Phase::NotStarted;
        self.score = 0;
        self.episode_id = 0;
        self.width = config.width;
        self.height = config.height;
        self.plate = Plate::new(&config);
        self.apples.clear();
        self.spawn_interval_ms = config.spawn_interval_initial_ms;
    }

    pub fn summary(&self) -> Snapshot {
        Snapshot {
            score: self.score,
            is_over: self.phase.is_over(),
        }
    }

    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        std::iter::once(Body::Plate(self.plate))
            .chain(self.apples.iter().copied().map(Body::Apple))
    }

    /// Cheap hash of everything visible, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h = DefaultHasher::new();
        self.phase.hash(&mut h);
        self.score.hash(&mut h);
        self.episode_id.hash(&mut h);
        self.plate.x.to_bits().hash(&mut h);
        for apple in &self.apples {
            apple.x.to_bits().hash(&mut h);
            apple.y.to_bits().hash(&mut h);
        }
        h.finish()
    }
}

impl Default for SceneSnapshot {
    fn default() -> Self {
        let config = GameConfig::default();
        Self {
            phase: Phase::NotStarted,
            score: 0,
            episode_id: 0,
            width: config.width,
            height: config.height,
            plate: Plate::new(&config),
            apples: ArrayVec::new(),
            spawn_interval_ms: config.spawn_interval_initial_ms,
        }
    }
}
