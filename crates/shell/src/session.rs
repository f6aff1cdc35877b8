//! Shell session: owns the game and mirrors its state for display.

use crate::core::{GameConfig, GameState, SceneSnapshot, Snapshot};
use crate::types::{Command, FrameInput, GameEvent, CATCH_FLASH_MS};
use crate::view::{Overlay, ShellView};

pub struct Shell {
    seed: u32,
    config: GameConfig,
    /// The single game for this play session, created on the first start.
    game: Option<GameState>,
    /// Score card as last reported by game events.
    mirror: Snapshot,
    catch_flash_ms: u32,
    scene: SceneSnapshot,
    dismounted: bool,
}

impl Shell {
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        Self {
            seed,
            config,
            game: None,
            mirror: Snapshot::default(),
            catch_flash_ms: 0,
            scene: SceneSnapshot::default(),
            dismounted: false,
        }
    }

    /// Relay a command to the game. Returns whether it changed anything.
    pub fn command(&mut self, command: Command) -> bool {
        if self.dismounted {
            return false;
        }

        let changed = match command {
            Command::Start => {
                let game = self.game.get_or_insert_with(|| {
                    log::debug!("creating game (seed {})", self.seed);
                    GameState::with_config(self.seed, self.config.clone())
                });
                game.start()
            }
            Command::Restart => match self.game.as_mut() {
                Some(game) => game.restart(),
                None => false,
            },
        };

        if !changed {
            log::trace!("ignored {} in current phase", command.as_str());
        }
        self.sync();
        changed
    }

    /// Advance one frame. Returns false when nothing moved.
    pub fn frame(&mut self, elapsed_ms: u32, input: FrameInput) -> bool {
        if self.dismounted {
            return false;
        }

        self.catch_flash_ms = self.catch_flash_ms.saturating_sub(elapsed_ms);

        let advanced = match self.game.as_mut() {
            Some(game) => game.tick(elapsed_ms, input),
            None => false,
        };
        self.sync();
        advanced
    }

    /// Drain game events into the mirror and refresh the scene.
    fn sync(&mut self) {
        let Some(game) = self.game.as_mut() else {
            return;
        };

        for event in game.take_events() {
            match event {
                GameEvent::Started | GameEvent::Restarted => {
                    self.mirror = Snapshot::default();
                    self.catch_flash_ms = 0;
                }
                GameEvent::Spawned { .. } => {}
                GameEvent::Caught { score, .. } => {
                    self.mirror.score = score;
                    self.catch_flash_ms = CATCH_FLASH_MS;
                }
                GameEvent::GameOver { score } => {
                    self.mirror = Snapshot {
                        score,
                        is_over: true,
                    };
                }
            }
        }
        // Events are best-effort; the snapshot is authoritative.
        let truth = game.snapshot();
        if self.mirror != truth {
            log::warn!("score card out of sync ({:?} vs {:?})", self.mirror, truth);
            self.mirror = truth;
        }

        game.scene_snapshot_into(&mut self.scene);
    }

    pub fn view(&self) -> ShellView {
        ShellView {
            overlay: Overlay::for_phase(self.game.as_ref().map(GameState::phase)),
            score: self.mirror.score,
            catch_flash: self.catch_flash_ms > 0,
        }
    }

    /// `{score, is_over}` as mirrored from events.
    pub fn snapshot(&self) -> Snapshot {
        self.mirror
    }

    pub fn scene(&self) -> &SceneSnapshot {
        &self.scene
    }

    pub fn has_game(&self) -> bool {
        self.game.is_some()
    }

    pub fn is_dismounted(&self) -> bool {
        self.dismounted
    }

    /// Tear down the game. Later commands and frames are no-ops.
    pub fn dismount(&mut self) {
        if self.dismounted {
            return;
        }
        if let Some(game) = self.game.take() {
            log::info!(
                "shell dismounted after episode {} (score {})",
                game.episode_id(),
                game.score()
            );
        }
        self.scene.clear();
        self.mirror = Snapshot::default();
        self.catch_flash_ms = 0;
        self.dismounted = true;
    }
}

impl Drop for Shell {
    fn drop(&mut self) {
        self.dismount();
    }
}
