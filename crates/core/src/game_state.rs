//! Game state module - owns the authoritative game state
//!
//! This module ties together the plate, the falling apples, the RNG and the
//! difficulty ramp. It handles per-frame integration, catches, misses and the
//! `NotStarted → Active → GameOver` lifecycle.

use arrayvec::ArrayVec;

use crate::config::GameConfig;
use crate::geometry::Aabb;
use crate::rng::SimpleRng;
use crate::snapshot::{SceneSnapshot, Snapshot};
use crate::types::*;

/// Player-controlled catcher
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plate {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub velocity_x: f32,
}

impl Plate {
    /// Plate at its starting position (horizontally centered, at rest)
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.width / 2.0,
            y: config.plate_y,
            width: config.plate_width,
            height: config.plate_height,
            velocity_x: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.x, self.y, self.width, self.height)
    }
}

/// Falling apple. `x` and `speed` are fixed at spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Apple {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
}

impl Apple {
    pub fn bounds(&self) -> Aabb {
        Aabb::from_center(self.x, self.y, self.size, self.size)
    }

    /// Box covering everything the apple passed through during the last
    /// `dt` seconds of falling.
    pub fn swept_bounds(&self, dt: f32) -> Aabb {
        let mut bounds = self.bounds();
        bounds.min_y -= self.speed * dt;
        bounds
    }
}

/// Anything the scene draws
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Body {
    Plate(Plate),
    Apple(Apple),
}

impl Body {
    pub fn bounds(&self) -> Aabb {
        match self {
            Body::Plate(plate) => plate.bounds(),
            Body::Apple(apple) => apple.bounds(),
        }
    }
}

/// Per-session state. Replaced wholesale on restart.
#[derive(Debug, Clone, PartialEq)]
pub struct Round {
    score: u32,
    plate: Plate,
    apples: ArrayVec<Apple, MAX_APPLES>,
    spawn_interval_ms: f32,
    last_spawn_ms: f64,
    /// Session clock, advanced by tick
    clock_ms: f64,
}

impl Round {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            score: 0,
            plate: Plate::new(config),
            apples: ArrayVec::new(),
            spawn_interval_ms: config.spawn_interval_initial_ms,
            last_spawn_ms: 0.0,
            clock_ms: 0.0,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn plate(&self) -> &Plate {
        &self.plate
    }

    pub fn apples(&self) -> &[Apple] {
        &self.apples
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        self.spawn_interval_ms
    }

    pub fn last_spawn_ms(&self) -> f64 {
        self.last_spawn_ms
    }

    pub fn clock_ms(&self) -> f64 {
        self.clock_ms
    }

    fn spawn_due(&self) -> bool {
        (self.clock_ms - self.last_spawn_ms) > self.spawn_interval_ms as f64
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    rng: SimpleRng,
    seed: u32,
    phase: Phase,
    round: Round,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    /// Pending events (drained by observers).
    events: ArrayVec<GameEvent, MAX_PENDING_EVENTS>,
}

impl GameState {
    /// Create a new game with the given RNG seed and default tuning
    pub fn new(seed: u32) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u32, config: GameConfig) -> Self {
        let round = Round::new(&config);
        Self {
            config,
            rng: SimpleRng::new(seed),
            seed,
            phase: Phase::NotStarted,
            round,
            episode_id: 0,
            events: ArrayVec::new(),
        }
    }

    /// Leave `NotStarted`. Returns false (and changes nothing) in any other phase.
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::NotStarted {
            return false;
        }
        self.phase = Phase::Active;
        self.emit(GameEvent::Started);
        log::info!("game started (seed {})", self.seed);
        true
    }

    /// Begin a fresh round after game over. A no-op before the first start
    /// and while a round is still active.
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::GameOver {
            return false;
        }
        self.round = Round::new(&self.config);
        self.episode_id = self.episode_id.wrapping_add(1);
        self.phase = Phase::Active;
        self.emit(GameEvent::Restarted);
        log::info!("game restarted (episode {})", self.episode_id);
        true
    }

    pub fn apply_command(&mut self, command: Command) -> bool {
        match command {
            Command::Start => self.start(),
            Command::Restart => self.restart(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn started(&self) -> bool {
        self.phase != Phase::NotStarted
    }

    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn score(&self) -> u32 {
        self.round.score
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn plate(&self) -> &Plate {
        &self.round.plate
    }

    pub fn apples(&self) -> &[Apple] {
        &self.round.apples
    }

    pub fn spawn_interval_ms(&self) -> f32 {
        self.round.spawn_interval_ms
    }

    #[cfg(test)]
    pub(crate) fn apples_mut(&mut self) -> &mut ArrayVec<Apple, MAX_APPLES> {
        &mut self.round.apples
    }

    /// Everything to draw this frame: the plate first, then apples in spawn order.
    pub fn bodies(&self) -> impl Iterator<Item = Body> + '_ {
        std::iter::once(Body::Plate(self.round.plate))
            .chain(self.round.apples.iter().copied().map(Body::Apple))
    }

    /// Read-only `{score, is_over}` view for the presentation layer.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            score: self.round.score,
            is_over: self.phase.is_over(),
        }
    }

    pub fn scene_snapshot_into(&self, out: &mut SceneSnapshot) {
        out.phase = self.phase;
        out.score = self.round.score;
        out.episode_id = self.episode_id;
        out.width = self.config.width;
        out.height = self.config.height;
        out.plate = self.round.plate;
        out.apples.clear();
        out.apples.extend(self.round.apples.iter().copied());
        out.spawn_interval_ms = self.round.spawn_interval_ms;
    }

    pub fn scene_snapshot(&self) -> SceneSnapshot {
        let mut s = SceneSnapshot::default();
        self.scene_snapshot_into(&mut s);
        s
    }

    /// Take all events queued since the last call.
    pub fn take_events(&mut self) -> ArrayVec<GameEvent, MAX_PENDING_EVENTS> {
        std::mem::take(&mut self.events)
    }

    /// Advance the world by one frame. Returns false when the world is frozen.
    pub fn tick(&mut self, elapsed_ms: u32, input: FrameInput) -> bool {
        if !self.phase.is_active() {
            return false;
        }

        let dt = elapsed_ms as f32 / 1000.0;

        self.move_plate(input, dt);

        self.round.clock_ms += elapsed_ms as f64;
        if self.round.spawn_due() {
            self.spawn_apple();
        }

        for apple in self.round.apples.iter_mut() {
            apple.y += apple.speed * dt;
        }

        self.collect_catches(dt);
        self.check_miss();

        true
    }

    fn move_plate(&mut self, input: FrameInput, dt: f32) {
        let (min_x, max_x) = self.config.plate_x_bounds();
        let plate = &mut self.round.plate;
        plate.velocity_x = input.direction() * self.config.plate_speed;
        plate.x = (plate.x + plate.velocity_x * dt).clamp(min_x, max_x);
    }

    fn spawn_apple(&mut self) {
        let round = &mut self.round;
        round.last_spawn_ms = round.clock_ms;
        round.spawn_interval_ms = self.config.next_spawn_interval(round.spawn_interval_ms);

        if round.apples.is_full() {
            log::debug!("apple limit reached, skipping spawn");
            return;
        }

        let x = self.rng.next_range_f32(
            self.config.spawn_inset,
            self.config.width - self.config.spawn_inset,
        );
        let speed = self.config.apple_speed_at(round.score);
        round.apples.push(Apple {
            x,
            y: self.config.spawn_y,
            size: self.config.apple_size,
            speed,
        });
        log::trace!(
            "spawned apple at x={x:.1} speed={speed:.1}, next interval {:.0}ms",
            round.spawn_interval_ms
        );
        self.emit(GameEvent::Spawned { x, speed });
    }

    /// Catches test the whole path of the frame so fast apples cannot skip
    /// over the plate between two frames.
    fn collect_catches(&mut self, dt: f32) {
        let plate = self.round.plate.bounds();
        let score = &mut self.round.score;
        let events = &mut self.events;

        self.round.apples.retain(|apple| {
            if !apple.swept_bounds(dt).overlaps(&plate) {
                return true;
            }
            *score += 1;
            let event = GameEvent::Caught {
                x: apple.x,
                score: *score,
            };
            if events.try_push(event).is_err() {
                log::trace!("event queue full, dropping {event:?}");
            }
            log::debug!("caught apple at x={:.1}, score {}", apple.x, *score);
            false
        });
    }

    fn check_miss(&mut self) {
        let height = self.config.height;
        let Some(idx) = self.round.apples.iter().position(|a| a.y > height) else {
            return;
        };

        let missed = self.round.apples.remove(idx);
        self.phase = Phase::GameOver;
        self.emit(GameEvent::GameOver {
            score: self.round.score,
        });
        log::info!(
            "game over: apple missed at x={:.1}, final score {}",
            missed.x,
            self.round.score
        );
    }

    fn emit(&mut self, event: GameEvent) {
        if self.events.try_push(event).is_err() {
            log::trace!("event queue full, dropping {event:?}");
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
