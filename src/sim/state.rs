//! Game state and core simulation types
//!
//! Everything a running game owns lives in [`GameState`]; the shell never
//! reaches into globals.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::GLOW_RATE;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Letters falling, keys accepted
    Running,
    /// Frozen until unpaused (tab hidden, window blurred, pause key)
    Paused,
    /// A letter got through; only the restart key is accepted
    GameOver,
}

/// Something the shell may want to react to (audio, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A letter was shot down
    LetterDestroyed { symbol: char, center: Vec2, color: u32 },
    /// Difficulty went up
    LevelUp { level: u32 },
    /// The high score moved
    HighScore { score: u64 },
    /// Run ended
    GameOver { score: u64, new_record: bool },
    /// Fresh run started
    Restarted,
}

/// A falling letter
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Letter {
    pub id: u32,
    /// Top-left corner of the glyph box
    pub pos: Vec2,
    pub symbol: char,
    /// Palette index
    pub color: u32,
    /// Pixels per tick
    pub speed: f32,
    pub size: f32,
    /// Tick the letter spawned on
    pub created_at: u64,
    /// Cosmetic spin (radians)
    pub rotation: f32,
    pub rotation_speed: f32,
    /// Cosmetic glow intensity (0-1)
    pub glow: f32,
}

impl Letter {
    /// Advance one tick. `elapsed_ms` only drives the glow.
    pub fn update(&mut self, elapsed_ms: f32) {
        self.pos.y += self.speed;
        self.rotation += self.rotation_speed;
        self.glow = (elapsed_ms * GLOW_RATE).sin() * 0.5 + 0.5;
    }

    /// Past the bottom boundary
    #[inline]
    pub fn is_off_screen(&self, boundary: f32) -> bool {
        self.pos.y > boundary
    }

    /// Center of the glyph box
    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// A particle for visual effects
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Palette index of the letter it came from
    pub color: u32,
    /// 0-1, decreases over time
    pub life: f32,
    pub decay: f32,
    pub size: f32,
}

impl Particle {
    pub fn update(&mut self, gravity: f32) {
        self.pos += self.vel;
        self.vel.y += gravity;
        self.life -= self.decay;
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG, continues across restarts
    pub rng: Pcg32,
    /// Rules and balance
    pub tuning: Tuning,
    /// Letters destroyed this run
    pub score: u64,
    /// Difficulty level (1-based, stays 1 without levels)
    pub level: u32,
    /// Best score ever seen (loaded from storage by the session)
    pub high_score: u64,
    /// High score when this run started; beating it is a new record
    pub record_to_beat: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Live letters in spawn order
    pub letters: Vec<Letter>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Pending events for the shell
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with the given seed
    pub fn new(seed: u64, tuning: Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            tuning,
            score: 0,
            level: 1,
            high_score: 0,
            record_to_beat: 0,
            phase: GamePhase::Running,
            time_ticks: 0,
            letters: Vec::new(),
            particles: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed the high score from storage (call before the first tick)
    pub fn with_high_score(mut self, high_score: u64) -> Self {
        self.high_score = high_score;
        self.record_to_beat = high_score;
        self
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Cosmetic clock in milliseconds
    pub fn elapsed_ms(&self) -> f32 {
        self.time_ticks as f32 * crate::consts::FRAME_MS
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Raise the high score if the current score beats it
    pub fn update_high_score(&mut self) {
        if self.tuning.has_high_score && self.score > self.high_score {
            self.high_score = self.score;
            self.events.push(GameEvent::HighScore { score: self.score });
        }
    }

    /// End the run (idempotent)
    pub fn game_over(&mut self) {
        if self.phase == GamePhase::GameOver {
            return;
        }
        self.phase = GamePhase::GameOver;
        self.update_high_score();
        let new_record = self.tuning.has_high_score && self.score > self.record_to_beat;
        log::info!(
            "Game over: score {} (best {}{}, seed {})",
            self.score,
            self.high_score,
            if new_record { ", new record" } else { "" },
            self.seed
        );
        self.events.push(GameEvent::GameOver {
            score: self.score,
            new_record,
        });
    }

    /// Start a fresh run; the high score survives
    pub fn restart(&mut self) {
        self.score = 0;
        self.level = 1;
        self.record_to_beat = self.high_score;
        self.phase = GamePhase::Running;
        self.letters.clear();
        self.particles.clear();
        self.events.push(GameEvent::Restarted);
        log::info!("Game restarted (best {})", self.high_score);
    }

    /// Toggle between Running and Paused; no effect after game over
    pub fn toggle_pause(&mut self) {
        self.phase = match self.phase {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
            GamePhase::GameOver => GamePhase::GameOver,
        };
    }

    /// Pause if running (used for tab hide / window blur)
    pub fn pause(&mut self) {
        if self.phase == GamePhase::Running {
            self.phase = GamePhase::Paused;
        }
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
