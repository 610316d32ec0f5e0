//! Game session
//!
//! Owns the game state and the storage it persists to. The shell talks to
//! the game only through this type: frame ticks, key-downs, and the events
//! they produce.

use crate::highscores::HighScore;
use crate::platform::Storage;
use crate::sim::{self, GameEvent, GameState, KeyOutcome, TickStatus};
use crate::tuning::Tuning;
use crate::ui::{GameOverSummary, Hud};

pub struct Session<S: Storage> {
    state: GameState,
    high_score: HighScore,
    storage: S,
    /// Events produced since the last drain
    pending: Vec<GameEvent>,
    last_summary: Option<GameOverSummary>,
}

impl<S: Storage> Session<S> {
    /// Start a session, reading the persisted high score
    pub fn new(seed: u64, tuning: Tuning, storage: S) -> Self {
        let high_score = if tuning.has_high_score {
            HighScore::load(&storage)
        } else {
            HighScore::default()
        };
        let state = GameState::new(seed, tuning).with_high_score(high_score.best);
        log::info!("Session started (seed {}, best {})", seed, high_score.best);
        Self {
            state,
            high_score,
            storage,
            pending: Vec::new(),
            last_summary: None,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best
    }

    /// Advance one frame
    pub fn tick(&mut self) -> TickStatus {
        let status = sim::tick(&mut self.state);
        self.collect_events();
        status
    }

    /// Feed one key-down
    pub fn key_down(&mut self, key: &str) -> KeyOutcome {
        let outcome = sim::handle_key(&mut self.state, key);
        self.collect_events();
        outcome
    }

    /// Idle/demo frame: optionally press the most urgent letter, then tick
    pub fn autoplay_frame(&mut self, press: bool) -> TickStatus {
        if press {
            if let Some(symbol) = sim::autopilot_key(&self.state) {
                let mut buf = [0u8; 4];
                self.key_down(symbol.encode_utf8(&mut buf));
            }
        }
        self.tick()
    }

    /// Start a new run after game over; returns false while a run is live
    pub fn restart(&mut self) -> bool {
        if !self.state.is_game_over() {
            return false;
        }
        self.state.restart();
        self.collect_events();
        true
    }

    pub fn toggle_pause(&mut self) {
        self.state.toggle_pause();
    }

    pub fn pause(&mut self) {
        self.state.pause();
    }

    /// Events since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.pending)
    }

    pub fn hud(&self) -> Hud {
        Hud::from_state(&self.state)
    }

    /// Result of the last finished run (cleared on restart)
    pub fn summary(&self) -> Option<&GameOverSummary> {
        self.last_summary.as_ref()
    }

    /// Move state events into the pending queue, persisting as needed
    fn collect_events(&mut self) {
        for event in self.state.drain_events() {
            match event {
                GameEvent::HighScore { score } => {
                    if self.high_score.submit(score) {
                        self.high_score.save(&mut self.storage);
                    }
                }
                GameEvent::GameOver { score, new_record } => {
                    self.last_summary = Some(GameOverSummary {
                        score,
                        high_score: self.state.high_score,
                        new_record,
                    });
                }
                GameEvent::Restarted => self.last_summary = None,
                GameEvent::LevelUp { .. } | GameEvent::LetterDestroyed { .. } => {}
            }
            self.pending.push(event);
        }
    }
}
