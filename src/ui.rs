//! HUD and game-over panel content
//!
//! Pure text the browser shell writes into the DOM.

use crate::sim::GameState;

/// Numbers shown in the HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hud {
    pub score: u64,
    /// `None` when levels are off
    pub level: Option<u32>,
    /// `None` when the high score is off
    pub high_score: Option<u64>,
    pub paused: bool,
    pub game_over: bool,
}

impl Hud {
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            level: state.tuning.has_levels.then_some(state.level),
            high_score: state.tuning.has_high_score.then_some(state.high_score),
            paused: state.phase == crate::sim::GamePhase::Paused,
            game_over: state.is_game_over(),
        }
    }
}

/// Final result shown on the game-over panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameOverSummary {
    pub score: u64,
    pub high_score: u64,
    pub new_record: bool,
}

impl GameOverSummary {
    /// Text for the share link
    pub fn share_text(&self) -> String {
        if self.new_record {
            format!(
                "New record in Alphabet Shooter: {} letters shot down!",
                self.score
            )
        } else {
            format!("I shot down {} letters in Alphabet Shooter!", self.score)
        }
    }

    /// Tweet intent URL; `encode` percent-encodes a URI component
    pub fn share_url(&self, page_url: &str, encode: impl Fn(&str) -> String) -> String {
        format!(
            "https://twitter.com/intent/tweet?text={}&url={}",
            encode(&self.share_text()),
            encode(page_url)
        )
    }
}
