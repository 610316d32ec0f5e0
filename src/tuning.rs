//! Data-driven game balance
//!
//! Every number the simulation reads lives here so that the two classic
//! rule sets (score-only with a persisted high score, and the levelled
//! variant) are presets of one core instead of separate code paths.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Which letter a keypress destroys when several share the symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TieBreak {
    /// The most recently spawned matching letter
    MostRecent,
    /// The matching letter closest to the bottom (greatest y)
    #[default]
    LowestOnScreen,
}

/// Game balance and rule switches
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Play area ===
    pub canvas_width: f32,
    pub canvas_height: f32,
    /// A letter is off-screen once `y > canvas_height + off_screen_margin`
    pub off_screen_margin: f32,

    // === Letters ===
    pub letter_size: f32,
    pub base_speed: f32,
    pub speed_step: f32,
    pub spin: f32,

    // === Spawning ===
    pub base_spawn_rate: f32,
    pub spawn_rate_step: f32,

    // === Progression ===
    pub level_threshold: u64,
    pub has_levels: bool,
    pub has_high_score: bool,

    // === Input ===
    pub tie_break: TieBreak,
    /// Key that restarts after game over
    pub restart_key: String,
    /// Key that toggles pause
    pub pause_key: String,

    // === Particles ===
    pub particle_batch: usize,
    pub particle_decay: f32,
    pub particle_gravity: f32,
    pub particle_spread: f32,
    pub particle_size: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            off_screen_margin: 0.0,

            letter_size: LETTER_SIZE,
            base_speed: LETTER_SPEED,
            speed_step: LETTER_SPEED_STEP,
            spin: LETTER_SPIN,

            base_spawn_rate: SPAWN_RATE,
            spawn_rate_step: SPAWN_RATE_STEP,

            level_threshold: LEVEL_THRESHOLD,
            has_levels: true,
            has_high_score: true,

            tie_break: TieBreak::LowestOnScreen,
            restart_key: "Enter".to_string(),
            pause_key: "Escape".to_string(),

            particle_batch: PARTICLE_BATCH,
            particle_decay: PARTICLE_DECAY,
            particle_gravity: PARTICLE_GRAVITY,
            particle_spread: PARTICLE_SPREAD,
            particle_size: PARTICLE_SIZE,
        }
    }
}

impl Tuning {
    /// Score-only rules with a persisted high score
    pub fn classic() -> Self {
        Self {
            has_levels: false,
            has_high_score: true,
            tie_break: TieBreak::MostRecent,
            off_screen_margin: 0.0,
            ..Self::default()
        }
    }

    /// Levelled rules without a high score
    pub fn leveled() -> Self {
        Self {
            has_levels: true,
            has_high_score: false,
            tie_break: TieBreak::LowestOnScreen,
            off_screen_margin: LETTER_SIZE,
            ..Self::default()
        }
    }

    /// Same rules on a differently sized play area
    pub fn with_canvas(mut self, width: f32, height: f32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Parse a (possibly partial) JSON override; missing fields keep defaults
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str(json) {
            Ok(tuning) => Some(tuning),
            Err(e) => {
                log::warn!("Ignoring invalid tuning override: {}", e);
                None
            }
        }
    }

    /// Difficulty tier for a score (0 until the first threshold)
    pub fn tier_for_score(&self, score: u64) -> u32 {
        if self.level_threshold == 0 {
            return 0;
        }
        (score / self.level_threshold) as u32
    }

    /// Y coordinate past which a letter counts as off-screen
    #[inline]
    pub fn bottom_boundary(&self) -> f32 {
        self.canvas_height + self.off_screen_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_differ_only_in_rules() {
        let classic = Tuning::classic();
        let leveled = Tuning::leveled();
        assert!(!classic.has_levels && classic.has_high_score);
        assert!(leveled.has_levels && !leveled.has_high_score);
        assert_eq!(classic.tie_break, TieBreak::MostRecent);
        assert_eq!(leveled.bottom_boundary(), CANVAS_HEIGHT + LETTER_SIZE);
        assert_eq!(classic.base_speed, leveled.base_speed);
    }

    #[test]
    fn test_partial_json_override() {
        let tuning = Tuning::from_json(r#"{"canvas_height": 400.0, "tie_break": "MostRecent"}"#)
            .expect("valid override");
        assert_eq!(tuning.canvas_height, 400.0);
        assert_eq!(tuning.tie_break, TieBreak::MostRecent);
        assert_eq!(tuning.particle_batch, PARTICLE_BATCH);
    }

    #[test]
    fn test_invalid_json_is_rejected() {
        assert!(Tuning::from_json("{not json").is_none());
    }

    #[test]
    fn test_tier_for_score() {
        let tuning = Tuning::default();
        assert_eq!(tuning.tier_for_score(0), 0);
        assert_eq!(tuning.tier_for_score(29), 0);
        assert_eq!(tuning.tier_for_score(30), 1);
        assert_eq!(tuning.tier_for_score(95), 3);
    }
}
