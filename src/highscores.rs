//! High score persistence
//!
//! A single integer kept in storage across sessions. The stored text is
//! parsed leniently: a leading run of digits wins, anything else is 0.

use crate::platform::Storage;

/// Best score across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    pub best: u64,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "alphabetShooterHighScore";

    /// Parse a stored value; missing, non-numeric or negative ⇒ 0
    pub fn parse(raw: Option<&str>) -> u64 {
        let Some(raw) = raw else { return 0 };
        let trimmed = raw.trim_start();
        let digits = trimmed.strip_prefix('+').unwrap_or(trimmed);
        // Saturate rather than drop an over-long record
        digits
            .bytes()
            .take_while(u8::is_ascii_digit)
            .fold(0u64, |acc, b| {
                acc.saturating_mul(10).saturating_add(u64::from(b - b'0'))
            })
    }

    /// Load from storage
    pub fn load(storage: &impl Storage) -> Self {
        let raw = storage.get(Self::STORAGE_KEY);
        let best = Self::parse(raw.as_deref());
        log::info!("Loaded high score {}", best);
        Self { best }
    }

    /// Save to storage
    pub fn save(&self, storage: &mut impl Storage) {
        storage.set(Self::STORAGE_KEY, &self.best.to_string());
        log::debug!("High score saved ({})", self.best);
    }

    /// Record a score; returns true if it beat the best
    pub fn submit(&mut self, score: u64) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}
