//! Game settings and preferences
//!
//! Persisted separately from the high score, as JSON.

use serde::{Deserialize, Serialize};

use crate::platform::Storage;

/// Quality preset levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum QualityPreset {
    Low,
    #[default]
    Medium,
    High,
}

impl QualityPreset {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityPreset::Low => "Low",
            QualityPreset::Medium => "Medium",
            QualityPreset::High => "High",
        }
    }

    /// Next preset in the cycle (wraps)
    pub fn next(&self) -> Self {
        match self {
            QualityPreset::Low => QualityPreset::Medium,
            QualityPreset::Medium => QualityPreset::High,
            QualityPreset::High => QualityPreset::Low,
        }
    }

    /// Background stars to draw
    pub fn star_count(&self) -> usize {
        match self {
            QualityPreset::Low => 0,
            QualityPreset::Medium => 50,
            QualityPreset::High => 100,
        }
    }

    /// Whether letters get a shadow glow (expensive on canvas)
    pub fn glow_enabled(&self) -> bool {
        match self {
            QualityPreset::Low => false,
            QualityPreset::Medium => true,
            QualityPreset::High => true,
        }
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Graphics quality preset
    pub quality: QualityPreset,

    // === Visual Effects ===
    /// Particle bursts
    pub particles: bool,

    // === Audio ===
    /// Master volume (0.0 - 1.0)
    pub master_volume: f32,
    /// Sound effects volume (0.0 - 1.0)
    pub sfx_volume: f32,
    /// Mute everything
    pub muted: bool,
    /// Pause when the tab is hidden or the window loses focus
    pub pause_on_blur: bool,

    // === Accessibility ===
    /// Reduced motion (no spin, no twinkle)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quality: QualityPreset::Medium,
            particles: true,
            master_volume: 0.8,
            sfx_volume: 1.0,
            muted: false,
            pause_on_blur: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "alphabetShooterSettings";

    /// Apply a settings hotkey; returns true if the key changed something
    ///
    /// F4 mutes, F7 cycles quality, F8 toggles particles, F9 toggles reduced
    /// motion. Function keys keep A-Z free for play.
    pub fn apply_hotkey(&mut self, key: &str) -> bool {
        match key {
            "F4" => {
                self.muted = !self.muted;
                log::info!("Muted: {}", self.muted);
            }
            "F7" => {
                self.quality = self.quality.next();
                log::info!("Quality: {}", self.quality.as_str());
            }
            "F8" => {
                self.particles = !self.particles;
                log::info!("Particles: {}", self.particles);
            }
            "F9" => {
                self.reduced_motion = !self.reduced_motion;
                log::info!("Reduced motion: {}", self.reduced_motion);
            }
            _ => return false,
        }
        true
    }

    /// Effective glow (respects quality)
    pub fn effective_glow(&self) -> bool {
        self.quality.glow_enabled()
    }

    /// Effective letter spin (respects reduced_motion)
    pub fn effective_spin(&self) -> bool {
        !self.reduced_motion
    }

    /// Effective star count (no twinkling field with reduced motion)
    pub fn star_count(&self) -> usize {
        if self.reduced_motion {
            0
        } else {
            self.quality.star_count()
        }
    }

    /// Effective sound volume
    pub fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            (self.master_volume * self.sfx_volume).clamp(0.0, 1.0)
        }
    }

    /// Load settings from storage, falling back to defaults
    pub fn load(storage: &impl Storage) -> Self {
        if let Some(json) = storage.get(Self::STORAGE_KEY) {
            match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings");
                    return settings;
                }
                Err(e) => log::warn!("Discarding corrupt settings: {}", e),
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Save settings to storage
    pub fn save(&self, storage: &mut impl Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set(Self::STORAGE_KEY, &json);
            log::info!("Settings saved");
        }
    }
}
