//! Alphabet Shooter - A falling-letter typing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (letters, particles, spawning, key matching)
//! - `tuning`: Data-driven game balance
//! - `session`: Game session owning state and high score persistence
//! - `renderer`: Draw intents and the Canvas 2D backend
//! - `platform`: Browser/native platform abstraction (storage)
//! - `audio`: Procedural sound cues
//! - `ui`: HUD snapshot and share text

pub mod audio;
pub mod highscores;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use highscores::HighScore;
pub use session::Session;
pub use settings::{QualityPreset, Settings};
pub use tuning::{TieBreak, Tuning};

/// Game configuration constants
pub mod consts {
    /// Default play area size (pixels)
    pub const CANVAS_WIDTH: f32 = 800.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Letter glyph box size (pixels)
    pub const LETTER_SIZE: f32 = 80.0;
    /// Base fall speed (pixels per tick)
    pub const LETTER_SPEED: f32 = 1.0;
    /// Extra fall speed per difficulty tier
    pub const LETTER_SPEED_STEP: f32 = 0.3;
    /// Max spin per tick (radians), letters spin in [-x/2, x/2)
    pub const LETTER_SPIN: f32 = 0.02;
    /// Glow oscillator rate (per simulated millisecond)
    pub const GLOW_RATE: f32 = 0.005;

    /// Base spawn probability per tick
    pub const SPAWN_RATE: f32 = 0.015;
    /// Extra spawn probability per difficulty tier
    pub const SPAWN_RATE_STEP: f32 = 0.003;

    /// Score points per level
    pub const LEVEL_THRESHOLD: u64 = 30;

    /// Particles emitted per destroyed letter
    pub const PARTICLE_BATCH: usize = 15;
    /// Life lost per tick
    pub const PARTICLE_DECAY: f32 = 0.02;
    /// Downward acceleration (pixels per tick²)
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    /// Initial velocity spread (components in [-x/2, x/2))
    pub const PARTICLE_SPREAD: f32 = 10.0;
    pub const PARTICLE_SIZE: f32 = 3.0;

    /// Nominal frame duration, used to turn ticks into cosmetic time
    pub const FRAME_MS: f32 = 1000.0 / 60.0;
}

/// The 26 symbols letters are drawn from
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Letter color palette
pub const PALETTE: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8", "#F7DC6F",
    "#BB8FCE", "#85C1E9", "#F8C471", "#82E0AA", "#F1948A", "#85C1E9", "#D7BDE2",
];

/// Case-fold a key identifier to a letter symbol.
///
/// Returns `None` for anything that is not a single A-Z character
/// ("Enter", "Shift", digits, ...).
#[inline]
pub fn key_to_symbol(key: &str) -> Option<char> {
    let mut chars = key.chars();
    let c = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    let upper = c.to_ascii_uppercase();
    upper.is_ascii_uppercase().then_some(upper)
}
