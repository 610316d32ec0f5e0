//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per frame, movement in pixels per tick
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering, audio or platform dependencies

pub mod input;
pub mod spawner;
pub mod state;
pub mod tick;

pub use input::{KeyOutcome, autopilot_key, handle_key, select_target};
pub use spawner::{difficulty_tier, letter_speed, spawn_probability};
pub use state::{GameEvent, GamePhase, GameState, Letter, Particle};
pub use tick::{TickStatus, tick};
