//! Letter spawning and difficulty scaling

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Letter};
use crate::tuning::Tuning;
use crate::{ALPHABET, PALETTE};

/// Difficulty tier driving spawn rate and fall speed
///
/// With levels enabled the tier follows the level, otherwise the score.
pub fn difficulty_tier(score: u64, level: u32, tuning: &Tuning) -> u32 {
    if tuning.has_levels {
        level.saturating_sub(1)
    } else {
        tuning.tier_for_score(score)
    }
}

/// Per-tick spawn probability, clamped to [0, 1]
pub fn spawn_probability(tier: u32, tuning: &Tuning) -> f64 {
    let p = tuning.base_spawn_rate as f64 + tier as f64 * tuning.spawn_rate_step as f64;
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}

/// Fall speed for letters spawned at this tier
pub fn letter_speed(tier: u32, tuning: &Tuning) -> f32 {
    tuning.base_speed + tier as f32 * tuning.speed_step
}

/// Roll the dice for this tick; returns the new letter's ID if one spawned
pub fn maybe_spawn(state: &mut GameState) -> Option<u32> {
    let tier = difficulty_tier(state.score, state.level, &state.tuning);
    let p = spawn_probability(tier, &state.tuning);
    if !state.rng.random_bool(p) {
        return None;
    }
    Some(spawn_letter(state, tier))
}

/// Unconditionally add one letter above the top edge
pub fn spawn_letter(state: &mut GameState, tier: u32) -> u32 {
    let size = state.tuning.letter_size;
    let max_x = (state.tuning.canvas_width - size).max(0.0);
    let x = if max_x > 0.0 {
        state.rng.random_range(0.0..max_x)
    } else {
        0.0
    };
    let symbol = ALPHABET[state.rng.random_range(0..ALPHABET.len())];
    let color = state.rng.random_range(0..PALETTE.len()) as u32;
    let rotation_speed = (state.rng.random::<f32>() - 0.5) * state.tuning.spin;

    let id = state.next_entity_id();
    state.letters.push(Letter {
        id,
        pos: Vec2::new(x, -size),
        symbol,
        color,
        speed: letter_speed(tier, &state.tuning),
        size,
        created_at: state.time_ticks,
        rotation: 0.0,
        rotation_speed,
        glow: 0.0,
    });
    log::trace!("Spawned {} at x={:.0} (tier {})", symbol, x, tier);
    id
}
