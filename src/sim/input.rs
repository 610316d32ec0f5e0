//! Keypress resolution
//!
//! Maps a key-down to at most one letter, destroys it and books the score.

use glam::Vec2;
use rand::Rng;

use super::state::{GameEvent, GamePhase, GameState, Particle};
use crate::key_to_symbol;
use crate::tuning::TieBreak;

/// What a key-down did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum KeyOutcome {
    /// Not relevant in the current phase
    Ignored,
    /// Pause toggled
    PauseToggled,
    /// Restart key after game over
    Restarted,
    /// A letter was destroyed
    Hit { symbol: char, center: Vec2 },
    /// Valid letter but nothing on screen matches
    Miss,
}

/// Index of the letter a symbol should destroy, if any
pub fn select_target(state: &GameState, symbol: char, policy: TieBreak) -> Option<usize> {
    let matching = state
        .letters
        .iter()
        .enumerate()
        .filter(|(_, l)| l.symbol == symbol);

    match policy {
        TieBreak::MostRecent => matching.max_by_key(|(_, l)| l.id).map(|(i, _)| i),
        TieBreak::LowestOnScreen => matching
            .max_by(|(_, a), (_, b)| {
                a.pos
                    .y
                    .partial_cmp(&b.pos.y)
                    .unwrap_or(std::cmp::Ordering::Equal)
                    .then(a.id.cmp(&b.id))
            })
            .map(|(i, _)| i),
    }
}

/// Handle one key-down
pub fn handle_key(state: &mut GameState, key: &str) -> KeyOutcome {
    match state.phase {
        GamePhase::GameOver => {
            if key == state.tuning.restart_key {
                state.restart();
                return KeyOutcome::Restarted;
            }
            return KeyOutcome::Ignored;
        }
        GamePhase::Paused => {
            if key == state.tuning.pause_key {
                state.toggle_pause();
                return KeyOutcome::PauseToggled;
            }
            return KeyOutcome::Ignored;
        }
        GamePhase::Running => {}
    }

    if key == state.tuning.pause_key {
        state.toggle_pause();
        return KeyOutcome::PauseToggled;
    }

    let Some(symbol) = key_to_symbol(key) else {
        return KeyOutcome::Ignored;
    };

    let Some(index) = select_target(state, symbol, state.tuning.tie_break) else {
        return KeyOutcome::Miss;
    };

    let center = destroy_letter(state, index);
    KeyOutcome::Hit { symbol, center }
}

/// Remove a letter, burst particles at its center, score and level up
///
/// Returns the letter's center.
pub fn destroy_letter(state: &mut GameState, index: usize) -> Vec2 {
    let letter = state.letters.remove(index);
    let center = letter.center();

    state.score += 1;
    emit_burst(state, center, letter.color);
    state.events.push(GameEvent::LetterDestroyed {
        symbol: letter.symbol,
        center,
        color: letter.color,
    });

    let threshold = state.tuning.level_threshold;
    if state.tuning.has_levels && threshold > 0 && state.score % threshold == 0 {
        state.level += 1;
        log::info!("Level up: {} (score {})", state.level, state.score);
        state.events.push(GameEvent::LevelUp { level: state.level });
    }

    state.update_high_score();
    center
}

/// Push one particle batch at `center`
pub fn emit_burst(state: &mut GameState, center: Vec2, color: u32) {
    let spread = state.tuning.particle_spread;
    for _ in 0..state.tuning.particle_batch {
        let vel = Vec2::new(
            (state.rng.random::<f32>() - 0.5) * spread,
            (state.rng.random::<f32>() - 0.5) * spread,
        );
        state.particles.push(Particle {
            pos: center,
            vel,
            color,
            life: 1.0,
            decay: state.tuning.particle_decay,
            size: state.tuning.particle_size,
        });
    }
}

/// Key an idle/demo player would press: the most urgent letter's symbol
pub fn autopilot_key(state: &GameState) -> Option<char> {
    if !state.is_running() {
        return None;
    }
    state
        .letters
        .iter()
        .max_by(|a, b| {
            a.pos
                .y
                .partial_cmp(&b.pos.y)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|l| l.symbol)
}
