//! Per-frame simulation tick
//!
//! Core game loop that advances the simulation by one frame. Movement is in
//! pixels per tick, so the host drives one tick per display frame.

use super::spawner::maybe_spawn;
use super::state::{GamePhase, GameState};

/// Whether the host should schedule another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    /// Keep the frame loop going
    Continue,
    /// Game over; stop rescheduling until restart
    Stop,
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState) -> TickStatus {
    match state.phase {
        GamePhase::GameOver => return TickStatus::Stop,
        // Keep the loop alive so the paused frame stays on screen
        GamePhase::Paused => return TickStatus::Continue,
        GamePhase::Running => {}
    }

    state.time_ticks += 1;
    let elapsed_ms = state.elapsed_ms();

    maybe_spawn(state);

    // Reverse index order, matching the draw order
    let boundary = state.tuning.bottom_boundary();
    for i in (0..state.letters.len()).rev() {
        let letter = &mut state.letters[i];
        letter.update(elapsed_ms);
        if letter.is_off_screen(boundary) {
            log::debug!(
                "Letter {} escaped at y={:.1} (tick {})",
                letter.symbol,
                letter.pos.y,
                state.time_ticks
            );
            state.game_over();
            return TickStatus::Stop;
        }
    }

    let gravity = state.tuning.particle_gravity;
    for particle in state.particles.iter_mut() {
        particle.update(gravity);
    }
    state.particles.retain(|p| !p.is_dead());

    TickStatus::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::input::handle_key;
    use crate::sim::state::{GameEvent, Letter};
    use crate::tuning::Tuning;
    use glam::Vec2;

    /// Tuning with spawning switched off so tests place letters by hand
    fn quiet() -> Tuning {
        Tuning {
            base_spawn_rate: 0.0,
            spawn_rate_step: 0.0,
            ..Tuning::default()
        }
    }

    fn push_letter(state: &mut GameState, symbol: char, y: f32, speed: f32) {
        let id = state.next_entity_id();
        state.letters.push(Letter {
            id,
            pos: Vec2::new(0.0, y),
            symbol,
            color: 0,
            speed,
            size: 80.0,
            created_at: 0,
            rotation: 0.0,
            rotation_speed: 0.0,
            glow: 0.0,
        });
    }

    #[test]
    fn test_letters_fall_by_speed() {
        let mut state = GameState::new(1, quiet());
        push_letter(&mut state, 'A', 0.0, 1.0);
        push_letter(&mut state, 'B', 10.0, 2.5);
        for _ in 0..4 {
            assert_eq!(tick(&mut state), TickStatus::Continue);
        }
        assert_eq!(state.letters[0].pos.y, 4.0);
        assert_eq!(state.letters[1].pos.y, 20.0);
        assert_eq!(state.time_ticks, 4);
    }

    #[test]
    fn test_off_screen_ends_game_and_aborts_tick() {
        let mut state = GameState::new(1, quiet());
        // Index 0 is updated last; it must not move once index 1 escapes
        push_letter(&mut state, 'A', 100.0, 1.0);
        push_letter(&mut state, 'B', 600.0, 1.0);
        push_letter(&mut state, 'C', 50.0, 1.0);
        state.particles.push(crate::sim::state::Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ONE,
            color: 0,
            life: 1.0,
            decay: 0.02,
            size: 3.0,
        });

        assert_eq!(tick(&mut state), TickStatus::Stop);
        assert!(state.is_game_over());
        // C (index 2) moved before B escaped, A never did
        assert_eq!(state.letters[2].pos.y, 51.0);
        assert_eq!(state.letters[1].pos.y, 601.0);
        assert_eq!(state.letters[0].pos.y, 100.0);
        assert_eq!(state.particles[0].pos, Vec2::ZERO);

        // Further ticks are no-ops
        let ticks = state.time_ticks;
        assert_eq!(tick(&mut state), TickStatus::Stop);
        assert_eq!(state.time_ticks, ticks);
        assert_eq!(state.letters[1].pos.y, 601.0);

        let overs = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::GameOver { .. }))
            .count();
        assert_eq!(overs, 1);
    }

    #[test]
    fn test_boundary_margin() {
        let mut state = GameState::new(1, Tuning { off_screen_margin: 80.0, ..quiet() });
        push_letter(&mut state, 'A', 600.0, 1.0);
        assert_eq!(tick(&mut state), TickStatus::Continue);
        for _ in 0..79 {
            tick(&mut state);
        }
        assert!(state.is_running());
        assert_eq!(tick(&mut state), TickStatus::Stop);
    }

    #[test]
    fn test_particles_expire() {
        let mut state = GameState::new(1, quiet());
        push_letter(&mut state, 'A', 0.0, 0.0);
        handle_key(&mut state, "A");
        assert_eq!(state.particles.len(), 15);
        for _ in 0..49 {
            tick(&mut state);
        }
        assert_eq!(state.particles.len(), 15);
        for _ in 0..2 {
            tick(&mut state);
        }
        assert!(state.particles.is_empty());
    }

    #[test]
    fn test_paused_tick_is_noop() {
        let mut state = GameState::new(1, quiet());
        push_letter(&mut state, 'A', 0.0, 1.0);
        state.toggle_pause();
        assert_eq!(tick(&mut state), TickStatus::Continue);
        assert_eq!(state.letters[0].pos.y, 0.0);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, Tuning::default());
        let mut state2 = GameState::new(99999, Tuning::default());

        for i in 0..2000 {
            tick(&mut state1);
            tick(&mut state2);
            if i % 7 == 0 {
                let key = crate::sim::input::autopilot_key(&state1).map(String::from);
                if let Some(key) = key {
                    handle_key(&mut state1, &key);
                    handle_key(&mut state2, &key);
                }
            }
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.letters.len(), state2.letters.len());
        for (a, b) in state1.letters.iter().zip(&state2.letters) {
            assert_eq!(a.symbol, b.symbol);
            assert_eq!(a.pos, b.pos);
        }
    }
}
