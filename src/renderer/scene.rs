//! Draw intents
//!
//! Turns a [`GameState`] into a flat list of drawing commands. Knows nothing
//! about the graphics API; the canvas backend replays the list.

use glam::Vec2;

use crate::PALETTE;
use crate::settings::Settings;
use crate::sim::GameState;

/// Background gradient, top to bottom
pub const BACKGROUND_STOPS: [(f32, &str); 3] =
    [(0.0, "#1a1a2e"), (0.5, "#16213e"), (1.0, "#0f3460")];
pub const STAR_COLOR: &str = "rgba(255, 255, 255, 0.8)";
/// Letter drop shadow
pub const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.3)";
pub const SHADOW_OFFSET: f32 = 3.0;

/// One drawing step
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the play area with the vertical gradient
    Background { width: f32, height: f32 },
    /// A twinkling background dot
    Star { pos: Vec2, radius: f32 },
    /// A letter, drawn centered and rotated about its center
    Glyph {
        symbol: char,
        center: Vec2,
        rotation: f32,
        size: f32,
        color: &'static str,
        /// Shadow blur for the glow, `None` when glow is off
        glow: Option<f32>,
    },
    /// A filled, alpha-blended circle
    Circle {
        pos: Vec2,
        radius: f32,
        color: &'static str,
        alpha: f32,
    },
}

/// Palette lookup (wraps out-of-range indices)
pub fn palette_color(index: u32) -> &'static str {
    PALETTE[index as usize % PALETTE.len()]
}

/// Build the frame for the current state
pub fn build(state: &GameState, settings: &Settings) -> Vec<DrawCommand> {
    let width = state.tuning.canvas_width;
    let height = state.tuning.canvas_height;
    let elapsed_ms = state.elapsed_ms();

    let mut commands = Vec::with_capacity(
        1 + settings.star_count() + state.letters.len() + state.particles.len(),
    );
    commands.push(DrawCommand::Background { width, height });

    for i in 0..settings.star_count() {
        let fi = i as f32;
        let radius = (elapsed_ms * 0.001 + fi).sin() + 1.0;
        if radius <= 0.0 {
            continue;
        }
        commands.push(DrawCommand::Star {
            pos: Vec2::new((fi * 137.5) % width, (fi * 73.3) % height),
            radius,
        });
    }

    let glow = settings.effective_glow();
    let spin = settings.effective_spin();
    for letter in state.letters.iter().rev() {
        commands.push(DrawCommand::Glyph {
            symbol: letter.symbol,
            center: letter.center(),
            rotation: if spin { letter.rotation } else { 0.0 },
            size: letter.size,
            color: palette_color(letter.color),
            glow: glow.then(|| 20.0 + letter.glow * 10.0),
        });
    }

    if settings.particles {
        for particle in state.particles.iter().rev() {
            commands.push(DrawCommand::Circle {
                pos: particle.pos,
                radius: particle.size,
                color: palette_color(particle.color),
                alpha: particle.life.clamp(0.0, 1.0),
            });
        }
    }

    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::QualityPreset;
    use crate::sim::{Letter, Particle};
    use crate::tuning::Tuning;

    fn state_with_entities() -> GameState {
        let mut state = GameState::new(1, Tuning::default());
        state.letters.push(Letter {
            id: 1,
            pos: Vec2::new(0.0, 0.0),
            symbol: 'R',
            color: 16,
            speed: 1.0,
            size: 80.0,
            created_at: 0,
            rotation: 0.5,
            rotation_speed: 0.0,
            glow: 1.0,
        });
        state.particles.push(Particle {
            pos: Vec2::new(5.0, 5.0),
            vel: Vec2::ZERO,
            color: 0,
            life: 0.4,
            decay: 0.02,
            size: 3.0,
        });
        state
    }

    #[test]
    fn test_frame_layout() {
        let state = state_with_entities();
        let settings = Settings::default();
        let commands = build(&state, &settings);

        assert!(matches!(commands[0], DrawCommand::Background { .. }));
        let stars = commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Star { .. }))
            .count();
        assert!(stars <= 50);

        let glyph = commands
            .iter()
            .find(|c| matches!(c, DrawCommand::Glyph { .. }))
            .unwrap();
        assert_eq!(
            glyph,
            &DrawCommand::Glyph {
                symbol: 'R',
                center: Vec2::new(40.0, 40.0),
                rotation: 0.5,
                size: 80.0,
                color: PALETTE[1],
                glow: Some(30.0),
            }
        );
        assert!(matches!(
            commands.last(),
            Some(DrawCommand::Circle { alpha, .. }) if (*alpha - 0.4).abs() < 1e-6
        ));
    }

    #[test]
    fn test_low_quality_and_reduced_motion() {
        let state = state_with_entities();
        let settings = Settings {
            quality: QualityPreset::Low,
            reduced_motion: true,
            particles: false,
            ..Settings::default()
        };
        let commands = build(&state, &settings);
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[1],
            DrawCommand::Glyph { rotation, glow: None, .. } if rotation == 0.0
        ));
    }
}
