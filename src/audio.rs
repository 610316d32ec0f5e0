//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects - no external files needed!
//! Each effect is a short schedule of tones; the whole schedule is handed to
//! the audio clock at once, so nothing here ever feeds back into the game.

use crate::sim::GameEvent;

/// Oscillator shape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    Sine,
    Square,
    Sawtooth,
    Triangle,
}

/// One tone in a cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneStep {
    /// Seconds after the cue starts
    pub delay: f64,
    /// Hz
    pub frequency: f32,
    /// Seconds
    pub duration: f64,
    pub waveform: Waveform,
}

impl ToneStep {
    const fn new(delay: f64, frequency: f32, duration: f64, waveform: Waveform) -> Self {
        Self {
            delay,
            frequency,
            duration,
            waveform,
        }
    }
}

/// Peak gain of every tone before volume scaling
pub const TONE_GAIN: f32 = 0.3;
/// Gain a tone fades to (exponential ramps cannot reach 0)
pub const TONE_FLOOR: f32 = 0.01;

const HIT_CUE: [ToneStep; 1] = [ToneStep::new(0.0, 800.0, 0.1, Waveform::Square)];
const LEVEL_UP_CUE: [ToneStep; 3] = [
    ToneStep::new(0.0, 1000.0, 0.3, Waveform::Sine),
    ToneStep::new(0.1, 1200.0, 0.3, Waveform::Sine),
    ToneStep::new(0.2, 1400.0, 0.3, Waveform::Sine),
];
const GAME_OVER_CUE: [ToneStep; 1] = [ToneStep::new(0.0, 200.0, 0.5, Waveform::Sawtooth)];
const NEW_RECORD_CUE: [ToneStep; 4] = [
    ToneStep::new(0.0, 1000.0, 0.2, Waveform::Triangle),
    ToneStep::new(0.08, 1200.0, 0.2, Waveform::Triangle),
    ToneStep::new(0.16, 1400.0, 0.2, Waveform::Triangle),
    ToneStep::new(0.24, 1600.0, 0.3, Waveform::Triangle),
];

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Letter shot down
    Hit,
    /// Level reached
    LevelUp,
    /// Letter got through
    GameOver,
    /// Run ended above the previous best
    NewRecord,
}

impl SoundEffect {
    /// The tones this effect plays
    pub fn cue(&self) -> &'static [ToneStep] {
        match self {
            SoundEffect::Hit => &HIT_CUE,
            SoundEffect::LevelUp => &LEVEL_UP_CUE,
            SoundEffect::GameOver => &GAME_OVER_CUE,
            SoundEffect::NewRecord => &NEW_RECORD_CUE,
        }
    }

    /// Sounds triggered by a game event
    pub fn for_event(event: &GameEvent) -> Vec<SoundEffect> {
        match event {
            GameEvent::LetterDestroyed { .. } => vec![SoundEffect::Hit],
            GameEvent::LevelUp { .. } => vec![SoundEffect::LevelUp],
            GameEvent::GameOver { new_record, .. } => {
                if *new_record {
                    vec![SoundEffect::GameOver, SoundEffect::NewRecord]
                } else {
                    vec![SoundEffect::GameOver]
                }
            }
            GameEvent::HighScore { .. } | GameEvent::Restarted => Vec::new(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::AudioManager;

#[cfg(target_arch = "wasm32")]
mod web {
    use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

    use super::{SoundEffect, TONE_FLOOR, TONE_GAIN, ToneStep, Waveform};

    impl From<Waveform> for OscillatorType {
        fn from(w: Waveform) -> Self {
            match w {
                Waveform::Sine => OscillatorType::Sine,
                Waveform::Square => OscillatorType::Square,
                Waveform::Sawtooth => OscillatorType::Sawtooth,
                Waveform::Triangle => OscillatorType::Triangle,
            }
        }
    }

    /// Audio manager for the game
    pub struct AudioManager {
        ctx: Option<AudioContext>,
        volume: f32,
    }

    impl Default for AudioManager {
        fn default() -> Self {
            Self::new()
        }
    }

    impl AudioManager {
        pub fn new() -> Self {
            // Try to create audio context (may fail if not in secure context)
            let ctx = AudioContext::new().ok();
            if ctx.is_none() {
                log::warn!("Failed to create AudioContext - audio disabled");
            }
            Self { ctx, volume: 0.8 }
        }

        /// Set effective volume (0.0 - 1.0)
        pub fn set_volume(&mut self, vol: f32) {
            self.volume = vol.clamp(0.0, 1.0);
        }

        /// Play a sound effect
        pub fn play(&self, effect: SoundEffect) {
            if self.volume <= 0.0 {
                return;
            }
            let Some(ctx) = &self.ctx else { return };

            // Resume context if suspended (browsers require user gesture)
            if ctx.state() == web_sys::AudioContextState::Suspended {
                let _ = ctx.resume();
            }

            let start = ctx.current_time();
            for step in effect.cue() {
                self.play_tone(ctx, start, step);
            }
        }

        /// Create an oscillator with gain envelope
        fn create_osc(
            &self,
            ctx: &AudioContext,
            freq: f32,
            osc_type: OscillatorType,
        ) -> Option<(OscillatorNode, GainNode)> {
            let osc = ctx.create_oscillator().ok()?;
            let gain = ctx.create_gain().ok()?;

            osc.set_type(osc_type);
            osc.frequency().set_value(freq);
            osc.connect_with_audio_node(&gain).ok()?;
            gain.connect_with_audio_node(&ctx.destination()).ok()?;

            Some((osc, gain))
        }

        fn play_tone(&self, ctx: &AudioContext, start: f64, step: &ToneStep) {
            let Some((osc, gain)) = self.create_osc(ctx, step.frequency, step.waveform.into())
            else {
                return;
            };
            let t = start + step.delay;

            gain.gain()
                .set_value_at_time(TONE_GAIN * self.volume, t)
                .ok();
            gain.gain()
                .exponential_ramp_to_value_at_time(TONE_FLOOR, t + step.duration)
                .ok();

            osc.start_with_when(t).ok();
            osc.stop_with_when(t + step.duration).ok();
        }
    }
}
