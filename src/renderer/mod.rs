//! Rendering module
//!
//! `scene` builds draw intents from the game state; `canvas` replays them
//! with the browser's Canvas 2D API.

pub mod scene;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use scene::{DrawCommand, build, palette_color};

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
