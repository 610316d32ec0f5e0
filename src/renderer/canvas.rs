//! Canvas 2D backend
//!
//! Replays [`DrawCommand`]s on a `CanvasRenderingContext2d`.

use std::f64::consts::TAU;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::scene::{BACKGROUND_STOPS, DrawCommand, SHADOW_COLOR, SHADOW_OFFSET, STAR_COLOR};

pub struct CanvasRenderer {
    ctx: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    pub fn new(canvas: &HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self { ctx })
    }

    pub fn render(&self, commands: &[DrawCommand]) {
        for command in commands {
            match command {
                DrawCommand::Background { width, height } => {
                    self.background(*width as f64, *height as f64)
                }
                DrawCommand::Star { pos, radius } => {
                    self.ctx.set_fill_style_str(STAR_COLOR);
                    self.circle(pos.x as f64, pos.y as f64, *radius as f64);
                }
                DrawCommand::Glyph {
                    symbol,
                    center,
                    rotation,
                    size,
                    color,
                    glow,
                } => self.glyph(*symbol, center.x, center.y, *rotation, *size, color, *glow),
                DrawCommand::Circle {
                    pos,
                    radius,
                    color,
                    alpha,
                } => {
                    self.ctx.save();
                    self.ctx.set_global_alpha(*alpha as f64);
                    self.ctx.set_fill_style_str(color);
                    self.circle(pos.x as f64, pos.y as f64, *radius as f64);
                    self.ctx.restore();
                }
            }
        }
    }

    fn background(&self, width: f64, height: f64) {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        for (offset, color) in BACKGROUND_STOPS {
            gradient.add_color_stop(offset, color).ok();
        }
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
    }

    fn circle(&self, x: f64, y: f64, radius: f64) {
        self.ctx.begin_path();
        if self.ctx.arc(x, y, radius, 0.0, TAU).is_ok() {
            self.ctx.fill();
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn glyph(
        &self,
        symbol: char,
        x: f32,
        y: f32,
        rotation: f32,
        size: f32,
        color: &str,
        glow: Option<f32>,
    ) {
        let mut buf = [0u8; 4];
        let text = symbol.encode_utf8(&mut buf);

        self.ctx.save();
        self.ctx.translate(x as f64, y as f64).ok();
        self.ctx.rotate(rotation as f64).ok();

        if let Some(blur) = glow {
            self.ctx.set_shadow_color(color);
            self.ctx.set_shadow_blur(blur as f64);
        }

        self.ctx.set_font(&format!("bold {}px Arial", size));
        self.ctx.set_text_align("center");
        self.ctx.set_text_baseline("middle");

        let offset = SHADOW_OFFSET as f64;
        self.ctx.set_fill_style_str(SHADOW_COLOR);
        self.ctx.fill_text(text, offset, offset).ok();

        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, 0.0, 0.0).ok();

        self.ctx.restore();
    }
}
