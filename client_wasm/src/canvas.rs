//! Canvas 2D execution of the core's draw list

use std::f64::consts::TAU;

use game_core::render::{DrawCommand, SpriteStatus};
use game_core::Config;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement, HtmlImageElement};

const BALL_IMAGE_SRC: &str = "assets/ball.png";

pub struct Canvas {
    ctx: CanvasRenderingContext2d,
    ball_image: HtmlImageElement,
}

impl Canvas {
    pub fn new(document: &Document, canvas_id: &str, config: &Config) -> Result<Self, JsValue> {
        let canvas: HtmlCanvasElement = document
            .get_element_by_id(canvas_id)
            .ok_or_else(|| JsValue::from_str("canvas not found"))?
            .dyn_into()?;
        canvas.set_width(config.arena_width as u32);
        canvas.set_height(config.arena_height as u32);

        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into()?;

        let ball_image = HtmlImageElement::new()?;
        let onerror = Closure::<dyn FnMut()>::new(|| {
            log::warn!("Ball image {} failed to load, drawing a circle", BALL_IMAGE_SRC);
        });
        ball_image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();
        ball_image.set_src(BALL_IMAGE_SRC);

        Ok(Self { ctx, ball_image })
    }

    /// Run `callback` once the ball image has loaded
    pub fn on_sprite_load(&self, callback: &js_sys::Function) {
        self.ball_image.set_onload(Some(callback));
    }

    /// A broken image reports complete with zero natural width
    pub fn sprite_status(&self) -> SpriteStatus {
        if self.ball_image.complete() && self.ball_image.natural_width() > 0 {
            SpriteStatus::Ready
        } else {
            SpriteStatus::Missing
        }
    }

    pub fn draw(&self, commands: &[DrawCommand]) -> Result<(), JsValue> {
        let ctx = &self.ctx;

        for command in commands {
            match *command {
                DrawCommand::Clear { width, height, color } => {
                    ctx.set_fill_style(&JsValue::from_str(color.css()));
                    ctx.fill_rect(0.0, 0.0, width as f64, height as f64);
                }
                DrawCommand::DashedLine {
                    from,
                    to,
                    dash,
                    gap,
                    color,
                } => {
                    ctx.set_stroke_style(&JsValue::from_str(color.css()));
                    let pattern = js_sys::Array::of2(&(dash as f64).into(), &(gap as f64).into());
                    ctx.set_line_dash(&pattern)?;
                    ctx.begin_path();
                    ctx.move_to(from.x as f64, from.y as f64);
                    ctx.line_to(to.x as f64, to.y as f64);
                    ctx.stroke();
                    ctx.set_line_dash(&js_sys::Array::new())?;
                }
                DrawCommand::Rect {
                    x,
                    y,
                    width,
                    height,
                    color,
                } => {
                    ctx.set_fill_style(&JsValue::from_str(color.css()));
                    ctx.fill_rect(x as f64, y as f64, width as f64, height as f64);
                }
                DrawCommand::Sprite {
                    center,
                    size,
                    rotation,
                } => {
                    let half = size as f64 / 2.0;
                    ctx.save();
                    ctx.translate(center.x as f64, center.y as f64)?;
                    ctx.rotate(rotation as f64)?;
                    let drawn = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                        &self.ball_image,
                        -half,
                        -half,
                        size as f64,
                        size as f64,
                    );
                    ctx.restore();
                    drawn?;
                }
                DrawCommand::Circle {
                    center,
                    radius,
                    color,
                } => {
                    ctx.set_fill_style(&JsValue::from_str(color.css()));
                    ctx.begin_path();
                    ctx.arc(center.x as f64, center.y as f64, radius as f64, 0.0, TAU)?;
                    ctx.fill();
                }
            }
        }
        Ok(())
    }
}
