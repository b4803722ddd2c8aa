//! Browser shell for the Pong game
//!
//! Draws on a 2D canvas and feeds keyboard input to the simulation in
//! `game_core`. The page is expected to provide:
//!
//! - `<canvas id="gameCanvas">`
//! - `#player-score`, `#computer-score` and `#message` for the HUD
//! - an optional `#restart-btn`
//!
//! The ball sprite is loaded from `assets/ball.png`; when it is missing the
//! ball is drawn as a plain circle.

pub mod input;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod canvas;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info)
        .map_err(|e| JsValue::from_str(&format!("Failed to init logger: {}", e)))?;

    app::run()
}
