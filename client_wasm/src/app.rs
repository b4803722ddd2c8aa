//! Wiring between the browser and the frame driver

use std::cell::RefCell;
use std::rc::Rc;

use game_core::render::frame_commands;
use game_core::{Config, FrameDriver, FrameScheduler, Game, GameRng, Phase, Snapshot};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent};

use crate::canvas::Canvas;
use crate::input::{handle_key_down, handle_key_up, Command};

const CANVAS_ID: &str = "gameCanvas";

/// Score and status text around the canvas; every element is optional
struct Hud {
    player_score: Option<Element>,
    computer_score: Option<Element>,
    message: Option<Element>,
}

impl Hud {
    fn new(document: &Document) -> Self {
        Self {
            player_score: document.get_element_by_id("player-score"),
            computer_score: document.get_element_by_id("computer-score"),
            message: document.get_element_by_id("message"),
        }
    }

    fn update(&self, snapshot: &Snapshot) {
        if let Some(el) = &self.player_score {
            el.set_text_content(Some(&snapshot.player_score.to_string()));
        }
        if let Some(el) = &self.computer_score {
            el.set_text_content(Some(&snapshot.computer_score.to_string()));
        }
        if let Some(el) = &self.message {
            let text = match (snapshot.phase, snapshot.winner_label()) {
                (Phase::Idle, _) => "Press Space to start".to_string(),
                (Phase::Over, Some(winner)) => format!("The {} wins! Press R to play again", winner),
                _ => String::new(),
            };
            el.set_text_content(Some(&text));
        }
    }
}

struct App {
    driver: FrameDriver,
    canvas: Canvas,
    hud: Hud,
}

impl App {
    fn render(&self, snapshot: &Snapshot) {
        let config = &self.driver.game().config;
        let commands = frame_commands(snapshot, config, self.canvas.sprite_status());
        if let Err(e) = self.canvas.draw(&commands) {
            log::error!("Draw failed: {:?}", e);
        }
        self.hud.update(snapshot);
    }

    fn redraw(&self) {
        self.render(&self.driver.snapshot());
    }
}

/// `requestAnimationFrame` as a frame scheduler
struct AnimationFrames {
    app: Rc<RefCell<App>>,
}

impl FrameScheduler for AnimationFrames {
    fn request_frame(&mut self) {
        let Some(window) = web_sys::window() else {
            log::error!("No window to schedule a frame on");
            return;
        };
        let app = self.app.clone();
        let closure = Closure::once(move |_timestamp: f64| {
            on_frame(app);
        });
        if let Err(e) = window.request_animation_frame(closure.as_ref().unchecked_ref()) {
            log::error!("requestAnimationFrame failed: {:?}", e);
        }
        closure.forget();
    }
}

fn on_frame(app: Rc<RefCell<App>>) {
    let mut scheduler = AnimationFrames { app: app.clone() };
    let mut app = app.borrow_mut();
    let now_ms = js_sys::Date::now() as u64;

    if let Some(snapshot) = app.driver.run_frame(now_ms, &mut scheduler) {
        app.render(&snapshot);
        if snapshot.phase == Phase::Over {
            log::info!("Match over: {} wins", snapshot.winner_label().unwrap_or("nobody"));
        }
    }
}

fn apply(app: &Rc<RefCell<App>>, command: Command) {
    match command {
        Command::Intent(intent) => app.borrow_mut().driver.set_intent(intent),
        Command::Start => {
            let mut scheduler = AnimationFrames { app: app.clone() };
            let mut app = app.borrow_mut();
            if app.driver.start(&mut scheduler).success() {
                app.redraw();
            }
        }
        Command::Reset => {
            let mut app = app.borrow_mut();
            let snapshot = app.driver.reset();
            app.render(&snapshot);
        }
    }
}

pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let config = Config::new();
    let canvas = Canvas::new(&document, CANVAS_ID, &config)?;
    let seed = js_sys::Date::now() as u64;
    let game = Game::new(config, Box::new(GameRng::new(seed)));
    log::info!("Game initialized with seed: {}", seed);

    let app = Rc::new(RefCell::new(App {
        driver: FrameDriver::new(game),
        canvas,
        hud: Hud::new(&document),
    }));

    setup_sprite_redraw(&app);
    setup_keyboard(&window, &app)?;
    setup_restart_button(&document, &app)?;

    app.borrow().redraw();
    log::info!("Pong ready");
    Ok(())
}

fn setup_sprite_redraw(app: &Rc<RefCell<App>>) {
    let handle = app.clone();
    let closure = Closure::<dyn FnMut()>::new(move || {
        // A running match picks the sprite up on its next frame
        if let Ok(app) = handle.try_borrow() {
            app.redraw();
        }
    });
    app.borrow().canvas.on_sprite_load(closure.as_ref().unchecked_ref());
    closure.forget();
}

fn setup_keyboard(window: &web_sys::Window, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(command) = handle_key_down(&event.code()) {
                event.prevent_default();
                apply(&app, command);
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    {
        let app = app.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            if let Some(command) = handle_key_up(&event.code()) {
                apply(&app, command);
            }
        });
        window.add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref())?;
        closure.forget();
    }
    Ok(())
}

fn setup_restart_button(document: &Document, app: &Rc<RefCell<App>>) -> Result<(), JsValue> {
    let Some(btn) = document.get_element_by_id("restart-btn") else {
        return Ok(());
    };
    let app = app.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
        apply(&app, Command::Reset);
        log::info!("Match reset from button");
    });
    btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}
