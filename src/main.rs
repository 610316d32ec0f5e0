//! Alphabet Shooter entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Frames between autopilot key presses (idle mode and native demo)
const AUTOPILOT_INTERVAL: u64 = 12;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlAnchorElement, HtmlCanvasElement, HtmlElement, KeyboardEvent};

    use alphabet_shooter::audio::{AudioManager, SoundEffect};
    use alphabet_shooter::platform::LocalStorage;
    use alphabet_shooter::renderer::{self, CanvasRenderer};
    use alphabet_shooter::sim::{GameEvent, KeyOutcome, TickStatus};
    use alphabet_shooter::{Session, Settings, Tuning};

    use super::AUTOPILOT_INTERVAL;

    /// Game instance holding all state
    struct Game {
        session: Session<LocalStorage>,
        renderer: CanvasRenderer,
        settings: Settings,
        audio: AudioManager,
        document: Document,
        /// Frame loop currently scheduled
        running: bool,
        /// Idle/demo mode - autopilot plays the game
        idle_mode: bool,
        frames: u64,
    }

    impl Game {
        /// Run one frame: simulate, react to events, draw
        fn frame(&mut self) -> TickStatus {
            self.frames += 1;
            let status = if self.idle_mode {
                let press = self.frames % AUTOPILOT_INTERVAL == 0;
                self.session.autoplay_frame(press)
            } else {
                self.session.tick()
            };
            self.handle_events();
            self.render();
            status
        }

        fn key_down(&mut self, key: &str) -> KeyOutcome {
            let outcome = self.session.key_down(key);
            self.handle_events();
            if outcome == KeyOutcome::PauseToggled {
                self.update_hud();
            }
            outcome
        }

        /// Audio and DOM reactions to simulation events
        fn handle_events(&mut self) {
            let events = self.session.drain_events();
            if events.is_empty() {
                return;
            }
            for event in &events {
                for effect in SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
                match event {
                    GameEvent::GameOver { .. } => self.show_game_over(),
                    GameEvent::Restarted => self.set_display("gameOver", "none"),
                    _ => {}
                }
            }
            self.update_hud();
        }

        fn render(&self) {
            let commands = renderer::build(self.session.state(), &self.settings);
            self.renderer.render(&commands);
        }

        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_display(&self, id: &str, display: &str) {
            if let Some(el) = self
                .document
                .get_element_by_id(id)
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            {
                let _ = el.style().set_property("display", display);
            }
        }

        /// Update HUD elements in DOM
        fn update_hud(&self) {
            let hud = self.session.hud();
            self.set_text("score", &hud.score.to_string());
            if let Some(level) = hud.level {
                self.set_text("level", &level.to_string());
            }
            if let Some(best) = hud.high_score {
                self.set_text("highScore", &best.to_string());
            }
            self.set_display("pauseOverlay", if hud.paused { "block" } else { "none" });
        }

        /// Fill and show the game-over panel
        fn show_game_over(&self) {
            let Some(summary) = self.session.summary() else {
                return;
            };
            self.set_text("finalScore", &summary.score.to_string());
            self.set_text("finalHighScore", &summary.high_score.to_string());
            self.set_display(
                "newRecord",
                if summary.new_record { "block" } else { "none" },
            );

            let page_url = web_sys::window()
                .and_then(|w| w.location().href().ok())
                .unwrap_or_default();
            let share_url = summary.share_url(&page_url, |s| {
                String::from(js_sys::encode_uri_component(s))
            });
            if let Some(link) = self
                .document
                .get_element_by_id("shareBtn")
                .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok())
            {
                link.set_href(&share_url);
            }

            self.set_display("gameOver", "block");
        }
    }

    pub fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Alphabet Shooter starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .ok_or_else(|| JsValue::from_str("no #gameCanvas element"))?
            .dyn_into()?;

        // Balance overrides ride along on the canvas element
        let tuning = canvas
            .get_attribute("data-tuning")
            .and_then(|json| Tuning::from_json(&json))
            .unwrap_or_default()
            .with_canvas(canvas.width() as f32, canvas.height() as f32);

        let storage = LocalStorage::new();
        let settings = Settings::load(&storage);
        let mut audio = AudioManager::new();
        audio.set_volume(settings.effective_volume());

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(seed, tuning, storage),
            renderer: CanvasRenderer::new(&canvas)?,
            settings,
            audio,
            document,
            running: true,
            idle_mode: false,
            frames: 0,
        }));

        game.borrow().update_hud();
        log::info!("Game initialized with seed: {}", seed);

        setup_keyboard(game.clone());
        setup_auto_pause(game.clone());

        // Start game loop
        request_animation_frame(game);

        log::info!("Alphabet Shooter running!");
        Ok(())
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
            let key = event.key();
            {
                let mut g = game.borrow_mut();
                let g = &mut *g;
                if g.settings.apply_hotkey(&key) {
                    g.audio.set_volume(g.settings.effective_volume());
                    g.settings.save(g.session.storage_mut());
                    return;
                }
            }
            if key == "F2" {
                let mut g = game.borrow_mut();
                g.idle_mode = !g.idle_mode;
                log::info!("Idle mode: {}", g.idle_mode);
                return;
            }

            let restart_loop = {
                let mut g = game.borrow_mut();
                let outcome = g.key_down(&key);
                if outcome == KeyOutcome::Restarted && !g.running {
                    g.running = true;
                    true
                } else {
                    false
                }
            };
            if restart_loop {
                request_animation_frame(game.clone());
            }
        });
        let _ =
            window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn setup_auto_pause(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };

        // Visibility change (tab switch, minimize)
        {
            let game = game.clone();
            let document_clone = document.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
                if document_clone.visibility_state() == web_sys::VisibilityState::Hidden {
                    let mut g = game.borrow_mut();
                    if g.settings.pause_on_blur {
                        g.session.pause();
                        g.update_hud();
                        log::info!("Auto-paused (tab hidden)");
                    }
                }
            });
            let _ = document.add_event_listener_with_callback(
                "visibilitychange",
                closure.as_ref().unchecked_ref(),
            );
            closure.forget();
        }

        // Window blur (click outside)
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::FocusEvent| {
                let mut g = game.borrow_mut();
                if g.settings.pause_on_blur {
                    g.session.pause();
                    g.update_hud();
                    log::info!("Auto-paused (window blur)");
                }
            });
            let _ =
                window.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let status = game.borrow_mut().frame();
        match status {
            TickStatus::Continue => request_animation_frame(game),
            TickStatus::Stop => {
                game.borrow_mut().running = false;
                log::debug!("Frame loop stopped");
            }
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() -> Result<(), JsValue> {
    wasm_game::run()
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use alphabet_shooter::platform::MemoryStorage;
    use alphabet_shooter::sim::{GameEvent, TickStatus};
    use alphabet_shooter::{Session, Tuning};

    /// Ten minutes at 60 fps
    const MAX_DEMO_FRAMES: u64 = 60 * 60 * 10;

    env_logger::init();
    log::info!("Alphabet Shooter (native) starting...");
    log::info!("Native mode runs a headless autopilot demo - use the wasm build to play");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let mut session = Session::new(seed, Tuning::default(), MemoryStorage::new());
    let mut frames = 0;
    let mut level_ups = 0;
    while frames < MAX_DEMO_FRAMES {
        frames += 1;
        let status = session.autoplay_frame(frames % AUTOPILOT_INTERVAL == 0);
        for event in session.drain_events() {
            if let GameEvent::LevelUp { level } = event {
                level_ups += 1;
                log::debug!("Reached level {} at frame {}", level, frames);
            }
        }
        if status == TickStatus::Stop {
            break;
        }
    }
    log::info!("Demo finished with {} level-ups", level_ups);

    let hud = session.hud();
    println!(
        "Demo (seed {}) ended after {} frames: score {}, level {}, best {}",
        seed,
        frames,
        hud.score,
        hud.level.unwrap_or(1),
        session.high_score()
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
