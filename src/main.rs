//! Duel Pong entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::HtmlCanvasElement;

    use duel_pong::consts::*;
    use duel_pong::renderer::{RenderState, shapes};
    use duel_pong::settings::Settings;
    use duel_pong::sim::{GamePhase, GameState, TickInput, tick};

    /// Game instance holding all state
    struct Game {
        state: GameState,
        render_state: Option<RenderState>,
        input: TickInput,
        settings: Settings,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        // Phase edge detection for the game-over overlay
        last_phase: GamePhase,
    }

    impl Game {
        fn new() -> Self {
            Self {
                state: GameState::new(),
                render_state: None,
                input: TickInput::default(),
                settings: Settings::load(),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                last_phase: GamePhase::Playing,
            }
        }

        /// Advance the simulation by one tick and refresh FPS tracking
        fn update(&mut self, time: f64) {
            let before = self.state.score;
            tick(&mut self.state, &self.input);
            if self.state.score != before {
                log::info!(
                    "Score: Player {} - AI {}",
                    self.state.score.player,
                    self.state.score.ai
                );
            }

            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;

            // Oldest sample is the slot we just advanced to
            let oldest = self.frame_times[self.frame_index];
            if oldest > 0.0 {
                let elapsed = time - oldest;
                if elapsed > 0.0 {
                    self.fps = (60_000.0 / elapsed).round() as u32;
                }
            }
        }

        /// Render the current frame
        fn render(&mut self) {
            let vertices = shapes::scene(&self.state, &self.settings);
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(&vertices) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost) => {
                        render_state.resize(render_state.size.0, render_state.size.1);
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }

        /// Update score displays and the FPS counter in the DOM
        fn update_hud(&self) {
            let window = web_sys::window().unwrap();
            let document = window.document().unwrap();

            if let Some(el) = document.get_element_by_id("player-score") {
                el.set_text_content(Some(&format!("Player: {}", self.state.score.player)));
            }
            if let Some(el) = document.get_element_by_id("ai-score") {
                el.set_text_content(Some(&format!("AI: {}", self.state.score.ai)));
            }
            if let Some(el) = document.get_element_by_id("fps") {
                if self.settings.show_fps {
                    el.set_text_content(Some(&self.fps.to_string()));
                    let _ = el.set_attribute("class", "hud-item");
                } else {
                    let _ = el.set_attribute("class", "hud-item hidden");
                }
            }
        }

        /// Reset for a new game
        fn restart(&mut self) {
            self.state = GameState::new();
            self.input = TickInput::default();
            self.last_phase = GamePhase::Playing;
            log::info!("Game restarted");
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Duel Pong starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("pong")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        // Fixed logical size, scaled by device pixel ratio for crispness
        let dpr = window.device_pixel_ratio();
        let width = (CANVAS_WIDTH as f64 * dpr) as u32;
        let height = (CANVAS_HEIGHT as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let game = Rc::new(RefCell::new(Game::new()));

        // Initialize WebGPU
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU,
            ..Default::default()
        });

        let surface = instance
            .create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))
            .expect("Failed to create surface");

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .expect("Failed to get adapter");

        log::info!("Using adapter: {:?}", adapter.get_info().name);

        let render_state = RenderState::new(surface, &adapter, width, height).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        start_tick_loop(game);

        log::info!("Duel Pong running!");
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down sets a held flag; any unrecognized key is inert
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.up = true,
                    "ArrowDown" => g.input.down = true,
                    "f" | "F" => {
                        g.settings.show_fps = !g.settings.show_fps;
                        g.settings.save();
                    }
                    "c" | "C" => {
                        g.settings.high_contrast = !g.settings.high_contrast;
                        g.settings.save();
                    }
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up clears the matching flag
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
                let mut g = game.borrow_mut();
                match event.key().as_str() {
                    "ArrowUp" => g.input.up = false,
                    "ArrowDown" => g.input.down = false,
                    _ => {}
                }
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    /// Fixed-rate driver: render, then advance, 60 times per second. Each
    /// firing runs to completion on the single browser event queue.
    fn start_tick_loop(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        let closure = {
            let game = game.clone();
            Closure::<dyn FnMut()>::new(move || {
                let mut g = game.borrow_mut();
                g.render();
                g.update(js_sys::Date::now());
                g.update_hud();

                // Game-over is an edge: show the overlay exactly once
                if g.state.phase == GamePhase::Over && g.last_phase == GamePhase::Playing {
                    g.last_phase = GamePhase::Over;
                    drop(g);
                    show_game_over(game.clone());
                }
            })
        };

        let interval_ms = 1000 / TICK_RATE as i32;
        let _ = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            interval_ms,
        );
        closure.forget();
    }

    /// Show the banner and create the one-shot Play Again button
    ///
    /// The click handler removes the button from the DOM, so it can fire at
    /// most once; no handlers accumulate across games.
    fn show_game_over(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        let Some(winner) = game.borrow().state.winner else {
            return;
        };
        log::info!("Game over: {} wins", winner.as_str());

        if let Some(el) = document.get_element_by_id("game-over") {
            el.set_text_content(Some(&format!("Game Over! {} Wins!", winner.as_str())));
            let _ = el.set_attribute("class", "banner");
        }

        let Ok(button) = document.create_element("button") else {
            return;
        };
        let _ = button.set_attribute("id", "play-again");
        button.set_text_content(Some("Play Again"));
        if let Some(body) = document.body() {
            let _ = body.append_child(&button);
        }

        let button_clone = button.clone();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
            button_clone.remove();
            let document = web_sys::window().unwrap().document().unwrap();
            if let Some(el) = document.get_element_by_id("game-over") {
                el.set_text_content(None);
                let _ = el.set_attribute("class", "banner hidden");
            }
            game.borrow_mut().restart();
        });
        let _ = button.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Duel Pong (native) starting...");
    log::info!("Native mode has no renderer - run with `trunk serve` for the web version");

    println!("\nRunning headless simulation...");
    smoke_run();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the AI play against an idle opponent until someone wins
#[cfg(not(target_arch = "wasm32"))]
fn smoke_run() {
    use duel_pong::sim::{GamePhase, GameState, TickInput, tick};

    let mut state = GameState::new();
    let input = TickInput::default();
    while state.phase == GamePhase::Playing && state.time_ticks < 600_000 {
        tick(&mut state, &input);
    }

    match state.winner {
        Some(winner) => println!(
            "✓ Game finished after {} ticks: {} wins {}-{}",
            state.time_ticks,
            winner.as_str(),
            state.score.player,
            state.score.ai
        ),
        None => println!(
            "✓ No winner after {} ticks ({}-{})",
            state.time_ticks, state.score.player, state.score.ai
        ),
    }
}
