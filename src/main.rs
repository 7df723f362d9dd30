//! Drift Pilot entry point
//!
//! Handles platform-specific initialization and drives the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{HtmlCanvasElement, KeyboardEvent};

    use drift_pilot::input::keys;
    use drift_pilot::renderer::{RenderState, ShapeBatch};
    use drift_pilot::{DisplaySink, FrameScheduler, InputState, Session, Tuning};

    /// HUD fields and end-of-session popup in the page
    struct DomDisplay {
        document: web_sys::Document,
    }

    impl DomDisplay {
        fn set_text(&self, id: &str, text: &str) {
            if let Some(el) = self.document.get_element_by_id(id) {
                el.set_text_content(Some(text));
            }
        }

        fn set_popup_display(&self, value: &str) {
            if let Some(el) = self.document.get_element_by_id("popup") {
                let _ = el.set_attribute("style", &format!("display: {}", value));
            }
        }
    }

    impl DisplaySink for DomDisplay {
        fn set_items_text(&mut self, text: &str) {
            self.set_text("score", text);
        }

        fn set_lives_text(&mut self, text: &str) {
            self.set_text("lives", text);
        }

        fn show_overlay(&mut self, message: &str) {
            self.set_text("message", message);
            self.set_popup_display("flex");
        }

        fn hide_overlay(&mut self) {
            self.set_popup_display("none");
        }
    }

    /// Game instance holding all state
    struct Game {
        session: Session,
        input: InputState,
        batch: ShapeBatch,
        render_state: Option<RenderState>,
        display: DomDisplay,
    }

    impl Game {
        /// Draw the batch produced by the last tick
        fn render(&mut self) {
            if let Some(ref mut render_state) = self.render_state {
                match render_state.render(self.batch.vertices()) {
                    Ok(_) => {}
                    Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                        render_state.reconfigure();
                    }
                    Err(wgpu::SurfaceError::OutOfMemory) => {
                        log::error!("Out of memory!");
                    }
                    Err(e) => log::warn!("Render error: {:?}", e),
                }
            }
        }
    }

    /// requestAnimationFrame-backed scheduler
    struct AnimationFrames {
        game: Rc<RefCell<Game>>,
    }

    impl FrameScheduler for AnimationFrames {
        fn request_frame(&mut self) {
            request_animation_frame(self.game.clone());
        }
    }

    pub async fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Drift Pilot starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let canvas: HtmlCanvasElement = document
            .get_element_by_id("gameCanvas")
            .expect("no canvas")
            .dyn_into()
            .expect("not a canvas");

        let tuning = Tuning::load();
        let bounds = tuning.bounds();

        // Backing store scaled for sharp output; game coordinates stay logical
        let dpr = window.device_pixel_ratio();
        let width = (bounds.x as f64 * dpr) as u32;
        let height = (bounds.y as f64 * dpr) as u32;
        canvas.set_width(width);
        canvas.set_height(height);

        let seed = js_sys::Date::now() as u64;
        let game = Rc::new(RefCell::new(Game {
            session: Session::new(tuning, seed),
            input: InputState::new(),
            batch: ShapeBatch::new(bounds),
            render_state: None,
            display: DomDisplay {
                document: document.clone(),
            },
        }));

        log::info!("Game initialized with seed: {}", seed);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::BROWSER_WEBGPU | wgpu::Backends::GL,
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

        let render_state = RenderState::new(surface, &adapter, width, height, bounds).await;
        game.borrow_mut().render_state = Some(render_state);

        setup_input_handlers(game.clone());
        setup_restart_button(game.clone());

        // First session: shows HUD, hides popup, requests the first frame
        {
            let mut frames = AnimationFrames { game: game.clone() };
            let mut guard = game.borrow_mut();
            let g = &mut *guard;
            g.session.start(&mut g.display, &mut frames);
        }

        log::info!("Drift Pilot running!");
    }

    fn is_steering_key(code: &str) -> bool {
        matches!(code, keys::UP | keys::DOWN | keys::LEFT | keys::RIGHT)
    }

    fn setup_input_handlers(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();

        // Key down - mark held
        {
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                let code = event.code();
                if is_steering_key(&code) {
                    // Keep arrows from scrolling the page
                    event.prevent_default();
                }
                game.borrow_mut().input.key_down(&code);
            });
            let _ = window
                .add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
            closure.forget();
        }

        // Key up - mark released
        {
            let closure = Closure::<dyn FnMut(_)>::new(move |event: KeyboardEvent| {
                game.borrow_mut().input.key_up(&event.code());
            });
            let _ = window
                .add_event_listener_with_callback("keyup", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            game_loop(game);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>) {
        let mut frames = AnimationFrames { game: game.clone() };
        let mut guard = game.borrow_mut();
        let g = &mut *guard;

        let input = g.input.directions();
        g.session
            .frame(&input, &mut g.batch, &mut g.display, &mut frames);
        g.render();
    }

    fn setup_restart_button(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let document = window.document().unwrap();

        if let Some(btn) = document.get_element_by_id("restart") {
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                let seed = js_sys::Date::now() as u64;
                let mut frames = AnimationFrames { game: game.clone() };
                let mut guard = game.borrow_mut();
                let g = &mut *guard;
                g.session.restart(seed, &mut g.display, &mut frames);

                log::info!("Game restarted with seed: {}", seed);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    wasm_game::run().await;
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Upper bound on frames for a headless run (ten minutes at 60 fps)
#[cfg(not(target_arch = "wasm32"))]
const MAX_HEADLESS_FRAMES: u64 = 60 * 60 * 10;

/// Frame source that hands out requested frames immediately
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
struct HeadlessFrames {
    queued: u32,
}

#[cfg(not(target_arch = "wasm32"))]
impl drift_pilot::FrameScheduler for HeadlessFrames {
    fn request_frame(&mut self) {
        self.queued += 1;
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use drift_pilot::renderer::ShapeBatch;
    use drift_pilot::{DirectionInput, HudText, LoopPhase, Session, Tuning};

    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse::<u64>().ok())
        .unwrap_or(1);
    log::info!("Drift Pilot (native, headless) starting with seed {}", seed);
    log::info!("Run with `trunk serve` for the playable web version");

    let mut session = Session::new(Tuning::load(), seed);
    let mut batch = ShapeBatch::new(session.world().bounds);
    let mut hud = HudText::new();
    let mut frames = HeadlessFrames::default();
    session.start(&mut hud, &mut frames);

    // Nobody at the controls: the ship sits still until the rocks find it
    let input = DirectionInput::default();
    let mut frames_run = 0;
    while frames.queued > 0 && frames_run < MAX_HEADLESS_FRAMES {
        frames.queued -= 1;
        session.frame(&input, &mut batch, &mut hud, &mut frames);
        frames_run += 1;
    }

    match session.phase() {
        LoopPhase::Running => println!("Still flying after {} frames", frames_run),
        LoopPhase::Stopped(outcome) => println!(
            "{:?} after {} frames: {}",
            outcome,
            frames_run,
            hud.overlay.as_deref().unwrap_or_default()
        ),
    }
    println!("{} | {}", hud.items, hud.lives);
}
