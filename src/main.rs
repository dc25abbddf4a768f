//! Hand Catch entry point
//!
//! Handles platform-specific initialization and runs the game loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;
    use web_sys::{Document, HtmlElement, HtmlVideoElement};

    use hand_catch::audio::{AudioManager, SoundEffect};
    use hand_catch::consts::*;
    use hand_catch::hud::{fps_from_window, score_text};
    use hand_catch::platform::teardown_on_pagehide;
    use hand_catch::platform::web::{GameLoop, HandTracker};
    use hand_catch::sim::{GameController, GameMsg, GameSnapshot, Viewport};
    use hand_catch::{Locale, Settings};

    /// DOM elements that mirror the game snapshot
    struct View {
        document: Document,
        cursor: HtmlElement,
        score: HtmlElement,
        fps: HtmlElement,
        /// One circle per live object, keyed by object id
        objects: Vec<(u32, HtmlElement)>,
        locale: Locale,
    }

    impl View {
        fn new(document: Document, settings: &Settings) -> Result<Self, JsValue> {
            let body = document.body().ok_or_else(|| JsValue::from_str("no body"))?;

            let cursor = create_div(&document, &body)?;
            set_styles(
                &cursor,
                &[
                    ("position", "absolute"),
                    ("width", "100px"),
                    ("height", "100px"),
                    ("background-color", "red"),
                    ("border-radius", "12px"),
                    ("transform", "translate(-50%, -50%)"),
                    ("transition", "left 0.1s linear, top 0.1s linear"),
                ],
            )?;

            let score = create_div(&document, &body)?;
            set_styles(
                &score,
                &[
                    ("position", "absolute"),
                    ("top", "20px"),
                    ("right", "20px"),
                    ("font-size", "24px"),
                    ("font-weight", "bold"),
                    ("color", "white"),
                ],
            )?;

            let fps = create_div(&document, &body)?;
            set_styles(
                &fps,
                &[
                    ("position", "absolute"),
                    ("top", "20px"),
                    ("left", "20px"),
                    ("font-size", "14px"),
                    ("color", "white"),
                ],
            )?;
            if !settings.show_fps {
                fps.style().set_property("display", "none")?;
            }

            Ok(Self {
                document,
                cursor,
                score,
                fps,
                objects: Vec::new(),
                locale: settings.locale,
            })
        }

        fn clear_objects(&mut self) {
            for (_, el) in self.objects.drain(..) {
                el.remove();
            }
        }

        fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), JsValue> {
            let style = self.cursor.style();
            style.set_property("left", &px(snapshot.cursor.pos.x))?;
            style.set_property("top", &px(snapshot.cursor.pos.y))?;

            // Drop circles whose object is gone
            self.objects.retain(|(id, el)| {
                let alive = snapshot.objects.iter().any(|o| o.id == *id);
                if !alive {
                    el.remove();
                }
                alive
            });

            for object in &snapshot.objects {
                let existing = self
                    .objects
                    .iter()
                    .find(|(id, _)| *id == object.id)
                    .map(|(_, el)| el.clone());
                let el = match existing {
                    Some(el) => el,
                    None => {
                        let body = self
                            .document
                            .body()
                            .ok_or_else(|| JsValue::from_str("no body"))?;
                        let el = create_div(&self.document, &body)?;
                        let size = px(object.size);
                        set_styles(
                            &el,
                            &[
                                ("position", "absolute"),
                                ("width", size.as_str()),
                                ("height", size.as_str()),
                                ("background-color", "blue"),
                                ("border-radius", "50%"),
                                ("transform", "translate(-50%, -50%)"),
                            ],
                        )?;
                        self.objects.push((object.id, el.clone()));
                        el
                    }
                };
                let style = el.style();
                style.set_property("left", &px(object.pos.x))?;
                style.set_property("top", &px(object.pos.y))?;
            }

            self.score
                .set_text_content(Some(&score_text(self.locale, snapshot.score)));
            Ok(())
        }
    }

    fn create_div(document: &Document, parent: &HtmlElement) -> Result<HtmlElement, JsValue> {
        let el: HtmlElement = document.create_element("div")?.dyn_into()?;
        parent.append_child(&el)?;
        Ok(el)
    }

    fn set_styles(el: &HtmlElement, styles: &[(&str, &str)]) -> Result<(), JsValue> {
        let style = el.style();
        for (name, value) in styles {
            style.set_property(name, value)?;
        }
        Ok(())
    }

    fn px(v: f32) -> String {
        format!("{}px", v)
    }

    fn window_viewport() -> Viewport {
        let Some(window) = web_sys::window() else {
            return Viewport::default();
        };
        let w = window.inner_width().ok().and_then(|v| v.as_f64());
        let h = window.inner_height().ok().and_then(|v| v.as_f64());
        match (w, h) {
            (Some(w), Some(h)) => Viewport::new(w as f32, h as f32),
            _ => Viewport::default(),
        }
    }

    /// Game instance holding all state
    struct Game {
        controller: GameController,
        view: View,
        audio: AudioManager,
        // FPS tracking
        frame_times: [f64; 60],
        frame_index: usize,
        fps: u32,
        settings: Settings,
    }

    impl Game {
        fn new(seed: u64, view: View, settings: &Settings) -> Self {
            Self {
                controller: GameController::new(seed, window_viewport()),
                view,
                audio: AudioManager::new(settings),
                frame_times: [0.0; 60],
                frame_index: 0,
                fps: 0,
                settings: settings.clone(),
            }
        }

        /// Feed one message through the reducer and react to its events
        fn dispatch(&mut self, msg: GameMsg) {
            for event in self.controller.apply(msg) {
                if let Some(effect) = SoundEffect::for_event(event) {
                    self.audio.play(effect);
                }
            }
        }

        fn frame(&mut self, time: f64) {
            self.dispatch(GameMsg::Frame);

            // Track frame times for FPS
            self.frame_times[self.frame_index] = time;
            self.frame_index = (self.frame_index + 1) % 60;
            if let Some(fps) = fps_from_window(time, self.frame_times[self.frame_index], 60) {
                self.fps = fps;
            }

            if let Err(e) = self.view.render(&self.controller.snapshot()) {
                log::warn!("Render error: {:?}", e);
            }
            if self.settings.show_fps {
                self.view.fps.set_text_content(Some(&format!("FPS: {}", self.fps)));
            }
        }

        fn restart(&mut self, seed: u64) {
            self.controller.restart(seed);
            // Ids start over, so circles cannot be matched up with new objects
            self.view.clear_objects();
            log::info!("Game restarted with seed: {}", self.controller.seed());
        }

        /// Switch the score label language and remember the choice
        fn toggle_locale(&mut self) {
            self.settings.locale = self.settings.locale.toggled();
            self.view.locale = self.settings.locale;
            self.settings.save();
            log::info!("Locale set to {:?}", self.settings.locale);
        }
    }

    /// Everything that must be torn down when the page goes away
    struct Session {
        game_loop: GameLoop,
        tracker: Option<HandTracker>,
    }

    pub async fn run() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        log::info!("Hand Catch starting...");

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let settings = Settings::load();

        // Hidden video element the camera streams into
        let video: HtmlVideoElement = document.create_element("video")?.dyn_into()?;
        video.set_autoplay(true);
        video.set_attribute("playsinline", "")?;
        video.style().set_property("display", "none")?;
        document
            .body()
            .ok_or_else(|| JsValue::from_str("no body"))?
            .append_child(&video)?;

        let seed = js_sys::Date::now() as u64;
        let view = View::new(document.clone(), &settings)?;
        let game = Rc::new(RefCell::new(Game::new(seed, view, &settings)));
        log::info!("Game initialized with seed: {}", seed);

        let game_loop = {
            let spawn_game = game.clone();
            let frame_game = game.clone();
            GameLoop::start(
                SPAWN_INTERVAL_MS,
                move || spawn_game.borrow_mut().dispatch(GameMsg::SpawnTimer),
                move |time| frame_game.borrow_mut().frame(time),
            )?
        };

        let session = Rc::new(RefCell::new(Session {
            game_loop,
            tracker: None,
        }));

        setup_resize_handler(game.clone())?;
        setup_keys(game.clone())?;
        setup_teardown(session.clone())?;

        // Camera failures are not fatal: the cursor just stays put
        let tracker_game = game.clone();
        match HandTracker::start(&video, &settings, move |results| {
            tracker_game
                .borrow_mut()
                .dispatch(GameMsg::Landmarks(results))
        })
        .await
        {
            Ok(tracker) => {
                let mut s = session.borrow_mut();
                if s.game_loop.is_running() {
                    s.tracker = Some(tracker);
                }
            }
            Err(e) => log::warn!("Hand tracking unavailable: {:?}", e),
        }

        log::info!("Hand Catch running!");
        Ok(())
    }

    fn setup_resize_handler(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            game.borrow_mut()
                .dispatch(GameMsg::Resize(window_viewport()));
        });
        window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// R restarts, L switches the HUD language
    fn setup_keys(game: Rc<RefCell<Game>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            match event.key().to_ascii_lowercase().as_str() {
                "r" => game.borrow_mut().restart(js_sys::Date::now() as u64),
                "l" => game.borrow_mut().toggle_locale(),
                _ => {}
            }
        });
        window.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Stop the loop, the spawn timer and the camera when the page is hidden for good
    fn setup_teardown(session: Rc<RefCell<Session>>) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::PageTransitionEvent| {
            // Pages kept in the back/forward cache come back with timers intact
            if !teardown_on_pagehide(event.persisted()) {
                log::info!("Page cached, keeping session");
                return;
            }
            let mut s = session.borrow_mut();
            s.game_loop.stop();
            s.tracker = None;
            log::info!("Session torn down");
        });
        window.add_event_listener_with_callback("pagehide", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn wasm_main() {
    if let Err(e) = wasm_game::run().await {
        log::error!("Startup failed: {:?}", e);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Headless run: a scripted hand sweeps the screen for a minute of frames
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use hand_catch::consts::SPAWN_INTERVAL_MS;
    use hand_catch::hud::score_text;
    use hand_catch::sim::{GameController, GameEvent, GameMsg, Viewport};
    use hand_catch::tracking::HandResults;
    use hand_catch::{Locale, Settings};

    env_logger::init();
    log::info!("Hand Catch (native) starting...");
    log::info!("Native mode runs a headless simulation - run with `trunk serve` for the web version");

    let mut settings = Settings::load();
    if let Some(locale) = std::env::args().nth(1).as_deref().and_then(Locale::from_str) {
        settings.locale = locale;
    }

    const FPS: u64 = 60;
    const FRAMES: u64 = 60 * FPS;
    let frames_per_spawn = FPS * SPAWN_INTERVAL_MS as u64 / 1000;

    let mut game = GameController::new(12345, Viewport::new(1280.0, 720.0));
    let (mut caught, mut missed) = (0u32, 0u32);

    for frame in 0..FRAMES {
        if frame % frames_per_spawn == 0 {
            game.apply(GameMsg::SpawnTimer);
        }

        // Camera runs at half the display rate
        if frame % 2 == 0 {
            let t = frame as f32 / FPS as f32;
            let wrist = HandResults::with_wrist(0.5 + 0.4 * (t * 0.7).sin(), 0.7);
            game.apply(GameMsg::Landmarks(wrist));
        }

        for event in game.apply(GameMsg::Frame) {
            match event {
                GameEvent::Caught { .. } => caught += 1,
                GameEvent::Despawned { .. } => missed += 1,
                GameEvent::Spawned { .. } => {}
            }
        }
    }

    log::info!(
        "Simulated {} frames with seed {}: {} caught, {} missed",
        game.time_ticks(),
        game.seed(),
        caught,
        missed
    );
    println!("{}", score_text(settings.locale, game.score()));
}
