//! Browser scheduling and hand tracker glue

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlVideoElement;

use super::{run_frame, Lifecycle, LoopToken};
use crate::settings::Settings;
use crate::tracking::HandResults;

#[wasm_bindgen(module = "/js/hand_tracking.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn start_hand_tracking(
        video: &HtmlVideoElement,
        options_json: &str,
        width: u32,
        height: u32,
        on_results: &js_sys::Function,
    ) -> Result<js_sys::Promise, JsValue>;

    fn stop_hand_tracking(handle: &JsValue);
}

/// Running camera + tracker pair. Stops both on drop.
pub struct HandTracker {
    handle: JsValue,
    _on_results: Closure<dyn FnMut(String)>,
}

impl HandTracker {
    /// Start the camera against `video` and feed every processed frame to
    /// `on_results`. Frames with a malformed payload are dropped.
    pub async fn start(
        video: &HtmlVideoElement,
        settings: &Settings,
        mut on_results: impl FnMut(HandResults) + 'static,
    ) -> Result<Self, JsValue> {
        let on_results = Closure::<dyn FnMut(String)>::new(move |json: String| {
            match HandResults::from_json(&json) {
                Ok(results) => on_results(results),
                Err(e) => log::warn!("Dropping malformed tracker frame: {}", e),
            }
        });

        let options = serde_json::to_string(&settings.hands)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let promise = start_hand_tracking(
            video,
            &options,
            settings.camera.width,
            settings.camera.height,
            on_results.as_ref().unchecked_ref(),
        )?;
        let handle = JsFuture::from(promise).await?;

        log::info!(
            "Camera started at {}x{}",
            settings.camera.width,
            settings.camera.height
        );
        Ok(Self {
            handle,
            _on_results: on_results,
        })
    }
}

impl Drop for HandTracker {
    fn drop(&mut self) {
        stop_hand_tracking(&self.handle);
    }
}

/// Repeating wall-clock timer. Cleared on drop.
pub struct Interval {
    handle: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(timeout_ms: i32, callback: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let closure = Closure::<dyn FnMut()>::new(callback);
        let handle = window.set_interval_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            timeout_ms,
        )?;
        Ok(Self {
            handle,
            _closure: closure,
        })
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(window) = web_sys::window() {
            window.clear_interval_with_handle(self.handle);
        }
    }
}

/// Schedule `callback` on every display refresh until `token` is cancelled
pub fn request_animation_frame(token: LoopToken, callback: Rc<RefCell<dyn FnMut(f64)>>) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |time: f64| {
        let next = callback.clone();
        run_frame(
            &token,
            || (&mut *callback.borrow_mut())(time),
            || request_animation_frame(token.clone(), next),
        );
    });
    let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Frame loop + spawn timer, started and stopped together
pub struct GameLoop {
    lifecycle: Lifecycle<Interval>,
}

impl GameLoop {
    pub fn start(
        spawn_interval_ms: i32,
        on_spawn: impl FnMut() + 'static,
        on_frame: impl FnMut(f64) + 'static,
    ) -> Result<Self, JsValue> {
        let lifecycle = Lifecycle::new(Interval::new(spawn_interval_ms, on_spawn)?);
        request_animation_frame(lifecycle.token(), Rc::new(RefCell::new(on_frame)));
        log::info!("Game loop started");
        Ok(Self { lifecycle })
    }

    pub fn is_running(&self) -> bool {
        self.lifecycle.is_running()
    }

    /// Stop rescheduling frames and clear the spawn timer
    pub fn stop(&mut self) {
        self.lifecycle.stop();
    }
}
