//! Platform abstraction layer
//!
//! - Loop lifecycle (start/stop of the refresh chain and the spawn timer)
//! - Browser glue for the camera and hand tracker (wasm only)

use std::cell::Cell;
use std::rc::Rc;

#[cfg(target_arch = "wasm32")]
pub mod web;

/// Shared stop flag for self-rescheduling callbacks.
///
/// Clones observe the same flag. A callback checks `is_running` before it
/// schedules its next run; once `cancel` is called the chain ends.
#[derive(Debug, Clone)]
pub struct LoopToken {
    running: Rc<Cell<bool>>,
}

impl Default for LoopToken {
    fn default() -> Self {
        Self::new()
    }
}

impl LoopToken {
    pub fn new() -> Self {
        Self {
            running: Rc::new(Cell::new(true)),
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    pub fn cancel(&self) {
        if self.running.replace(false) {
            log::info!("Loop stopped");
        }
    }
}

/// One step of a self-rescheduling chain.
///
/// Skips `frame` if the token was cancelled while the step was queued, and
/// skips `reschedule` if `frame` (or anything it called) cancelled it.
/// Returns whether the chain continues.
pub fn run_frame(token: &LoopToken, frame: impl FnOnce(), reschedule: impl FnOnce()) -> bool {
    if !token.is_running() {
        return false;
    }
    frame();
    if !token.is_running() {
        return false;
    }
    reschedule();
    true
}

/// A cancel token paired with the resources that must go away with it.
///
/// `stop` cancels the token and drops the guard; dropping the lifecycle
/// stops it.
pub struct Lifecycle<G> {
    token: LoopToken,
    guard: Option<G>,
}

impl<G> Lifecycle<G> {
    pub fn new(guard: G) -> Self {
        Self {
            token: LoopToken::new(),
            guard: Some(guard),
        }
    }

    /// Token to hand to the callbacks this lifecycle owns
    pub fn token(&self) -> LoopToken {
        self.token.clone()
    }

    pub fn is_running(&self) -> bool {
        self.token.is_running()
    }

    pub fn stop(&mut self) {
        self.token.cancel();
        self.guard = None;
    }
}

impl<G> Drop for Lifecycle<G> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Whether a `pagehide` should tear the session down.
///
/// A persisted page goes into the back/forward cache and may be shown again.
pub fn teardown_on_pagehide(persisted: bool) -> bool {
    !persisted
}
