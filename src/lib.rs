//! Hand Catch - catch falling objects with your hand
//!
//! Core modules:
//! - `sim`: Deterministic simulation (mapping, spawning, physics, scoring)
//! - `tracking`: Hand landmark payloads and tracker options
//! - `platform`: Browser loop lifecycle and JS glue
//! - `hud`: Score label formatting
//! - `audio`: Catch/miss sound effects
//! - `settings`: Persisted preferences

pub mod audio;
pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;
pub mod tracking;

pub use settings::{Locale, Settings};

/// Game configuration constants
pub mod consts {
    /// Points awarded per caught object
    pub const CATCH_REWARD: u64 = 5;
    /// Maximum number of falling objects alive at once
    pub const MAX_ACTIVE_OBJECTS: usize = 2;
    /// Spawner cadence (wall clock)
    pub const SPAWN_INTERVAL_MS: i32 = 1000;

    /// New objects start fully above the viewport
    pub const SPAWN_Y: f32 = -50.0;
    /// Object diameter range, [min, max)
    pub const MIN_OBJECT_SIZE: f32 = 30.0;
    pub const MAX_OBJECT_SIZE: f32 = 80.0;
    /// Fall speed in pixels per frame
    pub const FALL_SPEED: f32 = 0.5;

    /// Half of the 100x100 hand box
    pub const CURSOR_HALF_EXTENT: f32 = 50.0;

    /// Requested camera capture size
    pub const CAMERA_WIDTH: u32 = 640;
    pub const CAMERA_HEIGHT: u32 = 480;
}
