//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One reducer (`GameController::apply`) owns every mutation
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod controller;
pub mod mapper;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::cursor_overlaps;
pub use controller::{GameController, GameMsg};
pub use mapper::map_landmark;
pub use spawner::try_spawn;
pub use state::{CursorPosition, FallingObject, GameEvent, GameSnapshot, GameState, Viewport};
pub use tick::tick;
