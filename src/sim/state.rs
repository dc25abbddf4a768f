//! Game state and core simulation types
//!
//! Everything the reducer mutates lives in `GameState`. The render layer only
//! ever sees `GameSnapshot`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Screen-space viewport (CSS pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(CAMERA_WIDTH as f32, CAMERA_HEIGHT as f32)
    }
}

/// Screen position of the tracked hand
///
/// Keeps its last value while no hand is detected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CursorPosition {
    pub pos: Vec2,
}

impl CursorPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
        }
    }
}

/// A falling circle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallingObject {
    pub id: u32,
    /// Center position
    pub pos: Vec2,
    /// Diameter in pixels
    pub size: f32,
    /// Pixels per frame
    pub speed: f32,
}

impl FallingObject {
    /// Advance by one frame
    pub fn fall(&mut self) {
        self.pos.y += self.speed;
    }

    /// Fully below the viewport
    pub fn is_off_screen(&self, viewport: &Viewport) -> bool {
        self.pos.y >= viewport.height
    }
}

/// Things that happened during one reducer step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Spawned { id: u32 },
    Caught { id: u32, reward: u64 },
    Despawned { id: u32 },
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Seed the spawner RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub viewport: Viewport,
    pub cursor: CursorPosition,
    /// Active objects, in spawn order
    pub objects: Vec<FallingObject>,
    pub score: u64,
    /// Frames simulated so far
    pub time_ticks: u64,
    next_id: u32,
}

impl GameState {
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            viewport,
            cursor: CursorPosition::default(),
            objects: Vec::with_capacity(MAX_ACTIVE_OBJECTS),
            score: 0,
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            cursor: self.cursor,
            objects: self.objects.clone(),
            score: self.score,
        }
    }
}

/// Read-only view handed to the render layer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub cursor: CursorPosition,
    pub objects: Vec<FallingObject>,
    pub score: u64,
}
