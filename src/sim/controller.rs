//! Single owner of the game state
//!
//! Every source of change (tracker frames, the spawn timer, display refreshes,
//! window resizes) becomes a `GameMsg` and goes through `apply`. Each message
//! reads and writes the current state in one step, so scoring never works on a
//! stale copy.

use super::mapper::map_landmark;
use super::spawner::try_spawn;
use super::state::{GameEvent, GameSnapshot, GameState, Viewport};
use super::tick::tick;
use crate::tracking::HandResults;

/// Inputs to the reducer
#[derive(Debug, Clone)]
pub enum GameMsg {
    /// A processed camera frame
    Landmarks(HandResults),
    /// Spawn timer fired
    SpawnTimer,
    /// Display refresh
    Frame,
    /// Window size changed
    Resize(Viewport),
}

pub struct GameController {
    state: GameState,
    events: Vec<GameEvent>,
}

impl GameController {
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        Self {
            state: GameState::new(seed, viewport),
            events: Vec::new(),
        }
    }

    /// Apply one message; returns what happened
    pub fn apply(&mut self, msg: GameMsg) -> &[GameEvent] {
        self.events.clear();
        match msg {
            GameMsg::Landmarks(results) => {
                // No hand: the cursor stays where it was
                if let Some(wrist) = results.wrist() {
                    self.state.cursor = map_landmark(wrist, &self.state.viewport);
                }
            }
            GameMsg::SpawnTimer => {
                if let Some(event) = try_spawn(&mut self.state) {
                    self.events.push(event);
                }
            }
            GameMsg::Frame => tick(&mut self.state, &mut self.events),
            GameMsg::Resize(viewport) => {
                log::info!("Viewport resized to {}x{}", viewport.width, viewport.height);
                self.state.viewport = viewport;
            }
        }
        &self.events
    }

    /// Restart with a fresh seed, keeping the viewport
    pub fn restart(&mut self, seed: u64) {
        let viewport = self.state.viewport;
        self.state = GameState::new(seed, viewport);
        self.events.clear();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.state.snapshot()
    }

    /// Seed the current game was started from
    pub fn seed(&self) -> u64 {
        self.state.seed
    }

    /// Frames simulated since the last (re)start
    pub fn time_ticks(&self) -> u64 {
        self.state.time_ticks
    }

    pub fn score(&self) -> u64 {
        self.state.score
    }
}
