//! Per-frame simulation tick
//!
//! Fall, despawn, catch. Runs once per display refresh.

use super::collision::cursor_overlaps;
use super::state::{GameEvent, GameState};
use crate::consts::CATCH_REWARD;

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, events: &mut Vec<GameEvent>) {
    state.time_ticks += 1;

    for object in &mut state.objects {
        object.fall();
    }

    // Despawn first: anything below the viewport can no longer be caught
    let viewport = state.viewport;
    state.objects.retain(|object| {
        if object.is_off_screen(&viewport) {
            log::debug!("Object {} fell off screen", object.id);
            events.push(GameEvent::Despawned { id: object.id });
            false
        } else {
            true
        }
    });

    let cursor = state.cursor;
    let mut caught = 0u64;
    state.objects.retain(|object| {
        if cursor_overlaps(object, &cursor) {
            log::debug!("Caught object {}", object.id);
            events.push(GameEvent::Caught {
                id: object.id,
                reward: CATCH_REWARD,
            });
            caught += 1;
            false
        } else {
            true
        }
    });

    state.score += caught * CATCH_REWARD;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::{CursorPosition, FallingObject, Viewport};
    use glam::Vec2;
    use proptest::prelude::*;

    fn state_with(objects: Vec<FallingObject>) -> GameState {
        let mut state = GameState::new(12345, Viewport::new(1000.0, 800.0));
        state.objects = objects;
        state
    }

    fn object(id: u32, x: f32, y: f32, size: f32) -> FallingObject {
        FallingObject {
            id,
            pos: Vec2::new(x, y),
            size,
            speed: FALL_SPEED,
        }
    }

    #[test]
    fn test_catch_scores_reward() {
        // Object sits half a frame above the cursor so the fall lands it on top
        let mut state = state_with(vec![object(1, 500.0, 399.5, 40.0)]);
        state.cursor = CursorPosition::new(500.0, 400.0);

        let mut events = Vec::new();
        tick(&mut state, &mut events);

        assert!(state.objects.is_empty());
        assert_eq!(state.score, 5);
        assert_eq!(events, vec![GameEvent::Caught { id: 1, reward: 5 }]);
    }

    #[test]
    fn test_object_on_cursor_center() {
        let mut state = state_with(vec![object(1, 500.0, 400.0, 40.0)]);
        state.cursor = CursorPosition::new(500.0, 400.0);

        let mut events = Vec::new();
        tick(&mut state, &mut events);

        assert!(state.objects.is_empty());
        assert_eq!(state.score, CATCH_REWARD);
    }

    #[test]
    fn test_fall_until_despawn() {
        let mut state = state_with(vec![object(1, 100.0, SPAWN_Y, 40.0)]);
        // Park the cursor far from the fall line
        state.cursor = CursorPosition::new(900.0, 0.0);

        let mut events = Vec::new();
        for _ in 0..1699 {
            tick(&mut state, &mut events);
        }
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].pos.y, 799.5);

        tick(&mut state, &mut events);
        assert!(state.objects.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(events, vec![GameEvent::Despawned { id: 1 }]);
    }

    #[test]
    fn test_despawned_object_is_never_scored() {
        // Cursor near the bottom edge overlaps the despawn line
        let mut state = state_with(vec![object(1, 500.0, 799.5, 40.0)]);
        state.cursor = CursorPosition::new(500.0, 790.0);

        let mut events = Vec::new();
        tick(&mut state, &mut events);

        assert_eq!(state.score, 0);
        assert_eq!(events, vec![GameEvent::Despawned { id: 1 }]);
    }

    #[test]
    fn test_two_catches_in_one_tick() {
        let mut state = state_with(vec![
            object(1, 480.0, 400.0, 40.0),
            object(2, 520.0, 400.0, 40.0),
        ]);
        state.cursor = CursorPosition::new(500.0, 400.0);

        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.score, 10);
        assert_eq!(events.len(), 2);

        // Nothing left to score twice
        tick(&mut state, &mut events);
        assert_eq!(state.score, 10);
    }

    #[test]
    fn test_miss_keeps_object() {
        let mut state = state_with(vec![object(1, 100.0, 100.0, 40.0)]);
        state.cursor = CursorPosition::new(800.0, 600.0);

        let mut events = Vec::new();
        tick(&mut state, &mut events);
        assert_eq!(state.objects.len(), 1);
        assert_eq!(state.objects[0].pos.y, 100.5);
        assert!(events.is_empty());
    }

    proptest! {
        #[test]
        fn off_screen_objects_never_survive(
            ys in proptest::collection::vec(-100.0f32..900.0, 0..=2),
            cx in 0.0f32..1000.0,
            cy in 0.0f32..800.0,
        ) {
            let objects = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| object(i as u32 + 1, 300.0 * i as f32, y, 50.0))
                .collect();
            let mut state = state_with(objects);
            state.cursor = CursorPosition::new(cx, cy);

            let mut events = Vec::new();
            tick(&mut state, &mut events);
            for obj in &state.objects {
                prop_assert!(obj.pos.y < state.viewport.height);
            }
        }

        #[test]
        fn score_grows_by_reward_per_catch(
            ys in proptest::collection::vec(-100.0f32..900.0, 0..=2),
            cx in 0.0f32..1000.0,
            cy in 0.0f32..800.0,
        ) {
            let objects = ys
                .iter()
                .enumerate()
                .map(|(i, &y)| object(i as u32 + 1, 300.0 * i as f32, y, 50.0))
                .collect();
            let mut state = state_with(objects);
            state.cursor = CursorPosition::new(cx, cy);
            let before = state.score;

            let mut events = Vec::new();
            tick(&mut state, &mut events);
            let catches = events
                .iter()
                .filter(|e| matches!(e, GameEvent::Caught { .. }))
                .count() as u64;
            prop_assert_eq!(state.score, before + catches * CATCH_REWARD);
        }
    }
}
