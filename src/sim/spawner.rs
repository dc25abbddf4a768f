//! Object spawner
//!
//! Fired on a fixed wall-clock cadence. The capacity gate keeps the per-frame
//! collision scan to a couple of objects.

use glam::Vec2;
use rand::Rng;

use super::state::{FallingObject, GameEvent, GameState};
use crate::consts::*;

/// Spawn one object if there is room for it
pub fn try_spawn(state: &mut GameState) -> Option<GameEvent> {
    if state.objects.len() >= MAX_ACTIVE_OBJECTS {
        return None;
    }

    // An empty range would panic; a collapsed viewport spawns on the left edge
    let x = if state.viewport.width > 0.0 {
        state.rng.random_range(0.0..state.viewport.width)
    } else {
        0.0
    };
    let size = state.rng.random_range(MIN_OBJECT_SIZE..MAX_OBJECT_SIZE);
    let id = state.next_entity_id();

    state.objects.push(FallingObject {
        id,
        pos: Vec2::new(x, SPAWN_Y),
        size,
        speed: FALL_SPEED,
    });
    log::debug!("Spawned object {} at x={:.1} size={:.1}", id, x, size);

    Some(GameEvent::Spawned { id })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::Viewport;
    use proptest::prelude::*;

    #[test]
    fn test_spawn_properties() {
        let mut state = GameState::new(42, Viewport::new(1000.0, 800.0));
        let event = try_spawn(&mut state);
        assert!(matches!(event, Some(GameEvent::Spawned { .. })));

        let obj = &state.objects[0];
        assert_eq!(obj.pos.y, SPAWN_Y);
        assert!(obj.pos.x >= 0.0 && obj.pos.x < 1000.0);
        assert!(obj.size >= MIN_OBJECT_SIZE && obj.size < MAX_OBJECT_SIZE);
        assert_eq!(obj.speed, FALL_SPEED);
    }

    #[test]
    fn test_full_spawner_is_noop() {
        let mut state = GameState::new(42, Viewport::new(1000.0, 800.0));
        try_spawn(&mut state);
        try_spawn(&mut state);
        assert_eq!(state.objects.len(), 2);

        for _ in 0..3 {
            assert_eq!(try_spawn(&mut state), None);
        }
        assert_eq!(state.objects.len(), 2);
    }

    #[test]
    fn test_zero_width_viewport_spawns_at_left_edge() {
        let mut state = GameState::new(42, Viewport::new(0.0, 800.0));
        try_spawn(&mut state);
        assert_eq!(state.objects[0].pos.x, 0.0);
    }

    #[test]
    fn test_ids_unique_among_active() {
        let mut state = GameState::new(1, Viewport::default());
        try_spawn(&mut state);
        try_spawn(&mut state);
        assert_ne!(state.objects[0].id, state.objects[1].id);
    }

    #[test]
    fn test_same_seed_same_objects() {
        let mut a = GameState::new(99999, Viewport::default());
        let mut b = GameState::new(99999, Viewport::default());
        try_spawn(&mut a);
        try_spawn(&mut b);
        assert_eq!(a.objects, b.objects);
    }

    proptest! {
        #[test]
        fn never_more_than_capacity(seed in any::<u64>(), firings in 0usize..50) {
            let mut state = GameState::new(seed, Viewport::new(1280.0, 720.0));
            for _ in 0..firings {
                try_spawn(&mut state);
                prop_assert!(state.objects.len() <= MAX_ACTIVE_OBJECTS);
            }
        }
    }
}
