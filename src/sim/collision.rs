//! Collision detection between the hand box and falling objects
//!
//! Axis-aligned bounding box test: the object's half size plus the cursor's
//! fixed 50 px half extent, on each axis independently.

use super::state::{CursorPosition, FallingObject};
use crate::consts::CURSOR_HALF_EXTENT;

/// Check whether an object overlaps the hand box.
///
/// Strict on both axes: touching exactly at the reach distance is a miss.
pub fn cursor_overlaps(object: &FallingObject, cursor: &CursorPosition) -> bool {
    let reach = object.size / 2.0 + CURSOR_HALF_EXTENT;
    let delta = (object.pos - cursor.pos).abs();
    delta.x < reach && delta.y < reach
}
