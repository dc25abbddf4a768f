//! Landmark to screen mapping

use glam::Vec2;

use super::state::{CursorPosition, Viewport};

/// Map a normalized landmark into screen pixels.
///
/// The camera shows a mirror-like view, so x is flipped: a hand moving right
/// (from the player's point of view) moves the cursor right.
pub fn map_landmark(normalized: Vec2, viewport: &Viewport) -> CursorPosition {
    let x = viewport.width - normalized.x * viewport.width;
    let y = normalized.y * viewport.height;
    CursorPosition::new(x, y)
}
