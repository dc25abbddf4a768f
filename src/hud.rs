//! HUD text

use crate::settings::Locale;

/// Score label, e.g. `Score: 15`
pub fn score_text(locale: Locale, score: u64) -> String {
    format!("{}: {}", locale.score_label(), score)
}

/// FPS from a ring of frame timestamps (ms), oldest at `oldest`
pub fn fps_from_window(newest_ms: f64, oldest_ms: f64, frames: usize) -> Option<u32> {
    if oldest_ms <= 0.0 {
        return None;
    }
    let elapsed = newest_ms - oldest_ms;
    if elapsed <= 0.0 {
        return None;
    }
    Some((frames as f64 * 1000.0 / elapsed).round() as u32)
}
