//! Hand tracker payloads and options
//!
//! The tracker itself (MediaPipe Hands) runs in JS. Results cross the boundary
//! as JSON and are parsed here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Index of the wrist in a hand's landmark list
pub const WRIST: usize = 0;

/// Options passed to `Hands.setOptions`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandsConfig {
    pub max_num_hands: u32,
    pub model_complexity: u32,
    pub min_detection_confidence: f32,
    pub min_tracking_confidence: f32,
}

impl Default for HandsConfig {
    fn default() -> Self {
        Self {
            max_num_hands: 1,
            model_complexity: 1,
            min_detection_confidence: 0.8,
            min_tracking_confidence: 0.8,
        }
    }
}

/// One normalized landmark, coordinates in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NormalizedLandmark {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: Option<f32>,
}

/// Results of one processed camera frame
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandResults {
    /// One landmark list per detected hand; missing when nothing was found
    #[serde(default)]
    pub multi_hand_landmarks: Vec<Vec<NormalizedLandmark>>,
}

impl HandResults {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Results carrying a single wrist point
    pub fn with_wrist(x: f32, y: f32) -> Self {
        Self {
            multi_hand_landmarks: vec![vec![NormalizedLandmark { x, y, z: None }]],
        }
    }

    /// Wrist of the first hand, if any hand was detected
    pub fn wrist(&self) -> Option<Vec2> {
        self.multi_hand_landmarks
            .first()
            .and_then(|hand| hand.get(WRIST))
            .map(|lm| Vec2::new(lm.x, lm.y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_use_tracker_field_names() {
        let json = serde_json::to_string(&HandsConfig::default()).unwrap();
        assert!(json.contains("\"maxNumHands\":1"));
        assert!(json.contains("\"modelComplexity\":1"));
        assert!(json.contains("\"minDetectionConfidence\":0.8"));
        assert!(json.contains("\"minTrackingConfidence\":0.8"));
    }

    #[test]
    fn test_wrist_is_first_point_of_first_hand() {
        let json = r#"{"multiHandLandmarks":[
            [{"x":0.25,"y":0.75,"z":-0.01},{"x":0.3,"y":0.7,"z":0.0}],
            [{"x":0.9,"y":0.1}]
        ]}"#;
        let results = HandResults::from_json(json).unwrap();
        assert_eq!(results.wrist(), Some(Vec2::new(0.25, 0.75)));
    }

    #[test]
    fn test_no_hands() {
        assert_eq!(HandResults::from_json("{}").unwrap().wrist(), None);
        assert_eq!(
            HandResults::from_json(r#"{"multiHandLandmarks":[]}"#)
                .unwrap()
                .wrist(),
            None
        );
        assert_eq!(
            HandResults::from_json(r#"{"multiHandLandmarks":[[]]}"#)
                .unwrap()
                .wrist(),
            None
        );
    }

    #[test]
    fn test_malformed_payload_is_an_error() {
        assert!(HandResults::from_json("not json").is_err());
        assert!(HandResults::from_json(r#"{"multiHandLandmarks":[[{"x":"a"}]]}"#).is_err());
    }
}
