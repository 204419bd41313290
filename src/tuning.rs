//! Data-driven gameplay tuning
//!
//! Defaults give the classic court feel; a JSON file can override any
//! subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Gameplay numbers read at match creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Speed a paddle starts moving at when a key goes down
    pub paddle_start_speed: f32,
    /// Per-tick speed growth while a paddle keeps moving in bounds (> 1)
    pub paddle_accel: f32,
    pub ball_radius: f32,
    /// Serve speed magnitude ranges. The x range is wider to bias the ball
    /// toward horizontal travel; minimums must stay >= 1 so neither axis
    /// can serve at zero.
    pub ball_speed_x_min: f32,
    pub ball_speed_x_max: f32,
    pub ball_speed_y_min: f32,
    pub ball_speed_y_max: f32,
    /// Distance from the left edge at which the left goal line sits
    pub goal_margin: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_start_speed: PADDLE_START_SPEED,
            paddle_accel: PADDLE_ACCEL,
            ball_radius: BALL_RADIUS,
            ball_speed_x_min: BALL_SPEED_X_MIN,
            ball_speed_x_max: BALL_SPEED_X_MAX,
            ball_speed_y_min: BALL_SPEED_Y_MIN,
            ball_speed_y_max: BALL_SPEED_Y_MAX,
            goal_margin: GOAL_MARGIN,
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults when the file
    /// is missing or malformed. A bad tuning file is never fatal.
    pub fn load_or_default(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("Ignoring malformed tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_override_keeps_remaining_defaults() {
        let tuning: Tuning =
            serde_json::from_str(r#"{"paddle_height": 120.0, "paddle_accel": 1.1}"#).unwrap();
        assert_eq!(tuning.paddle_height, 120.0);
        assert_eq!(tuning.paddle_accel, 1.1);
        assert_eq!(tuning.paddle_width, PADDLE_WIDTH);
        assert_eq!(tuning.goal_margin, GOAL_MARGIN);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let tuning = Tuning::load_or_default(Path::new("/nonexistent/tuning.json"));
        assert_eq!(tuning.paddle_height, PADDLE_HEIGHT);
        assert_eq!(tuning.ball_speed_x_max, BALL_SPEED_X_MAX);
    }
}
