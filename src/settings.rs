//! Game settings and tuning knobs
//!
//! Persisted as a JSON file next to the binary. Every knob the sim reads
//! lives here; `World::new` validates them once at construction.

use std::fs;
use std::io;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game settings/tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    // === Playfield ===
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,

    // === Serving ===
    /// Half a served ball's extent in pixels
    pub ball_radius: f32,
    /// Where a fresh ball appears
    pub serve_position: Vec2,
    /// A fresh ball's travel per frame
    pub serve_velocity: Vec2,

    // === Paddles ===
    /// Paddle width and height
    pub paddle_size: Vec2,
    /// Gap between a paddle's center and its goal edge
    pub paddle_inset: f32,
    /// Human paddle travel per frame while a key is held
    pub paddle_speed: f32,

    // === Scoring ===
    /// How far the scoring strip reaches into the field
    pub goal_depth: f32,

    // === Walls ===
    /// Thinnest wall a redraw may pick
    pub wall_thickness_min: f32,
    /// Thickest wall a redraw may pick
    pub wall_thickness_max: f32,
    /// Frames between wall redraws (0 disables them)
    pub wall_refresh_frames: u64,

    // === Computer Player ===
    /// Fraction of field height past which the computer chases (0.0 - 1.0)
    pub track_distance_frac: f32,
    /// Chase speed cap in pixels per frame
    pub track_max_speed: f32,
    /// Sideways speed of a strike swing
    pub strike_speed: f32,

    // === Pacing ===
    /// Host pacing target in frames per second
    pub frame_rate: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            // Playfield
            width: 800.0,
            height: 600.0,

            // Serving - a gentle diagonal toward the human
            ball_radius: 10.0,
            serve_position: Vec2::new(400.0, 300.0),
            serve_velocity: Vec2::new(4.0, -6.0),

            // Paddles
            paddle_size: Vec2::new(100.0, 16.0),
            paddle_inset: 40.0,
            paddle_speed: 6.0,

            // Scoring
            goal_depth: 24.0,

            // Walls - redraw every ten seconds at the default frame rate
            wall_thickness_min: 8.0,
            wall_thickness_max: 28.0,
            wall_refresh_frames: 600,

            // Computer player
            track_distance_frac: 0.25,
            track_max_speed: 7.0,
            strike_speed: 4.0,

            // Pacing
            frame_rate: 60.0,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file, falling back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(err) => {
                    log::warn!("Ignoring malformed settings in {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }

    /// Write settings as pretty-printed JSON
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("tilt-pong-test-missing.json");
        let _ = fs::remove_file(&path);

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.width, Settings::default().width);
        assert_eq!(settings.serve_velocity, Settings::default().serve_velocity);
    }

    #[test]
    fn test_malformed_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("tilt-pong-test-malformed.json");
        fs::write(&path, "{ not json").unwrap();

        let settings = Settings::load_or_default(&path);
        assert_eq!(settings.height, Settings::default().height);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_round_trips_through_disk() {
        let path = std::env::temp_dir().join("tilt-pong-test-roundtrip.json");
        let mut settings = Settings::default();
        settings.wall_refresh_frames = 123;
        settings.serve_velocity = Vec2::new(-3.0, 5.0);

        settings.save(&path).unwrap();
        let loaded = Settings::load_or_default(&path);
        assert_eq!(loaded.wall_refresh_frames, 123);
        assert_eq!(loaded.serve_velocity, Vec2::new(-3.0, 5.0));
        let _ = fs::remove_file(&path);
    }
}
