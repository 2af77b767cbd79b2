//! Level configuration
//!
//! Supplied by the external asset/level loader: platform placements, the
//! collectible row parameters, and arena bounds. Loadable from JSON; the
//! `Default` impl is the reference layout.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Placement of one static platform
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlatformSpec {
    pub x: f32,
    pub y: f32,
    /// Horizontal scale applied to the base platform sprite
    #[serde(default = "default_scale")]
    pub scale: f32,
}

fn default_scale() -> f32 {
    1.0
}

/// Parameters of the evenly spaced collectible row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollectibleRow {
    pub count: usize,
    pub start_x: f32,
    pub step_x: f32,
    /// Spawn/respawn drop height
    pub drop_y: f32,
}

/// Full level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelConfig {
    pub arena_width: f32,
    pub arena_height: f32,
    pub player_start: Vec2,
    pub platforms: Vec<PlatformSpec>,
    pub collectibles: CollectibleRow,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            player_start: Vec2::new(PLAYER_START_X, PLAYER_START_Y),
            platforms: vec![
                // Ground, scaled to span the arena width
                PlatformSpec {
                    x: 400.0,
                    y: 568.0,
                    scale: 2.0,
                },
                // Ledges
                PlatformSpec {
                    x: 600.0,
                    y: 400.0,
                    scale: 1.0,
                },
                PlatformSpec {
                    x: 50.0,
                    y: 250.0,
                    scale: 1.0,
                },
                PlatformSpec {
                    x: 750.0,
                    y: 220.0,
                    scale: 1.0,
                },
            ],
            collectibles: CollectibleRow {
                count: COLLECTIBLE_COUNT,
                start_x: COLLECTIBLE_START_X,
                step_x: COLLECTIBLE_STEP_X,
                drop_y: COLLECTIBLE_DROP_Y,
            },
        }
    }
}

impl LevelConfig {
    /// Parse a level from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the level to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
