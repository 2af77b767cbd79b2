//! Starfall - rule engine for a small star-collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic game rules (steering, collection, hazard spawning, game over)
//! - `level`: Data-driven level configuration
//!
//! Rendering, input polling, and physics integration are external
//! collaborators: the engine consumes per-tick intent plus resolver contact
//! reports, and produces velocity commands and HUD/renderer events.

pub mod level;
pub mod sim;

pub use level::LevelConfig;
pub use sim::{GamePhase, GameSession, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Arena dimensions (screen space, y grows downward)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    /// Player spawn point
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = 450.0;
    /// Horizontal run speed (px/s)
    pub const PLAYER_SPEED: f32 = 160.0;
    /// Jump impulse magnitude, applied as negative vy (upward)
    pub const JUMP_IMPULSE: f32 = 330.0;
    /// Landing bounce coefficient (cosmetic, consumed by the resolver)
    pub const PLAYER_BOUNCE: f32 = 0.2;

    /// Collectible pool defaults
    pub const COLLECTIBLE_COUNT: usize = 12;
    pub const COLLECTIBLE_START_X: f32 = 12.0;
    pub const COLLECTIBLE_STEP_X: f32 = 70.0;
    /// Respawned collectibles drop in from the top of the arena
    pub const COLLECTIBLE_DROP_Y: f32 = 0.0;
    /// Per-slot bounce coefficient range
    pub const COLLECTIBLE_BOUNCE_MIN: f32 = 0.4;
    pub const COLLECTIBLE_BOUNCE_MAX: f32 = 0.8;
    /// Score awarded per collection
    pub const SCORE_PER_COLLECTIBLE: u32 = 10;

    /// Hazard spawn defaults
    pub const HAZARD_SPAWN_Y: f32 = 16.0;
    /// Horizontal launch speed drawn from [-range, range]
    pub const HAZARD_VX_RANGE: f32 = 200.0;
    /// Small fixed downward drop on spawn
    pub const HAZARD_DROP_VY: f32 = 20.0;
}
