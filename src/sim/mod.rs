//! Deterministic rules module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One logical frame per external clock signal
//! - Seeded RNG only
//! - Stable iteration order (by entity ID / pool slot)
//! - No rendering or platform dependencies; physics integration is delegated
//!   to an external resolver that reports contacts back in

pub mod router;
pub mod state;
pub mod tick;

pub use router::{COLLISION_PAIRS, CollisionPair, ContactEvent, PairKind, dispatch};
pub use state::{
    Collectible, EntityTag, Facing, GameEvent, GamePhase, GameSession, Hazard, Platform, Player,
    ResolverCommand, RngState, TickOutput,
};
pub use tick::{Steering, TickInput, steer, tick};
