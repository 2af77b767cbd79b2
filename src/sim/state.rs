//! Game state and core rule-engine types
//!
//! The `GameSession` owns every live game object plus score and phase; there
//! is no ambient global state. All state needed for replay/determinism lives
//! here.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::level::LevelConfig;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Terminal state; one-way latch, all per-tick updates are suppressed
    GameOver,
}

/// Animation-facing signal requested from the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
    #[default]
    Idle,
}

/// Capability tag identifying what kind of entity an id refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EntityTag {
    Player,
    Platform,
    Collectible,
    Hazard,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub facing: Facing,
    /// Touching a platform along the downward axis (resolver-reported)
    pub grounded: bool,
    /// Visual alert flag, raised on the terminal hazard hit
    pub tinted: bool,
    /// Landing bounce coefficient, consumed by the resolver
    pub bounce: f32,
}

/// Static platform geometry; placed at level setup, never mutated
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Platform {
    pub id: u32,
    pub pos: Vec2,
    pub scale: f32,
}

/// A collectible slot in the fixed pool
///
/// Deactivated on collection, never destroyed; the whole pool respawns as a
/// unit once every slot is inactive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collectible {
    pub id: u32,
    /// Pool slot index; stable across respawn waves
    pub slot: usize,
    pub pos: Vec2,
    pub active: bool,
    /// Original drop position; exactly this x is reused on every respawn
    pub home: Vec2,
    /// Per-slot bounce coefficient, assigned once at session creation
    pub bounce: f32,
}

/// A hazard entity
///
/// Spawned one per completed collectible wave, never removed. Immune to
/// gravity and fully elastic against bounds/platforms; both properties are
/// carried here for the resolver to apply.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hazard {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// RNG stream used for one-time setup (bounce assignment)
    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }

    /// Fresh deterministic stream for a given respawn wave
    pub fn wave_rng(&self, wave: u32) -> Pcg32 {
        let mixed = self
            .seed
            .wrapping_add((wave as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Pcg32::seed_from_u64(mixed)
    }
}

/// Command issued to the external physics resolver
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ResolverCommand {
    SetVelocityX { entity: u32, vx: f32 },
    SetVelocityY { entity: u32, vy: f32 },
    /// Freeze integration; issued once when the session ends
    PauseSimulation,
}

/// Event emitted toward the renderer/HUD sink
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    ScoreChanged { score: u32 },
    /// The whole collectible pool was reactivated
    WaveRespawned { wave: u32 },
    HazardSpawned { id: u32, pos: Vec2, vel: Vec2 },
    GameOver,
}

/// Everything a single tick produced for the external collaborators
#[derive(Debug, Clone, Default)]
pub struct TickOutput {
    /// Velocity/pause commands for the resolver, in issue order
    pub commands: Vec<ResolverCommand>,
    /// Events for the renderer/HUD sink, in emission order
    pub events: Vec<GameEvent>,
    /// Animation state requested for the player this tick
    pub facing: Facing,
}

/// Complete session state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    /// Run seed for reproducibility
    pub seed: u64,
    /// RNG state
    pub rng_state: RngState,
    /// Completed collectible waves (0 before the first full collection)
    pub wave_index: u32,
    /// Score; +SCORE_PER_COLLECTIBLE per unique collection
    pub score: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Current phase
    pub phase: GamePhase,
    /// Arena bounds (width, height)
    pub arena: Vec2,
    /// The player
    pub player: Player,
    /// Static platforms
    pub platforms: Vec<Platform>,
    /// Fixed collectible pool, indexed by slot
    pub collectibles: Vec<Collectible>,
    /// Hazards; population is monotonically non-decreasing
    pub hazards: Vec<Hazard>,
    /// Next entity ID
    next_id: u32,
}

impl GameSession {
    /// Create a new session from a level configuration
    pub fn new(seed: u64, config: &LevelConfig) -> Self {
        let mut session = Self {
            seed,
            rng_state: RngState::new(seed),
            wave_index: 0,
            score: 0,
            time_ticks: 0,
            phase: GamePhase::Playing,
            arena: Vec2::new(config.arena_width, config.arena_height),
            player: Player {
                id: 0,
                pos: config.player_start,
                vel: Vec2::ZERO,
                facing: Facing::Idle,
                grounded: false,
                tinted: false,
                bounce: PLAYER_BOUNCE,
            },
            platforms: Vec::new(),
            collectibles: Vec::new(),
            hazards: Vec::new(),
            next_id: 1,
        };

        session.player.id = session.next_entity_id();

        for spec in &config.platforms {
            let id = session.next_entity_id();
            session.platforms.push(Platform {
                id,
                pos: Vec2::new(spec.x, spec.y),
                scale: spec.scale,
            });
        }

        // Give each collectible a slightly different bounce; the value sticks
        // for the lifetime of the session, including respawns.
        let mut rng = session.rng_state.to_rng();
        for slot in 0..config.collectibles.count {
            let id = session.next_entity_id();
            let home = Vec2::new(
                config.collectibles.start_x + slot as f32 * config.collectibles.step_x,
                config.collectibles.drop_y,
            );
            session.collectibles.push(Collectible {
                id,
                slot,
                pos: home,
                active: true,
                home,
                bounce: rng.random_range(COLLECTIBLE_BOUNCE_MIN..COLLECTIBLE_BOUNCE_MAX),
            });
        }

        session
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Number of collectibles currently in play
    pub fn active_collectibles(&self) -> usize {
        self.collectibles.iter().filter(|c| c.active).count()
    }

    /// Horizontal midline of the arena
    pub fn midline(&self) -> f32 {
        self.arena.x / 2.0
    }

    /// Classify an entity id reported by the resolver
    pub fn tag_of(&self, id: u32) -> Option<EntityTag> {
        if id == self.player.id {
            return Some(EntityTag::Player);
        }
        if self.platforms.iter().any(|p| p.id == id) {
            return Some(EntityTag::Platform);
        }
        if self.collectibles.iter().any(|c| c.id == id) {
            return Some(EntityTag::Collectible);
        }
        if self.hazards.iter().any(|h| h.id == id) {
            return Some(EntityTag::Hazard);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_builds_reference_pool() {
        let session = GameSession::new(7, &LevelConfig::default());

        assert_eq!(session.collectibles.len(), COLLECTIBLE_COUNT);
        assert_eq!(session.active_collectibles(), COLLECTIBLE_COUNT);
        assert!(session.hazards.is_empty());
        assert_eq!(session.score, 0);
        assert_eq!(session.phase, GamePhase::Playing);

        for (slot, c) in session.collectibles.iter().enumerate() {
            assert_eq!(c.slot, slot);
            let expected_x = COLLECTIBLE_START_X + slot as f32 * COLLECTIBLE_STEP_X;
            assert_eq!(c.home.x, expected_x);
            assert_eq!(c.pos.x, expected_x);
            assert!(c.bounce >= COLLECTIBLE_BOUNCE_MIN && c.bounce < COLLECTIBLE_BOUNCE_MAX);
        }
    }

    #[test]
    fn test_bounce_assignment_is_seeded() {
        let a = GameSession::new(42, &LevelConfig::default());
        let b = GameSession::new(42, &LevelConfig::default());
        let bounces_a: Vec<f32> = a.collectibles.iter().map(|c| c.bounce).collect();
        let bounces_b: Vec<f32> = b.collectibles.iter().map(|c| c.bounce).collect();
        assert_eq!(bounces_a, bounces_b);
    }

    #[test]
    fn test_tag_of_classifies_all_entities() {
        let session = GameSession::new(7, &LevelConfig::default());

        assert_eq!(session.tag_of(session.player.id), Some(EntityTag::Player));
        assert_eq!(
            session.tag_of(session.platforms[0].id),
            Some(EntityTag::Platform)
        );
        assert_eq!(
            session.tag_of(session.collectibles[0].id),
            Some(EntityTag::Collectible)
        );
        assert_eq!(session.tag_of(9999), None);
    }

    #[test]
    fn test_entity_ids_are_unique() {
        let session = GameSession::new(7, &LevelConfig::default());
        let mut ids = vec![session.player.id];
        ids.extend(session.platforms.iter().map(|p| p.id));
        ids.extend(session.collectibles.iter().map(|c| c.id));
        let len = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), len);
    }
}
