//! Collision event routing
//!
//! Declares which entity pairs the external resolver must test (solid
//! collision vs overlap-only detection) and dispatches reported contacts
//! into the rule handlers. The declarations are made once at the group level
//! and never change at runtime; newly spawned hazards are covered
//! automatically.

use serde::{Deserialize, Serialize};

use super::state::{EntityTag, GameSession, TickOutput};
use super::tick::{collect_collectible, hazard_strike};

/// How the resolver must treat a declared pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairKind {
    /// Physical response: blocking/bouncing per the resolver's integration
    Solid,
    /// Detection only; motion is not altered
    Overlap,
}

/// One entry of the static pair table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionPair {
    pub a: EntityTag,
    pub b: EntityTag,
    pub kind: PairKind,
}

/// The full set of relationships the resolver must test
pub const COLLISION_PAIRS: &[CollisionPair] = &[
    CollisionPair {
        a: EntityTag::Player,
        b: EntityTag::Platform,
        kind: PairKind::Solid,
    },
    CollisionPair {
        a: EntityTag::Collectible,
        b: EntityTag::Platform,
        kind: PairKind::Solid,
    },
    CollisionPair {
        a: EntityTag::Hazard,
        b: EntityTag::Platform,
        kind: PairKind::Solid,
    },
    CollisionPair {
        a: EntityTag::Player,
        b: EntityTag::Collectible,
        kind: PairKind::Overlap,
    },
    CollisionPair {
        a: EntityTag::Player,
        b: EntityTag::Hazard,
        kind: PairKind::Solid,
    },
];

/// Whether a tag pair is declared with the given kind (order-insensitive)
pub fn is_declared(a: EntityTag, b: EntityTag, kind: PairKind) -> bool {
    COLLISION_PAIRS
        .iter()
        .any(|p| p.kind == kind && ((p.a == a && p.b == b) || (p.a == b && p.b == a)))
}

/// A per-tick contact report from the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEvent {
    pub kind: PairKind,
    pub a: u32,
    pub b: u32,
}

/// Route one resolver contact into the rule handlers
///
/// Contacts for pairs the table declares but the rules do not react to
/// (everything against platforms) are absorbed silently; contacts for
/// undeclared pairs or unknown ids are ignored with a debug log. Handlers
/// are idempotent, so duplicate reports of the same contact within a tick
/// are harmless.
pub fn dispatch(session: &mut GameSession, event: &ContactEvent, out: &mut TickOutput) {
    let (Some(tag_a), Some(tag_b)) = (session.tag_of(event.a), session.tag_of(event.b)) else {
        log::debug!("contact with unknown entity ignored: {:?}", event);
        return;
    };

    if !is_declared(tag_a, tag_b, event.kind) {
        log::debug!("contact for undeclared pair ignored: {:?}", event);
        return;
    }

    match (event.kind, tag_a, tag_b) {
        (PairKind::Overlap, EntityTag::Player, EntityTag::Collectible) => {
            collect_collectible(session, event.b, out);
        }
        (PairKind::Overlap, EntityTag::Collectible, EntityTag::Player) => {
            collect_collectible(session, event.a, out);
        }
        (PairKind::Solid, EntityTag::Player, EntityTag::Hazard)
        | (PairKind::Solid, EntityTag::Hazard, EntityTag::Player) => {
            hazard_strike(session, out);
        }
        // Platform contacts are resolved physically by the resolver itself;
        // the grounded flag arrives separately through the tick input.
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LevelConfig;
    use crate::sim::state::{GameEvent, GamePhase};

    fn session() -> GameSession {
        GameSession::new(12345, &LevelConfig::default())
    }

    #[test]
    fn test_pair_table_declarations() {
        assert_eq!(COLLISION_PAIRS.len(), 5);
        assert!(is_declared(
            EntityTag::Player,
            EntityTag::Platform,
            PairKind::Solid
        ));
        assert!(is_declared(
            EntityTag::Collectible,
            EntityTag::Platform,
            PairKind::Solid
        ));
        assert!(is_declared(
            EntityTag::Hazard,
            EntityTag::Platform,
            PairKind::Solid
        ));
        assert!(is_declared(
            EntityTag::Player,
            EntityTag::Collectible,
            PairKind::Overlap
        ));
        assert!(is_declared(
            EntityTag::Player,
            EntityTag::Hazard,
            PairKind::Solid
        ));
        // Collectibles never block the player
        assert!(!is_declared(
            EntityTag::Player,
            EntityTag::Collectible,
            PairKind::Solid
        ));
    }

    #[test]
    fn test_overlap_routes_to_collection() {
        let mut s = session();
        let star = s.collectibles[0].id;
        let player = s.player.id;
        let mut out = TickOutput::default();

        dispatch(
            &mut s,
            &ContactEvent {
                kind: PairKind::Overlap,
                a: player,
                b: star,
            },
            &mut out,
        );

        assert_eq!(s.score, 10);
        assert!(!s.collectibles[0].active);
        assert!(out.events.contains(&GameEvent::ScoreChanged { score: 10 }));
    }

    #[test]
    fn test_overlap_routes_with_reversed_operands() {
        let mut s = session();
        let star = s.collectibles[3].id;
        let player = s.player.id;
        let mut out = TickOutput::default();

        dispatch(
            &mut s,
            &ContactEvent {
                kind: PairKind::Overlap,
                a: star,
                b: player,
            },
            &mut out,
        );

        assert_eq!(s.score, 10);
        assert!(!s.collectibles[3].active);
    }

    #[test]
    fn test_solid_hazard_hit_routes_to_game_over() {
        let mut s = session();
        let id = s.next_entity_id();
        s.hazards.push(crate::sim::state::Hazard {
            id,
            pos: glam::Vec2::new(100.0, 450.0),
            vel: glam::Vec2::ZERO,
        });
        let player = s.player.id;
        let mut out = TickOutput::default();

        dispatch(
            &mut s,
            &ContactEvent {
                kind: PairKind::Solid,
                a: id,
                b: player,
            },
            &mut out,
        );

        assert_eq!(s.phase, GamePhase::GameOver);
        assert!(out.events.contains(&GameEvent::GameOver));
    }

    #[test]
    fn test_platform_contacts_are_absorbed() {
        let mut s = session();
        let platform = s.platforms[0].id;
        let player = s.player.id;
        let mut out = TickOutput::default();

        dispatch(
            &mut s,
            &ContactEvent {
                kind: PairKind::Solid,
                a: player,
                b: platform,
            },
            &mut out,
        );

        assert_eq!(s.score, 0);
        assert_eq!(s.phase, GamePhase::Playing);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_unknown_entity_is_ignored() {
        let mut s = session();
        let player = s.player.id;
        let mut out = TickOutput::default();

        dispatch(
            &mut s,
            &ContactEvent {
                kind: PairKind::Overlap,
                a: player,
                b: 9999,
            },
            &mut out,
        );

        assert_eq!(s.score, 0);
        assert!(out.events.is_empty());
    }

    #[test]
    fn test_undeclared_kind_is_ignored() {
        let mut s = session();
        let star = s.collectibles[0].id;
        let player = s.player.id;
        let mut out = TickOutput::default();

        // Player/collectible is declared overlap-only; a solid report for it
        // is malformed and must be absorbed.
        dispatch(
            &mut s,
            &ContactEvent {
                kind: PairKind::Solid,
                a: player,
                b: star,
            },
            &mut out,
        );

        assert_eq!(s.score, 0);
        assert!(s.collectibles[0].active);
    }
}
