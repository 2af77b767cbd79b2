//! Per-frame rule update
//!
//! One call to [`tick`] is one logical frame. The host loop runs:
//! intent resolution -> `tick` (steering commands out) -> resolver
//! integration -> next `tick` receives the contacts that integration
//! reported. Everything here is synchronous and completes within the tick.

use glam::Vec2;
use rand::Rng;

use super::router::{ContactEvent, dispatch};
use super::state::{Facing, GameEvent, GamePhase, GameSession, Hazard, ResolverCommand, TickOutput};
use crate::consts::*;

/// Pre-resolved directional + jump intent for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Velocity change requested for the player this tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Steering {
    /// Commanded horizontal velocity
    pub vx: f32,
    /// Apply the upward jump impulse this tick
    pub jump: bool,
    pub facing: Facing,
}

/// Translate intent into a steering command
///
/// Pure function of its inputs: left wins over right, horizontal intent
/// selects the facing, and the jump impulse fires only while grounded (it
/// cannot re-trigger mid-air because the resolver reports grounded=false
/// until landing).
pub fn steer(input: &TickInput, grounded: bool) -> Steering {
    let (vx, facing) = if input.left {
        (-PLAYER_SPEED, Facing::Left)
    } else if input.right {
        (PLAYER_SPEED, Facing::Right)
    } else {
        (0.0, Facing::Idle)
    };

    Steering {
        vx,
        jump: input.up && grounded,
        facing,
    }
}

/// Advance the session by one tick
///
/// `grounded` is the resolver-reported touching-down flag for the player;
/// `contacts` are the contact/overlap events the resolver produced for this
/// frame. Once the session is over this is a silent no-op: no commands, no
/// events, no counter advance.
pub fn tick(
    session: &mut GameSession,
    input: &TickInput,
    grounded: bool,
    contacts: &[ContactEvent],
) -> TickOutput {
    let mut out = TickOutput::default();

    if session.phase == GamePhase::GameOver {
        out.facing = session.player.facing;
        return out;
    }

    session.time_ticks += 1;
    session.player.grounded = grounded;

    let steering = steer(input, grounded);
    session.player.facing = steering.facing;
    session.player.vel.x = steering.vx;
    out.commands.push(ResolverCommand::SetVelocityX {
        entity: session.player.id,
        vx: steering.vx,
    });
    if steering.jump {
        session.player.vel.y = -JUMP_IMPULSE;
        out.commands.push(ResolverCommand::SetVelocityY {
            entity: session.player.id,
            vy: -JUMP_IMPULSE,
        });
    }

    // Handlers run in resolver-report order and are idempotent against
    // duplicate reports of the same contact.
    for event in contacts {
        dispatch(session, event, &mut out);
    }

    out.facing = session.player.facing;
    out
}

/// Overlap handler: player touched a collectible
///
/// Idempotent: a collectible that is already inactive (duplicate callback in
/// the same tick, or a stale report) is absorbed without effect.
pub(super) fn collect_collectible(session: &mut GameSession, id: u32, out: &mut TickOutput) {
    let Some(idx) = session.collectibles.iter().position(|c| c.id == id) else {
        return;
    };
    if !session.collectibles[idx].active {
        return;
    }

    session.collectibles[idx].active = false;
    session.score += SCORE_PER_COLLECTIBLE;
    out.events.push(GameEvent::ScoreChanged {
        score: session.score,
    });

    if session.active_collectibles() == 0 {
        respawn_wave(session, out);
    }
}

/// Reactivate the whole pool and escalate difficulty with one new hazard
fn respawn_wave(session: &mut GameSession, out: &mut TickOutput) {
    session.wave_index += 1;

    for c in &mut session.collectibles {
        c.active = true;
        c.pos = c.home;
    }

    log::info!(
        "wave {}: pool of {} respawned",
        session.wave_index,
        session.collectibles.len()
    );
    out.events.push(GameEvent::WaveRespawned {
        wave: session.wave_index,
    });

    spawn_hazard(session, out);
}

/// Spawn one hazard in the half of the arena opposite the player
///
/// The opposite-half draw keeps a fresh hazard from dropping on top of the
/// player. The hazard record carries its launch velocity; the resolver
/// integrates it gravity-free with full restitution.
fn spawn_hazard(session: &mut GameSession, out: &mut TickOutput) {
    let mut rng = session.rng_state.wave_rng(session.wave_index);
    let midline = session.midline();

    let x = if session.player.pos.x < midline {
        rng.random_range(midline..session.arena.x)
    } else {
        rng.random_range(0.0..midline)
    };
    let vel = Vec2::new(
        rng.random_range(-HAZARD_VX_RANGE..=HAZARD_VX_RANGE),
        HAZARD_DROP_VY,
    );

    let id = session.next_entity_id();
    let pos = Vec2::new(x, HAZARD_SPAWN_Y);
    session.hazards.push(Hazard { id, pos, vel });

    log::info!(
        "hazard {id} spawned at x={x:.1} (player at x={:.1}), {} in play",
        session.player.pos.x,
        session.hazards.len()
    );
    out.events.push(GameEvent::HazardSpawned { id, pos, vel });
}

/// Solid-hit handler: player touched a hazard
///
/// Latches the terminal state. A no-op when already over, so simultaneous
/// contact callbacks in one tick cannot double-fire the transition.
pub(super) fn hazard_strike(session: &mut GameSession, out: &mut TickOutput) {
    if session.phase == GamePhase::GameOver {
        return;
    }

    session.phase = GamePhase::GameOver;
    session.player.tinted = true;
    session.player.facing = Facing::Idle;
    session.player.vel = Vec2::ZERO;

    out.commands.push(ResolverCommand::PauseSimulation);
    out.events.push(GameEvent::GameOver);

    log::info!(
        "game over: score {} after {} ticks",
        session.score,
        session.time_ticks
    );
}
