//! Starfall entry point
//!
//! Headless demo driver: runs a scripted session through the rule engine and
//! logs the events it emits. Integration/rendering collaborators are stubbed
//! by the script, since the engine only reacts to resolver reports.

use starfall::level::LevelConfig;
use starfall::sim::{ContactEvent, GameEvent, GamePhase, GameSession, PairKind, TickInput, tick};

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(42);

    let config = LevelConfig::default();
    let mut session = GameSession::new(seed, &config);
    log::info!("Starfall session started with seed: {seed}");

    // A few frames of plain running
    let run_right = TickInput {
        right: true,
        ..Default::default()
    };
    for _ in 0..60 {
        let out = tick(&mut session, &run_right, true, &[]);
        drain_events(&out.events);
    }

    // Sweep up the whole first wave, one star per frame
    let stars: Vec<u32> = session.collectibles.iter().map(|c| c.id).collect();
    for star in stars {
        let contact = ContactEvent {
            kind: PairKind::Overlap,
            a: session.player.id,
            b: star,
        };
        let out = tick(&mut session, &TickInput::default(), true, &[contact]);
        drain_events(&out.events);
    }

    // The fresh hazard eventually catches the player
    let hazard = session.hazards[0].id;
    let contact = ContactEvent {
        kind: PairKind::Solid,
        a: session.player.id,
        b: hazard,
    };
    let out = tick(&mut session, &TickInput::default(), true, &[contact]);
    drain_events(&out.events);

    assert_eq!(session.phase, GamePhase::GameOver);
    println!(
        "session over: score {}, {} hazards in play, {} ticks",
        session.score,
        session.hazards.len(),
        session.time_ticks
    );
}

fn drain_events(events: &[GameEvent]) {
    for event in events {
        match event {
            GameEvent::ScoreChanged { score } => log::info!("score: {score}"),
            GameEvent::WaveRespawned { wave } => log::info!("wave {wave} respawned"),
            GameEvent::HazardSpawned { id, pos, .. } => {
                log::info!("hazard {id} dropped at x={:.1}", pos.x)
            }
            GameEvent::GameOver => log::info!("game over"),
        }
    }
}
