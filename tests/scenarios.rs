// Whole-game scenarios driven through the public API only.

use alphabet_shooter::platform::{MemoryStorage, Storage};
use alphabet_shooter::sim::{GameEvent, GameState, KeyOutcome, Letter, TickStatus, handle_key, tick};
use alphabet_shooter::{HighScore, Session, Tuning};
use glam::Vec2;

fn quiet(tuning: Tuning) -> Tuning {
    Tuning {
        base_spawn_rate: 0.0,
        spawn_rate_step: 0.0,
        ..tuning
    }
}

fn place(state: &mut GameState, symbol: char, pos: Vec2) {
    let id = state.next_entity_id();
    state.letters.push(Letter {
        id,
        pos,
        symbol,
        color: 3,
        speed: 1.0,
        size: 80.0,
        created_at: state.time_ticks,
        rotation: 0.0,
        rotation_speed: 0.0,
        glow: 0.0,
    });
}

#[test]
fn thirty_hits_reach_level_two_and_particles_fade() {
    let mut state = GameState::new(5, quiet(Tuning::default()));
    assert_eq!((state.score, state.level), (0, 1));

    for i in 0..30 {
        let symbol = alphabet_shooter::ALPHABET[i % 26];
        place(&mut state, symbol, Vec2::new(10.0 * i as f32, 100.0));
        let before = state.particles.len();
        let outcome = handle_key(&mut state, &symbol.to_string());
        assert!(matches!(outcome, KeyOutcome::Hit { .. }));
        assert_eq!(state.particles.len(), before + 15);
        tick(&mut state);
    }

    assert_eq!(state.score, 30);
    assert_eq!(state.level, 2);

    for _ in 0..60 {
        tick(&mut state);
    }
    assert!(state.particles.is_empty());
}

#[test]
fn persisted_high_score_is_an_integer() {
    let session = Session::new(
        1,
        Tuning::default(),
        MemoryStorage::with_item(HighScore::STORAGE_KEY, "17"),
    );
    assert_eq!(session.high_score(), 17);
    assert_eq!(session.hud().high_score, Some(17));
}

#[test]
fn missing_high_score_starts_at_zero() {
    let session = Session::new(1, Tuning::default(), MemoryStorage::new());
    assert_eq!(session.high_score(), 0);
}

#[test]
fn escaped_letter_stops_the_loop() {
    let mut state = GameState::new(1, quiet(Tuning::default()));
    place(&mut state, 'W', Vec2::new(0.0, 599.5));
    assert_eq!(tick(&mut state), TickStatus::Stop);
    assert!(state.is_game_over());
    assert_eq!(tick(&mut state), TickStatus::Stop);
}

#[test]
fn high_score_survives_restart_and_new_session() {
    let mut session = Session::new(9, Tuning::classic(), MemoryStorage::new());

    // Let the autopilot score a little, then let letters through
    let mut frames = 0u64;
    while session.tick() == TickStatus::Continue {
        frames += 1;
        if frames < 3_000 && frames % 10 == 0 {
            if let Some(symbol) = alphabet_shooter::sim::autopilot_key(session.state()) {
                session.key_down(&symbol.to_string());
            }
        }
        assert!(frames < 20_000, "a letter should have escaped by now");
    }
    assert!(session.state().is_game_over());
    let first_run = session.state().score;
    assert!(session.high_score() >= first_run);

    assert!(session.restart());
    assert_eq!(session.state().score, 0);
    assert_eq!(session.high_score(), first_run);

    let stored = session.storage().get(HighScore::STORAGE_KEY);
    let expected = if first_run > 0 {
        Some(first_run.to_string())
    } else {
        None
    };
    assert_eq!(stored, expected);
}

#[test]
fn classic_rules_destroy_most_recent_match() {
    let mut state = GameState::new(1, quiet(Tuning::classic()));
    place(&mut state, 'H', Vec2::new(0.0, 500.0));
    place(&mut state, 'H', Vec2::new(100.0, 20.0));
    handle_key(&mut state, "h");
    assert_eq!(state.letters.len(), 1);
    assert_eq!(state.letters[0].pos.y, 500.0);
}

#[test]
fn default_rules_destroy_lowest_match() {
    let mut state = GameState::new(1, quiet(Tuning::default()));
    place(&mut state, 'H', Vec2::new(0.0, 500.0));
    place(&mut state, 'H', Vec2::new(100.0, 20.0));
    handle_key(&mut state, "H");
    assert_eq!(state.letters.len(), 1);
    assert_eq!(state.letters[0].pos.y, 20.0);
}

#[test]
fn events_are_delivered_once() {
    let flood = Tuning {
        base_spawn_rate: 1.0,
        ..Tuning::default()
    };
    let mut session = Session::new(1, flood, MemoryStorage::new());
    assert!(!session.restart());
    assert!(session.drain_events().is_empty());

    let mut frames = 0;
    while session.tick() == TickStatus::Continue {
        frames += 1;
        assert!(frames < 2_000);
    }
    let events = session.drain_events();
    assert_eq!(
        events,
        vec![GameEvent::GameOver {
            score: 0,
            new_record: false
        }]
    );

    assert!(session.restart());
    assert_eq!(session.drain_events(), vec![GameEvent::Restarted]);
    assert!(session.drain_events().is_empty());
}
