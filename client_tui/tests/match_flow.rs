//! End-to-end flows: a whole match driven through the application, the
//! leaderboard handoff at game over, and pause behavior mid-countdown.

use std::time::Instant;

use crossterm::event::KeyCode;
use client_tui::app::{submit_outcome, App, Scene};
use client_tui::audio::{AudioCues, AudioSettings, NullSink};
use leaderboard::{MemStore, ScoreStore, ScoreTable};
use match_core::{MatchOutcome, MatchPhase, Side};

const DT: f32 = 1.0 / 60.0;

fn headless_app() -> App {
    App::new(
        Box::new(MemStore::new()),
        AudioSettings::default(),
        AudioCues::new(Box::new(NullSink)),
        None,
    )
}

fn start_two_player(app: &mut App) {
    let now = Instant::now();
    app.on_key(KeyCode::Enter, now); // PLAY
    app.on_key(KeyCode::Down, now); // -> TWO PLAYERS
    app.on_key(KeyCode::Enter, now);
    assert!(matches!(app.scene, Scene::Playing { .. }));
}

#[test]
fn test_full_match_submits_rank_one_on_empty_table() {
    let mut app = headless_app();
    start_two_player(&mut app);

    // The right player hides at the bottom; every rally ends in the
    // player's favor until the match is won 5-0.
    for _ in 0..30_000 {
        let now = Instant::now();
        app.on_key(KeyCode::Down, now); // right seat holds down
        app.tick(DT, now);
        if matches!(app.scene, Scene::GameOver { .. }) {
            break;
        }
    }

    let Scene::GameOver { report, name_entry } = &app.scene else {
        panic!("match never finished");
    };
    assert_eq!(report.rank, 1, "first record on an empty table is rank 1");
    assert!(report.is_top_10);
    assert_eq!(report.record.player_score, 5);
    assert_eq!(report.record.opponent_score, 0);
    assert!(name_entry.is_some(), "top-10 run asks for a name");
    assert_eq!(app.table.len(), 1);
}

#[test]
fn test_name_entry_then_play_again() {
    let mut app = headless_app();
    start_two_player(&mut app);

    for _ in 0..30_000 {
        let now = Instant::now();
        app.on_key(KeyCode::Down, now);
        app.tick(DT, now);
        if matches!(app.scene, Scene::GameOver { .. }) {
            break;
        }
    }
    assert!(matches!(app.scene, Scene::GameOver { .. }));

    let now = Instant::now();
    for c in "Ada".chars() {
        app.on_key(KeyCode::Char(c), now);
    }
    app.on_key(KeyCode::Enter, now);
    assert_eq!(app.table.entries()[0].name, "Ada");

    app.on_key(KeyCode::Char('r'), now);
    assert!(matches!(app.scene, Scene::Playing { .. }));
    let session = app.session.as_ref().unwrap();
    assert_eq!(session.phase(), MatchPhase::Idle);
    assert_eq!(session.score().player, 0);
}

#[test]
fn test_pause_mid_countdown_resumes_not_restarts() {
    let mut app = headless_app();
    let now = Instant::now();
    app.on_key(KeyCode::Enter, now); // PLAY
    app.on_key(KeyCode::Enter, now); // ONE PLAYER

    // Enter the countdown and burn half a second of it
    for _ in 0..31 {
        app.tick(DT, Instant::now());
    }
    assert_eq!(
        app.session.as_ref().unwrap().phase(),
        MatchPhase::Countdown
    );

    app.on_key(KeyCode::Esc, Instant::now());
    for _ in 0..300 {
        app.tick(DT, Instant::now());
    }
    let session = app.session.as_ref().unwrap();
    assert!(session.is_paused());
    assert_eq!(session.phase(), MatchPhase::Countdown, "countdown froze");

    app.on_key(KeyCode::Esc, Instant::now());
    let mut ticks = 0;
    while app.session.as_ref().unwrap().phase() != MatchPhase::Rallying {
        app.tick(DT, Instant::now());
        ticks += 1;
        assert!(ticks < 200, "countdown never finished after resume");
    }
    // ~1.5 s of the 2 s countdown remained
    assert!(
        (80..=100).contains(&ticks),
        "resumed countdown took {ticks} ticks"
    );
}

#[test]
fn test_submission_survives_store_round_trip() {
    let mut store = MemStore::new();
    let mut table = ScoreTable::new();

    let outcome = MatchOutcome {
        winner: Side::Left,
        player_score: 5,
        opponent_score: 0,
        elapsed_seconds: 42,
    };
    let report = submit_outcome(&mut table, outcome);
    assert_eq!(report.rank, 1);
    assert_eq!(
        (
            report.record.player_score,
            report.record.opponent_score,
            report.record.elapsed_seconds
        ),
        (5, 0, 42)
    );

    store.save(table.entries());
    let reloaded = ScoreTable::from_records(store.load());
    assert_eq!(reloaded.entries(), table.entries());
}
