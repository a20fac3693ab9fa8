//! Application state: scene flow, the match frame driver, and the handoff
//! from a finished match to the leaderboard.

use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::KeyCode;
use leaderboard::{ScoreRecord, ScoreStore, ScoreTable};
use match_core::{GameMode, MatchOutcome, MatchPhase, MatchSession};

use crate::audio::{AudioCues, AudioSettings};
use crate::input::MatchKeys;
use crate::paths;

/// Longest name the score table shows.
pub const MAX_NAME_LEN: usize = 12;

/// Payload of the game-over moment: the submitted record and where it
/// landed.
#[derive(Debug, Clone)]
pub struct GameOverReport {
    pub record: ScoreRecord,
    pub rank: usize,
    pub is_top_10: bool,
}

/// Turn a finished match into a leaderboard submission.
pub fn submit_outcome(table: &mut ScoreTable, outcome: MatchOutcome) -> GameOverReport {
    let record = ScoreRecord::new(
        outcome.player_score,
        outcome.opponent_score,
        outcome.elapsed_seconds,
    );
    let snapshot = record.clone();
    let submission = table.submit(record);
    GameOverReport {
        record: snapshot,
        rank: submission.rank,
        is_top_10: submission.made_table,
    }
}

pub enum Scene {
    StartMenu { selected: usize },
    ModeSelect { selected: usize },
    Playing { keys: MatchKeys },
    GameOver {
        report: GameOverReport,
        /// `Some` while the player is still typing their name.
        name_entry: Option<String>,
    },
    HighScores,
    Options { selected: usize },
}

pub const START_MENU_ITEMS: [&str; 4] = ["PLAY", "HIGH SCORES", "OPTIONS", "QUIT"];
pub const MODE_ITEMS: [&str; 3] = ["ONE PLAYER", "TWO PLAYERS", "BACK"];
pub const OPTION_ROWS: [&str; 5] = [
    "MUSIC VOLUME",
    "SFX VOLUME",
    "MUSIC MUTE",
    "SFX MUTE",
    "BACK",
];

pub struct App {
    pub scene: Scene,
    pub settings: AudioSettings,
    pub table: ScoreTable,
    pub session: Option<MatchSession>,
    audio: AudioCues,
    store: Box<dyn ScoreStore>,
    settings_path: Option<PathBuf>,
    last_name: String,
    running: bool,
}

impl App {
    pub fn new(
        store: Box<dyn ScoreStore>,
        settings: AudioSettings,
        audio: AudioCues,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let table = ScoreTable::from_records(store.load());
        Self {
            scene: Scene::StartMenu { selected: 0 },
            settings,
            table,
            session: None,
            audio,
            store,
            settings_path,
            last_name: String::new(),
            running: true,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance the active match by one frame.
    pub fn tick(&mut self, dt: f32, now: Instant) {
        let Scene::Playing { keys } = &self.scene else {
            return;
        };
        let frame = keys.frame(now);
        let Some(session) = self.session.as_mut() else {
            return;
        };

        session.step(dt, frame);
        self.audio.frame_events(&self.settings, session.events());

        if session.phase() == MatchPhase::GameOver {
            let outcome = session.outcome().expect("outcome set at game over");
            let report = submit_outcome(&mut self.table, outcome);
            self.store.save(self.table.entries());
            tracing::info!(
                rank = report.rank,
                top_10 = report.is_top_10,
                "match over: {}-{} in {}s",
                outcome.player_score,
                outcome.opponent_score,
                outcome.elapsed_seconds
            );
            let name_entry = report.is_top_10.then(|| self.last_name.clone());
            self.scene = Scene::GameOver { report, name_entry };
        }
    }

    pub fn on_key(&mut self, code: KeyCode, now: Instant) {
        match &mut self.scene {
            Scene::StartMenu { selected } => match code {
                KeyCode::Up => {
                    *selected = selected.checked_sub(1).unwrap_or(START_MENU_ITEMS.len() - 1);
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Down => {
                    *selected = (*selected + 1) % START_MENU_ITEMS.len();
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Enter => {
                    self.audio.ui_click(&self.settings);
                    match *selected {
                        0 => self.scene = Scene::ModeSelect { selected: 0 },
                        1 => self.scene = Scene::HighScores,
                        2 => self.scene = Scene::Options { selected: 0 },
                        _ => self.running = false,
                    }
                }
                KeyCode::Char('q') | KeyCode::Char('Q') => self.running = false,
                _ => {}
            },
            Scene::ModeSelect { selected } => match code {
                KeyCode::Up => {
                    *selected = selected.checked_sub(1).unwrap_or(MODE_ITEMS.len() - 1);
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Down => {
                    *selected = (*selected + 1) % MODE_ITEMS.len();
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Enter => {
                    self.audio.ui_click(&self.settings);
                    match *selected {
                        0 => self.start_match(GameMode::OnePlayer, now),
                        1 => self.start_match(GameMode::TwoPlayers, now),
                        _ => self.scene = Scene::StartMenu { selected: 0 },
                    }
                }
                KeyCode::Esc => self.scene = Scene::StartMenu { selected: 0 },
                _ => {}
            },
            Scene::Playing { keys } => {
                let paused = self.session.as_ref().is_some_and(|s| s.is_paused());
                match code {
                    KeyCode::Esc => {
                        if let Some(session) = self.session.as_mut() {
                            session.toggle_pause();
                        }
                    }
                    KeyCode::Char('m') | KeyCode::Char('M') if paused => {
                        self.session = None;
                        self.scene = Scene::StartMenu { selected: 0 };
                    }
                    code => {
                        if let Some(session) = self.session.as_ref() {
                            keys.handle_key(code, session.mode(), now);
                        }
                    }
                }
            }
            Scene::GameOver { report, name_entry } => match name_entry {
                Some(buffer) => match code {
                    KeyCode::Enter => {
                        let name = buffer.trim();
                        let name = if name.is_empty() {
                            leaderboard::record::DEFAULT_NAME
                        } else {
                            name
                        };
                        self.table.set_name(report.record.id, name);
                        self.last_name = name.to_owned();
                        self.store.save(self.table.entries());
                        *name_entry = None;
                    }
                    KeyCode::Backspace => {
                        buffer.pop();
                    }
                    KeyCode::Char(c) if buffer.len() < MAX_NAME_LEN && !c.is_control() => {
                        buffer.push(c);
                    }
                    _ => {}
                },
                None => match code {
                    KeyCode::Char('r') | KeyCode::Char('R') => {
                        if let Some(session) = self.session.as_mut() {
                            session.restart();
                            self.scene = Scene::Playing {
                                keys: MatchKeys::new(now),
                            };
                        }
                    }
                    KeyCode::Char('m') | KeyCode::Char('M') | KeyCode::Esc | KeyCode::Enter => {
                        self.session = None;
                        self.scene = Scene::StartMenu { selected: 0 };
                    }
                    _ => {}
                },
            },
            Scene::HighScores => match code {
                KeyCode::Char('c') | KeyCode::Char('C') => {
                    self.table.clear();
                    self.store.save(self.table.entries());
                }
                KeyCode::Esc | KeyCode::Enter => self.scene = Scene::StartMenu { selected: 0 },
                _ => {}
            },
            Scene::Options { selected } => match code {
                KeyCode::Up => {
                    *selected = selected.checked_sub(1).unwrap_or(OPTION_ROWS.len() - 1);
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Down => {
                    *selected = (*selected + 1) % OPTION_ROWS.len();
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Left | KeyCode::Right => {
                    let delta = if code == KeyCode::Left { -0.1 } else { 0.1 };
                    match *selected {
                        0 => self.settings.nudge_music(delta),
                        1 => self.settings.nudge_sfx(delta),
                        2 => self.settings.music_muted = !self.settings.music_muted,
                        3 => self.settings.sfx_muted = !self.settings.sfx_muted,
                        _ => {}
                    }
                    self.audio.ui_click(&self.settings);
                }
                KeyCode::Enter if *selected == OPTION_ROWS.len() - 1 => self.leave_options(),
                KeyCode::Esc => self.leave_options(),
                _ => {}
            },
        }
    }

    fn start_match(&mut self, mode: GameMode, now: Instant) {
        self.session = Some(MatchSession::new(mode));
        self.scene = Scene::Playing {
            keys: MatchKeys::new(now),
        };
    }

    fn leave_options(&mut self) {
        if let Some(path) = &self.settings_path {
            paths::save_settings(path, &self.settings);
        }
        self.scene = Scene::StartMenu { selected: 0 };
    }
}
