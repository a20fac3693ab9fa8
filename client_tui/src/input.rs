//! Key handling for the match scene.
//!
//! Terminals report key presses (with auto-repeat) but no releases, so a
//! held paddle key is emulated as a short pulse that each repeat extends.
//! Movement stops a beat after the player lets go.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;
use match_core::systems::{InputFrame, MoveDir};
use match_core::GameMode;

/// How long a single press keeps the paddle moving. Terminal auto-repeat
/// arrives well inside this window, so a held key reads as continuous.
pub const HOLD_PULSE: Duration = Duration::from_millis(150);

/// Pulse state for one paddle.
#[derive(Debug, Clone, Copy)]
pub struct PaddleHold {
    up_until: Instant,
    down_until: Instant,
}

impl PaddleHold {
    pub fn new(now: Instant) -> Self {
        Self {
            up_until: now,
            down_until: now,
        }
    }

    pub fn press_up(&mut self, now: Instant) {
        self.up_until = now + HOLD_PULSE;
    }

    pub fn press_down(&mut self, now: Instant) {
        self.down_until = now + HOLD_PULSE;
    }

    /// Current intent; on overlapping pulses the most recent press wins.
    pub fn dir(&self, now: Instant) -> MoveDir {
        let up = self.up_until > now;
        let down = self.down_until > now;
        match (up, down) {
            (true, false) => MoveDir::Up,
            (false, true) => MoveDir::Down,
            (true, true) => {
                if self.up_until >= self.down_until {
                    MoveDir::Up
                } else {
                    MoveDir::Down
                }
            }
            (false, false) => MoveDir::Hold,
        }
    }
}

/// Both paddles' pulse state plus the key map for the active mode.
#[derive(Debug, Clone, Copy)]
pub struct MatchKeys {
    pub left: PaddleHold,
    pub right: PaddleHold,
}

impl MatchKeys {
    pub fn new(now: Instant) -> Self {
        Self {
            left: PaddleHold::new(now),
            right: PaddleHold::new(now),
        }
    }

    /// Route a movement key. One player drives the left paddle with either
    /// hand; with two players W/S is the left seat and the arrows the right.
    pub fn handle_key(&mut self, code: KeyCode, mode: GameMode, now: Instant) {
        match mode {
            GameMode::OnePlayer => match code {
                KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Up => self.left.press_up(now),
                KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Down => {
                    self.left.press_down(now)
                }
                _ => {}
            },
            GameMode::TwoPlayers => match code {
                KeyCode::Char('w') | KeyCode::Char('W') => self.left.press_up(now),
                KeyCode::Char('s') | KeyCode::Char('S') => self.left.press_down(now),
                KeyCode::Up => self.right.press_up(now),
                KeyCode::Down => self.right.press_down(now),
                _ => {}
            },
        }
    }

    pub fn frame(&self, now: Instant) -> InputFrame {
        InputFrame {
            left: self.left.dir(now),
            right: self.right.dir(now),
        }
    }
}
