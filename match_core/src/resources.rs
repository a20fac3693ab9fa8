use glam::Vec2;

use crate::components::Side;
use crate::serve::CountdownCue;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this step
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { dt: 0.016, now: 0.0 }
    }
}

/// Match score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub player: u8,   // Left side
    pub opponent: u8, // Right side
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.player += 1,
            Side::Right => self.opponent += 1,
        }
    }

    pub fn for_side(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.player,
            Side::Right => self.opponent,
        }
    }

    pub fn winner(&self, win_score: u8) -> Option<Side> {
        if self.player >= win_score {
            Some(Side::Left)
        } else if self.opponent >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }
}

/// Elapsed-time accounting for the speed ramp. Advances only while a rally
/// is live and unpaused; whole-second boundaries drive the ramp.
#[derive(Debug, Clone, Copy)]
pub struct MatchClock {
    pub elapsed_seconds: u32,
    pub current_ball_speed: f32,
    accumulator: f32,
}

impl MatchClock {
    pub fn new(base_speed: f32) -> Self {
        Self {
            elapsed_seconds: 0,
            current_ball_speed: base_speed,
            accumulator: 0.0,
        }
    }

    /// Accumulate elapsed time; returns how many whole-second boundaries
    /// were crossed (each fires the ramp exactly once).
    pub fn advance(&mut self, dt: f32) -> u32 {
        self.accumulator += dt;
        let mut crossed = 0;
        while self.accumulator >= 1.0 {
            self.accumulator -= 1.0;
            self.elapsed_seconds += 1;
            crossed += 1;
        }
        crossed
    }

    /// Raise the ball speed by one increment, clamped to the cap.
    pub fn raise_speed(&mut self, increment: f32, max_speed: f32) {
        self.current_ball_speed = (self.current_ball_speed + increment).min(max_speed);
    }
}

/// Events that occurred during this tick, for presentation/audio. Cleared at
/// the start of every tick; consumers are never required to acknowledge.
#[derive(Debug, Clone, Default)]
pub struct Events {
    /// A side was awarded a point.
    pub scored: Option<Side>,
    /// The ball came off a paddle; impact point for effects.
    pub paddle_hit: Option<Vec2>,
    /// The ball reflected off the top or bottom wall.
    pub wall_bounce: bool,
    /// A round was reset: ball recentered, countdown beginning.
    pub round_reset: bool,
    /// A countdown cue began ("READY?" / "GO!").
    pub countdown_cue: Option<CountdownCue>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
