//! Serve lifecycle: after every reset the ball sits still while two timed
//! cues play, then launches horizontally. Serves alternate direction.

use glam::Vec2;

use crate::resources::Events;

/// The two countdown cues shown before a serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownCue {
    Ready,
    Go,
}

impl CountdownCue {
    pub fn label(self) -> &'static str {
        match self {
            CountdownCue::Ready => "READY?",
            CountdownCue::Go => "GO!",
        }
    }
}

/// Countdown-and-launch state machine for one serve. Driven by accumulated
/// elapsed time from the frame driver; the session simply stops feeding it
/// time while paused, so a countdown resumes where it left off.
#[derive(Debug, Clone, Copy)]
pub struct ServeState {
    direction: f32, // +1 serves right, -1 serves left
    cue: CountdownCue,
    remaining: f32,
    announced: bool,
}

impl ServeState {
    pub fn new() -> Self {
        Self {
            direction: 1.0,
            cue: CountdownCue::Ready,
            remaining: 0.0,
            announced: false,
        }
    }

    /// Arm the countdown for a fresh round.
    pub fn begin_round(&mut self, cue_secs: f32) {
        self.cue = CountdownCue::Ready;
        self.remaining = cue_secs;
        self.announced = false;
    }

    /// Advance the countdown. Emits each cue into `events` the tick it
    /// begins. Returns `true` once the final cue has elapsed and the ball
    /// should launch.
    pub fn advance(&mut self, dt: f32, cue_secs: f32, events: &mut Events) -> bool {
        if !self.announced {
            events.countdown_cue = Some(self.cue);
            self.announced = true;
        }

        self.remaining -= dt;
        if self.remaining > 0.0 {
            return false;
        }

        match self.cue {
            CountdownCue::Ready => {
                // Carry overshoot into the next cue so total countdown time
                // is exact regardless of frame cadence.
                self.cue = CountdownCue::Go;
                self.remaining += cue_secs;
                self.announced = false;
                false
            }
            CountdownCue::Go => true,
        }
    }

    /// Launch velocity for this serve, flipping direction for the next one.
    pub fn launch(&mut self, ball_speed: f32) -> Vec2 {
        let vel = Vec2::new(ball_speed * self.direction, 0.0);
        self.direction = -self.direction;
        vel
    }

    /// Sign of the next serve's horizontal direction.
    pub fn direction(&self) -> f32 {
        self.direction
    }

    /// The cue currently on screen.
    pub fn current_cue(&self) -> CountdownCue {
        self.cue
    }
}

impl Default for ServeState {
    fn default() -> Self {
        Self::new()
    }
}
