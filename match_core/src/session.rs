//! Match controller: owns the world, resources, and phase machine for one
//! match, and exposes the tick entry point the frame driver calls.

use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Control, Paddle, Side};
use crate::config::Config;
use crate::field::Field;
use crate::resources::{Events, MatchClock, Score, Time};
use crate::serve::ServeState;
use crate::systems::{apply_intents, move_paddles, InputFrame};
use crate::{create_ball, create_paddle, step};

/// Exactly one of these is active per match at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Created, first tick not yet taken.
    Idle,
    /// Ball parked, serve cues playing.
    Countdown,
    /// Ball live.
    Rallying,
    /// A goal was just detected; held for one tick before the next serve.
    Scored,
    /// Win threshold reached; ticks are frozen until restart.
    GameOver,
}

/// Who steers the right paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    OnePlayer,
    TwoPlayers,
}

impl GameMode {
    fn right_control(self) -> Control {
        match self {
            GameMode::OnePlayer => Control::Ai,
            GameMode::TwoPlayers => Control::Human,
        }
    }
}

/// Final payload of a finished match, handed to the leaderboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchOutcome {
    pub winner: Side,
    pub player_score: u8,
    pub opponent_score: u8,
    pub elapsed_seconds: u32,
}

/// One match: paddles, ball, score, clocks, and the phase machine. The frame
/// driver calls [`MatchSession::step`] once per frame with the elapsed time
/// and that frame's input intents; everything else is queried off the
/// session between ticks.
pub struct MatchSession {
    world: World,
    time: Time,
    field: Field,
    config: Config,
    score: Score,
    clock: MatchClock,
    events: Events,
    serve: ServeState,
    phase: MatchPhase,
    paused: bool,
    mode: GameMode,
    outcome: Option<MatchOutcome>,
}

impl MatchSession {
    pub fn new(mode: GameMode) -> Self {
        Self::with_config(mode, Config::new())
    }

    pub fn with_config(mode: GameMode, config: Config) -> Self {
        let field = Field::from_config(&config);
        let mut world = World::new();

        create_paddle(
            &mut world,
            Side::Left,
            Control::Human,
            field.paddle_spawn(&config, Side::Left).y,
        );
        create_paddle(
            &mut world,
            Side::Right,
            mode.right_control(),
            field.paddle_spawn(&config, Side::Right).y,
        );
        create_ball(&mut world, field.center(), Vec2::ZERO);

        let clock = MatchClock::new(config.ball_speed_base);

        Self {
            world,
            time: Time::new(0.0, 0.0),
            field,
            config,
            score: Score::new(),
            clock,
            events: Events::new(),
            serve: ServeState::new(),
            phase: MatchPhase::Idle,
            paused: false,
            mode,
            outcome: None,
        }
    }

    /// Advance the match by one frame. While paused this mutates nothing.
    pub fn step(&mut self, dt: f32, input: InputFrame) {
        self.events.clear();
        if self.paused {
            return;
        }

        match self.phase {
            MatchPhase::Idle | MatchPhase::Scored => {
                self.begin_round();
                self.phase = MatchPhase::Countdown;
            }
            MatchPhase::Countdown => {
                // Paddles keep moving while the cues play; the ball is parked.
                apply_intents(&mut self.world, input, &self.config);
                let tick_time = Time::new(dt, self.time.now);
                move_paddles(&mut self.world, &tick_time, &self.field, &self.config);
                self.time.now += dt;

                if self
                    .serve
                    .advance(dt, self.config.countdown_cue_secs, &mut self.events)
                {
                    let vel = self.serve.launch(self.clock.current_ball_speed);
                    for (_e, ball) in self.world.query_mut::<&mut Ball>() {
                        ball.vel = vel;
                    }
                    self.phase = MatchPhase::Rallying;
                }
            }
            MatchPhase::Rallying => {
                apply_intents(&mut self.world, input, &self.config);
                self.time.dt = dt;
                step(
                    &mut self.world,
                    &mut self.time,
                    &self.field,
                    &self.config,
                    &mut self.score,
                    &mut self.clock,
                    &mut self.events,
                );

                if self.events.scored.is_some() {
                    match self.score.winner(self.config.win_score) {
                        Some(winner) => {
                            self.outcome = Some(MatchOutcome {
                                winner,
                                player_score: self.score.player,
                                opponent_score: self.score.opponent,
                                elapsed_seconds: self.clock.elapsed_seconds,
                            });
                            self.phase = MatchPhase::GameOver;
                        }
                        None => self.phase = MatchPhase::Scored,
                    }
                }
            }
            MatchPhase::GameOver => {}
        }
    }

    fn begin_round(&mut self) {
        let center = self.field.center();
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(center);
        }
        self.serve.begin_round(self.config.countdown_cue_secs);
        self.events.round_reset = true;
    }

    /// Edge-triggered pause toggle. Ignored once the match is over; the
    /// resume edge is always accepted.
    pub fn toggle_pause(&mut self) {
        if self.phase == MatchPhase::GameOver {
            return;
        }
        self.paused = !self.paused;
    }

    /// Tear down and relaunch the match. Only valid once it is over.
    pub fn restart(&mut self) {
        if self.phase != MatchPhase::GameOver {
            return;
        }
        *self = Self::with_config(self.mode, self.config.clone());
    }

    // -- accessors for presentation --------------------------------------

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn elapsed_seconds(&self) -> u32 {
        self.clock.elapsed_seconds
    }

    pub fn current_ball_speed(&self) -> f32 {
        self.clock.current_ball_speed
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn events(&self) -> &Events {
        &self.events
    }

    /// The cue on screen while the phase is `Countdown`.
    pub fn countdown_cue(&self) -> Option<crate::serve::CountdownCue> {
        (self.phase == MatchPhase::Countdown).then(|| self.serve.current_cue())
    }

    /// Set once the match reaches `GameOver`.
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    pub fn ball(&self) -> Option<Ball> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
    }

    pub fn paddle_y(&self, side: Side) -> Option<f32> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.y)
    }
}
