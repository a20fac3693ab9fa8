use crate::components::{Control, Side};
use crate::params::Params;

/// Runtime game configuration, built from [`Params`] defaults.
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub goal_gutter: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_inset: f32,
    pub paddle_speed: f32,
    pub ai_paddle_speed: f32,
    pub ai_deadzone: f32,
    pub ball_size: f32,
    pub ball_speed_base: f32,
    pub ball_speed_increment: f32,
    pub ball_speed_max: f32,
    pub win_score: u8,
    pub countdown_cue_secs: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            goal_gutter: Params::GOAL_GUTTER,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_inset: Params::PADDLE_INSET,
            paddle_speed: Params::PADDLE_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ai_deadzone: Params::AI_DEADZONE,
            ball_size: Params::BALL_SIZE,
            ball_speed_base: Params::BALL_SPEED_BASE,
            ball_speed_increment: Params::BALL_SPEED_INCREMENT,
            ball_speed_max: Params::BALL_SPEED_MAX,
            win_score: Params::WIN_SCORE,
            countdown_cue_secs: Params::COUNTDOWN_CUE_SECS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X position of a paddle's center line.
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_inset,
            Side::Right => self.field_width - self.paddle_inset,
        }
    }

    /// Clamp a paddle's center Y so the paddle stays inside the field.
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        let half_height = self.paddle_height / 2.0;
        y.clamp(half_height, self.field_height - half_height)
    }

    /// Movement speed for a paddle under the given control.
    pub fn paddle_speed_for(&self, control: Control) -> f32 {
        match control {
            Control::Human => self.paddle_speed,
            Control::Ai => self.ai_paddle_speed,
        }
    }
}
