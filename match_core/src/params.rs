/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;
    /// Distance from a side edge at which a ball counts as out.
    pub const GOAL_GUTTER: f32 = 20.0;

    // Paddles
    pub const PADDLE_WIDTH: f32 = 20.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Distance from the side edge to a paddle's center line.
    pub const PADDLE_INSET: f32 = 50.0;
    pub const PADDLE_SPEED: f32 = 300.0; // units per second
    pub const AI_PADDLE_SPEED: f32 = 240.0; // the follower is a touch slower
    pub const AI_DEADZONE: f32 = 4.0;

    // Ball
    pub const BALL_SIZE: f32 = 20.0;
    pub const BALL_SPEED_BASE: f32 = 300.0;
    pub const BALL_SPEED_INCREMENT: f32 = 5.0; // added once per elapsed second
    pub const BALL_SPEED_MAX: f32 = 800.0;

    // Rounds
    pub const WIN_SCORE: u8 = 5;
    pub const COUNTDOWN_CUE_SECS: f32 = 1.0;

    // Physics
    pub const FIXED_DT: f32 = 0.0166; // ~60 Hz
    pub const MAX_DT: f32 = 0.1; // Clamp to prevent large jumps
}
