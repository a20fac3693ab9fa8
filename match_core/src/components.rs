use glam::Vec2;

/// Which side of the field a paddle (and its player) belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The near, player-owned paddle.
    Left,
    /// The far paddle (AI or second player).
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal sign a ball travels after bouncing off this side's paddle:
    /// away from it, toward the opponent.
    pub fn outgoing_sign(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Who is steering a paddle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Human,
    Ai,
}

/// Paddle component. X position and extents come from [`crate::Config`].
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub control: Control,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, control: Control, y: f32) -> Self {
        Self { side, control, y }
    }
}

/// The ball.
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Park the ball at `center` with no motion, awaiting the next serve.
    pub fn reset(&mut self, center: Vec2) {
        self.pos = center;
        self.vel = Vec2::ZERO;
    }
}

/// Per-tick movement intent for a paddle.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = hold, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}
