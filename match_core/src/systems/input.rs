use hecs::World;

use crate::components::{Ball, Control, Paddle, PaddleIntent, Side};
use crate::config::Config;

/// Logical movement intent for one paddle, as supplied by the frame driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveDir {
    Up,
    #[default]
    Hold,
    Down,
}

impl MoveDir {
    pub fn dir(self) -> i8 {
        match self {
            MoveDir::Up => -1,
            MoveDir::Hold => 0,
            MoveDir::Down => 1,
        }
    }
}

/// Per-tick input: one intent per side. A side under AI control ignores its
/// slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputFrame {
    pub left: MoveDir,
    pub right: MoveDir,
}

/// Write this tick's intents onto the paddles. Human paddles take theirs
/// from the frame; AI paddles chase the ball.
pub fn apply_intents(world: &mut World, frame: InputFrame, config: &Config) {
    let ball_y = world
        .query_mut::<&Ball>()
        .into_iter()
        .next()
        .map(|(_e, ball)| ball.pos.y);

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.dir = match paddle.control {
            Control::Human => match paddle.side {
                Side::Left => frame.left.dir(),
                Side::Right => frame.right.dir(),
            },
            Control::Ai => match ball_y {
                Some(y) => follow_dir(y, paddle.y, config.ai_deadzone),
                None => 0,
            },
        };
    }
}

/// Simple follower: chase the ball's Y, with a small deadzone so the paddle
/// does not jitter once aligned.
fn follow_dir(target_y: f32, paddle_y: f32, deadzone: f32) -> i8 {
    let diff = target_y - paddle_y;
    if diff < -deadzone {
        -1
    } else if diff > deadzone {
        1
    } else {
        0
    }
}
