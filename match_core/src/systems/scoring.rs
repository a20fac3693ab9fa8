use hecs::World;

use crate::components::{Ball, Side};
use crate::field::Field;
use crate::resources::{Events, Score};

/// Check whether the ball crossed a goal gutter and award the point.
///
/// The ball is parked back at center with zero velocity; the session starts
/// the next serve. Should both gutters ever read as crossed in one tick, the
/// side whose boundary was crossed by the larger margin scores.
pub fn check_scoring(world: &mut World, field: &Field, score: &mut Score, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let left_margin = field.left_goal_margin(ball.pos.x);
        let right_margin = field.right_goal_margin(ball.pos.x);

        let scorer = if left_margin > 0.0 && right_margin > 0.0 {
            // Degenerate field or absurd speed: deeper crossing wins.
            if left_margin >= right_margin {
                Side::Right
            } else {
                Side::Left
            }
        } else if left_margin > 0.0 {
            // Past the left gutter: the right side takes the point.
            Side::Right
        } else if right_margin > 0.0 {
            Side::Left
        } else {
            continue;
        };

        score.award(scorer);
        events.scored = Some(scorer);
        ball.reset(field.center());
    }
}
