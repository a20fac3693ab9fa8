use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::MatchClock;
use crate::vel;

/// Fire the once-per-second speed ramp `fired` times: raise the speed cap by
/// one increment each, then rescale a moving ball to the new speed without
/// changing its heading. A parked ball (mid-countdown) is left alone and
/// picks the new speed up at launch.
pub fn apply_ramp(world: &mut World, clock: &mut MatchClock, config: &Config, fired: u32) {
    if fired == 0 {
        return;
    }
    for _ in 0..fired {
        clock.raise_speed(config.ball_speed_increment, config.ball_speed_max);
    }
    debug_assert!(clock.current_ball_speed <= config.ball_speed_max);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel::rescale(ball.vel, clock.current_ball_speed);
    }
}
