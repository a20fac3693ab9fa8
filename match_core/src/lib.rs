pub mod components;
pub mod config;
pub mod field;
pub mod params;
pub mod resources;
pub mod serve;
pub mod session;
pub mod systems;
pub mod vel;

pub use components::*;
pub use config::Config;
pub use field::Field;
pub use params::Params;
pub use resources::*;
pub use serve::{CountdownCue, ServeState};
pub use session::*;

use hecs::World;
use systems::*;

/// Run the rally physics for one frame: paddle motion, ball motion, wall and
/// paddle collisions, goal detection, and the per-second speed ramp.
///
/// Large frame gaps are clamped and split into fixed micro-steps so a slow
/// frame cannot tunnel the ball through a paddle.
pub fn step(
    world: &mut World,
    time: &mut Time,
    field: &Field,
    config: &Config,
    score: &mut Score,
    clock: &mut MatchClock,
    events: &mut Events,
) {
    let clamped_dt = time.dt.min(Params::MAX_DT);

    let mut remaining_dt = clamped_dt;
    while remaining_dt > 0.0 {
        let step_dt = remaining_dt.min(Params::FIXED_DT);
        remaining_dt -= step_dt;

        let step_time = Time {
            dt: step_dt,
            now: time.now + (clamped_dt - remaining_dt),
        };

        // 1. Elapsed-seconds accounting; each whole second raises the speed
        let fired = clock.advance(step_dt);
        apply_ramp(world, clock, config, fired);

        // 2. Move paddles based on intents
        move_paddles(world, &step_time, field, config);

        // 3. Move ball
        move_ball(world, &step_time);

        // 4. Check collisions (ball vs paddles, walls)
        check_collisions(world, field, config, events);

        // 5. Check goals (ball crossed a gutter)
        check_scoring(world, field, score, events);
    }

    time.now += clamped_dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, control: Control, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, control, y), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
