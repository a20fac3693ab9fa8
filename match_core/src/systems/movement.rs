use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::field::Field;
use crate::resources::Time;

/// Apply paddle movement based on intents, clamped to the field.
pub fn move_paddles(world: &mut World, time: &Time, field: &Field, config: &Config) {
    let half_height = config.paddle_height / 2.0;
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            let speed = config.paddle_speed_for(paddle.control);
            paddle.y += intent.dir as f32 * speed * time.dt;
            paddle.y = field.clamp_y(paddle.y, half_height);
        }
        debug_assert!(
            paddle.y >= half_height && paddle.y <= field.height - half_height,
            "paddle escaped the field"
        );
    }
}

/// Move the ball along its velocity.
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{Control, Side};
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    #[test]
    fn test_paddle_moves_by_speed_times_dt() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::from_config(&config);
        let entity = create_paddle(&mut world, Side::Left, Control::Human, 300.0);
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = 1;

        move_paddles(&mut world, &Time::new(0.1, 0.0), &field, &config);

        let y = world.get::<&Paddle>(entity).unwrap().y;
        assert!((y - (300.0 + config.paddle_speed * 0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_paddle_stays_in_bounds_under_any_sequence() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::from_config(&config);
        let entity = create_paddle(&mut world, Side::Left, Control::Human, 300.0);
        let half_height = config.paddle_height / 2.0;

        // Hammer one direction, then the other, far past the walls.
        for dir in [-1i8, 1] {
            world.get::<&mut PaddleIntent>(entity).unwrap().dir = dir;
            for _ in 0..600 {
                move_paddles(&mut world, &Time::new(0.016, 0.0), &field, &config);
                let y = world.get::<&Paddle>(entity).unwrap().y;
                assert!(y >= half_height && y <= field.height - half_height);
            }
        }
    }

    #[test]
    fn test_ai_paddle_uses_its_own_speed() {
        let mut world = World::new();
        let config = Config::new();
        let field = Field::from_config(&config);
        let entity = create_paddle(&mut world, Side::Right, Control::Ai, 300.0);
        world.get::<&mut PaddleIntent>(entity).unwrap().dir = 1;

        move_paddles(&mut world, &Time::new(0.1, 0.0), &field, &config);

        let y = world.get::<&Paddle>(entity).unwrap().y;
        assert!((y - (300.0 + config.ai_paddle_speed * 0.1)).abs() < 1e-4);
    }

    #[test]
    fn test_ball_integrates_velocity() {
        let mut world = World::new();
        let entity = create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(100.0, -50.0));

        move_ball(&mut world, &Time::new(0.1, 0.0));

        let ball = *world.get::<&Ball>(entity).unwrap();
        assert!((ball.pos.x - 410.0).abs() < 1e-4);
        assert!((ball.pos.y - 295.0).abs() < 1e-4);
    }
}
