use hecs::World;

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::field::Field;
use crate::resources::Events;
use crate::vel;

/// Check ball collisions with walls and paddles.
///
/// Walls reflect the vertical component. A paddle hit re-aims the ball by
/// the five-bucket deflection law, preserving its speed, and always sends it
/// back toward the opposite side.
pub fn check_collisions(world: &mut World, field: &Field, config: &Config, events: &mut Events) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Top/bottom wall bounces
    let ball_half = config.ball_size / 2.0;
    if ball_pos.y - ball_half <= 0.0 || ball_pos.y + ball_half >= field.height {
        ball_vel.y = -ball_vel.y;
        // Clamp position to prevent sticking inside the wall
        if ball_pos.y - ball_half <= 0.0 {
            ball_pos.y = ball_half;
        }
        if ball_pos.y + ball_half >= field.height {
            ball_pos.y = field.height - ball_half;
        }
        events.wall_bounce = true;

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
            ball.vel = ball_vel;
        }
    }

    // Paddle collisions
    let paddles: Vec<(Side, f32)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.y))
        .collect();

    let paddle_half_width = config.paddle_width / 2.0;
    let paddle_half_height = config.paddle_height / 2.0;

    for (side, paddle_y) in paddles {
        let paddle_x = config.paddle_x(side);

        let dx = (ball_pos.x - paddle_x).abs();
        let dy = (ball_pos.y - paddle_y).abs();
        if dx >= paddle_half_width + ball_half || dy >= paddle_half_height + ball_half {
            continue;
        }

        // Only deflect a ball moving into the paddle
        let moving_toward = match side {
            Side::Left => ball_vel.x < 0.0,
            Side::Right => ball_vel.x > 0.0,
        };
        if !moving_toward {
            continue;
        }

        // Where on the paddle the ball hit: 0 = top edge, 1 = bottom edge.
        // Fast balls can land outside [0, 1]; the bucket table treats those
        // as edge hits.
        let hit_position = (ball_pos.y - (paddle_y - paddle_half_height)) / config.paddle_height;
        let angle = vel::deflection_angle(hit_position);

        let speed = ball_vel.length();
        ball_vel = vel::deflected_velocity(angle, speed, side.outgoing_sign());

        // Push the ball out of the paddle so the hit cannot re-trigger
        ball_pos.x = match side {
            Side::Left => paddle_x + paddle_half_width + ball_half,
            Side::Right => paddle_x - paddle_half_width - ball_half,
        };

        events.paddle_hit = Some(ball_pos);

        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.pos = ball_pos;
            ball.vel = ball_vel;
        }
        return;
    }
}
