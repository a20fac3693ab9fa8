use glam::Vec2;

use crate::components::Side;
use crate::config::Config;

/// Play-field geometry: outer bounds plus the goal gutters behind each paddle.
#[derive(Debug, Clone, Copy)]
pub struct Field {
    pub width: f32,
    pub height: f32,
    /// Distance from a side edge past which the ball is out.
    pub goal_gutter: f32,
}

impl Field {
    pub fn from_config(config: &Config) -> Self {
        Self {
            width: config.field_width,
            height: config.field_height,
            goal_gutter: config.goal_gutter,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Spawn position for a paddle's center.
    pub fn paddle_spawn(&self, config: &Config, side: Side) -> Vec2 {
        Vec2::new(config.paddle_x(side), self.height / 2.0)
    }

    /// Clamp a Y coordinate so a body with the given half-extent stays inside.
    pub fn clamp_y(&self, y: f32, half_extent: f32) -> f32 {
        y.clamp(half_extent, self.height - half_extent)
    }

    /// How far past the left goal line a ball at `x` is. Positive means out.
    pub fn left_goal_margin(&self, x: f32) -> f32 {
        self.goal_gutter - x
    }

    /// How far past the right goal line a ball at `x` is. Positive means out.
    pub fn right_goal_margin(&self, x: f32) -> f32 {
        x - (self.width - self.goal_gutter)
    }
}
