//! Velocity math: magnitude changes that preserve direction, and the
//! discrete deflection law used when the ball comes off a paddle.

use glam::Vec2;

/// Return `v` re-scaled to `magnitude` with its direction (atan2 angle)
/// intact. The zero vector has no direction to preserve and is returned
/// unchanged.
pub fn rescale(v: Vec2, magnitude: f32) -> Vec2 {
    if v == Vec2::ZERO {
        return v;
    }
    let angle = v.y.atan2(v.x);
    Vec2::new(angle.cos(), angle.sin()) * magnitude
}

/// Map a paddle-relative hit position (0 = top edge, 1 = bottom edge) to a
/// deflection angle in degrees. Five fixed buckets; center hits go straight,
/// edge hits bend steeply. Out-of-range inputs land in the nearest edge
/// bucket.
pub fn deflection_angle(hit_position: f32) -> f32 {
    if hit_position < 0.2 {
        -60.0
    } else if hit_position < 0.4 {
        -30.0
    } else if hit_position < 0.6 {
        0.0
    } else if hit_position < 0.8 {
        30.0
    } else {
        60.0
    }
}

/// Decompose `speed` at `angle_deg`, forcing the horizontal component's sign
/// to `outgoing_sign` so the ball always leaves toward the opposite side.
pub fn deflected_velocity(angle_deg: f32, speed: f32, outgoing_sign: f32) -> Vec2 {
    let rad = angle_deg.to_radians();
    Vec2::new(rad.cos() * speed * outgoing_sign, rad.sin() * speed)
}
