/// Bullet hit test in a rotated frame.
///
/// The frame is rotated by the enemy's angular position around the world
/// origin, `atan2(enemy.y, enemy.x)`.  Note this is not the bullet's heading:
/// the test only lines up with the geometry for enemies on the +x axis,
/// where the rotation is the identity.

use glam::{Mat3, Vec2};

/// Counter-clockwise rotation about the origin.
#[inline]
pub fn rotation_matrix(angle: f32) -> Mat3 {
    Mat3::from_angle(angle)
}

/// The rotation used to test bullets against `enemy`.
#[inline]
pub fn enemy_frame(enemy: Vec2) -> Mat3 {
    rotation_matrix(enemy.y.atan2(enemy.x))
}

/// Did a bullet moving from `last` to `current` hit the enemy at `enemy`?
///
/// In the rotated frame the bullet must lie inside the slab `|y| <= radius`
/// and must have crossed the line `x = enemy.x - radius` since last tick.
pub fn swept_hit(enemy: Vec2, last: Vec2, current: Vec2, radius: f32) -> bool {
    let frame = enemy_frame(enemy);
    let rotated_enemy = frame.transform_point2(enemy);
    let rotated_last = frame.transform_point2(last);
    let rotated_current = frame.transform_point2(current);

    let in_slab = rotated_current.y >= -radius && rotated_current.y <= radius;
    let threshold = rotated_enemy.x - radius;
    let crossed = rotated_last.x <= threshold && rotated_current.x >= threshold;

    in_slab && crossed
}
