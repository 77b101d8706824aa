use bevy::prelude::*;

/// Marker for the player entity. Its translation is the player's feet.
#[derive(Component)]
pub struct Player;

/// Velocity component for physics-based movement.
#[derive(Component, Default)]
pub struct Velocity(pub Vec3);

// Player physics constants
pub const PLAYER_SPEED: f32 = 5.0;
pub const JUMP_VELOCITY: f32 = 6.0;
pub const GRAVITY: f32 = 20.0;
/// Extra pull while falling so jumps don't feel floaty.
pub const FALL_GRAVITY_MULTIPLIER: f32 = 2.0;
pub const PLAYER_HEIGHT: f32 = 1.8;
pub const PLAYER_RADIUS: f32 = 0.3;
pub const GROUND_LEVEL: f32 = 0.0;
/// How quickly the body turns toward its movement direction in third person.
pub const TURN_SPEED: f32 = 10.0;

pub fn is_grounded(feet_y: f32) -> bool {
    feet_y <= GROUND_LEVEL + 0.01
}

/// Converts WASD input (x = right, y = forward) into a world-space direction
/// on the ground plane, relative to the camera yaw. Diagonals are normalized.
pub fn movement_direction(input: Vec2, yaw: f32) -> Vec3 {
    let input = if input.length() > 1.0 {
        input.normalize()
    } else {
        input
    };

    let forward = Vec3::new(-yaw.sin(), 0.0, -yaw.cos());
    let right = Vec3::new(yaw.cos(), 0.0, -yaw.sin());
    forward * input.y + right * input.x
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_forward_at_zero_yaw_is_negative_z() {
        let dir = movement_direction(Vec2::new(0.0, 1.0), 0.0);
        assert!((dir - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_direction_follows_yaw() {
        let dir = movement_direction(Vec2::new(0.0, 1.0), FRAC_PI_2);
        assert!((dir - Vec3::NEG_X).length() < 1e-5);
        let right = movement_direction(Vec2::new(1.0, 0.0), 0.0);
        assert!((right - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_diagonal_is_normalized() {
        let dir = movement_direction(Vec2::new(1.0, 1.0), 0.3);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert_eq!(dir.y, 0.0);
    }

    #[test]
    fn test_grounded() {
        assert!(is_grounded(GROUND_LEVEL));
        assert!(!is_grounded(GROUND_LEVEL + 0.5));
    }
}
