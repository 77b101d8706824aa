use bevy::prelude::*;

use super::components::{
    is_grounded, movement_direction, Player, Velocity, FALL_GRAVITY_MULTIPLIER, GRAVITY,
    GROUND_LEVEL, JUMP_VELOCITY, PLAYER_RADIUS, PLAYER_SPEED, TURN_SPEED,
};
use crate::camera::{CameraMode, CameraRig};
use crate::dialogue::DialogueSession;
use crate::world::{ROOM_HALF_DEPTH, ROOM_HALF_WIDTH};

pub fn player_movement(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    rig: Res<CameraRig>,
    dialogue: Option<Res<DialogueSession>>,
    mut query: Query<(&Transform, &mut Velocity), With<Player>>,
) {
    let Ok((transform, mut velocity)) = query.get_single_mut() else {
        return;
    };

    // An open dialogue swallows movement input.
    if dialogue.is_some_and(|d| d.is_active()) {
        velocity.0.x = 0.0;
        velocity.0.z = 0.0;
        return;
    }

    let mut input = Vec2::ZERO;
    if keyboard_input.pressed(KeyCode::KeyW) {
        input.y += 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyS) {
        input.y -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyA) {
        input.x -= 1.0;
    }
    if keyboard_input.pressed(KeyCode::KeyD) {
        input.x += 1.0;
    }

    let move_direction = movement_direction(input, rig.yaw);
    velocity.0.x = move_direction.x * PLAYER_SPEED;
    velocity.0.z = move_direction.z * PLAYER_SPEED;

    if keyboard_input.just_pressed(KeyCode::Space) && is_grounded(transform.translation.y) {
        velocity.0.y = JUMP_VELOCITY;
    }
}

pub fn apply_gravity(time: Res<Time>, mut query: Query<(&Transform, &mut Velocity), With<Player>>) {
    let Ok((transform, mut velocity)) = query.get_single_mut() else {
        return;
    };

    if !is_grounded(transform.translation.y) {
        let multiplier = if velocity.0.y < 0.0 {
            FALL_GRAVITY_MULTIPLIER
        } else {
            1.0
        };
        velocity.0.y -= GRAVITY * multiplier * time.delta_secs();
    }
}

pub fn apply_velocity(
    time: Res<Time>,
    mut query: Query<(&mut Transform, &mut Velocity), With<Player>>,
) {
    let Ok((mut transform, mut velocity)) = query.get_single_mut() else {
        return;
    };

    transform.translation += velocity.0 * time.delta_secs();

    // Ground collision
    if transform.translation.y < GROUND_LEVEL {
        transform.translation.y = GROUND_LEVEL;
        velocity.0.y = 0.0;
    }

    // Wall collisions (keep player inside room)
    let max_x = ROOM_HALF_WIDTH - PLAYER_RADIUS;
    let max_z = ROOM_HALF_DEPTH - PLAYER_RADIUS;
    transform.translation.x = transform.translation.x.clamp(-max_x, max_x);
    transform.translation.z = transform.translation.z.clamp(-max_z, max_z);
}

/// First person locks the body to the camera yaw; third person turns the body
/// toward where it is walking.
pub fn face_movement(
    time: Res<Time>,
    rig: Res<CameraRig>,
    mut query: Query<(&mut Transform, &Velocity), With<Player>>,
) {
    let Ok((mut transform, velocity)) = query.get_single_mut() else {
        return;
    };

    if rig.mode == CameraMode::FirstPerson {
        transform.rotation = Quat::from_rotation_y(rig.yaw);
        return;
    }

    let horizontal = Vec3::new(velocity.0.x, 0.0, velocity.0.z);
    if horizontal.length() > 0.1 {
        let target = Transform::IDENTITY.looking_to(horizontal, Vec3::Y).rotation;
        let t = (TURN_SPEED * time.delta_secs()).min(1.0);
        transform.rotation = transform.rotation.slerp(target, t);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> (App, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<CameraRig>()
            .add_systems(Update, player_movement);
        let player = app
            .world_mut()
            .spawn((Player, Velocity::default(), Transform::default()))
            .id();
        (app, player)
    }

    fn velocity(app: &App, player: Entity) -> Vec3 {
        app.world().get::<Velocity>(player).unwrap().0
    }

    #[test]
    fn test_walk_forward() {
        let (mut app, player) = test_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::KeyW);
        app.update();

        let v = velocity(&app, player);
        assert!((v.z + PLAYER_SPEED).abs() < 1e-4);
    }

    #[test]
    fn test_open_dialogue_blocks_movement_and_jump() {
        let (mut app, player) = test_app();
        let mut dialogue = DialogueSession::new(0.0);
        dialogue.show(
            &crate::dialogue::DialogueLine::new("hi", crate::interaction::InteractionKind::Npc),
            0.0,
        );
        app.insert_resource(dialogue);
        {
            let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
            input.press(KeyCode::KeyW);
            input.press(KeyCode::Space);
        }
        app.update();

        assert_eq!(velocity(&app, player), Vec3::ZERO);
    }

    #[test]
    fn test_jump_when_grounded() {
        let (mut app, player) = test_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(KeyCode::Space);
        app.update();

        assert_eq!(velocity(&app, player).y, JUMP_VELOCITY);
    }
}
