use bevy::{input::mouse::MouseMotion, prelude::*, window::CursorGrabMode};

use super::components::{
    camera_target, smoothing_factor, CameraMode, CameraRig, Look, PlayerCamera, SMOOTH_TIME,
};
use crate::player::Player;

pub fn set_cursor_grab(window: &mut Window, grabbed: bool) {
    if grabbed {
        window.cursor_options.grab_mode = CursorGrabMode::Confined;
        window.cursor_options.visible = false;
    } else {
        window.cursor_options.grab_mode = CursorGrabMode::None;
        window.cursor_options.visible = true;
    }
}

pub fn grab_cursor(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        set_cursor_grab(&mut window, true);
    }
}

pub fn reset_camera_rig(mut rig: ResMut<CameraRig>) {
    *rig = CameraRig::default();
}

pub fn switch_camera_mode(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut rig: ResMut<CameraRig>,
    player: Query<&Transform, With<Player>>,
) {
    let mode = if keyboard_input.just_pressed(KeyCode::Digit1) {
        CameraMode::FirstPerson
    } else if keyboard_input.just_pressed(KeyCode::Digit2) {
        CameraMode::FixedThird
    } else if keyboard_input.just_pressed(KeyCode::Digit3) {
        CameraMode::FreeThird
    } else {
        return;
    };

    // Snap the look direction to where the body faces so the view doesn't jump.
    if mode != CameraMode::FreeThird {
        if let Ok(transform) = player.get_single() {
            rig.yaw = transform.rotation.to_euler(EulerRot::YXZ).0;
        }
    }
    rig.set_mode(mode);
    info!("Camera mode: {:?}", mode);
}

pub fn mouse_look(
    mut mouse_motion: EventReader<MouseMotion>,
    mut rig: ResMut<CameraRig>,
    windows: Query<&Window>,
) {
    let Ok(window) = windows.get_single() else {
        mouse_motion.clear();
        return;
    };

    // Only process mouse look when cursor is grabbed
    if window.cursor_options.grab_mode == CursorGrabMode::None {
        mouse_motion.clear();
        return;
    }

    for event in mouse_motion.read() {
        rig.look(event.delta);
    }
}

pub fn follow_player(
    time: Res<Time<Real>>,
    rig: Res<CameraRig>,
    player: Query<&Transform, (With<Player>, Without<PlayerCamera>)>,
    mut camera: Query<&mut Transform, With<PlayerCamera>>,
) {
    let (Ok(player), Ok(mut camera)) = (player.get_single(), camera.get_single_mut()) else {
        return;
    };

    let target = camera_target(&rig, player);
    camera.translation = if target.smoothed {
        let t = smoothing_factor(time.delta_secs(), SMOOTH_TIME);
        camera.translation.lerp(target.position, t)
    } else {
        target.position
    };

    match target.look {
        Look::Rotation(rotation) => camera.rotation = rotation,
        Look::At(point) => camera.look_at(point, Vec3::Y),
    }
}

pub fn center_cursor(mut windows: Query<&mut Window>) {
    let Ok(mut window) = windows.get_single_mut() else {
        return;
    };

    // Only center cursor when it's grabbed and window is focused
    if window.cursor_options.grab_mode != CursorGrabMode::None && window.focused {
        let center = Vec2::new(window.width() / 2.0, window.height() / 2.0);
        window.set_cursor_position(Some(center));
    }
}
