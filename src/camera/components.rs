use bevy::prelude::*;

/// Marker for the camera that follows the player.
#[derive(Component)]
pub struct PlayerCamera;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Inside the player's head.
    FirstPerson,
    /// Behind the player's shoulder, turning with the body.
    FixedThird,
    /// Orbits the player with the mouse.
    #[default]
    FreeThird,
}

/// Look angles shared by the camera and movement. Positive pitch looks up.
#[derive(Resource, Debug, Clone, Default)]
pub struct CameraRig {
    pub mode: CameraMode,
    pub yaw: f32,
    pub pitch: f32,
}

impl CameraRig {
    pub fn pitch_limits(&self) -> (f32, f32) {
        match self.mode {
            CameraMode::FreeThird => (FREE_LOOK_MIN_PITCH, FREE_LOOK_MAX_PITCH),
            CameraMode::FirstPerson | CameraMode::FixedThird => (-PITCH_LIMIT, PITCH_LIMIT),
        }
    }

    pub fn look(&mut self, delta: Vec2) {
        self.yaw -= delta.x * MOUSE_SENSITIVITY;
        self.pitch -= delta.y * MOUSE_SENSITIVITY;
        let (min, max) = self.pitch_limits();
        self.pitch = self.pitch.clamp(min, max);
    }

    pub fn set_mode(&mut self, mode: CameraMode) {
        self.mode = mode;
        let (min, max) = self.pitch_limits();
        self.pitch = self.pitch.clamp(min, max);
    }

    pub fn rotation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }
}

/// Where the camera wants to be this frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraTarget {
    pub position: Vec3,
    pub look: Look,
    pub smoothed: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Look {
    Rotation(Quat),
    At(Vec3),
}

// Mouse look constants
pub const MOUSE_SENSITIVITY: f32 = 0.003;
pub const PITCH_LIMIT: f32 = 1.5; // ~86 degrees, just under 90
pub const FREE_LOOK_MIN_PITCH: f32 = -60.0 * std::f32::consts::PI / 180.0;
pub const FREE_LOOK_MAX_PITCH: f32 = 20.0 * std::f32::consts::PI / 180.0;

// Rig geometry
pub const EYE_OFFSET: Vec3 = Vec3::new(0.0, 1.7, -0.15);
pub const LOOK_AT_HEIGHT: f32 = 1.5;
pub const FREE_LOOK_DISTANCE: f32 = 4.0;
pub const FREE_LOOK_HEIGHT: f32 = 2.0;
pub const FIXED_BACK_DISTANCE: f32 = 6.0;
pub const FIXED_HEIGHT: f32 = 2.2;
pub const FIXED_SHOULDER_OFFSET: f32 = 0.6;
pub const SMOOTH_TIME: f32 = 0.12;

pub fn camera_target(rig: &CameraRig, player: &Transform) -> CameraTarget {
    let look_at = player.translation + Vec3::Y * LOOK_AT_HEIGHT;
    match rig.mode {
        CameraMode::FirstPerson => CameraTarget {
            position: player.translation + player.rotation * EYE_OFFSET,
            look: Look::Rotation(rig.rotation()),
            smoothed: false,
        },
        CameraMode::FixedThird => CameraTarget {
            position: player.translation - player.forward() * FIXED_BACK_DISTANCE
                + Vec3::Y * FIXED_HEIGHT
                + player.right() * FIXED_SHOULDER_OFFSET,
            look: Look::At(look_at),
            smoothed: true,
        },
        CameraMode::FreeThird => CameraTarget {
            position: player.translation + rig.rotation() * Vec3::Z * FREE_LOOK_DISTANCE
                + Vec3::Y * FREE_LOOK_HEIGHT,
            look: Look::At(look_at),
            smoothed: true,
        },
    }
}

/// Frame-rate independent fraction of the remaining distance to cover this frame.
pub fn smoothing_factor(dt: f32, smooth_time: f32) -> f32 {
    if smooth_time <= 0.0 {
        return 1.0;
    }
    1.0 - (-dt / smooth_time).exp()
}
