pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{CameraMode, CameraRig, PlayerCamera};

use crate::game_state::AppState;
use crate::player::PlayerSystems;
use systems::{
    center_cursor, follow_player, grab_cursor, mouse_look, reset_camera_rig, switch_camera_mode,
};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraRig>()
            .add_systems(OnEnter(AppState::InGame), (grab_cursor, reset_camera_rig))
            .add_systems(
                Update,
                (switch_camera_mode, mouse_look)
                    .chain()
                    .before(PlayerSystems)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(
                Update,
                (follow_player, center_cursor)
                    .after(PlayerSystems)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
