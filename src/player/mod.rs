pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{Player, Velocity, PLAYER_HEIGHT, PLAYER_RADIUS};

use crate::game_state::{AppState, GameplaySet};
use systems::{apply_gravity, apply_velocity, face_movement, player_movement};

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (player_movement, apply_gravity, apply_velocity, face_movement)
                .chain()
                .in_set(PlayerSystems)
                .before(GameplaySet::Detect)
                .run_if(in_state(AppState::InGame)),
        );
    }
}

/// Player movement. Runs before proximity detection so zones see this frame's position.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSystems;
