pub mod components;
pub mod systems;

use bevy::prelude::*;

pub use components::{Door, DoorActivation, DoorVisuals, ExitDoor, ExitReveal};

use crate::game_state::GameplaySet;
use systems::{handle_door_input, handle_door_proximity, sync_door_indicators, unlock_exit_on_threshold};

pub struct DoorPlugin;

impl Plugin for DoorPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (handle_door_proximity, handle_door_input)
                .chain()
                .in_set(GameplaySet::Interact),
        )
        .add_systems(Update, unlock_exit_on_threshold.in_set(GameplaySet::Unlock))
        .add_systems(Update, sync_door_indicators.in_set(GameplaySet::Present));
    }
}
