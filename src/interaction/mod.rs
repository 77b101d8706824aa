pub mod components;
pub mod systems;
pub mod trigger;

use bevy::prelude::*;

pub use components::{
    Activation, InteractInput, Interactable, InteractableVisuals, InteractionKind, Proximity,
    ProximityChange, TriggerZone, INTERACT_KEY,
};

use crate::game_state::GameplaySet;
use systems::{handle_interactable_input, handle_interactable_proximity};
use trigger::{detect_proximity, dispatch_interact_input};

pub struct InteractionPlugin;

impl Plugin for InteractionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<Proximity>()
            .add_event::<InteractInput>()
            .add_systems(
                Update,
                (detect_proximity, dispatch_interact_input)
                    .chain()
                    .in_set(GameplaySet::Detect),
            )
            .add_systems(
                Update,
                (handle_interactable_proximity, handle_interactable_input)
                    .chain()
                    .in_set(GameplaySet::Interact),
            );
    }
}
