pub mod intro;
pub mod session;
pub mod ui;

use bevy::prelude::*;

pub use intro::IntroDialogue;
pub use session::{DialogueLine, DialogueSession};

use crate::game_state::{AppState, GameplaySet};
use intro::{schedule_intro, show_intro};
use ui::{close_dialogue_on_input, setup_dialogue, sync_dialogue_panel, teardown_dialogue, tick_auto_close};

pub struct DialoguePlugin;

impl Plugin for DialoguePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), (setup_dialogue, schedule_intro))
            .add_systems(OnExit(AppState::InGame), teardown_dialogue)
            .add_systems(
                Update,
                (tick_auto_close, close_dialogue_on_input, show_intro)
                    .chain()
                    .in_set(GameplaySet::Detect),
            )
            .add_systems(Update, sync_dialogue_panel.in_set(GameplaySet::Present));
    }
}
