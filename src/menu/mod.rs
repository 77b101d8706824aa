pub mod components;
pub mod styles;
pub mod systems;

use bevy::prelude::*;

pub use components::{MenuAction, PauseState};

use crate::game_state::{AppState, GameplaySet};
use systems::*;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PauseState>()
            // Main menu
            .add_systems(OnEnter(AppState::MainMenu), (setup_main_menu, release_cursor))
            .add_systems(OnExit(AppState::MainMenu), cleanup_main_menu)
            // Buttons work on every screen
            .add_systems(Update, (button_interaction, handle_menu_actions))
            // Pause menu and outcome panels
            .add_systems(OnEnter(AppState::InGame), reset_pause)
            .add_systems(
                Update,
                (toggle_pause, apply_pause)
                    .chain()
                    .before(GameplaySet::Detect)
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(Update, show_outcome_panel.in_set(GameplaySet::Present));
    }
}
