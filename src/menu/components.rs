use bevy::prelude::*;

/// Marker for the menu camera.
#[derive(Component)]
pub struct MenuCamera;

/// Marker for the main menu root UI node.
#[derive(Component)]
pub struct MainMenuRoot;

/// Marker for the pause menu root UI node.
#[derive(Component)]
pub struct PauseMenuRoot;

/// Marker for the level complete / game over panel.
#[derive(Component)]
pub struct OutcomePanel;

/// What a menu button does when pressed.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    Play,
    Resume,
    Restart,
    MainMenu,
    Quit,
}

impl MenuAction {
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play",
            MenuAction::Resume => "Resume",
            MenuAction::Restart => "Restart",
            MenuAction::MainMenu => "Main Menu",
            MenuAction::Quit => "Quit",
        }
    }
}

/// Whether the pause menu is open.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PauseState {
    pub paused: bool,
}
