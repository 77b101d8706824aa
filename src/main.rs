mod camera;
mod config;
mod dialogue;
mod door;
mod game_state;
mod interaction;
mod menu;
mod player;
mod progress;
mod sound;
mod world;

use bevy::{prelude::*, window::PresentMode};

use camera::CameraPlugin;
use config::{report_config_source, LevelConfig};
use dialogue::DialoguePlugin;
use door::DoorPlugin;
use game_state::GameStatePlugin;
use interaction::InteractionPlugin;
use menu::MenuPlugin;
use player::PlayerPlugin;
use progress::ProgressPlugin;
use sound::SoundPlugin;
use world::WorldPlugin;

fn main() {
    let (config, source) = LevelConfig::load_or_default();

    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Escape Room".to_string(),
                    present_mode: PresentMode::AutoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .insert_resource(config)
        .insert_resource(source)
        .add_systems(Startup, report_config_source)
        .add_plugins((GameStatePlugin, MenuPlugin, SoundPlugin))
        .add_plugins((
            WorldPlugin,
            PlayerPlugin,
            CameraPlugin,
            InteractionPlugin,
            DoorPlugin,
            DialoguePlugin,
            ProgressPlugin,
        ))
        .run();
}
