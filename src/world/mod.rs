pub mod components;
pub mod hud;
pub mod setup;

use bevy::prelude::*;

pub use components::{set_visible, LevelEntity};

use crate::game_state::{AppState, GameplaySet};
use hud::{setup_hud, update_hud, update_timer_text};
use setup::setup_world;

// Store room
pub const ROOM_WIDTH: f32 = 10.0;
pub const ROOM_DEPTH: f32 = 10.0;
pub const ROOM_HEIGHT: f32 = 4.0;
pub const WALL_THICKNESS: f32 = 0.2;

// Walkable half-extents, measured to the inner face of the walls
pub const ROOM_HALF_WIDTH: f32 = 4.9;
pub const ROOM_HALF_DEPTH: f32 = 4.9;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), (setup_world, setup_hud))
            .add_systems(OnExit(AppState::InGame), cleanup_level)
            .add_systems(Update, (update_hud, update_timer_text).in_set(GameplaySet::Present));
    }
}

pub fn cleanup_level(mut commands: Commands, query: Query<Entity, With<LevelEntity>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn_recursive();
    }
}
