pub mod state;
pub mod systems;

use bevy::prelude::*;

pub use state::{GameProgress, Outcome, Registration};
pub use systems::{LevelEnded, ProgressRequest, ThresholdReached, TimeLimit};

use crate::game_state::{AppState, GameplaySet};
use systems::{apply_progress_requests, setup_progress, teardown_progress, tick_time_limit};

pub struct ProgressPlugin;

impl Plugin for ProgressPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<ProgressRequest>()
            .add_event::<ThresholdReached>()
            .add_event::<LevelEnded>()
            .add_systems(OnEnter(AppState::InGame), setup_progress)
            .add_systems(OnExit(AppState::InGame), teardown_progress)
            .add_systems(Update, tick_time_limit.in_set(GameplaySet::Detect))
            .add_systems(Update, apply_progress_requests.in_set(GameplaySet::Progress));
    }
}
