use bevy::prelude::*;

/// Main application states controlling game flow.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    #[default]
    MainMenu,
    InGame,
    /// Transient state used to tear down and rebuild the level.
    Restarting,
}

/// Ordering of the per-frame gameplay systems.
///
/// Proximity and input are turned into events first, entities react to them,
/// progress is applied, the exit is unlocked, and presentation reads the result.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameplaySet {
    Detect,
    Interact,
    Progress,
    Unlock,
    Present,
}

/// Request for the scene transition service.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneRequest {
    /// Reload the current level from scratch.
    RestartLevel,
    ReturnToStartMenu,
    StartLevel,
}

pub struct GameStatePlugin;

impl Plugin for GameStatePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_event::<SceneRequest>()
            .configure_sets(
                Update,
                (
                    GameplaySet::Detect,
                    GameplaySet::Interact,
                    GameplaySet::Progress,
                    GameplaySet::Unlock,
                    GameplaySet::Present,
                )
                    .chain()
                    .run_if(in_state(AppState::InGame)),
            )
            .add_systems(Update, handle_scene_requests)
            .add_systems(OnEnter(AppState::Restarting), finish_restart);
    }
}

/// Applies scene requests. Simulation time always resumes first so the next
/// scene does not start frozen.
pub fn handle_scene_requests(
    mut requests: EventReader<SceneRequest>,
    mut time: ResMut<Time<Virtual>>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    let Some(request) = requests.read().last().copied() else {
        return;
    };

    time.unpause();

    let target = match request {
        SceneRequest::RestartLevel => AppState::Restarting,
        SceneRequest::ReturnToStartMenu => AppState::MainMenu,
        SceneRequest::StartLevel => AppState::InGame,
    };
    info!("Scene transition requested: {:?} -> {:?}", request, target);
    next_state.set(target);
}

fn finish_restart(mut next_state: ResMut<NextState<AppState>>) {
    next_state.set(AppState::InGame);
}
