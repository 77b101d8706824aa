use bevy::prelude::*;

use super::components::*;
use super::styles::*;
use crate::camera::systems::set_cursor_grab;
use crate::config::LevelConfig;
use crate::dialogue::{ui::CANCEL_KEY, DialogueSession};
use crate::game_state::SceneRequest;
use crate::progress::{GameProgress, LevelEnded, Outcome};
use crate::world::LevelEntity;

fn spawn_title(parent: &mut ChildBuilder, title: &str) {
    parent.spawn((
        Text::new(title),
        heading_font(),
        TextColor(HEADING_COLOR),
        Node {
            margin: UiRect::bottom(Val::Px(40.0)),
            ..default()
        },
    ));
}

fn spawn_button(parent: &mut ChildBuilder, action: MenuAction) {
    parent
        .spawn((action, Button, menu_button_node(), BackgroundColor(BUTTON_IDLE)))
        .with_children(|parent| {
            parent.spawn((
                Text::new(action.label()),
                label_font(),
                TextColor(LABEL_COLOR),
            ));
        });
}

pub fn setup_main_menu(mut commands: Commands, config: Res<LevelConfig>) {
    // 2D camera for the menu; the level brings its own 3D camera
    commands.spawn((MenuCamera, Camera2d));

    commands
        .spawn((
            MainMenuRoot,
            screen_root(),
            BackgroundColor(MENU_BACKGROUND),
        ))
        .with_children(|parent| {
            spawn_title(parent, &config.start_menu_title);
            spawn_button(parent, MenuAction::Play);
            spawn_button(parent, MenuAction::Quit);
        });
}

pub fn cleanup_main_menu(
    mut commands: Commands,
    roots: Query<Entity, With<MainMenuRoot>>,
    cameras: Query<Entity, With<MenuCamera>>,
) {
    for entity in roots.iter().chain(cameras.iter()) {
        commands.entity(entity).despawn_recursive();
    }
}

pub fn button_interaction(
    mut buttons: Query<(&Interaction, &mut BackgroundColor), (Changed<Interaction>, With<Button>)>,
) {
    for (interaction, mut color) in buttons.iter_mut() {
        *color = button_color(*interaction).into();
    }
}

pub fn handle_menu_actions(
    interaction_query: Query<(&Interaction, &MenuAction), Changed<Interaction>>,
    mut scene: EventWriter<SceneRequest>,
    mut pause: ResMut<PauseState>,
    mut exit: EventWriter<AppExit>,
) {
    for (interaction, action) in interaction_query.iter() {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match action {
            MenuAction::Play => {
                scene.send(SceneRequest::StartLevel);
            }
            MenuAction::Resume => pause.paused = false,
            MenuAction::Restart => {
                scene.send(SceneRequest::RestartLevel);
            }
            MenuAction::MainMenu => {
                scene.send(SceneRequest::ReturnToStartMenu);
            }
            MenuAction::Quit => {
                info!("Quitting game...");
                exit.send(AppExit::Success);
            }
        }
    }
}

/// Escape toggles the pause menu. Disabled once the level has ended, and left
/// to the dialogue while one is open.
pub fn toggle_pause(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    progress: Option<Res<GameProgress>>,
    dialogue: Option<Res<DialogueSession>>,
    mut pause: ResMut<PauseState>,
) {
    if !keyboard_input.just_pressed(CANCEL_KEY) {
        return;
    }
    if progress.is_some_and(|p| p.is_game_over()) {
        return;
    }
    if dialogue.is_some_and(|d| d.is_active()) {
        return;
    }
    pause.paused = !pause.paused;
}

pub fn reset_pause(mut pause: ResMut<PauseState>) {
    pause.set_if_neq(PauseState::default());
}

pub fn apply_pause(
    mut commands: Commands,
    pause: Res<PauseState>,
    mut time: ResMut<Time<Virtual>>,
    roots: Query<Entity, With<PauseMenuRoot>>,
    mut windows: Query<&mut Window>,
) {
    if !pause.is_changed() {
        return;
    }

    if pause.paused {
        if !roots.is_empty() {
            return;
        }
        info!("Game paused");
        time.pause();
        commands
            .spawn((
                PauseMenuRoot,
                LevelEntity,
                screen_root(),
                BackgroundColor(OVERLAY_COLOR),
            ))
            .with_children(|parent| {
                spawn_title(parent, "Paused");
                spawn_button(parent, MenuAction::Resume);
                spawn_button(parent, MenuAction::MainMenu);
                spawn_button(parent, MenuAction::Quit);
            });
    } else {
        if roots.is_empty() {
            return;
        }
        info!("Game resumed");
        time.unpause();
        for entity in roots.iter() {
            commands.entity(entity).despawn_recursive();
        }
    }

    if let Ok(mut window) = windows.get_single_mut() {
        set_cursor_grab(&mut window, !pause.paused);
    }
}

pub fn show_outcome_panel(
    mut commands: Commands,
    mut ended: EventReader<LevelEnded>,
    mut windows: Query<&mut Window>,
) {
    for LevelEnded(outcome) in ended.read() {
        let title = match outcome {
            Outcome::LevelComplete => "Level Complete!",
            Outcome::GameOver => "Game Over",
        };
        commands
            .spawn((
                OutcomePanel,
                LevelEntity,
                screen_root(),
                BackgroundColor(OVERLAY_COLOR),
            ))
            .with_children(|parent| {
                spawn_title(parent, title);
                spawn_button(parent, MenuAction::Restart);
                spawn_button(parent, MenuAction::MainMenu);
                spawn_button(parent, MenuAction::Quit);
            });

        if let Ok(mut window) = windows.get_single_mut() {
            set_cursor_grab(&mut window, false);
        }
    }
}

pub fn release_cursor(mut windows: Query<&mut Window>) {
    if let Ok(mut window) = windows.get_single_mut() {
        set_cursor_grab(&mut window, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialogue::DialogueLine;
    use crate::interaction::InteractionKind;

    fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<PauseState>()
            .insert_resource(GameProgress::new(3))
            .insert_resource(DialogueSession::new(0.0))
            .add_event::<LevelEnded>()
            .add_systems(Update, (toggle_pause, apply_pause, show_outcome_panel).chain());
        app
    }

    fn press_escape(app: &mut App) {
        let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
        input.release(CANCEL_KEY);
        input.clear();
        input.press(CANCEL_KEY);
        app.update();
    }

    fn count<C: Component>(app: &mut App) -> usize {
        app.world_mut()
            .query_filtered::<Entity, With<C>>()
            .iter(app.world())
            .count()
    }

    #[test]
    fn test_escape_pauses_and_resumes() {
        let mut app = test_app();
        app.update();

        press_escape(&mut app);
        assert!(app.world().resource::<PauseState>().paused);
        assert!(app.world().resource::<Time<Virtual>>().is_paused());
        assert_eq!(count::<PauseMenuRoot>(&mut app), 1);

        press_escape(&mut app);
        assert!(!app.world().resource::<PauseState>().paused);
        assert!(!app.world().resource::<Time<Virtual>>().is_paused());
        assert_eq!(count::<PauseMenuRoot>(&mut app), 0);
    }

    #[test]
    fn test_no_pause_after_game_over() {
        let mut app = test_app();
        app.world_mut().resource_mut::<GameProgress>().level_complete();
        press_escape(&mut app);
        assert!(!app.world().resource::<PauseState>().paused);
    }

    #[test]
    fn test_escape_with_open_dialogue_does_not_pause() {
        let mut app = test_app();
        app.world_mut()
            .resource_mut::<DialogueSession>()
            .show(&DialogueLine::new("hi", InteractionKind::Npc), 0.0);
        press_escape(&mut app);
        assert!(!app.world().resource::<PauseState>().paused);
    }

    #[test]
    fn test_outcome_panel_shown_once_per_event() {
        let mut app = test_app();
        app.world_mut().send_event(LevelEnded(Outcome::LevelComplete));
        app.update();
        app.update();
        assert_eq!(count::<OutcomePanel>(&mut app), 1);
    }

    #[test]
    fn test_button_color_follows_interaction() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_systems(Update, button_interaction);
        let button = app
            .world_mut()
            .spawn((Button, Interaction::Hovered, BackgroundColor(BUTTON_IDLE)))
            .id();

        app.update();
        assert_eq!(app.world().get::<BackgroundColor>(button).unwrap().0, BUTTON_HOVER);

        *app.world_mut().get_mut::<Interaction>(button).unwrap() = Interaction::Pressed;
        app.update();
        assert_eq!(app.world().get::<BackgroundColor>(button).unwrap().0, BUTTON_PRESSED);
    }
}
