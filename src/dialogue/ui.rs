use bevy::prelude::*;

use super::DialogueSession;
use crate::config::LevelConfig;
use crate::world::LevelEntity;

/// Closes the dialogue (and, when nothing is open, toggles the pause menu).
pub const CANCEL_KEY: KeyCode = KeyCode::Escape;
/// Also closes the dialogue.
pub const CONFIRM_KEY: KeyCode = KeyCode::Space;

/// Marker for the dialogue panel root.
#[derive(Component)]
pub struct DialoguePanel;

/// Marker for the dialogue message text.
#[derive(Component)]
pub struct DialogueText;

/// Marker for the speaker name text.
#[derive(Component)]
pub struct DialogueSpeakerText;

/// Marker for the dialogue close button.
#[derive(Component)]
pub struct DialogueCloseButton;

pub fn setup_dialogue(mut commands: Commands, config: Res<LevelConfig>) {
    commands.insert_resource(DialogueSession::new(config.dialogue.auto_close_delay));

    commands
        .spawn((
            DialoguePanel,
            LevelEntity,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Percent(15.0),
                right: Val::Percent(15.0),
                bottom: Val::Px(40.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(8.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.8)),
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                DialogueSpeakerText,
                Text::new(""),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 0.85, 0.4)),
            ));
            parent.spawn((
                DialogueText,
                Text::new(""),
                TextFont {
                    font_size: 20.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
            parent
                .spawn((
                    DialogueCloseButton,
                    Button,
                    Node {
                        align_self: AlignSelf::FlexEnd,
                        padding: UiRect::axes(Val::Px(12.0), Val::Px(4.0)),
                        ..default()
                    },
                    BackgroundColor(Color::srgb(0.15, 0.15, 0.15)),
                ))
                .with_children(|parent| {
                    parent.spawn((
                        Text::new("Close [Space]"),
                        TextFont {
                            font_size: 16.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    ));
                });
        });
}

pub fn teardown_dialogue(mut commands: Commands) {
    commands.remove_resource::<DialogueSession>();
    commands.remove_resource::<super::IntroDialogue>();
}

pub fn tick_auto_close(dialogue: Option<ResMut<DialogueSession>>, time: Res<Time>) {
    let Some(mut dialogue) = dialogue else {
        return;
    };
    // Avoid flagging the resource as changed every frame.
    if dialogue.auto_close_deadline().is_none() {
        return;
    }
    if dialogue.tick(time.elapsed_secs()) {
        debug!("Dialogue auto-closed");
    }
}

pub fn close_dialogue_on_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    close_buttons: Query<&Interaction, (Changed<Interaction>, With<DialogueCloseButton>)>,
    dialogue: Option<ResMut<DialogueSession>>,
) {
    let Some(mut dialogue) = dialogue else {
        return;
    };
    if !dialogue.is_active() {
        return;
    }

    let key_pressed = keyboard_input.any_just_pressed([CANCEL_KEY, CONFIRM_KEY]);
    let button_pressed = close_buttons.iter().any(|i| *i == Interaction::Pressed);
    if key_pressed || button_pressed {
        dialogue.close();
    }
}

pub fn sync_dialogue_panel(
    dialogue: Option<Res<DialogueSession>>,
    mut panels: Query<&mut Visibility, With<DialoguePanel>>,
    mut texts: Query<&mut Text, (With<DialogueText>, Without<DialogueSpeakerText>)>,
    mut speakers: Query<&mut Text, (With<DialogueSpeakerText>, Without<DialogueText>)>,
) {
    let Some(dialogue) = dialogue else {
        return;
    };
    if !dialogue.is_changed() {
        return;
    }

    let Ok(mut visibility) = panels.get_single_mut() else {
        warn!("Dialogue panel missing, cannot display dialogue");
        return;
    };
    *visibility = if dialogue.is_active() {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };

    if let Ok(mut text) = texts.get_single_mut() {
        text.0 = dialogue.text().to_string();
    }
    if let Ok(mut speaker) = speakers.get_single_mut() {
        speaker.0 = dialogue.speaker().to_string();
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
            .insert_resource(DialogueSession::new(0.0))
            .add_systems(Update, (close_dialogue_on_input, sync_dialogue_panel).chain());
        app.world_mut().spawn((DialoguePanel, Visibility::Hidden));
        app.world_mut().spawn((DialogueText, Text::new("")));
        app.world_mut().spawn((DialogueSpeakerText, Text::new("")));
        app
    }

    fn show(app: &mut App, line: DialogueLine) {
        app.world_mut()
            .resource_mut::<DialogueSession>()
            .show(&line, 0.0);
    }

    fn panel_visibility(app: &mut App) -> Visibility {
        *app.world_mut()
            .query_filtered::<&Visibility, With<DialoguePanel>>()
            .single(app.world())
    }

    #[test]
    fn test_panel_mirrors_session() {
        let mut app = test_app();
        show(&mut app, DialogueLine::new("A note", InteractionKind::Object));
        app.update();

        assert_eq!(panel_visibility(&mut app), Visibility::Visible);
        let text = app
            .world_mut()
            .query_filtered::<&Text, With<DialogueText>>()
            .single(app.world())
            .0
            .clone();
        assert_eq!(text, "A note");
        let speaker = app
            .world_mut()
            .query_filtered::<&Text, With<DialogueSpeakerText>>()
            .single(app.world())
            .0
            .clone();
        assert_eq!(speaker, "Clue");
    }

    #[test]
    fn test_cancel_key_closes_dialogue() {
        let mut app = test_app();
        show(&mut app, DialogueLine::new("hi", InteractionKind::Npc));
        app.update();

        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(CANCEL_KEY);
        app.update();

        assert!(!app.world().resource::<DialogueSession>().is_active());
        assert_eq!(panel_visibility(&mut app), Visibility::Hidden);
    }

    #[test]
    fn test_confirm_key_closes_dialogue() {
        let mut app = test_app();
        show(&mut app, DialogueLine::new("hi", InteractionKind::Npc));
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(CONFIRM_KEY);
        app.update();

        assert!(!app.world().resource::<DialogueSession>().is_active());
    }
}
