use bevy::prelude::*;

use super::components::LevelEntity;
use crate::progress::{GameProgress, TimeLimit};

/// Marker for the crosshair UI element.
#[derive(Component)]
pub struct Crosshair;

/// Marker for the "Interactions Remaining" text.
#[derive(Component)]
pub struct InteractionsText;

/// Marker for the countdown text. Stays empty for levels without a time limit.
#[derive(Component)]
pub struct TimerText;

pub fn setup_hud(mut commands: Commands) {
    // Crosshair container (centered on screen)
    commands
        .spawn((
            Crosshair,
            LevelEntity,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                ..default()
            },
        ))
        .with_children(|parent| {
            // Crosshair dot
            parent.spawn((
                Node {
                    width: Val::Px(4.0),
                    height: Val::Px(4.0),
                    ..default()
                },
                BackgroundColor(Color::srgba(1.0, 1.0, 1.0, 0.7)),
            ));
        });

    commands.spawn((
        InteractionsText,
        LevelEntity,
        Text::new(""),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(0.95, 0.95, 0.95)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
    ));

    commands.spawn((
        TimerText,
        LevelEntity,
        Text::new(""),
        TextFont {
            font_size: 24.0,
            ..default()
        },
        TextColor(Color::srgb(1.0, 0.6, 0.3)),
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(20.0),
            top: Val::Px(20.0),
            ..default()
        },
    ));
}

pub fn update_hud(
    progress: Option<Res<GameProgress>>,
    mut texts: Query<&mut Text, With<InteractionsText>>,
) {
    let Some(progress) = progress else {
        return;
    };
    if !progress.is_changed() {
        return;
    }
    let Ok(mut text) = texts.get_single_mut() else {
        debug!("Interactions text missing, HUD not updated");
        return;
    };
    text.0 = progress.hud_text();
}

pub fn update_timer_text(
    limit: Option<Res<TimeLimit>>,
    time: Res<Time>,
    mut texts: Query<&mut Text, With<TimerText>>,
) {
    let Some(limit) = limit else {
        return;
    };
    let Ok(mut text) = texts.get_single_mut() else {
        return;
    };
    let label = format!("Time Left: {:.0}s", limit.remaining(time.elapsed_secs()).ceil());
    if text.0 != label {
        text.0 = label;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hud_tracks_remaining_interactions() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(GameProgress::new(3))
            .add_systems(Update, update_hud);
        let text = app.world_mut().spawn((InteractionsText, Text::new(""))).id();

        app.update();
        assert_eq!(app.world().get::<Text>(text).unwrap().0, "Interactions Remaining: 3");

        app.world_mut()
            .resource_mut::<GameProgress>()
            .register_interaction();
        app.update();
        assert_eq!(app.world().get::<Text>(text).unwrap().0, "Interactions Remaining: 2");
    }

    #[test]
    fn test_timer_text_counts_down_only_with_a_limit() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .add_systems(Update, update_timer_text);
        let text = app.world_mut().spawn((TimerText, Text::new(""))).id();

        app.update();
        assert_eq!(app.world().get::<Text>(text).unwrap().0, "");

        app.insert_resource(TimeLimit::new(0.0, 30.0));
        app.update();
        let label = app.world().get::<Text>(text).unwrap().0.clone();
        assert!(label.starts_with("Time Left: "), "{label}");
    }
}
