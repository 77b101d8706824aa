use bevy::prelude::*;

use super::components::LevelEntity;
use super::{ROOM_DEPTH, ROOM_HEIGHT, ROOM_WIDTH, WALL_THICKNESS};
use crate::camera::PlayerCamera;
use crate::config::{DoorConfig, InteractableConfig, LevelConfig};
use crate::door::{Door, DoorVisuals, ExitDoor, ExitReveal};
use crate::interaction::{Interactable, InteractableVisuals, InteractionKind, TriggerZone};
use crate::player::{Player, Velocity, PLAYER_HEIGHT, PLAYER_RADIUS};

const HIGHLIGHT_COLOR: Color = Color::srgba(1.0, 0.9, 0.3, 0.35);

pub fn setup_world(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    config: Res<LevelConfig>,
) {
    spawn_room(&mut commands, &mut meshes, &mut materials);

    // Player body
    commands
        .spawn((
            Player,
            LevelEntity,
            Name::new("Player"),
            Velocity::default(),
            Transform::from_xyz(0.0, 0.0, 4.0),
            Visibility::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, PLAYER_HEIGHT - 2.0 * PLAYER_RADIUS))),
                MeshMaterial3d(materials.add(StandardMaterial {
                    base_color: Color::srgb(0.2, 0.4, 0.8),
                    ..default()
                })),
                Transform::from_xyz(0.0, PLAYER_HEIGHT / 2.0, 0.0),
            ));
        });

    // Camera
    commands.spawn((
        PlayerCamera,
        LevelEntity,
        Camera3d::default(),
        Transform::from_xyz(0.0, 2.0, 8.0).looking_at(Vec3::new(0.0, 1.5, 4.0), Vec3::Y),
    ));

    for interactable in &config.interactables {
        spawn_interactable(&mut commands, &mut meshes, &mut materials, interactable);
    }

    spawn_exit_door(&mut commands, &mut meshes, &mut materials, &config.exit_door);

    for reveal in &config.exit_reveals {
        commands.spawn((
            ExitReveal,
            LevelEntity,
            Name::new(reveal.name.clone()),
            Mesh3d(meshes.add(Cuboid::new(1.0, 0.3, 0.05))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.1, 0.8, 0.2),
                emissive: LinearRgba::rgb(0.2, 2.0, 0.4),
                ..default()
            })),
            Transform::from_translation(Vec3::from_array(reveal.position)),
            Visibility::Hidden,
        ));
    }

    info!(
        "World spawned: {} interactables, exit at {:?}",
        config.interactables.len(),
        config.exit_door.position
    );
}

fn spawn_room(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
) {
    // Materials
    let floor_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.55, 0.55, 0.5),
        ..default()
    });
    let wall_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.85, 0.85, 0.8),
        ..default()
    });
    let ceiling_material = materials.add(StandardMaterial {
        base_color: Color::srgb(0.9, 0.9, 0.9),
        ..default()
    });

    // Floor
    commands.spawn((
        LevelEntity,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_WIDTH, ROOM_DEPTH))),
        MeshMaterial3d(floor_material),
        Transform::from_xyz(0.0, 0.0, 0.0),
    ));

    // Ceiling
    commands.spawn((
        LevelEntity,
        Mesh3d(meshes.add(Plane3d::default().mesh().size(ROOM_WIDTH, ROOM_DEPTH))),
        MeshMaterial3d(ceiling_material),
        Transform::from_xyz(0.0, ROOM_HEIGHT, 0.0)
            .with_rotation(Quat::from_rotation_x(std::f32::consts::PI)),
    ));

    // Walls: back, front, left, right
    let walls = [
        (Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS), Vec3::new(0.0, ROOM_HEIGHT / 2.0, -ROOM_DEPTH / 2.0)),
        (Vec3::new(ROOM_WIDTH, ROOM_HEIGHT, WALL_THICKNESS), Vec3::new(0.0, ROOM_HEIGHT / 2.0, ROOM_DEPTH / 2.0)),
        (Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH), Vec3::new(-ROOM_WIDTH / 2.0, ROOM_HEIGHT / 2.0, 0.0)),
        (Vec3::new(WALL_THICKNESS, ROOM_HEIGHT, ROOM_DEPTH), Vec3::new(ROOM_WIDTH / 2.0, ROOM_HEIGHT / 2.0, 0.0)),
    ];
    for (size, position) in walls {
        commands.spawn((
            LevelEntity,
            Mesh3d(meshes.add(Cuboid::from_size(size))),
            MeshMaterial3d(wall_material.clone()),
            Transform::from_translation(position),
        ));
    }

    // Point light (ceiling light)
    commands.spawn((
        LevelEntity,
        PointLight {
            shadows_enabled: false,
            intensity: 2_000_000.0,
            range: 20.0,
            ..default()
        },
        Transform::from_xyz(0.0, ROOM_HEIGHT - 0.5, 0.0),
    ));
}

/// Screen-space prompt shown while the player stands in a trigger zone.
fn spawn_prompt(commands: &mut Commands, text: &str) -> Entity {
    commands
        .spawn((
            LevelEntity,
            Node {
                position_type: PositionType::Absolute,
                bottom: Val::Percent(30.0),
                width: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                ..default()
            },
            Visibility::Hidden,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(text),
                TextFont {
                    font_size: 22.0,
                    ..default()
                },
                TextColor(Color::srgb(1.0, 1.0, 1.0)),
                BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.6)),
                Node {
                    padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                    ..default()
                },
            ));
        })
        .id()
}

fn spawn_interactable(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &InteractableConfig,
) {
    let (mesh, color, height) = match config.kind {
        InteractionKind::Npc => (
            meshes.add(Capsule3d::new(0.3, 1.2)),
            Color::srgb(0.8, 0.4, 0.2),
            0.9,
        ),
        InteractionKind::Object | InteractionKind::Door => (
            meshes.add(Cuboid::new(0.4, 0.05, 0.3)),
            Color::srgb(0.95, 0.95, 0.8),
            1.0,
        ),
    };

    let prompt = spawn_prompt(commands, "Press E to interact");

    let mut interactable = Interactable::new(config.kind, config.message.clone())
        .counting(config.counts_toward_completion);
    if !config.one_time {
        interactable = interactable.repeatable();
    }
    if let Some(speaker) = &config.speaker {
        interactable = interactable.with_speaker(speaker.clone());
    }

    let mut entity = commands.spawn((
        interactable,
        TriggerZone::new(config.radius),
        LevelEntity,
        Name::new(config.name.clone()),
        Transform::from_translation(Vec3::from_array(config.position)),
        Visibility::default(),
    ));

    let mut highlight = None;
    entity.with_children(|parent| {
        parent.spawn((
            Mesh3d(mesh.clone()),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color,
                ..default()
            })),
            Transform::from_xyz(0.0, height, 0.0),
        ));
        highlight = Some(
            parent
                .spawn((
                    Mesh3d(mesh),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: HIGHLIGHT_COLOR,
                        alpha_mode: AlphaMode::Blend,
                        unlit: true,
                        ..default()
                    })),
                    Transform::from_xyz(0.0, height, 0.0).with_scale(Vec3::splat(1.15)),
                    Visibility::Hidden,
                ))
                .id(),
        );
    });

    entity.insert(InteractableVisuals {
        prompt: Some(prompt),
        highlight,
    });
}

fn spawn_exit_door(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    materials: &mut Assets<StandardMaterial>,
    config: &DoorConfig,
) {
    let prompt = spawn_prompt(commands, &config.prompt);

    let mut door = Door::new(config.locked_message.clone());
    if let Some(announcement) = &config.unlock_announcement {
        door = door.with_announcement(announcement.clone());
    }
    if config.start_unlocked {
        door = door.pre_unlocked();
    }

    let indicator = meshes.add(Sphere::new(0.08));
    let mut entity = commands.spawn((
        door,
        ExitDoor,
        TriggerZone::new(config.radius),
        LevelEntity,
        Name::new("Exit Door"),
        Transform::from_translation(Vec3::from_array(config.position)),
        Visibility::default(),
    ));

    let mut locked_indicator = None;
    let mut unlocked_indicator = None;
    entity.with_children(|parent| {
        parent.spawn((
            Mesh3d(meshes.add(Cuboid::new(1.2, 2.2, 0.1))),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: Color::srgb(0.4, 0.25, 0.15),
                ..default()
            })),
            Transform::from_xyz(0.0, 1.1, 0.0),
        ));
        locked_indicator = Some(
            parent
                .spawn((
                    Mesh3d(indicator.clone()),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgb(0.9, 0.1, 0.1),
                        emissive: LinearRgba::rgb(3.0, 0.2, 0.2),
                        ..default()
                    })),
                    Transform::from_xyz(0.45, 2.4, 0.1),
                    Visibility::Hidden,
                ))
                .id(),
        );
        unlocked_indicator = Some(
            parent
                .spawn((
                    Mesh3d(indicator),
                    MeshMaterial3d(materials.add(StandardMaterial {
                        base_color: Color::srgb(0.1, 0.9, 0.1),
                        emissive: LinearRgba::rgb(0.2, 3.0, 0.2),
                        ..default()
                    })),
                    Transform::from_xyz(-0.45, 2.4, 0.1),
                    Visibility::Hidden,
                ))
                .id(),
        );
    });

    entity.insert(DoorVisuals {
        locked_indicator,
        unlocked_indicator,
        prompt: Some(prompt),
    });
}
