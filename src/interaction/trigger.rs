use bevy::prelude::*;

use super::components::{InteractInput, Proximity, TriggerZone, INTERACT_KEY};
use crate::player::Player;

/// Horizontal distance between two points, ignoring height.
pub fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    Vec2::new(a.x - b.x, a.z - b.z).length()
}

/// Turns player position into enter/exit events for every trigger zone.
pub fn detect_proximity(
    player_query: Query<&Transform, With<Player>>,
    mut zones: Query<(Entity, &Transform, &mut TriggerZone), Without<Player>>,
    mut proximity: EventWriter<Proximity>,
) {
    let Ok(player) = player_query.get_single() else {
        return;
    };

    for (entity, transform, mut zone) in zones.iter_mut() {
        let distance = planar_distance(player.translation, transform.translation);
        if let Some(change) = zone.update(distance) {
            debug!("Proximity {:?} for {:?}", change, entity);
            proximity.send(Proximity { entity, change });
        }
    }
}

/// Forwards the interact key to every zone the player currently occupies.
/// Nothing is forwarded while simulation time is frozen.
pub fn dispatch_interact_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    time: Res<Time<Virtual>>,
    zones: Query<(Entity, &TriggerZone)>,
    mut interact: EventWriter<InteractInput>,
) {
    if time.is_paused() || !keyboard_input.just_pressed(INTERACT_KEY) {
        return;
    }

    for (entity, zone) in zones.iter() {
        if zone.is_occupied() {
            interact.send(InteractInput { entity });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interaction::ProximityChange;

    #[derive(Resource, Default)]
    struct Seen {
        proximity: Vec<Proximity>,
        interact: Vec<InteractInput>,
    }

    fn record(
        mut seen: ResMut<Seen>,
        mut proximity: EventReader<Proximity>,
        mut interact: EventReader<InteractInput>,
    ) {
        seen.proximity.extend(proximity.read().copied());
        seen.interact.extend(interact.read().copied());
    }

    fn test_app() -> (App, Entity, Entity) {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Seen>()
            .add_event::<Proximity>()
            .add_event::<InteractInput>()
            .add_systems(
                Update,
                (detect_proximity, dispatch_interact_input, record).chain(),
            );
        let player = app
            .world_mut()
            .spawn((Player, Transform::from_xyz(10.0, 0.0, 0.0)))
            .id();
        let zone = app
            .world_mut()
            .spawn((TriggerZone::new(1.5), Transform::from_xyz(0.0, 0.0, 0.0)))
            .id();
        (app, player, zone)
    }

    fn move_player(app: &mut App, player: Entity, x: f32) {
        app.world_mut()
            .get_mut::<Transform>(player)
            .unwrap()
            .translation
            .x = x;
    }

    #[test]
    fn test_planar_distance_ignores_height() {
        assert_eq!(planar_distance(Vec3::new(3.0, 5.0, 4.0), Vec3::ZERO), 5.0);
    }

    #[test]
    fn test_enter_and_exit_are_reported_once() {
        let (mut app, player, zone) = test_app();
        app.update();
        move_player(&mut app, player, 1.0);
        app.update();
        app.update();
        move_player(&mut app, player, 4.0);
        app.update();

        let seen = app.world().resource::<Seen>();
        assert_eq!(
            seen.proximity,
            vec![
                Proximity { entity: zone, change: ProximityChange::Entered },
                Proximity { entity: zone, change: ProximityChange::Exited },
            ]
        );
    }

    #[test]
    fn test_interact_only_reaches_occupied_zones() {
        let (mut app, player, zone) = test_app();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(INTERACT_KEY);
        app.update();
        assert!(app.world().resource::<Seen>().interact.is_empty());

        move_player(&mut app, player, 0.5);
        app.update();
        assert_eq!(app.world().resource::<Seen>().interact, vec![InteractInput { entity: zone }]);
    }

    #[test]
    fn test_no_interaction_while_time_is_paused() {
        let (mut app, player, _) = test_app();
        move_player(&mut app, player, 0.5);
        app.world_mut().resource_mut::<Time<Virtual>>().pause();
        app.world_mut()
            .resource_mut::<ButtonInput<KeyCode>>()
            .press(INTERACT_KEY);
        app.update();
        assert!(app.world().resource::<Seen>().interact.is_empty());
    }
}
