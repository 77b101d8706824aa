use bevy::prelude::*;

use super::components::{Door, DoorActivation, DoorVisuals, ExitDoor, ExitReveal};
use crate::dialogue::DialogueSession;
use crate::interaction::{InteractInput, Proximity, ProximityChange};
use crate::progress::{ProgressRequest, ThresholdReached};
use crate::sound::AudioCue;
use crate::world::set_visible;

pub fn handle_door_proximity(
    mut events: EventReader<Proximity>,
    mut doors: Query<(&mut Door, Option<&DoorVisuals>)>,
    mut visibilities: Query<&mut Visibility>,
) {
    for event in events.read() {
        let Ok((mut door, visuals)) = doors.get_mut(event.entity) else {
            continue;
        };
        let prompt = visuals.and_then(|v| v.prompt);
        match event.change {
            ProximityChange::Entered => {
                door.player_entered();
                if prompt.is_none() {
                    warn!("Door {:?} has no interaction prompt", event.entity);
                }
                set_visible(&mut visibilities, prompt, true);
            }
            ProximityChange::Exited => {
                door.player_exited();
                set_visible(&mut visibilities, prompt, false);
            }
        }
    }
}

pub fn handle_door_input(
    mut events: EventReader<InteractInput>,
    doors: Query<&Door>,
    mut dialogue: Option<ResMut<DialogueSession>>,
    time: Res<Time>,
    mut progress: EventWriter<ProgressRequest>,
    mut audio: EventWriter<AudioCue>,
) {
    for event in events.read() {
        let Ok(door) = doors.get(event.entity) else {
            continue;
        };

        let modal_open = dialogue.as_ref().is_some_and(|d| d.is_active());
        match door.activate(modal_open) {
            Some(DoorActivation::Locked(line)) => {
                debug!("Door locked, showing message");
                match dialogue.as_mut() {
                    Some(dialogue) => dialogue.show(&line, time.elapsed_secs()),
                    None => warn!("DialogueSession not found, locked message not shown"),
                }
            }
            Some(DoorActivation::Exit) => {
                info!("Exit door used");
                audio.send(AudioCue::DoorOpen);
                progress.send(ProgressRequest::LevelComplete);
            }
            None => {}
        }
    }
}

/// Unlocks the exit and reveals exit objects once the threshold is reached.
/// The door does not report back to progress, so the chain stops here.
pub fn unlock_exit_on_threshold(
    mut events: EventReader<ThresholdReached>,
    mut exits: Query<(Entity, &mut Door), With<ExitDoor>>,
    reveals: Query<Entity, With<ExitReveal>>,
    mut visibilities: Query<&mut Visibility>,
    mut dialogue: Option<ResMut<DialogueSession>>,
    time: Res<Time>,
    mut audio: EventWriter<AudioCue>,
) {
    if events.read().count() == 0 {
        return;
    }

    if exits.is_empty() && reveals.is_empty() {
        error!("Exit door not assigned, nothing to unlock");
        return;
    }

    for (entity, mut door) in exits.iter_mut() {
        if !door.unlock() {
            continue;
        }
        info!("Door {:?} unlocked", entity);
        audio.send(AudioCue::Key);
        if let (Some(line), Some(dialogue)) = (door.announcement(), dialogue.as_mut()) {
            dialogue.show(&line, time.elapsed_secs());
        }
    }

    for entity in reveals.iter() {
        set_visible(&mut visibilities, Some(entity), true);
    }
}

/// Keeps the lock indicators in step with the door state.
pub fn sync_door_indicators(
    doors: Query<(&Door, &DoorVisuals), Changed<Door>>,
    mut visibilities: Query<&mut Visibility>,
) {
    for (door, visuals) in doors.iter() {
        let (locked, unlocked) = door.indicator_state();
        set_visible(&mut visibilities, visuals.locked_indicator, locked);
        set_visible(&mut visibilities, visuals.unlocked_indicator, unlocked);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::systems::apply_progress_requests;
    use crate::progress::{GameProgress, LevelEnded};

    struct Fixture {
        app: App,
        door: Entity,
        locked_indicator: Entity,
        unlocked_indicator: Entity,
        reveal: Entity,
    }

    fn fixture(required: u32) -> Fixture {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(DialogueSession::new(0.0))
            .insert_resource(GameProgress::new(required))
            .add_event::<Proximity>()
            .add_event::<InteractInput>()
            .add_event::<ProgressRequest>()
            .add_event::<ThresholdReached>()
            .add_event::<LevelEnded>()
            .add_event::<AudioCue>()
            .add_systems(
                Update,
                (
                    handle_door_proximity,
                    handle_door_input,
                    apply_progress_requests,
                    unlock_exit_on_threshold,
                    sync_door_indicators,
                )
                    .chain(),
            );

        let locked_indicator = app.world_mut().spawn(Visibility::Hidden).id();
        let unlocked_indicator = app.world_mut().spawn(Visibility::Hidden).id();
        let prompt = app.world_mut().spawn(Visibility::Hidden).id();
        let reveal = app.world_mut().spawn((ExitReveal, Visibility::Hidden)).id();
        let door = app
            .world_mut()
            .spawn((
                Door::new("The door is locked.").with_announcement("Unlocked!"),
                ExitDoor,
                DoorVisuals {
                    locked_indicator: Some(locked_indicator),
                    unlocked_indicator: Some(unlocked_indicator),
                    prompt: Some(prompt),
                },
            ))
            .id();

        Fixture {
            app,
            door,
            locked_indicator,
            unlocked_indicator,
            reveal,
        }
    }

    impl Fixture {
        fn send<E: Event>(&mut self, event: E) {
            self.app.world_mut().send_event(event);
        }

        fn visible(&self, entity: Entity) -> bool {
            self.app.world().get::<Visibility>(entity) != Some(&Visibility::Hidden)
        }

        fn door(&self) -> &Door {
            self.app.world().get::<Door>(self.door).unwrap()
        }

        fn dialogue(&self) -> &DialogueSession {
            self.app.world().resource::<DialogueSession>()
        }

        fn progress(&self) -> &GameProgress {
            self.app.world().resource::<GameProgress>()
        }
    }

    #[test]
    fn test_indicators_match_initial_lock() {
        let mut f = fixture(3);
        f.app.update();
        assert!(f.visible(f.locked_indicator));
        assert!(!f.visible(f.unlocked_indicator));
    }

    #[test]
    fn test_locked_door_shows_message_and_game_continues() {
        let mut f = fixture(3);
        let door = f.door;
        f.send(Proximity { entity: door, change: ProximityChange::Entered });
        f.app.update();
        f.send(InteractInput { entity: door });
        f.app.update();

        assert!(f.dialogue().is_active());
        assert_eq!(f.dialogue().text(), "The door is locked.");
        assert!(!f.progress().is_game_over());
    }

    #[test]
    fn test_three_registrations_unlock_the_door() {
        let mut f = fixture(3);
        for _ in 0..3 {
            f.send(ProgressRequest::InteractionCompleted);
        }
        f.app.update();

        assert!(!f.door().is_locked());
        assert!(!f.visible(f.locked_indicator));
        assert!(f.visible(f.unlocked_indicator));
        assert!(f.visible(f.reveal));
        assert_eq!(f.dialogue().text(), "Unlocked!");

        f.send(ProgressRequest::InteractionCompleted);
        f.app.update();
        assert_eq!(f.progress().remaining(), 0);
        assert!(!f.door().is_locked());
    }

    #[test]
    fn test_unlocked_door_completes_level() {
        let mut f = fixture(1);
        let door = f.door;
        f.send(ProgressRequest::InteractionCompleted);
        f.send(Proximity { entity: door, change: ProximityChange::Entered });
        f.app.update();
        f.app.world_mut().resource_mut::<DialogueSession>().close();

        f.send(InteractInput { entity: door });
        f.app.update();

        assert!(f.progress().is_game_over());
        assert!(f.app.world().resource::<Time<Virtual>>().is_paused());
    }

    #[test]
    fn test_second_threshold_keeps_indicators() {
        let mut f = fixture(1);
        f.send(ThresholdReached);
        f.app.update();
        let door = f.door;
        f.app
            .world_mut()
            .resource_mut::<DialogueSession>()
            .close();

        f.send(ThresholdReached);
        f.app.update();

        assert!(!f.app.world().get::<Door>(door).unwrap().is_locked());
        assert!(f.visible(f.unlocked_indicator));
        assert!(!f.visible(f.locked_indicator));
        assert!(!f.dialogue().is_active(), "second unlock must not re-announce");
    }
}
