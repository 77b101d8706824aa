use bevy::prelude::*;

use super::components::{InteractInput, Interactable, InteractableVisuals, Proximity, ProximityChange};
use crate::dialogue::DialogueSession;
use crate::progress::ProgressRequest;
use crate::sound::AudioCue;
use crate::world::set_visible;

pub fn handle_interactable_proximity(
    mut events: EventReader<Proximity>,
    mut interactables: Query<(&mut Interactable, Option<&InteractableVisuals>)>,
    mut visibilities: Query<&mut Visibility>,
) {
    for event in events.read() {
        let Ok((mut interactable, visuals)) = interactables.get_mut(event.entity) else {
            continue;
        };
        let visuals = visuals.copied().unwrap_or_default();

        let show = match event.change {
            ProximityChange::Entered => interactable.player_entered(),
            ProximityChange::Exited => {
                interactable.player_exited();
                false
            }
        };
        set_visible(&mut visibilities, visuals.prompt, show);
        set_visible(&mut visibilities, visuals.highlight, show);
    }
}

pub fn handle_interactable_input(
    mut events: EventReader<InteractInput>,
    mut interactables: Query<(&mut Interactable, Option<&InteractableVisuals>, Option<&Name>)>,
    mut visibilities: Query<&mut Visibility>,
    mut dialogue: Option<ResMut<DialogueSession>>,
    time: Res<Time>,
    mut progress: EventWriter<ProgressRequest>,
    mut audio: EventWriter<AudioCue>,
) {
    for event in events.read() {
        let Ok((mut interactable, visuals, name)) = interactables.get_mut(event.entity) else {
            continue;
        };

        let modal_open = dialogue.as_ref().is_some_and(|d| d.is_active());
        let Some(activation) = interactable.activate(modal_open, || {
            progress.send(ProgressRequest::InteractionCompleted);
            audio.send(AudioCue::Key);
        }) else {
            continue;
        };

        match dialogue.as_mut() {
            Some(dialogue) => dialogue.show(&activation.line, time.elapsed_secs()),
            None => warn!("DialogueSession not found, interaction message not shown"),
        }

        if activation.hide_visuals {
            let visuals = visuals.copied().unwrap_or_default();
            set_visible(&mut visibilities, visuals.prompt, false);
            set_visible(&mut visibilities, visuals.highlight, false);
        }

        let name = name.map(|n| n.as_str()).unwrap_or("interactable");
        info!("Interacted with {}: {}", name, activation.line.message);
    }
}
