use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::dialogue::DialogueLine;

/// Key that activates whatever the player is standing next to.
pub const INTERACT_KEY: KeyCode = KeyCode::KeyE;

/// What sort of thing the player is talking to. Drives the dialogue speaker label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Npc,
    Object,
    Door,
}

/// A scene entity the player can activate at close range.
#[derive(Component, Debug, Clone)]
pub struct Interactable {
    pub kind: InteractionKind,
    pub message: String,
    pub speaker: Option<String>,
    pub counts_toward_completion: bool,
    pub one_time: bool,
    has_interacted: bool,
    player_in_range: bool,
}

/// Result of a successful activation.
#[derive(Debug, Clone, PartialEq)]
pub struct Activation {
    pub line: DialogueLine,
    /// True when this activation used up a one-time interactable.
    pub hide_visuals: bool,
}

impl Interactable {
    pub fn new(kind: InteractionKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            speaker: None,
            counts_toward_completion: true,
            one_time: true,
            has_interacted: false,
            player_in_range: false,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    pub fn counting(mut self, counts: bool) -> Self {
        self.counts_toward_completion = counts;
        self
    }

    pub fn repeatable(mut self) -> Self {
        self.one_time = false;
        self
    }

    pub fn has_interacted(&self) -> bool {
        self.has_interacted
    }

    pub fn player_in_range(&self) -> bool {
        self.player_in_range
    }

    /// A one-time interactable that has already been used.
    pub fn is_exhausted(&self) -> bool {
        self.one_time && self.has_interacted
    }

    /// Marks the player as present. Returns whether the prompt and highlight
    /// should be shown.
    pub fn player_entered(&mut self) -> bool {
        self.player_in_range = true;
        !self.is_exhausted()
    }

    pub fn player_exited(&mut self) {
        self.player_in_range = false;
    }

    /// Activates the interactable.
    ///
    /// `register_progress` runs at most once over the lifetime of the entity,
    /// and always before `has_interacted` is set.
    pub fn activate(
        &mut self,
        modal_open: bool,
        register_progress: impl FnOnce(),
    ) -> Option<Activation> {
        if !self.player_in_range || modal_open || self.is_exhausted() {
            return None;
        }

        let mut line = DialogueLine::new(self.message.clone(), self.kind);
        if let Some(speaker) = &self.speaker {
            line = line.with_speaker(speaker.clone());
        }

        if self.counts_toward_completion && !self.has_interacted {
            register_progress();
        }
        self.has_interacted = true;

        Some(Activation {
            line,
            hide_visuals: self.one_time,
        })
    }
}

/// Optional presentation entities toggled by an interactable.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct InteractableVisuals {
    pub prompt: Option<Entity>,
    pub highlight: Option<Entity>,
}

/// Circular zone around an entity. Tracks whether the player is inside.
#[derive(Component, Debug, Clone)]
pub struct TriggerZone {
    pub radius: f32,
    occupied: bool,
}

impl TriggerZone {
    pub fn new(radius: f32) -> Self {
        Self {
            radius,
            occupied: false,
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    /// Updates occupancy from a horizontal distance. Returns the change, if any.
    pub fn update(&mut self, distance: f32) -> Option<ProximityChange> {
        let inside = distance <= self.radius;
        if inside == self.occupied {
            return None;
        }
        self.occupied = inside;
        Some(if inside {
            ProximityChange::Entered
        } else {
            ProximityChange::Exited
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProximityChange {
    Entered,
    Exited,
}

/// The player entered or left the trigger zone of `entity`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proximity {
    pub entity: Entity,
    pub change: ProximityChange,
}

/// The interact key was pressed while the player stood in the zone of `entity`.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractInput {
    pub entity: Entity,
}
