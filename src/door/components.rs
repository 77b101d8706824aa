use bevy::prelude::*;

use crate::dialogue::DialogueLine;
use crate::interaction::InteractionKind;

/// Gated exit. Starts locked unless configured otherwise; once unlocked it
/// stays unlocked for the rest of the session.
#[derive(Component, Debug, Clone)]
pub struct Door {
    pub locked_message: String,
    pub unlock_announcement: Option<String>,
    locked: bool,
    player_in_range: bool,
}

/// What activating a door leads to.
#[derive(Debug, Clone, PartialEq)]
pub enum DoorActivation {
    Locked(DialogueLine),
    Exit,
}

impl Door {
    pub fn new(locked_message: impl Into<String>) -> Self {
        Self {
            locked_message: locked_message.into(),
            unlock_announcement: None,
            locked: true,
            player_in_range: false,
        }
    }

    pub fn with_announcement(mut self, announcement: impl Into<String>) -> Self {
        self.unlock_announcement = Some(announcement.into());
        self
    }

    pub fn pre_unlocked(mut self) -> Self {
        self.locked = false;
        self
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn player_in_range(&self) -> bool {
        self.player_in_range
    }

    pub fn player_entered(&mut self) {
        self.player_in_range = true;
    }

    pub fn player_exited(&mut self) {
        self.player_in_range = false;
    }

    /// Returns true only on the call that actually unlocks the door.
    pub fn unlock(&mut self) -> bool {
        if !self.locked {
            return false;
        }
        self.locked = false;
        true
    }

    /// `(locked indicator visible, unlocked indicator visible)`.
    pub fn indicator_state(&self) -> (bool, bool) {
        (self.locked, !self.locked)
    }

    pub fn activate(&self, modal_open: bool) -> Option<DoorActivation> {
        if !self.player_in_range || modal_open {
            return None;
        }
        Some(if self.locked {
            DoorActivation::Locked(DialogueLine::new(
                self.locked_message.clone(),
                InteractionKind::Door,
            ))
        } else {
            DoorActivation::Exit
        })
    }

    pub fn announcement(&self) -> Option<DialogueLine> {
        self.unlock_announcement
            .as_ref()
            .map(|message| DialogueLine::new(message.clone(), InteractionKind::Door))
    }
}

/// Marker for the door unlocked when the threshold is reached.
#[derive(Component)]
pub struct ExitDoor;

/// Marker for objects revealed when the threshold is reached.
#[derive(Component)]
pub struct ExitReveal;

/// Optional presentation entities toggled by a door.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct DoorVisuals {
    pub locked_indicator: Option<Entity>,
    pub unlocked_indicator: Option<Entity>,
    pub prompt: Option<Entity>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn door_in_range() -> Door {
        let mut door = Door::new("locked!");
        door.player_entered();
        door
    }

    #[test]
    fn test_door_starts_locked() {
        let door = Door::new("locked!");
        assert!(door.is_locked());
        assert_eq!(door.indicator_state(), (true, false));
        assert!(!Door::new("x").pre_unlocked().is_locked());
    }

    #[test]
    fn test_unlock_is_idempotent() {
        let mut door = Door::new("locked!");
        assert!(door.unlock());
        let after_first = door.indicator_state();
        assert!(!door.unlock());
        assert_eq!(door.indicator_state(), after_first);
        assert_eq!(after_first, (false, true));
    }

    #[test]
    fn test_locked_door_shows_message() {
        let door = door_in_range();
        match door.activate(false) {
            Some(DoorActivation::Locked(line)) => {
                assert_eq!(line.message, "locked!");
                assert_eq!(line.speaker_label(), "");
            }
            other => panic!("unexpected activation {:?}", other),
        }
    }

    #[test]
    fn test_unlocked_door_exits() {
        let mut door = door_in_range();
        door.unlock();
        assert_eq!(door.activate(false), Some(DoorActivation::Exit));
    }

    #[test]
    fn test_activation_needs_range_and_no_modal() {
        let mut door = Door::new("locked!");
        assert_eq!(door.activate(false), None);
        door.player_entered();
        assert_eq!(door.activate(true), None);
        door.player_exited();
        assert_eq!(door.activate(false), None);
    }

    #[test]
    fn test_announcement_is_optional() {
        assert!(Door::new("x").announcement().is_none());
        let line = Door::new("x").with_announcement("open!").announcement().unwrap();
        assert_eq!(line.message, "open!");
        assert_eq!(line.kind, InteractionKind::Door);
    }
}
