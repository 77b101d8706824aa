use bevy::prelude::*;

use crate::interaction::InteractionKind;

/// A single message to put on the dialogue panel.
#[derive(Debug, Clone, PartialEq)]
pub struct DialogueLine {
    pub message: String,
    pub kind: InteractionKind,
    pub speaker: Option<String>,
}

impl DialogueLine {
    pub fn new(message: impl Into<String>, kind: InteractionKind) -> Self {
        Self {
            message: message.into(),
            kind,
            speaker: None,
        }
    }

    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Name shown above the message. An explicit speaker wins, otherwise clues
    /// are labelled and everything else stays blank.
    pub fn speaker_label(&self) -> &str {
        match self.speaker.as_deref() {
            Some(speaker) if !speaker.is_empty() => speaker,
            _ => match self.kind {
                InteractionKind::Object => "Clue",
                InteractionKind::Npc | InteractionKind::Door => "",
            },
        }
    }
}

/// The one modal dialogue of the level session.
///
/// Showing a line while another is open replaces it in place. While active,
/// interaction input is suppressed.
#[derive(Resource, Debug, Default)]
pub struct DialogueSession {
    auto_close_delay: f32,
    active: bool,
    text: String,
    speaker: String,
    auto_close_deadline: Option<f32>,
}

impl DialogueSession {
    pub fn new(auto_close_delay: f32) -> Self {
        Self {
            auto_close_delay,
            ..default()
        }
    }

    pub fn show(&mut self, line: &DialogueLine, now: f32) {
        self.active = true;
        self.text = line.message.clone();
        self.speaker = line.speaker_label().to_string();

        // A pending close from an earlier line must never close this one early.
        self.auto_close_deadline = if self.auto_close_delay > 0.0 {
            Some(now + self.auto_close_delay)
        } else {
            None
        };
    }

    pub fn close(&mut self) {
        self.active = false;
        self.auto_close_deadline = None;
    }

    /// Closes the dialogue once its deadline has passed. Returns true if it closed.
    pub fn tick(&mut self, now: f32) -> bool {
        match self.auto_close_deadline {
            Some(deadline) if self.active && now >= deadline => {
                self.close();
                true
            }
            _ => false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn speaker(&self) -> &str {
        &self.speaker
    }

    pub fn auto_close_deadline(&self) -> Option<f32> {
        self.auto_close_deadline
    }
}
