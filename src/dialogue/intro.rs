use bevy::prelude::*;

use super::{DialogueLine, DialogueSession};
use crate::config::LevelConfig;
use crate::interaction::InteractionKind;

/// One-shot message shown shortly after the level starts.
#[derive(Resource, Debug)]
pub struct IntroDialogue {
    message: String,
    show_at: f32,
    shown: bool,
}

impl IntroDialogue {
    pub fn new(message: impl Into<String>, now: f32, delay: f32) -> Self {
        Self {
            message: message.into(),
            show_at: now + delay,
            shown: false,
        }
    }

    /// Hands out the intro line once it is due. Only ever returns it once.
    pub fn take_due(&mut self, now: f32) -> Option<DialogueLine> {
        if self.shown || now < self.show_at {
            return None;
        }
        self.shown = true;
        Some(DialogueLine::new(self.message.clone(), InteractionKind::Npc))
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }
}

pub fn schedule_intro(mut commands: Commands, config: Res<LevelConfig>, time: Res<Time>) {
    commands.insert_resource(IntroDialogue::new(
        config.intro.message.clone(),
        time.elapsed_secs(),
        config.intro.delay,
    ));
}

pub fn show_intro(
    intro: Option<ResMut<IntroDialogue>>,
    dialogue: Option<ResMut<DialogueSession>>,
    time: Res<Time>,
) {
    let Some(mut intro) = intro else {
        return;
    };
    let now = time.elapsed_secs();
    let Some(line) = intro.take_due(now) else {
        return;
    };

    match dialogue {
        Some(mut dialogue) => dialogue.show(&line, now),
        None => error!("DialogueSession not found, intro message skipped"),
    }
}
