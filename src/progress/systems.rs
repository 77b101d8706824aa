use bevy::prelude::*;

use super::state::{GameProgress, Outcome, Registration};
use crate::config::LevelConfig;

/// Requests against the level's progress. Entities never touch
/// [`GameProgress`] directly.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressRequest {
    /// A counting interactable was used for the first time.
    InteractionCompleted,
    LevelComplete,
    GameOver,
}

/// Remaining interactions reached zero.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThresholdReached;

/// The session latched an outcome. Sent exactly once per session.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelEnded(pub Outcome);

/// Optional countdown that fails the level.
#[derive(Resource, Debug)]
pub struct TimeLimit {
    deadline: f32,
    expired: bool,
}

impl TimeLimit {
    pub fn new(now: f32, limit: f32) -> Self {
        Self {
            deadline: now + limit,
            expired: false,
        }
    }

    /// True exactly once, on the first call at or past the deadline.
    pub fn expire(&mut self, now: f32) -> bool {
        if self.expired || now < self.deadline {
            return false;
        }
        self.expired = true;
        true
    }

    pub fn remaining(&self, now: f32) -> f32 {
        (self.deadline - now).max(0.0)
    }
}

pub fn setup_progress(
    mut commands: Commands,
    config: Res<LevelConfig>,
    time: Res<Time>,
    mut threshold: EventWriter<ThresholdReached>,
) {
    let progress = GameProgress::new(config.interactions_required);
    info!(
        "Level started: {} interactions required",
        progress.required()
    );
    if progress.remaining() == 0 {
        threshold.send(ThresholdReached);
    }
    commands.insert_resource(progress);

    match config.time_limit_secs {
        Some(limit) => commands.insert_resource(TimeLimit::new(time.elapsed_secs(), limit)),
        None => commands.remove_resource::<TimeLimit>(),
    }
}

pub fn teardown_progress(mut commands: Commands) {
    commands.remove_resource::<GameProgress>();
    commands.remove_resource::<TimeLimit>();
}

pub fn apply_progress_requests(
    mut requests: EventReader<ProgressRequest>,
    progress: Option<ResMut<GameProgress>>,
    mut time: ResMut<Time<Virtual>>,
    mut threshold: EventWriter<ThresholdReached>,
    mut ended: EventWriter<LevelEnded>,
) {
    let Some(mut progress) = progress else {
        if !requests.is_empty() {
            warn!("GameProgress not found, dropping {} progress requests", requests.len());
            requests.clear();
        }
        return;
    };

    for request in requests.read() {
        match request {
            ProgressRequest::InteractionCompleted => match progress.register_interaction() {
                Registration::Ignored => {}
                Registration::Counted { remaining } => {
                    info!("Interaction registered, {} remaining", remaining);
                }
                Registration::ThresholdReached => {
                    info!("All interactions complete");
                    threshold.send(ThresholdReached);
                }
            },
            ProgressRequest::LevelComplete => {
                if progress.level_complete() {
                    end_level(&mut time, &mut ended, Outcome::LevelComplete);
                }
            }
            ProgressRequest::GameOver => {
                if progress.game_over() {
                    end_level(&mut time, &mut ended, Outcome::GameOver);
                }
            }
        }
    }
}

fn end_level(time: &mut Time<Virtual>, ended: &mut EventWriter<LevelEnded>, outcome: Outcome) {
    info!("Level ended: {:?}", outcome);
    time.pause();
    ended.send(LevelEnded(outcome));
}

pub fn tick_time_limit(
    limit: Option<ResMut<TimeLimit>>,
    time: Res<Time>,
    mut requests: EventWriter<ProgressRequest>,
) {
    let Some(mut limit) = limit else {
        return;
    };
    if limit.expire(time.elapsed_secs()) {
        info!("Time limit reached");
        requests.send(ProgressRequest::GameOver);
    }
}
