use bevy::prelude::*;

/// How a level session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    LevelComplete,
    GameOver,
}

/// Result of [`GameProgress::register_interaction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Registration {
    /// Game already over, or nothing left to count.
    Ignored,
    Counted { remaining: u32 },
    /// This registration brought the remaining count to zero.
    ThresholdReached,
}

/// Progress of the current level session.
///
/// `remaining` only ever goes down, and once an outcome is latched nothing
/// changes until the level is rebuilt.
#[derive(Resource, Debug, Clone)]
pub struct GameProgress {
    required: u32,
    remaining: u32,
    outcome: Option<Outcome>,
}

impl GameProgress {
    pub fn new(required: u32) -> Self {
        Self {
            required,
            remaining: required,
            outcome: None,
        }
    }

    pub fn register_interaction(&mut self) -> Registration {
        if self.is_game_over() || self.remaining == 0 {
            return Registration::Ignored;
        }

        self.remaining -= 1;
        if self.remaining == 0 {
            Registration::ThresholdReached
        } else {
            Registration::Counted {
                remaining: self.remaining,
            }
        }
    }

    /// Latches the win. Returns false if the session had already ended.
    pub fn level_complete(&mut self) -> bool {
        self.finish(Outcome::LevelComplete)
    }

    /// Latches the loss. Returns false if the session had already ended.
    pub fn game_over(&mut self) -> bool {
        self.finish(Outcome::GameOver)
    }

    fn finish(&mut self, outcome: Outcome) -> bool {
        if self.is_game_over() {
            return false;
        }
        self.outcome = Some(outcome);
        true
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn required(&self) -> u32 {
        self.required
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn hud_text(&self) -> String {
        format!("Interactions Remaining: {}", self.remaining)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_registrations_reach_threshold() {
        let mut progress = GameProgress::new(3);
        assert_eq!(progress.register_interaction(), Registration::Counted { remaining: 2 });
        assert_eq!(progress.register_interaction(), Registration::Counted { remaining: 1 });
        assert_eq!(progress.register_interaction(), Registration::ThresholdReached);
        assert_eq!(progress.remaining(), 0);

        assert_eq!(progress.register_interaction(), Registration::Ignored);
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn test_remaining_never_increases_or_underflows() {
        let mut progress = GameProgress::new(5);
        let mut previous = progress.remaining();
        let mut counted = 0;
        for _ in 0..20 {
            if progress.register_interaction() != Registration::Ignored {
                counted += 1;
            }
            assert!(progress.remaining() <= previous);
            previous = progress.remaining();
        }
        assert_eq!(counted, 5);
        assert_eq!(progress.remaining(), 0);
    }

    #[test]
    fn test_nothing_changes_after_game_over() {
        let mut progress = GameProgress::new(3);
        progress.register_interaction();
        assert!(progress.game_over());

        assert_eq!(progress.register_interaction(), Registration::Ignored);
        assert_eq!(progress.remaining(), 2);
        assert!(!progress.level_complete());
        assert!(!progress.game_over());
        assert_eq!(progress.outcome(), Some(Outcome::GameOver));
    }

    #[test]
    fn test_level_complete_latches_once() {
        let mut progress = GameProgress::new(1);
        assert!(progress.level_complete());
        assert!(!progress.level_complete());
        assert!(!progress.game_over());
        assert_eq!(progress.outcome(), Some(Outcome::LevelComplete));
    }

    #[test]
    fn test_zero_required_starts_at_threshold() {
        let mut progress = GameProgress::new(0);
        assert_eq!(progress.remaining(), 0);
        assert_eq!(progress.register_interaction(), Registration::Ignored);
    }

    #[test]
    fn test_hud_text() {
        let mut progress = GameProgress::new(2);
        progress.register_interaction();
        assert_eq!(progress.hud_text(), "Interactions Remaining: 1");
        assert_eq!(progress.required(), 2);
    }
}
