use std::{fs, path::Path};

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::interaction::InteractionKind;

/// Default location of the level description.
pub const LEVEL_CONFIG_PATH: &str = "assets/level.json";

/// Environment variable overriding [`LEVEL_CONFIG_PATH`].
pub const LEVEL_CONFIG_ENV: &str = "ESCAPE_LEVEL_CONFIG";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read level config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse level config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid level config: {0}")]
    Invalid(String),
}

/// Everything needed to build one level session.
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub start_menu_title: String,
    /// How many interactions are required before the exit unlocks.
    pub interactions_required: u32,
    /// Fails the level once this many seconds of simulation time have passed.
    pub time_limit_secs: Option<f32>,
    pub dialogue: DialogueConfig,
    pub intro: IntroConfig,
    pub interactables: Vec<InteractableConfig>,
    pub exit_door: DoorConfig,
    /// Objects that stay hidden until the threshold is reached.
    pub exit_reveals: Vec<RevealConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogueConfig {
    /// Seconds before an open dialogue closes by itself. Zero means manual close.
    pub auto_close_delay: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    pub message: String,
    pub delay: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InteractableConfig {
    pub name: String,
    pub kind: InteractionKind,
    pub message: String,
    #[serde(default)]
    pub speaker: Option<String>,
    #[serde(default = "default_true")]
    pub counts_toward_completion: bool,
    #[serde(default = "default_true")]
    pub one_time: bool,
    pub position: [f32; 3],
    #[serde(default = "default_trigger_radius")]
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DoorConfig {
    pub position: [f32; 3],
    pub radius: f32,
    pub start_unlocked: bool,
    pub locked_message: String,
    pub prompt: String,
    pub unlock_announcement: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    pub name: String,
    pub position: [f32; 3],
}

fn default_true() -> bool {
    true
}

fn default_trigger_radius() -> f32 {
    1.5
}

impl Default for DialogueConfig {
    fn default() -> Self {
        Self {
            auto_close_delay: 0.0,
        }
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self {
            message: "You are trapped in the supermarket! The exit door is locked. \
                      Find the NPC to figure out how to escape."
                .to_string(),
            delay: 0.5,
        }
    }
}

impl Default for DoorConfig {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, -4.7],
            radius: 1.5,
            start_unlocked: false,
            locked_message: "The door is locked. Complete all tasks first!".to_string(),
            prompt: "Press E to exit".to_string(),
            unlock_announcement: Some("All tasks complete! The door is now unlocked!".to_string()),
        }
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            start_menu_title: "ESCAPE THE SUPERMARKET".to_string(),
            interactions_required: 3,
            time_limit_secs: None,
            dialogue: DialogueConfig::default(),
            intro: IntroConfig::default(),
            interactables: vec![
                InteractableConfig {
                    name: "Cashier".to_string(),
                    kind: InteractionKind::Npc,
                    message: "The manager hid three notes around the store. \
                              Read them all and the exit will open."
                        .to_string(),
                    speaker: Some("Cashier".to_string()),
                    counts_toward_completion: true,
                    one_time: false,
                    position: [3.0, 0.0, 2.0],
                    radius: 1.8,
                },
                InteractableConfig {
                    name: "Freezer Note".to_string(),
                    kind: InteractionKind::Object,
                    message: "A note taped to the freezer: \"Check the shelves.\"".to_string(),
                    speaker: None,
                    counts_toward_completion: true,
                    one_time: true,
                    position: [-3.5, 0.0, 3.0],
                    radius: default_trigger_radius(),
                },
                InteractableConfig {
                    name: "Shelf Note".to_string(),
                    kind: InteractionKind::Object,
                    message: "Behind the cereal: \"The last clue is by the till.\"".to_string(),
                    speaker: None,
                    counts_toward_completion: true,
                    one_time: true,
                    position: [-3.5, 0.0, -2.5],
                    radius: default_trigger_radius(),
                },
                InteractableConfig {
                    name: "Receipt".to_string(),
                    kind: InteractionKind::Object,
                    message: "A crumpled receipt. Someone bought a lot of batteries.".to_string(),
                    speaker: None,
                    counts_toward_completion: false,
                    one_time: false,
                    position: [2.5, 0.0, -3.0],
                    radius: default_trigger_radius(),
                },
            ],
            exit_door: DoorConfig::default(),
            exit_reveals: vec![RevealConfig {
                name: "Exit Sign".to_string(),
                position: [0.0, 3.2, -4.8],
            }],
        }
    }
}

impl LevelConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Loads the level description, falling back to the built-in level when the
    /// file is missing or broken. Logging is not up yet at this point, so the
    /// outcome is returned for [`report_config_source`].
    pub fn load_or_default() -> (Self, ConfigSource) {
        let path = std::env::var(LEVEL_CONFIG_ENV).unwrap_or_else(|_| LEVEL_CONFIG_PATH.to_string());
        match Self::load(&path) {
            Ok(config) => (config, ConfigSource { path, error: None }),
            Err(err) => (
                Self::default(),
                ConfigSource {
                    path,
                    error: Some(err.to_string()),
                },
            ),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_non_negative(self.dialogue.auto_close_delay) {
            return Err(ConfigError::Invalid(format!(
                "dialogue.auto_close_delay must be a non-negative number, got {}",
                self.dialogue.auto_close_delay
            )));
        }
        if !is_non_negative(self.intro.delay) {
            return Err(ConfigError::Invalid(format!(
                "intro.delay must be a non-negative number, got {}",
                self.intro.delay
            )));
        }
        if let Some(limit) = self.time_limit_secs {
            if !is_non_negative(limit) {
                return Err(ConfigError::Invalid(format!(
                    "time_limit_secs must be a non-negative number, got {}",
                    limit
                )));
            }
        }
        for interactable in &self.interactables {
            if !is_non_negative(interactable.radius) {
                return Err(ConfigError::Invalid(format!(
                    "interactable '{}' has invalid radius {}",
                    interactable.name, interactable.radius
                )));
            }
        }
        if !is_non_negative(self.exit_door.radius) {
            return Err(ConfigError::Invalid(format!(
                "exit_door.radius must be a non-negative number, got {}",
                self.exit_door.radius
            )));
        }
        Ok(())
    }

    pub fn counting_interactables(&self) -> usize {
        self.interactables
            .iter()
            .filter(|i| i.counts_toward_completion)
            .count()
    }

    pub fn is_winnable(&self) -> bool {
        self.counting_interactables() as u32 >= self.interactions_required
    }
}

/// Where the level config came from.
#[derive(Resource, Debug, Clone)]
pub struct ConfigSource {
    pub path: String,
    pub error: Option<String>,
}

pub fn report_config_source(source: Res<ConfigSource>, config: Res<LevelConfig>) {
    match &source.error {
        None => info!("Loaded level config from {}", source.path),
        Some(err) => warn!("{} ({}), using built-in level", err, source.path),
    }
    if !config.is_winnable() {
        warn!(
            "Level needs {} interactions but only {} interactables count toward completion",
            config.interactions_required,
            config.counting_interactables()
        );
    }
}

fn is_non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
