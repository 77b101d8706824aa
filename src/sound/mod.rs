use bevy::prelude::*;

/// One-shot sound effects requested by gameplay and UI.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    Click,
    DoorOpen,
    Key,
}

/// Handles to every clip the game plays.
#[derive(Resource, Debug, Clone, Default)]
pub struct SoundAssets {
    pub background: Handle<AudioSource>,
    pub ambience: Handle<AudioSource>,
    pub click: Handle<AudioSource>,
    pub door_open: Handle<AudioSource>,
    pub key: Handle<AudioSource>,
}

impl SoundAssets {
    pub fn clip(&self, cue: AudioCue) -> Handle<AudioSource> {
        match cue {
            AudioCue::Click => self.click.clone(),
            AudioCue::DoorOpen => self.door_open.clone(),
            AudioCue::Key => self.key.clone(),
        }
    }
}

/// Marker for the looping music and ambience players. They live for the whole app.
#[derive(Component)]
pub struct LoopingTrack;

pub struct SoundPlugin;

impl Plugin for SoundPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<AudioCue>()
            .add_systems(Startup, (load_sounds, start_loops).chain())
            .add_systems(Update, (play_button_clicks, play_audio_cues).chain());
    }
}

fn load_sounds(mut commands: Commands, asset_server: Res<AssetServer>) {
    commands.insert_resource(SoundAssets {
        background: asset_server.load("audio/background.ogg"),
        ambience: asset_server.load("audio/ambience.ogg"),
        click: asset_server.load("audio/click.ogg"),
        door_open: asset_server.load("audio/door_open.ogg"),
        key: asset_server.load("audio/key.ogg"),
    });
    info!("Sound loading started");
}

fn start_loops(mut commands: Commands, sounds: Res<SoundAssets>) {
    for track in [sounds.background.clone(), sounds.ambience.clone()] {
        commands.spawn((LoopingTrack, AudioPlayer::new(track), PlaybackSettings::LOOP));
    }
}

pub fn play_button_clicks(
    buttons: Query<&Interaction, (Changed<Interaction>, With<Button>)>,
    mut audio: EventWriter<AudioCue>,
) {
    for interaction in buttons.iter() {
        if *interaction == Interaction::Pressed {
            audio.send(AudioCue::Click);
        }
    }
}

pub fn play_audio_cues(
    mut commands: Commands,
    mut cues: EventReader<AudioCue>,
    sounds: Option<Res<SoundAssets>>,
) {
    let Some(sounds) = sounds else {
        if !cues.is_empty() {
            warn!("SoundAssets not loaded, dropping {} audio cues", cues.len());
            cues.clear();
        }
        return;
    };

    for cue in cues.read() {
        commands.spawn((AudioPlayer::new(sounds.clip(*cue)), PlaybackSettings::DESPAWN));
    }
}
