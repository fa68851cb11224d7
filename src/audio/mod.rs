//! Audio domain: fire-and-forget sound triggers.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::movement::JumpSoundEvent;

/// Handles to the clips loaded at startup.
#[derive(Resource, Debug, Default)]
pub struct SoundBank {
    pub jump: Handle<AudioSource>,
}

pub struct AudioPlugin;

impl Plugin for AudioPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SoundBank>()
            .add_systems(Startup, load_sounds)
            .add_systems(Update, play_jump_sounds);
    }
}

fn load_sounds(mut bank: ResMut<SoundBank>, asset_server: Res<AssetServer>) {
    bank.jump = asset_server.load("audio/jump.ogg");
}

/// One playback per trigger; the entity despawns when the clip finishes.
fn play_jump_sounds(
    mut commands: Commands,
    mut triggers: MessageReader<JumpSoundEvent>,
    bank: Res<SoundBank>,
) {
    for _ in triggers.read() {
        commands.spawn((
            AudioPlayer::new(bank.jump.clone()),
            PlaybackSettings::DESPAWN,
        ));
    }
}
