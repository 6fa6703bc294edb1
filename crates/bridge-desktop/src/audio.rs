//! Optional sound effects keyed by `SoundEvent`.

use std::collections::HashMap;
use std::path::Path;

use bridge_engine::{AssetManifest, SoundDescriptor, SoundEvent};
use macroquad::audio::{load_sound, play_sound, PlaySoundParams, Sound};

use crate::error::AssetError;

struct LoadedSound {
    sound: Sound,
    volume: f32,
}

/// Sounds that loaded successfully. Events with no loaded sound play nothing.
#[derive(Default)]
pub struct SoundBank {
    sounds: HashMap<SoundEvent, LoadedSound>,
}

impl SoundBank {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every sound in the manifest. A sound that fails to load is skipped
    /// and its event plays nothing; the failure only shows at `debug` level.
    pub async fn load(manifest: &AssetManifest, root: &Path) -> Self {
        let mut bank = Self::empty();
        for (name, desc) in &manifest.sounds {
            match load_one(root, desc).await {
                Ok(sound) => {
                    log::debug!("audio: loaded `{}` for event {}", name, desc.event_id);
                    bank.sounds.insert(
                        SoundEvent(desc.event_id),
                        LoadedSound { sound, volume: desc.volume.clamp(0.0, 1.0) },
                    );
                }
                Err(err) => log::debug!("audio: {}; `{}` will be silent", err, name),
            }
        }
        bank
    }

    /// Play the sound bound to `event` once, if it loaded.
    pub fn play(&self, event: SoundEvent) {
        if let Some(loaded) = self.sounds.get(&event) {
            play_sound(
                &loaded.sound,
                PlaySoundParams {
                    looped: false,
                    volume: loaded.volume,
                },
            );
        }
    }

    pub fn len(&self) -> usize {
        self.sounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sounds.is_empty()
    }
}

async fn load_one(root: &Path, desc: &SoundDescriptor) -> Result<Sound, AssetError> {
    let path = root.join(&desc.path).to_string_lossy().into_owned();
    load_sound(&path).await.map_err(|e| AssetError::Sound {
        path,
        reason: e.to_string(),
    })
}
