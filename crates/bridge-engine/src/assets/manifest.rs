use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::api::types::SoundEvent;

/// Asset manifest describing the optional sounds and fonts a game uses.
/// Paths are relative to the host's asset root. Every entry is optional at
/// runtime: a host that fails to load one logs it and carries on without it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssetManifest {
    /// Sound effects, keyed by name.
    #[serde(default)]
    pub sounds: BTreeMap<String, SoundDescriptor>,
    /// Fonts, keyed by the name draw commands refer to.
    #[serde(default)]
    pub fonts: BTreeMap<String, FontDescriptor>,
}

/// Describes an audio asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoundDescriptor {
    /// Relative path to the audio file.
    pub path: String,
    /// Numeric event ID that triggers this sound from game logic.
    pub event_id: u32,
    /// Playback volume, 0.0 - 1.0.
    #[serde(default = "default_volume")]
    pub volume: f32,
}

/// Describes a font asset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontDescriptor {
    /// Relative path to a TTF file.
    pub path: String,
}

fn default_volume() -> f32 {
    1.0
}

impl AssetManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Find the sound bound to a sound event.
    pub fn sound_for(&self, event: SoundEvent) -> Option<(&str, &SoundDescriptor)> {
        self.sounds
            .iter()
            .find(|(_, s)| s.event_id == event.0)
            .map(|(name, s)| (name.as_str(), s))
    }
}
