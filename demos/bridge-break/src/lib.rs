//! RIALO. breaks the bridge.
//!
//! A row of ten planks stands on pillars. Press Space and the label flies in
//! from the left; when it reaches the fourth plank, planks 3 to 6 shake for
//! half a second, drop under gravity and kick up dust where they cross the
//! ground line.

pub mod arches;
pub mod game;
pub mod label;
pub mod segment;

pub use game::BridgeBreak;
pub use label::Label;
pub use segment::{Phase, Segment};

/// Sound and font manifest, embedded so the binary needs no config file.
pub const MANIFEST_JSON: &str = include_str!("../assets/manifest.json");
/// Directory the manifest's asset paths are relative to.
pub const ASSET_ROOT: &str = "assets";

#[cfg(test)]
mod tests {
    use super::*;
    use bridge_engine::AssetManifest;

    #[test]
    fn embedded_manifest_binds_collapse_sound_and_label_font() {
        let manifest = AssetManifest::from_json(MANIFEST_JSON).unwrap();
        let (name, sound) = manifest.sound_for(segment::SOUND_COLLAPSE).unwrap();
        assert_eq!(name, "collapse");
        assert_eq!(sound.path, "collapse.wav");
        assert!(manifest.fonts.contains_key(label::LABEL_FONT));
    }
}
