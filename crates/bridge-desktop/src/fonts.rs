use std::collections::HashMap;
use std::path::Path;

use bridge_engine::{AssetManifest, FontDescriptor};
use macroquad::text::{load_ttf_font, Font};

use crate::error::AssetError;

/// Fonts that loaded successfully, by manifest name.
/// Lookups that miss fall back to macroquad's built-in font.
#[derive(Default)]
pub struct FontBook {
    fonts: HashMap<String, Font>,
}

impl FontBook {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every font in the manifest. Failures are logged and skipped.
    pub async fn load(manifest: &AssetManifest, root: &Path) -> Self {
        let mut book = Self::empty();
        for (name, desc) in &manifest.fonts {
            match load_one(root, desc).await {
                Ok(font) => {
                    book.fonts.insert(name.clone(), font);
                }
                Err(err) => log::warn!("fonts: {}; `{}` uses the default font", err, name),
            }
        }
        book
    }

    pub fn get(&self, name: Option<&str>) -> Option<&Font> {
        name.and_then(|n| self.fonts.get(n))
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

async fn load_one(root: &Path, desc: &FontDescriptor) -> Result<Font, AssetError> {
    let path = root.join(&desc.path).to_string_lossy().into_owned();
    load_ttf_font(&path).await.map_err(|e| AssetError::Font {
        path,
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_or_missing_name_falls_back() {
        let book = FontBook::empty();
        assert!(book.get(None).is_none());
        assert!(book.get(Some("label")).is_none());
    }
}
