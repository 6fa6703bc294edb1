use thiserror::Error;

/// Failures while loading optional assets. None of these are fatal: the host
/// logs them and runs without the asset.
#[derive(Debug, Error)]
pub enum AssetError {
    #[error("failed to load sound `{path}`: {reason}")]
    Sound { path: String, reason: String },

    #[error("failed to load font `{path}`: {reason}")]
    Font { path: String, reason: String },

    #[error("invalid asset manifest: {0}")]
    Manifest(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_asset() {
        let err = AssetError::Sound {
            path: "assets/collapse.wav".into(),
            reason: "file not found".into(),
        };
        assert_eq!(err.to_string(), "failed to load sound `assets/collapse.wav`: file not found");
    }

    #[test]
    fn manifest_errors_convert() {
        let parse = bridge_engine::AssetManifest::from_json("{ nope").unwrap_err();
        let err: AssetError = parse.into();
        assert!(err.to_string().starts_with("invalid asset manifest"));
    }
}
