//! Desktop host for bridge-engine games.
//!
//! The engine is headless; this crate owns everything that touches the
//! machine: the window, frame pacing, key polling, audio and drawing. A game
//! binary only needs a window config and a call to [`run`]:
//!
//! ```ignore
//! use bridge_desktop::{run, window_conf};
//!
//! fn conf() -> macroquad::window::Conf {
//!     window_conf(&MyGame::new().config())
//! }
//!
//! #[macroquad::main(conf)]
//! async fn main() {
//!     run(MyGame::new(), &manifest, Path::new("assets")).await;
//! }
//! ```

pub mod audio;
pub mod canvas;
pub mod error;
pub mod fonts;
pub mod input;
pub mod runner;

pub use audio::SoundBank;
pub use error::AssetError;
pub use fonts::FontBook;
pub use runner::GameRunner;

use std::path::Path;

use bridge_engine::{AssetManifest, Game, GameConfig};
use macroquad::input::{is_quit_requested, prevent_quit};
use macroquad::time::get_frame_time;
use macroquad::window::{next_frame, Conf};

/// Window configuration matching the game's world size.
pub fn window_conf(config: &GameConfig) -> Conf {
    Conf {
        window_title: config.title.clone(),
        window_width: config.world_width as i32,
        window_height: config.world_height as i32,
        window_resizable: false,
        high_dpi: false,
        ..Default::default()
    }
}

/// Parse a manifest, falling back to an empty one (no sounds, default font).
pub fn manifest_or_default(json: &str) -> AssetManifest {
    match AssetManifest::from_json(json).map_err(AssetError::from) {
        Ok(manifest) => manifest,
        Err(err) => {
            log::warn!("{}; running without assets", err);
            AssetManifest::default()
        }
    }
}

/// Run `game` until the window is closed.
///
/// Each frame: poll keys, advance the simulation by the elapsed time in
/// fixed steps, play queued sounds, replay the draw list, then wait for the
/// next frame.
pub async fn run<G: Game>(game: G, manifest: &AssetManifest, asset_root: &Path) {
    let mut runner = GameRunner::new(game);
    runner.init();

    let sounds = SoundBank::load(manifest, asset_root).await;
    let fonts = FontBook::load(manifest, asset_root).await;
    log::info!("host: {} sound(s), {} font(s) loaded", sounds.len(), fonts.len());

    prevent_quit();
    loop {
        if is_quit_requested() {
            break;
        }

        for event in input::poll_keys() {
            runner.push_input(event);
        }

        runner.tick(get_frame_time());

        for sound in runner.sounds() {
            sounds.play(*sound);
        }
        for event in runner.events() {
            log::debug!(
                "event kind={} a={} b={} c={}",
                event.kind, event.a, event.b, event.c,
            );
        }

        canvas::present(runner.draw_list(), &fonts);
        next_frame().await;
    }

    log::info!("host: window closed after {} frame(s)", runner.frame());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_matches_world() {
        let config = GameConfig {
            world_width: 800.0,
            world_height: 400.0,
            title: "demo".into(),
            ..GameConfig::default()
        };
        let conf = window_conf(&config);
        assert_eq!(conf.window_width, 800);
        assert_eq!(conf.window_height, 400);
        assert_eq!(conf.window_title, "demo");
        assert!(!conf.window_resizable);
    }

    #[test]
    fn bad_manifest_falls_back_to_empty() {
        assert_eq!(manifest_or_default("not json"), AssetManifest::default());
        let m = manifest_or_default(r#"{ "fonts": { "label": { "path": "a.ttf" } } }"#);
        assert_eq!(m.fonts.len(), 1);
    }
}
