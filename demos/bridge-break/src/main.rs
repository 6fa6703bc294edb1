use std::path::Path;

use bridge_break::{BridgeBreak, ASSET_ROOT, MANIFEST_JSON};
use bridge_desktop::{manifest_or_default, run, window_conf};
use bridge_engine::Game;
use macroquad::window::Conf;

fn conf() -> Conf {
    window_conf(&BridgeBreak::new().config())
}

#[macroquad::main(conf)]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let manifest = manifest_or_default(MANIFEST_JSON);
    run(BridgeBreak::new(), &manifest, Path::new(ASSET_ROOT)).await;
}
