pub mod api;
pub mod core;
pub mod systems;
pub mod renderer;
pub mod input;
pub mod assets;

// Re-export key types at crate root for convenience
pub use api::game::{Game, GameConfig, EngineContext, RenderContext};
pub use api::types::{SoundEvent, GameEvent};
pub use core::time::FixedTimestep;
pub use core::rect::Rect;
pub use input::queue::{InputEvent, InputQueue, keys};
pub use renderer::color::Color;
pub use renderer::layer::RenderLayer;
pub use renderer::draw::{DrawCommand, DrawList, Shape};
pub use systems::effects::{EffectsState, Dust, DustSpec, Rng};
pub use assets::manifest::{AssetManifest, SoundDescriptor, FontDescriptor};
