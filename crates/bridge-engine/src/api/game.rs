use crate::api::types::{SoundEvent, GameEvent};
use crate::input::queue::InputQueue;
use crate::renderer::color::Color;
use crate::renderer::draw::DrawList;
use crate::systems::effects::EffectsState;

/// Configuration for the engine, provided by the game.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Fixed timestep in seconds (default: 1/60). One step is one animation frame.
    pub fixed_dt: f32,
    /// World width in pixels.
    pub world_width: f32,
    /// World height in pixels.
    pub world_height: f32,
    /// Window title.
    pub title: String,
    /// Colour the canvas is cleared to before every frame.
    pub clear_color: Color,
    /// Seed for the effects RNG. Same seed, same animation.
    pub seed: u64,
    /// Expected number of sound events per frame (pre-allocation hint).
    pub max_sounds: usize,
    /// Expected number of game events per frame (pre-allocation hint).
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            world_width: 800.0,
            world_height: 600.0,
            title: String::from("bridge-engine"),
            clear_color: Color::BLACK,
            seed: 42,
            max_sounds: 32,
            max_events: 32,
        }
    }
}

/// The core contract every game must fulfill.
pub trait Game {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> GameConfig {
        GameConfig::default()
    }

    /// Setup initial state.
    fn init(&mut self, ctx: &mut EngineContext);

    /// Advance the game by exactly one fixed step.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);

    /// Read-only render pass. Push draw commands for everything the game owns;
    /// effects are drawn by the runner afterwards.
    fn render(&self, ctx: &mut RenderContext);
}

/// Mutable access to engine state, passed to Game::init and Game::update.
pub struct EngineContext {
    pub effects: EffectsState,
    pub sounds: Vec<SoundEvent>,
    pub events: Vec<GameEvent>,
    frame: u64,
}

impl EngineContext {
    pub fn new() -> Self {
        Self::from_config(&GameConfig::default())
    }

    /// Create a context sized and seeded from the game's configuration.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            effects: EffectsState::new(config.seed),
            sounds: Vec::with_capacity(config.max_sounds),
            events: Vec::with_capacity(config.max_events),
            frame: 0,
        }
    }

    /// Number of fixed steps completed so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Mark the end of a fixed step.
    pub fn advance_frame(&mut self) {
        self.frame += 1;
    }

    /// Queue a sound for the host to play.
    pub fn emit_sound(&mut self, event: SoundEvent) {
        self.sounds.push(event);
    }

    /// Queue a game event for the host.
    pub fn emit_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Clear per-frame transient data (sounds, events).
    pub fn clear_frame_data(&mut self) {
        self.sounds.clear();
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Render context handed to Game::render.
pub struct RenderContext<'a> {
    pub draw: &'a mut DrawList,
}
