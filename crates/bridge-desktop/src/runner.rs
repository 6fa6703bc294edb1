use bridge_engine::{
    Game, GameConfig, EngineContext, RenderContext,
    InputEvent, InputQueue, DrawList,
    FixedTimestep, SoundEvent, GameEvent,
};

/// Generic game runner that wires up the engine loop.
///
/// Owns the game, its engine context, the input queue and the frame's draw
/// list. Nothing in here touches the window, so a runner can be driven
/// headless (tests, replays) by calling `tick` or `step` directly.
pub struct GameRunner<G: Game> {
    game: G,
    ctx: EngineContext,
    input: InputQueue,
    draw_list: DrawList,
    timestep: FixedTimestep,
    config: GameConfig,
    initialized: bool,
}

impl<G: Game> GameRunner<G> {
    pub fn new(game: G) -> Self {
        let config = game.config();
        let timestep = FixedTimestep::new(config.fixed_dt);

        Self {
            ctx: EngineContext::from_config(&config),
            game,
            input: InputQueue::new(),
            draw_list: DrawList::new(),
            timestep,
            config,
            initialized: false,
        }
    }

    /// Initialize the game. Call once after construction.
    pub fn init(&mut self) {
        self.game.init(&mut self.ctx);
        self.initialized = true;
        self.rebuild_draw_list();
        log::info!(
            "runner: initialized {}x{} world, step {:.4}s",
            self.config.world_width,
            self.config.world_height,
            self.config.fixed_dt,
        );
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one host frame: as many fixed steps as `frame_dt` covers, then
    /// rebuild the draw list. Returns the number of steps taken.
    pub fn tick(&mut self, frame_dt: f32) -> u32 {
        if !self.initialized {
            return 0;
        }

        self.ctx.clear_frame_data();

        let steps = self.timestep.accumulate(frame_dt);
        for _ in 0..steps {
            self.run_step();
        }

        // Input survives frames that ran no step.
        if steps > 0 {
            self.input.drain();
        }

        self.rebuild_draw_list();
        steps
    }

    /// Run exactly one fixed step regardless of wall time, consuming
    /// pending input. Sounds and events accumulate until the next `tick`.
    pub fn step(&mut self) {
        if !self.initialized {
            return;
        }
        self.run_step();
        self.input.drain();
        self.rebuild_draw_list();
    }

    fn run_step(&mut self) {
        self.game.update(&mut self.ctx, &self.input);
        self.ctx.effects.tick();
        self.ctx.advance_frame();
    }

    fn rebuild_draw_list(&mut self) {
        self.draw_list.reset(self.config.clear_color);
        {
            let mut render_ctx = RenderContext {
                draw: &mut self.draw_list,
            };
            self.game.render(&mut render_ctx);
        }
        self.ctx.effects.render(&mut self.draw_list);
        self.draw_list.finish();
    }

    pub fn draw_list(&self) -> &DrawList {
        &self.draw_list
    }

    pub fn sounds(&self) -> &[SoundEvent] {
        &self.ctx.sounds
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.ctx.events
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn context(&self) -> &EngineContext {
        &self.ctx
    }

    pub fn frame(&self) -> u64 {
        self.ctx.frame()
    }
}
