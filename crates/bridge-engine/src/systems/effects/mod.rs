//! Visual effects: dust particles and the seeded RNG that drives all jitter.

mod rng;
mod dust;

pub use rng::Rng;
pub use dust::{Dust, DustSpec};

use glam::Vec2;

use crate::renderer::draw::DrawList;

/// Container for all live effects plus the shared RNG.
/// Games spawn into it from `Game::update`; the runner ticks and draws it.
pub struct EffectsState {
    pub dust: Vec<Dust>,
    pub rng: Rng,
}

impl EffectsState {
    /// Create a new EffectsState with the given RNG seed.
    pub fn new(seed: u64) -> Self {
        EffectsState {
            dust: Vec::with_capacity(64),
            rng: Rng::new(seed.wrapping_add(7919)),
        }
    }

    /// Spawn `count` dust particles around `origin`.
    pub fn spawn_dust(&mut self, origin: Vec2, count: usize, spec: &DustSpec) {
        for _ in 0..count {
            let dust = Dust::spawn(origin, spec, &mut self.rng);
            self.dust.push(dust);
        }
    }

    /// Advance every particle one frame and drop the expired ones.
    pub fn tick(&mut self) {
        self.dust.retain_mut(|d| d.advance());
    }

    pub fn render(&self, draw: &mut DrawList) {
        for d in &self.dust {
            d.render(draw);
        }
    }

    pub fn dust_count(&self) -> usize {
        self.dust.len()
    }
}
