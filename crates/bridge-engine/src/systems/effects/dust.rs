//! Dust particles: short-lived puffs with per-frame gravity and a frame-count lifetime.

use glam::Vec2;

use super::rng::Rng;
use crate::renderer::color::Color;
use crate::renderer::draw::DrawList;
use crate::renderer::layer::RenderLayer;

/// Spawn parameters for a burst of dust. Ranges are inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct DustSpec {
    /// Horizontal scatter around the origin, in whole pixels.
    pub scatter_x: (i32, i32),
    /// Radius in whole pixels.
    pub radius: (i32, i32),
    /// Initial horizontal velocity per frame.
    pub vx: (f32, f32),
    /// Initial vertical velocity per frame (negative is up).
    pub vy: (f32, f32),
    /// Added to vertical velocity every frame.
    pub gravity: f32,
    /// Lifetime in frames.
    pub lifetime: i32,
    pub color: Color,
}

impl Default for DustSpec {
    fn default() -> Self {
        Self {
            scatter_x: (-10, 10),
            radius: (2, 5),
            vx: (-1.5, 1.5),
            vy: (-2.0, -0.5),
            gravity: 0.1,
            lifetime: 30,
            color: Color::rgb(150, 150, 150),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Dust {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: u32,
    /// Frames left. The particle is dead at zero or below.
    pub life: i32,
    pub gravity: f32,
    pub color: Color,
}

impl Dust {
    /// Roll one particle around `origin`.
    pub fn spawn(origin: Vec2, spec: &DustSpec, rng: &mut Rng) -> Self {
        let x = origin.x + rng.range_i32(spec.scatter_x.0, spec.scatter_x.1) as f32;
        let radius = rng.range_i32(spec.radius.0, spec.radius.1).max(0) as u32;
        let vy = rng.uniform(spec.vy.0, spec.vy.1);
        let vx = rng.uniform(spec.vx.0, spec.vx.1);
        Dust {
            position: Vec2::new(x, origin.y),
            velocity: Vec2::new(vx, vy),
            radius,
            life: spec.lifetime,
            gravity: spec.gravity,
            color: spec.color,
        }
    }

    /// Advance one frame. Returns false once the particle has expired.
    pub fn advance(&mut self) -> bool {
        self.position += self.velocity;
        self.life -= 1;
        self.velocity.y += self.gravity;
        !self.is_expired()
    }

    pub fn is_expired(&self) -> bool {
        self.life <= 0
    }

    pub fn render(&self, draw: &mut DrawList) {
        if self.is_expired() {
            return;
        }
        let center = Vec2::new(self.position.x.trunc(), self.position.y.trunc());
        draw.circle(RenderLayer::VFX, center, self.radius as f32, self.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still(life: i32) -> Dust {
        Dust {
            position: Vec2::new(10.0, 10.0),
            velocity: Vec2::new(1.0, -1.0),
            radius: 3,
            life,
            gravity: 0.1,
            color: Color::GRAY,
        }
    }

    #[test]
    fn spawn_stays_within_ranges() {
        let spec = DustSpec::default();
        let mut rng = Rng::new(5);
        for _ in 0..500 {
            let d = Dust::spawn(Vec2::new(100.0, 50.0), &spec, &mut rng);
            assert!((90.0..=110.0).contains(&d.position.x));
            assert_eq!(d.position.y, 50.0);
            assert!((2..=5).contains(&d.radius));
            assert!((-1.5..=1.5).contains(&d.velocity.x));
            assert!((-2.0..=-0.5).contains(&d.velocity.y));
            assert_eq!(d.life, 30);
        }
    }

    #[test]
    fn advance_moves_then_applies_gravity() {
        let mut d = still(30);
        assert!(d.advance());
        assert_eq!(d.position, Vec2::new(11.0, 9.0));
        assert_eq!(d.life, 29);
        assert!((d.velocity.y - (-0.9)).abs() < 1e-6);
    }

    #[test]
    fn lifetime_counts_down_by_one_until_expired() {
        let mut d = still(30);
        for expected in (1..30).rev() {
            assert!(d.advance());
            assert_eq!(d.life, expected);
        }
        assert!(!d.advance());
        assert!(d.is_expired());
    }

    #[test]
    fn expired_dust_is_not_drawn() {
        let mut draw = DrawList::new();
        still(0).render(&mut draw);
        assert!(draw.is_empty());
        still(1).render(&mut draw);
        assert_eq!(draw.len(), 1);
    }
}
