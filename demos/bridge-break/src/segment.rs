//! Bridge planks: rest, shake, then fall.

use bridge_engine::{
    Color, DrawList, DustSpec, EngineContext, GameEvent, Rect, RenderLayer, SoundEvent,
};
use glam::Vec2;

pub const SEGMENT_WIDTH: f32 = 60.0;
pub const SEGMENT_HEIGHT: f32 = 20.0;
pub const CORNER_RADIUS: f32 = 3.0;

/// Frames a segment shakes before it lets go.
pub const SHAKE_FRAMES: u32 = 30;
/// Horizontal jitter while shaking, in whole pixels (inclusive).
pub const SHAKE_JITTER: (i32, i32) = (-4, 4);
/// Velocity added every falling frame.
pub const GRAVITY: f32 = 0.5;
/// A falling plank whose top reaches this line raises dust.
pub const GROUND_Y: f32 = 330.0;
pub const DUST_PER_IMPACT: usize = 10;

pub const PILLAR_LENGTH: f32 = 60.0;
pub const PILLAR_THICKNESS: f32 = 4.0;

pub const BRIDGE_COLOR: Color = Color::rgb(100, 60, 40);
pub const PILLAR_COLOR: Color = Color::rgb(70, 70, 70);

pub const SOUND_COLLAPSE: SoundEvent = SoundEvent(1);
pub const EVENT_SEGMENT_FALLING: u32 = 2;
pub const EVENT_SEGMENT_LANDED: u32 = 3;

/// Where a segment is in its life. Transitions only go forward:
/// Resting -> Shaking -> Falling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Resting,
    Shaking { timer: u32 },
    Falling { velocity: f32, hit_ground: bool },
}

#[derive(Debug, Clone)]
pub struct Segment {
    origin_x: f32,
    rect: Rect,
    phase: Phase,
    /// Render-only jitter; never moves `rect`.
    shake_offset: f32,
}

impl Segment {
    pub fn new(x: f32, y: f32) -> Self {
        Segment {
            origin_x: x,
            rect: Rect::new(x, y, SEGMENT_WIDTH, SEGMENT_HEIGHT),
            phase: Phase::Resting,
            shake_offset: 0.0,
        }
    }

    /// Start the shake. Only a resting segment can be armed; returns whether it was.
    pub fn arm(&mut self) -> bool {
        if self.phase != Phase::Resting {
            return false;
        }
        self.phase = Phase::Shaking { timer: SHAKE_FRAMES };
        true
    }

    /// Advance one frame. `index` is only used to tag events and logs.
    pub fn advance(&mut self, index: usize, ctx: &mut EngineContext) {
        match self.phase {
            Phase::Resting => {
                self.rect.x = self.origin_x;
                self.shake_offset = 0.0;
            }
            Phase::Shaking { timer } => {
                let timer = timer.saturating_sub(1);
                let (lo, hi) = SHAKE_JITTER;
                self.shake_offset = ctx.effects.rng.range_i32(lo, hi) as f32;
                if timer == 0 {
                    self.phase = Phase::Falling { velocity: 0.0, hit_ground: false };
                    self.shake_offset = 0.0;
                    ctx.emit_sound(SOUND_COLLAPSE);
                    ctx.emit_event(GameEvent::new(EVENT_SEGMENT_FALLING).with_payload(index as f32, self.rect.x, self.rect.y));
                    log::debug!("segment {}: falling", index);
                } else {
                    self.phase = Phase::Shaking { timer };
                }
            }
            Phase::Falling { velocity, hit_ground } => {
                let velocity = velocity + GRAVITY;
                self.rect.y += velocity;
                let landed = !hit_ground && self.rect.y >= GROUND_Y;
                self.phase = Phase::Falling { velocity, hit_ground: hit_ground || landed };
                if landed {
                    let origin = self.rect.bottom_center();
                    ctx.effects.spawn_dust(origin, DUST_PER_IMPACT, &DustSpec::default());
                    ctx.emit_event(GameEvent::new(EVENT_SEGMENT_LANDED).with_payload(index as f32, origin.x, origin.y));
                    log::debug!("segment {}: hit ground at y={}", index, self.rect.y);
                }
            }
        }
    }

    /// Plank plus, while it still stands, its pillar. Both share the jitter.
    pub fn render(&self, draw: &mut DrawList) {
        let x = self.rendered_x();
        let dx = x - self.rect.x;
        let pos = Vec2::new(x, self.rect.y);
        draw.rounded_rect(RenderLayer::Objects, pos, self.rect.size(), CORNER_RADIUS, BRIDGE_COLOR);
        if !self.is_falling() {
            let top = self.rect.bottom_center() + Vec2::new(dx, 0.0);
            draw.line(
                RenderLayer::Objects,
                top,
                top + Vec2::new(0.0, PILLAR_LENGTH),
                PILLAR_THICKNESS,
                PILLAR_COLOR,
            );
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Logical x plus the shake jitter.
    pub fn rendered_x(&self) -> f32 {
        match self.phase {
            Phase::Shaking { .. } => self.rect.x + self.shake_offset,
            _ => self.rect.x,
        }
    }

    pub fn is_resting(&self) -> bool {
        self.phase == Phase::Resting
    }

    pub fn is_shaking(&self) -> bool {
        matches!(self.phase, Phase::Shaking { .. })
    }

    pub fn is_falling(&self) -> bool {
        matches!(self.phase, Phase::Falling { .. })
    }

    pub fn has_hit_ground(&self) -> bool {
        matches!(self.phase, Phase::Falling { hit_ground: true, .. })
    }

    pub fn velocity(&self) -> f32 {
        match self.phase {
            Phase::Falling { velocity, .. } => velocity,
            _ => 0.0,
        }
    }
}
