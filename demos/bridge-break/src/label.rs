use bridge_engine::{Color, DrawList, RenderLayer};
use glam::Vec2;

pub const LABEL_TEXT: &str = "RIALO.";
pub const LABEL_FONT: &str = "label";
pub const LABEL_SIZE: f32 = 48.0;
pub const LABEL_START: Vec2 = Vec2::new(-200.0, 150.0);
/// Pixels per frame.
pub const LABEL_SPEED: f32 = 12.0;
pub const TEXT_COLOR: Color = Color::rgb(0, 0, 0);

/// The flying label. Once triggered it moves right forever; the first frame
/// it reaches `impact_x` it reports the hit, and never again.
#[derive(Debug, Clone)]
pub struct Label {
    x: f32,
    y: f32,
    speed: f32,
    impact_x: f32,
    active: bool,
    bridge_hit: bool,
}

impl Label {
    pub fn new(impact_x: f32) -> Self {
        Label {
            x: LABEL_START.x,
            y: LABEL_START.y,
            speed: LABEL_SPEED,
            impact_x,
            active: false,
            bridge_hit: false,
        }
    }

    /// Start flying. Returns false if already flying.
    pub fn trigger(&mut self) -> bool {
        if self.active {
            return false;
        }
        self.active = true;
        true
    }

    /// Advance one frame. Returns true on the one frame the label reaches
    /// the impact point.
    pub fn advance(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.x += self.speed;
        if self.x >= self.impact_x && !self.bridge_hit {
            self.bridge_hit = true;
            return true;
        }
        false
    }

    pub fn render(&self, draw: &mut DrawList) {
        if !self.active {
            return;
        }
        draw.text(
            RenderLayer::UI,
            LABEL_TEXT,
            Vec2::new(self.x, self.y),
            LABEL_SIZE,
            Some(LABEL_FONT),
            TEXT_COLOR,
        );
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn impact_x(&self) -> f32 {
        self.impact_x
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn bridge_hit(&self) -> bool {
        self.bridge_hit
    }
}
