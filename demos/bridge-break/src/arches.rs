use std::f32::consts::PI;

use bridge_engine::{Color, DrawList, RenderLayer};
use glam::Vec2;

use crate::segment::Segment;

pub const ARCH_COLOR: Color = Color::rgb(80, 40, 30);
pub const ARCH_RADIUS: f32 = 30.0;
/// Arch centre sits this far below the plank's bottom edge.
pub const ARCH_DROP: f32 = 20.0;
pub const ARCH_THICKNESS: f32 = 3.0;

/// One lower half-circle under every resting segment.
pub fn draw_arches(segments: &[Segment], draw: &mut DrawList) {
    for seg in segments.iter().filter(|s| s.is_resting()) {
        let rect = seg.rect();
        let center = Vec2::new(rect.center_x(), rect.bottom() + ARCH_DROP);
        draw.arc(RenderLayer::Terrain, center, ARCH_RADIUS, 0.0, PI, ARCH_THICKNESS, ARCH_COLOR);
    }
}
