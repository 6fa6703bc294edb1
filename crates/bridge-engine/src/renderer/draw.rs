//! Layered list of primitive draw commands.
//!
//! The simulation never talks to a graphics API. Each frame the runner clears
//! a `DrawList`, the game and the effects push shapes into it, and the host
//! replays the sorted list with whatever backend it owns.
//!
//! Coordinates are screen pixels with y pointing down. Angles are radians,
//! measured clockwise on screen from the +x axis.

use glam::Vec2;

use super::color::Color;
use super::layer::RenderLayer;

/// A primitive shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled rectangle with top-left corner `pos`. `corner_radius` of 0 gives square corners.
    Rect { pos: Vec2, size: Vec2, corner_radius: f32 },
    /// Straight line segment.
    Line { from: Vec2, to: Vec2, thickness: f32 },
    /// Filled circle.
    Circle { center: Vec2, radius: f32 },
    /// Outline arc from `start` sweeping `sweep` radians.
    Arc { center: Vec2, radius: f32, start: f32, sweep: f32, thickness: f32 },
    /// Text whose top-left corner sits at `pos`. `font` names a manifest font;
    /// `None` (or a font the host could not load) uses the host default.
    Text { text: String, pos: Vec2, size: f32, font: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    pub layer: RenderLayer,
    pub color: Color,
    pub shape: Shape,
}

/// Per-frame draw commands plus the background colour.
#[derive(Debug, Clone)]
pub struct DrawList {
    pub clear_color: Color,
    commands: Vec<DrawCommand>,
    sorted: bool,
}

impl DrawList {
    pub fn new() -> Self {
        Self::with_capacity(256)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            clear_color: Color::BLACK,
            commands: Vec::with_capacity(capacity),
            sorted: true,
        }
    }

    /// Drop all commands and set the background for the next frame.
    pub fn reset(&mut self, clear_color: Color) {
        self.clear_color = clear_color;
        self.commands.clear();
        self.sorted = true;
    }

    pub fn push(&mut self, command: DrawCommand) {
        if let Some(last) = self.commands.last() {
            if last.layer > command.layer {
                self.sorted = false;
            }
        }
        self.commands.push(command);
    }

    pub fn shape(&mut self, layer: RenderLayer, color: Color, shape: Shape) {
        self.push(DrawCommand { layer, color, shape });
    }

    pub fn fill_rect(&mut self, layer: RenderLayer, pos: Vec2, size: Vec2, color: Color) {
        self.rounded_rect(layer, pos, size, 0.0, color);
    }

    pub fn rounded_rect(&mut self, layer: RenderLayer, pos: Vec2, size: Vec2, corner_radius: f32, color: Color) {
        self.shape(layer, color, Shape::Rect { pos, size, corner_radius });
    }

    pub fn line(&mut self, layer: RenderLayer, from: Vec2, to: Vec2, thickness: f32, color: Color) {
        self.shape(layer, color, Shape::Line { from, to, thickness });
    }

    pub fn circle(&mut self, layer: RenderLayer, center: Vec2, radius: f32, color: Color) {
        if radius <= 0.0 {
            return;
        }
        self.shape(layer, color, Shape::Circle { center, radius });
    }

    pub fn arc(
        &mut self,
        layer: RenderLayer,
        center: Vec2,
        radius: f32,
        start: f32,
        sweep: f32,
        thickness: f32,
        color: Color,
    ) {
        if radius <= 0.0 || sweep == 0.0 {
            return;
        }
        self.shape(layer, color, Shape::Arc { center, radius, start, sweep, thickness });
    }

    pub fn text(&mut self, layer: RenderLayer, text: &str, pos: Vec2, size: f32, font: Option<&str>, color: Color) {
        self.shape(
            layer,
            color,
            Shape::Text {
                text: text.to_owned(),
                pos,
                size,
                font: font.map(str::to_owned),
            },
        );
    }

    /// Stable-sort commands back to front. Cheap when already in order.
    pub fn finish(&mut self) {
        if !self.sorted {
            self.commands.sort_by_key(|c| c.layer);
            self.sorted = true;
        }
    }

    /// Commands in draw order. Call `finish` first.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Commands on a single layer, in push order.
    pub fn on_layer(&self, layer: RenderLayer) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.layer == layer)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Default for DrawList {
    fn default() -> Self {
        Self::new()
    }
}
