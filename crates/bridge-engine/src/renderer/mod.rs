pub mod color;
pub mod draw;
pub mod layer;

pub use color::Color;
pub use draw::{DrawCommand, DrawList, Shape};
pub use layer::RenderLayer;
