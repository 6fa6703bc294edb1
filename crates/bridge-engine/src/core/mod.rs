pub mod rect;
pub mod time;
