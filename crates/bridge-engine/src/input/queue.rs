/// Key codes the engine understands. Values follow ASCII where one exists.
pub mod keys {
    pub const ENTER: u32 = 13;
    pub const ESCAPE: u32 = 27;
    pub const SPACE: u32 = 32;
}

/// Input event types the engine understands.
/// Generic: no game-specific semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down this frame.
    KeyDown { key_code: u32 },
    /// A key was released this frame.
    KeyUp { key_code: u32 },
}

/// A queue of input events.
/// The host pushes events once per frame; the runner drains them after the
/// frame's fixed steps have seen them.
pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether a `KeyDown` for `key_code` is pending.
    pub fn key_pressed(&self, key_code: u32) -> bool {
        self.events
            .iter()
            .any(|e| *e == InputEvent::KeyDown { key_code })
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}
