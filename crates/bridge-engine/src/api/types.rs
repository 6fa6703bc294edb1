/// A sound event emitted by the game logic.
/// The numeric value maps to a sound declared in the asset manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct SoundEvent(pub u32);

/// A game event surfaced to the host once per frame.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GameEvent {
    pub kind: u32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: u32) -> Self {
        Self { kind, ..Self::default() }
    }

    pub fn with_payload(mut self, a: f32, b: f32, c: f32) -> Self {
        self.a = a;
        self.b = b;
        self.c = c;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_builder_keeps_kind() {
        let ev = GameEvent::new(3).with_payload(1.0, 2.0, 3.0);
        assert_eq!(ev.kind, 3);
        assert_eq!((ev.a, ev.b, ev.c), (1.0, 2.0, 3.0));
    }
}
