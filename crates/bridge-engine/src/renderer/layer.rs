/// Render layer. Controls draw order for draw commands.
///
/// Layers are drawn back-to-front: Terrain first, UI last. The sky is the
/// draw list's clear color, not a layer.
/// Within a layer, commands keep the order they were pushed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum RenderLayer {
    /// Scenery behind the main objects.
    Terrain = 0,
    #[default]
    Objects = 1,
    /// Particles and other effects.
    VFX = 2,
    /// Text and overlays.
    UI = 3,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_objects() {
        assert_eq!(RenderLayer::default(), RenderLayer::Objects);
    }

    #[test]
    fn ordered_back_to_front() {
        assert!(RenderLayer::Terrain < RenderLayer::Objects);
        assert!(RenderLayer::Objects < RenderLayer::VFX);
        assert!(RenderLayer::VFX < RenderLayer::UI);
    }
}
