use std::ops::RangeInclusive;

use bridge_engine::*;

use crate::arches::draw_arches;
use crate::label::Label;
use crate::segment::Segment;

const WORLD_W: f32 = 800.0;
const WORLD_H: f32 = 400.0;
const TITLE: &str = "RIALO. Breaks the Bridge";
pub const SKY_COLOR: Color = Color::rgb(180, 220, 255);

pub const SEGMENT_COUNT: usize = 10;
const BRIDGE_START_X: f32 = 100.0;
const SEGMENT_SPACING: f32 = 65.0;
const BRIDGE_Y: f32 = 200.0;

/// Segments that give way when the label hits.
pub const COLLAPSE_RANGE: RangeInclusive<usize> = 3..=6;
/// The label "hits" this far left of the first collapsing segment's centre.
const IMPACT_LEAD: f32 = 30.0;

pub const TRIGGER_KEY: u32 = keys::SPACE;
pub const EVENT_COLLAPSE_ARMED: u32 = 1;

/// The whole animation: a row of planks and the label that knocks them down.
pub struct BridgeBreak {
    segments: Vec<Segment>,
    label: Label,
}

impl BridgeBreak {
    pub fn new() -> Self {
        let segments: Vec<Segment> = (0..SEGMENT_COUNT)
            .map(|i| Segment::new(BRIDGE_START_X + i as f32 * SEGMENT_SPACING, BRIDGE_Y))
            .collect();
        let impact_x = segments[*COLLAPSE_RANGE.start()].rect().center_x() - IMPACT_LEAD;
        Self {
            segments,
            label: Label::new(impact_x),
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn label(&self) -> &Label {
        &self.label
    }

    fn arm_collapse(&mut self, ctx: &mut EngineContext) {
        let mut armed = 0;
        for seg in &mut self.segments[COLLAPSE_RANGE] {
            if seg.arm() {
                armed += 1;
            }
        }
        ctx.emit_event(
            GameEvent::new(EVENT_COLLAPSE_ARMED)
                .with_payload(ctx.frame() as f32, self.label.x(), armed as f32),
        );
        log::info!(
            "collapse armed: {} segment(s) shaking at frame {}",
            armed,
            ctx.frame()
        );
    }
}

impl Default for BridgeBreak {
    fn default() -> Self {
        Self::new()
    }
}

impl Game for BridgeBreak {
    fn config(&self) -> GameConfig {
        GameConfig {
            fixed_dt: 1.0 / 60.0,
            world_width: WORLD_W,
            world_height: WORLD_H,
            title: TITLE.to_string(),
            clear_color: SKY_COLOR,
            ..GameConfig::default()
        }
    }

    fn init(&mut self, _ctx: &mut EngineContext) {
        log::info!(
            "bridge: {} segments, impact at x={}",
            self.segments.len(),
            self.label.impact_x()
        );
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        if input.key_pressed(TRIGGER_KEY) && self.label.trigger() {
            log::info!("label triggered at frame {}", ctx.frame());
        }

        if self.label.advance() {
            self.arm_collapse(ctx);
        }

        for (i, seg) in self.segments.iter_mut().enumerate() {
            seg.advance(i, ctx);
        }
    }

    fn render(&self, ctx: &mut RenderContext) {
        draw_arches(&self.segments, ctx.draw);
        for seg in &self.segments {
            seg.render(ctx.draw);
        }
        self.label.render(ctx.draw);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::LABEL_SPEED;
    use crate::segment::{Phase, DUST_PER_IMPACT, SHAKE_FRAMES, SOUND_COLLAPSE};
    use bridge_desktop::GameRunner;

    fn runner() -> GameRunner<BridgeBreak> {
        let mut r = GameRunner::new(BridgeBreak::new());
        r.init();
        r
    }

    fn press(r: &mut GameRunner<BridgeBreak>) {
        r.push_input(InputEvent::KeyDown { key_code: TRIGGER_KEY });
    }

    /// Step until the collapse arms; returns the number of steps taken.
    fn step_until_armed(r: &mut GameRunner<BridgeBreak>) -> u32 {
        let mut steps = 0;
        while !r.game().label().bridge_hit() {
            r.step();
            steps += 1;
            assert!(steps < 1000, "collapse never armed");
        }
        steps
    }

    #[test]
    fn initial_layout() {
        let game = BridgeBreak::new();
        assert_eq!(game.segments().len(), SEGMENT_COUNT);
        for (i, seg) in game.segments().iter().enumerate() {
            assert!(seg.is_resting());
            assert_eq!(seg.rect().x, 100.0 + 65.0 * i as f32);
            assert_eq!(seg.rect().y, 200.0);
        }
        assert_eq!(game.label().impact_x(), 295.0);
    }

    #[test]
    fn nothing_moves_without_the_key() {
        let mut r = runner();
        for _ in 0..300 {
            r.step();
        }
        assert!(!r.game().label().is_active());
        assert!(r.game().segments().iter().all(|s| s.is_resting()));
        assert_eq!(r.context().effects.dust_count(), 0);
    }

    #[test]
    fn collapse_arms_on_the_impact_frame() {
        let mut r = runner();
        press(&mut r);
        let steps = step_until_armed(&mut r);

        assert_eq!(steps, 42);
        assert!(r.game().label().x() >= 295.0);
        assert!(r.game().label().x() - LABEL_SPEED < 295.0);

        for (i, seg) in r.game().segments().iter().enumerate() {
            if COLLAPSE_RANGE.contains(&i) {
                // Armed and already advanced once within the same frame.
                assert_eq!(seg.phase(), Phase::Shaking { timer: SHAKE_FRAMES - 1 }, "segment {}", i);
            } else {
                assert!(seg.is_resting(), "segment {}", i);
            }
        }
        let armed: Vec<_> = r.events().iter().filter(|e| e.kind == EVENT_COLLAPSE_ARMED).collect();
        assert_eq!(armed.len(), 1);
        assert_eq!(armed[0].c, 4.0);
    }

    #[test]
    fn collapsing_segments_fall_after_the_shake() {
        let mut r = runner();
        press(&mut r);
        step_until_armed(&mut r);

        for _ in 0..SHAKE_FRAMES - 2 {
            r.step();
            assert!(r.game().segments()[3..=6].iter().all(|s| s.is_shaking()));
        }
        r.step();
        for (i, seg) in r.game().segments().iter().enumerate() {
            assert_eq!(seg.is_falling(), COLLAPSE_RANGE.contains(&i), "segment {}", i);
        }
        let collapse_sounds = r.sounds().iter().filter(|s| **s == SOUND_COLLAPSE).count();
        assert_eq!(collapse_sounds, 4);
    }

    #[test]
    fn repeated_key_presses_arm_once() {
        let mut r = runner();
        let mut arm_events = 0;
        for _ in 0..400 {
            press(&mut r);
            r.tick(1.0 / 60.0);
            arm_events += r.events().iter().filter(|e| e.kind == EVENT_COLLAPSE_ARMED).count();
        }
        assert_eq!(arm_events, 1);
        let fallen = r.game().segments().iter().filter(|s| s.is_falling()).count();
        assert_eq!(fallen, 4);
    }

    #[test]
    fn impact_raises_forty_dust_then_it_settles() {
        let mut r = runner();
        press(&mut r);
        step_until_armed(&mut r);

        let mut peak = 0;
        let mut landed_frame = None;
        for frame in 0..300 {
            let before = r.context().effects.dust_count();
            r.step();
            let after = r.context().effects.dust_count();
            if landed_frame.is_none() && r.game().segments()[3..=6].iter().all(|s| s.has_hit_ground()) {
                landed_frame = Some(frame);
                assert_eq!(after, 4 * DUST_PER_IMPACT);
            } else {
                assert!(after <= before, "dust grew without an impact");
            }
            peak = peak.max(after);
        }
        assert!(landed_frame.is_some());
        assert_eq!(peak, 40);
        assert_eq!(r.context().effects.dust_count(), 0);
    }

    #[test]
    fn fallen_segments_keep_falling() {
        let mut r = runner();
        press(&mut r);
        for _ in 0..600 {
            r.step();
        }
        for seg in &r.game().segments()[3..=6] {
            assert!(seg.rect().y > WORLD_H, "segment should be off-screen");
            assert!(seg.is_falling());
        }
    }

    #[test]
    fn draw_order_is_sky_arches_planks_dust_label() {
        let mut r = runner();
        press(&mut r);
        step_until_armed(&mut r);
        while !r.game().segments()[3].has_hit_ground() {
            r.step();
        }

        let list = r.draw_list();
        assert_eq!(list.clear_color, SKY_COLOR);
        let layers: Vec<_> = list.commands().iter().map(|c| c.layer).collect();
        assert!(layers.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(layers.first(), Some(&RenderLayer::Terrain));
        assert_eq!(layers.last(), Some(&RenderLayer::UI));

        // Six standing segments keep arches; four falling planks lose pillars.
        assert_eq!(list.on_layer(RenderLayer::Terrain).count(), 6);
        assert_eq!(list.on_layer(RenderLayer::Objects).count(), 10 + 6);
        assert_eq!(list.on_layer(RenderLayer::VFX).count(), 40);
        assert_eq!(list.on_layer(RenderLayer::UI).count(), 1);
    }

    #[test]
    fn same_seed_same_animation() {
        let run = || {
            let mut r = runner();
            press(&mut r);
            let mut xs = Vec::new();
            for _ in 0..120 {
                r.step();
                xs.extend(r.game().segments().iter().map(|s| s.rendered_x()));
                xs.extend(r.context().effects.dust.iter().map(|d| d.position.x));
            }
            xs
        };
        assert_eq!(run(), run());
    }
}
