//! One animated blob instance

use crate::event::BlobEvent;
use crate::event_bus::EventBus;
use log::{debug, info, warn};
use wobble_core::{BlobConfig, Color, Result, Vec2};
use wobble_render::{BlobPath, CurveRenderer, DrawingSurface};
use wobble_sim::{BlobSimulation, ColorCycler, PointerEvent, PointerInteractionHandler};

/// Everything one mounted blob needs: physics, fill animation, pointer state
/// and the renderer. Instances share nothing, so any number can coexist.
pub struct BlobEngine {
    config: BlobConfig,
    sim: BlobSimulation,
    cycler: ColorCycler,
    pointer: PointerInteractionHandler,
    renderer: CurveRenderer,
    base_color: Color,
    color: Color,
    /// Base color shown on the next frame instead of the palette
    base_color_pending: bool,
    events: EventBus,
    initialized: bool,
    skipping: bool,
    skipped_frames: u64,
    ticks: u64,
}

impl BlobEngine {
    pub fn new(config: BlobConfig) -> Result<Self> {
        config.validate()?;
        let cycler = ColorCycler::new(config.palette.clone(), config.color_step)?;
        Ok(Self {
            sim: BlobSimulation::new(&config),
            pointer: PointerInteractionHandler::new(config.pointer.clone()),
            renderer: CurveRenderer::new(),
            base_color: config.base_color,
            color: cycler.current(),
            cycler,
            base_color_pending: false,
            events: EventBus::new(),
            initialized: false,
            skipping: false,
            skipped_frames: 0,
            ticks: 0,
            config,
        })
    }

    /// Build the ring at rest and restart the color animation.
    pub fn init(&mut self) {
        // Config mirrors every resize and radius change
        self.sim = BlobSimulation::new(&self.config);
        self.cycler.reset();
        self.pointer.reset();
        self.color = self.cycler.current();
        self.base_color_pending = false;
        self.skipping = false;
        self.skipped_frames = 0;
        self.ticks = 0;
        self.initialized = true;

        info!(
            "blob initialized: {} points, radius {}, surface {}x{}",
            self.sim.len(),
            self.sim.base_radius(),
            self.config.width,
            self.config.height
        );
        self.events.push(BlobEvent::Initialized {
            point_count: self.sim.len(),
        });
    }

    /// Advance one frame and draw it. Returns whether anything was drawn.
    ///
    /// The surface is borrowed for this frame only. `None` or an unavailable
    /// surface still advances the animation but skips drawing.
    pub fn tick<S: DrawingSurface + ?Sized>(&mut self, surface: Option<&mut S>) -> bool {
        if !self.initialized {
            self.init();
        }

        let surface = surface.filter(|s| s.is_available());
        if let Some(s) = surface.as_deref() {
            let (width, height) = s.size();
            if (width, height) != self.sim.surface_size() {
                self.resize(width, height);
            }
        }

        self.sim.step();
        self.advance_color();
        self.ticks += 1;

        let drawn = match surface {
            Some(s) => {
                let points = self.sim.positions();
                self.renderer.draw(s, &points, self.color)
            }
            None => false,
        };

        if drawn && self.skipping {
            info!(
                "blob rendering resumed at tick {} after {} skipped frames",
                self.ticks, self.skipped_frames
            );
            self.events.push(BlobEvent::RenderingResumed {
                tick: self.ticks,
                skipped: self.skipped_frames,
            });
            self.skipping = false;
            self.skipped_frames = 0;
        } else if !drawn {
            if !self.skipping {
                warn!("blob surface unavailable, skipping draw at tick {}", self.ticks);
                self.events.push(BlobEvent::RenderingPaused { tick: self.ticks });
                self.skipping = true;
            }
            self.skipped_frames += 1;
        }
        drawn
    }

    fn advance_color(&mut self) {
        if self.base_color_pending {
            self.base_color_pending = false;
            self.color = self.base_color;
            return;
        }
        if self.cycler.advance() {
            debug!("palette advanced to entry {}", self.cycler.index());
            self.events.push(BlobEvent::PaletteAdvanced {
                index: self.cycler.index(),
            });
        }
        self.color = self.cycler.current();
    }

    /// Feed one raw pointer sample in surface pixels.
    pub fn on_pointer_sample(&mut self, x: f64, y: f64) -> Option<PointerEvent> {
        let event = self.pointer.handle_sample(Vec2::new(x, y), &mut self.sim)?;
        match event {
            PointerEvent::Entered { point, impulse } => {
                self.events.push(BlobEvent::PointerEntered { point, impulse });
            }
            PointerEvent::Exited { point, impulse } => {
                self.color = self.base_color;
                self.base_color_pending = true;
                self.events.push(BlobEvent::PointerExited { point, impulse });
            }
        }
        Some(event)
    }

    /// Track a new surface size. Zero sizes are accepted; drawing is skipped.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.sim.resize(width, height);
        self.config.width = width;
        self.config.height = height;
        debug!("blob resized to {}x{}", width, height);
        self.events.push(BlobEvent::Resized { width, height });
    }

    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
        self.config.base_color = color;
        self.events.push(BlobEvent::BaseColorChanged(color));
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.sim.set_base_radius(radius);
        self.config.radius = self.sim.base_radius();
    }

    pub fn config(&self) -> &BlobConfig {
        &self.config
    }

    pub fn simulation(&self) -> &BlobSimulation {
        &self.sim
    }

    pub fn cycler(&self) -> &ColorCycler {
        &self.cycler
    }

    pub fn pointer(&self) -> &PointerInteractionHandler {
        &self.pointer
    }

    /// Fill color used for the most recent frame (or the next one, after a
    /// pointer exit)
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    /// Outline drawn on the most recent successful frame
    pub fn last_path(&self) -> &BlobPath {
        self.renderer.last_path()
    }

    /// Outline for the current state, independent of any surface
    pub fn current_path(&self) -> BlobPath {
        BlobPath::from_ring(&self.sim.positions())
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Undrawn frames in the current skipping streak
    pub fn skipped_frames(&self) -> u64 {
        self.skipped_frames
    }

    /// Take the queued events. Undrained events beyond the bus capacity are
    /// evicted oldest first.
    pub fn drain_events(&mut self) -> Vec<BlobEvent> {
        self.events.drain()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wobble_render::PathRecorder;

    fn engine() -> BlobEngine {
        let config = BlobConfig {
            width: 400,
            height: 400,
            radius: 100.0,
            ..Default::default()
        };
        let mut engine = BlobEngine::new(config).unwrap();
        engine.init();
        engine
    }

    #[test]
    fn rejects_invalid_config() {
        let config = BlobConfig {
            point_count: 1,
            ..Default::default()
        };
        assert!(BlobEngine::new(config).is_err());
    }

    #[test]
    fn tick_draws_current_color() {
        let mut engine = engine();
        let mut surface = PathRecorder::new(400, 400);
        assert!(engine.tick(Some(&mut surface)));

        let fill = surface.last_fill().unwrap();
        assert_eq!(fill.color, engine.color());
        assert_eq!(fill.path.curve_count(), 32);
        assert_eq!(engine.ticks(), 1);
    }

    #[test]
    fn tick_without_surface_still_animates() {
        let mut engine = engine();
        let before = engine.cycler().phase();
        assert!(!engine.tick::<PathRecorder>(None));
        assert!(engine.cycler().phase() > before);
        assert!(engine
            .drain_events()
            .contains(&BlobEvent::RenderingPaused { tick: 1 }));
    }

    #[test]
    fn skip_streak_reports_once_and_resumes() {
        let mut engine = engine();
        for _ in 0..50 {
            engine.tick::<PathRecorder>(None);
        }
        assert_eq!(engine.skipped_frames(), 50);

        let mut surface = PathRecorder::new(400, 400);
        assert!(engine.tick(Some(&mut surface)));
        assert_eq!(engine.skipped_frames(), 0);

        let events = engine.drain_events();
        let paused = events
            .iter()
            .filter(|e| matches!(e, BlobEvent::RenderingPaused { .. }))
            .count();
        assert_eq!(paused, 1);
        assert!(events.contains(&BlobEvent::RenderingResumed {
            tick: 51,
            skipped: 50
        }));
    }

    #[test]
    fn surface_resize_is_picked_up() {
        let mut engine = engine();
        let mut surface = PathRecorder::new(400, 400);
        engine.tick(Some(&mut surface));
        surface.resize(800, 200);
        engine.tick(Some(&mut surface));
        assert_eq!(engine.simulation().center(), Vec2::new(400.0, 100.0));
        assert!(engine
            .drain_events()
            .contains(&BlobEvent::Resized { width: 800, height: 200 }));
    }

    #[test]
    fn zero_sized_surface_is_noop() {
        let mut engine = engine();
        let mut surface = PathRecorder::new(0, 0);
        assert!(!engine.tick(Some(&mut surface)));
        assert!(surface.fills().is_empty());
        assert!(engine.simulation().positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn exit_shows_base_color_for_one_frame() {
        let mut engine = engine();
        let base = Color::from_hex(0x112233);
        engine.set_base_color(base);
        let mut surface = PathRecorder::new(400, 400);

        engine.on_pointer_sample(200.0, 150.0);
        engine.tick(Some(&mut surface));
        assert_ne!(surface.last_fill().unwrap().color, base);

        let exit = engine.on_pointer_sample(200.0, 390.0);
        assert!(matches!(exit, Some(PointerEvent::Exited { .. })));
        assert_eq!(engine.color(), base);

        let phase = engine.cycler().phase();
        engine.tick(Some(&mut surface));
        assert_eq!(surface.last_fill().unwrap().color, base);
        assert_eq!(engine.cycler().phase(), phase);

        engine.tick(Some(&mut surface));
        assert_ne!(surface.last_fill().unwrap().color, base);
    }

    #[test]
    fn hover_entry_emits_event_and_moves_point() {
        let mut engine = engine();
        engine.on_pointer_sample(350.0, 200.0);
        let event = engine.on_pointer_sample(250.0, 200.0).unwrap();
        assert_eq!(event.point(), 0);
        assert!(engine.simulation().point(0).unwrap().radial_effect() < 0.0);
        assert!(engine
            .drain_events()
            .contains(&BlobEvent::PointerEntered { point: 0, impulse: -1.0 }));
    }

    #[test]
    fn init_resets_state() {
        let mut engine = engine();
        engine.on_pointer_sample(350.0, 200.0);
        engine.on_pointer_sample(250.0, 200.0);
        for _ in 0..10 {
            engine.tick::<PathRecorder>(None);
        }
        engine.init();
        assert_eq!(engine.simulation().energy(), 0.0);
        assert!(!engine.pointer().is_hovering());
        assert_eq!(engine.ticks(), 0);
        assert_eq!(engine.color(), engine.cycler().palette()[0]);
    }

    #[test]
    fn instances_do_not_share_state() {
        let mut a = engine();
        let b = engine();
        a.on_pointer_sample(350.0, 200.0);
        a.on_pointer_sample(250.0, 200.0);
        for _ in 0..5 {
            a.tick::<PathRecorder>(None);
        }
        assert!(a.simulation().energy() > 0.0);
        assert_eq!(b.simulation().energy(), 0.0);
        assert_eq!(b.cycler().phase(), 0.0);
    }

    #[test]
    fn set_radius_clamps_negative() {
        let mut engine = engine();
        engine.set_radius(-5.0);
        assert_eq!(engine.simulation().base_radius(), 0.0);
        assert_eq!(engine.config().radius, 0.0);
    }
}
