use gallery_common::{Camera, ConfigError, ExhibitId, GalleryConfig};
use gallery_motion::{InputEvent, InputState, MotionController, RoomBounds};
use gallery_pick::{Aabb, Exhibit, ExhibitRegistry, HighlightSink, InteractionPicker};
use gallery_trail::{ColorCycler, Palette, RibbonBuffer, TrailSampler};
use glam::{Vec2, Vec3};

/// How far in front of the camera the orb anchor floats.
const ANCHOR_DISTANCE: f32 = 1.2;

/// The walkable gallery runtime: owns all core state and advances it one
/// tick per display-refresh callback.
///
/// Input events only mutate `InputState` and may arrive at any time between
/// ticks; everything else is stepped synchronously inside `tick`. Rendering,
/// asset loading, and DOM wiring live outside, consuming the buffers and
/// ids this type exposes.
pub struct Walkthrough {
    config: GalleryConfig,
    camera: Camera,
    input: InputState,
    bounds: RoomBounds,
    controller: MotionController,
    sampler: TrailSampler,
    ribbon: RibbonBuffer,
    palette: Palette,
    cycler: ColorCycler,
    registry: ExhibitRegistry,
    picker: InteractionPicker,
    orbit_enabled: bool,
    current_color: Vec3,
    tick_count: u64,
}

impl Walkthrough {
    pub fn new(config: GalleryConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let camera = Camera::default();
        let controller = MotionController::new(&config, &camera);
        let bounds = RoomBounds::from_config(&config);
        let sampler = TrailSampler::new(&config, seed);
        let ribbon = RibbonBuffer::new(config.max_trail_length, config.trail_width);
        let palette = Palette::from_rgb(&config.palette);
        let cycler = ColorCycler::new(config.color_cycle_step);
        let current_color = cycler.current(&palette);
        Ok(Self {
            config,
            camera,
            input: InputState::new(),
            bounds,
            controller,
            sampler,
            ribbon,
            palette,
            cycler,
            registry: ExhibitRegistry::new(),
            picker: InteractionPicker::new(),
            orbit_enabled: true,
            current_color,
            tick_count: 0,
        })
    }

    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn sampler(&self) -> &TrailSampler {
        &self.sampler
    }

    pub fn ribbon(&self) -> &RibbonBuffer {
        &self.ribbon
    }

    pub fn registry(&self) -> &ExhibitRegistry {
        &self.registry
    }

    /// Color for the trail and orb materials this tick.
    pub fn current_color(&self) -> Vec3 {
        self.current_color
    }

    pub fn selection(&self) -> Option<ExhibitId> {
        self.picker.selection()
    }

    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Whether the external orbit-control collaborator is active. While it
    /// is, keyboard motion in Orbit mode is delegated to it.
    pub fn set_orbit_enabled(&mut self, enabled: bool) {
        self.orbit_enabled = enabled;
    }

    /// Register an interactive exhibit with its hit proxies. Call during
    /// scene setup; the set is fixed afterwards.
    pub fn register_exhibit(&mut self, exhibit: Exhibit, proxies: impl IntoIterator<Item = Aabb>) {
        self.registry.register(exhibit, proxies);
    }

    /// Feed a discrete input event. Only input flags and look accumulators
    /// change here; all consequences play out in the next `tick`.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.input.apply(event);
    }

    /// Advance one tick.
    ///
    /// `delta` is the elapsed frame time in seconds, `now_ms` the wall
    /// clock in milliseconds.
    pub fn tick(&mut self, delta: f32, now_ms: f64) {
        let _span = tracing::info_span!("tick", n = self.tick_count).entered();
        let wall_secs = now_ms / 1000.0;

        self.controller.step(
            &mut self.input,
            &mut self.camera,
            &self.bounds,
            delta,
            wall_secs,
            self.orbit_enabled,
        );

        let anchor = self.anchor_position(wall_secs);
        if self.sampler.ingest(anchor, now_ms) {
            self.ribbon.rebuild(&self.sampler);
        }

        self.cycler.advance();
        self.current_color = self.cycler.current(&self.palette);
        self.tick_count += 1;
    }

    /// Hit-test the last known pointer position and reconcile highlights.
    pub fn pick(&mut self, sink: &mut dyn HighlightSink) -> Option<ExhibitId> {
        self.pick_at(self.input.pointer_ndc, sink)
    }

    /// Hit-test an explicit pointer position, for pointer-move handlers.
    pub fn pick_at(&mut self, ndc: Vec2, sink: &mut dyn HighlightSink) -> Option<ExhibitId> {
        self.picker.update(ndc, &self.camera, &self.registry, sink)
    }

    /// Where the orb anchor sits this tick: a fixed distance ahead of the
    /// camera, with a small oscillation for a hovering feel.
    fn anchor_position(&self, wall_secs: f64) -> Vec3 {
        let t = wall_secs as f32;
        self.camera.position
            + self.camera.forward() * ANCHOR_DISTANCE
            + Vec3::new(
                (t * 1.5).sin() * 0.02,
                (t * 2.5).sin() * 0.03,
                (t * 2.0).cos() * 0.02,
            )
    }
}
