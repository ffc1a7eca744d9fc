use glam::Vec2;
use solarview_core::{
    frame, Body, FrameBuffer, Hit, InputEvent, InputQueue, ParticleField, SimClock,
    SolarSystemData, ViewEvent, ViewMode, ViewState,
};

use crate::painter::CanvasPainter;

/// Fallback viewport before the canvas is found.
const DEFAULT_SIZE: Vec2 = Vec2::new(800.0, 600.0);

/// Longest wall-clock gap fed to the particle step. A throttled tab
/// resumes without particles teleporting across the surface.
const MAX_STEP_MS: f64 = 100.0;

/// Particle velocities are calibrated in px per 60Hz frame.
const TICK_MS: f64 = 1000.0 / 60.0;

/// Hosts the view: owns the state, the clock, the input queue and the
/// canvas painter, and runs one frame per callback.
///
/// The exports module creates a `thread_local!` ViewRunner and exposes
/// free functions, because wasm-bindgen cannot export structs holding
/// browser handles directly.
pub struct ViewRunner {
    state: ViewState,
    input: InputQueue,
    clock: SimClock,
    data: Option<SolarSystemData>,
    particles: ParticleField,
    frame: FrameBuffer,
    painter: Option<CanvasPainter>,
    seed: u64,
    last_now_ms: f64,
}

impl ViewRunner {
    pub fn new(canvas_id: &str, now_ms: f64, seed: u64) -> Self {
        let painter = CanvasPainter::attach(canvas_id);
        if painter.is_none() {
            log::warn!("canvas #{canvas_id} not found, frames will be skipped");
        }
        let size = painter.as_ref().map_or(DEFAULT_SIZE, |p| p.size());
        Self {
            state: ViewState::new(size),
            input: InputQueue::new(),
            clock: SimClock::new(now_ms),
            data: None,
            particles: ParticleField::new(size, seed),
            frame: FrameBuffer::new(),
            painter,
            seed,
            last_now_ms: now_ms,
        }
    }

    /// Parse and install the data file. A rejected file leaves the
    /// previous data in place.
    pub fn load_data(&mut self, json: &str) {
        match SolarSystemData::from_json(json) {
            Ok(data) => {
                log::info!("data loaded: {} planets", data.planets.len());
                self.data = Some(data);
            }
            Err(err) => log::warn!("data file rejected: {err}"),
        }
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Switch sections immediately. Returns true when the new section
    /// is the one that needs the animation loop.
    pub fn set_mode(&mut self, mode: ViewMode, now_ms: f64) -> bool {
        let t = self.clock.read(now_ms);
        let _ = self.state.apply(InputEvent::SetMode { mode }, &[], t);
        self.state.mode.is_visualization()
    }

    /// Resize the backing store and repaint right away, no debounce.
    pub fn resize(&mut self, now_ms: f64, width: f32, height: f32) {
        let t = self.clock.read(now_ms);
        if let Some(ViewEvent::ViewportResized(size)) =
            self.state
                .apply(InputEvent::Resize { width, height }, &[], t)
        {
            self.rebuild_surface(size);
        }
        self.render(now_ms);
    }

    /// Run one frame: drain input, advance the particle field, build
    /// and paint the frame.
    pub fn tick(&mut self, now_ms: f64) {
        let t = self.clock.read(now_ms);
        for event in self.input.drain() {
            let emitted = {
                let bodies: &[Body] = self.data.as_ref().map_or(&[][..], |d| d.planets.as_slice());
                self.state.apply(event, bodies, t)
            };
            match emitted {
                Some(ViewEvent::SpeedChanged(factor)) => self.clock.set_speed(now_ms, factor),
                Some(ViewEvent::ViewportResized(size)) => self.rebuild_surface(size),
                Some(ViewEvent::SelectionChanged(hit)) => {
                    log::info!("selection: {hit:?}");
                }
                _ => {}
            }
            // Reset folds the speed change into its selection event.
            if event == InputEvent::Reset {
                self.clock.set_speed(now_ms, self.state.speed);
            }
        }

        let dt_ms = (now_ms - self.last_now_ms).clamp(0.0, MAX_STEP_MS);
        self.particles.step((dt_ms / TICK_MS) as f32);
        self.last_now_ms = now_ms;

        self.render(now_ms);
    }

    /// Selection as a plain code for the host page: -1 none, 0 the sun,
    /// otherwise the body id.
    pub fn selected_code(&self) -> i32 {
        match self.state.selected {
            None => -1,
            Some(Hit::Sun) => 0,
            Some(Hit::Body(id)) => id as i32,
        }
    }

    fn rebuild_surface(&mut self, size: Vec2) {
        if let Some(painter) = &self.painter {
            painter.set_size(size.x as u32, size.y as u32);
        }
        self.seed = self.seed.wrapping_add(1);
        self.particles = ParticleField::new(size, self.seed);
    }

    /// Build and paint one frame. Skips silently when the canvas or the
    /// data are not there yet, or another section is showing.
    fn render(&mut self, now_ms: f64) {
        if !self
            .state
            .should_render(self.data.is_some(), self.painter.is_some())
        {
            log::trace!("frame skipped");
            return;
        }
        let (Some(painter), Some(data)) = (self.painter.as_ref(), self.data.as_ref()) else {
            return;
        };
        let t = self.clock.read(now_ms);
        self.frame.clear();
        frame::begin(&mut self.frame, self.state.size);
        self.particles.draw(&mut self.frame);
        frame::render_orbits(
            &data.planets,
            self.state.center(),
            self.state.show_orbits,
            t,
            &mut self.frame,
        );
        painter.paint(&self.frame);
    }
}
