//! View state and the simulation clock.
//!
//! All the mutable state of the visualization lives here, owned by the
//! hosting runner instead of scattered globals. The state is plain data;
//! applying an input event may emit a [`ViewEvent`] for the host page.

use glam::Vec2;

use crate::data::Body;
use crate::input::InputEvent;
use crate::pick::{self, Hit};

/// Page sections. Only [`ViewMode::Visualization`] drives the animation
/// loop; the rest exist so mode switches can stop and restart it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Planets,
    Moons,
    Regions,
    Missions,
    Timeline,
    Comparison,
    Visualization,
}

impl ViewMode {
    /// Parse a section name coming from the host page's navigation.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "planets" => Some(Self::Planets),
            "moons" => Some(Self::Moons),
            "regions" => Some(Self::Regions),
            "missions" => Some(Self::Missions),
            "timeline" => Some(Self::Timeline),
            "comparison" => Some(Self::Comparison),
            "visualization" => Some(Self::Visualization),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Planets => "planets",
            Self::Moons => "moons",
            Self::Regions => "regions",
            Self::Missions => "missions",
            Self::Timeline => "timeline",
            Self::Comparison => "comparison",
            Self::Visualization => "visualization",
        }
    }

    pub fn is_visualization(&self) -> bool {
        matches!(self, Self::Visualization)
    }
}

/// Wall-clock milliseconds per simulation time unit. A body with id 1
/// completes one lap every 2 units, i.e. every 12 seconds at speed 1.
pub const MS_PER_UNIT: f64 = 6000.0;

/// Speed slider bounds.
pub const MIN_SPEED: f64 = 0.1;
pub const MAX_SPEED: f64 = 5.0;

/// Maps wall-clock milliseconds to simulation time units.
///
/// Time-based, not frame-counted: a paused or throttled tab resumes at
/// the position the wall clock dictates. Speed changes rebase the clock
/// so the current phase is preserved and only the rate ahead changes.
#[derive(Debug, Clone, Copy)]
pub struct SimClock {
    speed: f64,
    /// Wall time of the last rebase.
    origin_ms: f64,
    /// Simulation units accumulated up to `origin_ms`.
    base_units: f64,
}

impl SimClock {
    pub fn new(now_ms: f64) -> Self {
        Self {
            speed: 1.0,
            origin_ms: now_ms,
            base_units: now_ms / MS_PER_UNIT,
        }
    }

    /// Simulation time at wall-clock `now_ms`.
    pub fn read(&self, now_ms: f64) -> f64 {
        self.base_units + (now_ms - self.origin_ms) / MS_PER_UNIT * self.speed
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the rate without jumping the current phase.
    pub fn set_speed(&mut self, now_ms: f64, factor: f64) {
        self.base_units = self.read(now_ms);
        self.origin_ms = now_ms;
        self.speed = factor.clamp(MIN_SPEED, MAX_SPEED);
    }
}

/// Outward events for the host page (detail panel, navigation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewEvent {
    /// The hit test selected something, or a reset cleared it.
    SelectionChanged(Option<Hit>),
    ModeChanged(ViewMode),
    ViewportResized(Vec2),
    SpeedChanged(f64),
}

/// The complete mutable state of the visualization view.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub mode: ViewMode,
    pub size: Vec2,
    pub show_orbits: bool,
    pub speed: f64,
    pub selected: Option<Hit>,
}

impl ViewState {
    pub fn new(size: Vec2) -> Self {
        Self {
            mode: ViewMode::default(),
            size,
            show_orbits: true,
            speed: 1.0,
            selected: None,
        }
    }

    pub fn center(&self) -> Vec2 {
        self.size * 0.5
    }

    /// Whether a frame should be built at all: the visualization section
    /// must be showing and both the data and the drawing surface must
    /// exist. A `false` means skip the frame silently; the next tick
    /// tries again.
    pub fn should_render(&self, has_data: bool, has_surface: bool) -> bool {
        self.mode.is_visualization() && has_data && has_surface
    }

    /// Apply one input event at simulation time `t`.
    ///
    /// Returns the event the host page should hear about, if any. A click
    /// that hits nothing leaves the selection alone, matching the panel
    /// behavior: it keeps showing the last selected body.
    pub fn apply(&mut self, event: InputEvent, bodies: &[Body], t: f64) -> Option<ViewEvent> {
        match event {
            InputEvent::PointerUp { x, y } => {
                let hit = pick::hit_test(bodies, Vec2::new(x, y), self.center(), t)?;
                self.selected = Some(hit);
                Some(ViewEvent::SelectionChanged(self.selected))
            }
            InputEvent::Resize { width, height } => {
                self.size = Vec2::new(width, height);
                Some(ViewEvent::ViewportResized(self.size))
            }
            InputEvent::SetSpeed { factor } => {
                self.speed = factor.clamp(MIN_SPEED, MAX_SPEED);
                Some(ViewEvent::SpeedChanged(self.speed))
            }
            InputEvent::SetShowOrbits { on } => {
                self.show_orbits = on;
                None
            }
            InputEvent::SetMode { mode } => {
                if mode == self.mode {
                    return None;
                }
                self.mode = mode;
                Some(ViewEvent::ModeChanged(mode))
            }
            InputEvent::Reset => {
                self.selected = None;
                self.speed = 1.0;
                self.show_orbits = true;
                Some(ViewEvent::SelectionChanged(None))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit;

    fn body(id: u32, category: &str) -> Body {
        Body {
            id,
            name: format!("Body {id}"),
            category: category.into(),
            ..Body::default()
        }
    }

    #[test]
    fn mode_names_round_trip() {
        for mode in [
            ViewMode::Planets,
            ViewMode::Moons,
            ViewMode::Regions,
            ViewMode::Missions,
            ViewMode::Timeline,
            ViewMode::Comparison,
            ViewMode::Visualization,
        ] {
            assert_eq!(ViewMode::from_name(mode.name()), Some(mode));
        }
        assert_eq!(ViewMode::from_name("settings"), None);
        assert!(ViewMode::Visualization.is_visualization());
        assert!(!ViewMode::Planets.is_visualization());
    }

    #[test]
    fn clock_tracks_wall_time_at_unit_speed() {
        let clock = SimClock::new(0.0);
        assert_eq!(clock.read(0.0), 0.0);
        assert_eq!(clock.read(6000.0), 1.0);
        assert_eq!(clock.read(12_000.0), 2.0);
    }

    #[test]
    fn clock_origin_matches_wall_clock() {
        // Started mid-session, the clock reads now/6000 like a fresh page.
        let clock = SimClock::new(60_000.0);
        assert_eq!(clock.read(60_000.0), 10.0);
    }

    #[test]
    fn speed_change_keeps_phase() {
        let mut clock = SimClock::new(0.0);
        let before = clock.read(6000.0);
        clock.set_speed(6000.0, 3.0);
        let after = clock.read(6000.0);
        assert!((before - after).abs() < 1e-9);
        // One more wall second now advances 3x.
        assert!((clock.read(7000.0) - (before + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn speed_is_clamped() {
        let mut clock = SimClock::new(0.0);
        clock.set_speed(0.0, 100.0);
        assert_eq!(clock.speed(), MAX_SPEED);
        clock.set_speed(0.0, 0.0);
        assert_eq!(clock.speed(), MIN_SPEED);
    }

    #[test]
    fn pause_and_resume_follows_the_wall_clock() {
        let clock = SimClock::new(0.0);
        // No ticks happened for a minute; the next read lands where the
        // wall clock says, not one frame later.
        assert_eq!(clock.read(60_000.0), 10.0);
    }

    #[test]
    fn click_selects_and_emits() {
        let bodies = vec![body(2, "Terrestrial")];
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        let c = state.center();
        let on_body = c + Vec2::new(orbit::orbit_radius(2), 0.0);
        let ev = state.apply(
            InputEvent::PointerUp { x: on_body.x, y: on_body.y },
            &bodies,
            0.0,
        );
        assert_eq!(ev, Some(ViewEvent::SelectionChanged(Some(Hit::Body(2)))));
        assert_eq!(state.selected, Some(Hit::Body(2)));
    }

    #[test]
    fn missed_click_keeps_previous_selection() {
        let bodies = vec![body(2, "Terrestrial")];
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        state.selected = Some(Hit::Sun);
        let ev = state.apply(InputEvent::PointerUp { x: 1.0, y: 1.0 }, &bodies, 0.0);
        assert_eq!(ev, None);
        assert_eq!(state.selected, Some(Hit::Sun));
    }

    #[test]
    fn resize_updates_center() {
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        let ev = state.apply(
            InputEvent::Resize { width: 400.0, height: 200.0 },
            &[],
            0.0,
        );
        assert_eq!(ev, Some(ViewEvent::ViewportResized(Vec2::new(400.0, 200.0))));
        assert_eq!(state.center(), Vec2::new(200.0, 100.0));
    }

    #[test]
    fn mode_switch_emits_once() {
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        let ev = state.apply(
            InputEvent::SetMode { mode: ViewMode::Visualization },
            &[],
            0.0,
        );
        assert_eq!(ev, Some(ViewEvent::ModeChanged(ViewMode::Visualization)));
        let again = state.apply(
            InputEvent::SetMode { mode: ViewMode::Visualization },
            &[],
            0.0,
        );
        assert_eq!(again, None);
    }

    #[test]
    fn frames_skip_until_data_and_surface_arrive() {
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        state.mode = ViewMode::Visualization;
        assert!(!state.should_render(false, true));
        assert!(!state.should_render(true, false));
        assert!(!state.should_render(false, false));
        assert!(state.should_render(true, true));
    }

    #[test]
    fn other_sections_never_render() {
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        state.mode = ViewMode::Planets;
        assert!(!state.should_render(true, true));
        state.mode = ViewMode::Visualization;
        assert!(state.should_render(true, true));
    }

    #[test]
    fn reset_restores_defaults() {
        let mut state = ViewState::new(Vec2::new(800.0, 600.0));
        state.selected = Some(Hit::Body(4));
        state.speed = 3.0;
        state.show_orbits = false;
        let ev = state.apply(InputEvent::Reset, &[], 0.0);
        assert_eq!(ev, Some(ViewEvent::SelectionChanged(None)));
        assert_eq!(state.selected, None);
        assert_eq!(state.speed, 1.0);
        assert!(state.show_orbits);
    }
}
