//! Frame building for the orbital visualization.
//!
//! The core never touches a canvas. Each frame it fills a [`FrameBuffer`]
//! with drawing commands; the web layer replays them against whatever
//! surface it owns. Cleared and repopulated every frame.

use glam::Vec2;

use crate::data::Body;
use crate::orbit;

/// RGBA color with 0.0 - 1.0 components, serialized to CSS on the way out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    /// Create a color from RGBA components (0.0 - 1.0).
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color from RGB components.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGB u8 values (0-255) with full opacity.
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
            a: 1.0,
        }
    }

    /// Parse a `#rrggbb` CSS hex color. Anything unparseable falls back
    /// to white so a bad data file shows up on screen instead of erroring.
    pub fn from_hex(hex: &str) -> Self {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return Self::WHITE;
        }
        let parse = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        match (parse(0..2), parse(2..4), parse(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Self::rgb8(r, g, b),
            _ => Self::WHITE,
        }
    }

    /// Create a color with the given alpha value.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// CSS `rgba(...)` string for canvas style properties.
    pub fn css(&self) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            self.a,
        )
    }

    pub const WHITE: Self = Self::rgb(1.0, 1.0, 1.0);
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Gradient background, top-left corner to bottom-right.
pub const BACKGROUND_TOP: Rgba = Rgba::new(5.0 / 255.0, 10.0 / 255.0, 26.0 / 255.0, 0.9);
pub const BACKGROUND_BOTTOM: Rgba = Rgba::new(10.0 / 255.0, 14.0 / 255.0, 39.0 / 255.0, 0.9);

/// Faint cyan ring marking each orbit.
pub const ORBIT_GUIDE: Rgba = Rgba::new(0.0, 217.0 / 255.0, 1.0, 0.1);

/// Sun disc: #ffd93d, 15px radius, 20px glow.
pub const SUN_COLOR: Rgba = Rgba::new(1.0, 217.0 / 255.0, 61.0 / 255.0, 1.0);
pub const SUN_RADIUS: f32 = 15.0;
pub const SUN_GLOW: f32 = 20.0;

/// Glow radius behind each body disc.
pub const BODY_GLOW: f32 = 12.0;

/// Body name labels, dimmed gray.
pub const LABEL_COLOR: Rgba = Rgba::new(176.0 / 255.0, 176.0 / 255.0, 176.0 / 255.0, 1.0);

/// A single drawing command. The web layer maps these 1:1 onto canvas
/// calls; tests inspect them directly.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Fill the whole surface with a corner-to-corner linear gradient.
    ClearGradient { size: Vec2, top: Rgba, bottom: Rgba },
    /// Filled disc. `glow` > 0 adds a shadow blur of that radius in the
    /// disc's own color.
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
        glow: f32,
    },
    /// Stroked circle outline.
    StrokeCircle {
        center: Vec2,
        radius: f32,
        width: f32,
        color: Rgba,
    },
    /// Straight line segment.
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    /// Small text label anchored at `pos`.
    Label { pos: Vec2, text: String, color: Rgba },
}

/// Accumulates drawing commands for one frame.
#[derive(Debug, Default)]
pub struct FrameBuffer {
    cmds: Vec<DrawCmd>,
}

impl FrameBuffer {
    pub fn new() -> Self {
        Self {
            cmds: Vec::with_capacity(64),
        }
    }

    /// Drop all commands. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.cmds.clear();
    }

    pub fn cmds(&self) -> &[DrawCmd] {
        &self.cmds
    }

    pub fn clear_gradient(&mut self, size: Vec2, top: Rgba, bottom: Rgba) {
        self.cmds.push(DrawCmd::ClearGradient { size, top, bottom });
    }

    pub fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba, glow: f32) {
        self.cmds.push(DrawCmd::FillCircle {
            center,
            radius,
            color,
            glow,
        });
    }

    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Rgba) {
        self.cmds.push(DrawCmd::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    pub fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.cmds.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    pub fn label(&mut self, pos: Vec2, text: String, color: Rgba) {
        self.cmds.push(DrawCmd::Label { pos, text, color });
    }
}

/// Start a frame: paint the gradient background over the full surface.
///
/// Split out from [`render_orbits`] so the particle layer can slot in
/// between the background and the orbital scene.
pub fn begin(fb: &mut FrameBuffer, size: Vec2) {
    fb.clear_gradient(size, BACKGROUND_TOP, BACKGROUND_BOTTOM);
}

/// Paint the orbital scene: guides (optional), sun, then every body on
/// its ring at simulation time `t`, each with a truncated name label.
pub fn render_orbits(bodies: &[Body], center: Vec2, show_orbits: bool, t: f64, fb: &mut FrameBuffer) {
    if show_orbits {
        for body in bodies {
            fb.stroke_circle(center, orbit::orbit_radius(body.id), 1.0, ORBIT_GUIDE);
        }
    }

    fb.fill_circle(center, SUN_RADIUS, SUN_COLOR, SUN_GLOW);

    for body in bodies {
        let pos = orbit::position_at(body.id, t, center);
        let radius = orbit::render_radius(body);
        let color = Rgba::from_hex(&body.color);
        fb.fill_circle(pos, radius, color, BODY_GLOW);

        let short: String = body.name.chars().take(3).collect();
        fb.label(pos + Vec2::new(-10.0, -15.0), short, LABEL_COLOR);
    }
}

/// Build one complete frame into `fb`, replacing whatever was there.
/// Same inputs always produce the same command list.
pub fn render_frame(bodies: &[Body], size: Vec2, show_orbits: bool, t: f64, fb: &mut FrameBuffer) {
    fb.clear();
    begin(fb, size);
    render_orbits(bodies, size * 0.5, show_orbits, t, fb);
}
