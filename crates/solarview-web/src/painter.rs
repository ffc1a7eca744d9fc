//! Canvas-2D execution of the core's draw commands.

use glam::Vec2;
use solarview_core::frame::{DrawCmd, FrameBuffer};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Font for body labels.
const LABEL_FONT: &str = "10px Arial";

/// Owns a canvas and its 2d context, replaying frame buffers onto it.
pub struct CanvasPainter {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasPainter {
    /// Look up the canvas by element id and grab its 2d context.
    /// Returns `None` when either is missing; the caller skips frames
    /// until a later attach succeeds.
    pub fn attach(canvas_id: &str) -> Option<Self> {
        let document = web_sys::window()?.document()?;
        let canvas = document
            .get_element_by_id(canvas_id)?
            .dyn_into::<HtmlCanvasElement>()
            .ok()?;
        let ctx = canvas
            .get_context("2d")
            .ok()??
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(Self { canvas, ctx })
    }

    /// Backing store size in pixels.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.canvas.width() as f32, self.canvas.height() as f32)
    }

    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Replay one frame onto the canvas.
    pub fn paint(&self, fb: &FrameBuffer) {
        for cmd in fb.cmds() {
            match cmd {
                DrawCmd::ClearGradient { size, top, bottom } => {
                    // Diagonal, corner to corner.
                    let gradient = self.ctx.create_linear_gradient(
                        0.0,
                        0.0,
                        size.x as f64,
                        size.y as f64,
                    );
                    let _ = gradient.add_color_stop(0.0, &top.css());
                    let _ = gradient.add_color_stop(1.0, &bottom.css());
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                    self.ctx
                        .fill_rect(0.0, 0.0, size.x as f64, size.y as f64);
                }
                DrawCmd::FillCircle {
                    center,
                    radius,
                    color,
                    glow,
                } => {
                    let css = color.css();
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    self.ctx.set_fill_style_str(&css);
                    if *glow > 0.0 {
                        self.ctx.set_shadow_blur(*glow as f64);
                        self.ctx.set_shadow_color(&css);
                    }
                    self.ctx.fill();
                    self.ctx.set_shadow_blur(0.0);
                }
                DrawCmd::StrokeCircle {
                    center,
                    radius,
                    width,
                    color,
                } => {
                    self.ctx.begin_path();
                    let _ = self.ctx.arc(
                        center.x as f64,
                        center.y as f64,
                        *radius as f64,
                        0.0,
                        std::f64::consts::TAU,
                    );
                    self.ctx.set_stroke_style_str(&color.css());
                    self.ctx.set_line_width(*width as f64);
                    self.ctx.stroke();
                }
                DrawCmd::Line {
                    from,
                    to,
                    width,
                    color,
                } => {
                    self.ctx.begin_path();
                    self.ctx.move_to(from.x as f64, from.y as f64);
                    self.ctx.line_to(to.x as f64, to.y as f64);
                    self.ctx.set_stroke_style_str(&color.css());
                    self.ctx.set_line_width(*width as f64);
                    self.ctx.stroke();
                }
                DrawCmd::Label { pos, text, color } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.set_font(LABEL_FONT);
                    let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}
