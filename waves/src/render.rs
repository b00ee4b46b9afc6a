//! Painting: draws a planned frame to a 2D context.
//!
//! This module is the only place in the crate that touches
//! [`web_sys::CanvasRenderingContext2d`]. It receives a read-only
//! [`Frame`] plan and produces pixels; it never mutates animation state.

use web_sys::CanvasRenderingContext2d;

use crate::core::Frame;

/// Paint one frame: the translucent background fill first (the fade trail),
/// then each wave stroke as a single path.
pub fn draw(ctx: &CanvasRenderingContext2d, frame: &Frame, width: f64, height: f64) {
    ctx.set_global_alpha(frame.opacity);
    ctx.set_fill_style_str(&frame.fill);
    ctx.fill_rect(0.0, 0.0, width, height);

    for stroke in &frame.strokes {
        ctx.begin_path();
        ctx.set_line_width(stroke.width);
        ctx.set_stroke_style_str(&stroke.color);
        // The first line_to of a fresh path acts as a move_to.
        for point in &stroke.points {
            ctx.line_to(point.x, point.y);
        }
        ctx.stroke();
        ctx.close_path();
    }
}
