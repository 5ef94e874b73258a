//! Stateless drawing routines for the gesture canvas.
//!
//! All coordinates are surface-local CSS pixels; the caller owns the HiDPI
//! transform on the context.

use web_sys::CanvasRenderingContext2d;

use crate::model::{GestureEvent, GestureKind, Point, StrokeSegment};

pub const TRACE_COLOR: &str = "#007aff";
pub const TRACE_WIDTH: f64 = 5.0;
pub const CONTACT_MARKER_COLOR: &str = "rgba(0, 122, 255, 0.35)";
/// Chord drawn between the two contacts of a rotate gesture.
const ROTATE_CHORD_WIDTH: f64 = 3.0;

pub fn clear(ctx: &CanvasRenderingContext2d, width: f64, height: f64) {
    ctx.set_global_alpha(1.0);
    ctx.clear_rect(0.0, 0.0, width, height);
}

/// Draw one stroke segment at the given opacity.
pub fn draw_segment(ctx: &CanvasRenderingContext2d, seg: &StrokeSegment, opacity: f64) {
    ctx.set_global_alpha(opacity);
    ctx.set_line_width(TRACE_WIDTH);
    ctx.set_stroke_style_str(TRACE_COLOR);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(seg.from.x, seg.from.y);
    ctx.line_to(seg.to.x, seg.to.y);
    ctx.stroke();
    ctx.set_global_alpha(1.0);
}

/// Clear the surface and replay the whole history at `opacity`.
pub fn redraw_trace(
    ctx: &CanvasRenderingContext2d,
    segments: &[StrokeSegment],
    opacity: f64,
    width: f64,
    height: f64,
) {
    clear(ctx, width, height);
    if opacity <= 0.0 {
        return;
    }
    for seg in segments {
        draw_segment(ctx, seg, opacity);
    }
}

fn draw_disc(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, color: &str) {
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, std::f64::consts::PI * 2.0)
        .ok();
    ctx.set_fill_style_str(color);
    ctx.fill();
}

/// Translucent disc under the active contact, sized by contact count.
pub fn draw_contact_marker(ctx: &CanvasRenderingContext2d, center: Point, radius: f64) {
    draw_disc(ctx, center, radius, CONTACT_MARKER_COLOR);
}

/// Feedback overlay for one recognized gesture. Drawn on top of the current
/// surface; the next full redraw wipes it, matching the trace fade.
pub fn draw_feedback(ctx: &CanvasRenderingContext2d, event: &GestureEvent) {
    let style = event.kind.feedback_style();
    match event.kind {
        GestureKind::Pinch { .. } => {
            for p in &event.points {
                draw_disc(ctx, *p, style.radius, style.color);
            }
        }
        GestureKind::Rotate { .. } => {
            for p in &event.points {
                draw_disc(ctx, *p, style.radius, style.color);
            }
            if let [a, b] = event.points.as_slice() {
                ctx.begin_path();
                ctx.move_to(a.x, a.y);
                ctx.line_to(b.x, b.y);
                ctx.set_line_width(ROTATE_CHORD_WIDTH);
                ctx.set_stroke_style_str(style.color);
                ctx.stroke();
            }
        }
        _ => {
            if let Some(p) = event.points.first() {
                draw_disc(ctx, *p, style.radius, style.color);
            }
        }
    }
}
