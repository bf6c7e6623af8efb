//! Rendering: draws the scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a detached [`Scene`] and produces pixels. It does not mutate
//! any application state, so calling it after every action is always safe.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::TAU;

use js_sys::Array;
use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{PIVOT_DRAW_RADIUS, PREVIEW_DASH, STROKE_WIDTH};
use crate::doc::{Pivot, Rod, Wheel};
use crate::engine::{RodPreview, Scene};

const INK: &str = "#1F1A17";
const SELECTED: &str = "#1E88E5";
const PREVIEW: &str = "#9E9E9E";

/// Draw the full scene: wheels, rods, pivots, then the rod preview.
///
/// `width` and `height` are the canvas size in device pixels.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, scene: &Scene, width: f64, height: f64) -> Result<(), JsValue> {
    ctx.clear_rect(0.0, 0.0, width, height);
    ctx.set_line_width(STROKE_WIDTH);

    for wheel in &scene.wheels {
        draw_wheel(ctx, wheel, scene.selection.contains(&wheel.id))?;
    }
    for rod in &scene.rods {
        draw_rod(ctx, rod, scene.selection.contains(&rod.id));
    }
    for pivot in &scene.pivots {
        draw_pivot(ctx, pivot, scene.selection.contains(&pivot.id))?;
    }
    if let Some(preview) = scene.rod_preview {
        draw_preview(ctx, preview)?;
    }
    Ok(())
}

fn ink(selected: bool) -> &'static str {
    if selected { SELECTED } else { INK }
}

// =============================================================
// Entity renderers
// =============================================================

fn draw_wheel(ctx: &CanvasRenderingContext2d, wheel: &Wheel, selected: bool) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(wheel.center.x, wheel.center.y, wheel.radius, 0.0, TAU)?;
    ctx.set_stroke_style_str(ink(selected));
    ctx.stroke();
    Ok(())
}

fn draw_rod(ctx: &CanvasRenderingContext2d, rod: &Rod, selected: bool) {
    ctx.begin_path();
    ctx.move_to(rod.start.x, rod.start.y);
    ctx.line_to(rod.end.x, rod.end.y);
    ctx.set_stroke_style_str(ink(selected));
    ctx.stroke();
}

fn draw_pivot(ctx: &CanvasRenderingContext2d, pivot: &Pivot, selected: bool) -> Result<(), JsValue> {
    ctx.begin_path();
    ctx.arc(pivot.position.x, pivot.position.y, PIVOT_DRAW_RADIUS, 0.0, TAU)?;
    ctx.set_fill_style_str(ink(selected));
    ctx.fill();
    Ok(())
}

fn draw_preview(ctx: &CanvasRenderingContext2d, preview: RodPreview) -> Result<(), JsValue> {
    let dash = Array::of2(&JsValue::from_f64(PREVIEW_DASH), &JsValue::from_f64(PREVIEW_DASH));
    ctx.save();
    ctx.set_line_dash(&dash)?;
    ctx.begin_path();
    ctx.move_to(preview.start.x, preview.start.y);
    ctx.line_to(preview.end.x, preview.end.y);
    ctx.set_stroke_style_str(PREVIEW);
    ctx.stroke();
    ctx.restore();
    Ok(())
}
