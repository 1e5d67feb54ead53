//! Ambient rotation math.
//!
//! The pointer is normalized against the viewport center so each axis spans
//! `[-1, 1]` edge to edge, clamped (positions outside the viewport saturate),
//! and scaled by the configured maximum. The vertical axis is inverted so the
//! element leans away from the pointer.

#[cfg(test)]
#[path = "tilt_test.rs"]
mod tilt_test;

use crate::geometry::{Point, Rect, Viewport};
use crate::input::{CursorOffset, Rotation};

/// Rotation for a pointer at `pointer` in a viewport of size `viewport`.
///
/// Returns [`Rotation::ZERO`] when the viewport is degenerate or the pointer
/// has a NaN coordinate. Each axis of the result lies in `[-max_deg, max_deg]`.
#[must_use]
pub fn ambient_rotation(pointer: Point, viewport: Viewport, max_deg: f64) -> Rotation {
    if viewport.is_degenerate() || pointer.x.is_nan() || pointer.y.is_nan() {
        return Rotation::ZERO;
    }

    let center = viewport.center();
    let rel_x = normalize_axis(pointer.x, center.x);
    let rel_y = normalize_axis(pointer.y, center.y);

    Rotation::new(positive_zero(-rel_y * max_deg), positive_zero(rel_x * max_deg))
}

/// Rotation while the container is hovered: always flat.
#[must_use]
pub fn focused_rotation() -> Rotation {
    Rotation::ZERO
}

/// Pointer position relative to the container's top-left corner.
///
/// A degenerate container (collapsed, detached) yields the origin.
#[must_use]
pub fn cursor_offset(pointer: Point, container: Rect) -> CursorOffset {
    if container.is_degenerate() || !pointer.is_finite() {
        return CursorOffset::default();
    }
    CursorOffset { x: pointer.x - container.left, y: pointer.y - container.top }
}

/// `(value - half) / half`, clamped to `[-1, 1]`. `half` must be positive.
fn normalize_axis(value: f64, half: f64) -> f64 {
    ((value - half) / half).clamp(-1.0, 1.0)
}

/// Fold `-0.0` into `0.0` so formatted descriptors never read `-0`.
fn positive_zero(v: f64) -> f64 {
    v + 0.0
}
