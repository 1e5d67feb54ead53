//! Input model: pointer events, the hover mode, and the committed tilt state.
//!
//! `InputEvent` is what the host delivers. `TiltState` is the single piece of
//! state an engine owns; it only changes through a global pointer move
//! (rotation) or a hover enter/leave (mode). `CursorOffset` is derived data
//! that exists only while the container is hovered.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::geometry::Point;

/// An event delivered to the engine by its host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Global pointer move, in viewport coordinates.
    PointerMove(Point),
    /// The pointer entered the container.
    PointerEnter,
    /// The pointer left the container.
    PointerLeave,
}

/// Which of the two mutually exclusive modes the engine is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Tilt follows the pointer across the whole viewport.
    #[default]
    Ambient,
    /// The pointer is over the container; tilt is suspended.
    Focused,
}

/// Rotation about the X and Y axes, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x: f64,
    pub y: f64,
}

impl Rotation {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The state owned by one engine instance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TiltState {
    /// Rotation about the horizontal axis, in degrees.
    pub rotate_x: f64,
    /// Rotation about the vertical axis, in degrees.
    pub rotate_y: f64,
    /// Whether the pointer is inside the container.
    pub is_hovered: bool,
}

impl TiltState {
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.is_hovered { Mode::Focused } else { Mode::Ambient }
    }

    #[must_use]
    pub fn rotation(&self) -> Rotation {
        Rotation::new(self.rotate_x, self.rotate_y)
    }

    /// Copy of this state with `rotation` applied.
    #[must_use]
    pub fn with_rotation(self, rotation: Rotation) -> Self {
        Self { rotate_x: rotation.x, rotate_y: rotation.y, ..self }
    }
}

/// Pointer position relative to the container's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorOffset {
    pub x: f64,
    pub y: f64,
}
