#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Mode
// =============================================================

#[test]
fn mode_default_is_ambient() {
    assert_eq!(Mode::default(), Mode::Ambient);
}

#[test]
fn mode_debug_format() {
    assert_eq!(format!("{:?}", Mode::Ambient), "Ambient");
    assert_eq!(format!("{:?}", Mode::Focused), "Focused");
}

// =============================================================
// TiltState
// =============================================================

#[test]
fn tilt_state_default_is_flat_and_ambient() {
    let s = TiltState::default();
    assert_eq!(s.rotate_x, 0.0);
    assert_eq!(s.rotate_y, 0.0);
    assert!(!s.is_hovered);
    assert_eq!(s.mode(), Mode::Ambient);
}

#[test]
fn tilt_state_mode_follows_hover_flag() {
    let s = TiltState { is_hovered: true, ..Default::default() };
    assert_eq!(s.mode(), Mode::Focused);
}

#[test]
fn tilt_state_with_rotation_keeps_hover_flag() {
    let s = TiltState { is_hovered: true, ..Default::default() };
    let t = s.with_rotation(Rotation::new(3.0, -2.0));
    assert_eq!(t.rotate_x, 3.0);
    assert_eq!(t.rotate_y, -2.0);
    assert!(t.is_hovered);
}

#[test]
fn tilt_state_rotation_roundtrip() {
    let s = TiltState { rotate_x: 1.5, rotate_y: -4.0, is_hovered: false };
    assert_eq!(s.rotation(), Rotation::new(1.5, -4.0));
}

// =============================================================
// Rotation / CursorOffset / InputEvent
// =============================================================

#[test]
fn rotation_zero_constant() {
    assert_eq!(Rotation::ZERO, Rotation::default());
}

#[test]
fn cursor_offset_default_is_origin() {
    let o = CursorOffset::default();
    assert_eq!(o.x, 0.0);
    assert_eq!(o.y, 0.0);
}

#[test]
fn input_event_equality() {
    assert_eq!(InputEvent::PointerEnter, InputEvent::PointerEnter);
    assert_ne!(InputEvent::PointerEnter, InputEvent::PointerLeave);
    assert_eq!(
        InputEvent::PointerMove(Point::new(1.0, 2.0)),
        InputEvent::PointerMove(Point::new(1.0, 2.0))
    );
}
