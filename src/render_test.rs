#![allow(clippy::float_cmp)]

use super::*;

fn cfg() -> TiltConfig {
    TiltConfig::default()
}

fn ambient(rx: f64, ry: f64) -> TiltState {
    TiltState { rotate_x: rx, rotate_y: ry, is_hovered: false }
}

fn focused() -> TiltState {
    TiltState { rotate_x: 0.0, rotate_y: 0.0, is_hovered: true }
}

// =============================================================
// transform
// =============================================================

#[test]
fn transform_flat_ambient() {
    assert_eq!(
        transform(&ambient(0.0, 0.0), &cfg()),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(0px) scale(1)"
    );
}

#[test]
fn transform_tilted_ambient() {
    assert_eq!(
        transform(&ambient(8.0, -8.0), &cfg()),
        "perspective(1000px) rotateX(8deg) rotateY(-8deg) translateZ(0px) scale(1)"
    );
}

#[test]
fn transform_focused_lifts_and_scales() {
    assert_eq!(
        transform(&focused(), &cfg()),
        "perspective(1000px) rotateX(0deg) rotateY(0deg) translateZ(20px) scale(1.05)"
    );
}

#[test]
fn transform_uses_configured_perspective() {
    let c = TiltConfig { perspective_px: 600.0, ..Default::default() };
    assert!(transform(&ambient(0.0, 0.0), &c).starts_with("perspective(600px) "));
}

// =============================================================
// transition
// =============================================================

#[test]
fn transition_fast_when_ambient() {
    assert_eq!(transition(&ambient(1.0, 1.0), &cfg()), "transform 0.1s ease-out");
}

#[test]
fn transition_slow_when_focused() {
    assert_eq!(transition(&focused(), &cfg()), "transform 0.3s ease-out");
}

// =============================================================
// filter
// =============================================================

#[test]
fn filter_flat_ambient() {
    assert_eq!(
        filter(&ambient(0.0, 0.0), &cfg()),
        "drop-shadow(0px 8px 15px rgba(0,0,0,0.3)) drop-shadow(0 0 20px rgba(255,255,255,0.1))"
    );
}

#[test]
fn filter_shadow_follows_rotation() {
    assert_eq!(
        filter(&ambient(8.0, -8.0), &cfg()),
        "drop-shadow(-4px 12px 15px rgba(0,0,0,0.3)) drop-shadow(0 0 20px rgba(255,255,255,0.1))"
    );
}

#[test]
fn filter_focused_glows_brighter() {
    assert_eq!(
        filter(&focused(), &cfg()),
        "drop-shadow(0px 8px 15px rgba(0,0,0,0.3)) drop-shadow(0 0 40px rgba(255,255,255,0.4))"
    );
}

// =============================================================
// appearance
// =============================================================

#[test]
fn appearance_is_idempotent() {
    let state = ambient(3.25, -6.5);
    let a = appearance(&state, &cfg());
    let b = appearance(&state, &cfg());
    assert_eq!(a, b);
    assert_eq!(a.transform.as_bytes(), b.transform.as_bytes());
    assert_eq!(a.filter.as_bytes(), b.filter.as_bytes());
}

#[test]
fn appearance_backdrop_only_when_focused() {
    assert!(!appearance(&ambient(0.0, 0.0), &cfg()).backdrop_visible);
    assert!(appearance(&focused(), &cfg()).backdrop_visible);
}

#[test]
fn appearance_differs_between_modes() {
    assert_ne!(appearance(&ambient(0.0, 0.0), &cfg()), appearance(&focused(), &cfg()));
}

// =============================================================
// cursor_follower
// =============================================================

#[test]
fn follower_centered_on_offset() {
    let f = cursor_follower(Some(CursorOffset { x: 200.0, y: 50.0 }), &cfg()).unwrap();
    assert_eq!(f.left, 192.0);
    assert_eq!(f.top, 42.0);
}

#[test]
fn follower_hidden_without_offset() {
    assert_eq!(cursor_follower(None, &cfg()), None);
}
