//! Rendering descriptors: the CSS the host writes onto the tilted element.
//!
//! Everything here is a pure function of a [`TiltState`] (or cursor offset)
//! and the config. Equal inputs produce byte-identical strings, so the host
//! can apply a descriptor as often as it likes. Nothing in this module reads
//! input or touches the engine.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::config::TiltConfig;
use crate::input::{CursorOffset, TiltState};

/// Style values for the tilted element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appearance {
    /// Value for `style.transform`.
    pub transform: String,
    /// Value for `style.transition`.
    pub transition: String,
    /// Value for `style.filter`: directional drop shadow plus glow.
    pub filter: String,
    /// Whether the rotating backdrop behind the container is shown.
    pub backdrop_visible: bool,
}

/// Top-left position of the cursor follower ring inside the container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorFollower {
    pub left: f64,
    pub top: f64,
}

/// Build the full appearance for `state`.
#[must_use]
pub fn appearance(state: &TiltState, config: &TiltConfig) -> Appearance {
    Appearance {
        transform: transform(state, config),
        transition: transition(state, config),
        filter: filter(state, config),
        backdrop_visible: state.is_hovered,
    }
}

/// `perspective(..) rotateX(..) rotateY(..) translateZ(..) scale(..)`.
#[must_use]
pub fn transform(state: &TiltState, config: &TiltConfig) -> String {
    let (lift, scale) = if state.is_hovered {
        (config.hover_lift_px, config.hover_scale)
    } else {
        (0.0, 1.0)
    };
    format!(
        "perspective({}px) rotateX({}deg) rotateY({}deg) translateZ({lift}px) scale({scale})",
        config.perspective_px, state.rotate_x, state.rotate_y,
    )
}

/// Slow easing into focus, fast easing while tracking.
#[must_use]
pub fn transition(state: &TiltState, config: &TiltConfig) -> String {
    let ms = if state.is_hovered {
        config.focused_transition_ms
    } else {
        config.ambient_transition_ms
    };
    format!("transform {}s ease-out", f64::from(ms) / 1000.0)
}

/// Shadow offset follows `(rotate_y, rotate_x)`; glow brightens when focused.
#[must_use]
pub fn filter(state: &TiltState, config: &TiltConfig) -> String {
    let shadow_x = state.rotate_y * config.shadow_factor + 0.0;
    let shadow_y = state.rotate_x * config.shadow_factor + config.shadow_drop_px;
    let (glow_blur, glow_alpha) = if state.is_hovered {
        (config.glow_blur_px * 2.0, config.glow_focused_alpha)
    } else {
        (config.glow_blur_px, config.glow_ambient_alpha)
    };
    format!(
        "drop-shadow({shadow_x}px {shadow_y}px {}px rgba(0,0,0,0.3)) drop-shadow(0 0 {glow_blur}px rgba(255,255,255,{glow_alpha}))",
        config.shadow_blur_px,
    )
}

/// Position of the follower ring, centered on the pointer.
///
/// `None` (not hovered) hides the follower.
#[must_use]
pub fn cursor_follower(offset: Option<CursorOffset>, config: &TiltConfig) -> Option<CursorFollower> {
    let half = config.follower_size_px * 0.5;
    offset.map(|o| CursorFollower { left: o.x - half, top: o.y - half })
}
