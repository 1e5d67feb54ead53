//! Default numeric constants for the tilt engine.

// ── Rotation ────────────────────────────────────────────────────

/// Largest rotation on either axis, in degrees.
pub const MAX_TILT_DEG: f64 = 8.0;

// ── Focused lift ────────────────────────────────────────────────

/// Scale factor applied while the pointer is over the container.
pub const HOVER_SCALE: f64 = 1.05;

/// Depth translation applied while focused, in CSS pixels.
pub const HOVER_LIFT_PX: f64 = 20.0;

/// Perspective distance of the transform, in CSS pixels.
pub const PERSPECTIVE_PX: f64 = 1000.0;

// ── Easing ──────────────────────────────────────────────────────

/// Transition length when entering focus.
pub const FOCUSED_TRANSITION_MS: u32 = 300;

/// Transition length while ambient tilt is tracking the pointer.
pub const AMBIENT_TRANSITION_MS: u32 = 100;

// ── Shadow / glow ───────────────────────────────────────────────

/// Shadow offset per degree of rotation.
pub const SHADOW_FACTOR: f64 = 0.5;

/// Constant downward shadow offset, in CSS pixels.
pub const SHADOW_DROP_PX: f64 = 8.0;

/// Shadow blur radius, in CSS pixels.
pub const SHADOW_BLUR_PX: f64 = 15.0;

/// Glow blur radius in ambient mode; focus adds the same amount again.
pub const GLOW_BLUR_PX: f64 = 20.0;

/// Glow alpha in ambient mode.
pub const GLOW_AMBIENT_ALPHA: f64 = 0.1;

/// Glow alpha while focused.
pub const GLOW_FOCUSED_ALPHA: f64 = 0.4;

// ── Cursor follower ─────────────────────────────────────────────

/// Edge length of the cursor follower ring, in CSS pixels.
pub const FOLLOWER_SIZE_PX: f64 = 16.0;
