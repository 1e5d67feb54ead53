//! Tunable parameters for a tilt engine.
//!
//! Every field has a default matching the stock effect, so a JSON payload only
//! needs the fields it overrides:
//!
//! ```
//! # fn main() -> Result<(), tilt::error::TiltError> {
//! let cfg = tilt::config::TiltConfig::from_json(r#"{ "max_tilt_deg": 12 }"#)?;
//! assert_eq!(cfg.max_tilt_deg, 12.0);
//! assert_eq!(cfg.hover_scale, 1.05);
//! # Ok(())
//! # }
//! ```

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    AMBIENT_TRANSITION_MS, FOCUSED_TRANSITION_MS, FOLLOWER_SIZE_PX, GLOW_AMBIENT_ALPHA, GLOW_BLUR_PX,
    GLOW_FOCUSED_ALPHA, HOVER_LIFT_PX, HOVER_SCALE, MAX_TILT_DEG, PERSPECTIVE_PX, SHADOW_BLUR_PX, SHADOW_DROP_PX,
    SHADOW_FACTOR,
};
use crate::error::TiltError;

/// Per-engine settings. Unknown JSON fields are rejected; missing ones take
/// the defaults from [`crate::consts`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TiltConfig {
    /// Largest rotation on either axis, in degrees.
    pub max_tilt_deg: f64,
    /// Scale applied while focused.
    pub hover_scale: f64,
    /// `translateZ` applied while focused, in CSS pixels.
    pub hover_lift_px: f64,
    /// Perspective distance of the transform, in CSS pixels.
    pub perspective_px: f64,
    /// Transform transition while focused, in milliseconds.
    pub focused_transition_ms: u32,
    /// Transform transition while ambient, in milliseconds.
    pub ambient_transition_ms: u32,
    /// Shadow offset per degree of rotation.
    pub shadow_factor: f64,
    /// Constant downward shadow offset, in CSS pixels.
    pub shadow_drop_px: f64,
    /// Blur radius of the directional shadow.
    pub shadow_blur_px: f64,
    /// Ambient glow radius; focus doubles it.
    pub glow_blur_px: f64,
    /// Glow opacity while ambient.
    pub glow_ambient_alpha: f64,
    /// Glow opacity while focused.
    pub glow_focused_alpha: f64,
    /// Diameter of the cursor follower; it is centred on the pointer.
    pub follower_size_px: f64,
}

impl Default for TiltConfig {
    fn default() -> Self {
        Self {
            max_tilt_deg: MAX_TILT_DEG,
            hover_scale: HOVER_SCALE,
            hover_lift_px: HOVER_LIFT_PX,
            perspective_px: PERSPECTIVE_PX,
            focused_transition_ms: FOCUSED_TRANSITION_MS,
            ambient_transition_ms: AMBIENT_TRANSITION_MS,
            shadow_factor: SHADOW_FACTOR,
            shadow_drop_px: SHADOW_DROP_PX,
            shadow_blur_px: SHADOW_BLUR_PX,
            glow_blur_px: GLOW_BLUR_PX,
            glow_ambient_alpha: GLOW_AMBIENT_ALPHA,
            glow_focused_alpha: GLOW_FOCUSED_ALPHA,
            follower_size_px: FOLLOWER_SIZE_PX,
        }
    }
}

impl TiltConfig {
    /// Parse and validate a JSON config.
    ///
    /// # Errors
    ///
    /// Returns [`TiltError::ConfigParse`] for malformed JSON or unknown fields,
    /// and [`TiltError::InvalidConfig`] if a value is out of range.
    pub fn from_json(raw: &str) -> Result<Self, TiltError> {
        let cfg: Self = serde_json::from_str(raw)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check every field for finiteness and range.
    ///
    /// # Errors
    ///
    /// Returns [`TiltError::InvalidConfig`] naming the first offending field.
    pub fn validate(&self) -> Result<(), TiltError> {
        positive("max_tilt_deg", self.max_tilt_deg)?;
        positive("hover_scale", self.hover_scale)?;
        non_negative("hover_lift_px", self.hover_lift_px)?;
        positive("perspective_px", self.perspective_px)?;
        non_negative("shadow_factor", self.shadow_factor)?;
        non_negative("shadow_drop_px", self.shadow_drop_px)?;
        non_negative("shadow_blur_px", self.shadow_blur_px)?;
        non_negative("glow_blur_px", self.glow_blur_px)?;
        unit("glow_ambient_alpha", self.glow_ambient_alpha)?;
        unit("glow_focused_alpha", self.glow_focused_alpha)?;
        non_negative("follower_size_px", self.follower_size_px)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), TiltError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(TiltError::InvalidConfig { field, reason: format!("must be finite, got {value}") })
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), TiltError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(TiltError::InvalidConfig { field, reason: format!("must be > 0, got {value}") })
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), TiltError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(TiltError::InvalidConfig { field, reason: format!("must be >= 0, got {value}") })
    }
}

fn unit(field: &'static str, value: f64) -> Result<(), TiltError> {
    finite(field, value)?;
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(TiltError::InvalidConfig { field, reason: format!("must be within [0, 1], got {value}") })
    }
}
