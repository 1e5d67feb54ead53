//! Error type shared by the tilt crate.

/// Errors surfaced by engine construction, host wiring, and configuration.
///
/// Degenerate geometry is never an error; the engine recovers from it locally.
#[derive(Debug, thiserror::Error)]
pub enum TiltError {
    /// A required browser global (window, document) is not available.
    #[error("host environment is missing `{0}`")]
    MissingHost(&'static str),
    /// The host refused to register one of the engine's listeners.
    #[error("failed to register `{event}` listener: {reason}")]
    ListenerRegistration { event: &'static str, reason: String },
    /// The host could not schedule an animation frame.
    #[error("failed to schedule animation frame: {0}")]
    FrameScheduling(String),
    /// A configuration field is out of range.
    #[error("invalid config field `{field}`: {reason}")]
    InvalidConfig { field: &'static str, reason: String },
    /// The configuration payload is not valid JSON for [`crate::config::TiltConfig`].
    #[error("invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),
}
