//! The boundary between an engine and the environment it runs in.

use crate::error::TiltError;
use crate::frame::FrameToken;
use crate::geometry::{Rect, Viewport};
use crate::render::{Appearance, CursorFollower};

/// Everything an [`crate::engine::Engine`] needs from its surroundings.
///
/// The browser implementation lives in `web::DomHost`; tests use a recording
/// mock. A host only performs side effects the engine asks for and never
/// calls back into the engine from inside one of these methods.
pub trait Host {
    /// Register the global pointer-move listener and the container's
    /// enter/leave listeners.
    ///
    /// # Errors
    ///
    /// Returns [`TiltError::ListenerRegistration`] (or
    /// [`TiltError::MissingHost`]) if any listener cannot be registered. On
    /// error, nothing may remain registered.
    fn subscribe(&mut self) -> Result<(), TiltError>;

    /// Remove every listener registered by [`Host::subscribe`]. Idempotent.
    fn unsubscribe(&mut self);

    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Current bounding box of the container.
    fn container_rect(&self) -> Rect;

    /// Arrange for the engine's `on_frame(token)` to run on the next
    /// animation frame.
    ///
    /// # Errors
    ///
    /// Returns [`TiltError::FrameScheduling`] if the scheduler is unavailable.
    fn request_frame(&mut self, token: FrameToken) -> Result<(), TiltError>;

    /// Cancel a frame requested earlier. Unknown tokens are ignored.
    fn cancel_frame(&mut self, token: FrameToken);

    /// Write the element style.
    fn apply(&mut self, appearance: &Appearance);

    /// Move (or hide, with `None`) the cursor follower.
    fn place_follower(&mut self, follower: Option<CursorFollower>);
}
