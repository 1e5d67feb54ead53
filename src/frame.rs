//! Per-frame throttling.
//!
//! An engine keeps at most one computation queued for the next animation
//! frame. Scheduling again while a frame is pending replaces it: the caller
//! must cancel the returned token with the host and the newest sample wins.
//! A frame callback is honored only if its token matches the pending one.

#[cfg(test)]
#[path = "frame_test.rs"]
mod frame_test;

use crate::geometry::Point;

/// Identifies one scheduled frame of one engine.
///
/// Tokens are issued by the engine, not the host; the host maps them onto
/// whatever handle its scheduler returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameToken(pub u64);

/// The queued computation: which frame it runs on and the sample it uses.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingFrame {
    pub token: FrameToken,
    pub sample: Point,
}

/// Single-slot holder for the pending frame.
#[derive(Debug, Default)]
pub struct FrameSlot {
    pending: Option<PendingFrame>,
    next_token: u64,
}

impl FrameSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `sample` for the next frame.
    ///
    /// Returns the new token and, if one was pending, the token it replaced.
    pub fn schedule(&mut self, sample: Point) -> (FrameToken, Option<FrameToken>) {
        self.next_token = self.next_token.wrapping_add(1);
        let token = FrameToken(self.next_token);
        let replaced = self.pending.replace(PendingFrame { token, sample }).map(|p| p.token);
        (token, replaced)
    }

    /// Consume the pending sample if `token` is the pending frame.
    ///
    /// Stale or unknown tokens leave the slot untouched and return `None`.
    pub fn take(&mut self, token: FrameToken) -> Option<Point> {
        match self.pending {
            Some(p) if p.token == token => {
                self.pending = None;
                Some(p.sample)
            }
            _ => None,
        }
    }

    /// Drop the pending frame without running it, returning its token.
    pub fn clear(&mut self) -> Option<FrameToken> {
        self.pending.take().map(|p| p.token)
    }

    #[must_use]
    pub fn pending(&self) -> Option<PendingFrame> {
        self.pending
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
