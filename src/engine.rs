use log::{debug, info, trace, warn};

use crate::config::TiltConfig;
use crate::error::TiltError;
use crate::frame::{FrameSlot, FrameToken};
use crate::geometry::{Point, Rect, Viewport};
use crate::host::Host;
use crate::input::{CursorOffset, InputEvent, Mode, TiltState};
use crate::render::{self, Appearance, CursorFollower};
use crate::tilt;

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Side effects returned from input handlers for the host to carry out.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Run `on_frame` with this token on the next animation frame.
    ScheduleFrame(FrameToken),
    /// Drop a previously scheduled frame.
    CancelFrame(FrameToken),
    /// The committed state changed; write this style.
    Render(Appearance),
    /// Move or hide the cursor follower.
    MoveFollower(Option<CursorFollower>),
    /// Remove every listener.
    Unsubscribe,
}

/// Core engine state: all logic that does not depend on a host.
///
/// Separated from `Engine` so it can be tested without a browser.
#[derive(Debug)]
pub struct EngineCore {
    config: TiltConfig,
    state: TiltState,
    cursor: Option<CursorOffset>,
    frames: FrameSlot,
    torn_down: bool,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(TiltConfig::default())
    }
}

impl EngineCore {
    #[must_use]
    pub fn new(config: TiltConfig) -> Self {
        Self {
            config,
            state: TiltState::default(),
            cursor: None,
            frames: FrameSlot::new(),
            torn_down: false,
        }
    }

    // --- Input events ---

    /// Dispatch a host event.
    pub fn handle(&mut self, event: InputEvent) -> Vec<Action> {
        match event {
            InputEvent::PointerMove(pt) => self.on_pointer_move(pt),
            InputEvent::PointerEnter => self.on_pointer_enter(),
            InputEvent::PointerLeave => self.on_pointer_leave(),
        }
    }

    /// Queue `pt` for the next frame, replacing any sample still waiting.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        if self.torn_down {
            trace!("tilt: pointer move after teardown ignored");
            return Vec::new();
        }
        let (token, replaced) = self.frames.schedule(pt);
        let mut actions = Vec::with_capacity(2);
        if let Some(old) = replaced {
            actions.push(Action::CancelFrame(old));
        }
        actions.push(Action::ScheduleFrame(token));
        actions
    }

    /// Run the pending computation if `token` is still the pending frame.
    ///
    /// `container` is only consulted while focused.
    pub fn on_frame(&mut self, token: FrameToken, viewport: Viewport, container: impl FnOnce() -> Rect) -> Vec<Action> {
        if self.torn_down {
            trace!("tilt: frame {token:?} after teardown ignored");
            return Vec::new();
        }
        let Some(sample) = self.frames.take(token) else {
            trace!("tilt: stale frame {token:?} ignored");
            return Vec::new();
        };

        let mut actions = Vec::new();
        if self.state.is_hovered {
            let offset = tilt::cursor_offset(sample, container());
            actions.extend(self.commit(self.state.with_rotation(tilt::focused_rotation())));
            if self.cursor != Some(offset) {
                self.cursor = Some(offset);
                actions.push(Action::MoveFollower(render::cursor_follower(self.cursor, &self.config)));
            }
        } else {
            if viewport.is_degenerate() {
                debug!("tilt: degenerate viewport {viewport:?}, falling back to flat");
            }
            let rotation = tilt::ambient_rotation(sample, viewport, self.config.max_tilt_deg);
            actions.extend(self.commit(self.state.with_rotation(rotation)));
        }
        actions
    }

    /// `Ambient → Focused`: flatten, lift, and slow the easing.
    pub fn on_pointer_enter(&mut self) -> Vec<Action> {
        if self.torn_down {
            trace!("tilt: pointer enter after teardown ignored");
            return Vec::new();
        }
        if self.state.is_hovered {
            return Vec::new();
        }
        debug!("tilt: ambient -> focused");
        let next = TiltState { rotate_x: 0.0, rotate_y: 0.0, is_hovered: true };
        self.commit(next).into_iter().collect()
    }

    /// `Focused → Ambient`: drop the lift and hide the follower. Rotation
    /// resumes with the next sampled move.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        if self.torn_down {
            trace!("tilt: pointer leave after teardown ignored");
            return Vec::new();
        }
        if !self.state.is_hovered {
            return Vec::new();
        }
        debug!("tilt: focused -> ambient");
        let mut actions: Vec<Action> = self
            .commit(TiltState { is_hovered: false, ..self.state })
            .into_iter()
            .collect();
        if self.cursor.take().is_some() {
            actions.push(Action::MoveFollower(None));
        }
        actions
    }

    /// Stop for good: unsubscribe, then cancel the pending frame.
    ///
    /// Returns nothing on a second call; every later event is a no-op.
    pub fn teardown(&mut self) -> Vec<Action> {
        if self.torn_down {
            return Vec::new();
        }
        self.torn_down = true;
        let mut actions = vec![Action::Unsubscribe];
        if let Some(token) = self.frames.clear() {
            actions.push(Action::CancelFrame(token));
        }
        actions
    }

    // --- Queries ---

    #[must_use]
    pub fn state(&self) -> TiltState {
        self.state
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.state.mode()
    }

    /// Pointer position inside the container; `None` unless focused and sampled.
    #[must_use]
    pub fn cursor_offset(&self) -> Option<CursorOffset> {
        self.cursor
    }

    /// Style for the current state.
    #[must_use]
    pub fn appearance(&self) -> Appearance {
        render::appearance(&self.state, &self.config)
    }

    #[must_use]
    pub fn config(&self) -> &TiltConfig {
        &self.config
    }

    #[must_use]
    pub fn pending_frame(&self) -> Option<FrameToken> {
        self.frames.pending().map(|p| p.token)
    }

    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Replace the state and emit a render if anything changed.
    fn commit(&mut self, next: TiltState) -> Option<Action> {
        if next == self.state {
            return None;
        }
        self.state = next;
        Some(Action::Render(self.appearance()))
    }
}

/// The full tilt engine. Wraps `EngineCore` and carries out its actions on a [`Host`].
pub struct Engine<H: Host> {
    host: H,
    pub core: EngineCore,
}

impl<H: Host> Engine<H> {
    /// Subscribe to `host`, paint the initial (flat, ambient) style and hide
    /// the cursor follower.
    ///
    /// # Errors
    ///
    /// Returns [`TiltError::InvalidConfig`] for a bad config, or whatever
    /// [`Host::subscribe`] reports. Either way nothing stays registered.
    pub fn new(mut host: H, config: TiltConfig) -> Result<Self, TiltError> {
        config.validate()?;
        host.subscribe()?;
        let core = EngineCore::new(config);
        host.apply(&core.appearance());
        host.place_follower(None);
        info!("tilt: engine mounted");
        Ok(Self { host, core })
    }

    // --- Input events ---

    pub fn handle(&mut self, event: InputEvent) {
        let actions = self.core.handle(event);
        self.execute(actions);
    }

    pub fn on_pointer_move(&mut self, pt: Point) {
        let actions = self.core.on_pointer_move(pt);
        self.execute(actions);
    }

    pub fn on_pointer_enter(&mut self) {
        let actions = self.core.on_pointer_enter();
        self.execute(actions);
    }

    pub fn on_pointer_leave(&mut self) {
        let actions = self.core.on_pointer_leave();
        self.execute(actions);
    }

    /// Animation-frame callback for `token`.
    pub fn on_frame(&mut self, token: FrameToken) {
        let viewport = self.host.viewport();
        let host = &self.host;
        let actions = self.core.on_frame(token, viewport, || host.container_rect());
        self.execute(actions);
    }

    /// Unsubscribe and cancel pending work. Safe to call more than once.
    pub fn teardown(&mut self) {
        let actions = self.core.teardown();
        if !actions.is_empty() {
            info!("tilt: engine torn down");
        }
        self.execute(actions);
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn state(&self) -> TiltState {
        self.core.state()
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.core.mode()
    }

    #[must_use]
    pub fn cursor_offset(&self) -> Option<CursorOffset> {
        self.core.cursor_offset()
    }

    #[must_use]
    pub fn appearance(&self) -> Appearance {
        self.core.appearance()
    }

    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    fn execute(&mut self, actions: Vec<Action>) {
        for action in actions {
            match action {
                Action::ScheduleFrame(token) => {
                    if let Err(err) = self.host.request_frame(token) {
                        warn!("tilt: {err}; computing frame {token:?} synchronously");
                        self.on_frame(token);
                    }
                }
                Action::CancelFrame(token) => self.host.cancel_frame(token),
                Action::Render(appearance) => self.host.apply(&appearance),
                Action::MoveFollower(follower) => self.host.place_follower(follower),
                Action::Unsubscribe => self.host.unsubscribe(),
            }
        }
    }
}

impl<H: Host> Drop for Engine<H> {
    fn drop(&mut self) {
        self.teardown();
    }
}
