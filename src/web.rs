//! Browser host: wires an [`Engine`] to DOM pointer events and
//! `requestAnimationFrame`.
//!
//! ARCHITECTURE
//! ============
//! The engine lives in a shared `Rc<RefCell<Option<Engine<DomHost>>>>`. Every
//! listener and frame callback holds only a `Weak` to it, so dropping the
//! [`TiltHandle`] frees the engine, and the engine's teardown removes the
//! listeners. Callbacks that fire after that find nothing to upgrade and do
//! nothing.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::{CssStyleDeclaration, Document, Element, EventTarget, HtmlElement, MouseEvent, Window};

use crate::config::TiltConfig;
use crate::engine::Engine;
use crate::error::TiltError;
use crate::frame::FrameToken;
use crate::geometry::{Point, Rect, Viewport};
use crate::host::Host;
use crate::input::{CursorOffset, TiltState};
use crate::render::{Appearance, CursorFollower};

type Shared = Rc<RefCell<Option<Engine<DomHost>>>>;
type WeakShared = Weak<RefCell<Option<Engine<DomHost>>>>;

/// Optional decorations driven alongside the tilted element.
#[derive(Default)]
pub struct Decorations {
    /// Rotating glow behind the container; shown only while focused.
    pub backdrop: Option<HtmlElement>,
    /// Ring that follows the pointer inside the container.
    pub follower: Option<HtmlElement>,
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(MouseEvent)>,
}

struct ScheduledFrame {
    token: FrameToken,
    request_id: i32,
    _callback: Closure<dyn FnMut(f64)>,
}

/// [`Host`] over `web-sys`.
pub struct DomHost {
    window: Window,
    document: Document,
    container: Element,
    target: HtmlElement,
    decorations: Decorations,
    engine: WeakShared,
    listeners: Vec<Listener>,
    frame: Option<ScheduledFrame>,
}

impl DomHost {
    /// # Errors
    ///
    /// Returns [`TiltError::MissingHost`] outside a browser window.
    fn new(
        container: Element,
        target: HtmlElement,
        decorations: Decorations,
        engine: WeakShared,
    ) -> Result<Self, TiltError> {
        let window = web_sys::window().ok_or(TiltError::MissingHost("window"))?;
        let document = window.document().ok_or(TiltError::MissingHost("document"))?;
        Ok(Self { window, document, container, target, decorations, engine, listeners: Vec::new(), frame: None })
    }

    fn listen(
        &mut self,
        target: EventTarget,
        event: &'static str,
        on_event: fn(&mut Engine<DomHost>, &MouseEvent),
    ) -> Result<(), TiltError> {
        let weak = self.engine.clone();
        let callback = Closure::wrap(Box::new(move |ev: MouseEvent| {
            with_engine(&weak, |engine| on_event(engine, &ev));
        }) as Box<dyn FnMut(MouseEvent)>);
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|err| TiltError::ListenerRegistration { event, reason: format!("{err:?}") })?;
        self.listeners.push(Listener { target, event, callback });
        Ok(())
    }

    fn register_all(&mut self) -> Result<(), TiltError> {
        let supported = js_sys::Reflect::has(&self.window, &JsValue::from_str("PointerEvent"))
            .map_err(|err| TiltError::ListenerRegistration { event: "pointermove", reason: format!("{err:?}") })?;
        if !supported {
            return Err(TiltError::ListenerRegistration {
                event: "pointermove",
                reason: "PointerEvent is not supported".into(),
            });
        }

        self.listen(self.document.clone().into(), "pointermove", |engine, ev| {
            engine.on_pointer_move(Point::new(f64::from(ev.client_x()), f64::from(ev.client_y())));
        })?;
        self.listen(self.container.clone().into(), "pointerenter", |engine, _| engine.on_pointer_enter())?;
        self.listen(self.container.clone().into(), "pointerleave", |engine, _| engine.on_pointer_leave())?;
        Ok(())
    }

    fn cancel_scheduled(&mut self) {
        if let Some(frame) = self.frame.take() {
            if let Err(err) = self.window.cancel_animation_frame(frame.request_id) {
                warn!("tilt: cancelAnimationFrame failed: {err:?}");
            }
        }
    }
}

impl Host for DomHost {
    fn subscribe(&mut self) -> Result<(), TiltError> {
        if let Err(err) = self.register_all() {
            self.unsubscribe();
            return Err(err);
        }
        debug!("tilt: {} listeners registered", self.listeners.len());
        Ok(())
    }

    fn unsubscribe(&mut self) {
        for listener in self.listeners.drain(..) {
            if let Err(err) = listener
                .target
                .remove_event_listener_with_callback(listener.event, listener.callback.as_ref().unchecked_ref())
            {
                warn!("tilt: failed to remove `{}` listener: {err:?}", listener.event);
            }
        }
    }

    fn viewport(&self) -> Viewport {
        match (self.window.inner_width(), self.window.inner_height()) {
            (Ok(w), Ok(h)) => Viewport::new(w.as_f64().unwrap_or(0.0), h.as_f64().unwrap_or(0.0)),
            _ => Viewport::default(),
        }
    }

    fn container_rect(&self) -> Rect {
        let r = self.container.get_bounding_client_rect();
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }

    fn request_frame(&mut self, token: FrameToken) -> Result<(), TiltError> {
        // The previous frame has already run or been cancelled by the engine.
        self.cancel_scheduled();
        let weak = self.engine.clone();
        let callback = Closure::wrap(Box::new(move |_ts: f64| {
            with_engine(&weak, |engine| engine.on_frame(token));
        }) as Box<dyn FnMut(f64)>);
        let request_id = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|err| TiltError::FrameScheduling(format!("{err:?}")))?;
        self.frame = Some(ScheduledFrame { token, request_id, _callback: callback });
        Ok(())
    }

    fn cancel_frame(&mut self, token: FrameToken) {
        if self.frame.as_ref().is_some_and(|f| f.token == token) {
            self.cancel_scheduled();
        }
    }

    fn apply(&mut self, appearance: &Appearance) {
        let style = self.target.style();
        set_style(&style, "transform", &appearance.transform);
        set_style(&style, "transition", &appearance.transition);
        set_style(&style, "filter", &appearance.filter);
        if let Some(backdrop) = &self.decorations.backdrop {
            set_style(&backdrop.style(), "opacity", if appearance.backdrop_visible { "1" } else { "0" });
        }
    }

    fn place_follower(&mut self, follower: Option<CursorFollower>) {
        let Some(el) = &self.decorations.follower else {
            return;
        };
        let style = el.style();
        match follower {
            Some(f) => {
                set_style(&style, "left", &format!("{}px", f.left));
                set_style(&style, "top", &format!("{}px", f.top));
                set_style(&style, "display", "block");
            }
            None => set_style(&style, "display", "none"),
        }
    }
}

impl Drop for DomHost {
    fn drop(&mut self) {
        self.unsubscribe();
        self.cancel_scheduled();
    }
}

fn set_style(style: &CssStyleDeclaration, name: &str, value: &str) {
    if let Err(err) = style.set_property(name, value) {
        warn!("tilt: failed to set `{name}`: {err:?}");
    }
}

/// Run `f` against the engine if it is still mounted and not already borrowed.
fn with_engine(weak: &WeakShared, f: impl FnOnce(&mut Engine<DomHost>)) {
    let Some(shared) = weak.upgrade() else {
        return;
    };
    let Ok(mut slot) = shared.try_borrow_mut() else {
        debug!("tilt: re-entrant event dropped");
        return;
    };
    if let Some(engine) = slot.as_mut() {
        f(engine);
    }
}

/// Mount a tilt engine on `container`, transforming `target`.
///
/// # Errors
///
/// Fails if the config is invalid, the page has no window/document, or the
/// pointer listeners cannot be registered.
pub fn mount(
    container: Element,
    target: HtmlElement,
    decorations: Decorations,
    config: TiltConfig,
) -> Result<TiltHandle, TiltError> {
    let shared: Shared = Rc::new(RefCell::new(None));
    let host = DomHost::new(container, target, decorations, Rc::downgrade(&shared))?;
    let engine = Engine::new(host, config)?;
    *shared.borrow_mut() = Some(engine);
    Ok(TiltHandle { shared })
}

/// Owns a mounted engine. Dropping it (or calling `teardown`) unmounts.
#[wasm_bindgen]
pub struct TiltHandle {
    shared: Shared,
}

#[wasm_bindgen]
impl TiltHandle {
    /// Remove listeners and cancel pending work. Safe to call twice.
    pub fn teardown(&mut self) {
        let engine = match self.shared.try_borrow_mut() {
            Ok(mut slot) => slot.take(),
            Err(_) => {
                warn!("tilt: teardown requested while the engine is busy");
                None
            }
        };
        if let Some(mut engine) = engine {
            engine.teardown();
        }
    }

    /// Whether the pointer is currently over the container.
    #[wasm_bindgen(getter)]
    #[must_use]
    pub fn hovered(&self) -> bool {
        self.state().is_some_and(|s| s.is_hovered)
    }

    /// Current rotation about the X axis, in degrees.
    #[wasm_bindgen(getter, js_name = rotateX)]
    #[must_use]
    pub fn rotate_x(&self) -> f64 {
        self.state().map_or(0.0, |s| s.rotate_x)
    }

    /// Current rotation about the Y axis, in degrees.
    #[wasm_bindgen(getter, js_name = rotateY)]
    #[must_use]
    pub fn rotate_y(&self) -> f64 {
        self.state().map_or(0.0, |s| s.rotate_y)
    }

    /// Pointer position inside the container; only set while focused.
    #[wasm_bindgen(getter, js_name = cursorOffset)]
    #[must_use]
    pub fn cursor_position(&self) -> Option<CursorPosition> {
        self.cursor_offset().map(|c| CursorPosition { x: c.x, y: c.y })
    }
}

impl TiltHandle {
    /// Snapshot of the engine state. `None` once torn down, or while an
    /// event is being handled.
    #[must_use]
    pub fn state(&self) -> Option<TiltState> {
        self.query(Engine::state)
    }

    #[must_use]
    pub fn cursor_offset(&self) -> Option<CursorOffset> {
        self.query(Engine::cursor_offset).flatten()
    }

    fn query<T>(&self, f: impl FnOnce(&Engine<DomHost>) -> T) -> Option<T> {
        let Ok(slot) = self.shared.try_borrow() else {
            return None;
        };
        slot.as_ref().map(f)
    }
}

/// Cursor offset as handed to JS.
#[wasm_bindgen]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl Drop for TiltHandle {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// JS entry point: mount with an optional JSON config.
///
/// # Errors
///
/// Returns the [`TiltError`] message as a JS error.
#[wasm_bindgen(js_name = mountTilt)]
pub fn mount_tilt(
    container: Element,
    target: HtmlElement,
    backdrop: Option<HtmlElement>,
    follower: Option<HtmlElement>,
    config_json: Option<String>,
) -> Result<TiltHandle, JsValue> {
    let config = match config_json {
        Some(raw) => TiltConfig::from_json(&raw),
        None => Ok(TiltConfig::default()),
    }
    .map_err(|err| JsValue::from_str(&err.to_string()))?;
    mount(container, target, Decorations { backdrop, follower }, config)
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Route `log` output to the browser console and install the panic hook.
#[wasm_bindgen(js_name = initTiltLogging)]
pub fn init_logging(verbose: bool) {
    console_error_panic_hook::set_once();
    let level = if verbose { log::Level::Debug } else { log::Level::Info };
    if console_log::init_with_level(level).is_err() {
        debug!("tilt: logger already installed");
    }
    info!("tilt: logging at {level}");
}
