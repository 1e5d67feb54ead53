#![cfg(all(target_arch = "wasm32", feature = "web"))]
#![allow(clippy::float_cmp)]

use tilt::config::TiltConfig;
use tilt::web::{CursorPosition, Decorations, TiltHandle, mount};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Element, Event, HtmlElement, MouseEvent, MouseEventInit};

wasm_bindgen_test_configure!(run_in_browser);

// =============================================================
// Helpers
// =============================================================

fn element(tag: &str) -> HtmlElement {
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    let el: Element = document.create_element(tag).expect("create element");
    document.body().expect("body").append_child(&el).expect("append");
    el.dyn_into::<HtmlElement>().expect("html element")
}

/// A 200x100 container pinned at (100, 50) in client space.
fn container() -> HtmlElement {
    let el = element("div");
    let style = el.style();
    for (name, value) in [("position", "fixed"), ("left", "100px"), ("top", "50px"), ("width", "200px"), ("height", "100px")]
    {
        style.set_property(name, value).expect("style");
    }
    el
}

fn style(el: &HtmlElement, name: &str) -> String {
    el.style().get_property_value(name).expect(name)
}

fn fire(target: &HtmlElement, name: &str) {
    let ev = Event::new(name).expect("event");
    target.dispatch_event(&ev).expect("dispatch");
}

fn pointer_move(x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_client_x(x);
    init.set_client_y(y);
    init.set_bubbles(true);
    let ev = MouseEvent::new_with_mouse_event_init_dict("pointermove", &init).expect("pointermove");
    let document = web_sys::window().and_then(|w| w.document()).expect("document");
    document.dispatch_event(&ev).expect("dispatch");
}

#[allow(clippy::cast_possible_truncation)]
fn viewport() -> (i32, i32) {
    let window = web_sys::window().expect("window");
    let w = window.inner_width().expect("width").as_f64().expect("number");
    let h = window.inner_height().expect("height").as_f64().expect("number");
    (w as i32, h as i32)
}

/// Resolve after the next animation frame. Callbacks run in request order,
/// so any frame the engine asked for earlier has already run.
async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .expect("window")
            .request_animation_frame(&resolve)
            .expect("requestAnimationFrame");
    });
    JsFuture::from(promise).await.expect("frame");
}

fn mount_plain(container: &HtmlElement, target: &HtmlElement) -> TiltHandle {
    mount(container.clone().into(), target.clone(), Decorations::default(), TiltConfig::default()).expect("mount")
}

// =============================================================
// Mount / teardown
// =============================================================

#[wasm_bindgen_test]
fn mount_paints_flat_ambient_style() {
    let container = element("div");
    let target = element("div");
    let handle = mount_plain(&container, &target);
    let transform = style(&target, "transform");
    assert!(transform.contains("scale(1)"), "{transform}");
    assert!(!handle.hovered());
    assert_eq!(handle.rotate_x(), 0.0);
    assert_eq!(handle.rotate_y(), 0.0);
    assert_eq!(handle.cursor_position(), None);
}

#[wasm_bindgen_test]
fn mount_hides_follower_and_backdrop() {
    let container = container();
    let target = element("div");
    let backdrop = element("div");
    let follower = element("div");
    let _handle = mount(
        container.clone().into(),
        target,
        Decorations { backdrop: Some(backdrop.clone()), follower: Some(follower.clone()) },
        TiltConfig::default(),
    )
    .expect("mount");
    assert_eq!(style(&follower, "display"), "none");
    assert_eq!(style(&backdrop, "opacity"), "0");
}

#[wasm_bindgen_test]
fn events_after_teardown_are_ignored() {
    let container = element("div");
    let target = element("div");
    let mut handle = mount_plain(&container, &target);
    handle.teardown();

    let before = style(&target, "transform");
    fire(&container, "pointerenter");
    let after = style(&target, "transform");
    assert_eq!(before, after);
    assert!(!handle.hovered());
    assert!(handle.state().is_none());
}

// =============================================================
// Ambient tilt
// =============================================================

#[wasm_bindgen_test]
async fn pointer_move_tilts_on_next_frame() {
    let container = container();
    let target = element("div");
    let handle = mount_plain(&container, &target);

    pointer_move(0, 0);
    assert_eq!(handle.rotate_x(), 0.0, "tilt waits for the frame");
    next_frame().await;

    assert_eq!(handle.rotate_x(), 8.0);
    assert_eq!(handle.rotate_y(), -8.0);
    let transform = style(&target, "transform");
    assert!(transform.contains("rotateX(8deg)"), "{transform}");
    assert!(transform.contains("rotateY(-8deg)"), "{transform}");
}

#[wasm_bindgen_test]
async fn later_move_replaces_queued_frame() {
    let container = container();
    let target = element("div");
    let handle = mount_plain(&container, &target);
    let (w, h) = viewport();

    pointer_move(0, 0);
    pointer_move(w, h);
    next_frame().await;

    assert_eq!(handle.rotate_x(), -8.0);
    assert_eq!(handle.rotate_y(), 8.0);
    let transform = style(&target, "transform");
    assert!(transform.contains("rotateX(-8deg) rotateY(8deg)"), "{transform}");
}

// =============================================================
// Focused mode
// =============================================================

#[wasm_bindgen_test]
fn enter_and_leave_toggle_focus() {
    let container = container();
    let target = element("div");
    let handle = mount_plain(&container, &target);

    fire(&container, "pointerenter");
    assert!(handle.hovered());
    let transform = style(&target, "transform");
    assert!(transform.contains("scale(1.05)"), "{transform}");

    fire(&container, "pointerleave");
    assert!(!handle.hovered());
}

#[wasm_bindgen_test]
async fn focused_move_places_follower_and_leave_hides_it() {
    let container = container();
    let target = element("div");
    let backdrop = element("div");
    let follower = element("div");
    let handle = mount(
        container.clone().into(),
        target.clone(),
        Decorations { backdrop: Some(backdrop.clone()), follower: Some(follower.clone()) },
        TiltConfig::default(),
    )
    .expect("mount");

    fire(&container, "pointerenter");
    assert_eq!(style(&backdrop, "opacity"), "1");

    pointer_move(150, 80);
    next_frame().await;

    assert_eq!(handle.cursor_position(), Some(CursorPosition { x: 50.0, y: 30.0 }));
    assert_eq!(handle.rotate_x(), 0.0);
    assert_eq!(style(&follower, "display"), "block");
    assert_eq!(style(&follower, "left"), "42px");
    assert_eq!(style(&follower, "top"), "22px");

    fire(&container, "pointerleave");
    assert_eq!(handle.cursor_position(), None);
    assert_eq!(style(&follower, "display"), "none");
    assert_eq!(style(&backdrop, "opacity"), "0");
}
