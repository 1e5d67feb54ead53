//! Pointer-driven tilt engine for interactive page elements.
//!
//! The engine follows the pointer across the whole viewport and turns its
//! position into a bounded 3D rotation for one container. While the pointer is
//! over the container itself the ambient tilt is suspended and a local hover
//! highlight with a cursor follower takes over.
//!
//! All state-machine logic lives in [`engine::EngineCore`], which has no
//! browser dependency and is tested natively. [`engine::Engine`] drives a core
//! against any [`host::Host`]; the `web` feature provides the DOM host.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`host`] | The [`host::Host`] boundary the engine runs against |
//! | [`input`] | Input events, modes, and the committed tilt state |
//! | [`tilt`] | Ambient rotation math |
//! | [`frame`] | Single-slot per-frame throttle |
//! | [`render`] | Transform / filter / follower descriptors |
//! | [`geometry`] | Points, viewport and container rectangles |
//! | [`config`] | Tunable parameters, loadable from JSON |
//! | [`error`] | Error type shared by the crate |
//! | [`consts`] | Default numeric constants |
//! | `web` | Browser host over `web-sys` (feature `web`) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod host;
pub mod input;
pub mod render;
pub mod tilt;
#[cfg(feature = "web")]
pub mod web;
