//! Rounded-rectangle editor: interaction model and canvas renderer.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and it is
//! also used natively by the `roundrect` CLI. It owns the interaction model:
//! translating normalized pointer gestures into shape moves and corner-radius
//! changes, hit-testing shapes and their action pointers, and drawing the
//! scene. The host JavaScript layer only wires DOM events to
//! [`engine::Engine`], which is exported through `wasm-bindgen`.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Browser engine owning the canvas element |
//! | [`scene`] | Testable [`scene::SceneController`]: gesture routing and draw order |
//! | [`shape`] | Rounded rectangles, hit-testing, and drag effects |
//! | [`pointer`] | Action pointers and their center/corner roles |
//! | [`input`] | Normalized gesture events and the drag state |
//! | [`render`] | [`render::Surface`] trait, drawing, and the recording surface |
//! | [`config`] | Scene configuration and the demo scene |
//! | [`snapshot`] | Plain-data shape export |
//! | [`geom`] | Points, deltas, and rectangles |
//! | [`error`] | Configuration errors |
//! | [`consts`] | Shared constants (trigger radius, default style) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod error;
pub mod geom;
pub mod input;
pub mod pointer;
pub mod render;
pub mod scene;
pub mod shape;
pub mod snapshot;
