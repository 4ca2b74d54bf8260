//! Line sketching surface with live intersection markers.
//!
//! This crate is compiled to WebAssembly and runs in the browser. The user
//! plots straight segments by clicking two endpoints; every pairwise
//! intersection is marked on each redraw, and a collapse command animates all
//! segments shrinking into their midpoints before the board is cleared. The
//! host JavaScript layer only forwards pointer events and the collapse
//! command to [`web::SketchHandle`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::SketchCore`] controller and its [`engine::Action`]s |
//! | [`geom`] | Points, segments, intersection and shrink math |
//! | [`collapse`] | Collapse animation state and per-frame tick |
//! | [`throttle`] | Trailing-edge rate limiter for pointer moves |
//! | [`input`] | Mouse buttons and the drawing state machine |
//! | [`render`] | [`render::Surface`] trait, scene layering, `Canvas2D` backend |
//! | [`config`] | Host-supplied configuration |
//! | [`web`] | `wasm-bindgen` handle wiring the controller to the browser |
//! | [`consts`] | Shared numeric constants |

pub mod collapse;
pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod input;
pub mod render;
pub mod throttle;
pub mod web;
