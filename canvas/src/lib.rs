//! Interaction engine for the mechanical linkage editor.
//!
//! This crate is compiled to WebAssembly and runs in the browser, and builds
//! natively for tests and the replay CLI. It owns the editing lifecycle of the
//! drawing surface: translating pointer events under the active tool into
//! wheel, rod, and pivot mutations, hit-testing overlapping shapes, managing
//! the selection, and computing drag transforms. The host layer is responsible
//! only for wiring DOM events to the engine and forwarding the resulting
//! [`engine::Action`]s to its history log and repaint loop.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Entity types and the in-memory store |
//! | [`geom`] | Points and proximity math |
//! | [`hit`] | Hit-testing against wheels, rods, and pivots |
//! | [`input`] | Tools, modifiers, and the gesture state machine |
//! | [`history`] | Human-readable log of discrete user actions |
//! | [`render`] | Scene rendering to a 2D canvas context |
//! | [`config`] | Editor tunables |
//! | [`consts`] | Shared numeric constants (default radius, hit slop, etc.) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod geom;
pub mod history;
pub mod hit;
pub mod input;
pub mod render;
