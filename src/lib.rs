//! cityloc-rs
//! ==========
//!
//! Workspace hub for the `cityloc` location-resolution crates.
//!
//! The actual library lives in [`cityloc_core`]; this crate re-exports it so
//! the demos under `demos/` have a single import path. For programmatic use,
//! depend on `cityloc-core` directly.

pub use cityloc_core::*;
