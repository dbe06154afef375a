//! cityloc-cli
//! ===========
//!
//! Command-line interface for the `cityloc-core` location-resolution
//! library.
//!
//! This crate primarily provides a binary (`cityloc-cli`). We include a
//! small library target so that docs.rs renders a documentation page and
//! shows this overview. See the README for full usage examples.
//!
//! Quick start
//! -----------
//!
//! ```text
//! cityloc-cli --help
//! cityloc-cli --input cities.json stats
//! cityloc-cli --input cities.json nearest 19.0 72.9
//! cityloc-cli --input cities.json suggest mum
//! ```
//!
//! For programmatic access to the resolution service, use the
//! [`cityloc-core`] crate directly.

// This library target intentionally exposes no API; the binary is the
// primary deliverable.
