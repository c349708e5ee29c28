//! tally core: color validation, digit-strip rendering, and the shared error
//! surface.
//!
//! This crate defines the pure rendering pipeline and error types shared by
//! the server and tooling. It intentionally carries no transport or runtime
//! dependencies so it can be tested and reused without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `TallyError`/`Result` so the serving
//! process does not crash on malformed input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod color;
pub mod error;
pub mod render;

/// Shared result type.
pub use error::{Result, TallyError};
