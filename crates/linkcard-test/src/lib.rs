//! HTTP-level integration tests for the linkcard server.
//!
//! The tests live under `tests/`; this crate re-exports the application so
//! they can build the same router `main` serves.

pub use linkcard_app as app;
