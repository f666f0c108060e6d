//! Caller-facing operations for an HTTP handler or UI action.
//!
//! Each command takes the shared `AppState` and flattens errors to strings.

pub mod recovery;
