//! Hanami (workspace facade crate).
//!
//! Re-exports the workspace crates as `hanami::{core,input,term,types}` and
//! holds the binary's startup configuration.

pub mod config;

pub use hanami_core as core;
pub use hanami_input as input;
pub use hanami_term as term;
pub use hanami_types as types;
