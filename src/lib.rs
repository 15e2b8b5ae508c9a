//! Tetrissy (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetrissy::{core,engine,types}` so callers need a
//! single dependency.

pub use tetrissy_core as core;
pub use tetrissy_engine as engine;
pub use tetrissy_types as types;
