//! Triple tiles (workspace facade crate).
//!
//! Re-exports the engine crates under one path, `triple_tiles::{core, session, types}`,
//! and hosts the headless autoplay used by the `triple-sim` binary and the benches.

pub mod sim;

pub use triple_core as core;
pub use triple_session as session;
pub use triple_types as types;
