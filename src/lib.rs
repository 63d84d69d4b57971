//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so hosts and the integration tests can
//! write `blockfall::{core,input,sim,types}`.

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_sim as sim;
pub use blockfall_types as types;
