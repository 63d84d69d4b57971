//! Input dispatch (host-facing).
//!
//! Maps `crossterm` key events to payload-free [`crate::types::Command`]s through an
//! explicit [`KeyBindings`] value. Persisting bindings is the host's business; the table
//! serializes with serde so any format will do.

pub mod map;

pub use blockfall_types as types;

pub use map::{parse_key_name, should_quit, KeyBinding, KeyBindings};
