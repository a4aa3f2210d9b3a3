//! Terminal input module (engine-facing).
//!
//! This module is independent of any UI framework. It maps `crossterm` key
//! events into [`crate::types::GameAction`] and turns textual direction names
//! into [`crate::types::Direction`], rejecting anything else before it can
//! reach the engine.

pub mod map;
pub mod parse;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use map::{handle_key_event, should_quit};
pub use parse::{parse_action, parse_direction};
