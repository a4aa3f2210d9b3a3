//! TUI 2048 (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_2048::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path. The
//! `headless` module drives whole games without a terminal.

pub mod headless;

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
