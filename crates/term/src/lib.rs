//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout frameworks and instead renders into a simple
//! framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from a [`core::GameSnapshot`], never from live engine state
//! - Allow precise control over tile proportions (default 7x3 characters per tile)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_2048_core as core;
pub use tui_2048_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{tile_color, AnchorY, GameView, Viewport};
pub use renderer::{changed_spans, encode_diff_into, encode_full_into, TerminalRenderer};
