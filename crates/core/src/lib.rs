//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI or terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Spawns can be scripted through [`rng::ScriptedRng`]
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: N x N grid with transpose/mirror transforms and move-availability queries
//! - [`slide`]: The left-slide row primitive and the composition for the other directions
//! - [`game_state`]: Score, spawning, win/over flags and the move lifecycle
//! - [`rng`]: Injectable randomness for tile spawns
//! - [`snapshot`]: Read-only view handed to presentation layers
//! - [`error`]: Error taxonomy shared by the engine and its adapters
//!
//! # Game Rules
//!
//! - **Slide**: every tile moves as far as it can in the chosen direction
//! - **Merge**: two equal tiles meeting become their sum, at most once per tile per move
//! - **Score**: each merge adds the merged tile's value
//! - **Spawn**: after every move that changes the board, one `2` (90%) or `4` (10%)
//!   appears in a random empty cell
//! - **Win**: a tile reaches the target (2048 by default); play continues
//! - **Over**: no empty cell and no equal neighbours; further moves are rejected
//!
//! # Example
//!
//! ```
//! use tui_2048_core::{GameConfig, GameState};
//! use tui_2048_types::Direction;
//!
//! let mut game = GameState::new(GameConfig::default(), 12345).unwrap();
//!
//! let result = game.apply_move(Direction::Left).unwrap();
//! if result.effective {
//!     assert!(game.board().tile_count() >= 2);
//! }
//! assert!(!game.over());
//! ```

pub mod board;
pub mod error;
pub mod game_state;
pub mod rng;
pub mod slide;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::{EngineError, Result};
pub use game_state::{GameConfig, GameState, MoveResult};
pub use rng::{ScriptedRng, SimpleRng, TileRng};
pub use slide::{legal_directions, merge_row_left, slide, Slide};
pub use snapshot::{GameSnapshot, Phase};
