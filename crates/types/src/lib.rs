//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, key mapping, terminal rendering, headless runs).
//!
//! # Board
//!
//! The playfield is a square grid whose side length is fixed when a game is
//! created. Cells hold plain integers:
//!
//! - `0`: empty
//! - any other value: a tile, always a power of two (2, 4, 8, ...)
//!
//! # Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_SIZE` | 4 | Side length of the classic board |
//! | `MIN_SIZE` | 2 | Smallest board that can still merge |
//! | `DEFAULT_TARGET` | 2048 | Tile value that counts as a win |
//! | `INITIAL_TILES` | 2 | Tiles spawned into a fresh board |
//! | `SPAWN_TWO_WEIGHT` / `SPAWN_FOUR_WEIGHT` | 9 / 1 | Spawn odds (90% `2`, 10% `4`) |
//!
//! # Examples
//!
//! ```
//! use tui_2048_types::{Direction, GameAction, DEFAULT_SIZE, DEFAULT_TARGET};
//!
//! // Parse from string (case-insensitive)
//! assert_eq!(Direction::from_str("Left"), Some(Direction::Left));
//! assert_eq!(Direction::from_str("diagonal"), None);
//!
//! // Mirror a horizontal direction
//! assert_eq!(Direction::Left.opposite(), Direction::Right);
//!
//! // Parse game action
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(DEFAULT_SIZE, 4);
//! assert_eq!(DEFAULT_TARGET, 2048);
//! ```

/// Side length of the classic board (4x4)
pub const DEFAULT_SIZE: usize = 4;

/// Smallest side length that still allows a merge
pub const MIN_SIZE: usize = 2;

/// Tile value that counts as a win
pub const DEFAULT_TARGET: Cell = 2048;

/// Number of tiles spawned into a fresh board
pub const INITIAL_TILES: usize = 2;

/// Relative weight of spawning a `2`
pub const SPAWN_TWO_WEIGHT: u32 = 9;

/// Relative weight of spawning a `4`
pub const SPAWN_FOUR_WEIGHT: u32 = 1;

/// A cell on the game board
///
/// `0` is an empty cell, any other value is a tile.
pub type Cell = u32;

/// The value stored in an empty cell
pub const EMPTY: Cell = 0;

/// Largest tile a `Cell` can hold. Two of these never merge.
pub const MAX_TILE: Cell = 1 << 31;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_defaults() {
        assert_eq!(DEFAULT_SIZE, 4);
        assert_eq!(DEFAULT_TARGET, 2048);
        assert_eq!(INITIAL_TILES, 2);
        // 90% twos, 10% fours.
        assert_eq!(SPAWN_TWO_WEIGHT * 10 / (SPAWN_TWO_WEIGHT + SPAWN_FOUR_WEIGHT), 9);
        assert!(MIN_SIZE <= DEFAULT_SIZE);
    }

    #[test]
    fn direction_round_trips_through_name() {
        for dir in Direction::ALL {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn direction_short_names() {
        assert_eq!(Direction::from_str("l"), Some(Direction::Left));
        assert_eq!(Direction::from_str("R"), Some(Direction::Right));
        assert_eq!(Direction::from_str("u"), Some(Direction::Up));
        assert_eq!(Direction::from_str("d"), Some(Direction::Down));
        assert_eq!(Direction::from_str(""), None);
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in Direction::ALL {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }

    #[test]
    fn action_names() {
        assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
        assert_eq!(
            GameAction::from_str("MOVELEFT"),
            Some(GameAction::Move(Direction::Left))
        );
        assert_eq!(GameAction::Move(Direction::Down).as_str(), "moveDown");
        assert_eq!(GameAction::from_str("hardDrop"), None);
    }
}

/// The four slide directions
///
/// `Left` is the primitive move; the other three are derived from it by
/// mirroring and/or transposing the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// All directions, in the order used by `legal_directions`
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Parse direction from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "left" | "l", "right" | "r", "up" | "u", "down" | "d"
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::Direction;
    ///
    /// assert_eq!(Direction::from_str("UP"), Some(Direction::Up));
    /// assert_eq!(Direction::from_str("d"), Some(Direction::Down));
    /// assert_eq!(Direction::from_str("north"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// The direction pointing the other way along the same axis
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Index into `ALL` (and into `legal_directions` results)
    pub fn index(&self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Right => 1,
            Direction::Up => 2,
            Direction::Down => 3,
        }
    }
}

/// Actions a front end can request
///
/// Moves go to the engine; `Restart` replaces the game wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Slide every tile in the given direction
    Move(Direction),
    /// Throw the current game away and start a fresh one
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_2048_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveRight"), Some(GameAction::Move(Direction::Right)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Restart => "restart",
        }
    }
}
