use serde::Serialize;

use crate::types::Cell;

/// Coarse lifecycle of a game.
///
/// `Won` does not stop play; only `Over` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Active,
    Won,
    Over,
}

impl Phase {
    pub fn from_flags(won: bool, over: bool) -> Self {
        match (won, over) {
            (_, true) => Phase::Over,
            (true, false) => Phase::Won,
            (false, false) => Phase::Active,
        }
    }
}

/// Read-only copy of everything a presentation layer needs to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
pub struct GameSnapshot {
    pub size: usize,
    pub board: Vec<Vec<Cell>>,
    pub score: u64,
    pub moves: u32,
    pub max_tile: Cell,
    pub target: Cell,
    pub won: bool,
    pub over: bool,
    pub phase: Phase,
}

impl GameSnapshot {
    /// Whether the engine will still accept moves
    pub fn playable(&self) -> bool {
        !self.over
    }
}
