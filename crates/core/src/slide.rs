//! Slide module - row compaction, merging and direction composition
//!
//! Only one move is implemented from scratch: sliding every row to the left.
//! The other three are the same primitive seen through a board transform:
//!
//! | Direction | Before | Primitive | After |
//! |-----------|--------|-----------|-------|
//! | Left  | -         | left  | -         |
//! | Right | mirror    | left  | mirror    |
//! | Up    | transpose | left  | transpose |
//! | Down  | transpose | right | transpose |
//!
//! Both transforms are involutions, so each one is its own inverse.

use crate::board::Board;
use crate::types::{Cell, Direction, EMPTY, MAX_TILE};

/// Result of sliding a board in one direction (before any tile spawns)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    /// Board after compaction and merging
    pub board: Board,
    /// Sum of every tile produced by a merge
    pub score_gain: u64,
    /// Whether any cell differs from the input board
    pub changed: bool,
}

/// Slide one row towards index 0, merging equal neighbours.
///
/// Zeros are dropped, then the compacted tiles are scanned left to right and a
/// tile merges with the next one only if they are equal. A tile produced by a
/// merge never merges again in the same pass, so `[2, 2, 2, 2]` becomes
/// `[4, 4, 0, 0]`. Tiles above `MAX_TILE / 2` never merge, so a merge cannot
/// overflow a `Cell`. The row keeps its length; the tail is zero-filled.
///
/// Returns the score gained (sum of merged tiles).
pub fn merge_row_left(row: &mut [Cell]) -> u64 {
    let mut gain = 0u64;
    let mut write = 0usize;
    // Last tile written that can still absorb an equal neighbour.
    let mut open: Option<Cell> = None;

    // write <= read at every step, so writes never clobber unread tiles.
    for read in 0..row.len() {
        let v = row[read];
        if v == EMPTY {
            continue;
        }
        match open {
            Some(prev) if prev == v && prev <= MAX_TILE / 2 => {
                let merged = prev * 2;
                row[write - 1] = merged;
                gain += u64::from(merged);
                open = None;
            }
            _ => {
                row[write] = v;
                write += 1;
                open = Some(v);
            }
        }
    }

    row[write..].fill(EMPTY);
    gain
}

/// Slide every row of `board` to the left
pub fn move_left(board: &Board) -> (Board, u64) {
    let mut next = board.clone();
    let gain = next.rows_mut().map(merge_row_left).sum();
    (next, gain)
}

/// Mirror, slide left, mirror back
pub fn move_right(board: &Board) -> (Board, u64) {
    let (moved, gain) = move_left(&board.mirror());
    (moved.mirror(), gain)
}

/// Transpose, slide left, transpose back
pub fn move_up(board: &Board) -> (Board, u64) {
    let (moved, gain) = move_left(&board.transpose());
    (moved.transpose(), gain)
}

/// Transpose, slide right, transpose back
pub fn move_down(board: &Board) -> (Board, u64) {
    let (moved, gain) = move_right(&board.transpose());
    (moved.transpose(), gain)
}

/// Slide `board` in `direction` without touching the input.
pub fn slide(board: &Board, direction: Direction) -> Slide {
    let (next, score_gain) = match direction {
        Direction::Left => move_left(board),
        Direction::Right => move_right(board),
        Direction::Up => move_up(board),
        Direction::Down => move_down(board),
    };
    let changed = next != *board;
    Slide {
        board: next,
        score_gain,
        changed,
    }
}

/// Which directions would change the board, indexed like `Direction::ALL`
pub fn legal_directions(board: &Board) -> [bool; 4] {
    Direction::ALL.map(|dir| slide(board, dir).changed)
}

impl Board {
    /// Whether sliding in `direction` would change this board.
    pub fn can_move_in(&self, direction: Direction) -> bool {
        slide(self, direction).changed
    }
}
