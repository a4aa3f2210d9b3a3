//! Game state module - manages the complete game state
//!
//! This module ties together the board, the slide rules, the spawn RNG and scoring.
//! It handles the move lifecycle (slide, score, spawn, win/over detection) and restarts.

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::board::Board;
use crate::error::{EngineError, Result};
use crate::rng::{SimpleRng, TileRng};
use crate::slide::{self, Slide};
use crate::snapshot::{GameSnapshot, Phase};
use crate::types::{
    Cell, Direction, DEFAULT_SIZE, DEFAULT_TARGET, INITIAL_TILES, MIN_SIZE, SPAWN_FOUR_WEIGHT,
    SPAWN_TWO_WEIGHT,
};

/// Board size and win threshold, fixed for the lifetime of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GameConfig {
    pub size: usize,
    pub target: Cell,
}

impl GameConfig {
    pub fn new(size: usize, target: Cell) -> Self {
        Self { size, target }
    }

    /// Reject boards too small to ever merge
    pub fn validate(&self) -> Result<()> {
        if self.size < MIN_SIZE {
            return Err(EngineError::InvalidConfig(format!(
                "board size {} is below the minimum of {}",
                self.size, MIN_SIZE
            )));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE, DEFAULT_TARGET)
    }
}

/// Outcome of one `apply_move` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoveResult {
    /// The board changed (and a tile was spawned)
    pub effective: bool,
    /// Points earned from merges in this move
    pub score_gain: u64,
    pub won: bool,
    pub over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R = SimpleRng> {
    config: GameConfig,
    board: Board,
    score: u64,
    /// Effective moves since the game started
    moves: u32,
    won: bool,
    over: bool,
    rng: R,
}

impl GameState<SimpleRng> {
    /// Create a new game driven by the built-in seeded RNG
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_rng(config, SimpleRng::new(seed))
    }
}

impl<R: TileRng> GameState<R> {
    /// Create a new game: empty board plus two spawned tiles
    pub fn with_rng(config: GameConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let mut state = Self {
            config,
            board: Board::new(config.size),
            score: 0,
            moves: 0,
            won: false,
            over: false,
            rng,
        };
        state.spawn_initial();
        info!(
            size = config.size,
            target = config.target,
            "new game"
        );
        Ok(state)
    }

    /// Resume from an explicit position (score and move count start at zero).
    ///
    /// Flags are derived from the board, so a finished position loads as `over`.
    pub fn from_board(config: GameConfig, board: Board, rng: R) -> Result<Self> {
        config.validate()?;
        if board.size() != config.size {
            return Err(EngineError::InvalidConfig(format!(
                "board is {}x{}, config expects {}x{}",
                board.size(),
                board.size(),
                config.size,
                config.size
            )));
        }
        let mut state = Self {
            config,
            board,
            score: 0,
            moves: 0,
            won: false,
            over: false,
            rng,
        };
        state.refresh_flags();
        Ok(state)
    }

    /// Start over with the same config, keeping the RNG stream going
    pub fn restart(&mut self) {
        self.board = Board::new(self.config.size);
        self.score = 0;
        self.moves = 0;
        self.won = false;
        self.over = false;
        self.spawn_initial();
        info!(size = self.config.size, "game restarted");
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> usize {
        self.config.size
    }

    pub fn target(&self) -> Cell {
        self.config.target
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn won(&self) -> bool {
        self.won
    }

    pub fn over(&self) -> bool {
        self.over
    }

    pub fn phase(&self) -> Phase {
        Phase::from_flags(self.won, self.over)
    }

    pub fn max_tile(&self) -> Cell {
        self.board.max_tile()
    }

    /// Which directions would be effective right now, indexed like `Direction::ALL`
    pub fn legal_directions(&self) -> [bool; 4] {
        if self.over {
            return [false; 4];
        }
        slide::legal_directions(&self.board)
    }

    /// Slide the board, score merges, spawn a tile and refresh the flags.
    ///
    /// The call either commits all of that or leaves the state untouched:
    /// an ineffective move returns `effective: false` with no spawn, and a
    /// move on a finished game is rejected with `GameAlreadyOver`.
    pub fn apply_move(&mut self, direction: Direction) -> Result<MoveResult> {
        if self.over {
            return Err(EngineError::GameAlreadyOver);
        }

        let Slide {
            board,
            score_gain,
            changed,
        } = slide::slide(&self.board, direction);

        if !changed {
            trace!(direction = direction.as_str(), "move had no effect");
            return Ok(MoveResult {
                effective: false,
                score_gain: 0,
                won: self.won,
                over: self.over,
            });
        }

        self.board = board;
        self.score += score_gain;
        self.moves += 1;
        self.spawn_tile();
        self.refresh_flags();

        debug!(
            direction = direction.as_str(),
            score_gain,
            score = self.score,
            won = self.won,
            over = self.over,
            "move applied"
        );
        if self.over {
            info!(
                score = self.score,
                max_tile = self.max_tile(),
                moves = self.moves,
                "game over"
            );
        }

        Ok(MoveResult {
            effective: true,
            score_gain,
            won: self.won,
            over: self.over,
        })
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        let n = self.config.size;
        out.board.resize_with(n, Vec::new);
        for (dst, src) in out.board.iter_mut().zip(self.board.rows()) {
            dst.clear();
            dst.extend_from_slice(src);
        }
        out.size = n;
        out.score = self.score;
        out.moves = self.moves;
        out.max_tile = self.board.max_tile();
        out.target = self.config.target;
        out.won = self.won;
        out.over = self.over;
        out.phase = self.phase();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    fn spawn_initial(&mut self) {
        for _ in 0..INITIAL_TILES {
            self.spawn_tile();
        }
        self.refresh_flags();
    }

    /// Drop a `2` (90%) or `4` (10%) into a uniformly chosen empty cell.
    ///
    /// Returns the spawned tile, or `None` when the board is full.
    fn spawn_tile(&mut self) -> Option<(usize, usize, Cell)> {
        let empties = self.board.empty_cells();
        if empties.is_empty() {
            return None;
        }
        let (row, col) = empties[self.rng.pick_uniform(empties.len())];
        let value = if self.rng.pick_weighted(SPAWN_TWO_WEIGHT, SPAWN_FOUR_WEIGHT) {
            2
        } else {
            4
        };
        self.board.set(row, col, value);
        trace!(row, col, value, "tile spawned");
        Some((row, col, value))
    }

    fn refresh_flags(&mut self) {
        self.won = self.board.max_tile() >= self.config.target;
        self.over = !self.board.can_move();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedRng;

    fn scripted(rows: &[[Cell; 4]]) -> GameState<ScriptedRng> {
        let board = Board::from_rows(rows).unwrap();
        GameState::from_board(GameConfig::default(), board, ScriptedRng::first_cell_twos())
            .unwrap()
    }

    #[test]
    fn test_new_game_has_two_tiles() {
        let game = GameState::new(GameConfig::default(), 42).unwrap();
        assert_eq!(game.board().tile_count(), 2);
        assert!(game
            .board()
            .cells()
            .iter()
            .all(|&v| v == 0 || v == 2 || v == 4));
        assert_eq!(game.score(), 0);
        assert!(!game.won());
        assert!(!game.over());
        assert_eq!(game.phase(), Phase::Active);
    }

    #[test]
    fn test_spawn_determinism() {
        let a = GameState::new(GameConfig::default(), 12345).unwrap();
        let b = GameState::new(GameConfig::default(), 12345).unwrap();
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_rejects_tiny_boards() {
        for size in [0, 1] {
            let err = GameState::new(GameConfig::new(size, 2048), 1).unwrap_err();
            assert!(matches!(err, EngineError::InvalidConfig(_)));
        }
        assert!(GameState::new(GameConfig::new(2, 2048), 1).is_ok());
    }

    #[test]
    fn test_from_board_rejects_mismatched_size() {
        let board = Board::new(3);
        let err = GameState::from_board(GameConfig::default(), board, SimpleRng::default())
            .unwrap_err();
        assert!(matches!(err, EngineError::InvalidConfig(_)));
    }

    #[test]
    fn test_scripted_spawn_positions() {
        // Pick the 4th empty cell as a 4, then the 1st as a 2.
        let rng = ScriptedRng::new([3, 0], [false, true]);
        let game = GameState::with_rng(GameConfig::default(), rng).unwrap();
        assert_eq!(game.board().get(0, 3), Some(4));
        assert_eq!(game.board().get(0, 0), Some(2));
    }

    #[test]
    fn test_effective_move_scores_and_spawns() {
        let mut game = scripted(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let result = game.apply_move(Direction::Left).unwrap();

        assert!(result.effective);
        assert_eq!(result.score_gain, 4);
        assert_eq!(game.score(), 4);
        assert_eq!(game.moves(), 1);
        // Merged tile at (0,0), spawn lands in the first empty cell (0,1).
        assert_eq!(game.board().row(0), Some(&[4, 2, 0, 0][..]));
    }

    #[test]
    fn test_step_no_change_no_spawn() {
        let mut game = scripted(&[[2, 0, 0, 0], [4, 0, 0, 0], [8, 0, 0, 0], [16, 0, 0, 0]]);
        let before = game.board().clone();
        let result = game.apply_move(Direction::Left).unwrap();

        assert!(!result.effective);
        assert_eq!(result.score_gain, 0);
        assert_eq!(game.board(), &before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn test_win_detection() {
        let mut game = scripted(&[[1024, 1024, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        let result = game.apply_move(Direction::Left).unwrap();
        assert!(result.won);
        assert!(!result.over);
        assert_eq!(game.board().get(0, 0), Some(2048));
        assert_eq!(game.phase(), Phase::Won);
    }

    #[test]
    fn test_win_above_target_counts() {
        let game = scripted(&[[4096, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        assert!(game.won());
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut game = scripted(&[[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert!(game.over());
        assert_eq!(game.legal_directions(), [false; 4]);

        let before = game.snapshot();
        for dir in Direction::ALL {
            assert_eq!(game.apply_move(dir), Err(EngineError::GameAlreadyOver));
        }
        assert_eq!(game.snapshot(), before);
    }

    #[test]
    fn test_over_flag_tracks_board_after_full_board_moves() {
        // Left merges the 2s; the scripted spawn drops a 2 into the freed corner.
        let mut game = scripted(&[[4, 2, 2, 8], [2, 4, 8, 16], [4, 8, 16, 32], [8, 16, 32, 64]]);
        let result = game.apply_move(Direction::Left).unwrap();
        assert!(result.effective);
        assert_eq!(game.board().row(0), Some(&[4, 4, 8, 2][..]));
        // 4,4 is still a pair, so the game goes on.
        assert!(!result.over);

        let result = game.apply_move(Direction::Right).unwrap();
        assert!(result.effective);
        assert_eq!(game.board().row(0), Some(&[2, 8, 8, 2][..]));
        assert_eq!(game.over(), !game.board().can_move());
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = scripted(&[[2, 2, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]);
        game.apply_move(Direction::Left).unwrap();
        game.restart();
        assert_eq!(game.score(), 0);
        assert_eq!(game.moves(), 0);
        assert_eq!(game.board().tile_count(), 2);
        assert_eq!(game.phase(), Phase::Active);
    }

    #[test]
    fn test_snapshot_copies_state() {
        let game = scripted(&[[2, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 8]]);
        let snap = game.snapshot();
        assert_eq!(snap.size, 4);
        assert_eq!(snap.board[3][3], 8);
        assert_eq!(snap.max_tile, 8);
        assert_eq!(snap.target, 2048);
        assert_eq!(snap.phase, Phase::Active);
    }

    #[test]
    fn test_snapshot_into_reshapes_buffer() {
        let game = GameState::new(GameConfig::new(3, 64), 9).unwrap();
        let mut snap = GameSnapshot {
            board: vec![vec![1; 5]; 5],
            ..GameSnapshot::default()
        };
        game.snapshot_into(&mut snap);
        assert_eq!(snap.board.len(), 3);
        assert!(snap.board.iter().all(|row| row.len() == 3));
        assert_eq!(snap.board, game.board().to_rows());
    }
}
