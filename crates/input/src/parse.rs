//! Textual commands (scripts, headless drivers) to engine inputs.

use crate::core::{EngineError, Result};
use crate::types::{Direction, GameAction};

/// Parse a direction name, rejecting anything outside the four directions.
///
/// ```
/// use tui_2048_input::parse_direction;
/// use tui_2048_input::types::Direction;
///
/// assert_eq!(parse_direction(" Up ").unwrap(), Direction::Up);
/// assert!(parse_direction("sideways").is_err());
/// ```
pub fn parse_direction(s: &str) -> Result<Direction> {
    Direction::from_str(s.trim())
        .ok_or_else(|| EngineError::UnsupportedDirection(s.trim().to_string()))
}

/// Parse a direction name or an action name (`moveLeft`, `restart`).
pub fn parse_action(s: &str) -> Result<GameAction> {
    let s = s.trim();
    if let Some(action) = GameAction::from_str(s) {
        return Ok(action);
    }
    parse_direction(s).map(GameAction::Move)
}
