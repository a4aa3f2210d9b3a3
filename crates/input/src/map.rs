//! Key mapping from terminal events to game actions.

use crate::types::{Direction, GameAction};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::Move(Direction::Left)),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::Move(Direction::Right)),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Move(Direction::Up)),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::Move(Direction::Down)),

        KeyCode::Char('r') | KeyCode::Char('R') => Some(GameAction::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn mv(dir: Direction) -> Option<GameAction> {
        Some(GameAction::Move(dir))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Left)), mv(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Right)), mv(Direction::Right));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Up)), mv(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Down)), mv(Direction::Down));
    }

    #[test]
    fn test_wasd_and_vi_keys() {
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('a'))), mv(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('D'))), mv(Direction::Right));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('w'))), mv(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('S'))), mv(Direction::Down));

        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('h'))), mv(Direction::Left));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('L'))), mv(Direction::Right));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('k'))), mv(Direction::Up));
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char('J'))), mv(Direction::Down));
    }

    #[test]
    fn test_restart_and_unmapped_keys() {
        assert_eq!(
            handle_key_event(KeyEvent::from(KeyCode::Char('r'))),
            Some(GameAction::Restart)
        );
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Char(' '))), None);
        assert_eq!(handle_key_event(KeyEvent::from(KeyCode::Enter)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
    }
}
