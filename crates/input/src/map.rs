//! Key mapping from terminal events to session commands.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use grid_arcade_engine::Command;

use crate::types::{Direction, Intent};

/// Map a key event to a command. Only presses count; repeats and releases
/// are ignored so holding a key does not queue extra moves.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(Command::Quit);
    }

    let steer = |direction| Some(Command::Intent(Intent::Steer(direction)));
    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W' | 'k' | 'K') => steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S' | 'j' | 'J') => steer(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A' | 'h' | 'H') => steer(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D' | 'l' | 'L') => steer(Direction::Right),

        KeyCode::Char(' ') | KeyCode::Enter => Some(Command::Intent(Intent::Commit)),
        KeyCode::Char('p' | 'P') => Some(Command::Intent(Intent::TogglePause)),
        KeyCode::Char('r' | 'R') => Some(Command::Reset),

        _ => None,
    }
}

/// Check if key should end the session.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q' | 'Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode) -> Option<Command> {
        map_key(KeyEvent::from(code))
    }

    fn steer(direction: Direction) -> Option<Command> {
        Some(Command::Intent(Intent::Steer(direction)))
    }

    #[test]
    fn test_steering_keys() {
        assert_eq!(press(KeyCode::Up), steer(Direction::Up));
        assert_eq!(press(KeyCode::Down), steer(Direction::Down));
        assert_eq!(press(KeyCode::Left), steer(Direction::Left));
        assert_eq!(press(KeyCode::Right), steer(Direction::Right));

        assert_eq!(press(KeyCode::Char('w')), steer(Direction::Up));
        assert_eq!(press(KeyCode::Char('A')), steer(Direction::Left));
        assert_eq!(press(KeyCode::Char('j')), steer(Direction::Down));
        assert_eq!(press(KeyCode::Char('L')), steer(Direction::Right));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(press(KeyCode::Char(' ')), Some(Command::Intent(Intent::Commit)));
        assert_eq!(press(KeyCode::Enter), Some(Command::Intent(Intent::Commit)));
        assert_eq!(
            press(KeyCode::Char('p')),
            Some(Command::Intent(Intent::TogglePause))
        );
        assert_eq!(press(KeyCode::Char('R')), Some(Command::Reset));
        assert_eq!(press(KeyCode::Char('x')), None);
        assert_eq!(press(KeyCode::Tab), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q')), Some(Command::Quit));
        assert_eq!(press(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }

    #[test]
    fn test_release_and_repeat_ignored() {
        for kind in [KeyEventKind::Release, KeyEventKind::Repeat] {
            let key = KeyEvent::new_with_kind_and_state(
                KeyCode::Up,
                KeyModifiers::NONE,
                kind,
                KeyEventState::NONE,
            );
            assert_eq!(map_key(key), None);
        }
    }
}
