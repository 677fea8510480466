//! Key mapping from terminal events to player intent.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One recognised key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyIntent {
    Up,
    Down,
    Left,
    Right,
    Fire,
}

/// Map a key event to an intent. Unrecognised keys map to `None`.
pub fn map_key_event(key: KeyEvent) -> Option<KeyIntent> {
    match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') | KeyCode::Char('k') | KeyCode::Char('K') => {
            Some(KeyIntent::Up)
        }
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J') => {
            Some(KeyIntent::Down)
        }
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Some(KeyIntent::Left)
        }
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L') => {
            Some(KeyIntent::Right)
        }
        KeyCode::Char(' ') => Some(KeyIntent::Fire),
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

    #[test]
    fn test_arrow_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Up)), Some(KeyIntent::Up));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Down)), Some(KeyIntent::Down));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Left)), Some(KeyIntent::Left));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Right)), Some(KeyIntent::Right));
    }

    #[test]
    fn test_letter_aliases() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('W'))), Some(KeyIntent::Up));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('j'))), Some(KeyIntent::Down));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('a'))), Some(KeyIntent::Left));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('L'))), Some(KeyIntent::Right));
    }

    #[test]
    fn test_fire_and_unknown_keys() {
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char(' '))), Some(KeyIntent::Fire));
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Char('x'))), None);
        assert_eq!(map_key_event(KeyEvent::from(KeyCode::Tab)), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
    }
}
