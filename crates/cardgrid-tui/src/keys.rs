use cardgrid_core::{GridError, GridResult, NavKey};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a terminal key to the navigation vocabulary.
pub fn nav_key(key: &KeyEvent) -> Option<NavKey> {
    match key.code {
        KeyCode::Esc => Some(NavKey::Cancel),
        KeyCode::Up => Some(NavKey::Up),
        KeyCode::Down => Some(NavKey::Down),
        KeyCode::Left => Some(NavKey::Left),
        KeyCode::Right => Some(NavKey::Right),
        KeyCode::Enter => Some(NavKey::Activate),
        _ => None,
    }
}

pub fn key_code(key: NavKey) -> KeyCode {
    match key {
        NavKey::Cancel => KeyCode::Esc,
        NavKey::Up => KeyCode::Up,
        NavKey::Down => KeyCode::Down,
        NavKey::Left => KeyCode::Left,
        NavKey::Right => KeyCode::Right,
        NavKey::Activate => KeyCode::Enter,
    }
}

/// Parse a DOM-style key name (`ArrowUp`, `Escape`, ...) or a single character.
pub fn parse_key_name(name: &str) -> GridResult<KeyEvent> {
    if let Some(key) = NavKey::from_key_name(name) {
        return Ok(KeyEvent::new(key_code(key), KeyModifiers::NONE));
    }
    let code = match name {
        "Tab" => KeyCode::Tab,
        "Backspace" => KeyCode::Backspace,
        "Space" => KeyCode::Char(' '),
        other => {
            let mut chars = other.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return Err(GridError::UnknownKey(name.to_string())),
            }
        }
    };
    Ok(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn key_name(key: &KeyEvent) -> String {
    if let Some(nav) = nav_key(key) {
        return nav.key_name().to_string();
    }
    match key.code {
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        other => format!("{:?}", other),
    }
}
