//! Key vocabulary understood by grid navigation.

use serde::{Deserialize, Serialize};

/// A key that grid navigation reacts to.
///
/// Anything that does not map to one of these is left for other handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavKey {
    Cancel,
    Up,
    Down,
    Left,
    Right,
    Activate,
}

impl NavKey {
    /// Map a DOM-style key name (`"ArrowUp"`, `"Escape"`, ...) to a navigation key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name {
            "Escape" => Some(NavKey::Cancel),
            "ArrowUp" => Some(NavKey::Up),
            "ArrowDown" => Some(NavKey::Down),
            "ArrowLeft" => Some(NavKey::Left),
            "ArrowRight" => Some(NavKey::Right),
            "Enter" => Some(NavKey::Activate),
            _ => None,
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            NavKey::Cancel => "Escape",
            NavKey::Up => "ArrowUp",
            NavKey::Down => "ArrowDown",
            NavKey::Left => "ArrowLeft",
            NavKey::Right => "ArrowRight",
            NavKey::Activate => "Enter",
        }
    }

    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            NavKey::Up | NavKey::Down | NavKey::Left | NavKey::Right
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_key_name() {
        assert_eq!(NavKey::from_key_name("Escape"), Some(NavKey::Cancel));
        assert_eq!(NavKey::from_key_name("ArrowUp"), Some(NavKey::Up));
        assert_eq!(NavKey::from_key_name("ArrowDown"), Some(NavKey::Down));
        assert_eq!(NavKey::from_key_name("ArrowLeft"), Some(NavKey::Left));
        assert_eq!(NavKey::from_key_name("ArrowRight"), Some(NavKey::Right));
        assert_eq!(NavKey::from_key_name("Enter"), Some(NavKey::Activate));
    }

    #[test]
    fn test_unknown_names_are_ignored() {
        assert_eq!(NavKey::from_key_name("a"), None);
        assert_eq!(NavKey::from_key_name("Tab"), None);
        assert_eq!(NavKey::from_key_name("arrowup"), None);
        assert_eq!(NavKey::from_key_name(""), None);
    }

    #[test]
    fn test_key_name_matches_parse() {
        for key in [
            NavKey::Cancel,
            NavKey::Up,
            NavKey::Down,
            NavKey::Left,
            NavKey::Right,
            NavKey::Activate,
        ] {
            assert_eq!(NavKey::from_key_name(key.key_name()), Some(key));
        }
    }

    #[test]
    fn test_is_directional() {
        assert!(NavKey::Up.is_directional());
        assert!(NavKey::Left.is_directional());
        assert!(!NavKey::Cancel.is_directional());
        assert!(!NavKey::Activate.is_directional());
    }
}
