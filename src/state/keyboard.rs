//! Keyboard Module - key event types.
//!
//! Screens and the global key table match on [`KeyboardEvent::key`], which
//! holds either a named key (`"Enter"`, `"ArrowUp"`, `"Escape"`, ...) or the
//! literal character typed (`"j"`, `"+"`, `"P"`).

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// True for a plain (no ctrl/alt) press of `key`.
    pub fn is(&self, key: &str) -> bool {
        self.key == key && !self.modifiers.ctrl && !self.modifiers.alt
    }

    /// True for Ctrl+`key`.
    pub fn is_ctrl(&self, key: &str) -> bool {
        self.modifiers.ctrl && self.key.eq_ignore_ascii_case(key)
    }

    /// The typed character when the key is a single character.
    pub fn char(&self) -> Option<char> {
        let mut chars = self.key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matching() {
        let j = KeyboardEvent::new("j");
        assert!(j.is("j"));
        assert!(!j.is("J"));
        assert_eq!(j.char(), Some('j'));

        let ctrl_c = KeyboardEvent::with_modifiers("c", Modifiers::ctrl());
        assert!(ctrl_c.is_ctrl("c"));
        assert!(!ctrl_c.is("c"));

        assert_eq!(KeyboardEvent::new("Enter").char(), None);
    }
}
