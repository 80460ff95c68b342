//! Keyboard event types.

use crate::modifiers::Modifiers;

/// Direction reported by the legacy keypad-modifier idiom.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeypadDirection {
    /// Keypad up.
    Up,
    /// Keypad down.
    Down,
    /// Keypad right.
    Right,
    /// Keypad left.
    Left,
    /// Keypad page up.
    PageUp,
    /// Keypad end.
    End,
    /// Keypad page down.
    PageDown,
    /// Keypad home.
    Home,
}

/// A key code representing a keyboard key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A character key; carries the literal codepoint read from the terminal.
    Char(char),
    /// Escape key.
    Esc,
    /// Tab key.
    Tab,
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Function key (F1-F24).
    F(u8),
    /// Keypad direction key.
    Keypad(KeypadDirection),
    /// A key the terminal reported but this layer cannot name.
    Unknown,
}

impl KeyCode {
    /// Check if this is a character key.
    #[must_use]
    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char(_))
    }

    /// Check if this is a function key.
    #[must_use]
    pub fn is_function_key(&self) -> bool {
        matches!(self, Self::F(_))
    }

    /// Get the character if this is a character key.
    #[must_use]
    pub fn char(&self) -> Option<char> {
        match self {
            Self::Char(c) => Some(*c),
            _ => None,
        }
    }
}

/// A keystroke report.
///
/// Both the raw shape delivered by the terminal source and the resolved
/// shape handed to the consumer; resolution removes ambiguity and attributes
/// modifiers but does not change the type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key code.
    pub code: KeyCode,
    /// Terminal-reported key name, if any.
    pub label: Option<String>,
    /// Modifier keys attributed to this keystroke.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a new key event.
    #[must_use]
    pub fn new(code: KeyCode, modifiers: Modifiers) -> Self {
        Self {
            code,
            label: None,
            modifiers,
        }
    }

    /// Create a key event with no modifiers.
    #[must_use]
    pub fn key(code: KeyCode) -> Self {
        Self::new(code, Modifiers::empty())
    }

    /// Create a character key event.
    #[must_use]
    pub fn char(c: char) -> Self {
        Self::key(KeyCode::Char(c))
    }

    /// Create a Ctrl+key event.
    #[must_use]
    pub fn with_ctrl(code: KeyCode) -> Self {
        Self::new(code, Modifiers::CTRL)
    }

    /// Create an Alt+key event.
    #[must_use]
    pub fn with_alt(code: KeyCode) -> Self {
        Self::new(code, Modifiers::ALT)
    }

    /// Attach a terminal-reported key name.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Check if Shift is held.
    #[must_use]
    pub fn shift(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }

    /// Check if Ctrl is held.
    #[must_use]
    pub fn ctrl(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Check if Alt is held.
    #[must_use]
    pub fn alt(&self) -> bool {
        self.modifiers.contains(Modifiers::ALT)
    }

    /// Check if this is the literal escape character (0x1B), as opposed to
    /// the named Esc key. The distinction drives the multi-token idioms:
    /// only the raw character opens an escape sequence.
    #[must_use]
    pub fn is_escape_char(&self) -> bool {
        self.code == KeyCode::Char('\u{1b}')
    }

    /// Check if this matches a specific key with specific modifiers.
    #[must_use]
    pub fn matches(&self, code: KeyCode, modifiers: Modifiers) -> bool {
        self.code == code && self.modifiers == modifiers
    }
}

impl From<char> for KeyEvent {
    fn from(c: char) -> Self {
        Self::char(c)
    }
}

impl From<KeyCode> for KeyEvent {
    fn from(code: KeyCode) -> Self {
        Self::key(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_event_creation() {
        let event = KeyEvent::char('a');
        assert_eq!(event.code, KeyCode::Char('a'));
        assert!(event.label.is_none());
        assert!(event.modifiers.is_empty());
    }

    #[test]
    fn test_key_event_modifiers() {
        let event = KeyEvent::with_ctrl(KeyCode::Char('c'));
        assert!(event.ctrl());
        assert!(!event.shift());
        assert!(!event.alt());
    }

    #[test]
    fn test_key_code_checks() {
        assert!(KeyCode::F(1).is_function_key());
        assert!(KeyCode::Char('x').is_char());
        assert_eq!(KeyCode::Char('x').char(), Some('x'));
        assert_eq!(KeyCode::Enter.char(), None);
    }

    #[test]
    fn test_escape_char_vs_named_esc() {
        assert!(KeyEvent::char('\u{1b}').is_escape_char());
        assert!(!KeyEvent::key(KeyCode::Esc).is_escape_char());
    }

    #[test]
    fn test_with_label() {
        let event = KeyEvent::key(KeyCode::F(5)).with_label("F5");
        assert_eq!(event.label.as_deref(), Some("F5"));
    }

    #[test]
    fn test_key_event_from_char() {
        let event: KeyEvent = 'z'.into();
        assert_eq!(event.code, KeyCode::Char('z'));
    }
}
