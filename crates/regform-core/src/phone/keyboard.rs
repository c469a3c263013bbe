//! Keystroke guard for the phone field.
//!
//! Runs before the masker ever sees the value: anything that is neither a
//! digit key nor a recognized modifier/navigation/clipboard key is rejected
//! outright.

/// A single key press or release as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// Host key code (main-row digits 48..=57, numpad digits 96..=105).
    pub code: u32,
    pub shift: bool,
    pub ctrl: bool,
    pub meta: bool,
}

impl KeyEvent {
    pub fn key(code: u32) -> Self {
        Self {
            code,
            shift: false,
            ctrl: false,
            meta: false,
        }
    }

    /// Whether the guard lets this key through to the field at all.
    pub fn is_allowed(&self) -> bool {
        is_numeric_input(self) || is_modifier_key(self)
    }
}

/// Main-row or numpad digit.
pub fn is_numeric_input(event: &KeyEvent) -> bool {
    matches!(event.code, 48..=57 | 96..=105)
}

/// Shift, Home/End, Backspace/Tab/Enter/Delete, arrows, or
/// Ctrl/Meta with A, C, V, X, Z.
pub fn is_modifier_key(event: &KeyEvent) -> bool {
    event.shift
        || matches!(event.code, 35 | 36)
        || matches!(event.code, 8 | 9 | 13 | 46)
        || matches!(event.code, 37..=40)
        || ((event.ctrl || event.meta) && matches!(event.code, 65 | 67 | 86 | 88 | 90))
}

/// The digit a numeric key produces.
pub fn digit_char(event: &KeyEvent) -> Option<char> {
    match event.code {
        48..=57 => char::from_digit(event.code - 48, 10),
        96..=105 => char::from_digit(event.code - 96, 10),
        _ => None,
    }
}
