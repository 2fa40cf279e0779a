//! Platform-agnostic input event types.
//!
//! Backends translate their native keyboard/paste input into xterm-style
//! data units, the same opaque strings a browser terminal widget reports.
//! The interpreter never sees raw platform input.

/// Carriage return: submits the current line.
pub const CODE_ENTER: u32 = 13;

/// Delete (what terminals send for Backspace).
pub const CODE_DELETE: u32 = 127;

/// First code point at or above which a unit is printable.
pub const CODE_PRINTABLE_START: u32 = 32;

/// A platform-agnostic input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// One unit of terminal data: a keystroke, an escape sequence, or a
    /// whole paste. Only the first code point is significant for
    /// classification.
    Data(String),
    /// The surface was resized to the given columns and rows.
    Resize { cols: u16, rows: u16 },
    /// The surface gained focus.
    FocusGained,
    /// The surface lost focus.
    FocusLost,
    /// User requested quit.
    Quit,
}

impl InputEvent {
    /// Convenience constructor for a data unit.
    pub fn data(unit: impl Into<String>) -> Self {
        Self::Data(unit.into())
    }
}

/// How the interpreter treats a raw data unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputClass {
    /// Carriage return: submit the line.
    Submit,
    /// Any other control character (including escape sequences): ignored.
    Control,
    /// Delete the last buffered character.
    DeleteLast,
    /// Printable data: append and echo.
    Append,
}

/// Classify a raw data unit by its first code point.
///
/// Returns `None` for an empty unit.
pub fn classify(unit: &str) -> Option<InputClass> {
    let code = unit.chars().next()? as u32;
    let class = if code == CODE_ENTER {
        InputClass::Submit
    } else if code < CODE_PRINTABLE_START {
        InputClass::Control
    } else if code == CODE_DELETE {
        InputClass::DeleteLast
    } else {
        InputClass::Append
    };
    Some(class)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits() {
        assert_eq!(classify("\r"), Some(InputClass::Submit));
    }

    #[test]
    fn line_feed_is_control() {
        assert_eq!(classify("\n"), Some(InputClass::Control));
    }

    #[test]
    fn escape_sequences_are_control() {
        assert_eq!(classify("\x1b[A"), Some(InputClass::Control));
        assert_eq!(classify("\x1b"), Some(InputClass::Control));
        assert_eq!(classify("\t"), Some(InputClass::Control));
        assert_eq!(classify("\x03"), Some(InputClass::Control));
    }

    #[test]
    fn delete_is_delete_last() {
        assert_eq!(classify("\x7f"), Some(InputClass::DeleteLast));
    }

    #[test]
    fn printable_appends() {
        assert_eq!(classify("a"), Some(InputClass::Append));
        assert_eq!(classify(" "), Some(InputClass::Append));
        assert_eq!(classify("~"), Some(InputClass::Append));
    }

    #[test]
    fn unicode_appends() {
        assert_eq!(classify("크"), Some(InputClass::Append));
        assert_eq!(classify("\u{1F600}"), Some(InputClass::Append));
    }

    #[test]
    fn only_first_code_point_counts() {
        // A paste starting with a printable char is appended even if it
        // carries a CR later on.
        assert_eq!(classify("ls\r"), Some(InputClass::Append));
        assert_eq!(classify("\rls"), Some(InputClass::Submit));
    }

    #[test]
    fn empty_unit_has_no_class() {
        assert_eq!(classify(""), None);
    }

    #[test]
    fn data_constructor() {
        assert_eq!(InputEvent::data("x"), InputEvent::Data("x".to_string()));
    }

    #[test]
    fn event_variants_distinct() {
        let events = [
            InputEvent::data("a"),
            InputEvent::Resize { cols: 80, rows: 24 },
            InputEvent::FocusGained,
            InputEvent::FocusLost,
            InputEvent::Quit,
        ];
        for (i, a) in events.iter().enumerate() {
            for (j, b) in events.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "variants {i} and {j} should differ");
                }
            }
        }
    }
}
