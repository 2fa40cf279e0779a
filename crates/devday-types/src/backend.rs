//! Backend trait definitions.
//!
//! The rendering surface implements these traits. The interpreter and the
//! sequence player dispatch all output through `TerminalSink` and never call
//! platform-specific APIs.

use std::time::Duration;

use crate::error::Result;
use crate::input::InputEvent;

/// Passive add-ons a sink can load. They change how output is presented,
/// never what the interpreter writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extension {
    /// Detect URLs in written text and make them clickable.
    WebLinks,
}

/// The terminal surface that receives all output.
pub trait TerminalSink {
    /// Append text or control sequences (`\r`, `\n`, `\b`) to the surface.
    fn write(&mut self, text: &str) -> Result<()>;

    /// Reset the visible surface.
    fn clear(&mut self) -> Result<()>;

    /// Direct future input events to this surface.
    fn focus(&mut self) -> Result<()>;

    /// Register a passive add-on.
    fn load_extension(&mut self, extension: Extension) -> Result<()>;

    /// Toggle the blinking cursor. Surfaces without blink control ignore it.
    fn set_cursor_blink(&mut self, _enabled: bool) -> Result<()> {
        Ok(())
    }
}

/// Input backend trait.
///
/// Maps platform-specific input to the platform-agnostic `InputEvent` enum.
pub trait InputBackend {
    /// Wait up to `timeout` for input, then return every pending event.
    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>>;
}
