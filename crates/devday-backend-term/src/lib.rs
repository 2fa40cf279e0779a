//! crossterm backend for the DevDay terminal.
//!
//! Implements `TerminalSink` and `InputBackend` on top of a real terminal in
//! raw mode. Output is written verbatim, so the content's own `\r\n` pairs
//! control line breaks exactly as they would in a browser terminal widget.

mod keymap;
mod links;

use std::io::{self, Stdout, Write};
use std::time::Duration;

use crossterm::{cursor, event, execute, terminal};

use devday_types::backend::{Extension, InputBackend, TerminalSink};
use devday_types::error::{DevdayError, Result};
use devday_types::input::InputEvent;

pub use keymap::{map_event, map_key};
pub use links::{encode_hyperlink, link_urls};

/// Terminal output sink and input backend.
///
/// `TermBackend::new()` takes over the process's terminal. `with_writer`
/// builds an output-only sink over any writer, leaving the terminal alone.
pub struct TermBackend<W: Write = Stdout> {
    out: W,
    web_links: bool,
    session_active: bool,
}

impl TermBackend<Stdout> {
    /// Enter raw mode, the alternate screen, bracketed paste and focus
    /// reporting on stdout.
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().map_err(|e| DevdayError::Backend(format!("raw mode: {e}")))?;
        let mut backend = Self {
            out: io::stdout(),
            web_links: false,
            session_active: true,
        };
        if let Err(e) = execute!(
            backend.out,
            terminal::EnterAlternateScreen,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            event::EnableBracketedPaste,
            event::EnableFocusChange
        ) {
            backend.restore();
            return Err(DevdayError::Backend(format!("terminal setup: {e}")));
        }
        log::info!("Terminal backend initialized");
        Ok(backend)
    }
}

impl<W: Write> TermBackend<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            web_links: false,
            session_active: false,
        }
    }

    /// Whether URLs are being turned into hyperlinks.
    pub fn web_links(&self) -> bool {
        self.web_links
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    /// Restore the terminal. Safe to call more than once.
    pub fn shutdown(&mut self) -> Result<()> {
        if self.session_active {
            self.restore();
            log::info!("Terminal backend shut down");
        }
        Ok(())
    }

    fn restore(&mut self) {
        if !self.session_active {
            return;
        }
        self.session_active = false;
        let _ = execute!(
            self.out,
            event::DisableFocusChange,
            event::DisableBracketedPaste,
            cursor::EnableBlinking,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
    }

    fn emit(&mut self, text: &str) -> Result<()> {
        self.out
            .write_all(text.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|e| DevdayError::Sink(e.to_string()))
    }
}

impl<W: Write> TerminalSink for TermBackend<W> {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.web_links {
            let linked = link_urls(text);
            self.emit(&linked)
        } else {
            self.emit(text)
        }
    }

    fn clear(&mut self) -> Result<()> {
        execute!(
            self.out,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0)
        )
        .map_err(|e| DevdayError::Sink(e.to_string()))
    }

    fn focus(&mut self) -> Result<()> {
        Ok(())
    }

    fn load_extension(&mut self, extension: Extension) -> Result<()> {
        match extension {
            Extension::WebLinks => self.web_links = true,
        }
        log::debug!("Loaded extension {extension:?}");
        Ok(())
    }

    fn set_cursor_blink(&mut self, enabled: bool) -> Result<()> {
        let result = if enabled {
            execute!(self.out, cursor::EnableBlinking)
        } else {
            execute!(self.out, cursor::DisableBlinking)
        };
        result.map_err(|e| DevdayError::Sink(e.to_string()))
    }
}

impl<W: Write> InputBackend for TermBackend<W> {
    fn poll_events(&mut self, timeout: Duration) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();
        let mut wait = timeout;
        while event::poll(wait).map_err(|e| DevdayError::Backend(e.to_string()))? {
            let raw = event::read().map_err(|e| DevdayError::Backend(e.to_string()))?;
            if let Some(e) = map_event(raw) {
                events.push(e);
            }
            // Drain whatever else is already queued without waiting again.
            wait = Duration::ZERO;
        }
        Ok(events)
    }
}

impl<W: Write> Drop for TermBackend<W> {
    fn drop(&mut self) {
        self.restore();
    }
}
