//! Shared test utilities for interpreter and player tests.
//!
//! Provides a [`RecordingSink`] that records every sink call for assertion.

use devday_types::backend::{Extension, TerminalSink};
use devday_types::error::{DevdayError, Result};

/// A recorded call on the sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkCall {
    Write(String),
    Clear,
    Focus,
    LoadExtension(Extension),
    CursorBlink(bool),
}

/// A sink that records all calls for test assertions.
pub struct RecordingSink {
    pub calls: Vec<SinkCall>,
    /// Writes of exactly this text fail with a sink error.
    fail_on: Option<String>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            fail_on: None,
        }
    }

    /// A sink that rejects writes of `text`.
    pub fn failing_on(text: &str) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(text.to_string()),
        }
    }

    /// Only the written texts, in order.
    pub fn writes(&self) -> Vec<&str> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                SinkCall::Write(text) => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Everything written, concatenated.
    pub fn output(&self) -> String {
        self.writes().concat()
    }

    pub fn write_count(&self) -> usize {
        self.writes().len()
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.calls.clear();
    }
}

impl TerminalSink for RecordingSink {
    fn write(&mut self, text: &str) -> Result<()> {
        if self.fail_on.as_deref() == Some(text) {
            return Err(DevdayError::Sink(format!("rejected write {text:?}")));
        }
        self.calls.push(SinkCall::Write(text.to_string()));
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.calls.push(SinkCall::Clear);
        Ok(())
    }

    fn focus(&mut self) -> Result<()> {
        self.calls.push(SinkCall::Focus);
        Ok(())
    }

    fn load_extension(&mut self, extension: Extension) -> Result<()> {
        self.calls.push(SinkCall::LoadExtension(extension));
        Ok(())
    }

    fn set_cursor_blink(&mut self, enabled: bool) -> Result<()> {
        self.calls.push(SinkCall::CursorBlink(enabled));
        Ok(())
    }
}
