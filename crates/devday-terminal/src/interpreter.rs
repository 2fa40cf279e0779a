//! Input state machine: buffers keystrokes, echoes them, and dispatches the
//! submitted line to its handler.

use devday_types::backend::{Extension, TerminalSink};
use devday_types::config::DevdayConfig;
use devday_types::error::Result;
use devday_types::input::{InputClass, classify};

use crate::commands::{CommandTable, HandlerOutcome, Response};
use crate::content::{self, ERASE, HelpEntry, PROMPT};
use crate::script::{SequenceId, SequencePlayer};
use crate::welcome::welcome_sequence;

/// Interpreter state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InterpreterState {
    /// Accepting input.
    Ready,
    /// A line is being dispatched.
    Submitting,
    /// Input is ignored. Entered by `devday start` and never left.
    Disabled,
}

/// The fake shell.
///
/// Owns the input buffer, the enabled flag, the command table and the
/// sequence player. The sink is borrowed per call.
pub struct Interpreter {
    buffer: String,
    state: InterpreterState,
    table: CommandTable,
    help: Vec<HelpEntry>,
    player: SequencePlayer,
    typing_delay_ms: u32,
    cursor_blink: bool,
    web_links: bool,
}

impl Interpreter {
    pub fn new(config: &DevdayConfig) -> Self {
        Self {
            buffer: String::new(),
            state: InterpreterState::Ready,
            table: CommandTable::builtin(),
            help: content::HELP_ENTRIES.to_vec(),
            player: SequencePlayer::new(config.banner_delay_ms),
            typing_delay_ms: config.typing_delay_ms,
            cursor_blink: config.cursor_blink,
            web_links: config.web_links,
        }
    }

    /// Replace the help entries used by `devday --help`, `readme` and `start`.
    pub fn with_help_entries(mut self, entries: Vec<HelpEntry>) -> Self {
        self.help = entries;
        self
    }

    /// Prepare the sink and queue the welcome script.
    pub fn start(&mut self, sink: &mut dyn TerminalSink) -> Result<SequenceId> {
        if self.web_links {
            sink.load_extension(Extension::WebLinks)?;
        }
        sink.set_cursor_blink(self.cursor_blink)?;
        sink.focus()?;
        let welcome = welcome_sequence(self.player.banner_delay_ms(), self.typing_delay_ms);
        Ok(self.player.play(welcome))
    }

    /// Process one raw input unit.
    pub fn handle_input(&mut self, raw: &str, sink: &mut dyn TerminalSink) -> Result<()> {
        if self.state == InterpreterState::Disabled {
            log::debug!("Input disabled, dropping {} bytes", raw.len());
            return Ok(());
        }
        match classify(raw) {
            None | Some(InputClass::Control) => {},
            Some(InputClass::Submit) => self.submit(sink)?,
            Some(InputClass::DeleteLast) => {
                self.buffer.pop();
                sink.write(ERASE)?;
            },
            Some(InputClass::Append) => {
                // Pasted text may carry line breaks; the buffer never does.
                let text: String = raw.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
                sink.write(&text)?;
                self.buffer.push_str(&text);
            },
        }
        Ok(())
    }

    /// Dispatch the buffered line, then write a fresh prompt.
    ///
    /// The prompt is written even when the handler fails or locks input.
    pub fn submit(&mut self, sink: &mut dyn TerminalSink) -> Result<()> {
        self.state = InterpreterState::Submitting;
        let line = std::mem::take(&mut self.buffer);
        let handler = self.table.lookup(&line);
        log::debug!("Dispatching {line:?} to {handler:?}");

        let result = {
            let mut out = Response {
                sink: &mut *sink,
                player: &mut self.player,
                help: &self.help,
            };
            handler.run(&line, &mut out)
        };

        self.state = match result {
            Ok(HandlerOutcome::Continue) => InterpreterState::Ready,
            Ok(HandlerOutcome::Lockout) => InterpreterState::Disabled,
            Err(e) => {
                log::error!("Handler {handler:?} failed for {line:?}: {e}");
                InterpreterState::Ready
            },
        };
        sink.write(PROMPT)
    }

    /// Advance scripted output.
    pub fn tick(&mut self, dt_ms: u32, sink: &mut dyn TerminalSink) -> Vec<SequenceId> {
        self.player.tick(dt_ms, sink)
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn state(&self) -> InterpreterState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state != InterpreterState::Disabled
    }

    /// No scripted output is pending.
    pub fn is_idle(&self) -> bool {
        self.player.is_idle()
    }

    pub fn player(&self) -> &SequencePlayer {
        &self.player
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new(&DevdayConfig::default())
    }
}
