//! Command interpreter and scripted output for the DevDay terminal.
//!
//! The interpreter buffers raw input units, dispatches submitted lines
//! through a fixed `CommandTable`, and hands animated output to a
//! tick-driven `SequencePlayer`. All output goes through
//! `devday_types::backend::TerminalSink`.

mod commands;
pub mod content;
mod interpreter;
pub mod script;
mod welcome;

#[cfg(test)]
pub(crate) mod test_utils;

/// Response procedure bound to a command line.
pub use commands::Handler;
/// What the interpreter does after a handler ran.
pub use commands::HandlerOutcome;
/// Exact-match command table.
pub use commands::CommandTable;
/// Borrowed context a handler writes through.
pub use commands::Response;
/// The fake shell: input buffer, enabled flag, dispatch.
pub use interpreter::Interpreter;
/// Ready / Submitting / Disabled.
pub use interpreter::InterpreterState;
/// Timed output steps and their player.
pub use script::{ScriptSequence, ScriptStep, SequenceId, SequencePlayer};
/// The boot animation.
pub use welcome::{PRESS_ANY_KEY, welcome_sequence};
