//! The fixed command table and the canned responses bound to it.
//!
//! Lookup is an exact, case-sensitive, whitespace-sensitive match on the whole
//! command line. Several strings alias to the same [`Handler`].

use std::collections::HashMap;

use devday_types::backend::TerminalSink;
use devday_types::error::Result;

use crate::content::{self, HelpEntry, NEWLINE, PROMPT};
use crate::script::{ScriptSequence, SequencePlayer};

/// Response procedure for a command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handler {
    Empty,
    List,
    ChangeDirectory,
    Help,
    Readme,
    Start,
    Money,
    Remove,
    /// Fallback for every line that is not a table key.
    NotFound,
}

/// What the interpreter should do once a handler has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerOutcome {
    Continue,
    /// Disable input for good.
    Lockout,
}

/// Everything a handler may touch while it runs.
pub struct Response<'a> {
    pub sink: &'a mut dyn TerminalSink,
    pub player: &'a mut SequencePlayer,
    pub help: &'a [HelpEntry],
}

/// Table keys and their handlers.
const BUILTIN: &[(&str, Handler)] = &[
    ("", Handler::Empty),
    ("ls", Handler::List),
    ("cd", Handler::ChangeDirectory),
    ("cd ", Handler::ChangeDirectory),
    ("cd ..", Handler::ChangeDirectory),
    ("cd bk", Handler::ChangeDirectory),
    ("cd edgar", Handler::ChangeDirectory),
    ("cd daniel", Handler::ChangeDirectory),
    ("cd mincho", Handler::ChangeDirectory),
    ("cd vigli", Handler::ChangeDirectory),
    ("show me the money", Handler::Money),
    ("rm -rf", Handler::Remove),
    ("rm -rf /", Handler::Remove),
    ("devday start", Handler::Start),
    ("devday readme", Handler::Readme),
    ("devday --help", Handler::Help),
];

/// Exact-match mapping from command line to handler. Fixed at construction.
#[derive(Debug, Clone)]
pub struct CommandTable {
    handlers: HashMap<&'static str, Handler>,
}

impl CommandTable {
    /// The stock table.
    pub fn builtin() -> Self {
        Self {
            handlers: BUILTIN.iter().copied().collect(),
        }
    }

    /// Handler for `line`, falling back to [`Handler::NotFound`].
    pub fn lookup(&self, line: &str) -> Handler {
        self.get(line).unwrap_or(Handler::NotFound)
    }

    /// Handler for `line` if it is a table key.
    pub fn get(&self, line: &str) -> Option<Handler> {
        self.handlers.get(line).copied()
    }

    /// All keys, sorted.
    pub fn keys(&self) -> Vec<&'static str> {
        let mut keys: Vec<_> = self.handlers.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Handler {
    /// Produce the response to `line`.
    ///
    /// Writes go straight to the sink; animated output is handed to the
    /// player and plays out on later ticks.
    pub fn run(self, line: &str, out: &mut Response<'_>) -> Result<HandlerOutcome> {
        match self {
            Self::Empty => {},
            Self::List => {
                out.sink.write(NEWLINE)?;
                out.sink.write(content::ROSTER[0])?;
                out.sink.write(NEWLINE)?;
                out.sink.write(content::ROSTER[1])?;
                out.sink.write(NEWLINE)?;
            },
            Self::ChangeDirectory => {
                let target = line.split(' ').nth(1).unwrap_or("");
                let message = match target {
                    "" | ".." => content::no_such_directory(),
                    name => content::access_denied(name),
                };
                out.sink.write(NEWLINE)?;
                out.sink.write(&message)?;
                out.sink.write(NEWLINE)?;
            },
            Self::Help => {
                out.sink.write(NEWLINE)?;
                for entry in out.help {
                    out.sink.write(PROMPT)?;
                    out.sink
                        .write(&format!("{}    {}", entry.command, entry.description))?;
                }
                out.sink.write(NEWLINE)?;
            },
            Self::Readme => {
                out.sink.write(PROMPT)?;
                let entry = content::find_help_entry(out.help, "devday readme")?;
                out.sink.write(&content::visit(entry.url))?;
            },
            Self::Start => {
                out.sink.write(PROMPT)?;
                let entry = content::find_help_entry(out.help, "devday start")?;
                out.sink.write(&content::visit(entry.url))?;
                out.sink.set_cursor_blink(false)?;
                out.sink.write(NEWLINE)?;
                let id = out.player.play(start_sequence());
                log::info!("devday start: input locked, playing {id}");
                return Ok(HandlerOutcome::Lockout);
            },
            Self::Money => {
                out.sink.write(NEWLINE)?;
                out.sink.write(content::MONEY)?;
                out.sink.write(NEWLINE)?;
            },
            Self::Remove => {
                out.sink.write(NEWLINE)?;
                out.sink.write(content::PLEASE)?;
                out.sink.write(NEWLINE)?;
            },
            Self::NotFound => {
                out.sink.write(NEWLINE)?;
                out.sink.write(&content::not_found(line))?;
                out.sink.write(NEWLINE)?;
                out.sink.write(content::HELP_HINT)?;
                out.sink.write(NEWLINE)?;
            },
        }
        Ok(HandlerOutcome::Continue)
    }
}

/// Growing dots, then the completion notice.
pub fn start_sequence() -> ScriptSequence {
    [".", "..", "...", "....", "....."]
        .into_iter()
        .zip([300, 400, 500, 700, 900])
        .fold(ScriptSequence::new(), |seq, (dots, delay)| {
            seq.step(dots, delay).step(NEWLINE, 0)
        })
        .step(content::PROCESS_COMPLETE, 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{HELP_ENTRIES, colors};
    use crate::test_utils::{RecordingSink, SinkCall};
    use devday_types::error::DevdayError;

    fn run(handler: Handler, line: &str) -> (RecordingSink, SequencePlayer, HandlerOutcome) {
        run_with(handler, line, HELP_ENTRIES)
    }

    fn run_with(
        handler: Handler,
        line: &str,
        help: &[HelpEntry],
    ) -> (RecordingSink, SequencePlayer, HandlerOutcome) {
        let mut sink = RecordingSink::new();
        let mut player = SequencePlayer::new(120);
        let outcome = {
            let mut out = Response {
                sink: &mut sink,
                player: &mut player,
                help,
            };
            handler.run(line, &mut out).unwrap()
        };
        (sink, player, outcome)
    }

    // -- table --

    #[test]
    fn table_has_every_alias() {
        let table = CommandTable::builtin();
        assert_eq!(table.len(), 16);
        assert_eq!(table.lookup(""), Handler::Empty);
        assert_eq!(table.lookup("cd "), Handler::ChangeDirectory);
        assert_eq!(table.lookup("cd vigli"), Handler::ChangeDirectory);
        assert_eq!(table.lookup("rm -rf /"), Handler::Remove);
        assert_eq!(table.lookup("devday --help"), Handler::Help);
    }

    #[test]
    fn lookup_is_exact() {
        let table = CommandTable::builtin();
        assert_eq!(table.lookup("LS"), Handler::NotFound);
        assert_eq!(table.lookup(" ls"), Handler::NotFound);
        assert_eq!(table.lookup("ls "), Handler::NotFound);
        assert_eq!(table.lookup("cd bob"), Handler::NotFound);
        assert_eq!(table.get("cd bob"), None);
    }

    #[test]
    fn keys_are_sorted() {
        let keys = CommandTable::default().keys();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(keys, sorted);
        assert!(keys.contains(&"show me the money"));
    }

    // -- handlers --

    #[test]
    fn empty_writes_nothing() {
        let (sink, _, outcome) = run(Handler::Empty, "");
        assert!(sink.calls.is_empty());
        assert_eq!(outcome, HandlerOutcome::Continue);
    }

    #[test]
    fn list_writes_roster() {
        let (sink, _, _) = run(Handler::List, "ls");
        assert_eq!(
            sink.writes(),
            vec![NEWLINE, content::ROSTER[0], NEWLINE, content::ROSTER[1], NEWLINE]
        );
    }

    #[test]
    fn cd_without_target_is_no_such_directory() {
        for line in ["cd", "cd ", "cd .."] {
            let (sink, _, _) = run(Handler::ChangeDirectory, line);
            assert!(
                sink.output().contains("No such file or directory"),
                "{line:?}"
            );
        }
    }

    #[test]
    fn cd_into_roster_is_denied() {
        for name in ["bk", "edgar", "daniel", "mincho", "vigli"] {
            let (sink, _, _) = run(Handler::ChangeDirectory, &format!("cd {name}"));
            let expected = format!("Access denied for user to database '{name}'.");
            assert!(sink.output().contains(&expected));
            assert!(sink.output().contains(colors::RED));
        }
    }

    #[test]
    fn help_lists_entries_in_order() {
        let (sink, _, _) = run(Handler::Help, "devday --help");
        assert_eq!(
            sink.writes(),
            vec![
                NEWLINE,
                PROMPT,
                "devday start     ---- join devday",
                PROMPT,
                "devday readme    ---- visit notion",
                NEWLINE,
            ]
        );
    }

    #[test]
    fn readme_visits_notion() {
        let (sink, _, outcome) = run(Handler::Readme, "devday readme");
        assert_eq!(sink.writes(), vec![PROMPT, "visit to https://kmong.com"]);
        assert_eq!(outcome, HandlerOutcome::Continue);
    }

    #[test]
    fn readme_without_entry_errors_after_prompt() {
        let mut sink = RecordingSink::new();
        let mut player = SequencePlayer::new(120);
        let mut out = Response {
            sink: &mut sink,
            player: &mut player,
            help: &[],
        };
        let err = Handler::Readme.run("devday readme", &mut out).unwrap_err();
        assert!(matches!(err, DevdayError::MissingHelpEntry(_)));
        assert_eq!(sink.writes(), vec![PROMPT]);
    }

    #[test]
    fn start_locks_out_and_plays_dots() {
        let (mut sink, mut player, outcome) = run(Handler::Start, "devday start");
        assert_eq!(outcome, HandlerOutcome::Lockout);
        assert_eq!(
            sink.calls,
            vec![
                SinkCall::Write(PROMPT.to_string()),
                SinkCall::Write(
                    "visit to https://gather.town/app/AncfUoSib6cE7E1i/kmong".to_string()
                ),
                SinkCall::CursorBlink(false),
                SinkCall::Write(NEWLINE.to_string()),
            ]
        );
        assert_eq!(player.active_count(), 1);

        sink.reset();
        player.tick(299, &mut sink);
        assert_eq!(sink.write_count(), 0);
        player.tick(1, &mut sink);
        assert_eq!(sink.writes(), vec![".", NEWLINE]);

        player.tick(10_000, &mut sink);
        assert_eq!(
            sink.output(),
            ".\r\n..\r\n...\r\n....\r\n.....\r\n[프로세스 완료됨]"
        );
        assert!(player.is_idle());
    }

    #[test]
    fn start_sequence_timing() {
        let seq = start_sequence();
        assert_eq!(seq.len(), 11);
        assert_eq!(seq.total_delay_ms(), 2800);
        assert_eq!(seq.steps().last().map(|s| s.text()), Some(content::PROCESS_COMPLETE));
    }

    #[test]
    fn money_and_remove() {
        let (sink, _, _) = run(Handler::Money, "show me the money");
        assert_eq!(sink.writes(), vec![NEWLINE, "10,000", NEWLINE]);
        let (sink, _, _) = run(Handler::Remove, "rm -rf /");
        assert_eq!(sink.writes(), vec![NEWLINE, "please", NEWLINE]);
    }

    #[test]
    fn not_found_names_input_and_hints() {
        let (sink, _, _) = run(Handler::NotFound, "sudo su");
        let out = sink.output();
        assert!(out.contains("Command \"sudo su\" not found."));
        assert!(out.contains(content::HELP_HINT));
        assert!(out.ends_with(NEWLINE));
    }

    #[test]
    fn custom_help_entries_are_listed() {
        let entries = [HelpEntry {
            command: "devday party",
            description: "-- cake",
            url: "https://example.com",
        }];
        let (sink, _, _) = run_with(Handler::Help, "devday --help", &entries);
        assert!(sink.writes().contains(&"devday party    -- cake"));
    }
}
