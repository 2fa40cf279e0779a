//! Scripted output: timed steps and the player that writes them.
//!
//! A [`ScriptSequence`] is an ordered list of `(text, delay)` steps. The
//! [`SequencePlayer`] keeps a millisecond clock that the frame loop advances
//! with [`SequencePlayer::tick`]; every step whose due time has passed is
//! written to the sink. Due times chain: a step becomes due `delay_ms` after
//! the step before it was written (or after `play` for the first step).
//!
//! Several sequences may be in flight at once. Their steps fire in due-time
//! order, ties broken by the order the timers were armed, so output from
//! overlapping sequences interleaves on the shared sink. There is no
//! cancellation: a started sequence runs until its last step is written.

use std::collections::VecDeque;
use std::fmt;

use devday_types::backend::TerminalSink;

use crate::content::NEWLINE;

/// One timed write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    text: String,
    delay_ms: u32,
}

impl ScriptStep {
    pub fn new(text: impl Into<String>, delay_ms: u32) -> Self {
        Self {
            text: text.into(),
            delay_ms,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Wait before this step is written, in milliseconds.
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

/// An ordered list of steps, played strictly in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptSequence {
    steps: Vec<ScriptStep>,
}

impl ScriptSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`push`](Self::push).
    pub fn step(mut self, text: impl Into<String>, delay_ms: u32) -> Self {
        self.push(text, delay_ms);
        self
    }

    pub fn push(&mut self, text: impl Into<String>, delay_ms: u32) {
        self.steps.push(ScriptStep::new(text, delay_ms));
    }

    /// One step per line, all sharing `delay_ms`.
    pub fn from_lines<I, S>(lines: I, delay_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        lines
            .into_iter()
            .map(|line| ScriptStep::new(line, delay_ms))
            .collect()
    }

    /// One step per banner row, each row ending the terminal line.
    pub fn banner<I, S>(lines: I, delay_ms: u32) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines
            .into_iter()
            .map(|line| ScriptStep::new(format!("{}{NEWLINE}", line.as_ref()), delay_ms))
            .collect()
    }

    /// Append every step of `other`.
    pub fn append(mut self, other: ScriptSequence) -> Self {
        self.steps.extend(other.steps);
        self
    }

    pub fn steps(&self) -> &[ScriptStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Time from `play` until the last step is written.
    pub fn total_delay_ms(&self) -> u64 {
        self.steps.iter().map(|s| u64::from(s.delay_ms)).sum()
    }
}

impl FromIterator<ScriptStep> for ScriptSequence {
    fn from_iter<T: IntoIterator<Item = ScriptStep>>(iter: T) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// Handle returned by [`SequencePlayer::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SequenceId(u64);

impl fmt::Display for SequenceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "seq#{}", self.0)
    }
}

/// A sequence in flight.
struct Playback {
    id: SequenceId,
    remaining: VecDeque<ScriptStep>,
    /// Clock value at which the front step is written.
    due_at: u64,
    /// Arm order of the current timer, for tie-breaking.
    armed: u64,
}

/// Plays sequences against a sink as the clock advances.
pub struct SequencePlayer {
    clock_ms: u64,
    active: Vec<Playback>,
    next_id: u64,
    next_timer: u64,
    banner_delay_ms: u32,
}

impl SequencePlayer {
    /// Create a player whose banners default to `banner_delay_ms` per line.
    pub fn new(banner_delay_ms: u32) -> Self {
        Self {
            clock_ms: 0,
            active: Vec::new(),
            next_id: 0,
            next_timer: 0,
            banner_delay_ms,
        }
    }

    /// Schedule `sequence`. Nothing is written until the next [`tick`](Self::tick),
    /// even for a zero delay. An empty sequence is finished immediately.
    pub fn play(&mut self, sequence: ScriptSequence) -> SequenceId {
        let id = SequenceId(self.next_id);
        self.next_id += 1;

        let remaining: VecDeque<ScriptStep> = sequence.steps.into();
        let Some(first) = remaining.front() else {
            log::debug!("{id}: empty sequence, nothing to play");
            return id;
        };
        let due_at = self.clock_ms + u64::from(first.delay_ms);
        log::debug!("{id}: playing {} steps", remaining.len());
        let armed = self.arm();
        self.active.push(Playback {
            id,
            remaining,
            due_at,
            armed,
        });
        id
    }

    /// Play `lines` as a banner, one row per step. Uses the player's default
    /// banner delay unless `delay_ms` overrides it.
    pub fn play_banner<I, S>(&mut self, lines: I, delay_ms: Option<u32>) -> SequenceId
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let delay = delay_ms.unwrap_or(self.banner_delay_ms);
        self.play(ScriptSequence::banner(lines, delay))
    }

    /// Advance the clock by `dt_ms`, writing every step that came due.
    ///
    /// Returns the sequences that completed during this tick. A write error
    /// aborts the sequence it came from; other sequences keep playing.
    pub fn tick(&mut self, dt_ms: u32, sink: &mut dyn TerminalSink) -> Vec<SequenceId> {
        let target = self.clock_ms + u64::from(dt_ms);
        let mut completed = Vec::new();

        while let Some(idx) = self.next_due(target) {
            let now = self.active[idx].due_at;
            self.clock_ms = now;

            let Some(step) = self.active[idx].remaining.pop_front() else {
                // Sequences are removed as soon as their last step is written.
                self.active.remove(idx);
                continue;
            };

            if let Err(e) = sink.write(&step.text) {
                let aborted = self.active.remove(idx);
                log::error!("{}: aborted after write failure: {e}", aborted.id);
                continue;
            }

            match self.active[idx].remaining.front().map(|s| s.delay_ms) {
                Some(delay) => {
                    let armed = self.arm();
                    let playback = &mut self.active[idx];
                    playback.due_at = now + u64::from(delay);
                    playback.armed = armed;
                },
                None => {
                    let done = self.active.remove(idx);
                    log::debug!("{}: complete", done.id);
                    completed.push(done.id);
                },
            }
        }

        self.clock_ms = target;
        completed
    }

    /// Whether every step of `id` has been written (or it was aborted).
    pub fn is_finished(&self, id: SequenceId) -> bool {
        id.0 < self.next_id && !self.active.iter().any(|p| p.id == id)
    }

    /// No sequence is in flight.
    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    /// Milliseconds elapsed on the player clock.
    pub fn clock_ms(&self) -> u64 {
        self.clock_ms
    }

    pub fn banner_delay_ms(&self) -> u32 {
        self.banner_delay_ms
    }

    fn arm(&mut self) -> u64 {
        let timer = self.next_timer;
        self.next_timer += 1;
        timer
    }

    /// Index of the earliest playback due at or before `target`.
    fn next_due(&self, target: u64) -> Option<usize> {
        self.active
            .iter()
            .enumerate()
            .filter(|(_, p)| p.due_at <= target)
            .min_by_key(|(_, p)| (p.due_at, p.armed))
            .map(|(idx, _)| idx)
    }
}

impl Default for SequencePlayer {
    fn default() -> Self {
        Self::new(devday_types::config::DevdayConfig::default().banner_delay_ms)
    }
}
