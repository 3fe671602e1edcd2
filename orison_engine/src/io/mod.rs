//! Input/output ports.
//!
//! The engine consumes these traits and never implements a real terminal:
//! front-ends adapt whatever they have (stdin, a window, a test script) to
//! one line in, one line out.

use std::collections::VecDeque;

/// Sink for player-facing text, one line at a time.
pub trait OutputPort {
    fn write_line(&mut self, text: &str);
}

/// Blocking source of player input. The prompt is advisory only.
pub trait InputPort {
    fn read_line(&mut self, prompt: &str) -> String;
}

/// An input port fed from a fixed script of lines.
///
/// Used by tests and scripted replays. Reading past the end of the script
/// yields empty lines, which scenes treat as the default choice.
#[derive(Debug, Default)]
pub struct ScriptedInput {
    lines: VecDeque<String>,
}

impl ScriptedInput {
    pub fn new(lines: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.lines.len()
    }
}

impl InputPort for ScriptedInput {
    fn read_line(&mut self, _prompt: &str) -> String {
        self.lines.pop_front().unwrap_or_default()
    }
}

/// An output port that keeps the transcript in memory.
#[derive(Debug, Default)]
pub struct MemoryOutput {
    lines: Vec<String>,
}

impl MemoryOutput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any line of the transcript contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.iter().any(|line| line.contains(needle))
    }
}

impl OutputPort for MemoryOutput {
    fn write_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
