//! Human-readable log of one stock generation.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker that flags a narration line as an error.
pub const ERROR_MARKER: &str = "ERROR";

/// Returns true if a narration line reports an error.
pub fn is_error_line(line: &str) -> bool {
    line.contains(ERROR_MARKER)
}

/// Ordered narration lines: counts, dice results, and warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Narration {
    lines: Vec<String>,
}

impl Narration {
    /// Create an empty narration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// All lines in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if nothing has been narrated.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Returns true if any line reports an error.
    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| is_error_line(line))
    }
}

impl<'a> IntoIterator for &'a Narration {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

impl From<Vec<String>> for Narration {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}
