//! Candidate input splitting and `VALID`/`INVALID` result output.
//!
//! # Output format
//!
//! One label per candidate, in input order, each followed by `\n`:
//!
//! ```text
//! VALID
//! INVALID
//! VALID
//! ```

use serde::Serialize;
use std::fmt;
use std::io::{self, Write};

/// The labelled outcome of checking one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    /// The automaton accepts the candidate
    Valid,
    /// The automaton rejects the candidate
    Invalid,
}

impl Verdict {
    /// Output label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Valid => "VALID",
            Self::Invalid => "INVALID",
        }
    }
}

impl From<bool> for Verdict {
    fn from(valid: bool) -> Self {
        if valid {
            Self::Valid
        } else {
            Self::Invalid
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Split candidate text into one string per line.
///
/// Only the line terminator (`\n` or `\r\n`) is removed. Empty lines are kept
/// as empty candidates; a final terminator does not start another one.
pub fn split_candidates(text: &str) -> Vec<&str> {
    text.lines().collect()
}

/// Write one label line per verdict.
///
/// # Errors
///
/// Propagates write failures from `writer`.
pub fn write_verdicts<W: Write>(mut writer: W, verdicts: &[bool]) -> io::Result<()> {
    for &valid in verdicts {
        writeln!(writer, "{}", Verdict::from(valid))?;
    }
    writer.flush()
}

/// Render verdicts in the output format.
pub fn render_verdicts(verdicts: &[bool]) -> String {
    verdicts
        .iter()
        .map(|&valid| format!("{}\n", Verdict::from(valid)))
        .collect()
}
