//! Transition-table view of an automaton.
//!
//! The table uses the same row layout as the definition format, so rendering
//! an automaton with `Display` produces text that parses back into an equal
//! automaton.

use super::{Automaton, State, ALPHABET_SIZE};
use serde::{Serialize, Serializer};
use std::fmt;

/// Role marker in the first field of a state line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Empty field: neither start nor accepting
    Ordinary,
    /// `+`
    Accepting,
    /// `-`
    Start,
    /// `-+` or `+-`
    StartAccepting,
}

impl Marker {
    /// Parse a marker field. Returns `None` for anything but the five
    /// recognised spellings.
    pub fn parse(field: &str) -> Option<Self> {
        match field {
            "" => Some(Self::Ordinary),
            "+" => Some(Self::Accepting),
            "-" => Some(Self::Start),
            "-+" | "+-" => Some(Self::StartAccepting),
            _ => None,
        }
    }

    /// Build the marker for a state with the given roles.
    pub fn from_roles(is_start: bool, is_accepting: bool) -> Self {
        match (is_start, is_accepting) {
            (false, false) => Self::Ordinary,
            (false, true) => Self::Accepting,
            (true, false) => Self::Start,
            (true, true) => Self::StartAccepting,
        }
    }

    /// Whether the marker designates the start state.
    #[inline]
    pub fn is_start(self) -> bool {
        matches!(self, Self::Start | Self::StartAccepting)
    }

    /// Whether the marker designates an accepting state.
    #[inline]
    pub fn is_accepting(self) -> bool {
        matches!(self, Self::Accepting | Self::StartAccepting)
    }

    /// Canonical spelling used when rendering.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ordinary => "",
            Self::Accepting => "+",
            Self::Start => "-",
            Self::StartAccepting => "-+",
        }
    }
}

impl Serialize for Marker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of a transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Start/accepting marker
    pub marker: Marker,
    /// Source state
    pub state: State,
    /// Successors on the first and second alphabet symbol
    pub targets: [State; ALPHABET_SIZE],
}

impl fmt::Display for TableRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},{},{},{}",
            self.marker, self.state, self.targets[0], self.targets[1]
        )
    }
}

impl Automaton {
    /// The transition table, one row per state, start state first.
    pub fn table(&self) -> Vec<TableRow> {
        let start = self.start_state();
        self.states
            .iter()
            .zip(&self.transitions)
            .map(|(&state, &targets)| TableRow {
                marker: Marker::from_roles(state == start, self.is_accepting(state)),
                state,
                targets,
            })
            .collect()
    }
}

impl fmt::Display for Automaton {
    /// Renders the automaton in definition format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{},{}", self.alphabet[0], self.alphabet[1])?;
        for row in self.table() {
            writeln!(f, "{row}")?;
        }
        Ok(())
    }
}
