//! State and symbol types for two-symbol automata.

use serde::Serialize;
use std::fmt;

/// An input symbol: a single character of an automaton's alphabet.
pub type Symbol = char;

/// Number of symbols in every alphabet.
pub const ALPHABET_SIZE: usize = 2;

/// A state identifier: a single uppercase letter, e.g. `A`, `Q` or `Ä`.
///
/// A `State` value only guarantees that the identifier is well formed. Whether
/// it names a state of a particular [`Automaton`](super::Automaton) is a
/// separate question answered by [`Automaton::contains_state`](super::Automaton::contains_state).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "char")]
pub struct State(char);

impl State {
    /// Create a state identifier from a character.
    ///
    /// Returns `None` unless `name` is an uppercase letter.
    pub fn new(name: char) -> Option<Self> {
        name.is_uppercase().then_some(Self(name))
    }

    /// Parse a state identifier from a field of a definition line.
    ///
    /// The field must be exactly one uppercase letter.
    pub fn parse(field: &str) -> Option<Self> {
        let mut chars = field.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::new(c),
            _ => None,
        }
    }

    /// The identifier character.
    #[inline]
    pub fn name(self) -> char {
        self.0
    }
}

impl From<State> for char {
    fn from(state: State) -> Self {
        state.0
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
