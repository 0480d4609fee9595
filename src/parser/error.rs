//! Error types for automaton definition parsing.

use crate::automaton::State;
use thiserror::Error;

/// A definition that could not be turned into an automaton.
///
/// Parsing stops at the first violation, so exactly one error is reported
/// per definition.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DefinitionError {
    /// The alphabet line (line 1) is malformed.
    #[error("invalid alphabet line: {0}")]
    Format(#[from] FormatError),

    /// A state line is malformed, or the start state is missing or repeated.
    #[error(transparent)]
    StateDeclaration(#[from] StateDeclarationError),

    /// A transition names a state that is never declared.
    #[error("line {line}: state {state} has a transition to undeclared state {target:?}")]
    UnknownTransitionTarget {
        /// Line declaring the transition
        line: usize,
        /// Source state of the transition
        state: State,
        /// The undeclared target, as written
        target: String,
    },
}

impl DefinitionError {
    /// The 1-based line the violation was found on, if it belongs to one.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Format(FormatError::MissingAlphabet) => None,
            Self::Format(_) => Some(1),
            Self::StateDeclaration(err) => err.line(),
            Self::UnknownTransitionTarget { line, .. } => Some(*line),
        }
    }

    /// The offending field, as written in the definition.
    pub fn token(&self) -> Option<String> {
        match self {
            Self::Format(FormatError::DuplicateSymbol { symbol })
            | Self::Format(FormatError::InvalidSymbol { symbol }) => Some(symbol.clone()),
            Self::Format(_) => None,
            Self::StateDeclaration(err) => err.token(),
            Self::UnknownTransitionTarget { target, .. } => Some(target.clone()),
        }
    }
}

/// Violations on the alphabet line.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The definition has no lines at all.
    #[error("definition is empty")]
    MissingAlphabet,

    /// The alphabet line does not have exactly two fields.
    #[error("expected 2 input symbols, found {found}")]
    SymbolCount {
        /// Number of comma-separated fields found
        found: usize,
    },

    /// Both alphabet fields are the same.
    #[error("input symbols must differ, both are {symbol:?}")]
    DuplicateSymbol {
        /// The repeated field
        symbol: String,
    },

    /// An alphabet field is not exactly one character.
    #[error("{symbol:?} is not a single-character input symbol")]
    InvalidSymbol {
        /// The offending field
        symbol: String,
    },
}

/// Violations in the state lines.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StateDeclarationError {
    /// Fewer than two fields: the marker or the state name is absent.
    #[error("line {line}: expected a marker and a state name, found {found} field(s)")]
    MissingFields {
        /// Line number
        line: usize,
        /// Number of fields found
        found: usize,
    },

    /// The line does not have exactly four fields.
    #[error("line {line}: expected 4 fields (marker, state, 2 transitions), found {found}")]
    FieldCount {
        /// Line number
        line: usize,
        /// Number of fields found
        found: usize,
    },

    /// The marker is not one of `""`, `+`, `-`, `-+`, `+-`.
    #[error("line {line}: invalid state marker {marker:?}")]
    InvalidMarker {
        /// Line number
        line: usize,
        /// The marker as written
        marker: String,
    },

    /// A second start marker was found.
    #[error("line {line}: duplicate start state {state:?}")]
    DuplicateStart {
        /// Line of the second start marker
        line: usize,
        /// State name on that line, as written
        state: String,
    },

    /// The state name is not a single uppercase letter.
    #[error("line {line}: invalid state {name:?}, expected a single uppercase letter")]
    InvalidName {
        /// Line number
        line: usize,
        /// The name as written
        name: String,
    },

    /// The state name was already declared on an earlier line.
    #[error("line {line}: state {name} is already declared")]
    DuplicateName {
        /// Line of the repeated declaration
        line: usize,
        /// The repeated state
        name: State,
    },

    /// No line carries a start marker.
    #[error("no start state declared")]
    NoStartState,
}

impl StateDeclarationError {
    /// The 1-based line the violation was found on.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MissingFields { line, .. }
            | Self::FieldCount { line, .. }
            | Self::InvalidMarker { line, .. }
            | Self::DuplicateStart { line, .. }
            | Self::InvalidName { line, .. }
            | Self::DuplicateName { line, .. } => Some(*line),
            Self::NoStartState => None,
        }
    }

    /// The offending field, as written.
    pub fn token(&self) -> Option<String> {
        match self {
            Self::InvalidMarker { marker, .. } => Some(marker.clone()),
            Self::DuplicateStart { state, .. } => Some(state.clone()),
            Self::InvalidName { name, .. } => Some(name.clone()),
            Self::DuplicateName { name, .. } => Some(name.to_string()),
            Self::MissingFields { .. } | Self::FieldCount { .. } | Self::NoStartState => None,
        }
    }
}

/// A specialized `Result` type for definition parsing.
pub type Result<T> = std::result::Result<T, DefinitionError>;
