//! Typed state-line records.

use super::error::StateDeclarationError;
use crate::automaton::{Marker, State, ALPHABET_SIZE};

/// Fields per state line: marker, name and one target per symbol.
pub(crate) const STATE_LINE_FIELDS: usize = 2 + ALPHABET_SIZE;

/// A state line whose positional fields have all been checked.
///
/// Targets stay as written until every line is read, since a target may
/// name a state declared further down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StateRow<'a> {
    pub line: usize,
    pub marker: Marker,
    pub name: State,
    pub targets: [&'a str; ALPHABET_SIZE],
}

impl<'a> StateRow<'a> {
    /// Split and check one state line.
    ///
    /// `start_seen` tells whether an earlier line already carried a start
    /// marker. Checks run in a fixed order: field count, marker, name.
    pub fn parse(
        line: usize,
        text: &'a str,
        start_seen: bool,
    ) -> Result<Self, StateDeclarationError> {
        let fields: Vec<&'a str> = text.split(',').collect();

        if fields.len() < 2 {
            return Err(StateDeclarationError::MissingFields {
                line,
                found: fields.len(),
            });
        }
        if fields.len() != STATE_LINE_FIELDS {
            return Err(StateDeclarationError::FieldCount {
                line,
                found: fields.len(),
            });
        }

        let marker = Marker::parse(fields[0]).ok_or_else(|| StateDeclarationError::InvalidMarker {
            line,
            marker: fields[0].to_string(),
        })?;
        if marker.is_start() && start_seen {
            return Err(StateDeclarationError::DuplicateStart {
                line,
                state: fields[1].to_string(),
            });
        }

        let name = State::parse(fields[1]).ok_or_else(|| StateDeclarationError::InvalidName {
            line,
            name: fields[1].to_string(),
        })?;

        Ok(Self {
            line,
            marker,
            name,
            targets: [fields[2], fields[3]],
        })
    }
}
