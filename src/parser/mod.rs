//! Parser for the plain-text automaton definition format.
//!
//! # Format
//!
//! ```text
//! 0,1
//! -+,A,A,B
//! ,B,A,B
//! ```
//!
//! Line 1 lists the two input symbols. Every following line declares one
//! state as `marker,name,target0,target1`, where `target0`/`target1` are the
//! successors on the first/second symbol and `marker` is one of:
//!
//! | Marker        | Meaning               |
//! |---------------|-----------------------|
//! | *(empty)*     | ordinary state        |
//! | `+`           | accepting state       |
//! | `-`           | start state           |
//! | `-+` or `+-`  | accepting start state |
//!
//! There is no quoting, escaping or comment syntax.
//!
//! # Validation order
//!
//! The alphabet line is checked first. State lines are then checked top to
//! bottom; on each line the field count comes first, then the marker, then
//! the state name. Transition targets are resolved only once every line has
//! been read, starting with the start state's line and continuing in source
//! order. A missing start state is reported last.

mod error;
mod row;

pub use error::{DefinitionError, FormatError, Result, StateDeclarationError};

use crate::automaton::{Automaton, State, Symbol, ALPHABET_SIZE};
use row::StateRow;
use std::collections::HashSet;
use std::str::FromStr;
use tracing::{debug, trace};

/// Parse and validate an automaton definition.
///
/// # Errors
///
/// Returns the first rule violation found; no automaton is produced in that
/// case.
///
/// # Example
///
/// ```
/// use dfa_check::parser::parse_definition;
///
/// let dfa = parse_definition("0,1\n-+,A,A,B\n,B,A,B\n").unwrap();
/// assert_eq!(dfa.num_states(), 2);
/// assert!(dfa.is_accepting(dfa.start_state()));
/// ```
pub fn parse_definition(text: &str) -> Result<Automaton> {
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (_, alphabet_line) = lines.next().ok_or(FormatError::MissingAlphabet)?;
    let alphabet = parse_alphabet(alphabet_line)?;

    let mut rows: Vec<StateRow<'_>> = Vec::new();
    let mut start: Option<usize> = None;
    let mut declared: HashSet<State> = HashSet::new();

    for (line, content) in lines {
        let row = StateRow::parse(line, content, start.is_some())?;
        trace!(line, state = %row.name, marker = %row.marker, "state line");

        if !declared.insert(row.name) {
            return Err(StateDeclarationError::DuplicateName {
                line,
                name: row.name,
            }
            .into());
        }

        if row.marker.is_start() {
            start = Some(rows.len());
        }
        rows.push(row);
    }

    // The start row leads, both for target resolution and in `states()`
    if let Some(start) = start {
        let start_row = rows.remove(start);
        rows.insert(0, start_row);
    }

    let mut resolved = Vec::with_capacity(rows.len());
    for row in &rows {
        let mut targets = [row.name; ALPHABET_SIZE];
        for (slot, target) in targets.iter_mut().zip(row.targets) {
            *slot = State::parse(target)
                .filter(|state| declared.contains(state))
                .ok_or_else(|| DefinitionError::UnknownTransitionTarget {
                    line: row.line,
                    state: row.name,
                    target: target.to_string(),
                })?;
        }
        resolved.push((row.name, row.marker.is_accepting(), targets));
    }

    if start.is_none() {
        return Err(StateDeclarationError::NoStartState.into());
    }

    let automaton = Automaton::from_validated(alphabet, resolved);
    debug!(
        states = automaton.num_states(),
        start = %automaton.start_state(),
        "parsed automaton definition"
    );
    Ok(automaton)
}

/// Check the alphabet line: two distinct single-character fields.
fn parse_alphabet(line: &str) -> Result<[Symbol; ALPHABET_SIZE]> {
    let fields: Vec<&str> = line.split(',').collect();

    if fields.len() != ALPHABET_SIZE {
        return Err(FormatError::SymbolCount {
            found: fields.len(),
        }
        .into());
    }
    if fields[0] == fields[1] {
        return Err(FormatError::DuplicateSymbol {
            symbol: fields[0].to_string(),
        }
        .into());
    }

    let mut alphabet = ['\0'; ALPHABET_SIZE];
    for (symbol, field) in alphabet.iter_mut().zip(&fields) {
        let mut chars = field.chars();
        *symbol = match (chars.next(), chars.next()) {
            (Some(c), None) => c,
            _ => {
                return Err(FormatError::InvalidSymbol {
                    symbol: field.to_string(),
                }
                .into())
            }
        };
    }
    Ok(alphabet)
}

impl FromStr for Automaton {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self> {
        parse_definition(s)
    }
}
