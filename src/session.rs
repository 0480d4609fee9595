//! Calling-layer state for interactive front ends.
//!
//! A [`Session`] remembers the last automaton that loaded successfully and
//! the current candidate list, so a front end can keep working with a good
//! definition after the user loads a broken one. The core modules stay
//! stateless; a session is an ordinary owned value.

use crate::automaton::Automaton;
use crate::matcher::{check_multiple, split_candidates};
use crate::parser::{parse_definition, DefinitionError};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors reported by [`Session`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// A definition failed to parse.
    ///
    /// `fallback` names the previously loaded definition that stays in use,
    /// if there is one.
    #[error("{name}: invalid definition: {source}")]
    DefinitionRejected {
        /// Name of the rejected definition
        name: String,
        /// Why it was rejected
        #[source]
        source: DefinitionError,
        /// Name of the definition still in use
        fallback: Option<String>,
    },

    /// Nothing to match against: no definition has loaded successfully.
    #[error("no valid automaton loaded")]
    NoDefinition,

    /// No candidate strings have been loaded.
    #[error("no input strings loaded")]
    NoCandidates,
}

/// A successfully parsed definition and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedDefinition {
    /// Source name, e.g. a file name
    pub name: String,
    /// The automaton
    pub automaton: Automaton,
}

/// Candidate strings and where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidates {
    /// Source name, e.g. a file name
    pub name: String,
    /// One entry per input line
    pub strings: Vec<String>,
}

/// Result of [`Session::process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Definition the candidates were checked against
    pub definition: String,
    /// Source of the candidates
    pub input: String,
    /// One verdict per candidate, in input order
    pub verdicts: Vec<bool>,
}

/// Last good automaton plus the current candidates.
#[derive(Debug, Clone, Default)]
pub struct Session {
    definition: Option<LoadedDefinition>,
    candidates: Option<Candidates>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a definition and make it current.
    ///
    /// On failure the previously loaded automaton, if any, stays current.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DefinitionRejected`] when `text` is not a valid
    /// definition.
    pub fn load_definition(
        &mut self,
        name: impl Into<String>,
        text: &str,
    ) -> Result<&Automaton, SessionError> {
        let name = name.into();
        match parse_definition(text) {
            Ok(automaton) => {
                debug!(%name, "definition loaded");
                let loaded = self.definition.insert(LoadedDefinition { name, automaton });
                Ok(&loaded.automaton)
            }
            Err(source) => {
                let fallback = self.definition.as_ref().map(|d| d.name.clone());
                warn!(%name, error = %source, ?fallback, "definition rejected");
                Err(SessionError::DefinitionRejected {
                    name,
                    source,
                    fallback,
                })
            }
        }
    }

    /// Replace the current candidates with the lines of `text`.
    pub fn load_candidates(&mut self, name: impl Into<String>, text: &str) -> &[String] {
        let strings = split_candidates(text)
            .into_iter()
            .map(str::to_owned)
            .collect();
        let candidates = self.candidates.insert(Candidates {
            name: name.into(),
            strings,
        });
        &candidates.strings
    }

    /// The current definition, if one has loaded successfully.
    pub fn definition(&self) -> Option<&LoadedDefinition> {
        self.definition.as_ref()
    }

    /// The current candidates.
    pub fn candidates(&self) -> Option<&Candidates> {
        self.candidates.as_ref()
    }

    /// Check the current candidates against the current automaton.
    ///
    /// # Errors
    ///
    /// [`SessionError::NoDefinition`] if no automaton is available and
    /// [`SessionError::NoCandidates`] if no input is loaded.
    pub fn process(&self) -> Result<Outcome, SessionError> {
        self.process_with(check_multiple)
    }

    /// Like [`process`](Self::process), with a caller-chosen batch strategy
    /// such as `check_multiple_parallel`.
    pub fn process_with<F>(&self, check: F) -> Result<Outcome, SessionError>
    where
        F: FnOnce(&[String], &Automaton) -> Vec<bool>,
    {
        let definition = self.definition.as_ref().ok_or(SessionError::NoDefinition)?;
        let candidates = self.candidates.as_ref().ok_or(SessionError::NoCandidates)?;

        Ok(Outcome {
            definition: definition.name.clone(),
            input: candidates.name.clone(),
            verdicts: check(&candidates.strings, &definition.automaton),
        })
    }
}
