//! # dfa-check
//!
//! Validate strings against deterministic finite automata over a
//! two-symbol alphabet, described in a small plain-text format.
//!
//! The pipeline has three stages:
//!
//! 1. [`parser::parse_definition`] turns definition text into a validated
//!    [`Automaton`], or reports the first rule the text violates.
//! 2. [`Automaton`] answers single-step transition and acceptance queries.
//! 3. [`matcher::check_multiple`] decides membership for a batch of
//!    candidate strings, one verdict per string, in input order.
//!
//! ## Example
//!
//! ```rust
//! use dfa_check::prelude::*;
//!
//! // Strings over {0,1} with an even number of 1s
//! let dfa = parse_definition("0,1\n-+,A,A,B\n,B,A,B\n").unwrap();
//!
//! let inputs = ["", "0", "1", "10", "11", "101", "2"];
//! let verdicts = check_multiple(&inputs, &dfa);
//! assert_eq!(verdicts, [true, true, false, true, false, true, false]);
//!
//! assert_eq!(render_verdicts(&verdicts[..2]), "VALID\nVALID\n");
//! ```
//!
//! The library performs no I/O of its own. The `dfa-check` binary (feature
//! `cli`) reads definition and input files and writes result files.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod automaton;
pub mod matcher;
pub mod parser;
pub mod session;

/// Command-line front end
#[cfg(feature = "cli")]
pub mod cli;

pub use automaton::{Automaton, AutomatonError, State, Symbol};

/// Common imports for convenient usage
pub mod prelude {
    pub use crate::automaton::{Automaton, AutomatonError, Marker, State, Symbol, TableRow};
    #[cfg(feature = "rayon")]
    pub use crate::matcher::check_multiple_parallel;
    pub use crate::matcher::{
        check_multiple, is_valid, render_verdicts, split_candidates, write_verdicts, Verdict,
    };
    pub use crate::parser::{
        parse_definition, DefinitionError, FormatError, StateDeclarationError,
    };
    pub use crate::session::{Outcome, Session, SessionError};
}
