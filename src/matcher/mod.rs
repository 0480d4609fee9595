//! Batch membership checks against a validated automaton.
//!
//! Every candidate is evaluated independently: a rejected string, including
//! one with characters outside the alphabet, never affects the verdicts of
//! the others.

mod verdict;

pub use verdict::{render_verdicts, split_candidates, write_verdicts, Verdict};

use crate::automaton::Automaton;
use tracing::{debug, error};

/// Decide whether `input` belongs to the language of `automaton`.
///
/// A character outside the alphabet rejects the string immediately. The
/// empty string is accepted iff the start state is accepting.
///
/// # Example
///
/// ```
/// use dfa_check::matcher::is_valid;
/// use dfa_check::parser::parse_definition;
///
/// let dfa = parse_definition("0,1\n-+,A,A,B\n,B,A,B\n").unwrap();
/// assert!(is_valid("1001", &dfa));
/// assert!(!is_valid("10a", &dfa));
/// ```
pub fn is_valid(input: &str, automaton: &Automaton) -> bool {
    let mut current = automaton.start_state();

    for symbol in input.chars() {
        if !automaton.contains_symbol(symbol) {
            return false;
        }
        current = match automaton.step(current, symbol) {
            Ok(next) => next,
            Err(err) => {
                // Reachable states and checked symbols always have a successor
                debug_assert!(false, "transition failed on a validated automaton: {err}");
                error!(%err, "transition failed on a validated automaton");
                return false;
            }
        };
    }

    automaton.is_accepting(current)
}

/// Check every candidate, returning one verdict per input in input order.
pub fn check_multiple<S: AsRef<str>>(inputs: &[S], automaton: &Automaton) -> Vec<bool> {
    let verdicts: Vec<bool> = inputs
        .iter()
        .map(|input| is_valid(input.as_ref(), automaton))
        .collect();
    log_batch(&verdicts);
    verdicts
}

/// Parallel variant of [`check_multiple`].
///
/// Candidates are evaluated on the rayon thread pool. The result is identical
/// to the sequential version, in input order.
#[cfg(feature = "rayon")]
pub fn check_multiple_parallel<S>(inputs: &[S], automaton: &Automaton) -> Vec<bool>
where
    S: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    let verdicts: Vec<bool> = inputs
        .par_iter()
        .map(|input| is_valid(input.as_ref(), automaton))
        .collect();
    log_batch(&verdicts);
    verdicts
}

fn log_batch(verdicts: &[bool]) {
    debug!(
        candidates = verdicts.len(),
        accepted = verdicts.iter().filter(|&&valid| valid).count(),
        "checked batch"
    );
}
