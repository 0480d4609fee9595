//! Validated two-symbol deterministic finite automata.
//!
//! An [`Automaton`] can only be obtained from [`parse_definition`](crate::parser::parse_definition),
//! which checks every structural rule up front. Once built it is immutable,
//! so the invariants below hold for its whole lifetime and are never
//! re-checked:
//!
//! - the alphabet holds two distinct single-character symbols
//! - `states()[0]` is the unique start state
//! - every state has exactly one transition per symbol (totality)
//! - every transition target is a declared state (closure)

mod state;
mod table;

pub use state::{State, Symbol, ALPHABET_SIZE};
pub use table::{Marker, TableRow};

use std::collections::HashMap;
use thiserror::Error;

/// Invalid arguments passed to [`Automaton::step`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AutomatonError {
    /// The state is not declared by this automaton.
    #[error("{0} is not a state of this automaton")]
    UnknownState(State),

    /// The symbol is not part of this automaton's alphabet.
    #[error("{0:?} is not a symbol of this automaton's alphabet")]
    UnknownSymbol(Symbol),
}

/// A validated deterministic finite automaton over a two-symbol alphabet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    /// Input symbols, in declaration order
    alphabet: [Symbol; ALPHABET_SIZE],
    /// Declared states, start state first
    states: Vec<State>,
    /// Successors of `states[i]` on `alphabet[0]` and `alphabet[1]`
    transitions: Vec<[State; ALPHABET_SIZE]>,
    /// Whether `states[i]` is accepting
    accepting: Vec<bool>,
    /// State -> position in `states`
    index: HashMap<State, usize>,
}

impl Automaton {
    /// Assemble an automaton from already validated parts.
    ///
    /// Callers guarantee the invariants listed in the module docs; the
    /// parser is the only caller.
    pub(crate) fn from_validated(
        alphabet: [Symbol; ALPHABET_SIZE],
        rows: Vec<(State, bool, [State; ALPHABET_SIZE])>,
    ) -> Self {
        let mut states = Vec::with_capacity(rows.len());
        let mut transitions = Vec::with_capacity(rows.len());
        let mut accepting = Vec::with_capacity(rows.len());
        let mut index = HashMap::with_capacity(rows.len());

        for (position, (state, is_accepting, targets)) in rows.into_iter().enumerate() {
            index.insert(state, position);
            states.push(state);
            accepting.push(is_accepting);
            transitions.push(targets);
        }

        debug_assert_eq!(index.len(), states.len());
        debug_assert!(transitions
            .iter()
            .flatten()
            .all(|target| index.contains_key(target)));

        Self {
            alphabet,
            states,
            transitions,
            accepting,
            index,
        }
    }

    /// The two input symbols, in the order they were declared.
    #[inline]
    pub fn alphabet(&self) -> [Symbol; ALPHABET_SIZE] {
        self.alphabet
    }

    /// All states, start state first, the rest in source order.
    #[inline]
    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// Number of declared states.
    #[inline]
    pub fn num_states(&self) -> usize {
        self.states.len()
    }

    /// The designated start state.
    #[inline]
    pub fn start_state(&self) -> State {
        self.states[0]
    }

    /// Accepting states, in `states()` order.
    pub fn accepting_states(&self) -> impl Iterator<Item = State> + '_ {
        self.states
            .iter()
            .copied()
            .filter(move |&state| self.is_accepting(state))
    }

    /// Whether `state` is an accepting state.
    ///
    /// Defined for every well-formed identifier: states this automaton does
    /// not declare are simply not accepting.
    #[inline]
    pub fn is_accepting(&self, state: State) -> bool {
        self.position(state).is_some_and(|position| self.accepting[position])
    }

    /// Whether `state` is declared by this automaton.
    #[inline]
    pub fn contains_state(&self, state: State) -> bool {
        self.index.contains_key(&state)
    }

    #[inline]
    fn position(&self, state: State) -> Option<usize> {
        self.index.get(&state).copied()
    }

    /// Whether `symbol` belongs to the alphabet.
    #[inline]
    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        self.symbol_index(symbol).is_some()
    }

    #[inline]
    fn symbol_index(&self, symbol: Symbol) -> Option<usize> {
        self.alphabet.iter().position(|&s| s == symbol)
    }

    /// Follow the transition from `state` on `symbol`.
    ///
    /// # Errors
    ///
    /// Returns [`AutomatonError::UnknownState`] if `state` is not declared and
    /// [`AutomatonError::UnknownSymbol`] if `symbol` is outside the alphabet.
    pub fn step(&self, state: State, symbol: Symbol) -> Result<State, AutomatonError> {
        let position = self
            .position(state)
            .ok_or(AutomatonError::UnknownState(state))?;
        let column = self
            .symbol_index(symbol)
            .ok_or(AutomatonError::UnknownSymbol(symbol))?;
        Ok(self.transitions[position][column])
    }

    /// Every transition as `(source, symbol, target)`, grouped by source in
    /// `states()` order.
    pub fn transitions(&self) -> impl Iterator<Item = (State, Symbol, State)> + '_ {
        self.states
            .iter()
            .zip(&self.transitions)
            .flat_map(move |(&source, targets)| {
                self.alphabet
                    .iter()
                    .zip(targets)
                    .map(move |(&symbol, &target)| (source, symbol, target))
            })
    }

    /// Successors of `state` on both symbols, if `state` is declared.
    pub fn targets(&self, state: State) -> Option<[State; ALPHABET_SIZE]> {
        self.position(state).map(|position| self.transitions[position])
    }
}
