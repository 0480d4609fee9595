// Property-based tests for definition parsing and batch matching.
//
// Definitions are generated as a plain table model, rendered to text, parsed,
// and the resulting automaton is compared against a direct simulation of the
// model.

use dfa_check::prelude::*;
use proptest::prelude::*;
use std::collections::HashMap;

// ============================================================================
// GENERATORS
// ============================================================================

/// A definition before rendering: alphabet, rows in source order, start row.
#[derive(Debug, Clone)]
struct Model {
    alphabet: [char; 2],
    /// (name, accepting, target on symbol 0, target on symbol 1)
    rows: Vec<(char, bool, char, char)>,
    start: usize,
}

impl Model {
    fn render(&self) -> String {
        let mut text = format!("{},{}\n", self.alphabet[0], self.alphabet[1]);
        for (i, &(name, accepting, t0, t1)) in self.rows.iter().enumerate() {
            let marker = match (i == self.start, accepting) {
                (true, true) => "-+",
                (true, false) => "-",
                (false, true) => "+",
                (false, false) => "",
            };
            text.push_str(&format!("{marker},{name},{t0},{t1}\n"));
        }
        text
    }

    fn simulate(&self, input: &str) -> bool {
        let table: HashMap<char, (bool, char, char)> = self
            .rows
            .iter()
            .map(|&(name, accepting, t0, t1)| (name, (accepting, t0, t1)))
            .collect();
        let mut current = self.rows[self.start].0;
        for c in input.chars() {
            let (_, t0, t1) = table[&current];
            current = if c == self.alphabet[0] {
                t0
            } else if c == self.alphabet[1] {
                t1
            } else {
                return false;
            };
        }
        table[&current].0
    }
}

fn alphabet() -> impl Strategy<Value = [char; 2]> {
    let symbols = prop::sample::select(vec!['0', '1', 'a', 'b', 'x', 'é', '#', ' ']);
    (symbols.clone(), symbols)
        .prop_filter("symbols must differ", |(a, b)| a != b)
        .prop_map(|(a, b)| [a, b])
}

fn model() -> impl Strategy<Value = Model> {
    (alphabet(), 1usize..=26).prop_flat_map(|(alphabet, n)| {
        let names = Just(('A'..='Z').chain(['Ä', 'Σ', 'Ж']).collect::<Vec<char>>())
            .prop_shuffle()
            .prop_map(move |mut letters| {
                letters.truncate(n);
                letters
            });
        (
            Just(alphabet),
            names,
            prop::collection::vec((any::<bool>(), 0..n, 0..n), n),
            0..n,
        )
            .prop_map(|(alphabet, names, rows, start)| Model {
                alphabet,
                rows: rows
                    .iter()
                    .zip(&names)
                    .map(|(&(accepting, t0, t1), &name)| (name, accepting, names[t0], names[t1]))
                    .collect(),
                start,
            })
    })
}

fn input_for(alphabet: [char; 2]) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(alphabet.to_vec()), 0..40)
        .prop_map(|chars| chars.into_iter().collect())
}

// ============================================================================
// PARSING
// ============================================================================

proptest! {
    #[test]
    fn parsed_automaton_is_total_and_closed(model in model()) {
        let dfa = parse_definition(&model.render()).unwrap();
        prop_assert_eq!(dfa.num_states(), model.rows.len());
        for &state in dfa.states() {
            for symbol in dfa.alphabet() {
                let target = dfa.step(state, symbol).unwrap();
                prop_assert!(dfa.contains_state(target));
            }
        }
    }

    #[test]
    fn start_state_comes_first(model in model()) {
        let dfa = parse_definition(&model.render()).unwrap();
        let start = State::new(model.rows[model.start].0).unwrap();
        prop_assert_eq!(dfa.start_state(), start);

        let others: Vec<char> = model
            .rows
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != model.start)
            .map(|(_, row)| row.0)
            .collect();
        let parsed: Vec<char> = dfa.states()[1..].iter().map(|s| s.name()).collect();
        prop_assert_eq!(parsed, others);
    }

    #[test]
    fn reparsing_is_idempotent(model in model()) {
        let text = model.render();
        let first = parse_definition(&text).unwrap();
        let second = parse_definition(&text).unwrap();
        prop_assert_eq!(&first, &second);

        let rendered = parse_definition(&first.to_string()).unwrap();
        prop_assert_eq!(first, rendered);
    }

    #[test]
    fn missing_start_marker_fails(model in model()) {
        let mut text = format!("{},{}\n", model.alphabet[0], model.alphabet[1]);
        for &(name, accepting, t0, t1) in &model.rows {
            let marker = if accepting { "+" } else { "" };
            text.push_str(&format!("{marker},{name},{t0},{t1}\n"));
        }
        prop_assert_eq!(
            parse_definition(&text),
            Err(StateDeclarationError::NoStartState.into())
        );
    }

    #[test]
    fn second_start_marker_fails(model in model().prop_filter("two rows", |m| m.rows.len() >= 2)) {
        let second = (model.start + 1) % model.rows.len();
        let mut lines: Vec<String> = model.render().lines().map(str::to_owned).collect();
        // Row i is on line index i + 1
        let row = model.rows[second];
        lines[second + 1] = format!("-,{},{},{}", row.0, row.2, row.3);
        let text = lines.join("\n");

        let err = parse_definition(&text).unwrap_err();
        let is_duplicate_start = matches!(
            err,
            DefinitionError::StateDeclaration(StateDeclarationError::DuplicateStart { .. })
        );
        prop_assert!(is_duplicate_start);
        prop_assert_eq!(err.line(), Some(model.start.max(second) + 2));
    }
}

// ============================================================================
// MATCHING
// ============================================================================

proptest! {
    #[test]
    fn matching_agrees_with_model(
        (model, inputs) in model().prop_flat_map(|m| {
            let inputs = prop::collection::vec(input_for(m.alphabet), 0..20);
            (Just(m), inputs)
        })
    ) {
        let dfa = parse_definition(&model.render()).unwrap();
        let verdicts = check_multiple(&inputs, &dfa);
        prop_assert_eq!(verdicts.len(), inputs.len());
        for (input, verdict) in inputs.iter().zip(&verdicts) {
            prop_assert_eq!(*verdict, model.simulate(input));
            prop_assert_eq!(*verdict, is_valid(input, &dfa));
        }
    }

    #[test]
    fn empty_string_follows_start_state(model in model()) {
        let dfa = parse_definition(&model.render()).unwrap();
        prop_assert_eq!(is_valid("", &dfa), dfa.is_accepting(dfa.start_state()));
    }

    #[test]
    fn foreign_character_always_rejected(
        (model, prefix, suffix) in model().prop_flat_map(|m| {
            let prefix = input_for(m.alphabet);
            let suffix = input_for(m.alphabet);
            (Just(m), prefix, suffix)
        }),
        foreign in prop::sample::select(vec!['2', 'z', 'Ω', '\t', 'B']),
    ) {
        prop_assume!(!model.alphabet.contains(&foreign));
        let dfa = parse_definition(&model.render()).unwrap();
        let input = format!("{prefix}{foreign}{suffix}");
        prop_assert!(!is_valid(&input, &dfa));
    }

    #[test]
    fn batch_order_is_input_order(
        (model, inputs) in model().prop_flat_map(|m| {
            let inputs = prop::collection::vec(input_for(m.alphabet), 0..20);
            (Just(m), inputs)
        })
    ) {
        let dfa = parse_definition(&model.render()).unwrap();
        let forward = check_multiple(&inputs, &dfa);

        let mut reversed_inputs = inputs.clone();
        reversed_inputs.reverse();
        let mut backward = check_multiple(&reversed_inputs, &dfa);
        backward.reverse();

        prop_assert_eq!(forward, backward);
    }
}
