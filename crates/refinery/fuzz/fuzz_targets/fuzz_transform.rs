//! Fuzz target for the transformation engine.
//!
//! The first bytes pick actions from the catalog; the rest is parsed as CSV.
//! Applying any action list to any table must not panic or touch the input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use refinery::{Action, ChoiceStore, Parser, TransformEngine};

fuzz_target!(|data: &[u8]| {
    let Some((&count, rest)) = data.split_first() else {
        return;
    };
    let count = (count as usize % 8).min(rest.len());
    let (selectors, csv) = rest.split_at(count);

    let input = String::from_utf8_lossy(csv);
    let Ok(table) = Parser::new().parse_str(&input) else {
        return;
    };

    let mut choices = ChoiceStore::new();
    for (i, name) in table.column_names().into_iter().enumerate() {
        let actions: Vec<Action> = selectors
            .iter()
            .skip(i % selectors.len().max(1))
            .map(|b| Action::ALL[*b as usize % Action::ALL.len()])
            .collect();
        choices.set(name, actions);
    }

    let before = table.clone();
    let outcome = TransformEngine::new().apply(&table, &choices);
    assert_eq!(table, before);
    for column in outcome.table.columns() {
        assert_eq!(column.len(), outcome.table.row_count());
    }
});
