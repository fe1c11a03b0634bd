//! Shared generators for picker property tests.

use proptest::prelude::*;

use tzpick::picker::{Command, QueryEdit};

const AREAS: &[&str] = &["Africa", "America", "Asia", "Europe", "Pacific"];
const PLACES: &[&str] = &[
    "Lagos", "Cairo", "Denver", "Lima", "Tokyo", "Seoul", "Paris", "Oslo", "Fiji", "Guam",
    "Indiana/Knox", "Kentucky/Monticello",
];
const UNGROUPED: &[&str] = &["UTC", "GMT"];
const QUERY_PIECES: &[&str] = &["a", "o", "e", "i", "/", "N", "lo", "x"];

/// A sorted catalog of distinct `Area/Place` entries, with the occasional
/// entry that has no separator.
pub fn catalog() -> impl Strategy<Value = Vec<String>> {
    let zoned = (prop::sample::select(AREAS), prop::sample::select(PLACES))
        .prop_map(|(area, place)| format!("{area}/{place}"));
    let entry = prop_oneof![
        8 => zoned,
        1 => prop::sample::select(UNGROUPED).prop_map(str::to_string),
    ];
    prop::collection::btree_set(entry, 0..24).prop_map(|set| set.into_iter().collect())
}

/// A subset of `catalog` plus possibly `Local`, in arbitrary order
pub fn initial_selection(catalog: Vec<String>) -> impl Strategy<Value = Vec<String>> {
    let mut pool = catalog;
    pool.push("Local".to_string());
    prop::sample::subsequence(pool.clone(), 0..=pool.len()).prop_shuffle()
}

pub fn query_edit() -> impl Strategy<Value = QueryEdit> {
    prop_oneof![
        3 => prop::sample::select(QUERY_PIECES).prop_map(|s| QueryEdit::Append(s.to_string())),
        1 => Just(QueryEdit::Backspace),
    ]
}

pub fn command() -> impl Strategy<Value = Command> {
    prop_oneof![
        4 => Just(Command::MoveUp),
        4 => Just(Command::MoveDown),
        1 => Just(Command::MoveSelectedUp),
        1 => Just(Command::MoveSelectedDown),
        3 => Just(Command::ToggleSelection),
        2 => Just(Command::ToggleExpand),
        1 => Just(Command::RemoveSelected),
        2 => Just(Command::SwitchPane),
        1 => Just(Command::EnterSearch),
        1 => any::<bool>().prop_map(|keep_expansion| Command::ExitSearch { keep_expansion }),
        3 => query_edit().prop_map(Command::EditQuery),
        1 => Just(Command::CommitSearchMatch),
    ]
}

/// Catalog, a valid initial selection, and a command stream
pub fn session_input() -> impl Strategy<Value = (Vec<String>, Vec<String>, Vec<Command>)> {
    catalog().prop_flat_map(|catalog| {
        let selection = initial_selection(catalog.clone());
        (
            Just(catalog),
            selection,
            prop::collection::vec(command(), 0..64),
        )
    })
}
