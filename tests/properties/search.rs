//! Property tests for search mode.

use proptest::prelude::*;

use tzpick::picker::{Command, QueryEdit, SessionState};

use super::strategies::{query_edit, session_input};

const LETTERS: &[&str] = &["a", "e", "o", "/"];

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the search cursor is 0 without matches, otherwise it
    /// points at a match.
    #[test]
    fn property_search_cursor_in_bounds((catalog, initial, commands) in session_input()) {
        let mut state = SessionState::begin(&catalog, &initial);
        for command in commands {
            state.apply(command);
            if let Some(search) = state.search() {
                if search.matches.is_empty() {
                    prop_assert_eq!(search.cursor, 0);
                } else {
                    prop_assert!(search.cursor < search.matches.len());
                }
            }
        }
    }

    /// PROPERTY: every match contains the query, ignoring case, and
    /// every location containing the query is a match.
    #[test]
    fn property_matches_are_exact(
        (catalog, initial, _) in session_input(),
        edits in prop::collection::vec(query_edit(), 0..8),
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        state.apply(Command::EnterSearch);
        for edit in edits {
            state.apply(Command::EditQuery(edit));
        }
        let search = state.search().expect("in search mode");
        let needle = search.query.to_lowercase();

        let expected: Vec<&str> = if needle.is_empty() {
            Vec::new()
        } else {
            state
                .tree()
                .areas()
                .iter()
                .flat_map(|area| area.children.iter())
                .map(|child| child.full_path.as_str())
                .filter(|path| path.to_lowercase().contains(&needle))
                .collect()
        };
        let actual: Vec<&str> = search.matches.iter().map(|m| m.full_path.as_str()).collect();
        prop_assert_eq!(actual, expected);
    }

    /// PROPERTY: cancelling a search restores every area's expansion flag,
    /// whatever happened while searching.
    #[test]
    fn property_cancel_restores_expansion(
        (catalog, initial, _) in session_input(),
        during in prop::collection::vec(
            prop_oneof![
                query_edit().prop_map(Command::EditQuery),
                Just(Command::MoveDown),
                Just(Command::MoveUp),
                Just(Command::ToggleSelection),
            ],
            0..16,
        ),
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        let before = state.tree().expansion_snapshot();

        state.apply(Command::EnterSearch);
        for command in during {
            state.apply(command);
        }
        state.apply(Command::ExitSearch { keep_expansion: false });

        prop_assert!(!state.is_searching());
        prop_assert_eq!(state.tree().expansion_snapshot(), before);
    }

    /// PROPERTY: committing a match lands the tree cursor on it.
    #[test]
    fn property_commit_lands_on_match(
        (catalog, initial, _) in session_input(),
        letter in prop::sample::select(LETTERS),
        steps in 0usize..4,
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        state.apply(Command::EnterSearch);
        state.apply(Command::EditQuery(QueryEdit::Append(letter.to_string())));
        for _ in 0..steps {
            state.apply(Command::MoveDown);
        }
        let chosen = state.search().and_then(|s| s.current()).map(|m| m.full_path.clone());

        state.apply(Command::CommitSearchMatch);
        prop_assert!(!state.is_searching());
        if let Some(path) = chosen {
            let node = state.current_node().expect("cursor on a node");
            prop_assert_eq!(node.full_path(), path.as_str());
        }
    }
}
