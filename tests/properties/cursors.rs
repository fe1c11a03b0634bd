//! Property tests for cursor bounds.

use proptest::prelude::*;

use tzpick::picker::{flatten, Command, SessionState};

use super::strategies::{command, session_input};

fn assert_in_bounds(state: &SessionState) -> Result<(), TestCaseError> {
    prop_assert!(!state.rows().is_empty());
    prop_assert!(state.tree_cursor() < state.rows().len());
    if state.selection().is_empty() {
        prop_assert_eq!(state.selected_cursor(), 0);
    } else {
        prop_assert!(state.selected_cursor() < state.selection().len());
    }
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: both cursors stay inside their lists after every command.
    #[test]
    fn property_cursors_stay_in_bounds((catalog, initial, commands) in session_input()) {
        let mut state = SessionState::begin(&catalog, &initial);
        assert_in_bounds(&state)?;
        for command in commands {
            state.apply(command);
            assert_in_bounds(&state)?;
        }
    }

    /// PROPERTY: the cached rows always equal a fresh flatten of the tree.
    #[test]
    fn property_rows_match_tree((catalog, initial, commands) in session_input()) {
        let mut state = SessionState::begin(&catalog, &initial);
        for command in commands {
            state.apply(command);
            let fresh = flatten(state.tree());
            prop_assert_eq!(state.rows(), fresh.as_slice());
        }
    }

    /// PROPERTY: the current node exists whenever the tree cursor is valid.
    #[test]
    fn property_current_node_always_resolves(
        (catalog, initial, _) in session_input(),
        moves in prop::collection::vec(command(), 0..32),
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        for command in moves {
            state.apply(command);
            if !state.is_searching() {
                prop_assert!(state.current_node().is_some());
            }
        }
    }

    /// PROPERTY: pressing down past the end and up past the start clamps.
    #[test]
    fn property_moves_clamp_at_ends((catalog, initial, _) in session_input()) {
        let mut state = SessionState::begin(&catalog, &initial);
        let rows = state.rows().len();
        for _ in 0..rows + 3 {
            state.apply(Command::MoveDown);
        }
        prop_assert_eq!(state.tree_cursor(), rows - 1);
        for _ in 0..rows + 3 {
            state.apply(Command::MoveUp);
        }
        prop_assert_eq!(state.tree_cursor(), 0);
    }
}
