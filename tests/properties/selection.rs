//! Property tests for the ordered selection.

use std::collections::HashSet;

use proptest::prelude::*;

use tzpick::picker::{Command, SessionState, TreeNode};

use super::strategies::{catalog, session_input};

/// Every location node's flag agrees with selection membership
fn tree_mirrors_selection(state: &SessionState) -> bool {
    state.tree().areas().iter().all(|area| {
        area.children
            .iter()
            .all(|child| child.is_selected == state.selection().contains(&child.full_path))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the selection never holds the same identifier twice, and
    /// the tree's flags always mirror it.
    #[test]
    fn property_selection_stays_unique_and_mirrored(
        (catalog, initial, commands) in session_input(),
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        prop_assert!(tree_mirrors_selection(&state));

        for command in commands {
            state.apply(command);
            let unique: HashSet<&str> = state.selection().iter().collect();
            prop_assert_eq!(unique.len(), state.selection().len());
            prop_assert!(tree_mirrors_selection(&state));
        }
    }

    /// PROPERTY: the committed result is exactly the selection, and a
    /// cancelled session yields nothing.
    #[test]
    fn property_end_session_returns_selection(
        (catalog, initial, commands) in session_input(),
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        for command in commands {
            state.apply(command);
        }
        let expected = state.selection().as_slice().to_vec();
        prop_assert_eq!(state.clone().end(true), Some(expected));
        prop_assert_eq!(state.end(false), None);
    }

    /// PROPERTY: toggling an unselected location twice leaves the selection
    /// exactly as it was.
    #[test]
    fn property_toggle_twice_restores_order(
        (catalog, initial) in catalog().prop_flat_map(|c| {
            let initial = prop::sample::subsequence(c.clone(), 0..=c.len()).prop_shuffle();
            (Just(c), initial)
        }),
    ) {
        let mut state = SessionState::begin(&catalog, &initial);
        // Row 1 is Local under the always-expanded System area
        state.apply(Command::MoveDown);
        let on_local = matches!(
            state.current_node(),
            Some(TreeNode::Location(location)) if location.full_path == "Local" && !location.is_selected
        );
        prop_assert!(on_local);

        let before = state.selection().as_slice().to_vec();
        state.apply(Command::ToggleSelection);
        prop_assert_eq!(state.selection().len(), before.len() + 1);
        prop_assert_eq!(state.selection().get(before.len()), Some("Local"));
        state.apply(Command::ToggleSelection);
        prop_assert_eq!(state.selection().as_slice(), before.as_slice());
    }
}
