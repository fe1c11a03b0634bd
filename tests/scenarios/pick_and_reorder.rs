//! Scenario: Building a selection from the tree
//!
//! Journey: A user starts with New York selected, adds the rest of America
//! with one keystroke, then reorders and prunes the list.

use tzpick::picker::{Command, Pane, SelectionState, SessionState, TreeNode};

const CATALOG: [&str; 3] = ["America/New_York", "America/Chicago", "Europe/London"];

fn apply_all(state: &mut SessionState, commands: &[Command]) {
    for command in commands {
        state.apply(command.clone());
    }
}

fn row_labels(state: &SessionState) -> Vec<&str> {
    state
        .rows()
        .iter()
        .map(|row| state.tree().node_at_row(*row).unwrap().name())
        .collect()
}

/// SCENARIO: initial tree shape follows the saved selection
#[test]
fn scenario_initial_tree_expands_selected_areas() {
    let state = SessionState::begin(&CATALOG, &["America/New_York"]);

    assert_eq!(
        row_labels(&state),
        vec!["System", "Local", "America", "Chicago", "New_York", "Europe"]
    );
    assert_eq!(state.focus(), Pane::Available);
    assert_eq!(state.tree_cursor(), 0);

    let america = &state.tree().areas()[1];
    assert!(america.expanded);
    assert_eq!(america.selection_state(), SelectionState::Partial);
    assert!(!state.tree().areas()[2].expanded);
}

/// SCENARIO: toggling an area header adds the missing children in order
#[test]
fn scenario_area_toggle_selects_all_then_none() {
    let mut state = SessionState::begin(&CATALOG, &["America/New_York"]);

    // Step 1: walk down to the America header
    apply_all(&mut state, &[Command::MoveDown, Command::MoveDown]);
    assert!(matches!(
        state.current_node(),
        Some(TreeNode::Area(area)) if area.name == "America"
    ));

    // Step 2: toggle appends Chicago after the existing New York
    state.apply(Command::ToggleSelection);
    assert_eq!(
        state.selection().as_slice(),
        ["America/New_York", "America/Chicago"]
    );
    assert_eq!(
        state.tree().areas()[1].selection_state(),
        SelectionState::Selected
    );

    // Step 3: toggling again clears the whole area
    state.apply(Command::ToggleSelection);
    assert!(state.selection().is_empty());
    assert_eq!(
        state.tree().areas()[1].selection_state(),
        SelectionState::Unselected
    );
}

/// SCENARIO: reorder and remove from the selected pane, then commit
#[test]
fn scenario_reorder_and_remove_then_commit() {
    let mut state = SessionState::begin(&CATALOG, &["America/New_York"]);

    // Add Local and London
    apply_all(
        &mut state,
        &[
            Command::MoveDown,
            Command::ToggleSelection,
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveDown,
            Command::ToggleExpand,
            Command::MoveDown,
            Command::ToggleSelection,
        ],
    );
    assert_eq!(
        state.selection().as_slice(),
        ["America/New_York", "Local", "Europe/London"]
    );

    // Move London to the top
    apply_all(
        &mut state,
        &[
            Command::SwitchPane,
            Command::MoveDown,
            Command::MoveDown,
            Command::MoveSelectedUp,
            Command::MoveSelectedUp,
        ],
    );
    assert_eq!(state.selected_cursor(), 0);
    assert_eq!(
        state.selection().as_slice(),
        ["Europe/London", "America/New_York", "Local"]
    );

    // Drop New York; the cursor stays on the same index
    apply_all(&mut state, &[Command::MoveDown, Command::RemoveSelected]);
    assert_eq!(state.selected_cursor(), 1);
    assert_eq!(state.selection().as_slice(), ["Europe/London", "Local"]);
    assert!(!state.tree().location(1, 1).unwrap().is_selected);

    assert_eq!(
        state.end(true),
        Some(vec!["Europe/London".to_string(), "Local".to_string()])
    );
}

/// SCENARIO: cancelling discards everything
#[test]
fn scenario_cancel_returns_nothing() {
    let mut state = SessionState::begin(&CATALOG, &["America/New_York"]);
    apply_all(&mut state, &[Command::MoveDown, Command::ToggleSelection]);
    assert_eq!(state.selection().len(), 2);
    assert_eq!(state.end(false), None);
}
