//! Scenario: Finding a timezone by typing
//!
//! Journey: A user searches for a city, toggles it straight from the match
//! list, and either jumps to it in the tree or backs out.

use tzpick::picker::{Command, Mode, Pane, QueryEdit, SessionState, TreeNode};

const CATALOG: [&str; 3] = ["America/New_York", "America/Chicago", "Europe/London"];

fn type_query(state: &mut SessionState, query: &str) {
    for ch in query.chars() {
        state.apply(Command::EditQuery(QueryEdit::Append(ch.to_string())));
    }
}

fn match_paths(state: &SessionState) -> Vec<String> {
    state
        .search()
        .unwrap()
        .matches
        .iter()
        .map(|m| m.full_path.clone())
        .collect()
}

/// SCENARIO: case-insensitive search narrows to one city
#[test]
fn scenario_search_finds_london() {
    let mut state = SessionState::begin(&CATALOG, &["America/New_York"]);
    state.apply(Command::EnterSearch);
    assert!(match_paths(&state).is_empty());

    type_query(&mut state, "london");
    assert_eq!(match_paths(&state), ["Europe/London"]);

    // A slash query spans areas
    state.apply(Command::ExitSearch {
        keep_expansion: false,
    });
    state.apply(Command::EnterSearch);
    type_query(&mut state, "AMERICA/");
    assert_eq!(
        match_paths(&state),
        ["America/Chicago", "America/New_York"]
    );
}

/// SCENARIO: toggle from the match list, then jump to the match
#[test]
fn scenario_toggle_match_then_commit() {
    let mut state = SessionState::begin(&CATALOG, &["America/New_York"]);
    state.apply(Command::SwitchPane);
    state.apply(Command::EnterSearch);
    type_query(&mut state, "lon");

    state.apply(Command::ToggleSelection);
    assert_eq!(
        state.selection().as_slice(),
        ["America/New_York", "Europe/London"]
    );
    assert!(state.search().unwrap().matches[0].is_selected);

    state.apply(Command::CommitSearchMatch);
    assert_eq!(*state.mode(), Mode::Normal);
    assert_eq!(state.focus(), Pane::Available);
    assert!(state.tree().areas()[2].expanded);
    assert!(matches!(
        state.current_node(),
        Some(TreeNode::Location(location)) if location.full_path == "Europe/London"
    ));
}

/// SCENARIO: backing out of a search leaves the tree as it was
#[test]
fn scenario_escape_restores_tree() {
    let mut state = SessionState::begin(&CATALOG, &["America/New_York"]);
    let rows_before = state.rows().to_vec();

    state.apply(Command::EnterSearch);
    type_query(&mut state, "zzz");
    assert!(match_paths(&state).is_empty());

    // Enter with nothing highlighted behaves like Esc
    state.apply(Command::CommitSearchMatch);
    assert!(!state.is_searching());
    assert_eq!(state.rows(), rows_before.as_slice());
    assert_eq!(state.selection().as_slice(), ["America/New_York"]);
}
