//! Normal <-> Search mode transitions
//!
//! Entering search snapshots every area's expansion flag. Cancelling restores
//! the snapshot; committing keeps the live expansion state and jumps the tree
//! cursor to the chosen match.

use tracing::{debug, trace};

use super::flatten::row_of;
use super::search::search;
use super::session::{Mode, Pane, QueryEdit, SearchState, SessionState};

impl SessionState {
    /// Start searching. No-op when already in search mode.
    pub fn enter_search(&mut self) {
        if self.is_searching() {
            return;
        }
        self.mode = Mode::Search(SearchState {
            saved_expansion: self.tree.expansion_snapshot(),
            ..SearchState::default()
        });
        debug!("entered search mode");
    }

    /// Leave search mode. With `keep_expansion == false` every area's
    /// expansion flag is restored to its value before the search started.
    pub fn exit_search(&mut self, keep_expansion: bool) {
        let Mode::Search(search) = std::mem::take(&mut self.mode) else {
            return;
        };
        if !keep_expansion {
            self.tree.restore_expansion(&search.saved_expansion);
        }
        self.refresh_rows();
        debug!(keep_expansion, "left search mode");
    }

    /// Edit the query and re-run the search
    pub fn edit_query(&mut self, edit: QueryEdit) {
        let Mode::Search(search) = &mut self.mode else {
            return;
        };
        match edit {
            QueryEdit::Append(text) => search.query.push_str(&text),
            QueryEdit::Backspace => {
                if search.query.pop().is_none() {
                    return;
                }
            }
        }
        self.refresh_matches();
    }

    /// Re-run the search for the current query. Resets the search cursor to
    /// the first match when it no longer points at one.
    pub(crate) fn refresh_matches(&mut self) {
        let Mode::Search(search_state) = &mut self.mode else {
            return;
        };
        search_state.matches = search(&self.tree, &self.selection, &search_state.query);
        if search_state.cursor >= search_state.matches.len() {
            search_state.cursor = 0;
        }
        trace!(
            query = %search_state.query,
            matches = search_state.matches.len(),
            "search refreshed"
        );
    }

    /// Toggle the highlighted match, then refresh match snapshots
    pub(crate) fn toggle_search_match(&mut self) {
        let Some(path) = self
            .search()
            .and_then(|s| s.current())
            .map(|m| m.full_path.clone())
        else {
            return;
        };
        self.toggle_path(&path);
        self.refresh_matches();
    }

    /// Jump to the highlighted match: expand its area, keep the live
    /// expansion state, and move focus to the available pane. Without a
    /// highlighted match this cancels the search instead.
    pub fn commit_search_match(&mut self) {
        let Some(chosen) = self.search().and_then(|s| s.current()).cloned() else {
            self.exit_search(false);
            return;
        };

        if let Some(area) = self.tree.area_mut(chosen.area_index) {
            area.expanded = true;
        }
        self.exit_search(true);
        if let Some(row) = row_of(&self.rows, chosen.position()) {
            self.tree_cursor = row;
        }
        self.focus = Pane::Available;
        debug!(full_path = %chosen.full_path, "committed search match");
    }
}
