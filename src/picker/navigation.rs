//! Cursor movement, selection toggling, reordering, and expansion.
//!
//! Cursors clamp at both ends of their list; moving past an end is a no-op.

use tracing::debug;

use super::session::{Mode, Pane, SessionState};
use super::tree::TreeNode;

/// Work to do after inspecting the node under the tree cursor. Collected
/// first so the tree borrow ends before the selection is mutated.
enum TogglePlan {
    Location(String),
    Area { name: String, children: Vec<String> },
}

impl SessionState {
    /// Move the cursor of the focused pane (or the search cursor) up one row
    pub fn move_up(&mut self) {
        let cursor = match &mut self.mode {
            Mode::Search(search) => &mut search.cursor,
            Mode::Normal => match self.focus {
                Pane::Selected => &mut self.selected_cursor,
                Pane::Available => &mut self.tree_cursor,
            },
        };
        *cursor = cursor.saturating_sub(1);
    }

    /// Move the cursor of the focused pane (or the search cursor) down one row
    pub fn move_down(&mut self) {
        let (cursor, len) = match &mut self.mode {
            Mode::Search(search) => (&mut search.cursor, search.matches.len()),
            Mode::Normal => match self.focus {
                Pane::Selected => (&mut self.selected_cursor, self.selection.len()),
                Pane::Available => (&mut self.tree_cursor, self.rows.len()),
            },
        };
        if *cursor + 1 < len {
            *cursor += 1;
        }
    }

    /// Swap the entry under the selection cursor with the one above it
    pub fn move_selected_up(&mut self) {
        if self.focus != Pane::Selected || self.selected_cursor == 0 {
            return;
        }
        if self
            .selection
            .swap(self.selected_cursor, self.selected_cursor - 1)
        {
            self.selected_cursor -= 1;
        }
    }

    /// Swap the entry under the selection cursor with the one below it
    pub fn move_selected_down(&mut self) {
        if self.focus != Pane::Selected {
            return;
        }
        if self
            .selection
            .swap(self.selected_cursor, self.selected_cursor + 1)
        {
            self.selected_cursor += 1;
        }
    }

    /// Toggle what is under the active cursor.
    ///
    /// - Search mode: the highlighted match.
    /// - Selected pane: removes the entry under the cursor.
    /// - Available pane, location: adds or removes it.
    /// - Available pane, area: removes every child if all are selected,
    ///   otherwise appends the unselected children in catalog order.
    pub fn toggle_selection(&mut self) {
        if self.is_searching() {
            self.toggle_search_match();
            return;
        }
        if self.focus == Pane::Selected {
            self.remove_selected_at_cursor();
            return;
        }

        let plan = match self.current_node() {
            None => return,
            Some(TreeNode::Location(location)) => TogglePlan::Location(location.full_path.clone()),
            Some(TreeNode::Area(area)) => TogglePlan::Area {
                name: area.name.clone(),
                children: area.children.iter().map(|c| c.full_path.clone()).collect(),
            },
        };

        match plan {
            TogglePlan::Location(path) => self.toggle_path(&path),
            TogglePlan::Area { name, children } => {
                let all_selected = children.iter().all(|c| self.selection.contains(c));
                if all_selected {
                    for child in &children {
                        self.selection.remove_by_value(child);
                    }
                } else {
                    let missing: Vec<String> = children
                        .into_iter()
                        .filter(|c| !self.selection.contains(c))
                        .collect();
                    for child in missing {
                        self.selection.append(child);
                    }
                }
                debug!(area = %name, deselected = all_selected, "bulk area toggle");
                self.sync_selection();
            }
        }
    }

    /// Flip membership of a single identifier and re-sync the tree
    pub(crate) fn toggle_path(&mut self, path: &str) {
        if !self.selection.remove_by_value(path) {
            self.selection.append(path);
        }
        self.sync_selection();
    }

    /// Expand or collapse the area under the tree cursor. No-op on locations.
    pub fn toggle_expand(&mut self) {
        let Some(row) = self.rows.get(self.tree_cursor).copied() else {
            return;
        };
        if !row.is_area() {
            return;
        }
        if let Some(area) = self.tree.area_mut(row.area_index) {
            area.expanded = !area.expanded;
        }
        self.refresh_rows();
    }

    /// Remove the selection entry under the selection cursor. The cursor
    /// stays at the same index, or moves to the new last entry.
    pub fn remove_selected_at_cursor(&mut self) {
        if self.selection.remove_at(self.selected_cursor).is_some() {
            self.sync_selection();
        }
    }
}
