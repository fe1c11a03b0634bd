//! Picker session state and command dispatch
//!
//! A [`SessionState`] is the single owner of the tree, the flattened view,
//! the selection, both cursors, focus, and the search mode. Renderers read it
//! through accessors; every mutation goes through [`SessionState::apply`].

use tracing::debug;

use super::flatten::{flatten, FlatRow};
use super::search::SearchMatch;
use super::selection::SelectionSet;
use super::tree::{CatalogTree, TreeNode};

/// Which pane has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Pane {
    /// Ordered list of chosen timezones
    Selected,
    /// Catalog tree (or search results while searching)
    #[default]
    Available,
}

impl Pane {
    pub fn other(self) -> Self {
        match self {
            Pane::Selected => Pane::Available,
            Pane::Available => Pane::Selected,
        }
    }
}

/// Change to the search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryEdit {
    /// Append text to the end of the query
    Append(String),
    /// Remove the last character
    Backspace,
}

/// Discrete picker command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    MoveUp,
    MoveDown,
    MoveSelectedUp,
    MoveSelectedDown,
    ToggleSelection,
    ToggleExpand,
    RemoveSelected,
    SwitchPane,
    EnterSearch,
    ExitSearch { keep_expansion: bool },
    EditQuery(QueryEdit),
    CommitSearchMatch,
}

/// State that only exists while searching
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchState {
    pub query: String,
    pub matches: Vec<SearchMatch>,
    pub cursor: usize,
    /// Expansion flag of every area, captured on entry
    pub(crate) saved_expansion: Vec<bool>,
}

impl SearchState {
    pub fn current(&self) -> Option<&SearchMatch> {
        self.matches.get(self.cursor)
    }
}

/// Normal browsing or incremental search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    Search(SearchState),
}

/// Complete state of one picker session
#[derive(Debug, Clone)]
pub struct SessionState {
    pub(crate) tree: CatalogTree,
    pub(crate) rows: Vec<FlatRow>,
    pub(crate) selection: SelectionSet,
    pub(crate) focus: Pane,
    pub(crate) selected_cursor: usize,
    pub(crate) tree_cursor: usize,
    pub(crate) mode: Mode,
}

impl SessionState {
    /// Build the tree and seed the selection with a copy of `initial_selection`
    pub fn begin<C, S>(catalog: &[C], initial_selection: &[S]) -> Self
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let tree = CatalogTree::build(catalog, initial_selection);
        let selection = SelectionSet::from_paths(
            initial_selection
                .iter()
                .map(|path| path.as_ref().to_string()),
        );
        let rows = flatten(&tree);

        debug!(
            areas = tree.area_count(),
            locations = tree.location_count(),
            selected = selection.len(),
            "picker session started"
        );

        let mut state = Self {
            tree,
            rows,
            selection,
            focus: Pane::Available,
            selected_cursor: 0,
            tree_cursor: 0,
            mode: Mode::Normal,
        };
        state.sync_selection();
        state
    }

    /// Apply one command. Every command is total: anything that does not make
    /// sense in the current state is a no-op.
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveSelectedUp => self.move_selected_up(),
            Command::MoveSelectedDown => self.move_selected_down(),
            Command::ToggleSelection => self.toggle_selection(),
            Command::ToggleExpand => {
                if self.focus == Pane::Available {
                    self.toggle_expand();
                }
            }
            Command::RemoveSelected => {
                if self.focus == Pane::Selected {
                    self.remove_selected_at_cursor();
                }
            }
            Command::SwitchPane => self.focus = self.focus.other(),
            Command::EnterSearch => self.enter_search(),
            Command::ExitSearch { keep_expansion } => self.exit_search(keep_expansion),
            Command::EditQuery(edit) => self.edit_query(edit),
            Command::CommitSearchMatch => self.commit_search_match(),
        }
    }

    /// Finish the session. Returns the ordered selection when `committed`,
    /// `None` when the session was cancelled.
    pub fn end(self, committed: bool) -> Option<Vec<String>> {
        debug!(committed, selected = self.selection.len(), "picker session ended");
        committed.then(|| self.selection.into_vec())
    }

    pub fn tree(&self) -> &CatalogTree {
        &self.tree
    }

    pub fn rows(&self) -> &[FlatRow] {
        &self.rows
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn focus(&self) -> Pane {
        self.focus
    }

    pub fn selected_cursor(&self) -> usize {
        self.selected_cursor
    }

    pub fn tree_cursor(&self) -> usize {
        self.tree_cursor
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn is_searching(&self) -> bool {
        matches!(self.mode, Mode::Search(_))
    }

    pub fn search(&self) -> Option<&SearchState> {
        match &self.mode {
            Mode::Search(search) => Some(search),
            Mode::Normal => None,
        }
    }

    /// Node under the tree cursor
    pub fn current_node(&self) -> Option<TreeNode<'_>> {
        let row = self.rows.get(self.tree_cursor)?;
        self.tree.node_at_row(*row)
    }

    /// Recompute the flattened view and keep the tree cursor inside it
    pub(crate) fn refresh_rows(&mut self) {
        self.rows = flatten(&self.tree);
        self.tree_cursor = self.tree_cursor.min(self.rows.len().saturating_sub(1));
    }

    /// Propagate selection membership into the tree and keep the selection
    /// cursor valid. Called after every selection mutation.
    pub(crate) fn sync_selection(&mut self) {
        self.tree.sync_selection(&self.selection);
        self.selected_cursor = self
            .selected_cursor
            .min(self.selection.len().saturating_sub(1));
    }
}

/// Start a session from a catalog snapshot and the caller's current selection
pub fn begin_session<C, S>(catalog: &[C], initial_selection: &[S]) -> SessionState
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    SessionState::begin(catalog, initial_selection)
}

/// Apply `command` and hand the state back
pub fn apply_command(mut state: SessionState, command: Command) -> SessionState {
    state.apply(command);
    state
}

/// Consume the session, yielding the selection only if it was committed
pub fn end_session(state: SessionState, committed: bool) -> Option<Vec<String>> {
    state.end(committed)
}
