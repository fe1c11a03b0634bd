//! Timezone Picker Core
//!
//! State and algorithms behind the interactive picker. Nothing in here
//! touches the terminal or the filesystem.
//!
//! # Module Structure
//!
//! - `tree` - catalog tree construction and selection mirroring
//! - `flatten` - expansion-aware linear view for cursor navigation
//! - `selection` - ordered selection set
//! - `search` - substring search over locations
//! - `session` - session state, commands, and dispatch
//! - `navigation` - cursor movement, toggling, reordering, expansion
//! - `mode` - normal/search mode transitions

mod flatten;
mod mode;
mod navigation;
mod search;
mod selection;
mod session;
mod tree;

pub use flatten::{flatten, row_of, FlatRow};
pub use search::{match_range, search, SearchMatch};
pub use selection::SelectionSet;
pub use session::{
    apply_command, begin_session, end_session, Command, Mode, Pane, QueryEdit, SearchState,
    SessionState,
};
pub use tree::{
    AreaNode, CatalogTree, LocationNode, SelectionState, TreeNode, TreePosition, LOCAL,
    SYSTEM_AREA,
};
