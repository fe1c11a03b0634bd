//! Incremental substring search over location nodes.

use super::selection::SelectionSet;
use super::tree::{CatalogTree, TreePosition};

/// A location whose identifier contains the query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchMatch {
    pub full_path: String,
    pub area_index: usize,
    pub child_index: usize,
    /// Snapshot taken when the search ran. Stale after the next selection change.
    pub is_selected: bool,
}

impl SearchMatch {
    pub fn position(&self) -> TreePosition {
        TreePosition {
            area: self.area_index,
            child: Some(self.child_index),
        }
    }
}

/// Case-insensitive substring match of `query` against every location's
/// full path, in forest order. An empty query yields no matches.
pub fn search(tree: &CatalogTree, selection: &SelectionSet, query: &str) -> Vec<SearchMatch> {
    if query.is_empty() {
        return Vec::new();
    }

    let needle = query.to_lowercase();
    let mut matches = Vec::new();
    for (i, area) in tree.areas().iter().enumerate() {
        for (j, child) in area.children.iter().enumerate() {
            if child.full_path.to_lowercase().contains(&needle) {
                matches.push(SearchMatch {
                    full_path: child.full_path.clone(),
                    area_index: i,
                    child_index: j,
                    is_selected: selection.contains(&child.full_path),
                });
            }
        }
    }
    matches
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`.
///
/// Used for highlighting. Returns `None` when the lowercase forms differ in
/// length from the originals, since byte offsets would not line up.
pub fn match_range(text: &str, query: &str) -> Option<std::ops::Range<usize>> {
    if query.is_empty() {
        return None;
    }
    let lower = text.to_lowercase();
    let needle = query.to_lowercase();
    if lower.len() != text.len() || needle.len() != query.len() {
        return None;
    }
    let start = lower.find(&needle)?;
    Some(start..start + needle.len())
}
