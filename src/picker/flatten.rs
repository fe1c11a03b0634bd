//! Flattened view of the catalog tree for cursor navigation.

use super::tree::{CatalogTree, TreePosition};

/// One visible line of the tree pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FlatRow {
    pub area_index: usize,
    /// `None` for the area header row
    pub child_index: Option<usize>,
}

impl FlatRow {
    pub fn header(area_index: usize) -> Self {
        Self {
            area_index,
            child_index: None,
        }
    }

    pub fn child(area_index: usize, child_index: usize) -> Self {
        Self {
            area_index,
            child_index: Some(child_index),
        }
    }

    pub fn is_area(&self) -> bool {
        self.child_index.is_none()
    }

    pub fn position(&self) -> TreePosition {
        TreePosition {
            area: self.area_index,
            child: self.child_index,
        }
    }
}

/// Produce the visible rows: each area header, followed by its children
/// when the area is expanded.
///
/// Always recomputed from scratch; never patched incrementally.
pub fn flatten(tree: &CatalogTree) -> Vec<FlatRow> {
    let mut rows = Vec::with_capacity(tree.area_count());
    for (i, area) in tree.areas().iter().enumerate() {
        rows.push(FlatRow::header(i));
        if area.expanded {
            rows.extend((0..area.children.len()).map(|j| FlatRow::child(i, j)));
        }
    }
    rows
}

/// Index of the row addressing `position`, if it is currently visible
pub fn row_of(rows: &[FlatRow], position: TreePosition) -> Option<usize> {
    rows.iter().position(|row| row.position() == position)
}
