//! Catalog Tree
//!
//! Two-level hierarchy (areas -> locations) built once per session from the
//! flat `"Area/Location"` catalog. The first area is always the synthetic
//! `System` area holding the `Local` entry.

use std::collections::{BTreeMap, HashMap, HashSet};

use super::flatten::FlatRow;
use super::selection::SelectionSet;

/// Name of the synthetic area that holds the local system timezone
pub const SYSTEM_AREA: &str = "System";

/// Identifier of the local system timezone
pub const LOCAL: &str = "Local";

/// Aggregate selection state of an area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    /// Every location in the area is selected
    Selected,
    /// No location in the area is selected
    Unselected,
    /// Some but not all locations are selected
    Partial,
}

/// A selectable leaf entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocationNode {
    /// Location name without the area prefix
    pub name: String,
    /// Canonical identifier, e.g. `America/New_York` or `Local`
    pub full_path: String,
    /// Mirror of selection membership. Maintained by [`CatalogTree::sync_selection`].
    pub is_selected: bool,
}

/// A group of locations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaNode {
    pub name: String,
    pub expanded: bool,
    /// Locations sorted by name
    pub children: Vec<LocationNode>,
}

impl AreaNode {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            expanded: false,
            children: Vec::new(),
        }
    }

    /// Area headers use their name as identifier. They are not selectable.
    pub fn full_path(&self) -> &str {
        &self.name
    }

    /// Number of children whose `is_selected` flag is set
    pub fn selected_count(&self) -> usize {
        self.children.iter().filter(|c| c.is_selected).count()
    }

    pub fn selection_state(&self) -> SelectionState {
        let selected = self.selected_count();
        if selected == 0 {
            SelectionState::Unselected
        } else if selected == self.children.len() {
            SelectionState::Selected
        } else {
            SelectionState::Partial
        }
    }
}

/// Borrowed view of one node, tagged by kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeNode<'a> {
    Area(&'a AreaNode),
    Location(&'a LocationNode),
}

impl<'a> TreeNode<'a> {
    pub fn name(&self) -> &'a str {
        match self {
            TreeNode::Area(area) => &area.name,
            TreeNode::Location(location) => &location.name,
        }
    }

    pub fn full_path(&self) -> &'a str {
        match self {
            TreeNode::Area(area) => area.full_path(),
            TreeNode::Location(location) => &location.full_path,
        }
    }

    pub fn is_area(&self) -> bool {
        matches!(self, TreeNode::Area(_))
    }
}

/// Coordinate of a node inside the forest
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TreePosition {
    pub area: usize,
    /// `None` addresses the area header itself
    pub child: Option<usize>,
}

/// The forest of areas plus a `full_path -> position` index
#[derive(Debug, Clone, Default)]
pub struct CatalogTree {
    areas: Vec<AreaNode>,
    index: HashMap<String, TreePosition>,
}

impl CatalogTree {
    /// Build the tree from a flat catalog and the initial selection.
    ///
    /// Entries without a `/` are dropped. Areas containing at least one
    /// initially selected location start expanded.
    pub fn build<C, S>(catalog: &[C], initial_selection: &[S]) -> Self
    where
        C: AsRef<str>,
        S: AsRef<str>,
    {
        let selected: HashSet<&str> = initial_selection.iter().map(AsRef::as_ref).collect();

        let mut grouped: BTreeMap<&str, Vec<LocationNode>> = BTreeMap::new();
        for entry in catalog {
            let entry = entry.as_ref();
            let Some((area, location)) = entry.split_once('/') else {
                continue;
            };
            grouped.entry(area).or_default().push(LocationNode {
                name: location.to_string(),
                full_path: entry.to_string(),
                is_selected: selected.contains(entry),
            });
        }

        let mut system = AreaNode::new(SYSTEM_AREA);
        system.expanded = true;
        system.children.push(LocationNode {
            name: LOCAL.to_string(),
            full_path: LOCAL.to_string(),
            is_selected: selected.contains(LOCAL),
        });

        let mut areas = vec![system];
        for (name, mut children) in grouped {
            children.sort_by(|a, b| a.name.cmp(&b.name));
            let mut area = AreaNode::new(name);
            area.children = children;
            areas.push(area);
        }

        let mut tree = Self {
            areas,
            index: HashMap::new(),
        };
        tree.rebuild_index();

        for path in initial_selection {
            if let Some(position) = tree.index.get(path.as_ref()).copied() {
                if position.child.is_some() {
                    tree.areas[position.area].expanded = true;
                }
            }
        }

        tree
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (i, area) in self.areas.iter().enumerate() {
            self.index.insert(
                area.name.clone(),
                TreePosition {
                    area: i,
                    child: None,
                },
            );
            for (j, child) in area.children.iter().enumerate() {
                self.index.insert(
                    child.full_path.clone(),
                    TreePosition {
                        area: i,
                        child: Some(j),
                    },
                );
            }
        }
    }

    pub fn areas(&self) -> &[AreaNode] {
        &self.areas
    }

    pub fn area(&self, index: usize) -> Option<&AreaNode> {
        self.areas.get(index)
    }

    pub fn area_mut(&mut self, index: usize) -> Option<&mut AreaNode> {
        self.areas.get_mut(index)
    }

    pub fn area_count(&self) -> usize {
        self.areas.len()
    }

    /// Total number of location nodes, including `Local`
    pub fn location_count(&self) -> usize {
        self.areas.iter().map(|a| a.children.len()).sum()
    }

    /// O(1) lookup of a node coordinate by identifier
    pub fn position_of(&self, full_path: &str) -> Option<TreePosition> {
        self.index.get(full_path).copied()
    }

    pub fn contains(&self, full_path: &str) -> bool {
        self.index.contains_key(full_path)
    }

    pub fn node(&self, position: TreePosition) -> Option<TreeNode<'_>> {
        let area = self.areas.get(position.area)?;
        match position.child {
            None => Some(TreeNode::Area(area)),
            Some(child) => area.children.get(child).map(TreeNode::Location),
        }
    }

    /// Node addressed by a flattened row
    pub fn node_at_row(&self, row: FlatRow) -> Option<TreeNode<'_>> {
        self.node(row.position())
    }

    pub fn location(&self, area: usize, child: usize) -> Option<&LocationNode> {
        self.areas.get(area)?.children.get(child)
    }

    /// Set every location's `is_selected` flag from selection membership
    pub fn sync_selection(&mut self, selection: &SelectionSet) {
        for area in &mut self.areas {
            for child in &mut area.children {
                child.is_selected = selection.contains(&child.full_path);
            }
        }
    }

    /// Snapshot of every area's expansion flag, indexed by area
    pub fn expansion_snapshot(&self) -> Vec<bool> {
        self.areas.iter().map(|a| a.expanded).collect()
    }

    /// Restore expansion flags from a snapshot taken on the same tree
    pub fn restore_expansion(&mut self, snapshot: &[bool]) {
        for (area, expanded) in self.areas.iter_mut().zip(snapshot) {
            area.expanded = *expanded;
        }
    }
}
