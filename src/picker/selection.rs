//! Ordered selection set
//!
//! The single source of truth for "is X selected". Order is user-meaningful
//! and only changes through explicit append/remove/swap calls.

/// Ordered list of selected identifiers without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    items: Vec<String>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from an initial list, keeping the first occurrence of duplicates
    pub fn from_paths<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for path in paths {
            set.append(path);
        }
        set
    }

    pub fn contains(&self, path: &str) -> bool {
        self.items.iter().any(|p| p == path)
    }

    /// Append to the end. Already-present paths are left where they are.
    pub fn append(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.contains(&path) {
            self.items.push(path);
        }
    }

    /// Remove `path`, returning whether it was present
    pub fn remove_by_value(&mut self, path: &str) -> bool {
        match self.items.iter().position(|p| p == path) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove by position. Out-of-range indices are a no-op.
    pub fn remove_at(&mut self, index: usize) -> Option<String> {
        if index < self.items.len() {
            Some(self.items.remove(index))
        } else {
            None
        }
    }

    /// Exchange two positions. Returns `false` without changes if either
    /// index is out of range.
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        if i >= self.items.len() || j >= self.items.len() {
            return false;
        }
        self.items.swap(i, j);
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.items.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.items
    }

    pub fn into_vec(self) -> Vec<String> {
        self.items
    }
}
