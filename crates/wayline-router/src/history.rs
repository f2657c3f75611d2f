//! Bounded navigation history.
//!
//! An ordered sequence of visited fragments, most-recent last. Two
//! invariants are enforced at the push site: no two consecutive entries are
//! identical, and the sequence never exceeds its limit (oldest entries are
//! dropped from the front).

/// A bounded stack of visited fragment paths.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<String>,
    limit: usize,
}

impl History {
    /// Creates an empty history holding at most `limit` entries. A limit of
    /// zero keeps nothing.
    pub const fn new(limit: usize) -> Self {
        Self {
            entries: Vec::new(),
            limit,
        }
    }

    /// Appends `path` unless it equals the most recent entry. Drops the
    /// oldest entry first when the history is full.
    pub fn push(&mut self, path: impl Into<String>) {
        let path = path.into();
        if self.limit == 0 || self.last() == Some(path.as_str()) {
            return;
        }
        if self.entries.len() == self.limit {
            self.entries.remove(0);
        }
        self.entries.push(path);
    }

    /// Removes and returns the most recent entry.
    pub fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// The most recent entry, if any.
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in visit order, oldest first.
    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// The configured capacity.
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
