//! Insertion-ordered grouping support
//!
//! Several aggregations order their output by a metric but break ties by
//! first-seen grouping order. That ordering is an explicit, documented
//! rule here, implemented with a key index over a vector, rather than an
//! incidental property of whichever map type happens to be used.

use std::collections::HashMap;

/// Groups values by string key, preserving first-insertion order
///
/// `entry_or_insert_with` returns a mutable reference to the group for a
/// key, creating it at the end of the sequence on first sight. Iteration
/// and `into_entries` yield groups in first-seen order, which makes any
/// stable sort over the entries tie-break by encounter order.
#[derive(Debug, Clone, Default)]
pub struct OrderedGroups<V> {
    index: HashMap<String, usize>,
    entries: Vec<(String, V)>,
}

impl<V> OrderedGroups<V> {
    pub fn new() -> Self {
        OrderedGroups {
            index: HashMap::new(),
            entries: Vec::new(),
        }
    }

    /// Get the group for `key`, inserting `default()` on first sight
    pub fn entry_or_insert_with(&mut self, key: &str, default: impl FnOnce() -> V) -> &mut V {
        let position = match self.index.get(key) {
            Some(&position) => position,
            None => {
                let position = self.entries.len();
                self.index.insert(key.to_string(), position);
                self.entries.push((key.to_string(), default()));
                position
            }
        };
        &mut self.entries[position].1
    }

    /// Consume the structure, yielding (key, group) in first-seen order
    pub fn into_entries(self) -> Vec<(String, V)> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
