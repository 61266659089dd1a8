//! Declared input key set for pipeline nodes.

use std::collections::BTreeSet;

/// Input key declared when a node does not specify its own set.
pub const DEFAULT_INPUT_KEY: &str = "input";

/// Never-empty set of input field names declared by a pipeline node.
///
/// Upstream modules address a node through these names. A node that does
/// not declare its own keys expects the single default key
/// [`DEFAULT_INPUT_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputKeySet(BTreeSet<String>);

impl InputKeySet {
    /// Creates a key set from the given names, deduplicating them.
    ///
    /// An empty iterator falls back to the default set, so the invariant
    /// that a node always declares at least one input key holds without a
    /// validation error.
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = String>) -> Self {
        let collected: BTreeSet<String> = keys.into_iter().collect();
        if collected.is_empty() {
            Self::default()
        } else {
            Self(collected)
        }
    }

    /// Returns whether the given key is declared.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    /// Returns the number of declared keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates over the declared keys in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns the declared keys as an ordered set.
    #[must_use]
    pub const fn as_set(&self) -> &BTreeSet<String> {
        &self.0
    }
}

impl Default for InputKeySet {
    fn default() -> Self {
        Self(BTreeSet::from([DEFAULT_INPUT_KEY.to_owned()]))
    }
}
