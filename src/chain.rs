//! Chain: insertion-ordered entries sharing one bucket index.

#[derive(Debug, Clone, Eq, PartialEq)]
pub(crate) struct Entry {
    key: Box<str>,
    value: String,
}

impl Entry {
    pub(crate) fn new(key: &str, value: String) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }

    pub(crate) fn key(&self) -> &str {
        &self.key
    }

    pub(crate) fn value(&self) -> &str {
        &self.value
    }

    /// Overwrite the value in place. The key never changes after creation.
    pub(crate) fn set_value(&mut self, value: String) {
        self.value = value;
    }
}

/// Separate-chaining list for a single bucket. Entries are only ever
/// appended; lookups never reorder them.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub(crate) struct Chain {
    entries: Vec<Entry>,
}

impl Chain {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Front-to-back exact-match scan.
    pub(crate) fn search(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.key() == key)
    }

    pub(crate) fn search_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.key() == key)
    }

    /// Append to the tail. Callers must have checked the key is absent.
    pub(crate) fn push(&mut self, entry: Entry) {
        debug_assert!(self.search(entry.key()).is_none(), "duplicate key in chain");
        self.entries.push(entry);
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(Entry::key)
    }
}

/// Chain search over a slot that may not be materialized yet.
pub(crate) fn search<'a>(chain: Option<&'a Chain>, key: &str) -> Option<&'a Entry> {
    chain.and_then(|c| c.search(key))
}
