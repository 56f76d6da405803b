/// Single-entry cache remembering the last record fetched and its key
///
/// Consecutive lookups of the same key are served from the slot; a different
/// key replaces the entry. Only one row is ever being written, so one entry
/// per backing source is all the caching an export needs.
#[derive(Debug)]
pub struct MemoSlot<T> {
    entry: Option<(String, T)>,
    fetches: usize,
}

impl<T> Default for MemoSlot<T> {
    fn default() -> Self {
        Self {
            entry: None,
            fetches: 0,
        }
    }
}

impl<T> MemoSlot<T> {
    /// Create an empty slot
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, calling `fetch` only when the slot holds another key
    ///
    /// A failed fetch leaves the slot empty.
    pub fn get_or_fetch<E>(
        &mut self,
        key: &str,
        fetch: impl FnOnce(&str) -> Result<T, E>,
    ) -> Result<&T, E> {
        let entry = match self.entry.take() {
            Some(entry) if entry.0 == key => entry,
            _ => {
                self.fetches += 1;
                (key.to_owned(), fetch(key)?)
            }
        };
        Ok(&self.entry.insert(entry).1)
    }

    /// Key of the cached entry
    pub fn key(&self) -> Option<&str> {
        self.entry.as_ref().map(|(key, _)| key.as_str())
    }

    /// Number of fetches performed so far
    pub fn fetches(&self) -> usize {
        self.fetches
    }

    /// Drop the cached entry
    pub fn clear(&mut self) {
        self.entry = None;
    }
}
