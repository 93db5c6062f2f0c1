//! Storage backends for the DP cache.

/// A storage backend for the DP cache.
///
/// Implementations decide how computed values are laid out; the cache only
/// needs lookup and insert-once semantics.
///
/// # Contract
///
/// - `get` returns `None` for an index that was never inserted
/// - `get_or_try_insert` runs `compute` only when the index is vacant, and
///   stores nothing if `compute` fails
pub trait Backend<I, K> {
    /// Returns the cached value for `index`, if any.
    fn get(&self, index: &I) -> Option<&K>;

    /// Returns the cached value for `index`, computing and storing it first
    /// when it is missing.
    fn get_or_try_insert<E, F>(&mut self, index: I, compute: F) -> Result<&K, E>
    where
        F: FnOnce() -> Result<K, E>;

    /// Number of cached values.
    fn len(&self) -> usize;

    /// Whether nothing has been cached yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A Vec-based backend for usize indices.
///
/// Efficient for dense indices starting from 0. The Vec grows on demand to
/// reach the largest index inserted so far.
#[derive(Debug)]
pub struct VecBackend<K> {
    data: Vec<Option<K>>,
    filled: usize,
}

impl<K> VecBackend<K> {
    /// Creates a new empty VecBackend.
    pub fn new() -> Self {
        Self {
            data: Vec::new(),
            filled: 0,
        }
    }

    /// Creates a new VecBackend with room for indices `0..capacity`.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            filled: 0,
        }
    }
}

impl<K> Default for VecBackend<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Backend<usize, K> for VecBackend<K> {
    fn get(&self, index: &usize) -> Option<&K> {
        self.data.get(*index).and_then(Option::as_ref)
    }

    fn get_or_try_insert<E, F>(&mut self, index: usize, compute: F) -> Result<&K, E>
    where
        F: FnOnce() -> Result<K, E>,
    {
        if index >= self.data.len() {
            self.data.resize_with(index + 1, || None);
        }

        if self.data[index].is_none() {
            self.data[index] = Some(compute()?);
            self.filled += 1;
        }

        Ok(self.data[index].as_ref().expect("slot filled above"))
    }

    fn len(&self) -> usize {
        self.filled
    }
}
