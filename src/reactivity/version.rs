// ============================================================================
// spark-select - Revisions and Memoisation
// Write counters for engine inputs and a version-keyed derived cache
// ============================================================================
//
// Every input write bumps its Revision. A Memo keeps the last computed value
// together with the revisions it was computed from and recomputes only when
// a revision it read has moved on.
// ============================================================================

use std::cell::RefCell;

// =============================================================================
// REVISION
// =============================================================================

/// Monotonic write counter for one engine input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Revision(u64);

impl Revision {
    /// Advance to the next revision.
    pub fn bump(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

// =============================================================================
// MEMO
// =============================================================================

/// Lazily computed value cached against a key of input revisions.
pub struct Memo<K, T> {
    cached: RefCell<Option<(K, T)>>,
}

impl<K, T> Default for Memo<K, T> {
    fn default() -> Self {
        Self {
            cached: RefCell::new(None),
        }
    }
}

impl<K: PartialEq + Copy, T: Clone> Memo<K, T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value for `key`, computing it first if the cache is
    /// empty or was filled under a different key.
    pub fn get_or_compute(&self, key: K, compute: impl FnOnce() -> T) -> T {
        if let Some((cached_key, value)) = self.cached.borrow().as_ref() {
            if *cached_key == key {
                return value.clone();
            }
        }

        let value = compute();
        *self.cached.borrow_mut() = Some((key, value.clone()));
        value
    }

    pub fn is_cached(&self) -> bool {
        self.cached.borrow().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn revision_bumps() {
        let mut rev = Revision::default();
        assert_eq!(rev.get(), 0);
        rev.bump();
        rev.bump();
        assert_eq!(rev.get(), 2);
    }

    #[test]
    fn memo_caches_until_key_changes() {
        let compute_count = Cell::new(0);
        let memo: Memo<u64, i32> = Memo::new();

        let compute = |n: i32| {
            compute_count.set(compute_count.get() + 1);
            n * 2
        };

        // First read computes
        assert_eq!(memo.get_or_compute(1, || compute(1)), 2);
        assert_eq!(compute_count.get(), 1);

        // Same key uses cache
        assert_eq!(memo.get_or_compute(1, || compute(1)), 2);
        assert_eq!(compute_count.get(), 1);

        // New key recomputes
        assert_eq!(memo.get_or_compute(2, || compute(5)), 10);
        assert_eq!(compute_count.get(), 2);
    }
}
