/// A cached collection with explicit staleness, keyed by a fixed name.
///
/// Plain owned state rather than anything global, so a store (and its
/// tests) can hold a deterministic instance. `read` yields nothing once
/// the entry is stale; the owner is expected to refetch and `store`.
#[derive(Debug)]
pub struct CachedQuery<T> {
    key: &'static str,
    value: Option<T>,
    stale: bool,
}

impl<T> CachedQuery<T> {
    /// A new entry starts stale, forcing the first read to fetch
    pub fn new(key: &'static str) -> Self {
        CachedQuery {
            key,
            value: None,
            stale: true,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Fresh value, if any
    pub fn read(&self) -> Option<&T> {
        if self.stale { None } else { self.value.as_ref() }
    }

    /// Last known value regardless of freshness
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    pub fn store(&mut self, value: T) {
        self.value = Some(value);
        self.stale = false;
    }

    /// Mark stale so the next read refetches instead of reusing prior data
    pub fn invalidate(&mut self) {
        tracing::debug!(key = self.key, "cache invalidated");
        self.stale = true;
    }

    pub fn is_stale(&self) -> bool {
        self.stale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entry_is_stale() {
        let query: CachedQuery<Vec<u32>> = CachedQuery::new("tasks");
        assert!(query.is_stale());
        assert_eq!(query.read(), None);
        assert_eq!(query.peek(), None);
    }

    #[test]
    fn test_store_makes_value_readable() {
        let mut query = CachedQuery::new("tasks");
        query.store(vec![1, 2]);
        assert!(!query.is_stale());
        assert_eq!(query.read(), Some(&vec![1, 2]));
    }

    #[test]
    fn test_invalidate_hides_value_until_restored() {
        let mut query = CachedQuery::new("tasks");
        query.store(vec![1]);
        query.invalidate();

        // stale: read refuses, peek still sees the last known value
        assert_eq!(query.read(), None);
        assert_eq!(query.peek(), Some(&vec![1]));

        query.store(vec![1, 2, 3]);
        assert_eq!(query.read(), Some(&vec![1, 2, 3]));
    }
}
