//! Memoizing blueprint store.
//!
//! Parses schema text from a [`BlueprintSource`] on first use and caches
//! the parsed document for the lifetime of the store. There is no
//! eviction; the set of content types is small and fixed per deployment.

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::debug;

use crate::error::Result;
use crate::source::BlueprintSource;
use crate::types::Blueprint;

/// Load-once cache of parsed blueprints, keyed by content type.
///
/// Safe to share between request-handling threads: the load-or-insert
/// step goes through the map's entry API, so a racing second request for
/// the same content type waits for the first parse instead of repeating it.
pub struct BlueprintStore {
    source: Box<dyn BlueprintSource>,
    cache: DashMap<String, Arc<Blueprint>>,
}

impl BlueprintStore {
    /// Create a store over the given source with an empty cache.
    pub fn new(source: Box<dyn BlueprintSource>) -> Self {
        Self {
            source,
            cache: DashMap::new(),
        }
    }

    /// The cached blueprint for `type_id`, loading and parsing it on first
    /// use. Repeated calls for one content type return the same document.
    pub fn get(&self, type_id: &str) -> Result<Arc<Blueprint>> {
        if let Some(cached) = self.cache.get(type_id) {
            return Ok(Arc::clone(cached.value()));
        }
        match self.cache.entry(type_id.to_string()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => {
                let raw = self.source.load(type_id)?;
                let blueprint: Blueprint = serde_yaml_ng::from_str(&raw)?;
                debug!(
                    type_id,
                    fields = blueprint.fields.len(),
                    "blueprint parsed and cached"
                );
                let inserted = entry.insert(Arc::new(blueprint));
                Ok(Arc::clone(&inserted))
            }
        }
    }

    /// Drop all cached documents. Intended for tests and schema reloads.
    pub fn clear(&self) {
        self.cache.clear();
    }

    /// Number of cached documents.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Whether the cache holds no documents.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BlueprintError;
    use crate::source::MemorySource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source that counts how often a load is attempted.
    struct CountingSource {
        inner: MemorySource,
        loads: std::sync::Arc<AtomicUsize>,
    }

    impl BlueprintSource for CountingSource {
        fn load(&self, type_id: &str) -> Result<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(type_id)
        }
    }

    fn article_store() -> (BlueprintStore, std::sync::Arc<AtomicUsize>) {
        let loads = std::sync::Arc::new(AtomicUsize::new(0));
        let source = CountingSource {
            inner: MemorySource::new().insert(
                "article",
                "title: Article\nfields:\n  title:\n    label: Title\n",
            ),
            loads: Arc::clone(&loads),
        };
        (BlueprintStore::new(Box::new(source)), loads)
    }

    #[test]
    fn second_get_returns_cached_document() {
        let (store, loads) = article_store();
        let first = store.get("article").unwrap();
        let second = store.get("article").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(loads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn clear_forces_reload() {
        let (store, loads) = article_store();
        let first = store.get("article").unwrap();
        store.clear();
        assert!(store.is_empty());
        let second = store.get("article").unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
        assert_eq!(loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn missing_type_propagates_not_found() {
        let store = BlueprintStore::new(Box::new(MemorySource::new()));
        let err = store.get("missing").unwrap_err();
        assert!(matches!(err, BlueprintError::NotFound { .. }));
        assert!(store.is_empty());
    }

    #[test]
    fn malformed_yaml_is_an_error_and_not_cached() {
        let source = MemorySource::new().insert("broken", "fields: [not, a, mapping\n");
        let store = BlueprintStore::new(Box::new(source));
        assert!(matches!(
            store.get("broken"),
            Err(BlueprintError::Yaml(_))
        ));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn distinct_types_cached_separately() {
        let source = MemorySource::new()
            .insert("article", "title: Article\n")
            .insert("page", "title: Page\n");
        let store = BlueprintStore::new(Box::new(source));
        assert_eq!(
            store.get("article").unwrap().title.as_deref(),
            Some("Article")
        );
        assert_eq!(store.get("page").unwrap().title.as_deref(), Some("Page"));
        assert_eq!(store.len(), 2);
    }
}
