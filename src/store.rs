//! Photo lookup.
//!
//! Photos are looked up through the [`PhotoStore`] trait. Three stores ship
//! with the crate:
//!
//! - [`MemoryStore`]: a fixed set of records, used by tests and embedders.
//! - [`JsonDirStore`]: one JSON record per photo anywhere under a content
//!   directory. The file stem is the photo id (`photos/abc123.json` holds
//!   photo `abc123`). Files are indexed when the store opens and read on
//!   every lookup.
//! - [`CachedStore`]: memoizes another store's hits. Misses are not cached,
//!   so a record added after a miss is found on the next lookup.
//!
//! Lookups never retry. A failing store surfaces its error unchanged; only
//! `Ok(None)` means the photo does not exist.

use crate::naming;
use crate::types::Photo;
use async_trait::async_trait;
use log::{debug, warn};
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::sync::RwLock;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("Invalid photo record {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Photo id is not path-safe: {0:?}")]
    InvalidId(String),
    #[error("Duplicate photo id {0:?} in {1}")]
    DuplicateId(String, PathBuf),
    #[error("Photo record {path} has id {id:?}, expected the file stem")]
    IdMismatch { path: PathBuf, id: String },
}

#[async_trait]
pub trait PhotoStore: Send + Sync {
    /// Look up one photo. `Ok(None)` means no such photo.
    async fn get_photo(&self, id: &str) -> Result<Option<Photo>, StoreError>;

    /// Every photo, ordered by id.
    async fn all_photos(&self) -> Result<Vec<Photo>, StoreError>;
}

// ============================================================================
// MemoryStore
// ============================================================================

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    photos: BTreeMap<String, Photo>,
}

impl MemoryStore {
    /// Build a store from records, rejecting unsafe or repeated ids.
    pub fn from_photos(photos: impl IntoIterator<Item = Photo>) -> Result<Self, StoreError> {
        let mut map = BTreeMap::new();
        for photo in photos {
            if !naming::is_path_safe(&photo.id) {
                return Err(StoreError::InvalidId(photo.id));
            }
            if map.contains_key(&photo.id) {
                return Err(StoreError::DuplicateId(photo.id, PathBuf::new()));
            }
            map.insert(photo.id.clone(), photo);
        }
        Ok(Self { photos: map })
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }
}

#[async_trait]
impl PhotoStore for MemoryStore {
    async fn get_photo(&self, id: &str) -> Result<Option<Photo>, StoreError> {
        Ok(self.photos.get(id).cloned())
    }

    async fn all_photos(&self) -> Result<Vec<Photo>, StoreError> {
        Ok(self.photos.values().cloned().collect())
    }
}

// ============================================================================
// JsonDirStore
// ============================================================================

#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
    /// Photo id → record file.
    index: BTreeMap<String, PathBuf>,
}

impl JsonDirStore {
    /// Index every `*.json` file under `root`.
    ///
    /// Files whose stem is not a path-safe id are skipped with a warning.
    /// Two files with the same stem are an error.
    pub fn open(root: &Path) -> Result<Self, StoreError> {
        let mut index = BTreeMap::new();
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry?;
            let path = entry.path();
            if !entry.file_type().is_file() || path.extension().is_none_or(|e| e != "json") {
                continue;
            }
            let Some(stem) = path.file_stem().map(|s| s.to_string_lossy().into_owned()) else {
                continue;
            };
            if !naming::is_path_safe(&stem) {
                warn!("Skipping {}: file name is not a photo id", path.display());
                continue;
            }
            if index.contains_key(&stem) {
                return Err(StoreError::DuplicateId(stem, path.to_path_buf()));
            }
            index.insert(stem, path.to_path_buf());
        }
        debug!("Indexed {} photo records under {}", index.len(), root.display());
        Ok(Self {
            root: root.to_path_buf(),
            index,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    async fn read_record(id: &str, path: &Path) -> Result<Photo, StoreError> {
        let content = tokio::fs::read_to_string(path).await?;
        let photo: Photo = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        if photo.id != id {
            return Err(StoreError::IdMismatch {
                path: path.to_path_buf(),
                id: photo.id,
            });
        }
        Ok(photo)
    }
}

#[async_trait]
impl PhotoStore for JsonDirStore {
    async fn get_photo(&self, id: &str) -> Result<Option<Photo>, StoreError> {
        match self.index.get(id) {
            Some(path) => Ok(Some(Self::read_record(id, path).await?)),
            None => Ok(None),
        }
    }

    async fn all_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let mut photos = Vec::with_capacity(self.index.len());
        for (id, path) in &self.index {
            photos.push(Self::read_record(id, path).await?);
        }
        Ok(photos)
    }
}

// ============================================================================
// CachedStore
// ============================================================================

/// Memoizing wrapper around another store.
pub struct CachedStore<S> {
    inner: S,
    cache: RwLock<HashMap<String, Photo>>,
}

impl<S: PhotoStore> CachedStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            cache: RwLock::new(HashMap::new()),
        }
    }

    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Number of photos currently cached.
    pub async fn cached_len(&self) -> usize {
        self.cache.read().await.len()
    }
}

#[async_trait]
impl<S: PhotoStore> PhotoStore for CachedStore<S> {
    async fn get_photo(&self, id: &str) -> Result<Option<Photo>, StoreError> {
        if let Some(photo) = self.cache.read().await.get(id) {
            debug!("Cache hit for photo {id}");
            return Ok(Some(photo.clone()));
        }
        let photo = self.inner.get_photo(id).await?;
        if let Some(photo) = &photo {
            self.cache
                .write()
                .await
                .insert(id.to_string(), photo.clone());
        }
        Ok(photo)
    }

    async fn all_photos(&self) -> Result<Vec<Photo>, StoreError> {
        let photos = self.inner.all_photos().await?;
        let mut cache = self.cache.write().await;
        for photo in &photos {
            cache.insert(photo.id.clone(), photo.clone());
        }
        Ok(photos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{photo, write_photo};
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    // =========================================================================
    // MemoryStore
    // =========================================================================

    #[tokio::test]
    async fn memory_store_finds_and_misses() {
        let store = MemoryStore::from_photos([photo("a"), photo("b")]).unwrap();
        assert_eq!(store.get_photo("a").await.unwrap().unwrap().id, "a");
        assert!(store.get_photo("zzz").await.unwrap().is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn memory_store_rejects_duplicates() {
        let result = MemoryStore::from_photos([photo("a"), photo("a")]);
        assert!(matches!(result, Err(StoreError::DuplicateId(id, _)) if id == "a"));
    }

    #[test]
    fn memory_store_rejects_unsafe_ids() {
        let result = MemoryStore::from_photos([photo("a/b")]);
        assert!(matches!(result, Err(StoreError::InvalidId(_))));
    }

    #[tokio::test]
    async fn memory_store_lists_in_id_order() {
        let store = MemoryStore::from_photos([photo("c"), photo("a"), photo("b")]).unwrap();
        let ids: Vec<String> = store
            .all_photos()
            .await
            .unwrap()
            .into_iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    // =========================================================================
    // JsonDirStore
    // =========================================================================

    #[tokio::test]
    async fn json_dir_store_reads_nested_records() {
        let tmp = TempDir::new().unwrap();
        write_photo(tmp.path(), &photo("abc"));
        fs::create_dir_all(tmp.path().join("2024/03")).unwrap();
        write_photo(&tmp.path().join("2024/03"), &photo("def"));

        let store = JsonDirStore::open(tmp.path()).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_photo("def").await.unwrap(), Some(photo("def")));
        assert!(store.get_photo("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn json_dir_store_ignores_other_files() {
        let tmp = TempDir::new().unwrap();
        write_photo(tmp.path(), &photo("abc"));
        fs::write(tmp.path().join("config.toml"), "").unwrap();
        fs::write(tmp.path().join("notes.txt"), "hello").unwrap();
        fs::write(tmp.path().join("bad name.json"), "{}").unwrap();

        let store = JsonDirStore::open(tmp.path()).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn json_dir_store_rejects_duplicate_stems() {
        let tmp = TempDir::new().unwrap();
        write_photo(tmp.path(), &photo("abc"));
        fs::create_dir_all(tmp.path().join("sub")).unwrap();
        write_photo(&tmp.path().join("sub"), &photo("abc"));

        let result = JsonDirStore::open(tmp.path());
        assert!(matches!(result, Err(StoreError::DuplicateId(id, _)) if id == "abc"));
    }

    #[tokio::test]
    async fn json_dir_store_propagates_parse_errors() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("abc.json"), "not json").unwrap();

        let store = JsonDirStore::open(tmp.path()).unwrap();
        let result = store.get_photo("abc").await;
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[tokio::test]
    async fn json_dir_store_checks_id_matches_stem() {
        let tmp = TempDir::new().unwrap();
        let json = serde_json::to_string(&photo("other")).unwrap();
        fs::write(tmp.path().join("abc.json"), json).unwrap();

        let store = JsonDirStore::open(tmp.path()).unwrap();
        let result = store.get_photo("abc").await;
        assert!(matches!(result, Err(StoreError::IdMismatch { id, .. }) if id == "other"));
    }

    #[tokio::test]
    async fn json_dir_store_read_failure_is_not_a_miss() {
        let tmp = TempDir::new().unwrap();
        write_photo(tmp.path(), &photo("abc"));
        let store = JsonDirStore::open(tmp.path()).unwrap();
        fs::remove_file(tmp.path().join("abc.json")).unwrap();

        let result = store.get_photo("abc").await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    // =========================================================================
    // CachedStore
    // =========================================================================

    /// Counts lookups reaching the wrapped store.
    struct CountingStore {
        inner: MemoryStore,
        lookups: AtomicUsize,
    }

    #[async_trait]
    impl PhotoStore for CountingStore {
        async fn get_photo(&self, id: &str) -> Result<Option<Photo>, StoreError> {
            self.lookups.fetch_add(1, Ordering::SeqCst);
            self.inner.get_photo(id).await
        }

        async fn all_photos(&self) -> Result<Vec<Photo>, StoreError> {
            self.inner.all_photos().await
        }
    }

    fn counting(photos: Vec<Photo>) -> CachedStore<CountingStore> {
        CachedStore::new(CountingStore {
            inner: MemoryStore::from_photos(photos).unwrap(),
            lookups: AtomicUsize::new(0),
        })
    }

    #[tokio::test]
    async fn cached_store_hits_inner_once() {
        let store = counting(vec![photo("a")]);
        for _ in 0..3 {
            assert!(store.get_photo("a").await.unwrap().is_some());
        }
        assert_eq!(store.inner().lookups.load(Ordering::SeqCst), 1);
        assert_eq!(store.cached_len().await, 1);
    }

    #[tokio::test]
    async fn cached_store_does_not_cache_misses() {
        let store = counting(vec![]);
        assert!(store.get_photo("a").await.unwrap().is_none());
        assert!(store.get_photo("a").await.unwrap().is_none());
        assert_eq!(store.inner().lookups.load(Ordering::SeqCst), 2);
        assert_eq!(store.cached_len().await, 0);
    }

    #[tokio::test]
    async fn cached_store_warms_from_listing() {
        let store = counting(vec![photo("a"), photo("b")]);
        store.all_photos().await.unwrap();
        store.get_photo("b").await.unwrap();
        assert_eq!(store.inner().lookups.load(Ordering::SeqCst), 0);
    }
}
