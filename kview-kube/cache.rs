use kube::ResourceExt;
use kube::api::DynamicObject;
use std::collections::BTreeMap;
use std::sync::RwLock;

use crate::Kind;
use crate::utils::labels_match;

#[cfg(test)]
#[path = "./cache.tests.rs"]
mod cache_tests;

/// Possible errors from the object cache.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CacheError {
    /// Cache backend cannot serve the request.
    #[error("object cache unavailable: {0}")]
    Unavailable(String),

    /// Object cannot be stored as it lacks kind or name.
    #[error("object cannot be cached: {0}")]
    InvalidObject(String),

    /// Cache lock was poisoned by a panicking writer.
    #[error("object cache lock is poisoned")]
    Poisoned,
}

/// Identifies a single object in the cache.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CacheKey {
    pub namespace: String,
    pub kind: Kind,
    pub name: String,
}

impl CacheKey {
    /// Creates new [`CacheKey`] instance.
    pub fn new(namespace: impl Into<String>, kind: impl Into<Kind>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates [`CacheKey`] for the provided object.\
    /// **Note** that cluster scoped objects get an empty namespace.
    pub fn from_object(object: &DynamicObject) -> Result<Self, CacheError> {
        let Some(kind) = Kind::from_object(object) else {
            return Err(CacheError::InvalidObject("missing kind".to_owned()));
        };

        let Some(name) = object.metadata.name.as_deref().filter(|n| !n.is_empty()) else {
            return Err(CacheError::InvalidObject(format!("{kind} is missing name")));
        };

        Ok(Self::new(object.namespace().unwrap_or_default(), kind, name))
    }
}

/// Query for objects of one kind in one namespace, narrowed down by labels.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheQuery {
    pub namespace: String,
    pub kind: Kind,
    pub selector: BTreeMap<String, String>,
}

impl CacheQuery {
    /// Creates new [`CacheQuery`] for all objects of `kind` in `namespace`.
    pub fn new(namespace: impl Into<String>, kind: impl Into<Kind>) -> Self {
        Self {
            namespace: namespace.into(),
            kind: kind.into(),
            selector: BTreeMap::new(),
        }
    }

    /// Narrows down the query to objects having all the `selector` labels.
    pub fn with_selector(mut self, selector: BTreeMap<String, String>) -> Self {
        self.selector = selector;
        self
    }

    /// Returns `true` if the `object` is matched by this query.
    pub fn matches(&self, key: &CacheKey, object: &DynamicObject) -> bool {
        key.namespace == self.namespace && key.kind == self.kind && labels_match(&self.selector, object.metadata.labels.as_ref())
    }
}

/// Read access to cluster objects.\
/// `get` returns `Ok(None)` when the object does not exist.
pub trait ObjectCache: Send + Sync {
    /// Gets a single object.
    fn get(&self, key: &CacheKey) -> Result<Option<DynamicObject>, CacheError>;

    /// Lists objects matching the query.
    fn list(&self, query: &CacheQuery) -> Result<Vec<DynamicObject>, CacheError>;
}

/// In-memory [`ObjectCache`] that lists objects in key order.
#[derive(Default)]
pub struct MemoryCache {
    objects: RwLock<BTreeMap<CacheKey, DynamicObject>>,
}

impl MemoryCache {
    /// Creates new [`MemoryCache`] filled with `objects`.
    pub fn from_objects(objects: impl IntoIterator<Item = DynamicObject>) -> Result<Self, CacheError> {
        let cache = Self::default();
        for object in objects {
            cache.store(object)?;
        }

        Ok(cache)
    }

    /// Stores or replaces the object.
    pub fn store(&self, object: DynamicObject) -> Result<(), CacheError> {
        let key = CacheKey::from_object(&object)?;
        let mut objects = self.objects.write().map_err(|_| CacheError::Poisoned)?;
        tracing::trace!("storing {} {}/{}", key.kind, key.namespace, key.name);
        objects.insert(key, object);

        Ok(())
    }

    /// Removes the object, returning it if it was cached.
    pub fn remove(&self, key: &CacheKey) -> Result<Option<DynamicObject>, CacheError> {
        let mut objects = self.objects.write().map_err(|_| CacheError::Poisoned)?;
        Ok(objects.remove(key))
    }

    /// Returns number of cached objects.
    pub fn len(&self) -> usize {
        self.objects.read().map(|o| o.len()).unwrap_or_default()
    }

    /// Returns `true` if there are no cached objects.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ObjectCache for MemoryCache {
    fn get(&self, key: &CacheKey) -> Result<Option<DynamicObject>, CacheError> {
        let objects = self.objects.read().map_err(|_| CacheError::Poisoned)?;
        Ok(objects.get(key).cloned())
    }

    fn list(&self, query: &CacheQuery) -> Result<Vec<DynamicObject>, CacheError> {
        let objects = self.objects.read().map_err(|_| CacheError::Poisoned)?;
        Ok(objects
            .iter()
            .filter(|(key, object)| query.matches(key, object))
            .map(|(_, object)| object.clone())
            .collect())
    }
}
