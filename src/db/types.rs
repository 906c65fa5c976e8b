use crate::types::FieldMap;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::num::NonZeroUsize;
use std::sync::Arc;
use thiserror::Error;

// ─── HashStore ──────────────────────────────────────────────────────────────

/// The hash-store operations the record mapper is built on.
///
/// Each call is one round trip and is expected to be applied atomically by
/// the store. Values handed to `multi_field_set` are still natively typed;
/// turning them into wire strings is the store's job
/// (see [`crate::serialization::encode`]).
pub trait HashStore {
    fn exists(&self, key: &str) -> Result<bool, StoreError>;

    /// Set every entry of `fields` under `key`, leaving other fields alone.
    fn multi_field_set(&self, key: &str, fields: &FieldMap) -> Result<(), StoreError>;

    /// Values for `names`, same length and order, `None` for absent fields.
    /// Empty names are never present.
    fn multi_field_get(
        &self,
        key: &str,
        names: &[SmolStr],
    ) -> Result<Vec<Option<String>>, StoreError>;
}

macro_rules! forward_hash_store {
    ($($wrapper:ty),*) => {$(
        impl<S: HashStore + ?Sized> HashStore for $wrapper {
            #[inline]
            fn exists(&self, key: &str) -> Result<bool, StoreError> {
                (**self).exists(key)
            }

            #[inline]
            fn multi_field_set(&self, key: &str, fields: &FieldMap) -> Result<(), StoreError> {
                (**self).multi_field_set(key, fields)
            }

            #[inline]
            fn multi_field_get(
                &self,
                key: &str,
                names: &[SmolStr],
            ) -> Result<Vec<Option<String>>, StoreError> {
                (**self).multi_field_get(key, names)
            }
        }
    )*};
}

forward_hash_store!(&S, Box<S>, Arc<S>);

// ─── Config ─────────────────────────────────────────────────────────────────

/// Configuration for [`RedbHashStore::new_with_config`](super::RedbHashStore::new_with_config).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HashStoreConfig {
    /// Maximum number of decoded hashes kept in the LRU cache.
    ///
    /// Evicted hashes stay on disk in redb and are decoded again on the next
    /// access.
    ///
    /// Default: 10 000 hashes.
    pub cache_capacity: NonZeroUsize,
}

impl Default for HashStoreConfig {
    fn default() -> Self {
        Self {
            cache_capacity: NonZeroUsize::new(10_000).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

// ─── Error ──────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("redb error: {0}")]
    Redb(#[from] redb::Error),
    #[error("encoding error: {0}")]
    Encoding(String),
    #[error("store lock poisoned")]
    Poisoned,
    /// A multi-field get answered with a different number of values.
    #[error("multi-field get returned {actual} values for {expected} names")]
    ShortReply { expected: usize, actual: usize },
    /// Failure reported by an external store client.
    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl From<redb::DatabaseError> for StoreError {
    fn from(e: redb::DatabaseError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::TransactionError> for StoreError {
    fn from(e: redb::TransactionError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::TableError> for StoreError {
    fn from(e: redb::TableError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::CommitError> for StoreError {
    fn from(e: redb::CommitError) -> Self {
        StoreError::Redb(e.into())
    }
}

impl From<redb::StorageError> for StoreError {
    fn from(e: redb::StorageError) -> Self {
        StoreError::Redb(e.into())
    }
}
