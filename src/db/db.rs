use super::types::{HashStore, HashStoreConfig, StoreError};
use crate::serialization::encode_fields;
use crate::types::FieldMap;
use lru::LruCache;
use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use smol_str::SmolStr;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

// Key: hash key
// Value: CBOR-encoded map of field name → wire string
const HASHES_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("hashes");

type StoredHash = BTreeMap<String, String>;

/// Durable hash store on redb.
///
/// Every operation goes through the cache lock, so the write-through LRU
/// never serves a hash older than the last committed write.
pub struct RedbHashStore {
    db: Database,
    cache: Mutex<LruCache<SmolStr, Arc<StoredHash>>>,
}

impl RedbHashStore {
    /// Open or create the store at the specified path.
    pub fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        Self::new_with_config(path, HashStoreConfig::default())
    }

    pub fn new_with_config(path: impl AsRef<Path>, config: HashStoreConfig) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let db = Database::create(path)?;

        // Make sure the table exists before the first read transaction.
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(HASHES_TABLE)?;
        }
        write_txn.commit()?;

        info!(path = %path.display(), cache_capacity = config.cache_capacity.get(), "hash store opened");
        Ok(Self {
            db,
            cache: Mutex::new(LruCache::new(config.cache_capacity)),
        })
    }

    /// Remove a hash. Returns true if it existed.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut cache = self.lock_cache()?;
        let write_txn = self.db.begin_write()?;
        let existed = {
            let mut table = write_txn.open_table(HASHES_TABLE)?;
            table.remove(key)?.is_some()
        };
        write_txn.commit()?;
        cache.pop(key);
        Ok(existed)
    }

    /// Every stored field of `key` as wire strings, sorted by name.
    pub fn fields(&self, key: &str) -> Result<Option<Vec<(SmolStr, String)>>, StoreError> {
        let mut cache = self.lock_cache()?;
        Ok(self.load(&mut cache, key)?.map(|hash| {
            hash.iter()
                .map(|(k, v)| (SmolStr::new(k), v.clone()))
                .collect()
        }))
    }

    fn lock_cache(&self) -> Result<MutexGuard<'_, LruCache<SmolStr, Arc<StoredHash>>>, StoreError> {
        self.cache.lock().map_err(|_| StoreError::Poisoned)
    }

    fn load(
        &self,
        cache: &mut LruCache<SmolStr, Arc<StoredHash>>,
        key: &str,
    ) -> Result<Option<Arc<StoredHash>>, StoreError> {
        if let Some(hit) = cache.get(key) {
            return Ok(Some(Arc::clone(hit)));
        }

        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(HASHES_TABLE)?;
        let Some(access) = table.get(key)? else {
            return Ok(None);
        };
        let hash = Arc::new(decode_hash(access.value())?);
        cache.put(SmolStr::new(key), Arc::clone(&hash));
        Ok(Some(hash))
    }
}

impl HashStore for RedbHashStore {
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let mut cache = self.lock_cache()?;
        Ok(self.load(&mut cache, key)?.is_some())
    }

    /// Read, merge and write back inside one redb write transaction.
    fn multi_field_set(&self, key: &str, fields: &FieldMap) -> Result<(), StoreError> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut cache = self.lock_cache()?;
        let write_txn = self.db.begin_write()?;
        let hash = {
            let mut table = write_txn.open_table(HASHES_TABLE)?;
            let mut hash = match table.get(key)? {
                Some(access) => decode_hash(access.value())?,
                None => StoredHash::new(),
            };
            hash.extend(encode_fields(fields).map(|(name, value)| (name.to_string(), value)));
            let bytes = encode_hash(&hash)?;
            table.insert(key, bytes.as_slice())?;
            hash
        };
        write_txn.commit()?;

        debug!(key, fields = fields.len(), stored = hash.len(), "hash merged");
        cache.put(SmolStr::new(key), Arc::new(hash));
        Ok(())
    }

    fn multi_field_get(
        &self,
        key: &str,
        names: &[SmolStr],
    ) -> Result<Vec<Option<String>>, StoreError> {
        let mut cache = self.lock_cache()?;
        let hash = self.load(&mut cache, key)?;
        Ok(names
            .iter()
            .map(|name| {
                if name.is_empty() {
                    return None;
                }
                hash.as_ref().and_then(|h| h.get(name.as_str())).cloned()
            })
            .collect())
    }
}

fn encode_hash(hash: &StoredHash) -> Result<Vec<u8>, StoreError> {
    cbor4ii::serde::to_vec(Vec::new(), hash).map_err(|e| StoreError::Encoding(e.to_string()))
}

fn decode_hash(bytes: &[u8]) -> Result<StoredHash, StoreError> {
    cbor4ii::serde::from_slice(bytes).map_err(|e| StoreError::Encoding(e.to_string()))
}
