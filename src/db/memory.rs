use super::types::{HashStore, StoreError};
use crate::serialization::encode_fields;
use crate::types::{FastMap, FieldMap};
use smol_str::SmolStr;
use std::sync::RwLock;

type Hash = FastMap<SmolStr, String>;

/// In-process hash store. Values are kept as wire strings, exactly as a
/// remote store would hold them.
#[derive(Default)]
pub struct MemoryHashStore {
    hashes: RwLock<FastMap<SmolStr, Hash>>,
}

impl MemoryHashStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a hash. Returns true if it existed.
    pub fn delete(&self, key: &str) -> Result<bool, StoreError> {
        let mut hashes = self.hashes.write().map_err(|_| StoreError::Poisoned)?;
        Ok(hashes.remove(key).is_some())
    }

    /// Every stored field of `key` as wire strings, sorted by name.
    pub fn fields(&self, key: &str) -> Result<Option<Vec<(SmolStr, String)>>, StoreError> {
        let hashes = self.hashes.read().map_err(|_| StoreError::Poisoned)?;
        Ok(hashes.get(key).map(|hash| {
            let mut fields: Vec<_> = hash.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
            fields.sort();
            fields
        }))
    }

    /// Set one raw wire string, bypassing any encoding.
    pub fn set_raw(&self, key: &str, field: &str, value: &str) -> Result<(), StoreError> {
        let mut hashes = self.hashes.write().map_err(|_| StoreError::Poisoned)?;
        hashes
            .entry(SmolStr::new(key))
            .or_default()
            .insert(SmolStr::new(field), value.to_owned());
        Ok(())
    }
}

impl HashStore for MemoryHashStore {
    fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let hashes = self.hashes.read().map_err(|_| StoreError::Poisoned)?;
        Ok(hashes.contains_key(key))
    }

    fn multi_field_set(&self, key: &str, fields: &FieldMap) -> Result<(), StoreError> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut hashes = self.hashes.write().map_err(|_| StoreError::Poisoned)?;
        hashes
            .entry(SmolStr::new(key))
            .or_default()
            .extend(encode_fields(fields));
        Ok(())
    }

    fn multi_field_get(
        &self,
        key: &str,
        names: &[SmolStr],
    ) -> Result<Vec<Option<String>>, StoreError> {
        let hashes = self.hashes.read().map_err(|_| StoreError::Poisoned)?;
        let hash = hashes.get(key);
        Ok(names
            .iter()
            .map(|name| {
                if name.is_empty() {
                    return None;
                }
                hash.and_then(|h| h.get(name)).cloned()
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FieldValue;

    fn names(list: &[&str]) -> Vec<SmolStr> {
        list.iter().map(|n| SmolStr::new(n)).collect()
    }

    #[test]
    fn test_set_merges_and_get_aligns() -> Result<(), StoreError> {
        let store = MemoryHashStore::new();
        let mut first = FieldMap::default();
        first.insert(SmolStr::new("id"), FieldValue::I64(1));
        first.insert(SmolStr::new("name"), FieldValue::from("a"));
        store.multi_field_set("k", &first)?;

        let mut second = FieldMap::default();
        second.insert(SmolStr::new("name"), FieldValue::from("b"));
        store.multi_field_set("k", &second)?;

        let values = store.multi_field_get("k", &names(&["name", "", "missing", "id"]))?;
        assert_eq!(
            values,
            vec![Some("b".to_owned()), None, None, Some("1".to_owned())]
        );
        Ok(())
    }

    #[test]
    fn test_exists_and_delete() -> Result<(), StoreError> {
        let store = MemoryHashStore::new();
        assert!(!store.exists("k")?);
        store.set_raw("k", "f", "v")?;
        assert!(store.exists("k")?);
        assert!(store.delete("k")?);
        assert!(!store.delete("k")?);
        assert!(!store.exists("k")?);
        Ok(())
    }

    #[test]
    fn test_empty_set_creates_nothing() -> Result<(), StoreError> {
        let store = MemoryHashStore::new();
        store.multi_field_set("k", &FieldMap::default())?;
        assert!(!store.exists("k")?);
        assert_eq!(store.fields("k")?, None);
        Ok(())
    }

    #[test]
    fn test_values_are_stored_as_wire_strings() -> Result<(), StoreError> {
        let store = MemoryHashStore::new();
        let mut fields = FieldMap::default();
        fields.insert(SmolStr::new("balance"), FieldValue::F32(999.99));
        fields.insert(SmolStr::new("active"), FieldValue::Bool(true));
        store.multi_field_set("k", &fields)?;
        assert_eq!(
            store.fields("k")?,
            Some(vec![
                (SmolStr::new("active"), "true".to_owned()),
                (SmolStr::new("balance"), "999.99".to_owned()),
            ])
        );
        Ok(())
    }
}
