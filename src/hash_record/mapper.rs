use super::read_op::read_record;
use super::record::HashRecord;
use super::write_op::write_record;
use crate::db::HashStore;
use crate::error::RecordError;
use crate::types::MapperConfig;

/// A hash store paired with the read policy to use against it.
pub struct RecordMapper<S> {
    store: S,
    config: MapperConfig,
}

impl<S: HashStore> RecordMapper<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, MapperConfig::default())
    }

    pub fn with_config(store: S, config: MapperConfig) -> Self {
        Self { store, config }
    }

    #[inline]
    pub fn store(&self) -> &S {
        &self.store
    }

    #[inline]
    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// See [`write_record`].
    pub fn write<R: HashRecord>(&self, key: &str, record: &R) -> Result<(), RecordError> {
        write_record(&self.store, key, record)
    }

    /// See [`read_record`].
    pub fn read<R: HashRecord>(&self, key: &str, target: &mut R) -> Result<(), RecordError> {
        read_record(&self.store, key, target, self.config.missing_fields)
    }

    /// Read `key` into a fresh default instance of `R`.
    pub fn load<R: HashRecord + Default>(&self, key: &str) -> Result<R, RecordError> {
        let mut record = R::default();
        self.read(key, &mut record)?;
        Ok(record)
    }
}
