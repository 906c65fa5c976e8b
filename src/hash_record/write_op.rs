use super::catalog::descriptor_for;
use super::descriptor::{Accessor, FieldDescriptor, RecordDescriptor};
use super::record::HashRecord;
use crate::db::HashStore;
use crate::error::RecordError;
use crate::types::*;
use smol_str::SmolStr;
use tracing::debug;

impl<T> FieldDescriptor<T> {
    /// Current value of this field on `record`, natively typed.
    pub fn value(&self, record: &T) -> Result<FieldValue, RecordError> {
        let value = match &self.accessor {
            Accessor::Str { get, .. } => FieldValue::Str(SmolStr::new(get(record))),
            Accessor::I32 { get, .. } => FieldValue::I32(*get(record)),
            Accessor::I64 { get, .. } => FieldValue::I64(*get(record)),
            Accessor::F32 { get, .. } => FieldValue::F32(*get(record)),
            Accessor::F64 { get, .. } => FieldValue::F64(*get(record)),
            Accessor::Bool { get, .. } => FieldValue::Bool(*get(record)),
            Accessor::Opaque | Accessor::Detached => return Err(self.unsupported()),
        };
        Ok(value)
    }
}

impl<T> RecordDescriptor<T> {
    /// Name → value map of every included field. Excluded slots are never read.
    pub fn field_map(&self, record: &T) -> Result<FieldMap, RecordError> {
        let mut fields = FieldMap::default();
        fields.reserve(self.len());
        for field in self.included() {
            fields.insert(field.store_name.clone(), field.value(record)?);
        }
        Ok(fields)
    }
}

/// Write `record` under `key` with a single multi-field set.
///
/// Only fields in `R`'s catalog are sent, so fields already stored under
/// `key` by a wider record type are left as they are. The map is built
/// completely before the store is called; a store failure is returned as is.
/// A record without included fields is not sent at all.
pub fn write_record<S, R>(store: &S, key: &str, record: &R) -> Result<(), RecordError>
where
    S: HashStore + ?Sized,
    R: HashRecord,
{
    let descriptor = descriptor_for::<R>()?;
    let fields = descriptor.field_map(record)?;
    if fields.is_empty() {
        debug!(key, record = descriptor.type_name(), "no mapped fields, write skipped");
        return Ok(());
    }

    debug!(key, record = descriptor.type_name(), fields = fields.len(), "multi-field set");
    store.multi_field_set(key, &fields)?;
    Ok(())
}
