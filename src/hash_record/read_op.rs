use super::catalog::descriptor_for;
use super::descriptor::{Accessor, FieldDescriptor, RecordDescriptor};
use super::record::HashRecord;
use crate::db::{HashStore, StoreError};
use crate::deserialization::FromWire;
use crate::error::RecordError;
use crate::types::*;
use tracing::{debug, trace};

impl<T> FieldDescriptor<T> {
    /// Coerce `raw` into this field's kind and store it on `target`.
    pub fn assign(&self, target: &mut T, raw: &str) -> Result<(), RecordError> {
        match &self.accessor {
            Accessor::Str { get_mut, .. } => self.coerce_into(get_mut(target), raw),
            Accessor::I32 { get_mut, .. } => self.coerce_into(get_mut(target), raw),
            Accessor::I64 { get_mut, .. } => self.coerce_into(get_mut(target), raw),
            Accessor::F32 { get_mut, .. } => self.coerce_into(get_mut(target), raw),
            Accessor::F64 { get_mut, .. } => self.coerce_into(get_mut(target), raw),
            Accessor::Bool { get_mut, .. } => self.coerce_into(get_mut(target), raw),
            Accessor::Opaque | Accessor::Detached => Err(self.unsupported()),
        }
    }

    #[inline]
    fn coerce_into<F: FromWire>(&self, slot: &mut F, raw: &str) -> Result<(), RecordError> {
        *slot = F::from_wire(raw).map_err(|source| RecordError::TypeCoercion {
            raw: raw.to_owned(),
            field: self.store_name.clone(),
            kind: self.kind,
            source,
        })?;
        Ok(())
    }
}

impl<T> RecordDescriptor<T> {
    /// Apply a multi-field get reply to `target`, slot by slot.
    ///
    /// `values` must line up with [`RecordDescriptor::store_names`]. Stops at
    /// the first coercion failure; fields assigned before it keep their new
    /// values.
    pub fn apply(
        &self,
        target: &mut T,
        values: Vec<Option<String>>,
        policy: MissingFieldPolicy,
    ) -> Result<(), RecordError> {
        if values.len() != self.len() {
            return Err(StoreError::ShortReply {
                expected: self.len(),
                actual: values.len(),
            }
            .into());
        }

        for (field, value) in self.fields().iter().zip(values) {
            if field.is_excluded() {
                trace!(field = field.field_name(), "excluded slot skipped");
                continue;
            }
            let Some(raw) = value else {
                match policy {
                    MissingFieldPolicy::Lenient => {
                        trace!(field = field.store_name(), "no stored value, field left as is");
                        continue;
                    }
                    MissingFieldPolicy::Strict => {
                        return Err(RecordError::FieldMissing {
                            field: field.store_name.clone(),
                        });
                    }
                }
            };
            field.assign(target, &raw)?;
        }
        Ok(())
    }
}

/// Populate `target` from the hash stored under `key`.
///
/// Checks that `key` exists first and fails with `KeyNotFound` otherwise,
/// then fetches every catalog slot with one multi-field get. At most two
/// round trips. Stored fields outside `R`'s catalog are ignored.
pub fn read_record<S, R>(
    store: &S,
    key: &str,
    target: &mut R,
    policy: MissingFieldPolicy,
) -> Result<(), RecordError>
where
    S: HashStore + ?Sized,
    R: HashRecord,
{
    let descriptor = descriptor_for::<R>()?;

    if !store.exists(key)? {
        return Err(RecordError::KeyNotFound {
            key: key.to_owned(),
        });
    }

    let names = descriptor.store_names();
    debug!(key, record = descriptor.type_name(), fields = names.len(), "multi-field get");
    let values = store.multi_field_get(key, &names)?;
    descriptor.apply(target, values, policy)
}
