use super::descriptor::{RecordBuilder, RecordDescriptor};
use super::record::HashRecord;
use crate::error::RecordError;
use crate::types::FastMap;
use std::any::{Any, TypeId};
use std::sync::{Arc, OnceLock, RwLock};
use tracing::trace;

// ─── Descriptor cache ───────────────────────────────────────────────────────
//
// Populated once per record type and never mutated afterwards. Two threads
// racing on the same type both build an identical descriptor; whichever is
// inserted first is kept.

type Entry = Arc<dyn Any + Send + Sync>;

static CATALOG: OnceLock<RwLock<FastMap<TypeId, Entry>>> = OnceLock::new();

/// Build the catalog of `R` from its declaration, bypassing the cache.
pub fn build<R: HashRecord>() -> Result<RecordDescriptor<R>, RecordError> {
    R::describe(RecordBuilder::new()).build()
}

/// Cached catalog of `R`.
///
/// A poisoned cache lock only costs the cache: the descriptor is rebuilt for
/// the call, which yields the same result.
pub fn descriptor_for<R: HashRecord>() -> Result<Arc<RecordDescriptor<R>>, RecordError> {
    let catalog = CATALOG.get_or_init(RwLock::default);
    let id = TypeId::of::<R>();

    let cached = catalog.read().ok().and_then(|map| map.get(&id).cloned());
    if let Some(descriptor) = cached.and_then(|entry| entry.downcast::<RecordDescriptor<R>>().ok()) {
        return Ok(descriptor);
    }

    let built = Arc::new(build::<R>()?);
    trace!(record = built.type_name(), fields = built.len(), "catalog built");
    let Ok(mut map) = catalog.write() else {
        return Ok(built);
    };
    let entry = map
        .entry(id)
        .or_insert_with(|| Arc::clone(&built) as Entry)
        .clone();
    Ok(entry.downcast::<RecordDescriptor<R>>().unwrap_or(built))
}
