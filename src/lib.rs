//! Map typed records to and from flat hashes in a string-keyed store.
//!
//! A record type declares its fields once ([`hash_record::HashRecord`] or the
//! [`hash_record!`] macro). Each field's store name comes from its annotation,
//! the text between the first two single quotes. Writes send every named
//! field in one multi-field set; reads check the key exists, fetch all named
//! fields in one multi-field get and coerce the returned strings back into
//! the record.

pub mod annotation;
pub mod db;
pub mod deserialization;
pub mod error;
pub mod hash_record;
pub mod serialization;
pub mod types;

pub use db::{HashStore, HashStoreConfig, MemoryHashStore, RedbHashStore, StoreError};
pub use error::{CoercionFailure, RecordError};
pub use hash_record::{HashRecord, RecordMapper, read_record, write_record};
pub use types::{FieldKind, FieldMap, FieldValue, MapperConfig, MissingFieldPolicy};
