// ─── Error ──────────────────────────────────────────────────────────────────
use crate::db::StoreError;
use crate::types::FieldKind;
use smol_str::SmolStr;
use std::num::{ParseFloatError, ParseIntError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("key not found: {key}")]
    KeyNotFound { key: String },
    #[error("field '{field}' has no value in the store")]
    FieldMissing { field: SmolStr },
    #[error("can not coerce \"{raw}\" into {kind} for field '{field}': {source}")]
    TypeCoercion {
        raw: String,
        field: SmolStr,
        kind: FieldKind,
        #[source]
        source: CoercionFailure,
    },
    #[error("field '{field}' has unsupported type {kind}")]
    UnsupportedFieldType { field: SmolStr, kind: FieldKind },
    #[error("store name '{name}' is used by both `{first}` and `{second}`")]
    DuplicateStoreName {
        name: SmolStr,
        first: &'static str,
        second: &'static str,
    },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Why a wire string could not be turned into a native value.
#[derive(Debug, Error, PartialEq)]
pub enum CoercionFailure {
    #[error(transparent)]
    Int(#[from] ParseIntError),
    #[error(transparent)]
    Float(#[from] ParseFloatError),
    #[error("invalid boolean literal")]
    Bool,
}
