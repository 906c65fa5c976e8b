use rustc_hash::FxHasher;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::BuildHasherDefault;

pub type FastMap<K, V> = std::collections::HashMap<K, V, BuildHasherDefault<FxHasher>>;

/// Name → native value map handed to [`HashStore::multi_field_set`](crate::db::HashStore).
pub type FieldMap = FastMap<SmolStr, FieldValue>;

// ─── FieldKind ──────────────────────────────────────────────────────────────

/// Declared kind of a record field.
///
/// `Other` carries the type name of a field whose type has no wire coercion.
/// Such fields may sit in a descriptor; they only fail once a read or write
/// actually has to convert them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    Int32,
    Int64,
    Float32,
    Float64,
    Bool,
    Other(&'static str),
}

impl FieldKind {
    /// Resolve the kind of `F` by type identity.
    pub fn of<F: 'static>() -> Self {
        let id = TypeId::of::<F>();
        if id == TypeId::of::<String>() {
            FieldKind::String
        } else if id == TypeId::of::<i32>() {
            FieldKind::Int32
        } else if id == TypeId::of::<i64>() {
            FieldKind::Int64
        } else if id == TypeId::of::<f32>() {
            FieldKind::Float32
        } else if id == TypeId::of::<f64>() {
            FieldKind::Float64
        } else if id == TypeId::of::<bool>() {
            FieldKind::Bool
        } else {
            FieldKind::Other(type_name::<F>())
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, FieldKind::Other(_))
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::String => f.write_str("string"),
            FieldKind::Int32 => f.write_str("int32"),
            FieldKind::Int64 => f.write_str("int64"),
            FieldKind::Float32 => f.write_str("float32"),
            FieldKind::Float64 => f.write_str("float64"),
            FieldKind::Bool => f.write_str("bool"),
            FieldKind::Other(name) => f.write_str(name),
        }
    }
}

// ─── FieldValue ─────────────────────────────────────────────────────────────

/// A field value on its way to the store, still natively typed.
/// The string encoding happens at the store boundary (see [`crate::serialization`]).
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Str(SmolStr),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::Str(_) => FieldKind::String,
            FieldValue::I32(_) => FieldKind::Int32,
            FieldValue::I64(_) => FieldKind::Int64,
            FieldValue::F32(_) => FieldKind::Float32,
            FieldValue::F64(_) => FieldKind::Float64,
            FieldValue::Bool(_) => FieldKind::Bool,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Str(SmolStr::from(s))
    }
}

impl From<i32> for FieldValue {
    fn from(n: i32) -> Self {
        FieldValue::I32(n)
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::I64(n)
    }
}

impl From<f32> for FieldValue {
    fn from(n: f32) -> Self {
        FieldValue::F32(n)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::F64(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

// ─── Read policy / config ───────────────────────────────────────────────────

/// What a read does when the store has no value for a non-excluded field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingFieldPolicy {
    /// Leave the target field at its current value.
    #[default]
    Lenient,
    /// Fail with [`RecordError::FieldMissing`](crate::error::RecordError::FieldMissing).
    Strict,
}

/// Configuration for [`RecordMapper`](crate::hash_record::RecordMapper).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    pub missing_fields: MissingFieldPolicy,
}
