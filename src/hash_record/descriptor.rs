use crate::annotation;
use crate::error::RecordError;
use crate::types::*;
use smol_str::SmolStr;
use std::any::type_name;

// ─── Accessor ───────────────────────────────────────────────────────────────

/// Typed get/set handle for one field of `T`.
///
/// One variant per supported kind. `Opaque` marks a declared type with no
/// wire coercion, `Detached` a field that is not reachable at all.
pub enum Accessor<T> {
    Str {
        get: fn(&T) -> &String,
        get_mut: fn(&mut T) -> &mut String,
    },
    I32 {
        get: fn(&T) -> &i32,
        get_mut: fn(&mut T) -> &mut i32,
    },
    I64 {
        get: fn(&T) -> &i64,
        get_mut: fn(&mut T) -> &mut i64,
    },
    F32 {
        get: fn(&T) -> &f32,
        get_mut: fn(&mut T) -> &mut f32,
    },
    F64 {
        get: fn(&T) -> &f64,
        get_mut: fn(&mut T) -> &mut f64,
    },
    Bool {
        get: fn(&T) -> &bool,
        get_mut: fn(&mut T) -> &mut bool,
    },
    Opaque,
    Detached,
}

/// Field types with a wire coercion.
pub trait FieldType: Sized + 'static {
    fn accessor<T>(get: fn(&T) -> &Self, get_mut: fn(&mut T) -> &mut Self) -> Accessor<T>;
}

macro_rules! field_type {
    ($ty:ty, $variant:ident) => {
        impl FieldType for $ty {
            #[inline]
            fn accessor<T>(get: fn(&T) -> &Self, get_mut: fn(&mut T) -> &mut Self) -> Accessor<T> {
                Accessor::$variant { get, get_mut }
            }
        }
    };
}

field_type!(String, Str);
field_type!(i32, I32);
field_type!(i64, I64);
field_type!(f32, F32);
field_type!(f64, F64);
field_type!(bool, Bool);

// ─── FieldDescriptor ────────────────────────────────────────────────────────

/// Resolved mapping of one declared field to its store name and kind.
pub struct FieldDescriptor<T> {
    pub(crate) field_name: &'static str,
    /// Empty ⇒ excluded from reads and writes.
    pub(crate) store_name: SmolStr,
    pub(crate) kind: FieldKind,
    pub(crate) accessor: Accessor<T>,
}

impl<T> FieldDescriptor<T> {
    /// Name of the field as declared on the record type.
    #[inline]
    pub fn field_name(&self) -> &'static str {
        self.field_name
    }

    #[inline]
    pub fn store_name(&self) -> &str {
        &self.store_name
    }

    #[inline]
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    #[inline]
    pub fn is_excluded(&self) -> bool {
        self.store_name.is_empty()
    }

    pub(crate) fn unsupported(&self) -> RecordError {
        RecordError::UnsupportedFieldType {
            field: self.store_name.clone(),
            kind: self.kind,
        }
    }
}

// ─── RecordDescriptor ───────────────────────────────────────────────────────

/// Ordered field catalog of a record type, one slot per declared field.
///
/// Excluded fields keep their slot so that the value list returned by a
/// multi-field get lines up index for index with `fields()`.
pub struct RecordDescriptor<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T> RecordDescriptor<T> {
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[inline]
    pub fn fields(&self) -> &[FieldDescriptor<T>] {
        &self.fields
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Slots that take part in reads and writes.
    pub fn included(&self) -> impl Iterator<Item = &FieldDescriptor<T>> {
        self.fields.iter().filter(|f| !f.is_excluded())
    }

    /// Store names in declaration order, empty for excluded slots.
    pub fn store_names(&self) -> Vec<SmolStr> {
        self.fields.iter().map(|f| f.store_name.clone()).collect()
    }
}

// ─── RecordBuilder ──────────────────────────────────────────────────────────

/// Collects the field declarations of `T` in declaration order.
pub struct RecordBuilder<T> {
    type_name: &'static str,
    fields: Vec<FieldDescriptor<T>>,
}

impl<T: 'static> Default for RecordBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> RecordBuilder<T> {
    pub fn new() -> Self {
        Self {
            type_name: type_name::<T>(),
            fields: Vec::new(),
        }
    }

    /// A field of a supported kind. `annotation` is the raw annotation text,
    /// e.g. `"'msisdn'"`.
    pub fn field<F: FieldType>(
        mut self,
        name: &'static str,
        annotation: &str,
        get: fn(&T) -> &F,
        get_mut: fn(&mut T) -> &mut F,
    ) -> Self {
        self.fields.push(FieldDescriptor {
            field_name: name,
            store_name: store_name(annotation),
            kind: FieldKind::of::<F>(),
            accessor: F::accessor(get, get_mut),
        });
        self
    }

    /// An annotated field whose type `F` has no wire coercion. Reading or
    /// writing it fails with `UnsupportedFieldType`; an annotation without a
    /// name keeps it excluded and harmless.
    pub fn opaque<F: 'static>(mut self, name: &'static str, annotation: &str) -> Self {
        self.fields.push(FieldDescriptor {
            field_name: name,
            store_name: store_name(annotation),
            kind: FieldKind::Other(type_name::<F>()),
            accessor: Accessor::Opaque,
        });
        self
    }

    /// A field without annotation, or one that is not reachable.
    pub fn skip<F: 'static>(mut self, name: &'static str) -> Self {
        self.fields.push(FieldDescriptor {
            field_name: name,
            store_name: SmolStr::default(),
            kind: FieldKind::of::<F>(),
            accessor: Accessor::Detached,
        });
        self
    }

    /// Finish the catalog. Two included fields sharing a store name are
    /// rejected.
    pub fn build(self) -> Result<RecordDescriptor<T>, RecordError> {
        let mut seen: FastMap<&str, &'static str> = FastMap::default();
        for field in self.fields.iter().filter(|f| !f.is_excluded()) {
            if let Some(first) = seen.insert(field.store_name.as_str(), field.field_name) {
                return Err(RecordError::DuplicateStoreName {
                    name: field.store_name.clone(),
                    first,
                    second: field.field_name,
                });
            }
        }
        Ok(RecordDescriptor {
            type_name: self.type_name,
            fields: self.fields,
        })
    }
}

#[inline]
fn store_name(annotation: &str) -> SmolStr {
    annotation::parse(annotation)
        .map(SmolStr::new)
        .unwrap_or_default()
}
