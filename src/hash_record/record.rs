use super::descriptor::RecordBuilder;

// ─── HashRecord ─────────────────────────────────────────────────────────────

/// A record type that can be stored as a flat hash.
///
/// Implementors declare every field once, in declaration order, on the
/// builder they are handed. The resulting catalog is cached per type.
///
/// ```
/// use hash_record::hash_record::{HashRecord, RecordBuilder};
///
/// #[derive(Default)]
/// struct Subscriber {
///     id: i64,
///     msisdn: String,
///     scratch: Vec<u8>,
/// }
///
/// impl HashRecord for Subscriber {
///     fn describe(fields: RecordBuilder<Self>) -> RecordBuilder<Self> {
///         fields
///             .field::<i64>("id", "'id'", |r| &r.id, |r| &mut r.id)
///             .field::<String>("msisdn", "'msisdn'", |r| &r.msisdn, |r| &mut r.msisdn)
///             .skip::<Vec<u8>>("scratch")
///     }
/// }
/// ```
pub trait HashRecord: Sized + 'static {
    fn describe(fields: RecordBuilder<Self>) -> RecordBuilder<Self>;
}

/// Derive a [`HashRecord`] impl from a field list.
///
/// Each entry is one of
/// - `name: Type = "'store-name'"` for a field of a supported kind,
/// - `name: Type = opaque "'store-name'"` for an annotated field of any other type,
/// - `name: Type` for a field without annotation.
///
/// Entries must follow the struct's declaration order.
///
/// ```
/// use hash_record::hash_record;
///
/// #[derive(Default)]
/// struct Price {
///     title: String,
///     amount: f32,
///     note: String,
/// }
///
/// hash_record!(Price {
///     title: String = "'title123'",
///     amount: f32 = "'price456'",
///     note: String,
/// });
/// ```
#[macro_export]
macro_rules! hash_record {
    (@fields $b:expr; ) => { $b };
    (@fields $b:expr; $field:ident : $fty:ty = opaque $tag:literal $(, $($rest:tt)*)?) => {
        $crate::hash_record!(@fields
            $b.opaque::<$fty>(stringify!($field), $tag);
            $($($rest)*)?)
    };
    (@fields $b:expr; $field:ident : $fty:ty = $tag:literal $(, $($rest:tt)*)?) => {
        $crate::hash_record!(@fields
            $b.field::<$fty>(stringify!($field), $tag, |r| &r.$field, |r| &mut r.$field);
            $($($rest)*)?)
    };
    (@fields $b:expr; $field:ident : $fty:ty $(, $($rest:tt)*)?) => {
        $crate::hash_record!(@fields
            $b.skip::<$fty>(stringify!($field));
            $($($rest)*)?)
    };
    ($record:ident { $($body:tt)* }) => {
        impl $crate::hash_record::HashRecord for $record {
            fn describe(
                fields: $crate::hash_record::RecordBuilder<Self>,
            ) -> $crate::hash_record::RecordBuilder<Self> {
                $crate::hash_record!(@fields fields; $($body)*)
            }
        }
    };
}
