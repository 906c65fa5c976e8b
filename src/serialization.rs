use super::types::*;
use smol_str::SmolStr;

// ─── Wire encoding (native → store string) ─────────────────────────────────
//
//  kind      │ encoding
//  ──────────┼──────────────────────────────
//  String    │ identity
//  Int32/64  │ decimal
//  Float32/64│ shortest decimal that parses back to the same value
//  Bool      │ "true" / "false"

/// Encode a single native value into its wire string.
#[inline]
pub fn encode(value: &FieldValue) -> String {
    match value {
        FieldValue::Str(s) => s.to_string(),
        FieldValue::I32(n) => n.to_string(),
        FieldValue::I64(n) => n.to_string(),
        // `Display` on floats prints the shortest round-tripping form, so an
        // f32 is never widened before formatting (999.99f32 stays "999.99").
        FieldValue::F32(n) => n.to_string(),
        FieldValue::F64(n) => n.to_string(),
        FieldValue::Bool(true) => "true".to_owned(),
        FieldValue::Bool(false) => "false".to_owned(),
    }
}

/// Encode every entry of a field map, preserving the names.
pub fn encode_fields(fields: &FieldMap) -> impl Iterator<Item = (SmolStr, String)> + '_ {
    fields
        .iter()
        .map(|(name, value)| (name.clone(), encode(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_primitives() {
        assert_eq!(encode(&FieldValue::from("19966778899")), "19966778899");
        assert_eq!(encode(&FieldValue::I32(-9)), "-9");
        assert_eq!(encode(&FieldValue::I64(i64::MAX)), "9223372036854775807");
        assert_eq!(encode(&FieldValue::Bool(true)), "true");
        assert_eq!(encode(&FieldValue::Bool(false)), "false");
    }

    #[test]
    fn test_encode_floats_without_widening() {
        assert_eq!(encode(&FieldValue::F32(999.99)), "999.99");
        assert_eq!(encode(&FieldValue::F32(3.14)), "3.14");
        assert_eq!(encode(&FieldValue::F64(0.1)), "0.1");
        assert_eq!(encode(&FieldValue::F64(2.0)), "2");
    }

    #[test]
    fn test_encode_fields_keeps_names() {
        let mut fields = FieldMap::default();
        fields.insert(SmolStr::new("id"), FieldValue::I64(7));
        fields.insert(SmolStr::new("ok"), FieldValue::Bool(true));
        let mut encoded: Vec<_> = encode_fields(&fields).collect();
        encoded.sort();
        assert_eq!(
            encoded,
            vec![
                (SmolStr::new("id"), "7".to_owned()),
                (SmolStr::new("ok"), "true".to_owned()),
            ]
        );
    }
}
