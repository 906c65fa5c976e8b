use super::error::CoercionFailure;

// ─── FromWire Trait ─────────────────────────────────────────────────────────

/// Native field types that can be rebuilt from a store string.
///
/// Implemented for the six primitive kinds only; everything else is an
/// unsupported field type.
pub trait FromWire: Sized {
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure>;
}

impl FromWire for String {
    #[inline]
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure> {
        Ok(raw.to_owned())
    }
}

impl FromWire for i32 {
    #[inline]
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure> {
        Ok(raw.parse::<i32>()?)
    }
}

impl FromWire for i64 {
    #[inline]
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure> {
        Ok(raw.parse::<i64>()?)
    }
}

impl FromWire for f32 {
    #[inline]
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure> {
        Ok(raw.parse::<f32>()?)
    }
}

impl FromWire for f64 {
    #[inline]
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure> {
        Ok(raw.parse::<f64>()?)
    }
}

impl FromWire for bool {
    /// Accepts `true`/`false`/`t`/`f` in any case, and `1`/`0`.
    fn from_wire(raw: &str) -> Result<Self, CoercionFailure> {
        const TRUE: [&str; 3] = ["true", "t", "1"];
        const FALSE: [&str; 3] = ["false", "f", "0"];
        if TRUE.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
            Ok(true)
        } else if FALSE.iter().any(|lit| raw.eq_ignore_ascii_case(lit)) {
            Ok(false)
        } else {
            Err(CoercionFailure::Bool)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_is_identity() {
        assert_eq!(String::from_wire("").unwrap(), "");
        assert_eq!(
            String::from_wire("{\"there\":\"are\"}").unwrap(),
            "{\"there\":\"are\"}"
        );
    }

    #[test]
    fn test_integers() {
        assert_eq!(i64::from_wire("789").unwrap(), 789);
        assert_eq!(i64::from_wire("-42").unwrap(), -42);
        assert_eq!(i64::from_wire("+5").unwrap(), 5);
        assert_eq!(i32::from_wire("9").unwrap(), 9);
        assert!(matches!(i64::from_wire("12ab"), Err(CoercionFailure::Int(_))));
        assert!(matches!(i64::from_wire(""), Err(CoercionFailure::Int(_))));
        assert!(matches!(i64::from_wire("1.5"), Err(CoercionFailure::Int(_))));
    }

    #[test]
    fn test_integer_out_of_range() {
        assert!(matches!(
            i64::from_wire("9223372036854775808"),
            Err(CoercionFailure::Int(_))
        ));
        assert!(matches!(i32::from_wire("2147483648"), Err(CoercionFailure::Int(_))));
        assert_eq!(i32::from_wire("-2147483648").unwrap(), i32::MIN);
    }

    #[test]
    fn test_floats() {
        assert_eq!(f32::from_wire("999.99").unwrap(), 999.99f32);
        assert_eq!(f64::from_wire("3.5").unwrap(), 3.5);
        assert_eq!(f64::from_wire("7").unwrap(), 7.0);
        assert_eq!(f64::from_wire("1e3").unwrap(), 1000.0);
        assert!(matches!(f64::from_wire("abc"), Err(CoercionFailure::Float(_))));
        assert!(matches!(f32::from_wire(""), Err(CoercionFailure::Float(_))));
    }

    #[test]
    fn test_bool_literals() {
        for lit in ["true", "TRUE", "True", "t", "T", "1"] {
            assert_eq!(bool::from_wire(lit).unwrap(), true, "literal {lit}");
        }
        for lit in ["false", "FALSE", "False", "f", "F", "0"] {
            assert_eq!(bool::from_wire(lit).unwrap(), false, "literal {lit}");
        }
        for lit in ["yes", "no", "2", "", "tru"] {
            assert_eq!(bool::from_wire(lit), Err(CoercionFailure::Bool), "literal {lit}");
        }
    }
}
