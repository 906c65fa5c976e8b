// ─── Annotation Parser ──────────────────────────────────────────────────────

/// Extract the store-facing name from a field annotation.
///
/// The name is the text between the first two single quotes. Anything after
/// the closing quote is ignored. Returns `None` when there is no complete
/// quote pair or when the quoted text is empty; both mean the field is
/// excluded from reads and writes.
///
/// ```
/// use hash_record::annotation::parse;
///
/// assert_eq!(parse("'name'"), Some("name"));
/// assert_eq!(parse("a'name'b'c'd"), Some("name"));
/// assert_eq!(parse("''"), None);
/// assert_eq!(parse("a'b"), None);
/// ```
pub fn parse(tag: &str) -> Option<&str> {
    let open = tag.find('\'')?;
    let rest = &tag[open + 1..];
    let close = rest.find('\'')?;
    let name = &rest[..close];
    if name.is_empty() { None } else { Some(name) }
}

#[cfg(test)]
mod tests {
    use super::parse;

    #[test]
    fn test_quoted_name() {
        assert_eq!(parse("'id'"), Some("id"));
        assert_eq!(parse("'name'"), Some("name"));
    }

    #[test]
    fn test_only_first_pair_counts() {
        assert_eq!(parse("a'name'b'c'd"), Some("name"));
        assert_eq!(parse("'first' 'second'"), Some("first"));
    }

    #[test]
    fn test_empty_quotes_exclude() {
        assert_eq!(parse("''"), None);
        assert_eq!(parse("x''y'z'"), None);
    }

    #[test]
    fn test_unbalanced_or_missing_quotes_exclude() {
        assert_eq!(parse("a'b"), None);
        assert_eq!(parse("'"), None);
        assert_eq!(parse(""), None);
        assert_eq!(parse("plain"), None);
    }

    #[test]
    fn test_name_keeps_inner_characters() {
        assert_eq!(parse("'last-field'"), Some("last-field"));
        assert_eq!(parse("' spaced '"), Some(" spaced "));
        assert_eq!(parse("\"'userData'\""), Some("userData"));
    }
}
