/// Storage-engine vocabulary that collides with common entity names.
///
/// The set is closed on purpose: quoting decisions must stay reproducible
/// across engines, so only words every supported engine reserves are listed.
pub const RESERVED_WORDS: [&str; 7] =
    ["user", "order", "group", "limit", "select", "table", "index"];

/// Case-insensitive membership test against [`RESERVED_WORDS`].
pub fn is_reserved_word(text: &str) -> bool {
    RESERVED_WORDS
        .iter()
        .any(|word| word.eq_ignore_ascii_case(text))
}
