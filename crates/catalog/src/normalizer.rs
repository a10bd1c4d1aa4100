use unicode_normalization::UnicodeNormalization;

/// Lowercase + NFKC. Diacritics are kept: "å" and "a" stay distinct.
pub fn fold_case(s: &str) -> String {
    s.to_lowercase().nfkc().collect()
}

/// Case-insensitive substring test. `needle` must already be folded.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    fold_case(haystack).contains(needle)
}
