//! Text helpers shared by the matchers.

/// Normalise user input for keyword matching.
///
/// Matching is plain substring containment on the lowercased text.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
}

/// Returns true if any of `phrases` occurs inside the already-normalised text.
pub fn contains_any<'a, I>(normalized: &str, phrases: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    phrases.into_iter().any(|p| normalized.contains(p))
}

/// Take the first `max_chars` characters of `s`.
///
/// Counts `char`s rather than bytes so accented Portuguese text is never
/// split inside a code point.
pub fn excerpt(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_lowercases_accented_text() {
        assert_eq!(normalize("DIVÓRCIO Já"), "divórcio já");
    }

    #[test]
    fn contains_any_matches_inside_words() {
        assert!(contains_any("foi ontem", ["oi"]));
        assert!(!contains_any("bom", ["oi", "tchau"]));
    }

    #[test]
    fn excerpt_counts_chars() {
        assert_eq!(excerpt("ação", 2), "aç");
        assert_eq!(excerpt("abc", 10), "abc");
        assert_eq!(excerpt("", 5), "");
    }
}
