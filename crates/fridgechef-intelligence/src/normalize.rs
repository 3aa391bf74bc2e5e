// ABOUTME: Accent- and case-insensitive normalization for search text
// ABOUTME: Canonical decomposition followed by removal of combining marks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fridgechef Contributors

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase `text` and strip its diacritics; absent input yields `""`
///
/// ```
/// use fridgechef_intelligence::normalize_text;
/// assert_eq!(normalize_text("Café"), "cafe");
/// assert_eq!(normalize_text(None), "");
/// ```
pub fn normalize_text<'a>(text: impl Into<Option<&'a str>>) -> String {
    text.into()
        .unwrap_or_default()
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

/// True when the normalized `query` is empty or contained in the normalized `label`
pub fn matches_query<'a>(label: &str, query: impl Into<Option<&'a str>>) -> bool {
    let query = normalize_text(query);
    query.is_empty() || normalize_text(label).contains(&query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_accents_and_case() {
        assert_eq!(normalize_text("JALAPEÑO Crème"), "jalapeno creme");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_matches_query() {
        assert!(matches_query("Plátano maduro", "platano"));
        assert!(matches_query("Anything", None));
        assert!(!matches_query("Arroz", "pasta"));
    }
}
