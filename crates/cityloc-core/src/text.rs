// crates/cityloc-core/src/text.rs

/// Convert a string into a folded key suitable for matching and comparison.
///
/// This performs:
/// 1\) Transliterate Unicode → ASCII (e.g. `Łódź` -> `Lodz`)
/// 2\) Normalize to lowercase
///
/// The implementation uses the `deunicode` crate to perform a best-effort
/// transliteration from Unicode to ASCII, so accented user input matches
/// plain-ASCII catalog entries and vice versa.
///
/// # Examples
///
/// ```rust
/// use cityloc_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key("Straße"), "strasse");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s).to_lowercase()
}

/// Compares two strings for equality after Unicode folding and normalization.
///
/// # Examples
///
/// ```rust
/// use cityloc_core::text::equals_folded;
///
/// assert!(equals_folded("MÜNCHEN", "munchen"));
/// assert!(!equals_folded("Mumbai", "Pune"));
/// ```
pub fn equals_folded(a: &str, b: &str) -> bool {
    fold_key(a) == fold_key(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_accents_and_case() {
        assert_eq!(fold_key("Zürich"), "zurich");
        assert_eq!(fold_key("MUMBAI"), "mumbai");
        assert_eq!(fold_key("Łódź"), "lodz");
    }

    #[test]
    fn fold_preserves_inner_whitespace() {
        assert_eq!(fold_key("Navi  Mumbai"), "navi  mumbai");
    }

    #[test]
    fn equals_folded_is_symmetric() {
        assert!(equals_folded("Straße", "STRASSE"));
        assert!(equals_folded("strasse", "Straße"));
    }
}
