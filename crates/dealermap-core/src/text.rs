// crates/dealermap-core/src/text.rs

//! # Text Normalization
//!
//! Search terms and catalog fields are compared in a canonical form:
//! upper case, with the Turkish letters `Ğ Ü Ş İ Ö Ç` replaced by their
//! unaccented Latin counterparts.

/// Replacement table applied after upper-casing.
///
/// `I` is listed explicitly as mapping to itself. Dotless `ı` is left to
/// `str::to_uppercase`, which already yields `I`.
pub const TURKISH_FOLD: [(char, char); 7] = [
    ('Ğ', 'G'),
    ('Ü', 'U'),
    ('Ş', 'S'),
    ('I', 'I'),
    ('İ', 'I'),
    ('Ö', 'O'),
    ('Ç', 'C'),
];

#[inline]
fn fold_char(ch: char) -> char {
    TURKISH_FOLD
        .iter()
        .find(|(from, _)| *from == ch)
        .map(|(_, to)| *to)
        .unwrap_or(ch)
}

/// Convert text into its canonical comparable form.
///
/// Upper-cases the input, then folds the Turkish letters listed in
/// [`TURKISH_FOLD`]. Whitespace is preserved; trimming is the caller's job.
///
/// # Examples
///
/// ```rust
/// use dealermap_core::text::normalize;
///
/// assert_eq!(normalize("çorum"), "CORUM");
/// assert_eq!(normalize("İstanbul"), "ISTANBUL");
/// assert_eq!(normalize("Şişli "), "SISLI ");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        // Some code points expand on upper-casing (e.g. 'ß' -> "SS").
        for up in ch.to_uppercase() {
            out.push(fold_char(up));
        }
    }
    out
}

/// Returns `true` if the normalized `haystack` contains `term`.
///
/// `term` must already be normalized; the haystack is normalized on every
/// call.
#[inline]
pub fn contains_normalized(haystack: &str, term: &str) -> bool {
    normalize(haystack).contains(term)
}

/// Compares two strings for equality after normalization.
///
/// ```rust
/// use dealermap_core::text::equals_normalized;
///
/// assert!(equals_normalized("Çorum", "corum"));
/// assert!(!equals_normalized("Ankara", "Antalya"));
/// ```
pub fn equals_normalized(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_all_mapped_letters() {
        assert_eq!(normalize("ĞÜŞİÖÇ"), "GUSIOC");
        assert_eq!(normalize("ğüşiöç"), "GUSIOC");
    }

    #[test]
    fn case_and_diacritic_insensitive() {
        assert_eq!(normalize("çORUM"), normalize("CORUM"));
        assert_eq!(normalize("Eskişehir"), normalize("ESKISEHIR"));
    }

    #[test]
    fn plain_i_is_unchanged() {
        assert_eq!(normalize("I"), "I");
        assert_eq!(normalize("i"), "I");
    }

    #[test]
    fn dotless_i_follows_generic_uppercasing() {
        assert_eq!(normalize("ı"), "I");
        assert_eq!(normalize("Iğdır"), "IGDIR");
    }

    #[test]
    fn idempotent() {
        for s in ["", "  ", "İzmir Karşıyaka", "Ağrı", "straße", "Çanakkale"] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        assert_eq!(normalize("  ank "), "  ANK ");
    }

    #[test]
    fn unmapped_characters_pass_through() {
        assert_eq!(normalize("Âbc-12"), "ÂBC-12");
    }

    #[test]
    fn contains_uses_normalized_haystack() {
        assert!(contains_normalized("Bakırköy Şubesi", "SUBE"));
        assert!(!contains_normalized("Bakırköy", "ANK"));
    }
}
