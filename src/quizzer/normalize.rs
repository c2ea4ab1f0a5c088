//! Answer normalization.
//!
//! Answers are compared after folding away the differences a user should not be
//! penalized for: case, the common Spanish/Portuguese/French diacritics,
//! whitespace and punctuation. Only ASCII letters, digits and `-` survive.

use once_cell::sync::Lazy;
use std::collections::HashMap;

const ACCENTED: &str = "ÃÀÁÄÂÈÉËÊÌÍÏÎÒÓÖÔÙÚÜÛãàáäâèéëêìíïîòóöôùúüûÑñÇç";
const PLAIN: &str = "AAAAAEEEEIIIIOOOOUUUUaaaaaeeeeiiiioooouuuunncc";

static ACCENT_MAP: Lazy<HashMap<char, char>> =
    Lazy::new(|| ACCENTED.chars().zip(PLAIN.chars()).collect());

/// Canonical form of `text` used for answer comparison.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|c| ACCENT_MAP.get(&c).copied().unwrap_or(c))
        .filter(|c| c.is_ascii_alphanumeric() || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// True when `given` is the same answer as `expected` once both are normalized.
pub fn answers_match(expected: &str, given: &str) -> bool {
    normalize(expected) == normalize(given)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_fully_mapped() {
        assert_eq!(ACCENTED.chars().count(), 46);
        assert_eq!(ACCENTED.chars().count(), PLAIN.chars().count());
        assert_eq!(ACCENT_MAP.len(), 46);
    }

    #[test]
    fn ignores_case_and_accents() {
        assert_eq!(normalize("Música"), "musica");
        assert_eq!(normalize("musica"), "musica");
        assert_eq!(normalize("MUSICA"), "musica");
        assert_eq!(normalize("PARÍS"), normalize("paris"));
        assert_eq!(normalize("Ñandú"), "nandu");
        assert_eq!(normalize("Çà"), "ca");
    }

    #[test]
    fn strips_punctuation_and_spaces() {
        assert_eq!(normalize("  Él, va!"), "elva");
        assert_eq!(normalize("2 + 2 = 4"), "224");
    }

    #[test]
    fn keeps_hyphens_and_digits() {
        assert_eq!(normalize("Jean-Luc 7"), "jean-luc7");
    }

    #[test]
    fn drops_unmapped_non_ascii() {
        assert_eq!(normalize("Ærø straße"), "rstrae");
        assert_eq!(normalize("東京"), "");
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "",
            "  Él, va!",
            "Música",
            "São Paulo",
            "Ærø-ÇÑ 42?",
            "ÃÀÁÄÂÈÉËÊÌÍÏÎÒÓÖÔÙÚÜÛ",
            "\t\nmixed CASE—dash",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn answers_match_uses_normalized_forms() {
        assert!(answers_match("París", "paris"));
        assert!(answers_match("Roma", "  ROMA. "));
        assert!(!answers_match("Madrid", "Lisboa"));
    }
}
