//! Slug derivation for option keys and redirect paths.
//!
//! The combo pages are published under file names built from these slugs, so
//! the algorithm has to stay bit-for-bit stable:
//!
//! 1. Unicode canonical decomposition (NFD)
//! 2. Drop combining diacritical marks (U+0300..=U+036F)
//! 3. Lowercase
//! 4. Collapse each run of whitespace into a single `_`
//! 5. Drop everything outside `[A-Za-z0-9_-]`
//!
//! ```
//! use combo_quiz::domain::foundation::slugify;
//!
//! assert_eq!(slugify("Sax Alto"), "sax_alto");
//! assert_eq!(slugify("Violão"), "violao");
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Whitespace as recognised by browser regular expressions (`\s`).
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"[\t\n\x0B\x0C\r \x{00A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]+",
    )
    .expect("whitespace pattern is valid")
});

fn is_combining_diacritic(c: char) -> bool {
    ('\u{0300}'..='\u{036F}').contains(&c)
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Converts a human-readable label into its URL-safe key.
pub fn slugify(label: &str) -> String {
    let stripped: String = label
        .nfd()
        .filter(|c| !is_combining_diacritic(*c))
        .collect();
    let lowered = stripped.to_lowercase();
    let underscored = WHITESPACE_RUN.replace_all(&lowered, "_");
    underscored.chars().filter(|c| is_slug_char(*c)).collect()
}

/// Returns true if `value` is already in slug form.
pub fn is_slug(value: &str) -> bool {
    !value.is_empty() && slugify(value) == value
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercases_and_underscores_spaces() {
        assert_eq!(slugify("Sax Alto"), "sax_alto");
        assert_eq!(slugify("Sax Soprano"), "sax_soprano");
    }

    #[test]
    fn strips_accents() {
        assert_eq!(slugify("Violão"), "violao");
        assert_eq!(slugify("Clássico"), "classico");
        assert_eq!(slugify("Intermediário"), "intermediario");
        assert_eq!(slugify("Avançado"), "avancado");
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(slugify("Sax   Tenor"), "sax_tenor");
        assert_eq!(slugify("Sax\t\nTenor"), "sax_tenor");
        assert_eq!(slugify("Sax\u{00A0}Tenor"), "sax_tenor");
    }

    #[test]
    fn leading_and_trailing_whitespace_become_underscores() {
        assert_eq!(slugify(" Piano "), "_piano_");
    }

    #[test]
    fn removes_punctuation_but_keeps_hyphen_and_digits() {
        assert_eq!(slugify("Rock & Roll!"), "rock__roll");
        assert_eq!(slugify("Lo-Fi 90s"), "lo-fi_90s");
    }

    #[test]
    fn removes_letters_without_ascii_decomposition() {
        assert_eq!(slugify("Øresund"), "resund");
    }

    #[test]
    fn simple_lowercase_words_are_unchanged() {
        assert_eq!(slugify("trompete"), "trompete");
        assert_eq!(slugify("sax alto"), "sax_alto");
    }

    #[test]
    fn is_slug_detects_normalized_values() {
        assert!(is_slug("sax_alto"));
        assert!(!is_slug("Sax Alto"));
        assert!(!is_slug(""));
    }

    proptest! {
        #[test]
        fn slugify_is_deterministic(label in "\\PC{0,32}") {
            prop_assert_eq!(slugify(&label), slugify(&label));
        }

        #[test]
        fn slugify_is_idempotent(label in "\\PC{0,32}") {
            let once = slugify(&label);
            prop_assert_eq!(slugify(&once), once);
        }

        #[test]
        fn slugify_output_is_url_safe(label in "\\PC{0,32}") {
            prop_assert!(slugify(&label).chars().all(is_slug_char));
        }
    }
}
