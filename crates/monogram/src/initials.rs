//! Reduction of free text (names, handles, email addresses) to a short
//! initials label.

use std::sync::LazyLock;

use regex::Regex;

/// Non-ASCII ranges accepted wherever the address grammar allows a letter.
const UCS: &str = r"\x{00A0}-\x{D7FF}\x{F900}-\x{FDCF}\x{FDF0}-\x{FFEF}";

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    let atext = format!(r"[a-zA-Z0-9!#$%&'*+\-/=?^_`{{|}}~{UCS}]");
    let dot_atom = format!(r"{atext}+(?:\.{atext}+)*");

    let fws = r"(?:(?:[ \t]*\r\n)?[ \t]+)";
    let qtext = format!(r"[\x01-\x08\x0b\x0c\x0e-\x1f\x7f\x21\x23-\x5b\x5d-\x7e{UCS}]");
    let quoted_pair = format!(r"\\[\x01-\x09\x0b\x0c\x0d-\x7f{UCS}]");
    let quoted = format!(r#""(?:{fws}?(?:{qtext}|{quoted_pair}))*{fws}?""#);

    let alnum = format!(r"[a-zA-Z0-9{UCS}]");
    let alpha = format!(r"[a-zA-Z{UCS}]");
    let inner = format!(r"[a-zA-Z0-9\-._~{UCS}]");
    let label = format!(r"{alnum}(?:{inner}*{alnum})?");
    let tld = format!(r"{alpha}(?:{inner}*{alpha})?");

    let pattern = format!(r"^(?:{dot_atom}|{quoted})@(?:{label}\.)+{tld}\.?$");
    Regex::new(&pattern).expect("email grammar is a valid regex")
});

static PUNCT_OR_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\p{P}\p{S}]$").expect("category class is a valid regex"));

/// Returns true when `text` is a well-formed email address.
pub fn is_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Punctuation, whitespace, and symbols separate words and are never
/// picked as initials.
pub fn is_skip(ch: char) -> bool {
    if ch.is_whitespace() {
        return true;
    }
    let mut buf = [0u8; 4];
    PUNCT_OR_SYMBOL.is_match(ch.encode_utf8(&mut buf))
}

/// Extracts at most `max` initials from `text`.
///
/// 1. Email addresses only contribute their local part (before the `@`).
/// 2. A char is picked when it starts a word (follows a skip char, or is the
///    first char), crosses a lower→upper case boundary (`McDonald` → `M`,
///    `D`), or is a lowercase letter and nothing was picked yet.
/// 3. If that yields fewer than `max`, the remaining slots are filled from
///    the front of the text with unpicked, non-skip chars.
///
/// Picked chars keep discovery order. Empty input gives an empty string.
pub fn extract_initials(text: &str, max: usize) -> String {
    if text.is_empty() || max == 0 {
        return String::new();
    }

    let text = if is_email(text) {
        text.split_once('@').map_or(text, |(local, _)| local)
    } else {
        text
    };

    let chars: Vec<char> = text.chars().collect();
    let mut picked: Vec<usize> = Vec::with_capacity(max.min(chars.len()));
    let mut previous = ' ';

    for (i, &ch) in chars.iter().enumerate() {
        if picked.len() == max {
            break;
        }
        if is_skip(ch) {
            previous = ch;
            continue;
        }

        let camel = ch.is_uppercase() && previous.is_lowercase();
        let first_lower = ch.is_lowercase() && picked.is_empty();
        if camel || first_lower || is_skip(previous) {
            picked.push(i);
        }
        previous = ch;
    }

    for (i, &ch) in chars.iter().enumerate() {
        if picked.len() >= max {
            break;
        }
        if !is_skip(ch) && !picked.contains(&i) {
            picked.push(i);
        }
    }

    picked.into_iter().map(|i| chars[i]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(s: &str) -> usize {
        s.chars().count()
    }

    // ── word boundaries ───────────────────────────────────────────────────

    #[test]
    fn two_word_name() {
        assert_eq!(extract_initials("John Smith", 2), "JS");
    }

    #[test]
    fn lowercase_words() {
        assert_eq!(extract_initials("john smith", 2), "js");
    }

    #[test]
    fn three_words_capped_at_two() {
        assert_eq!(extract_initials("Mary Ann Evans", 2), "MA");
        assert_eq!(extract_initials("Mary Ann Evans", 3), "MAE");
    }

    #[test]
    fn punctuation_separates_words() {
        assert_eq!(extract_initials("jean-luc", 2), "jl");
        assert_eq!(extract_initials("O'Brien, Pat", 3), "OBP");
        assert_eq!(extract_initials("snake_case_name", 3), "scn");
    }

    #[test]
    fn leading_and_repeated_separators_are_ignored() {
        assert_eq!(extract_initials("   --Ada   Lovelace!!", 2), "AL");
    }

    // ── camel case ────────────────────────────────────────────────────────

    #[test]
    fn camel_case_boundary() {
        assert_eq!(extract_initials("camelCase", 2), "cC");
        assert_eq!(extract_initials("PascalCaseName", 3), "PCN");
    }

    #[test]
    fn mcdonald_picks_boundaries_then_pads() {
        assert_eq!(extract_initials("McDonald", 2), "MD");
        assert_eq!(extract_initials("McDonald", 3), "MDc");
    }

    #[test]
    fn all_caps_word_is_padded() {
        assert_eq!(extract_initials("NASA", 2), "NA");
    }

    // ── padding ───────────────────────────────────────────────────────────

    #[test]
    fn single_lowercase_word_is_padded() {
        assert_eq!(extract_initials("alice", 2), "al");
    }

    #[test]
    fn padding_skips_separators() {
        assert_eq!(extract_initials("A b", 3), "Ab");
        assert_eq!(extract_initials("A.B", 3), "AB");
    }

    #[test]
    fn short_text_yields_what_it_has() {
        assert_eq!(extract_initials("Z", 2), "Z");
        assert_eq!(extract_initials("!!!", 2), "");
    }

    // ── email ─────────────────────────────────────────────────────────────

    #[test]
    fn email_uses_local_part_only() {
        assert_eq!(extract_initials("alice@example.com", 2), "al");
        assert_eq!(extract_initials("john.smith@example.org", 2), "js");
        assert_eq!(extract_initials("JaneDoe@corp.example.com", 2), "JD");
    }

    #[test]
    fn non_email_with_at_sign_is_not_truncated() {
        // Not a valid address, so the `@` is just a separator.
        assert!(!is_email("bob@"));
        assert_eq!(extract_initials("bob@ home", 2), "bh");
    }

    #[test]
    fn email_grammar() {
        assert!(is_email("a@b.co"));
        assert!(is_email("first.last+tag@sub.example.com"));
        assert!(is_email("\"quoted local\"@example.com"));
        assert!(is_email("josé@exämple.com"));
        assert!(!is_email("plain text"));
        assert!(!is_email("two@@example.com"));
        assert!(!is_email("dot.@example.com"));
        assert!(!is_email("user@localhost"));
    }

    // ── scripts & categories ──────────────────────────────────────────────

    #[test]
    fn cyrillic_name() {
        assert_eq!(extract_initials("Иван Петров", 2), "ИП");
        assert_eq!(extract_initials("РЩ", 2), "РЩ");
    }

    #[test]
    fn symbols_are_skipped() {
        assert!(is_skip('+'));
        assert!(is_skip('€'));
        assert!(is_skip('\u{00A0}'));
        assert!(is_skip('«'));
        assert!(!is_skip('é'));
        assert!(!is_skip('7'));
        assert_eq!(extract_initials("€uro ★ Star", 2), "uS");
    }

    // ── bounds ────────────────────────────────────────────────────────────

    #[test]
    fn empty_text_is_empty() {
        assert_eq!(extract_initials("", 2), "");
    }

    #[test]
    fn zero_max_is_empty() {
        assert_eq!(extract_initials("John Smith", 0), "");
    }

    #[test]
    fn never_exceeds_max() {
        for text in ["a b c d e f", "ThisIsCamelCase", "x", "long lowercase words here", "a.b.c@d.e"] {
            for max in 0..6 {
                assert!(count(&extract_initials(text, max)) <= max, "{text:?} / {max}");
            }
        }
    }

    #[test]
    fn unbounded_max_takes_every_letter() {
        assert_eq!(extract_initials("John Smith", usize::MAX), "JSohnmith");
        assert_eq!(extract_initials("ab", usize::MAX), "ab");
    }
}
