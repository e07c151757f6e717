use std::sync::LazyLock;

use regex::Regex;

/// `<tag>`, `</tag>`, `<br/>` ... (never spans a line break)
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"</?.*?>").expect("valid tag regex"));

/// maximal run of digits or non-word characters
static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:\d|\W)+").expect("valid separator regex"));

/// Placeholder substituted for markup so tag boundaries still split words.
const TAG_PLACEHOLDER: &str = " <> ";

/// 文書の正規化
///
/// - lowercase
/// - replace every markup tag with a padded placeholder
/// - collapse every run of digits / non-word characters into one space
///
/// Code-like fragments are kept as they are (`foo_bar` stays one token).
/// Training documents and query documents must both go through this.
///
/// # Arguments
/// * `text` - raw document
///
/// # Returns
/// * `String` - normalized text, possibly empty
pub fn normalize(text: &str) -> String {
    let lower = text.to_lowercase();
    let untagged = TAG.replace_all(&lower, TAG_PLACEHOLDER);
    NON_WORD_RUN.replace_all(&untagged, " ").into_owned()
}

/// Split normalized text into tokens.
/// Tokens shorter than `min_term_length` chars are skipped.
#[inline]
pub fn tokenize(normalized: &str, min_term_length: usize) -> impl Iterator<Item = &str> {
    normalized
        .split_whitespace()
        .filter(move |token| min_term_length <= 1 || token.chars().count() >= min_term_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_strips_markup() {
        assert_eq!(normalize("Hello <b>World</b>!! 123 foo_bar"), "hello world foo_bar");
    }

    #[test]
    fn tags_act_as_separators() {
        assert_eq!(normalize("<p>Rust</p>"), " rust ");
        assert_eq!(normalize("java<br/>maven"), "java maven");
    }

    #[test]
    fn digits_are_separators() {
        assert_eq!(normalize("abc123def"), "abc def");
        assert_eq!(normalize("2024"), " ");
    }

    #[test]
    fn unicode_letters_survive() {
        assert_eq!(normalize("Café, NAÏVE résumé"), "café naïve résumé");
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn is_idempotent_on_samples() {
        for text in [
            "Hello <b>World</b>!! 123 foo_bar",
            "<div class=\"x\">int main() { return 0; }</div>",
            "  multiple   spaces\tand\nlines ",
            "UPPER lower MiXeD 42x",
        ] {
            let once = normalize(text);
            assert_eq!(normalize(&once), once, "not idempotent for {text:?}");
        }
    }

    #[test]
    fn tokenize_respects_min_length() {
        let text = normalize("a bb ccc a");
        assert_eq!(tokenize(&text, 1).collect::<Vec<_>>(), vec!["a", "bb", "ccc", "a"]);
        assert_eq!(tokenize(&text, 2).collect::<Vec<_>>(), vec!["bb", "ccc"]);
        // counted in chars, not bytes
        assert_eq!(tokenize("é ab", 2).collect::<Vec<_>>(), vec!["ab"]);
    }
}
