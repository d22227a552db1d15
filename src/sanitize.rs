//! Whitespace tokenization and per-token cleanup.

/// Returns `true` for characters stripped from the edges of a token: ASCII digits and ASCII
/// punctuation.
#[must_use]
pub fn is_strippable(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_punctuation()
}

/// Strips the leading and trailing runs of digits/punctuation from `word` and lowercases the rest.
///
/// Punctuation inside the word is preserved, so `"don't"` stays `"don't"` while `"--word--"`
/// becomes `"word"`. A token made only of strippable characters sanitizes to the empty string.
#[must_use]
pub fn sanitize(word: &str) -> String {
    word.trim_start_matches(is_strippable)
        .trim_end_matches(is_strippable)
        .to_lowercase()
}

fn is_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Splits `text` on every ASCII whitespace character and sanitizes each piece.
///
/// Consecutive delimiters yield empty tokens; callers are expected to filter them.
pub fn read_words(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(is_delimiter).map(sanitize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_strips_edge_punctuation_and_lowercases() {
        assert_eq!(sanitize("Hello,"), "hello");
        assert_eq!(sanitize("--word--"), "word");
        assert_eq!(sanitize("(\"Quoted!\")"), "quoted");
    }

    #[test]
    fn sanitize_removes_digit_runs() {
        assert_eq!(sanitize("123"), "");
        assert_eq!(sanitize("42nd"), "nd");
        assert_eq!(sanitize("route66."), "route");
    }

    #[test]
    fn sanitize_keeps_inner_punctuation() {
        assert_eq!(sanitize("don't"), "don't");
        assert_eq!(sanitize("Well-Known"), "well-known");
        assert_eq!(sanitize("'e.g.'"), "e.g");
    }

    #[test]
    fn read_words_keeps_empty_pieces() {
        let words: Vec<String> = read_words("The  cat\tsat.\n").collect();
        assert_eq!(words, vec!["the", "", "cat", "sat", ""]);
    }

    #[test]
    fn read_words_does_not_split_on_non_ascii_whitespace() {
        let words: Vec<String> = read_words("a\u{00A0}b c").collect();
        assert_eq!(words, vec!["a\u{00A0}b", "c"]);
    }
}
