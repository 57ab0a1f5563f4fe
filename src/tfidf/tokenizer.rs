//! ASCII-space tokenizer.
//!
//! Input is treated as an opaque byte stream: no lowercasing, no Unicode
//! normalization. A word is a maximal run of non-space bytes; only ASCII
//! space (0x20) separates words.

/// Splits `text` into non-empty words. Empty input yields no words.
pub fn split_into_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(' ').filter(|word| !word.is_empty())
}

/// A word is valid iff it contains no control bytes (0x00–0x1F).
pub fn is_valid_word(word: &str) -> bool {
    word.bytes().all(|byte| byte >= 0x20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        let words: Vec<&str> = split_into_words("cat in the city").collect();
        assert_eq!(words, vec!["cat", "in", "the", "city"]);
    }

    #[test]
    fn test_split_collapses_repeated_spaces() {
        let words: Vec<&str> = split_into_words("  cat   city ").collect();
        assert_eq!(words, vec!["cat", "city"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_into_words("").count(), 0);
        assert_eq!(split_into_words("   ").count(), 0);
    }

    #[test]
    fn test_only_ascii_space_separates() {
        // Tab is not a separator; it stays inside the word.
        let words: Vec<&str> = split_into_words("cat\tcity").collect();
        assert_eq!(words, vec!["cat\tcity"]);
    }

    #[test]
    fn test_valid_word_rejects_control_bytes() {
        assert!(is_valid_word("cat"));
        assert!(is_valid_word("c-a-t"));
        assert!(!is_valid_word("ca\x12t"));
        assert!(!is_valid_word("\x01"));
    }

    #[test]
    fn test_valid_word_accepts_multibyte_utf8() {
        // Multibyte UTF-8 never contains bytes below 0x80.
        assert!(is_valid_word("пёс"));
    }
}
