//! Word extraction.
//!
//! A word is a maximal run of ASCII letters after the text has been
//! lowercased. Everything else, including digits, apostrophes and
//! non-ASCII letters, separates words.

/// Iterator over the lowercase words of a text, in order of appearance.
///
/// Created by [`words`].
#[derive(Debug, Clone)]
pub struct Words {
    text: String,
    pos: usize,
}

impl Iterator for Words {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let bytes = self.text.as_bytes();
        let rest = &bytes[self.pos..];

        let start = self.pos + rest.iter().position(u8::is_ascii_lowercase)?;
        let len = bytes[start..]
            .iter()
            .position(|b| !b.is_ascii_lowercase())
            .unwrap_or(bytes.len() - start);
        let end = start + len;

        self.pos = end;
        // ASCII bytes are always char boundaries
        Some(self.text[start..end].to_string())
    }
}

/// Split `text` into lowercase words.
///
/// The whole text is lowercased first (full Unicode case mapping), then
/// scanned for runs of `a..=z`.
///
/// # Examples
///
/// ```
/// use wordfreq_core::tokenize::words;
///
/// let found: Vec<String> = words("Hello, World! It's 2026.").collect();
/// assert_eq!(found, ["hello", "world", "it", "s"]);
/// ```
pub fn words(text: &str) -> Words {
    Words {
        text: text.to_lowercase(),
        pos: 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(text: &str) -> Vec<String> {
        words(text).collect()
    }

    #[test]
    fn empty_text() {
        assert!(collect("").is_empty());
        assert!(collect("   \n\t").is_empty());
    }

    #[test]
    fn lowercases_words() {
        assert_eq!(collect("Cat cAt CAT"), ["cat", "cat", "cat"]);
    }

    #[test]
    fn punctuation_separates() {
        assert_eq!(collect("don't stop-me"), ["don", "t", "stop", "me"]);
    }

    #[test]
    fn digits_separate() {
        assert_eq!(collect("abc123def 42"), ["abc", "def"]);
    }

    #[test]
    fn only_non_letters() {
        assert!(collect("123 !!! ---").is_empty());
    }

    #[test]
    fn non_ascii_letters_separate() {
        assert_eq!(collect("café naïve"), ["caf", "na", "ve"]);
        assert!(collect("日本語 добрый").is_empty());
    }

    #[test]
    fn kelvin_sign_lowercases_to_ascii() {
        // U+212A KELVIN SIGN lowercases to 'k'
        assert_eq!(collect("\u{212A}ey"), ["key"]);
    }

    #[test]
    fn words_at_string_edges() {
        assert_eq!(collect("alpha...omega"), ["alpha", "omega"]);
    }
}
