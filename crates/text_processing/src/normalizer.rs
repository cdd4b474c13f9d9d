//! Text normalization
//!
//! Two views of one message: a lowercase copy used only for keyword and
//! phrase checks, and the original text split into lines or word tokens.
//! Values handed back to callers are always cut from the original text.

use unicode_segmentation::UnicodeSegmentation;

use crate::stopwords;

/// Normalized views of a raw message
#[derive(Debug, Clone)]
pub struct NormalizedText<'a> {
    original: &'a str,
    lowered: String,
}

impl<'a> NormalizedText<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            original: text,
            lowered: text.to_lowercase(),
        }
    }

    /// The text exactly as received
    pub fn original(&self) -> &'a str {
        self.original
    }

    /// Lowercase copy for keyword matching
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Original lines, without line terminators
    pub fn lines(&self) -> impl Iterator<Item = &'a str> {
        self.original.lines()
    }

    /// Check if any keyword occurs as a substring of the lowercase view
    pub fn contains_any<S: AsRef<str>>(&self, keywords: &[S]) -> bool {
        keywords.iter().any(|k| self.lowered.contains(k.as_ref()))
    }

    /// Lowercase word tokens with punctuation and stop-words removed
    pub fn tokens(&self) -> Vec<&str> {
        self.lowered
            .unicode_words()
            .filter(|word| !stopwords::is_stop_word(word))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_views_keep_original() {
        let text = NormalizedText::new("Check The LOGIN page");
        assert_eq!(text.original(), "Check The LOGIN page");
        assert_eq!(text.lowered(), "check the login page");
    }

    #[test]
    fn test_lines() {
        let text = NormalizedText::new("user: Bob\r\npass: Hunter2\n\nend");
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["user: Bob", "pass: Hunter2", "", "end"]);
    }

    #[test]
    fn test_tokens_drop_stop_words_and_punctuation() {
        let text = NormalizedText::new("Please check the Admin panel, and the user/profile pages!");
        assert_eq!(
            text.tokens(),
            vec!["please", "check", "admin", "panel", "user", "profile", "pages"]
        );
    }

    #[test]
    fn test_contains_any() {
        let text = NormalizedText::new("Needed ASAP");
        assert!(text.contains_any(&["asap"]));
        assert!(!text.contains_any(&["urgent", "critical"]));
        assert!(!text.contains_any::<&str>(&[]));
    }

    #[test]
    fn test_empty_text() {
        let text = NormalizedText::new("");
        assert!(text.tokens().is_empty());
        assert_eq!(text.lines().count(), 0);
    }
}
