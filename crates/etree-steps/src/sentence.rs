//! Sentence splitting for step titles.

use once_cell::sync::Lazy;
use regex::Regex;

/// Word character, then `...`, `.`, `?`, `!` or `:`, then a space.
/// A sentence ends right after the space.
static SENTENCE_END: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w(?:\.\.\.|[.?!:]) ").unwrap());

/// Split text after each sentence delimiter.
///
/// Delimiters stay attached to the preceding sentence, so joining the
/// pieces gives back the input. Always returns at least one piece.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    for m in SENTENCE_END.find_iter(text) {
        sentences.push(&text[start..m.end()]);
        start = m.end();
    }
    sentences.push(&text[start..]);
    sentences
}

/// Split text into a title (first sentence, trailing colon dropped) and
/// the remaining sentences.
pub fn title_and_content(text: &str) -> (String, String) {
    let mut sentences = split_sentences(text).into_iter();
    let first = sentences.next().unwrap_or_default();

    let title = first.trim();
    let title = title.strip_suffix(':').unwrap_or(title);

    (title.trim().to_string(), sentences.collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_sentences() {
        assert_eq!(
            split_sentences("One. Two? Three! Four: five"),
            vec!["One. ", "Two? ", "Three! ", "Four: ", "five"]
        );
    }

    #[test]
    fn test_split_ellipsis() {
        assert_eq!(split_sentences("Wait... then go."), vec!["Wait... ", "then go."]);
    }

    #[test]
    fn test_split_needs_word_before_delimiter() {
        assert_eq!(split_sentences("Hmm .. ok. ? no"), vec!["Hmm .. ok. ", "? no"]);
        assert_eq!(split_sentences("3.5 is . not"), vec!["3.5 is . not"]);
    }

    #[test]
    fn test_split_trailing_delimiter() {
        assert_eq!(split_sentences("Done. "), vec!["Done. ", ""]);
        assert_eq!(split_sentences(""), vec![""]);
    }

    #[test]
    fn test_title_and_content() {
        let (title, content) =
            title_and_content("Ask questions: What is your name? How old are you?");
        assert_eq!(title, "Ask questions");
        assert_eq!(content, "What is your name? How old are you?");
    }

    #[test]
    fn test_title_keeps_period() {
        let (title, content) = title_and_content("Introduce yourself. Explain the purpose.");
        assert_eq!(title, "Introduce yourself.");
        assert_eq!(content, "Explain the purpose.");
    }

    #[test]
    fn test_title_only() {
        let (title, content) = title_and_content("  Questions may include:");
        assert_eq!(title, "Questions may include");
        assert_eq!(content, "");
    }
}
