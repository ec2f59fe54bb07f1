//! Sentence and word tokenization

use super::stopwords;

/// Splits text into sentences and lowercase words
///
/// Implementations must be deterministic: the same text always yields the
/// same sequences.
pub trait Tokenizer: Send + Sync {
    /// Ordered sentences of `text`
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Ordered lowercase words of `text`
    fn words(&self, text: &str) -> Vec<String>;

    /// Whether `word` is too common to be a critical term
    fn is_stopword(&self, word: &str) -> bool {
        stopwords::is_stopword(word)
    }
}

/// Punctuation-driven tokenizer
///
/// A sentence ends at `.`, `!` or `?` when followed by whitespace or the end
/// of the text. Words are maximal runs of ASCII letters, digits and `_`;
/// any other character, accented letters included, separates words.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTokenizer;

impl DefaultTokenizer {
    pub fn new() -> Self {
        Self
    }
}

fn push_trimmed(sentences: &mut Vec<String>, segment: &str) {
    let trimmed = segment.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

impl Tokenizer for DefaultTokenizer {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut chars = text.char_indices().peekable();

        while let Some((i, c)) = chars.next() {
            if !matches!(c, '.' | '!' | '?') {
                continue;
            }
            let at_boundary = match chars.peek() {
                Some(&(_, next)) => next.is_whitespace(),
                None => true,
            };
            if at_boundary {
                let end = i + c.len_utf8();
                push_trimmed(&mut sentences, &text[start..end]);
                start = end;
            }
        }
        push_trimmed(&mut sentences, &text[start..]);

        sentences
    }

    fn words(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
            .filter(|w| !w.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentences_split_on_terminal_punctuation() {
        let tokenizer = DefaultTokenizer::new();
        let sentences = tokenizer.sentences("First one. Second one! Third one? Fourth");
        assert_eq!(
            sentences,
            vec!["First one.", "Second one!", "Third one?", "Fourth"]
        );
    }

    #[test]
    fn test_sentences_ignore_inner_periods() {
        let tokenizer = DefaultTokenizer::new();
        let sentences = tokenizer.sentences("Blood volume drops by 10.5% in flight. Recovery is slow...  Then it stops.");
        assert_eq!(
            sentences,
            vec![
                "Blood volume drops by 10.5% in flight.",
                "Recovery is slow...",
                "Then it stops.",
            ]
        );
    }

    #[test]
    fn test_sentences_of_blank_text() {
        let tokenizer = DefaultTokenizer::new();
        assert!(tokenizer.sentences("").is_empty());
        assert!(tokenizer.sentences("   \n ").is_empty());
    }

    #[test]
    fn test_words_are_lowercase_and_split_on_punctuation() {
        let tokenizer = DefaultTokenizer::new();
        let words = tokenizer.words("Microgravity-induced muscle atrophy, 10-15% (fast_twitch).");
        assert_eq!(
            words,
            vec!["microgravity", "induced", "muscle", "atrophy", "10", "15", "fast_twitch"]
        );
    }

    #[test]
    fn test_words_split_on_non_ascii_letters() {
        let tokenizer = DefaultTokenizer::new();
        assert_eq!(tokenizer.words("Café naïve"), vec!["caf", "na", "ve"]);
    }

    #[test]
    fn test_words_of_empty_text() {
        assert!(DefaultTokenizer::new().words("").is_empty());
        assert!(DefaultTokenizer::new().words("... --- !!!").is_empty());
    }
}
