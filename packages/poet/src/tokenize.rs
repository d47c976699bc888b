//! Tokenizers for corpus text and for poem input.
//!
//! Both reduce text to ASCII letters and digits, but they split differently:
//! a corpus token is a whitespace-separated chunk with its punctuation stripped
//! (`"I've"` becomes `"ive"`), while a phrase is cut at every punctuation
//! boundary (`"I've"` becomes `"I"`, `"ve"`).

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric()
}

/// Lower-case corpus words, in order. Tokens left empty after stripping are
/// dropped.
pub fn corpus_words(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| {
            token
                .chars()
                .filter(|&c| is_word_char(c))
                .map(|c| c.to_ascii_lowercase())
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

/// Words of a poem phrase with their original case.
pub fn phrase_words(text: &str) -> Vec<&str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|word| !word.is_empty())
        .collect()
}

/// Non-whitespace characters following the last word of `text`, e.g. the
/// `"."` of `"Test the system."`. Empty when the phrase has no words.
///
/// Only ASCII letters and digits end a word, so a trailing non-ASCII letter is
/// kept as punctuation: `"Test the système."` closes with `"."` after the words
/// `syst` and `me`, while `"un café"` closes with `"é"`.
pub fn closing_punctuation(text: &str) -> String {
    match text.rfind(is_word_char) {
        // word chars are ASCII, so `end + 1` is a char boundary
        Some(end) => text[end + 1..]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corpus_words_strip_punctuation_inside_tokens() {
        assert_eq!(
            corpus_words("Some say the world\nwill end in fire,\n  I've -- (tasted)"),
            vec!["some", "say", "the", "world", "will", "end", "in", "fire", "ive", "tasted"]
        );
    }

    #[test]
    fn corpus_words_of_blank_text_is_empty() {
        assert!(corpus_words(" \n\t -- ... ").is_empty());
    }

    #[test]
    fn corpus_words_ignore_non_ascii_letters() {
        assert_eq!(corpus_words("café naïve"), vec!["caf", "nave"]);
    }

    #[test]
    fn phrase_words_split_on_punctuation_runs() {
        assert_eq!(
            phrase_words("  Seek to explore--new, and I've!"),
            vec!["Seek", "to", "explore", "new", "and", "I", "ve"]
        );
    }

    #[test]
    fn phrase_words_of_empty_text_is_empty() {
        assert!(phrase_words("").is_empty());
        assert!(phrase_words("?!").is_empty());
    }

    #[test]
    fn closing_punctuation_keeps_terminator_only() {
        assert_eq!(closing_punctuation("Test the system."), ".");
        assert_eq!(closing_punctuation("Really ?! "), "?!");
        assert_eq!(closing_punctuation("no punctuation"), "");
        assert_eq!(closing_punctuation("..."), "");
    }

    #[test]
    fn non_ascii_letters_split_words_and_close_as_punctuation() {
        assert_eq!(phrase_words("Test the système."), vec!["Test", "the", "syst", "me"]);
        assert_eq!(closing_punctuation("Test the système."), ".");
        assert_eq!(closing_punctuation("un café"), "é");
    }
}
