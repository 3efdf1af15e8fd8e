use std::error::Error;
use std::fmt;

/// Problems that keep a word out of a [`Tree`](super::Tree).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum WordError {
    /// The word at `position` (zero-based) was empty.
    Empty {
        /// Position of the word in the input list.
        position: usize,
    },
    /// The word contained a whitespace character.
    Whitespace {
        /// Position of the word in the input list.
        position: usize,
        /// The offending word.
        word: String,
    },
}

impl fmt::Display for WordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WordError::Empty { position } => write!(f, "word {position} was empty"),
            WordError::Whitespace { word, .. } => {
                write!(f, "word \"{word}\" contained a whitespace character")
            }
        }
    }
}

impl Error for WordError {}

/// Returns every problem with `word`; empty if it is acceptable.
pub fn validate_word(position: usize, word: &str) -> Vec<WordError> {
    let mut errors = Vec::new();
    if word.is_empty() {
        errors.push(WordError::Empty { position });
    }
    if word.chars().any(char::is_whitespace) {
        errors.push(WordError::Whitespace {
            position,
            word: word.to_owned(),
        });
    }
    errors
}

/// Checks every word, collecting all problems instead of stopping at the first.
///
/// # Examples
///
/// ```
/// use wordcount_dfa::dfa::validate::{validate_words, WordError};
///
/// assert!(validate_words(["cat", "dog"]).is_ok());
///
/// let errors = validate_words(["", "hot dog", "ok"]).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// assert_eq!(errors[0], WordError::Empty { position: 0 });
/// ```
pub fn validate_words<S: AsRef<str>>(
    words: impl IntoIterator<Item = S>,
) -> Result<(), Vec<WordError>> {
    let errors: Vec<WordError> = words
        .into_iter()
        .enumerate()
        .flat_map(|(position, word)| validate_word(position, word.as_ref()))
        .collect();
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
