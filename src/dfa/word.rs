use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use smallvec::SmallVec;

use super::letter::Letter;

/// Letters of one word, inline up to a typical word length.
pub type Word<C> = SmallVec<[C; 32]>;

/// Trait for types that can be used as a word when building a [`Tree`](super::Tree).
///
/// Text types yield `char` letters; slices, vectors and arrays yield their
/// elements, so `&[u8]` gives a byte-level word.
pub trait IntoWord<C: Letter> {
    /// Collects this word into a letter buffer.
    fn collect_word(self) -> Word<C>;
}

macro_rules! text_words {
    ($($ty:ty),*) => {
        $(
            impl IntoWord<char> for $ty {
                fn collect_word(self) -> Word<char> {
                    self.chars().collect()
                }
            }
        )*
    };
}

text_words!(&str, &&str, String, &String);

impl<C: Letter> IntoWord<C> for &[C] {
    fn collect_word(self) -> Word<C> {
        Word::from_slice(self)
    }
}

impl<C: Letter> IntoWord<C> for &Vec<C> {
    fn collect_word(self) -> Word<C> {
        Word::from_slice(self)
    }
}

impl<C: Letter, const N: usize> IntoWord<C> for &[C; N] {
    fn collect_word(self) -> Word<C> {
        Word::from_slice(self)
    }
}

impl<C: Letter> IntoWord<C> for Vec<C> {
    fn collect_word(self) -> Word<C> {
        Word::from_vec(self)
    }
}

impl<C: Letter, const N: usize> IntoWord<C> for [C; N] {
    fn collect_word(self) -> Word<C> {
        self.into_iter().collect()
    }
}

/// Reads a word list from a text file, one word per line.
///
/// Trailing whitespace is trimmed. Empty lines and lines starting with `#`
/// (after optional leading whitespace) are skipped. Everything else is
/// returned verbatim, including words that would fail
/// [`validate_words`](super::validate::validate_words).
///
/// # Examples
///
/// ```no_run
/// use wordcount_dfa::dfa::word::read_words;
///
/// let words = read_words("words.txt").unwrap();
/// ```
pub fn read_words(path: impl AsRef<Path>) -> io::Result<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut words = Vec::new();

    // One buffer for every line; lines() would allocate per line.
    let mut buf = String::with_capacity(80);
    loop {
        if reader.read_line(&mut buf)? == 0 {
            break;
        }
        let word = buf.trim_end();
        if !word.is_empty() && !is_comment(word) {
            words.push(word.to_owned());
        }
        buf.clear();
    }
    Ok(words)
}

/// Returns true if this line is a comment.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim_start().starts_with('#')
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    #[test]
    fn str_collects_chars() {
        let w: Word<char> = "åke".collect_word();
        assert_eq!(w.as_slice(), &['å', 'k', 'e']);
    }

    #[test]
    fn bytes_collect_as_bytes() {
        let w: Word<u8> = "åke".as_bytes().collect_word();
        assert_eq!(w.len(), 4);
    }

    #[test]
    fn owned_and_borrowed_sequences_agree() {
        let v = vec![3u8, 1, 2];
        let expected: Word<u8> = (&v).collect_word();
        assert_eq!(v.clone().collect_word(), expected);
        assert_eq!([3u8, 1, 2].collect_word(), expected);
        assert_eq!((&[3u8, 1, 2]).collect_word(), expected);
        assert_eq!(String::from("ok").collect_word(), "ok".collect_word());
    }

    #[test]
    fn comment_that_starts_with_pound() {
        assert!(is_comment("# This is a comment"));
    }

    #[test]
    fn comment_with_whitespace_before_pound() {
        assert!(is_comment("        # This is a comment with whitespace"));
    }

    #[test]
    fn non_comment() {
        assert!(!is_comment("REVERBERATE"));
        assert!(!is_comment(" REVERBERATE"));
    }

    #[test]
    fn read_words_skips_comments_and_blank_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# counted words").unwrap();
        writeln!(file, "alpha").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "beta   ").unwrap();
        writeln!(file, "  # indented comment").unwrap();
        write!(file, "gamma").unwrap();
        file.flush().unwrap();

        let words = read_words(file.path()).unwrap();
        assert_eq!(words, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn read_words_missing_file_is_an_error() {
        assert!(read_words("/nonexistent/definitely/missing.txt").is_err());
    }
}
