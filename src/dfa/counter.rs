use std::fmt;
use std::str::FromStr;

use smallvec::SmallVec;

use super::letter::Letter;
use super::state::StateId;
use super::table::TransitionTable;
use super::tree::Tree;
use super::word::IntoWord;

/// What a scanner does with a letter that no word contains.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ForeignLetter {
    /// Return to the start state. No word can match across such a letter.
    #[default]
    Reset,
    /// Ignore the letter and stay in the current state, so that words may
    /// match across it.
    Stay,
}

impl fmt::Display for ForeignLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ForeignLetter::Reset => "reset",
            ForeignLetter::Stay => "stay",
        })
    }
}

/// Error returned when parsing an unknown [`ForeignLetter`] name.
#[derive(Debug, PartialEq, Eq)]
pub struct ParseForeignLetterError(String);

impl fmt::Display for ParseForeignLetterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown foreign letter policy {:?}, expected reset or stay", self.0)
    }
}

impl std::error::Error for ParseForeignLetterError {}

impl FromStr for ForeignLetter {
    type Err = ParseForeignLetterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(ForeignLetter::Reset),
            "stay" => Ok(ForeignLetter::Stay),
            other => Err(ParseForeignLetterError(other.to_owned())),
        }
    }
}

/// Counts occurrences of a tree's words in letter streams.
///
/// Runs the derived table from the start state; after every transition the
/// counters of all words completing at the new state are incremented. Under
/// [`ForeignLetter::Stay`] a foreign letter is no transition, so it neither
/// yields a state nor counts anything. A
/// word that is a proper suffix of another word is not counted while the
/// longer word's path is being followed, as in any DFA without output links.
///
/// # Examples
///
/// ```
/// use wordcount_dfa::dfa::{Tree, WordCounter};
///
/// let tree = Tree::from_words(["ab", "bc"]);
/// let counts = WordCounter::new(&tree).count("abcab".chars());
/// assert_eq!(counts.get("ab"), 2);
/// assert_eq!(counts.get("bc"), 1);
/// ```
#[derive(Clone, Debug)]
pub struct WordCounter<C: Letter> {
    alphabet: Vec<C>,
    table: TransitionTable,
    words: Vec<Vec<C>>,
    completes: Vec<SmallVec<[usize; 1]>>,
    foreign: ForeignLetter,
}

impl<C: Letter> WordCounter<C> {
    /// Derives the table of `tree` and captures everything needed to scan.
    pub fn new(tree: &Tree<C>) -> Self {
        let words: Vec<Vec<C>> = tree.word_list().map(<[C]>::to_vec).collect();
        let mut completes = vec![SmallVec::new(); tree.state_count()];
        for (i, state) in tree.completion_states().values().enumerate() {
            completes[state.index()].push(i);
        }

        WordCounter {
            alphabet: tree.alphabet().iter().copied().collect(),
            table: tree.derive_table(),
            words,
            completes,
            foreign: ForeignLetter::default(),
        }
    }

    /// Selects how letters outside the alphabet are handled.
    pub fn with_foreign_letter(mut self, policy: ForeignLetter) -> Self {
        self.foreign = policy;
        self
    }

    /// Returns the foreign letter policy in use.
    pub fn foreign_letter(&self) -> ForeignLetter {
        self.foreign
    }

    /// Returns the derived table.
    pub fn table(&self) -> &TransitionTable {
        &self.table
    }

    /// Returns the table column of `letter`, or `None` for foreign letters.
    #[inline]
    pub fn column_of(&self, letter: C) -> Option<usize> {
        self.alphabet.binary_search(&letter).ok()
    }

    /// Returns the state entered from `state` on `letter`.
    #[inline]
    pub fn step(&self, state: StateId, letter: C) -> StateId {
        match (self.column_of(letter), self.foreign) {
            (Some(column), _) => self.table.get(state, column),
            (None, ForeignLetter::Reset) => StateId::ROOT,
            (None, ForeignLetter::Stay) => state,
        }
    }

    /// Returns the indices (into the word list) of the words completing at `state`.
    #[inline]
    pub fn completed_at(&self, state: StateId) -> &[usize] {
        &self.completes[state.index()]
    }

    /// Returns an iterator over the states entered while reading `input`.
    ///
    /// Foreign letters yield the start state under [`ForeignLetter::Reset`]
    /// and nothing at all under [`ForeignLetter::Stay`].
    pub fn run<I: IntoIterator<Item = C>>(&self, input: I) -> Run<'_, C, I::IntoIter> {
        Run {
            counter: self,
            input: input.into_iter(),
            state: StateId::ROOT,
        }
    }

    /// Counts the words in `input`.
    pub fn count(&self, input: impl IntoIterator<Item = C>) -> WordCounts<C> {
        let mut counts = vec![0; self.words.len()];
        for state in self.run(input) {
            for &word in self.completed_at(state) {
                counts[word] += 1;
            }
        }
        WordCounts {
            words: self.words.clone(),
            counts,
        }
    }
}

/// Iterator returned by [`WordCounter::run`].
pub struct Run<'c, C: Letter, I> {
    counter: &'c WordCounter<C>,
    input: I,
    state: StateId,
}

impl<C: Letter, I: Iterator<Item = C>> Iterator for Run<'_, C, I> {
    type Item = StateId;

    #[inline]
    fn next(&mut self) -> Option<StateId> {
        loop {
            let letter = self.input.next()?;
            self.state = match (self.counter.column_of(letter), self.counter.foreign) {
                (Some(column), _) => self.counter.table.get(self.state, column),
                (None, ForeignLetter::Reset) => StateId::ROOT,
                (None, ForeignLetter::Stay) => continue,
            };
            return Some(self.state);
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.counter.foreign {
            ForeignLetter::Reset => self.input.size_hint(),
            ForeignLetter::Stay => (0, self.input.size_hint().1),
        }
    }
}

/// Per-word occurrence counts, in word list order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordCounts<C: Letter> {
    words: Vec<Vec<C>>,
    counts: Vec<usize>,
}

impl<C: Letter> WordCounts<C> {
    /// Returns the count for `word`, zero if it is not one of the counted words.
    pub fn get(&self, word: impl IntoWord<C>) -> usize {
        let word = word.collect_word();
        self.words
            .binary_search_by(|w| w.as_slice().cmp(word.as_slice()))
            .map_or(0, |i| self.counts[i])
    }

    /// Returns `(word, count)` pairs in word order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&[C], usize)> {
        self.words
            .iter()
            .map(Vec::as_slice)
            .zip(self.counts.iter().copied())
    }

    /// Returns the sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    fn trace(counter: &WordCounter<char>, input: &str) -> Vec<u32> {
        counter.run(input.chars()).map(StateId::get).collect()
    }

    #[test]
    fn worked_example_trace() {
        let tree = Tree::from_words(["ab", "bc"]);
        let counter = WordCounter::new(&tree);
        assert_eq!(trace(&counter, "abc"), vec![1, 2, 4]);

        let counts = counter.count("abc".chars());
        assert_eq!(counts.get("ab"), 1);
        assert_eq!(counts.get("bc"), 1);
        assert_eq!(counts.total(), 2);
    }

    #[test]
    fn overlapping_occurrences() {
        let tree = Tree::from_words(["aa"]);
        let counts = WordCounter::new(&tree).count("aaaa".chars());
        assert_eq!(counts.get("aa"), 3);
    }

    #[test]
    fn suffix_word_inside_longer_word_is_not_counted() {
        let tree = Tree::from_words(["abc", "bc"]);
        let counter = WordCounter::new(&tree);
        let counts = counter.count("abc".chars());
        assert_eq!(counts.get("abc"), 1);
        assert_eq!(counts.get("bc"), 0);
        assert_eq!(counter.count("xbc".chars()).get("bc"), 1);
    }

    #[test]
    fn foreign_letter_resets_by_default() {
        let tree = Tree::from_words(["ab"]);
        let counter = WordCounter::new(&tree);
        assert_eq!(counter.foreign_letter(), ForeignLetter::Reset);
        assert_eq!(counter.count("a-b ab".chars()).get("ab"), 1);
        assert_eq!(trace(&counter, "a-"), vec![1, 0]);
    }

    #[test]
    fn foreign_letter_stay_matches_across() {
        let tree = Tree::from_words(["ab"]);
        let counter = WordCounter::new(&tree).with_foreign_letter(ForeignLetter::Stay);
        assert_eq!(counter.count("a-b ab".chars()).get("ab"), 2);
        assert_eq!(trace(&counter, "a-"), vec![1]);
        assert_eq!(trace(&counter, "a-b"), vec![1, 2]);
    }

    #[test]
    fn foreign_letters_after_a_match_count_nothing() {
        let tree = Tree::<u8>::from_words([b"ab"]);
        for policy in [ForeignLetter::Reset, ForeignLetter::Stay] {
            let counter = WordCounter::new(&tree).with_foreign_letter(policy);
            assert_eq!(counter.count("ab---".bytes()).get(b"ab"), 1, "{policy}");
            assert_eq!(counter.count("ab--b".bytes()).get(b"ab"), 1, "{policy}");
        }
    }

    #[test]
    fn counts_iterate_in_word_order() {
        let tree = Tree::from_words(["she", "he", "hers"]);
        let counts = WordCounter::new(&tree).count("ushers".chars());
        let pairs: Vec<(String, usize)> = counts
            .iter()
            .map(|(w, n)| (w.iter().collect(), n))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("he".to_owned(), 0),
                ("hers".to_owned(), 1),
                ("she".to_owned(), 1)
            ]
        );
        assert_eq!(counts.get("his"), 0);
    }

    #[test]
    fn column_lookup() {
        let tree = Tree::from_words(["cab"]);
        let counter = WordCounter::new(&tree);
        assert_eq!(counter.column_of('a'), Some(0));
        assert_eq!(counter.column_of('c'), Some(2));
        assert_eq!(counter.column_of('z'), None);

        let c = tree.state_for_prefix(&['c']).unwrap();
        assert_eq!(counter.step(StateId::ROOT, 'c'), c);
        assert_eq!(counter.step(c, 'z'), StateId::ROOT);
        let staying = counter.with_foreign_letter(ForeignLetter::Stay);
        assert_eq!(staying.step(c, 'z'), c);
    }

    #[test]
    fn policy_names_round_trip() {
        for policy in [ForeignLetter::Reset, ForeignLetter::Stay] {
            assert_eq!(policy.to_string().parse::<ForeignLetter>(), Ok(policy));
        }
        assert!("skip".parse::<ForeignLetter>().is_err());
    }

    #[test]
    fn counter_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<WordCounter<char>>();
        assert_send_sync::<Tree<char>>();
    }
}
