use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use hashbrown::HashMap;
use itertools::{Itertools, Position};
use log::{debug, trace};

use super::letter::Letter;
use super::state::{State, StateId};
use super::table::TransitionTable;
use super::word::IntoWord;

/// A trie over the added words that completes into a word-counting DFA.
///
/// The tree owns every state in an arena indexed by [`StateId`]. States are
/// created in the order their prefixes are first seen and never removed, so
/// ids depend on the order words are added. Two trees built from the same
/// words in different orders are isomorphic but may number their states
/// differently.
///
/// Once all words are added, [`derive_table`](Tree::derive_table) computes
/// the total transition function. Adding more words afterwards is allowed
/// but leaves previously derived tables stale.
///
/// # Examples
///
/// ```
/// use wordcount_dfa::dfa::{StateId, Tree};
///
/// let tree = Tree::from_words(["ab", "bc"]);
/// let table = tree.derive_table();
///
/// assert_eq!(table.rows(), 5);
/// assert_eq!(table.columns(), 3);
/// // From "ab", reading 'c' falls back to the state for "bc".
/// let ab = tree.state_for_prefix(&['a', 'b']).unwrap();
/// assert_eq!(table.get(ab, 2), StateId::new(4));
/// ```
#[derive(Clone, Debug)]
pub struct Tree<C: Letter> {
    states: Vec<State<C>>,
    by_prefix: HashMap<Vec<C>, StateId>,
    finals: BTreeMap<Vec<C>, StateId>,
    alphabet: BTreeSet<C>,
}

impl<C: Letter> Default for Tree<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Letter> Tree<C> {
    /// Creates a tree holding only the root state.
    pub fn new() -> Self {
        let mut tree = Tree {
            states: Vec::new(),
            by_prefix: HashMap::new(),
            finals: BTreeMap::new(),
            alphabet: BTreeSet::new(),
        };
        tree.new_state(Vec::new());
        tree
    }

    /// Builds a tree from an iterator of words, added in iteration order.
    pub fn from_words<W: IntoWord<C>>(words: impl IntoIterator<Item = W>) -> Self {
        let mut tree = Self::new();
        for word in words {
            tree.add(word);
        }
        tree
    }

    /// Adds a word.
    ///
    /// Every letter joins the alphabet. Starting at the root, existing edges
    /// are followed and a new state is created for each unseen prefix; the
    /// state reached at the end is registered as completing `word`. Adding a
    /// word that is already present changes nothing.
    ///
    /// An empty word marks the root itself as a completion state.
    pub fn add(&mut self, word: impl IntoWord<C>) {
        let word = word.collect_word();
        self.alphabet.extend(word.iter().copied());

        let before = self.states.len();
        let mut current = StateId::ROOT;
        for (depth, &letter) in word.iter().enumerate() {
            current = match self.states[current.index()].child(letter) {
                Some(child) => child,
                None => {
                    let child = self.new_state(word[..=depth].to_vec());
                    self.states[current.index()].insert_child(letter, child);
                    child
                }
            };
        }

        if !self.finals.contains_key(word.as_slice()) {
            self.finals.insert(word.to_vec(), current);
        }
        debug!(
            "added {:?}: completes at state {}, {} new state(s)",
            word.as_slice(),
            current,
            self.states.len() - before
        );
    }

    fn new_state(&mut self, prefix: Vec<C>) -> StateId {
        let id = StateId::new(u32::try_from(self.states.len()).expect("state id overflow"));
        trace!("state {id} for prefix {prefix:?}");
        self.by_prefix.insert(prefix.clone(), id);
        self.states.push(State::new(id, prefix));
        debug_assert_eq!(self.by_prefix.len(), self.states.len());
        id
    }

    /// Returns the id of the start state, always [`StateId::ROOT`].
    #[inline]
    pub fn root_id(&self) -> StateId {
        StateId::ROOT
    }

    /// Returns the number of states, which is also the next id to be assigned.
    #[inline]
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Returns the state with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not created by this tree.
    #[inline]
    pub fn state(&self, id: StateId) -> &State<C> {
        &self.states[id.index()]
    }

    /// Returns all states in id order.
    pub fn states(&self) -> impl ExactSizeIterator<Item = &State<C>> {
        self.states.iter()
    }

    /// Returns the state reached by `prefix` from the root, if any.
    pub fn state_for_prefix(&self, prefix: &[C]) -> Option<StateId> {
        self.by_prefix.get(prefix).copied()
    }

    /// Returns every letter seen so far, in table column order.
    #[inline]
    pub fn alphabet(&self) -> &BTreeSet<C> {
        &self.alphabet
    }

    /// Returns the number of distinct letters.
    #[inline]
    pub fn alphabet_size(&self) -> usize {
        self.alphabet.len()
    }

    /// Returns the distinct words added so far, in sorted order.
    pub fn word_list(&self) -> impl ExactSizeIterator<Item = &[C]> {
        self.finals.keys().map(Vec::as_slice)
    }

    /// Returns the state reached upon completing each distinct word.
    #[inline]
    pub fn completion_states(&self) -> &BTreeMap<Vec<C>, StateId> {
        &self.finals
    }

    /// True if some word completes at `id`.
    pub fn is_completion(&self, id: StateId) -> bool {
        self.finals.contains_key(self.state(id).prefix())
    }

    /// Derives the total transition table.
    ///
    /// Row `s`, column `i` holds the state entered from `s` on the `i`-th
    /// letter of [`alphabet`](Tree::alphabet): the target of the direct edge
    /// if there is one, else [`resolve_fallback`](Tree::resolve_fallback).
    pub fn derive_table(&self) -> TransitionTable {
        let columns = self.alphabet.len();
        let mut cells = Vec::with_capacity(self.states.len() * columns);
        let mut fallbacks = 0usize;

        for state in &self.states {
            let direct = state.direct_transitions(self.alphabet.iter().copied());
            for (dest, &letter) in direct.zip(&self.alphabet) {
                cells.push(dest.unwrap_or_else(|| {
                    fallbacks += 1;
                    self.resolve_fallback(state.id(), letter)
                }));
            }
        }

        debug!(
            "derived {}x{} table ({fallbacks} fallback cell(s))",
            self.states.len(),
            columns
        );
        TransitionTable::from_cells(self.states.len(), columns, cells)
    }

    /// Returns the state for the longest suffix of `prefix(state) + letter`
    /// that is itself a prefix in the tree, or the root if none is.
    ///
    /// Costs one hash lookup per candidate suffix, so at most
    /// `prefix(state).len() + 1` lookups.
    pub fn resolve_fallback(&self, state: StateId, letter: C) -> StateId {
        let prefix = self.state(state).prefix();
        let mut candidate = Vec::with_capacity(prefix.len() + 1);
        candidate.extend_from_slice(prefix);
        candidate.push(letter);

        (0..candidate.len())
            .find_map(|start| self.state_for_prefix(&candidate[start..]))
            .unwrap_or(StateId::ROOT)
    }

    /// Returns a nested dump of the trie: `prefix[id] (letter: child, ...)`.
    pub fn show(&self) -> TreeDisplay<'_, C> {
        TreeDisplay { tree: self }
    }
}

impl Tree<char> {
    /// Returns the distinct words as strings, in sorted order.
    pub fn word_strings(&self) -> Vec<String> {
        self.word_list().map(|w| w.iter().collect()).collect()
    }
}

/// Display adapter returned by [`Tree::show`].
pub struct TreeDisplay<'t, C: Letter> {
    tree: &'t Tree<C>,
}

impl<C: Letter + fmt::Display> TreeDisplay<'_, C> {
    fn fmt_state(&self, id: StateId, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.tree.state(id);
        for letter in state.prefix() {
            write!(f, "{letter}")?;
        }
        write!(f, "[{id}]")?;

        if !state.is_leaf() {
            f.write_str(" (")?;
            for (position, (letter, child)) in state.children().with_position() {
                write!(f, "{letter}: ")?;
                self.fmt_state(child, f)?;
                if !matches!(position, Position::Last | Position::Only) {
                    f.write_str(", ")?;
                }
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl<C: Letter + fmt::Display> fmt::Display for TreeDisplay<'_, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_state(StateId::ROOT, f)
    }
}
