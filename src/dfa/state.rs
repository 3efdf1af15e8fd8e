use std::fmt;

use super::children::{ChildIter, Children};
use super::letter::Letter;

/// Identifier of a state, equal to its row in the transition table.
///
/// Ids are handed out in creation order and never reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StateId(u32);

impl StateId {
    /// The start state of every automaton.
    pub const ROOT: StateId = StateId(0);

    /// Creates an id from its raw number.
    #[inline]
    pub const fn new(id: u32) -> Self {
        StateId(id)
    }

    /// Returns the id as a table row index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the raw number.
    #[inline]
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A state of the automaton: one per distinct prefix of the added words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct State<C: Letter> {
    id: StateId,
    prefix: Vec<C>,
    children: Children<C>,
}

impl<C: Letter> State<C> {
    pub(crate) fn new(id: StateId, prefix: Vec<C>) -> Self {
        State {
            id,
            prefix,
            children: Children::None,
        }
    }

    /// Returns the id of this state.
    #[inline]
    pub fn id(&self) -> StateId {
        self.id
    }

    /// Returns the letters that lead from the root to this state.
    #[inline]
    pub fn prefix(&self) -> &[C] {
        &self.prefix
    }

    /// Returns the state that `letter`'s edge leads to, or `None` if no such edge exists.
    #[inline]
    pub fn child(&self, letter: C) -> Option<StateId> {
        self.children.find(letter)
    }

    /// Returns an iterator over the outgoing edges in letter order.
    #[inline]
    pub fn children(&self) -> ChildIter<'_, C> {
        self.children.iter()
    }

    /// Returns the number of outgoing edges.
    #[inline]
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// True if no edge leaves this state.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns, for each letter of `alphabet`, the target of this state's own edge.
    ///
    /// Letters without an edge yield `None`; resolving those needs the whole
    /// tree (see [`Tree::resolve_fallback`](super::tree::Tree::resolve_fallback)).
    pub fn direct_transitions<'s>(
        &'s self,
        alphabet: impl Iterator<Item = C> + 's,
    ) -> impl Iterator<Item = Option<StateId>> + 's {
        alphabet.map(move |letter| self.child(letter))
    }

    pub(crate) fn insert_child(&mut self, letter: C, id: StateId) {
        self.children.insert(letter, id);
    }
}
