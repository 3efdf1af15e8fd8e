use super::letter::Letter;
use super::state::StateId;

/// A compact representation of the outgoing edges of a state that doesn't
/// allocate until there are at least three children.
///
/// Edges are kept sorted by letter, so iteration order is the alphabet order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Children<C: Letter> {
    /// No children.
    None,
    /// Exactly one child (letter, state).
    One((C, StateId)),
    /// Exactly two children (letter1, state1, letter2, state2), `letter1 < letter2`.
    Two((C, StateId, C, StateId)),
    /// Three or more children stored in a sorted vector.
    Many(Vec<(C, StateId)>),
}

impl<C: Letter> Default for Children<C> {
    fn default() -> Self {
        Children::None
    }
}

impl<C: Letter> Children<C> {
    /// Gets the child at the specified index.
    ///
    /// Returns `None` if the index is out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<(C, StateId)> {
        match &self {
            Children::None => None,
            Children::One(child) => match index {
                0 => Some(*child),
                _ => None,
            },
            Children::Two((c1, s1, c2, s2)) => match index {
                0 => Some((*c1, *s1)),
                1 => Some((*c2, *s2)),
                _ => None,
            },
            Children::Many(children) => children.get(index).copied(),
        }
    }

    /// Returns the state that `letter`'s edge leads to, or `None` if no such edge exists.
    #[inline]
    pub fn find(&self, letter: C) -> Option<StateId> {
        match &self {
            Children::None => None,
            Children::One((ch, id)) => (*ch == letter).then_some(*id),
            Children::Two((c1, s1, c2, s2)) => {
                if letter == *c1 {
                    Some(*s1)
                } else if letter == *c2 {
                    Some(*s2)
                } else {
                    None
                }
            }
            Children::Many(children) => children
                .binary_search_by(|&(c, _)| c.cmp(&letter))
                .ok()
                .map(|pos| children[pos].1),
        }
    }

    /// Inserts an edge in sorted position.
    ///
    /// The letter must not already have an edge.
    pub(crate) fn insert(&mut self, letter: C, id: StateId) {
        debug_assert!(self.find(letter).is_none(), "insert: letter already exists");
        *self = match std::mem::take(self) {
            Children::None => Children::One((letter, id)),
            Children::One((c1, s1)) => {
                if letter < c1 {
                    Children::Two((letter, id, c1, s1))
                } else {
                    Children::Two((c1, s1, letter, id))
                }
            }
            Children::Two((c1, s1, c2, s2)) => {
                let mut v = vec![(c1, s1), (c2, s2), (letter, id)];
                v.sort_by_key(|&(c, _)| c);
                Children::Many(v)
            }
            Children::Many(mut children) => {
                let pos = children.partition_point(|&(c, _)| c < letter);
                children.insert(pos, (letter, id));
                Children::Many(children)
            }
        };
    }

    /// Returns the number of children.
    #[inline]
    pub fn len(&self) -> usize {
        match &self {
            Children::None => 0,
            Children::One(_) => 1,
            Children::Two(_) => 2,
            Children::Many(children) => children.len(),
        }
    }

    /// True if there are no outgoing edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Children::None)
    }

    /// Returns an iterator over the edges in letter order.
    #[inline]
    pub fn iter(&self) -> ChildIter<'_, C> {
        ChildIter {
            children: self,
            index: 0,
        }
    }
}

/// An iterator over the outgoing edges of a state.
#[derive(Clone)]
pub struct ChildIter<'s, C: Letter> {
    children: &'s Children<C>,
    index: usize,
}

impl<C: Letter> Iterator for ChildIter<'_, C> {
    type Item = (C, StateId);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let next_child = self.children.get(self.index)?;
        self.index += 1;
        Some(next_child)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.children.len().saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl<C: Letter> ExactSizeIterator for ChildIter<'_, C> {}
