use super::state::StateId;

/// The total transition function of a derived automaton.
///
/// One row per state (in id order), one column per alphabet letter (in
/// alphabet order), stored row-major. Every cell names a state of the same
/// automaton.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    rows: usize,
    columns: usize,
    cells: Vec<StateId>,
}

impl TransitionTable {
    pub(crate) fn from_cells(rows: usize, columns: usize, cells: Vec<StateId>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        TransitionTable {
            rows,
            columns,
            cells,
        }
    }

    /// Returns the number of rows, one per state.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns, one per alphabet letter.
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the state entered from `state` on the letter in `column`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    #[inline]
    pub fn get(&self, state: StateId, column: usize) -> StateId {
        assert!(column < self.columns, "column {column} out of range");
        self.cells[state.index() * self.columns + column]
    }

    /// Returns all transitions out of `state`, in column order.
    #[inline]
    pub fn row(&self, state: StateId) -> &[StateId] {
        let start = state.index() * self.columns;
        &self.cells[start..start + self.columns]
    }

    /// Returns the rows in state order.
    pub fn iter_rows(&self) -> impl ExactSizeIterator<Item = &[StateId]> {
        (0..self.rows).map(move |r| &self.cells[r * self.columns..(r + 1) * self.columns])
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn table() -> TransitionTable {
        TransitionTable::from_cells(3, 2, [0, 1, 1, 0, 2, 2].map(StateId::new).to_vec())
    }

    #[test]
    fn dimensions() {
        let t = table();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.columns(), 2);
        assert_eq!(t.iter_rows().len(), 3);
    }

    #[test]
    fn lookup_is_row_major() {
        let t = table();
        assert_eq!(t.get(StateId::new(1), 0), StateId::new(1));
        assert_eq!(t.get(StateId::new(2), 1), StateId::new(2));
        assert_eq!(t.row(StateId::new(1)), &[StateId::new(1), StateId::new(0)]);
    }

    #[test]
    #[should_panic]
    fn column_out_of_range_panics() {
        table().get(StateId::ROOT, 2);
    }

    #[test]
    fn empty_alphabet() {
        let t = TransitionTable::from_cells(1, 0, Vec::new());
        assert_eq!(t.rows(), 1);
        assert!(t.row(StateId::ROOT).is_empty());
        assert_eq!(t.iter_rows().count(), 1);
    }
}
