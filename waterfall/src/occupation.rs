//! Per-column occupation tracking.

use smallvec::SmallVec;

use crate::{Px, columns::MAX_COLUMNS};

/// Vertical extent already consumed in each column during one placement scan.
///
/// Values only grow while a scan runs. Column counts are small, so the vector
/// lives inline for the common cases.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnOccupation {
    columns: SmallVec<[Px; 8]>,
}

impl ColumnOccupation {
    /// Creates `column_count` empty columns, clamped to `1..=MAX_COLUMNS`.
    pub fn new(column_count: usize) -> Self {
        Self {
            columns: SmallVec::from_elem(Px::ZERO, column_count.clamp(1, MAX_COLUMNS)),
        }
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Always `false`; there is at least one column.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// The least occupied column and its occupation.
    ///
    /// Ties go to the lowest index: a later column only wins when it is
    /// strictly shorter.
    pub fn shortest(&self) -> (usize, Px) {
        let mut index = 0;
        let mut best = self.columns[0];
        for (i, occupation) in self.columns.iter().copied().enumerate().skip(1) {
            if occupation < best {
                best = occupation;
                index = i;
            }
        }
        (index, best)
    }

    /// Places an extent into the shortest column.
    ///
    /// Returns the chosen column and its occupation before the extent was
    /// added.
    pub fn push(&mut self, extent: Px) -> (usize, Px) {
        let (column, start) = self.shortest();
        self.columns[column] = start + extent.non_negative();
        (column, start)
    }

    /// Occupation of `column`, if it exists.
    pub fn get(&self, column: usize) -> Option<Px> {
        self.columns.get(column).copied()
    }

    /// Iterates the occupation of every column in index order.
    pub fn iter(&self) -> impl Iterator<Item = Px> + '_ {
        self.columns.iter().copied()
    }
}
