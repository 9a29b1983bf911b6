use crate::compare::SymbolComparator;
use std::ops::Deref;

/// The KMP partial-match table of a pattern. Entry `k` holds the length of the
/// longest proper prefix of `pattern[..=k]` that is also a suffix of it, under
/// the comparator's notion of equality.
///
/// The table has the same length as the pattern, so an empty pattern yields an
/// empty table.
///
/// ```
/// # use pattern_search::prelude::*;
/// let table = FailureTable::new(b"ababaca", &Exact);
/// assert_eq!(table.as_slice(), &[0, 0, 1, 2, 3, 0, 1]);
/// assert_eq!(table.shortest_period(), Some(6));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FailureTable(Vec<usize>);

impl FailureTable {
    /// Builds the failure table for `pattern` using `comparator` for symbol
    /// equality. The scan keeps a candidate prefix length `i` and only falls
    /// back through previously computed entries, so construction is `O(m)`.
    #[must_use]
    pub fn new<T, C>(pattern: &[T], comparator: &C) -> Self
    where
        C: SymbolComparator<T> + ?Sized, {
        let mut table = vec![0; pattern.len()];
        let mut i = 0;
        let mut j = 1;

        while j < pattern.len() {
            if comparator.equal(&pattern[i], &pattern[j]) {
                table[j] = i + 1;
                i += 1;
                j += 1;
            } else if i == 0 {
                table[j] = 0;
                j += 1;
            } else {
                i = table[i - 1];
            }
        }

        FailureTable(table)
    }

    /// Get the table entries as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// The length of the longest proper border of the whole pattern, i.e.
    /// the final table entry. [`None`] for an empty table.
    #[inline]
    #[must_use]
    pub fn border(&self) -> Option<usize> {
        self.0.last().copied()
    }

    /// The smallest period of the pattern, `len - border`. After a full match,
    /// this is the smallest shift that can produce another match. [`None`] for
    /// an empty table.
    #[inline]
    #[must_use]
    pub fn shortest_period(&self) -> Option<usize> {
        self.border().map(|border| self.0.len() - border)
    }
}

impl Deref for FailureTable {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<FailureTable> for Vec<usize> {
    #[inline]
    fn from(table: FailureTable) -> Self {
        table.0
    }
}

/// Builds the KMP failure table of `pattern`. See [`FailureTable::new`].
#[inline]
#[must_use]
pub fn build_failure_table<T, C>(pattern: &[T], comparator: &C) -> FailureTable
where
    C: SymbolComparator<T> + ?Sized, {
    FailureTable::new(pattern, comparator)
}
