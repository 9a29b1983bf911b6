use crate::compare::SymbolComparator;
use std::{
    collections::{HashMap, hash_map},
    hash::Hash,
};

/// Maps each symbol occurring in a pattern to the rightmost index at which it
/// occurs. Symbols that never occur have no entry.
///
/// The table borrows its keys from the pattern, so it lives no longer than
/// the pattern it was built from.
///
/// ```
/// # use pattern_search::prelude::*;
/// let table = LastOccurrenceTable::new(b"abcab");
/// assert_eq!(table.get(&b'a'), Some(3));
/// assert_eq!(table.get(&b'b'), Some(4));
/// assert_eq!(table.get(&b'c'), Some(2));
/// assert_eq!(table.get(&b'z'), None);
/// ```
#[derive(Clone, Debug)]
pub struct LastOccurrenceTable<'a, T> {
    table: HashMap<&'a T, usize>,
}

impl<'a, T: Eq + Hash> LastOccurrenceTable<'a, T> {
    /// Builds the table in a single left-to-right scan. Later occurrences
    /// overwrite earlier ones.
    #[must_use]
    pub fn new(pattern: &'a [T]) -> Self {
        let mut table = HashMap::with_capacity(pattern.len());
        for (index, symbol) in pattern.iter().enumerate() {
            table.insert(symbol, index);
        }
        LastOccurrenceTable { table }
    }

    /// The rightmost index of exactly `symbol`, or [`None`] if it does not
    /// occur in the pattern.
    #[inline]
    #[must_use]
    pub fn get(&self, symbol: &T) -> Option<usize> {
        self.table.get(symbol).copied()
    }

    /// The rightmost index of any pattern symbol equal to `symbol` under
    /// `comparator`, or [`None`] if no such symbol exists.
    ///
    /// For an exact comparator this is a hash lookup. Otherwise every distinct
    /// pattern symbol is compared, so that shifts computed from the result
    /// never skip a window which could match.
    #[inline]
    pub fn find<C>(&self, symbol: &T, comparator: &C) -> Option<usize>
    where
        C: SymbolComparator<T> + ?Sized, {
        if comparator.is_exact() {
            self.get(symbol)
        } else {
            self.table
                .iter()
                .filter(|(key, _)| comparator.equal(key, symbol))
                .map(|(_, &index)| index)
                .max()
        }
    }

    /// The number of distinct symbols in the pattern.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the table was built from an empty pattern.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Iterate over `(symbol, rightmost index)` pairs in arbitrary order.
    #[inline]
    pub fn iter(&self) -> LastOccurrenceIter<'_, 'a, T> {
        LastOccurrenceIter {
            inner: self.table.iter(),
        }
    }
}

impl<'t, 'a, T: Eq + Hash> IntoIterator for &'t LastOccurrenceTable<'a, T> {
    type Item = (&'a T, usize);
    type IntoIter = LastOccurrenceIter<'t, 'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`LastOccurrenceTable`].
pub struct LastOccurrenceIter<'t, 'a, T> {
    inner: hash_map::Iter<'t, &'a T, usize>,
}

impl<'a, T> Iterator for LastOccurrenceIter<'_, 'a, T> {
    type Item = (&'a T, usize);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&symbol, &index)| (symbol, index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Builds the last-occurrence table of `pattern`. See
/// [`LastOccurrenceTable::new`].
#[inline]
#[must_use]
pub fn build_last_table<T: Eq + Hash>(pattern: &[T]) -> LastOccurrenceTable<'_, T> {
    LastOccurrenceTable::new(pattern)
}
