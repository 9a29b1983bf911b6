use super::{Algorithm, Matches, boyer_moore_galil};
use crate::{
    compare::{Exact, SymbolComparator},
    err::InvalidArgument,
};
use std::{hash::Hash, ops::Range};

///
/// Trait for searching a sequence of symbols for every occurrence of a
/// pattern. Implemented for anything that can be viewed as a slice, such as
/// byte strings, `Vec<char>`, or arrays of tokens.
///
/// ```
/// # use pattern_search::prelude::*;
/// let text = b"GATTACAGATTACA";
/// assert_eq!(text.find_all_matches(b"ATTA", Algorithm::Kmp).unwrap(), [1, 8]);
/// assert_eq!(text.find_first_match(b"ACA"), Some(4..7));
/// assert!(!text.contains_match(b"TTT"));
/// ```
///
pub trait ExactSearch<T> {
    /// Finds every occurrence of `pattern` with exact symbol equality.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty.
    fn find_all_matches(&self, pattern: impl AsRef<[T]>, algorithm: Algorithm) -> Result<Matches, InvalidArgument>;

    /// Finds every occurrence of `pattern` using `comparator` for symbol
    /// equality.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty.
    fn find_all_matches_with<C>(
        &self, pattern: impl AsRef<[T]>, algorithm: Algorithm, comparator: &C,
    ) -> Result<Matches, InvalidArgument>
    where
        C: SymbolComparator<T> + ?Sized;

    /// Returns `true` if the pattern occurs. An empty pattern is never found.
    fn contains_match(&self, pattern: impl AsRef<[T]>) -> bool;

    /// Returns the index range of the leftmost occurrence of `pattern`, or
    /// [`None`] if it does not occur or is empty.
    fn find_first_match(&self, pattern: impl AsRef<[T]>) -> Option<Range<usize>>;
}

impl<T, H> ExactSearch<T> for H
where
    T: Ord + Hash,
    H: AsRef<[T]> + ?Sized,
{
    #[inline]
    fn find_all_matches(&self, pattern: impl AsRef<[T]>, algorithm: Algorithm) -> Result<Matches, InvalidArgument> {
        algorithm.find_all(pattern.as_ref(), self.as_ref(), &Exact)
    }

    #[inline]
    fn find_all_matches_with<C>(
        &self, pattern: impl AsRef<[T]>, algorithm: Algorithm, comparator: &C,
    ) -> Result<Matches, InvalidArgument>
    where
        C: SymbolComparator<T> + ?Sized, {
        algorithm.find_all(pattern.as_ref(), self.as_ref(), comparator)
    }

    #[inline]
    #[must_use]
    fn contains_match(&self, pattern: impl AsRef<[T]>) -> bool {
        self.find_first_match(pattern).is_some()
    }

    #[inline]
    #[must_use]
    fn find_first_match(&self, pattern: impl AsRef<[T]>) -> Option<Range<usize>> {
        let pattern = pattern.as_ref();
        let matches = boyer_moore_galil(pattern, self.as_ref(), &Exact).ok()?;
        matches.first().map(|&start| start..start + pattern.len())
    }
}
