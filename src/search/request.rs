use super::{Algorithm, FailureTable, LastOccurrenceTable, Matches};
use crate::{compare::SymbolComparator, err::InvalidArgument};
use std::hash::Hash;

/// A search whose pattern, text, and comparator may each be absent, such as
/// when they come from optional user input. Missing pieces are reported as
/// [`InvalidArgument`] errors when the search is run, before any work is done.
///
/// ```
/// # use pattern_search::prelude::*;
/// let request = SearchRequest::new().pattern(b"ana").text(b"banana").comparator(&Exact);
/// assert_eq!(request.run(Algorithm::Kmp).unwrap(), [1, 3]);
///
/// let request = SearchRequest::<u8, Exact>::new().pattern(b"ana");
/// assert_eq!(request.run(Algorithm::Kmp), Err(InvalidArgument::MissingText));
/// ```
pub struct SearchRequest<'a, T, C: ?Sized> {
    pattern:    Option<&'a [T]>,
    text:       Option<&'a [T]>,
    comparator: Option<&'a C>,
}

impl<'a, T, C: ?Sized> SearchRequest<'a, T, C> {
    /// Creates a request with nothing supplied.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        SearchRequest {
            pattern:    None,
            text:       None,
            comparator: None,
        }
    }

    /// Supply the pattern to search for.
    #[inline]
    #[must_use]
    pub fn pattern(mut self, pattern: &'a [T]) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Supply the text to search within.
    #[inline]
    #[must_use]
    pub fn text(mut self, text: &'a [T]) -> Self {
        self.text = Some(text);
        self
    }

    /// Supply the symbol comparator.
    #[inline]
    #[must_use]
    pub fn comparator(mut self, comparator: &'a C) -> Self {
        self.comparator = Some(comparator);
        self
    }

    /// Supply each argument from an [`Option`], for callers that already hold
    /// possibly-absent values.
    #[inline]
    #[must_use]
    pub fn from_parts(pattern: Option<&'a [T]>, text: Option<&'a [T]>, comparator: Option<&'a C>) -> Self {
        SearchRequest {
            pattern,
            text,
            comparator,
        }
    }
}

impl<T, C> SearchRequest<'_, T, C>
where
    T: Eq + Hash,
    C: SymbolComparator<T> + ?Sized,
{
    /// Runs `algorithm` over the supplied arguments.
    ///
    /// # Errors
    ///
    /// Checked in this order: [`InvalidArgument::MissingPattern`],
    /// [`InvalidArgument::EmptyPattern`], [`InvalidArgument::MissingText`], and
    /// [`InvalidArgument::MissingComparator`].
    pub fn run(&self, algorithm: Algorithm) -> Result<Matches, InvalidArgument> {
        let pattern = self.pattern.ok_or(InvalidArgument::MissingPattern)?;
        if pattern.is_empty() {
            return Err(InvalidArgument::EmptyPattern);
        }
        let text = self.text.ok_or(InvalidArgument::MissingText)?;
        let comparator = self.comparator.ok_or(InvalidArgument::MissingComparator)?;

        algorithm.find_all(pattern, text, comparator)
    }

    /// Builds the [`FailureTable`] of the supplied pattern. An empty pattern
    /// gives an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingPattern`] or
    /// [`InvalidArgument::MissingComparator`] if either is absent.
    pub fn failure_table(&self) -> Result<FailureTable, InvalidArgument> {
        let pattern = self.pattern.ok_or(InvalidArgument::MissingPattern)?;
        let comparator = self.comparator.ok_or(InvalidArgument::MissingComparator)?;
        Ok(FailureTable::new(pattern, comparator))
    }
}

impl<'a, T: Eq + Hash, C: ?Sized> SearchRequest<'a, T, C> {
    /// Builds the [`LastOccurrenceTable`] of the supplied pattern. An empty
    /// pattern gives an empty table. The comparator is not needed.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::MissingPattern`] if no pattern was supplied.
    pub fn last_occurrence_table(&self) -> Result<LastOccurrenceTable<'a, T>, InvalidArgument> {
        let pattern = self.pattern.ok_or(InvalidArgument::MissingPattern)?;
        Ok(LastOccurrenceTable::new(pattern))
    }
}

impl<T, C: ?Sized> Default for SearchRequest<'_, T, C> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C: ?Sized> Clone for SearchRequest<'_, T, C> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, C: ?Sized> Copy for SearchRequest<'_, T, C> {}
