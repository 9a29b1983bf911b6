//! Symbol comparators decide when a pattern symbol matches a text symbol.
//!
//! Every matcher in [`search`](crate::search) only asks whether
//! [`SymbolComparator::compare`] returns [`Ordering::Equal`]. The ordering
//! itself is never used, so a comparator only has to be total and consistent
//! for the duration of a single search.
//!
//! Any closure of the form `Fn(&T, &T) -> Ordering` is also a comparator:
//!
//! ```
//! # use pattern_search::prelude::*;
//! let vowels_equal = |a: &u8, b: &u8| {
//!     if b"aeiou".contains(a) && b"aeiou".contains(b) {
//!         std::cmp::Ordering::Equal
//!     } else {
//!         a.cmp(b)
//!     }
//! };
//! let matches = b"bat bit but".find_all_matches_with(b"bet", Algorithm::Kmp, &vowels_equal).unwrap();
//! assert_eq!(matches, [0, 4, 8]);
//! ```

use std::cmp::Ordering;

/// Compares two symbols, returning their relative [`Ordering`]. Only the
/// [`Ordering::Equal`] outcome is semantically meaningful to the matchers.
pub trait SymbolComparator<T: ?Sized> {
    /// Compare the pattern symbol `a` against the text symbol `b`.
    fn compare(&self, a: &T, b: &T) -> Ordering;

    /// Returns `true` when equality under this comparator coincides with
    /// [`Eq`]. Table lookups may then use hashing instead of scanning.
    #[inline]
    fn is_exact(&self) -> bool {
        false
    }

    /// Convenience for `compare(a, b) == Ordering::Equal`.
    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        self.compare(a, b) == Ordering::Equal
    }
}

impl<T: ?Sized, F> SymbolComparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Standard symbol equality via [`Ord`].
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct Exact;

impl<T: Ord + ?Sized> SymbolComparator<T> for Exact {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }

    #[inline]
    fn is_exact(&self) -> bool {
        true
    }
}

/// Ignores ASCII case. Non-ASCII symbols are compared exactly.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct AsciiCaseInsensitive;

impl SymbolComparator<u8> for AsciiCaseInsensitive {
    #[inline]
    fn compare(&self, a: &u8, b: &u8) -> Ordering {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

impl SymbolComparator<char> for AsciiCaseInsensitive {
    #[inline]
    fn compare(&self, a: &char, b: &char) -> Ordering {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    }
}

/// Ignores case using the full Unicode lowercase mapping of each `char`.
///
/// Symbols whose lowercase form expands to several characters (such as `'İ'`)
/// are compared by their whole expansion.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct CaseInsensitive;

impl SymbolComparator<char> for CaseInsensitive {
    #[inline]
    fn compare(&self, a: &char, b: &char) -> Ordering {
        a.to_lowercase().cmp(b.to_lowercase())
    }
}
