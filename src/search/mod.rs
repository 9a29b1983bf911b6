//! ## Exact substring search
//!
//! Four matchers are provided, each returning every (possibly overlapping)
//! start offset of `pattern` in `text` as a [`Matches`], in increasing order:
//!
//! - [`brute_force`](fn@brute_force): tries every window left-to-right. `O(n·m)`.
//! - [`kmp`](fn@kmp): Knuth–Morris–Pratt using a [`FailureTable`]. `O(n + m)`.
//! - [`boyer_moore`](fn@boyer_moore): right-to-left windows with the bad-character rule from
//!   a [`LastOccurrenceTable`].
//! - [`boyer_moore_galil`](fn@boyer_moore_galil): Boyer–Moore plus the Galil rule, which skips the
//!   part of the next window already known to match after a full match. This
//!   keeps periodic patterns such as `aaaaa` linear.
//!
//! All four agree on every valid input. An empty pattern is an
//! [`InvalidArgument::EmptyPattern`](crate::err::InvalidArgument) error, and a
//! pattern longer than the text produces no matches.
//!
//! Symbol equality is delegated to a
//! [`SymbolComparator`](crate::compare::SymbolComparator), so case-insensitive
//! or custom searches need no changes to the algorithms.
//!
//! ```
//! # use pattern_search::{prelude::*, search::kmp};
//! let matches = kmp(b"aa", b"aaaa", &Exact).unwrap();
//! assert_eq!(matches, [0, 1, 2]);
//!
//! let matches = b"xxabcxx".find_all_matches_with(b"ABC", Algorithm::BoyerMoore, &AsciiCaseInsensitive).unwrap();
//! assert_eq!(matches, [2]);
//! ```
//!
//! ## Missing arguments
//!
//! The functions above take references and therefore always receive a
//! pattern, text, and comparator. When any of these may be absent, build a
//! [`SearchRequest`] instead, which reports the missing piece as an error.

use crate::err::InvalidArgument;

/// Algorithm selection and dispatch.
mod algorithm;
/// Boyer–Moore with the bad-character rule.
mod boyer_moore;
/// Naïve window-by-window matching.
mod brute_force;
/// KMP failure table construction.
mod failure_table;
/// Boyer–Moore with the Galil rule.
mod galil;
/// Knuth–Morris–Pratt matching.
mod kmp;
/// Last-occurrence table construction.
mod last_occurrence;
/// Ordered match offsets.
mod matches;
/// Searches with optional arguments.
mod request;
/// Search methods on sequences.
mod substring;


#[cfg(all(test, feature = "bench"))]
mod bench;

pub use algorithm::*;
pub use boyer_moore::*;
pub use brute_force::*;
pub use failure_table::*;
pub use galil::*;
pub use kmp::*;
pub use last_occurrence::*;
pub use matches::*;
pub use request::*;
pub use substring::*;

/// Shared precondition check for every matcher. Returns `Ok(false)` when the
/// pattern cannot fit in the text, in which case there is nothing to search.
#[inline]
fn check_lengths<T>(pattern: &[T], text: &[T]) -> Result<bool, InvalidArgument> {
    if pattern.is_empty() {
        return Err(InvalidArgument::EmptyPattern);
    }
    Ok(pattern.len() <= text.len())
}
