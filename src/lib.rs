#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::similar_names)]
#![cfg_attr(feature = "bench", feature(test))]

/// Symbol comparison capabilities used by every matcher.
pub mod compare;
/// Error types and exit code helpers.
pub mod err;
/// Exact substring search algorithms and their tables.
pub mod search;

#[cfg(feature = "fuzzing")]
pub mod arbitrary;

/// Generate texts and patterns for testing.
#[cfg(feature = "rand")]
pub mod generate;

/// Common structures and traits re-exported
pub mod prelude {
    pub use crate::compare::{AsciiCaseInsensitive, CaseInsensitive, Exact, SymbolComparator};
    pub use crate::err::{GetCode, InvalidArgument, OrFail};
    pub use crate::search::{Algorithm, ExactSearch, FailureTable, LastOccurrenceTable, Matches, SearchRequest};

    #[cfg(feature = "rand")]
    pub use crate::generate::{rand_pattern_in, rand_text};
}
