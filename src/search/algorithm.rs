use super::{Matches, boyer_moore, boyer_moore_galil, brute_force, kmp};
use crate::{
    compare::SymbolComparator,
    err::{InvalidArgument, ParseAlgorithmError},
};
use std::{fmt, hash::Hash, str::FromStr};

/// The exact matchers offered by this crate. All of them return the same
/// [`Matches`] for the same inputs and differ only in cost.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Algorithm {
    /// See [`brute_force`]
    BruteForce,
    /// See [`kmp`]
    Kmp,
    /// See [`boyer_moore`]
    BoyerMoore,
    /// See [`boyer_moore_galil`]
    #[default]
    BoyerMooreGalil,
}

impl Algorithm {
    /// Every algorithm, in order of increasing sophistication.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::BruteForce,
        Algorithm::Kmp,
        Algorithm::BoyerMoore,
        Algorithm::BoyerMooreGalil,
    ];

    /// The short name used by [`Display`](fmt::Display) and
    /// [`FromStr`].
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::BruteForce => "brute-force",
            Algorithm::Kmp => "kmp",
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::BoyerMooreGalil => "galil",
        }
    }

    /// Runs the selected matcher.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty.
    #[inline]
    pub fn find_all<T, C>(self, pattern: &[T], text: &[T], comparator: &C) -> Result<Matches, InvalidArgument>
    where
        T: Eq + Hash,
        C: SymbolComparator<T> + ?Sized, {
        match self {
            Algorithm::BruteForce => brute_force(pattern, text, comparator),
            Algorithm::Kmp => kmp(pattern, text, comparator),
            Algorithm::BoyerMoore => boyer_moore(pattern, text, comparator),
            Algorithm::BoyerMooreGalil => boyer_moore_galil(pattern, text, comparator),
        }
    }
}

impl fmt::Display for Algorithm {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let algorithm = match name.to_ascii_lowercase().as_str() {
            "brute-force" | "bruteforce" | "naive" => Algorithm::BruteForce,
            "kmp" => Algorithm::Kmp,
            "boyer-moore" | "bm" => Algorithm::BoyerMoore,
            "galil" | "boyer-moore-galil" => Algorithm::BoyerMooreGalil,
            _ => return Err(ParseAlgorithmError(name.to_string())),
        };
        Ok(algorithm)
    }
}
