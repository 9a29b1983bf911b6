//! A module providing wrapper types with
//! [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
//! implementations tailored to exact substring search. Texts and patterns are
//! drawn from small alphabets so that fuzzed inputs actually contain matches.
//!
//! <div class="warning note">
//!
//! **Note**
//!
//! You must enable the *fuzzing* feature in your `Cargo.toml` to use these
//! types.
//!
//! </div>

use arbitrary::{Arbitrary, Result, Unstructured};

macro_rules! impl_deref {
    ($wrapper:ty, $inner:ty) => {
        impl ::std::ops::Deref for $wrapper {
            type Target = $inner;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl ::std::ops::DerefMut for $wrapper {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }
    };
}

/// The alphabet used by [`SmallAlphabetBytes`] and [`SearchCase`].
pub const SMALL_ALPHABET: &[u8] = b"abcd";

/// The alphabet used by [`SearchCaseCaseless`].
pub const MIXED_CASE_ALPHABET: &[u8] = b"abAB";

/// The longest pattern generated by [`SearchCase`] and [`SearchCaseCaseless`].
pub const MAX_PATTERN_LEN: usize = 8;

fn bytes_from(u: &mut Unstructured<'_>, alphabet: &[u8], len: usize) -> Result<Vec<u8>> {
    let mut vec = Vec::with_capacity(len);
    for _ in 0..len {
        vec.push(*u.choose(alphabet)?);
    }
    Ok(vec)
}

/// A wrapper around `Vec<u8>` such that the implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// only generates bytes from [`SMALL_ALPHABET`].
#[derive(Debug)]
pub struct SmallAlphabetBytes(pub Vec<u8>);

impl_deref! {SmallAlphabetBytes, Vec<u8>}

impl<'a> Arbitrary<'a> for SmallAlphabetBytes {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let len = u.arbitrary_len::<u8>()?;
        Ok(SmallAlphabetBytes(bytes_from(u, SMALL_ALPHABET, len)?))
    }
}

/// A pattern and a text for exact search. The implementation of
/// [`Arbitrary`](https://docs.rs/arbitrary/latest/arbitrary/trait.Arbitrary.html)
/// guarantees:
///
/// - The pattern is non-empty and at most [`MAX_PATTERN_LEN`] long
/// - Both are drawn from [`SMALL_ALPHABET`]
///
/// The text may be shorter than the pattern.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchCase {
    pub pattern: Vec<u8>,
    pub text:    Vec<u8>,
}

impl<'a> Arbitrary<'a> for SearchCase {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let pattern_len = u.int_in_range(1..=MAX_PATTERN_LEN)?;
        let pattern = bytes_from(u, SMALL_ALPHABET, pattern_len)?;
        let text = SmallAlphabetBytes::arbitrary(u)?.0;
        Ok(SearchCase { pattern, text })
    }

    fn size_hint(depth: usize) -> (usize, Option<usize>) {
        let _ = depth;
        (2, None)
    }
}

/// A wrapper around [`SearchCase`] whose pattern and text mix ASCII case, for
/// exercising case-insensitive comparators.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct SearchCaseCaseless(pub SearchCase);

impl_deref! {SearchCaseCaseless, SearchCase}

impl<'a> Arbitrary<'a> for SearchCaseCaseless {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        let pattern_len = u.int_in_range(1..=MAX_PATTERN_LEN)?;
        let pattern = bytes_from(u, MIXED_CASE_ALPHABET, pattern_len)?;
        let text_len = u.arbitrary_len::<u8>()?;
        let text = bytes_from(u, MIXED_CASE_ALPHABET, text_len)?;
        Ok(SearchCaseCaseless(SearchCase { pattern, text }))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        compare::{AsciiCaseInsensitive, Exact},
        search::{Algorithm, brute_force},
    };

    /// Deterministic pseudo-random bytes to drive [`Unstructured`].
    fn raw_bytes(seed: u64, len: usize) -> Vec<u8> {
        let mut state = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1_442_695_040_888_963_407);
                (state >> 56) as u8
            })
            .collect()
    }

    #[test]
    fn cases_are_valid() {
        for seed in 0..50 {
            let data = raw_bytes(seed, 512);
            let mut u = Unstructured::new(&data);
            let case = SearchCase::arbitrary(&mut u).unwrap();
            assert!(!case.pattern.is_empty());
            assert!(case.pattern.len() <= MAX_PATTERN_LEN);
            assert!(case.pattern.iter().chain(&case.text).all(|b| SMALL_ALPHABET.contains(b)));
        }
    }

    #[test]
    fn matchers_agree_on_arbitrary_cases() {
        for seed in 0..200 {
            let data = raw_bytes(seed, 1024);
            let mut u = Unstructured::new(&data);
            let SearchCase { pattern, text } = SearchCase::arbitrary(&mut u).unwrap();

            let expected = brute_force(&pattern, &text, &Exact).unwrap();
            for algorithm in Algorithm::ALL {
                assert_eq!(algorithm.find_all(&pattern, &text, &Exact).unwrap(), expected);
            }
        }
    }

    #[test]
    fn matchers_agree_on_caseless_cases() {
        for seed in 0..200 {
            let data = raw_bytes(seed, 1024);
            let mut u = Unstructured::new(&data);
            let case = SearchCaseCaseless::arbitrary(&mut u).unwrap();

            let expected = brute_force(&case.pattern, &case.text, &AsciiCaseInsensitive).unwrap();
            for algorithm in Algorithm::ALL {
                assert_eq!(
                    algorithm.find_all(&case.pattern, &case.text, &AsciiCaseInsensitive).unwrap(),
                    expected
                );
            }
        }
    }

    #[test]
    fn exhausted_input() {
        let mut u = Unstructured::new(&[]);
        let case = SearchCase::arbitrary(&mut u).unwrap();
        assert_eq!(case.pattern.len(), 1);
        assert!(case.text.is_empty());
    }
}
