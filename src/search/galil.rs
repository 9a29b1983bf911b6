use super::{FailureTable, LastOccurrenceTable, Matches, bad_character_shift, check_lengths};
use crate::{compare::SymbolComparator, err::InvalidArgument};
use std::hash::Hash;

/// Finds every start offset of `pattern` in `text` using Boyer–Moore with the
/// bad-character rule and the Galil rule.
///
/// After a full match, the window is advanced by the pattern's shortest period
/// `k` (taken from the [`FailureTable`]). No match can start in between, and
/// the first `len - k` symbols of the new window are already known to match,
/// so the right-to-left scan stops at that low bound instead of at zero. Any
/// mismatch falls back to the bad-character rule of
/// [`boyer_moore`](fn@super::boyer_moore) and clears the low bound.
///
/// This keeps the number of comparisons linear even for highly periodic
/// patterns, e.g. `aaaaa` in a long run of `a`.
///
/// # Errors
///
/// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the text is not an error and yields no matches.
pub fn boyer_moore_galil<T, C>(pattern: &[T], text: &[T], comparator: &C) -> Result<Matches, InvalidArgument>
where
    T: Eq + Hash,
    C: SymbolComparator<T> + ?Sized, {
    let mut matches = Matches::new();
    if !check_lengths(pattern, text)? {
        return Ok(matches);
    }

    let failure_table = FailureTable::new(pattern, comparator);
    let last_table = LastOccurrenceTable::new(pattern);

    // Non-empty pattern, so the table is non-empty
    let period = failure_table.shortest_period().unwrap_or(1);
    let last_start = text.len() - pattern.len();

    let mut i = 0;
    let mut low_bound = 0;

    while i <= last_start {
        let mut j = pattern.len();
        while j > low_bound && comparator.equal(&pattern[j - 1], &text[i + j - 1]) {
            j -= 1;
        }

        if j == low_bound {
            matches.push(i);
            i += period;
            low_bound = pattern.len() - period;
        } else {
            i += bad_character_shift(&last_table, &text[i + j - 1], j - 1, comparator);
            low_bound = 0;
        }
    }

    Ok(matches)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::compare::{AsciiCaseInsensitive, Exact};

    #[test]
    fn overlapping() {
        assert_eq!(boyer_moore_galil(b"aa", b"aaaa", &Exact).unwrap(), [0, 1, 2]);
        assert_eq!(boyer_moore_galil(b"abab", b"abababab", &Exact).unwrap(), [0, 2, 4]);
        assert_eq!(boyer_moore_galil(b"aabaa", b"aabaabaabaa", &Exact).unwrap(), [0, 3, 6]);
    }

    #[test]
    fn low_bound_reset() {
        // The window after the first match fails, clearing the low bound
        assert_eq!(boyer_moore_galil(b"abab", b"ababxabab", &Exact).unwrap(), [0, 5]);
        assert_eq!(boyer_moore_galil(b"aaa", b"aaabaaaa", &Exact).unwrap(), [0, 4, 5]);
    }

    #[test]
    fn periodic_run() {
        let text = vec![b'a'; 10_000];
        let matches = boyer_moore_galil(b"aaaaa", &text, &Exact).unwrap();
        assert_eq!(matches.len(), 10_000 - 4);
        assert!(matches.iter().copied().eq(0..10_000 - 4));
    }

    #[test]
    fn boundaries() {
        assert_eq!(boyer_moore_galil(b"xyz", b"xyz", &Exact).unwrap(), [0]);
        assert!(boyer_moore_galil(b"xyzw", b"xyz", &Exact).unwrap().is_empty());
        assert!(boyer_moore_galil(b"abd", b"abcabc", &Exact).unwrap().is_empty());
        assert_eq!(boyer_moore_galil(b"", b"xyz", &Exact), Err(InvalidArgument::EmptyPattern));
    }

    #[test]
    fn caseless() {
        assert_eq!(
            boyer_moore_galil(b"ABC", b"xxabcxx", &AsciiCaseInsensitive).unwrap(),
            [2]
        );
        assert_eq!(
            boyer_moore_galil(b"Aa", b"aAaA", &AsciiCaseInsensitive).unwrap(),
            [0, 1, 2]
        );
    }
}
