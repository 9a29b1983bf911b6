use super::{LastOccurrenceTable, Matches, check_lengths};
use crate::{compare::SymbolComparator, err::InvalidArgument};
use std::hash::Hash;

/// Finds every start offset of `pattern` in `text` using Boyer–Moore with the
/// bad-character rule.
///
/// Each window is compared right-to-left. On a mismatch at pattern index `j`,
/// the window is shifted so that the rightmost occurrence of the mismatched
/// text symbol in the pattern lines up with it, or past it entirely if the
/// symbol does not occur. When that occurrence lies at or to the right of `j`,
/// the window advances by one. After a full match the window also advances by
/// one.
///
/// The worst case is `O(n·m)`, reached by periodic patterns such as `aaaaa`;
/// see [`boyer_moore_galil`](super::boyer_moore_galil) for a linear
/// alternative.
///
/// # Errors
///
/// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the text is not an error and yields no matches.
pub fn boyer_moore<T, C>(pattern: &[T], text: &[T], comparator: &C) -> Result<Matches, InvalidArgument>
where
    T: Eq + Hash,
    C: SymbolComparator<T> + ?Sized, {
    let mut matches = Matches::new();
    if !check_lengths(pattern, text)? {
        return Ok(matches);
    }

    let table = LastOccurrenceTable::new(pattern);
    let last_start = text.len() - pattern.len();
    let mut i = 0;

    while i <= last_start {
        // `j` counts the symbols not yet verified, so the next comparison is
        // at pattern index `j - 1`
        let mut j = pattern.len();
        while j > 0 && comparator.equal(&pattern[j - 1], &text[i + j - 1]) {
            j -= 1;
        }

        if j == 0 {
            matches.push(i);
            i += 1;
        } else {
            i += bad_character_shift(&table, &text[i + j - 1], j - 1, comparator);
        }
    }

    Ok(matches)
}

/// The bad-character shift for a mismatch at pattern index `mismatch` against
/// the text symbol `symbol`. Always at least one.
#[inline]
pub(crate) fn bad_character_shift<T, C>(
    table: &LastOccurrenceTable<'_, T>, symbol: &T, mismatch: usize, comparator: &C,
) -> usize
where
    T: Eq + Hash,
    C: SymbolComparator<T> + ?Sized, {
    match table.find(symbol, comparator) {
        Some(last) if last < mismatch => mismatch - last,
        Some(_) => 1,
        None => mismatch + 1,
    }
}
