use super::{FailureTable, Matches, check_lengths};
use crate::{compare::SymbolComparator, err::InvalidArgument};

/// Finds every start offset of `pattern` in `text` using the
/// Knuth–Morris–Pratt algorithm.
///
/// After a mismatch or a full match with `j` symbols matched, the window
/// advances by `j - table[j - 1]` and the first `table[j - 1]` pattern symbols
/// are known to match already, so they are not compared again. Each text
/// symbol is therefore visited a bounded number of times and the search runs in
/// `O(n + m)`.
///
/// # Errors
///
/// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the text is not an error and yields no matches.
pub fn kmp<T, C>(pattern: &[T], text: &[T], comparator: &C) -> Result<Matches, InvalidArgument>
where
    C: SymbolComparator<T> + ?Sized, {
    let mut matches = Matches::new();
    if !check_lengths(pattern, text)? {
        return Ok(matches);
    }

    let table = FailureTable::new(pattern, comparator);
    let last_start = text.len() - pattern.len();

    let mut i = 0;
    let mut j = 0;

    while i <= last_start {
        while j < pattern.len() && comparator.equal(&pattern[j], &text[i + j]) {
            j += 1;
        }

        if j == 0 {
            i += 1;
        } else {
            if j == pattern.len() {
                matches.push(i);
            }
            let border = table[j - 1];
            i += j - border;
            j = border;
        }
    }

    Ok(matches)
}
