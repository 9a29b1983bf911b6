use super::{Matches, check_lengths};
use crate::{compare::SymbolComparator, err::InvalidArgument};

/// Finds every start offset of `pattern` in `text` by comparing each window
/// left-to-right until a mismatch.
///
/// ### Limitations
///
/// This is a naïve exact match implementation with `O(n·m)` worst case and
/// should only be used for small inputs, or as a reference for the other
/// matchers.
///
/// # Errors
///
/// Returns [`InvalidArgument::EmptyPattern`] if `pattern` is empty. A pattern
/// longer than the text is not an error and yields no matches.
pub fn brute_force<T, C>(pattern: &[T], text: &[T], comparator: &C) -> Result<Matches, InvalidArgument>
where
    C: SymbolComparator<T> + ?Sized, {
    let mut matches = Matches::new();
    if !check_lengths(pattern, text)? {
        return Ok(matches);
    }

    for (i, window) in text.windows(pattern.len()).enumerate() {
        if std::iter::zip(pattern, window).all(|(p, t)| comparator.equal(p, t)) {
            matches.push(i);
        }
    }

    Ok(matches)
}
