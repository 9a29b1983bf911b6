use std::{
    fmt,
    ops::{Deref, Range},
};

/// The start offsets of every match of a pattern in a text, strictly
/// increasing. Each offset `i` satisfies `i + pattern.len() <= text.len()`.
#[derive(Clone, Default, Eq, PartialEq, Hash, Debug)]
pub struct Matches(pub(crate) Vec<usize>);

impl Matches {
    #[inline]
    #[must_use]
    pub(crate) fn new() -> Self {
        Matches(Vec::new())
    }

    #[inline]
    pub(crate) fn push(&mut self, offset: usize) {
        debug_assert!(self.0.last().is_none_or(|&last| last < offset));
        self.0.push(offset);
    }

    /// Get the offsets as a slice.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Consume into the underlying vector of offsets.
    #[inline]
    #[must_use]
    pub fn into_vec(self) -> Vec<usize> {
        self.0
    }

    /// The index ranges covered by each match, given the length of the
    /// pattern that was searched for.
    #[inline]
    pub fn ranges(&self, pattern_len: usize) -> impl Iterator<Item = Range<usize>> + '_ {
        self.0.iter().map(move |&start| start..start + pattern_len)
    }
}

impl Deref for Matches {
    type Target = [usize];

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Matches> for Vec<usize> {
    #[inline]
    fn from(matches: Matches) -> Self {
        matches.0
    }
}

impl IntoIterator for Matches {
    type Item = usize;
    type IntoIter = std::vec::IntoIter<usize>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Matches {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<const N: usize> PartialEq<[usize; N]> for Matches {
    #[inline]
    fn eq(&self, other: &[usize; N]) -> bool {
        self.0.as_slice() == other
    }
}

impl PartialEq<Vec<usize>> for Matches {
    #[inline]
    fn eq(&self, other: &Vec<usize>) -> bool {
        &self.0 == other
    }
}

impl PartialEq<[usize]> for Matches {
    #[inline]
    fn eq(&self, other: &[usize]) -> bool {
        self.0.as_slice() == other
    }
}

/// Comma-separated offsets, e.g. `0,1,2`. No matches displays as an empty
/// string.
impl fmt::Display for Matches {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buff = itoa::Buffer::new();
        let mut offsets = self.0.iter();

        if let Some(&first) = offsets.next() {
            f.write_str(buff.format(first))?;
            for &offset in offsets {
                f.write_str(",")?;
                f.write_str(buff.format(offset))?;
            }
        }
        Ok(())
    }
}
