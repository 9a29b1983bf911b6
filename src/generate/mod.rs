use rand_xoshiro::{
    Xoshiro256PlusPlus,
    rand_core::{RngCore, SeedableRng},
};

/// Generates a text of `length` symbols drawn uniformly from `alphabet`, using
/// a seeded generator so the same `seed` always gives the same text. Returns an
/// empty text if `alphabet` is empty.
#[must_use]
pub fn rand_text<T: Clone>(alphabet: &[T], length: usize, seed: u64) -> Vec<T> {
    if alphabet.is_empty() {
        return Vec::new();
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..length)
        .map(|_| alphabet[rng.next_u32() as usize % alphabet.len()].clone())
        .collect()
}

/// Picks a random window of `length` symbols out of `text`, which is therefore
/// guaranteed to occur in it. Returns [`None`] if `length` is zero or longer
/// than the text.
#[must_use]
pub fn rand_pattern_in<T: Clone>(text: &[T], length: usize, seed: u64) -> Option<Vec<T>> {
    if length == 0 || length > text.len() {
        return None;
    }

    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let starts = text.len() - length + 1;
    let start = usize::try_from(rng.next_u64() % starts as u64).ok()?;
    Some(text[start..start + length].to_vec())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::search::ExactSearch;

    #[test]
    fn rand_test() {
        const LEN: usize = 10_000;

        let text = rand_text(b"ACGT", LEN, 42);
        assert_eq!(LEN, text.len());

        let (a, c, g, t) = text.iter().fold((0, 0, 0, 0), |(a, c, g, t), &b| match b {
            b'A' => (a + 1, c, g, t),
            b'C' => (a, c + 1, g, t),
            b'G' => (a, c, g + 1, t),
            b'T' => (a, c, g, t + 1),
            _ => (a, c, g, t),
        });

        assert!(a > 0);
        assert!(c > 0);
        assert!(g > 0);
        assert!(t > 0);
        assert_eq!(text, rand_text(b"ACGT", LEN, 42));
    }

    #[test]
    fn empty_alphabet() {
        assert!(rand_text::<u8>(&[], 10, 0).is_empty());
    }

    #[test]
    fn pattern_occurs() {
        let text = rand_text(&['x', 'y', 'z'], 500, 7);
        for seed in 0..20 {
            let pattern = rand_pattern_in(&text, 12, seed).unwrap();
            assert_eq!(pattern.len(), 12);
            assert!(text.contains_match(&pattern));
        }

        assert_eq!(rand_pattern_in(&text, 0, 1), None);
        assert_eq!(rand_pattern_in(&text, 501, 1), None);
        assert_eq!(rand_pattern_in(&text, 500, 1), Some(text.clone()));
    }
}
