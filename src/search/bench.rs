use super::*;
use crate::compare::{AsciiCaseInsensitive, Exact};
use std::sync::LazyLock;
use test::Bencher;

extern crate test;

static PERIODIC: LazyLock<Vec<u8>> = LazyLock::new(|| vec![b'a'; 10_000]);

static PROSE: LazyLock<Vec<u8>> = LazyLock::new(|| {
    let mut s = b"the quick brown fox jumps over the lazy dog ".repeat(200);
    s.extend(b"needle in a haystack");
    s
});

mod periodic {
    use super::*;

    #[bench]
    fn brute_force(b: &mut Bencher) {
        b.iter(|| super::brute_force(b"aaaaa", &PERIODIC, &Exact));
    }

    #[bench]
    fn kmp(b: &mut Bencher) {
        b.iter(|| super::kmp(b"aaaaa", &PERIODIC, &Exact));
    }

    #[bench]
    fn boyer_moore(b: &mut Bencher) {
        b.iter(|| super::boyer_moore(b"aaaaa", &PERIODIC, &Exact));
    }

    #[bench]
    fn galil(b: &mut Bencher) {
        b.iter(|| super::boyer_moore_galil(b"aaaaa", &PERIODIC, &Exact));
    }
}

mod prose {
    use super::*;

    const NEEDLE: &[u8] = b"needle";

    #[bench]
    fn brute_force(b: &mut Bencher) {
        b.iter(|| super::brute_force(NEEDLE, &PROSE, &Exact));
    }

    #[bench]
    fn kmp(b: &mut Bencher) {
        b.iter(|| super::kmp(NEEDLE, &PROSE, &Exact));
    }

    #[bench]
    fn boyer_moore(b: &mut Bencher) {
        b.iter(|| super::boyer_moore(NEEDLE, &PROSE, &Exact));
    }

    #[bench]
    fn galil(b: &mut Bencher) {
        b.iter(|| super::boyer_moore_galil(NEEDLE, &PROSE, &Exact));
    }

    #[bench]
    fn galil_caseless(b: &mut Bencher) {
        b.iter(|| super::boyer_moore_galil(b"NEEDLE", &PROSE, &AsciiCaseInsensitive));
    }
}
