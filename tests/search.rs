use pattern_search::{prelude::*, search::*};

#[test]
fn textbook_tables() {
    let table = FailureTable::new(b"ababaca", &Exact);
    assert_eq!(table.as_slice(), &[0, 0, 1, 2, 3, 0, 1]);

    let table = LastOccurrenceTable::new(b"abcab");
    assert_eq!(table.get(&b'a'), Some(3));
    assert_eq!(table.get(&b'b'), Some(4));
    assert_eq!(table.get(&b'c'), Some(2));
}

#[test]
fn every_matcher() {
    let text = "she sells sea shells by the sea shore".as_bytes();
    let expected: [usize; 2] = [0, 14];

    assert_eq!(brute_force(b"she", text, &Exact).unwrap(), expected);
    assert_eq!(kmp(b"she", text, &Exact).unwrap(), expected);
    assert_eq!(boyer_moore(b"she", text, &Exact).unwrap(), expected);
    assert_eq!(boyer_moore_galil(b"she", text, &Exact).unwrap(), expected);
}

#[test]
fn overlapping_and_boundaries() {
    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.find_all(b"aa", b"aaaa", &Exact).unwrap(), [0, 1, 2]);
        assert_eq!(algorithm.find_all(b"same", b"same", &Exact).unwrap(), [0]);
        assert!(algorithm.find_all(b"longer", b"long", &Exact).unwrap().is_empty());
        assert!(algorithm.find_all(b"zzz", b"abcabc", &Exact).unwrap().is_empty());
    }
}

#[test]
fn case_insensitive_everywhere() {
    for algorithm in Algorithm::ALL {
        let matches = b"xxabcxx"
            .find_all_matches_with(b"ABC", algorithm, &AsciiCaseInsensitive)
            .unwrap();
        assert_eq!(matches, [2]);
    }
}

#[test]
fn unicode_symbols() {
    let text: Vec<char> = "Καλημέρα κόσμε, ΚΑΛΗΜΈΡΑ".chars().collect();
    let pattern: Vec<char> = "καλημέρα".chars().collect();

    for algorithm in Algorithm::ALL {
        assert_eq!(algorithm.find_all(&pattern, &text, &Exact).unwrap(), []);
        assert_eq!(
            algorithm.find_all(&pattern, &text, &CaseInsensitive).unwrap(),
            [0, 16]
        );
    }
}

#[test]
fn invalid_arguments() {
    for algorithm in Algorithm::ALL {
        assert_eq!(
            algorithm.find_all(b"", b"text", &Exact),
            Err(InvalidArgument::EmptyPattern)
        );

        let request = SearchRequest::<u8, Exact>::new();
        assert_eq!(request.run(algorithm), Err(InvalidArgument::MissingPattern));
        assert_eq!(
            request.pattern(b"p").run(algorithm),
            Err(InvalidArgument::MissingText)
        );
        assert_eq!(
            request.pattern(b"p").text(b"text").run(algorithm),
            Err(InvalidArgument::MissingComparator)
        );
        assert_eq!(
            request.pattern(b"").text(b"text").comparator(&Exact).run(algorithm),
            Err(InvalidArgument::EmptyPattern)
        );
    }
}

#[test]
fn periodic_text_is_linear_for_galil() {
    let text = vec![b'a'; 10_000];
    let kmp_matches = kmp(b"aaaaa", &text, &Exact).unwrap();
    let galil_matches = boyer_moore_galil(b"aaaaa", &text, &Exact).unwrap();

    assert_eq!(kmp_matches, galil_matches);
    assert_eq!(galil_matches.len(), 9_996);
}

#[test]
fn display_offsets() {
    let matches = b"banana".find_all_matches(b"an", Algorithm::default()).unwrap();
    assert_eq!(matches.to_string(), "1,3");
    assert_eq!(Vec::from(matches), vec![1, 3]);
}
