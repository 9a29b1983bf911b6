use std::env;
use pattern_search::prelude::*;

// Search a text for every occurrence of a pattern and print the offsets.
//
// Usage: demo_search <algorithm> <pattern> <text> [--ignore-case]

fn main() {
    let args: Vec<String> = env::args().collect();

    let (algorithm, pattern, text) = if args.len() >= 4 {
        (args[1].as_str(), args[2].as_str(), args[3].as_str())
    } else {
        println!(
            "Usage:\n\t{} <algorithm> <pattern> <text> [--ignore-case]\n\nSetting to: galil ana banana",
            &args[0]
        );
        ("galil", "ana", "banana")
    };
    let ignore_case = args.iter().any(|a| a == "--ignore-case");

    let algorithm: Algorithm = algorithm.parse().unwrap_or_die("Bad algorithm name!");
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();

    let matches = if ignore_case {
        text.find_all_matches_with(&pattern, algorithm, &CaseInsensitive)
    } else {
        text.find_all_matches(&pattern, algorithm)
    }
    .unwrap_or_fail();

    println!("{algorithm}: {matches}");
}
