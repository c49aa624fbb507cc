#![no_main]

use libfuzzer_sys::fuzz_target;

use sorex_fuzzy::{edit_distance, match_with, automaton_of_list};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    pattern: Vec<u8>,
    query: Vec<u8>,
    max_edits: u8,
}

fuzz_target!(|input: Input| {
    if input.pattern.len() > 64 || input.query.len() > 64 {
        return;
    }
    let limit = (input.max_edits % 4) as usize;

    let dfa = automaton_of_list(limit, &input.pattern);
    let accepted = dfa.match_with(&input.query.clone());
    let distance = edit_distance(&input.pattern, &input.query);

    assert_eq!(
        accepted,
        distance <= limit,
        "automaton/edit_distance disagreement: pattern={:?} query={:?} limit={} distance={}",
        input.pattern, input.query, limit, distance
    );

    let from_str = if let (Ok(p), Ok(q)) = (std::str::from_utf8(&input.pattern), std::str::from_utf8(&input.query)) {
        Some(match_with(&automaton_of_list(limit, p.as_bytes()), q))
    } else {
        None
    };
    if let Some(m) = from_str {
        assert_eq!(m, accepted);
    }
});
