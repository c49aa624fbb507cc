#![no_main]

use libfuzzer_sys::fuzz_target;

use sorex_fuzzy::{edit_distance, ByteTrie};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    keys: Vec<Vec<u8>>,
    query: Vec<u8>,
    max_edits: u8,
}

fuzz_target!(|input: Input| {
    if input.keys.len() > 32 || input.query.len() > 32 {
        return;
    }
    let limit = (input.max_edits % 3) as usize;

    let trie = ByteTrie::of_list(
        input.keys.iter().cloned().map(|k| (k.clone(), k)),
    );

    let found: std::collections::BTreeSet<Vec<u8>> =
        trie.retrieve(limit, &input.query).map(|v| v).collect();

    for key in &input.keys {
        let within = edit_distance(key, &input.query) <= limit;
        assert_eq!(
            found.contains(key),
            within,
            "retrieve mismatch: key={key:?} query={:?} limit={limit}",
            input.query
        );
    }
});
