#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use rowmodem::{Aggregator, Event, RowTransducer};

#[derive(Debug, Arbitrary)]
struct FuzzCase {
    split_seed: u64,
    text: String,
}

fn check(case: &FuzzCase) {
    if case.text.is_empty() {
        return;
    }

    // Differential: the chunked run must emit exactly what the whole-input
    // run emits, for any input whatsoever.
    let expected = RowTransducer::default().feed(&case.text);

    let mut chunked = RowTransducer::default();
    let mut out = String::new();
    for chunk in split_into_safe_chunks(&case.text, case.split_seed) {
        out.push_str(&chunked.feed(chunk));
    }
    assert_eq!(out, expected);

    // Aggregator reads must be stable between events, whatever the data.
    let mut merged = Aggregator::new();
    let chunks = split_into_safe_chunks(&case.text, case.split_seed.rotate_left(17));
    for (i, chunk) in chunks.iter().enumerate() {
        merged.add_event(Event {
            source: format!("s{}", i % 5),
            data: (*chunk).to_owned(),
        });
        assert_eq!(merged.text(), merged.text());
    }
}

fuzz_target!(|case: FuzzCase| check(&case));

/// Split a UTF-8 `&str` into boundary-safe chunks using a deterministic
/// seed to derive split points.
///
/// * Each chunk is at least one byte.
/// * Every slice ends on a valid UTF-8 boundary, so it can’t panic.
fn split_into_safe_chunks(serialized: &str, split_seed: u64) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0;
    let len = serialized.len();

    while start < len {
        let remaining = len - start;

        // Derive a candidate size from the fixed seed.
        let mut size = (split_seed as usize % remaining) + 1;

        // Bump `size` forward until it lands on a char boundary
        // (or hits the end of the string, which is always a boundary).
        while start + size < len && !serialized.is_char_boundary(start + size) {
            size += 1;
        }

        chunks.push(&serialized[start..start + size]);
        start += size;
    }

    chunks
}
