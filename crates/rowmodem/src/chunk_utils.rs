//! Helpers for slicing a payload into UTF-8-safe chunks.
//!
//! Tests, benches, and the fuzz harness all need to replay a payload as if a
//! network delivered it in pieces; these helpers produce the pieces without
//! ever splitting a multi-byte code point.

use alloc::vec::Vec;

/// Split `payload` into at most `parts` chunks of roughly equal byte length,
/// never breaking a UTF-8 code point.
///
/// # Panics
///
/// Panics if `parts` is zero.
#[must_use]
pub fn chunks_of(payload: &str, parts: usize) -> Vec<&str> {
    assert!(parts > 0);
    let stride = payload.len().div_ceil(parts).max(1);
    let mut chunks = Vec::with_capacity(parts);
    let mut rest = payload;
    while !rest.is_empty() {
        let mut cut = stride.min(rest.len());
        while !rest.is_char_boundary(cut) {
            cut += 1;
        }
        let (head, tail) = rest.split_at(cut);
        chunks.push(head);
        rest = tail;
    }
    chunks
}

/// Split `payload` into one chunk per character, the worst case for any
/// incremental consumer.
#[must_use]
pub fn char_chunks(payload: &str) -> Vec<&str> {
    payload
        .char_indices()
        .map(|(i, c)| &payload[i..i + c.len_utf8()])
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{char_chunks, chunks_of};

    #[test]
    fn chunks_reassemble_and_respect_boundaries() {
        let payload = "São Paulo, Zoë, 東京";
        for parts in 1..=payload.len() + 1 {
            let chunks = chunks_of(payload, parts);
            assert!(chunks.len() <= parts);
            assert_eq!(chunks.concat(), payload);
        }
    }

    #[test]
    fn char_chunks_are_single_characters() {
        let chunks = char_chunks("a東b");
        assert_eq!(chunks, ["a", "東", "b"]);
    }
}
