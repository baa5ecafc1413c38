use alloc::string::String;

use rstest::rstest;

use crate::{RowTransducer, TransducerOptions, chunk_utils};

fn transduce(payload: &str) -> String {
    let mut rows = RowTransducer::default();
    rows.feed(payload)
}

#[test]
fn value_pass_through() {
    assert_eq!(transduce(r#"{"rows":[{"a":"x","b":"y"}]}"#), "x,y\n");
}

#[test]
fn multi_row_document() {
    let payload =
        r#"{"rows":[{"name":"John Doe","age":"30"},{"name":"Jane Smith","age":"28"}]}"#;
    assert_eq!(transduce(payload), "John Doe,30\nJane Smith,28\n");
}

#[test]
fn preamble_never_emitted() {
    // Everything before the opening literal is consumed silently, even
    // quoted strings and braces.
    let payload = r#"{"id":"m-1","meta":{"title":"Row listing"},"rows":[{"a":"x"}]}"#;
    assert_eq!(transduce(payload), "x\n");
}

#[test]
fn opening_literal_split_across_feeds() {
    let mut rows = RowTransducer::default();
    assert_eq!(rows.feed(r#"{"ro"#), "");
    assert_eq!(rows.feed(r#"ws":[{"a":"x"}]}"#), "x\n");
}

#[test]
fn empty_rows_array() {
    assert_eq!(transduce(r#"{"rows":[]}"#), "");
}

#[test]
fn empty_row_object_emits_nothing() {
    assert_eq!(transduce(r#"{"rows":[{}]}"#), "");
}

#[test]
fn empty_string_value() {
    assert_eq!(transduce(r#"{"rows":[{"a":""}]}"#), "\n");
}

#[test]
fn escaped_quote_in_key_does_not_close_it() {
    // The value after a key containing `\"` must still stream.
    assert_eq!(transduce(r#"{"rows":[{"a\"b":"v"}]}"#), "v\n");
}

#[test]
fn truncated_value_still_streams() {
    // The defining property: value contents reach the caller before the
    // closing quote ever arrives.
    let mut rows = RowTransducer::default();
    assert_eq!(rows.feed(r#"{"rows":[{"a":"par"#), "par");
    assert_eq!(rows.feed("tial"), "tial");
}

#[test]
fn unicode_values_stream_verbatim() {
    let payload = r#"{"rows":[{"name":"Zoë","city":"São Paulo"}]}"#;
    assert_eq!(transduce(payload), "Zoë,São Paulo\n");

    // Same payload, one character per feed call.
    let mut rows = RowTransducer::default();
    let mut out = String::new();
    for chunk in chunk_utils::char_chunks(payload) {
        out.push_str(&rows.feed(chunk));
    }
    assert_eq!(out, "Zoë,São Paulo\n");
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(7)]
#[case(64)]
fn chunking_is_transparent(#[case] parts: usize) {
    let payload =
        r#"{"rows":[{"name":"John Doe","age":"30"},{"name":"Jane Smith","age":"28"}]}"#;
    let mut rows = RowTransducer::default();
    let mut out = String::new();
    for chunk in chunk_utils::chunks_of(payload, parts) {
        out.push_str(&rows.feed(chunk));
    }
    assert_eq!(out, "John Doe,30\nJane Smith,28\n");
}

#[test]
fn custom_rows_key() {
    let mut rows = RowTransducer::new(TransducerOptions {
        rows_key: "records".into(),
    });
    assert_eq!(
        rows.feed(r#"{"records":[{"a":"x"},{"a":"y"}]}"#),
        "x\ny\n"
    );
}
