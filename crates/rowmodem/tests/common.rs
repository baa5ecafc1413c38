#![allow(missing_docs)]
#![expect(clippy::needless_raw_string_hashes)]

pub const ORIGINAL: &str = r#"
{
    "model": "table-writer-1",
    "status": "streaming",
    "rows": [
        {
            "city": "Lisbon",
            "country": "Portugal",
            "population": "545923"
        },
        {
            "city": "Osaka",
            "country": "Japan",
            "population": "2691000"
        },
        {
            "city": "São Paulo",
            "country": "Brazil",
            "population": "12252000"
        }
    ]
}"#;

// This stream simulates a structured generation response carrying a row
// array. It intentionally cuts chunks on transition seams to exercise the
// transducer's held state.
#[rustfmt::skip]
pub const STREAM: [&str; 14] = [
    r#"{"model":"table-writer-1","sta"#,   // preamble, cut mid-key
    r#"tus":"streaming","ro"#,             // cuts the opening literal in half
    r#"ws":["#,                            // finishes the literal
    r#"{"ci"#,                             // first row, cut mid-key
    r#"ty":"Lis"#,                         // cut mid-value
    r#"bon","country":"Portugal","#,       // value end then key boundary
    r#""population":"545923"}"#,           // closes the first row
    r#",{"city":"Osaka","#,                // row boundary inside one chunk
    r#""country":"Japan","population":"#,  // cut between ':' and the value quote
    r#""2691000"},"#,                      // closes the second row
    r#"{"city":"São"#,                     // multi-byte character in a value
    r#" Paulo","country":"Brazil","#,
    r#""population":"12252000"}"#,
    r#"]}"#,                               // closes the array and the document
];

pub const EXPECTED_CSV: &str = "Lisbon,Portugal,545923\nOsaka,Japan,2691000\nSão Paulo,Brazil,12252000\n";

#[test]
fn assert_stream_example() {
    let streamed = STREAM.join("");

    let value: serde_json::Value = serde_json::from_str(ORIGINAL).unwrap();
    let original = serde_json::to_string(&value).unwrap();

    assert_eq!(streamed, original);
}
