//! Renders a live CSV table from an in-flight structured generation stream,
//! then merges the answers of three parallel generation branches into a
//! stable display order.
//!
//! The assistant has been prompted with a schema that yields a JSON object
//! whose `rows` array carries one flat object per table row (abridged):
//!
//! ```text
//! {
//!   "moderation": { "decision": "allow" | "block" },
//!   "rows": [ { "ticker": string, "price": string }, ... ]
//! }
//! ```
//!
//! The example streams a *single* JSON document but feeds it to the
//! transducer in small, irregular chunks to mirror how completion APIs
//! deliver partial tokens. Each field value is printed the moment its
//! characters arrive, so the table fills in cell by cell long before the
//! document closes.
//!
//! Run with
//!
//! ```bash
//! cargo run -p rowmodem --example live_table
//! ```

#![allow(clippy::needless_raw_string_hashes)]

use rowmodem::{Aggregator, Event, RowTransducer, TransducerOptions};

fn main() {
    // A toy assistant response streamed in nine tiny chunks. In real life
    // this would come from the network.
    let simulated_stream: [&str; 9] = [
        // 0 – preamble: consumed silently by the transducer
        r#"{"moderation":{"decision":"allow"},"#,
        // 1 – the opening literal starts...
        r#""ro"#,
        // 2 – ...and finishes; the first row begins mid-value
        r#"ws":[{"ticker":"ACME","price":"12"#,
        // 3 – row boundary crossed inside one chunk
        r#"3.45"},{"ticker":"GLOBEX","#,
        // 4 – second row completes
        r#""price":"67.89"}"#,
        // 5 – third row, cut right after the value's opening quote
        r#",{"ticker":"INITECH","price":""#,
        // 6
        r#"1.02"}"#,
        // 7
        r#"]"#,
        // 8
        r#"}"#,
    ];

    let mut table = RowTransducer::new(TransducerOptions::default());
    let mut csv = String::new();

    for chunk in simulated_stream {
        let ready = table.feed(chunk);
        // Stream each cell to the terminal as soon as it is derivable.
        print!("{ready}");
        csv.push_str(&ready);
    }

    // Three branches answered concurrently; their fragments arrived out of
    // order. The merged rendering is per-branch ordered and stable.
    let arrivals = [
        ("branch-2", "Consider caching"),
        ("branch-1", "Use a"),
        ("branch-1", " streaming parser"),
        ("branch-3", "Ship it"),
        ("branch-2", " aggressively"),
    ];

    let mut merged = Aggregator::new();
    for (source, data) in arrivals {
        merged.add_event(Event::from((source, data)));
    }
    println!("{}", merged.text());

    // Verify that the streamed output stays stable. Run `cargo insta review`
    // after the first execution to approve any change.
    insta::assert_snapshot!(csv, @r#"
    ACME,123.45
    GLOBEX,67.89
    INITECH,1.02
    "#);
    insta::assert_snapshot!(merged.text(), @r#"
    Use a streaming parser
    Consider caching aggressively
    Ship it
    "#);
}
