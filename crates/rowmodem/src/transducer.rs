//! The incremental JSON-to-CSV transducer implementation.
//!
//! This module provides the [`RowTransducer`], a restartable character-level
//! automaton that extracts row/column data from a JSON object that is still
//! being produced and emits CSV text as soon as each field value is known.
//!
//! The assumed input shape is a JSON object containing somewhere a key
//! `rows` (configurable, see [`TransducerOptions`]) whose value is an array
//! of flat objects whose values are all JSON strings:
//!
//! ```json
//! {"rows":[{"name":"John","age":"30"},{"name":"Jane","age":"28"}]}
//! ```
//!
//! There is no error state. Input that does not fit the assumed shape
//! (unbalanced braces, numeric or nested values) is either absorbed silently
//! or produces best-effort output; the upstream document is incomplete by
//! construction for most of its lifetime, so the transducer never rejects
//! mid-stream. Callers wanting full fidelity re-validate the assembled
//! document with a real JSON parser once the stream closes.
//!
//! # Examples
//!
//! ```rust
//! use rowmodem::RowTransducer;
//!
//! let mut rows = RowTransducer::default();
//! assert_eq!(rows.feed(r#"{"rows":[{"a":"x","b":"#), "x,");
//! assert_eq!(rows.feed(r#""y"}]}"#), "y\n");
//! ```

use alloc::{format, string::String};

use crate::options::TransducerOptions;

/// States of the row-extraction automaton.
///
/// Exactly one state is active per transducer; it is mutated only by the
/// per-character step function.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// Consuming the preamble, watching for the array-opening literal.
    SearchingForRowsKey,
    /// Between rows: waiting for the `{` that opens the next row object.
    FindListStart,
    /// Inside a row object: waiting for the first `"` of a property key.
    FindRowStart,
    /// Inside a property key: waiting for the unescaped closing `"`.
    FindPropertyKeyEnd,
    /// After a key: waiting for the `"` that opens the property value.
    FindPropertyValueStart,
    /// Inside a property value: every character streams to the output.
    InsidePropertyValue,
    /// After a value: `,` continues the row, `}` closes it.
    FindPropertyValueEnd,
    /// After a `,` within a row: waiting for the next key's opening `"`.
    FindPropertyKeyStart,
}

/// The incremental JSON-to-CSV transducer.
///
/// A `RowTransducer` is created once per logical stream, fed consecutive
/// chunks of that stream through [`feed`](RowTransducer::feed), and dropped
/// when the stream ends. It is not reusable across unrelated streams; each
/// independent stream gets its own instance.
///
/// Because only the in-value state appends to the output, field contents
/// reach the caller character-by-character as they are produced: there is no
/// waiting for the closing quote of a value, let alone a row or the array.
/// Separators (`,` and `\n`) are emitted exactly once at value and row
/// boundaries.
///
/// # Examples
///
/// ```rust
/// use rowmodem::RowTransducer;
///
/// let mut rows = RowTransducer::default();
/// let mut csv = String::new();
/// for chunk in [
///     r#"{"model":"m1","rows":[{"name":"John "#,
///     r#"Doe","age":"30"},{"name":"Jane Smith","#,
///     r#""age":"28"}]}"#,
/// ] {
///     csv.push_str(&rows.feed(chunk));
/// }
/// assert_eq!(csv, "John Doe,30\nJane Smith,28\n");
/// ```
#[derive(Debug)]
pub struct RowTransducer {
    state: ScanState,

    /// Recently seen characters, kept only to spot multi-character matches:
    /// the array-opening literal and escaped quotes inside keys. Cleared on
    /// every state transition.
    scratch: String,

    /// CSV text accumulated since the last `feed` call drained it.
    output: String,

    /// The literal `"<rows_key>":[` that switches the automaton on.
    needle: String,
}

impl Default for RowTransducer {
    fn default() -> Self {
        Self::new(TransducerOptions::default())
    }
}

impl RowTransducer {
    /// Creates a new `RowTransducer` with the given options.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rowmodem::{RowTransducer, TransducerOptions};
    ///
    /// let rows = RowTransducer::new(TransducerOptions::default());
    /// ```
    #[must_use]
    pub fn new(options: TransducerOptions) -> Self {
        Self {
            state: ScanState::SearchingForRowsKey,
            scratch: String::new(),
            output: String::new(),
            needle: format!("\"{}\":[", options.rows_key),
        }
    }

    /// Feeds the next chunk of the stream and returns the CSV text newly
    /// derivable from it (possibly empty).
    ///
    /// May be called any number of times with consecutive fragments of the
    /// same logical character stream, in order. All automaton state lives on
    /// the instance, so a field value (or the array-opening literal itself)
    /// may be split across calls at any position that is a character
    /// boundary.
    ///
    /// The returned text is drained: each piece of output is handed to the
    /// caller exactly once.
    pub fn feed(&mut self, chunk: &str) -> String {
        for c in chunk.chars() {
            self.step(c);
        }
        core::mem::take(&mut self.output)
    }

    /// Advances the automaton by one character.
    fn step(&mut self, c: char) {
        self.scratch.push(c);

        match self.state {
            ScanState::SearchingForRowsKey => {
                if self.scratch.ends_with(self.needle.as_str()) {
                    self.enter(ScanState::FindListStart);
                }
            }
            ScanState::FindListStart => {
                if c == '{' {
                    self.enter(ScanState::FindRowStart);
                }
            }
            ScanState::FindRowStart => match c {
                '"' => self.enter(ScanState::FindPropertyKeyEnd),
                '}' => self.enter(ScanState::FindListStart),
                _ => {}
            },
            ScanState::FindPropertyKeyEnd => {
                // The scratch buffer ends with the character we just pushed,
                // so an escaped quote shows up as the two-character suffix
                // `\"`. Escapes are honored here and only here; inside values
                // a quote always closes (see the module docs).
                if c == '"' && !self.scratch.ends_with("\\\"") {
                    self.enter(ScanState::FindPropertyValueStart);
                }
            }
            ScanState::FindPropertyValueStart => match c {
                '"' => self.enter(ScanState::InsidePropertyValue),
                // Row closed without a string value (e.g. a trailing numeric
                // field): terminate the line. No transition happens here.
                '}' => self.output.push('\n'),
                _ => {}
            },
            ScanState::InsidePropertyValue => {
                if c == '"' {
                    self.enter(ScanState::FindPropertyValueEnd);
                } else {
                    self.output.push(c);
                }
            }
            ScanState::FindPropertyValueEnd => match c {
                ',' => {
                    self.output.push(',');
                    self.enter(ScanState::FindPropertyKeyStart);
                }
                '}' => {
                    self.output.push('\n');
                    self.enter(ScanState::FindListStart);
                }
                _ => {}
            },
            ScanState::FindPropertyKeyStart => {
                if c == '"' {
                    self.enter(ScanState::FindPropertyKeyEnd);
                }
            }
        }
    }

    /// Transitions to `next`, clearing the scratch buffer.
    fn enter(&mut self, next: ScanState) {
        self.state = next;
        self.scratch.clear();
    }
}
