use alloc::string::String;

/// Configuration options for the row transducer.
///
/// # Examples
///
/// ```rust
/// use rowmodem::{RowTransducer, TransducerOptions};
///
/// let mut rows = RowTransducer::new(TransducerOptions {
///     rows_key: "records".into(),
/// });
/// assert_eq!(rows.feed(r#"{"records":[{"a":"x"}]}"#), "x\n");
/// ```
#[derive(Debug, Clone)]
pub struct TransducerOptions {
    /// Name of the object key whose array value holds the row objects.
    ///
    /// The transducer switches on when it sees the exact literal
    /// `"<rows_key>":[` in the input stream; everything before it is
    /// consumed silently.
    ///
    /// # Default
    ///
    /// `"rows"`
    pub rows_key: String,
}

impl Default for TransducerOptions {
    fn default() -> Self {
        Self {
            rows_key: String::from("rows"),
        }
    }
}
