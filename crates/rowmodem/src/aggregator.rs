//! Reassembly of a deterministic text stream from out-of-order fragments.
//!
//! Parallel generation branches produce text concurrently, so their
//! fragments reach the consumer in an arbitrary interleaving. The
//! [`Aggregator`] buffers each fragment under its source tag and, on demand,
//! renders every source's fragments in arrival order, with the sources
//! themselves in tag order. That gives a stable rendering order for
//! concurrently streamed channels rather than a chronological interleave.

use alloc::{
    collections::BTreeMap,
    string::{String, ToString},
    vec::Vec,
};

/// A tagged fragment of text produced by one logical generation branch.
///
/// Events are immutable once created. Any `source` tag and any `data`
/// string are valid, including the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Event {
    /// Identifier of the logical channel this fragment belongs to.
    pub source: String,
    /// The fragment text.
    pub data: String,
}

impl From<(&str, &str)> for Event {
    fn from((source, data): (&str, &str)) -> Self {
        Self {
            source: source.to_string(),
            data: data.to_string(),
        }
    }
}

/// Collects tagged fragments arriving in any interleaving across N logical
/// sources and reconstructs a deterministic, per-source-ordered text stream.
///
/// One aggregator instance serves one multiplexed stream; it grows
/// monotonically (events are never removed) until the stream ends and the
/// final text is read. Fragments within one source are never reordered;
/// cross-source order is purely the ascending sort of source tags,
/// independent of arrival time.
///
/// # Examples
///
/// ```rust
/// use rowmodem::{Aggregator, Event};
///
/// let mut merged = Aggregator::new();
/// merged.add_event(Event::from(("branch-b", "second")));
/// merged.add_event(Event::from(("branch-a", "first")));
/// assert_eq!(merged.text(), "first\nsecond\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    // Tag → fragments in arrival order. BTreeMap iteration *is* the
    // ascending string sort the rendering contract asks for.
    queues: BTreeMap<String, Vec<String>>,
}

impl Aggregator {
    /// Creates an empty aggregator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `event.data` to the queue for `event.source`, creating the
    /// queue if this is the first fragment from that source.
    pub fn add_event(&mut self, event: Event) {
        self.queues.entry(event.source).or_default().push(event.data);
    }

    /// Renders the deterministic reconstruction of everything received so
    /// far: for each known source in ascending tag order, the concatenation
    /// of its fragments in arrival order, followed by a newline.
    ///
    /// Does not mutate the queues, so it may be called repeatedly at any
    /// point in the stream (e.g. to render partial progress) and is
    /// idempotent as long as no `add_event` call intervenes. An empty
    /// aggregator renders as the empty string.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        for fragments in self.queues.values() {
            for fragment in fragments {
                out.push_str(fragment);
            }
            out.push('\n');
        }
        out
    }

    /// Iterates over the known source tags in ascending order.
    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.queues.keys().map(String::as_str)
    }

    /// Returns `true` if no event has been received yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }
}
