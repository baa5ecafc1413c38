//! Incremental reconstruction of structured output from live, chunked
//! generation streams.
//!
//! Token-by-token generators (LLM completion APIs and the like) deliver text
//! in arbitrarily sized fragments, and concurrent generation branches deliver
//! them out of order across logical channels. This crate turns those
//! fragments back into usable output *before* the stream finishes, without
//! re-parsing from the start on every chunk:
//!
//! - [`RowTransducer`] extracts tabular (CSV-style) data from a JSON object
//!   that is still being produced, streaming each field value the moment its
//!   characters arrive.
//! - [`Aggregator`] collects tagged fragments from any number of logical
//!   sources and reconstructs a deterministic, per-source-ordered text
//!   stream.
//!
//! The two components are independent and composable; both are driven by
//! plain method calls from a single logical consumer and never block.
//!
//! # Examples
//!
//! ```rust
//! use rowmodem::{RowTransducer, TransducerOptions};
//!
//! let mut rows = RowTransducer::new(TransducerOptions::default());
//! let mut csv = String::new();
//! for chunk in [r#"{"rows":[{"name":"Jo"#, r#"hn","age":"30"}]}"#] {
//!     csv.push_str(&rows.feed(chunk));
//! }
//! assert_eq!(csv, "John,30\n");
//! ```
//!
//! ```rust
//! use rowmodem::{Aggregator, Event};
//!
//! let mut merged = Aggregator::new();
//! merged.add_event(Event::from(("b", "2")));
//! merged.add_event(Event::from(("a", "1")));
//! merged.add_event(Event::from(("a", "1b")));
//! assert_eq!(merged.text(), "11b\n2\n");
//! ```

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod aggregator;
mod options;
mod transducer;

pub mod chunk_utils;

#[cfg(test)]
mod tests;

pub use aggregator::{Aggregator, Event};
pub use options::TransducerOptions;
pub use transducer::RowTransducer;
