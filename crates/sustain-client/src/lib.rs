//! sustain-client — the aggregating client for the Sustain API.
//!
//! Fans out one GET per category to all six endpoints concurrently,
//! waits for every branch to settle, and merges the results into a
//! single ordered list. A failed branch is substituted with an empty
//! list so one dead category never blocks the other five; if every
//! branch fails the merged list is simply empty.

pub mod aggregator;
pub mod fetch;

pub use aggregator::{Aggregator, FetchState};
pub use fetch::{FetchError, fetch_category};
