//! sustain-core — shared domain types for the Sustain initiative catalog.
//!
//! An [`Initiative`] is the only domain entity: a single sustainability
//! project record, partitioned into one of six fixed [`Category`] values
//! that determines which API endpoint serves it.

pub mod types;

pub use types::{Category, Initiative, Status};
