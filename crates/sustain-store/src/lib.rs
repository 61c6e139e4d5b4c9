//! sustain-store — embedded record store for Sustain initiatives.
//!
//! Backed by [redb](https://docs.rs/redb), provides persistent and
//! in-memory storage for initiative records.
//!
//! # Architecture
//!
//! Records are JSON-serialized into redb's `&[u8]` value column under
//! composite `{CATEGORY}:{id}` keys, so a per-category listing is a
//! single prefix scan. redb iterates keys lexicographically, which gives
//! every listing a deterministic ascending-key order.
//!
//! The `Store` is `Clone + Send + Sync` (backed by `Arc<Database>`) and
//! can be shared across async tasks.

pub mod error;
pub mod seed;
pub mod store;
pub mod tables;

pub use error::{StoreError, StoreResult};
pub use store::Store;
