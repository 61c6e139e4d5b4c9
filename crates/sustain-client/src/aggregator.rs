//! Fan-out/fan-in aggregation over the six category endpoints.

use std::time::Duration;

use futures::future::join_all;
use tracing::warn;

use sustain_core::{Category, Initiative};

use crate::fetch::fetch_category;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Display state for one aggregation run.
///
/// Assigned exactly once per run: `Loading` until every branch has
/// settled, then `Loaded` with the merged list. `Loaded` with an empty
/// list is a valid terminal state ("no initiatives found") and is
/// deliberately indistinguishable from all branches having failed;
/// per-branch failures are logged instead.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    Loading,
    Loaded(Vec<Initiative>),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The merged records, once loaded.
    pub fn records(&self) -> Option<&[Initiative]> {
        match self {
            FetchState::Loading => None,
            FetchState::Loaded(records) => Some(records),
        }
    }
}

/// Aggregating client for one API host.
#[derive(Debug, Clone)]
pub struct Aggregator {
    address: String,
    timeout: Duration,
}

impl Aggregator {
    /// Create an aggregator for `address` (host:port) with the default
    /// per-branch timeout.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the per-branch timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Fetch all six categories concurrently and merge the results.
    ///
    /// Every branch runs to completion (no first-completion
    /// short-circuit); a failed branch contributes an empty list. The
    /// merge concatenates in `Category::ALL` order with no dedup and no
    /// re-sort. Total failure yields an empty vec, never an error.
    pub async fn fetch_all(&self) -> Vec<Initiative> {
        let branches = Category::ALL.map(|category| self.fetch_branch(category));
        let settled = join_all(branches).await;
        merge(settled)
    }

    /// Run one aggregation to its terminal display state.
    pub async fn run(&self) -> FetchState {
        FetchState::Loaded(self.fetch_all().await)
    }

    async fn fetch_branch(&self, category: Category) -> Vec<Initiative> {
        match fetch_category(&self.address, category, self.timeout).await {
            Ok(records) => records,
            Err(e) => {
                warn!(
                    category = category.as_str(),
                    error = %e,
                    "category fetch failed, substituting empty list"
                );
                Vec::new()
            }
        }
    }
}

/// Concatenate per-category results in branch order.
fn merge(parts: impl IntoIterator<Item = Vec<Initiative>>) -> Vec<Initiative> {
    parts.into_iter().flatten().collect()
}
