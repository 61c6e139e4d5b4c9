//! `sustain fetch` — run one aggregation and render the merged list.
//!
//! Drives the display state machine through its single transition:
//! `Loading` is printed before the fan-out starts, then the terminal
//! `Loaded` state is rendered. An empty load renders "no initiatives
//! found" whether the catalog is empty or every endpoint failed; the
//! aggregator's logs carry the per-branch failures.

use std::time::Duration;

use anyhow::Result;

use sustain_client::{Aggregator, FetchState};
use sustain_core::Initiative;

/// Run the `sustain fetch` command.
pub fn run(address: &str, timeout: Duration) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;
    let aggregator = Aggregator::new(address).with_timeout(timeout);

    render(&FetchState::Loading);
    let state = runtime.block_on(aggregator.run());
    render(&state);

    Ok(())
}

fn render(state: &FetchState) {
    match state {
        FetchState::Loading => println!("Syncing with core systems..."),
        FetchState::Loaded(records) if records.is_empty() => {
            println!("No initiatives found. Ensure the daemon is online.");
        }
        FetchState::Loaded(records) => {
            for record in records {
                println!("{}", format_record(record));
            }
            println!("{} initiatives", records.len());
        }
    }
}

/// One line per record: status symbol (blank for unstyled statuses),
/// category tag, title, status label.
fn format_record(record: &Initiative) -> String {
    let symbol = record.status.symbol().unwrap_or(" ");
    format!(
        "{symbol} [{:<9}] {:<35} {}\n    {}",
        record.category.as_str(),
        record.title,
        record.status.label(),
        record.description,
    )
}
