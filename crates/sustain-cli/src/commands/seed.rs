//! `sustain seed` — populate the record store with the seed catalog.

use std::path::Path;

use anyhow::Result;
use tracing::info;

use sustain_store::Store;

/// Run the `sustain seed` command.
pub fn run(data_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(data_dir)?;
    let db_path = data_dir.join("sustain.redb");

    let store = Store::open(&db_path)?;
    let written = sustain_store::seed::seed(&store)?;

    info!(records = written, path = %db_path.display(), "seeding finished");
    println!("✓ Seeded {written} initiatives into {}", db_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sustain_core::Category;

    #[test]
    fn seed_creates_store_and_writes_catalog() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();

        let store = Store::open(&dir.path().join("sustain.redb")).unwrap();
        assert_eq!(
            store.count().unwrap() as usize,
            sustain_store::seed::catalog().len()
        );
        for category in Category::ALL {
            assert!(!store.list_by_category(category).unwrap().is_empty());
        }
    }

    #[test]
    fn seed_twice_does_not_duplicate() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
        run(dir.path()).unwrap();

        let store = Store::open(&dir.path().join("sustain.redb")).unwrap();
        assert_eq!(
            store.count().unwrap() as usize,
            sustain_store::seed::catalog().len()
        );
    }
}
