//! Seed catalog and seeding routine.
//!
//! The catalog is the fixed set of initiative records the public site
//! serves. Seeding is an upsert over stable, title-derived ids, so
//! re-running it rewrites the same keys instead of duplicating records.

use tracing::info;

use sustain_core::{Category, Initiative, Status};

use crate::error::StoreResult;
use crate::store::Store;

/// The full seed catalog, grouped by category.
pub fn catalog() -> Vec<Initiative> {
    vec![
        // Food
        Initiative::seeded(
            "Vertical Farming Initiative",
            "Sustainable urban vertical farming systems designed for high-density areas, reducing water use by 90%.",
            Category::Food,
            Status::Active,
        ),
        Initiative::seeded(
            "Algae-Based Nutrition",
            "Developing nutrient-dense food supplements from sustainable, carbon-sequestering algae cultures.",
            Category::Food,
            Status::Planning,
        ),
        // Water
        Initiative::seeded(
            "Atmospheric Water Generation",
            "Extracting clean, mineral-rich drinking water directly from air moisture using renewable energy.",
            Category::Water,
            Status::Active,
        ),
        Initiative::seeded(
            "Graphene Filtration",
            "Low-energy desalination and heavy metal purification using advanced graphene-oxide membranes.",
            Category::Water,
            Status::Research,
        ),
        // Shelter
        Initiative::seeded(
            "3D Printed Sustainable Housing",
            "Rapidly deployable, low-cost homes built from locally sourced soil and recycled polymers.",
            Category::Shelter,
            Status::Active,
        ),
        Initiative::seeded(
            "Modular Eco-Pods",
            "Self-sustaining living units with integrated solar glass, rainwater harvesting, and greywater recycling.",
            Category::Shelter,
            Status::Prototype,
        ),
        // Education
        Initiative::seeded(
            "Decentralized Learning Platform",
            "Blockchain-verified education modules providing critical skills to remote and underserved communities.",
            Category::Education,
            Status::Active,
        ),
        // Work
        Initiative::seeded(
            "Remote Workspace Network",
            "A global network of decentralized professional hubs designed for rural economic revitalization.",
            Category::Work,
            Status::Active,
        ),
        // Energy
        Initiative::seeded(
            "Thorium Salt Reactor R&D",
            "Researching next-generation clean nuclear energy solutions for safe, localized power grids.",
            Category::Energy,
            Status::Research,
        ),
        Initiative::seeded(
            "Solid-State Battery Tech",
            "High-density, cobalt-free energy storage for renewable microgrids and electric transport.",
            Category::Energy,
            Status::Planning,
        ),
    ]
}

/// Upsert the full catalog into the store. Returns the number of records
/// written.
pub fn seed(store: &Store) -> StoreResult<usize> {
    let records = catalog();
    for record in &records {
        store.put_initiative(record)?;
        info!(id = %record.id, title = %record.title, "seeded initiative");
    }
    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_category() {
        let records = catalog();
        for category in Category::ALL {
            assert!(
                records.iter().any(|r| r.category == category),
                "no seed record for {category:?}"
            );
        }
    }

    #[test]
    fn catalog_ids_are_unique() {
        let records = catalog();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn seed_writes_whole_catalog() {
        let store = Store::open_in_memory().unwrap();
        let written = seed(&store).unwrap();
        assert_eq!(written, catalog().len());
        assert_eq!(store.count().unwrap(), written as u64);
    }

    #[test]
    fn reseeding_is_idempotent() {
        let store = Store::open_in_memory().unwrap();
        seed(&store).unwrap();
        let before = store.list_all().unwrap();

        seed(&store).unwrap();
        let after = store.list_all().unwrap();

        assert_eq!(before, after);
    }
}
