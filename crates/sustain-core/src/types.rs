//! Shared types used across Sustain crates.

use serde::{Deserialize, Serialize};

/// One of the six fixed top-level groupings that partition initiatives.
///
/// The category determines which endpoint serves a record. The wire
/// representation is the SCREAMING form (`"FOOD"`, `"WATER"`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Food,
    Water,
    Shelter,
    Education,
    Work,
    Energy,
}

impl Category {
    /// All categories in endpoint-iteration order. The aggregator merges
    /// per-category results in exactly this order.
    pub const ALL: [Category; 6] = [
        Category::Food,
        Category::Water,
        Category::Shelter,
        Category::Education,
        Category::Work,
        Category::Energy,
    ];

    /// Wire/storage form, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Food => "FOOD",
            Category::Water => "WATER",
            Category::Shelter => "SHELTER",
            Category::Education => "EDUCATION",
            Category::Work => "WORK",
            Category::Energy => "ENERGY",
        }
    }

    /// URL slug for this category's endpoint (`/api/{slug}`).
    pub fn slug(self) -> &'static str {
        match self {
            Category::Food => "food",
            Category::Water => "water",
            Category::Shelter => "shelter",
            Category::Education => "education",
            Category::Work => "work",
            Category::Energy => "energy",
        }
    }
}

/// Lifecycle status of an initiative.
///
/// The set carried in seed data is a superset of what display layers
/// style: only `Planning`, `Active`, and `Completed` get a symbol, the
/// rest render plainly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    #[serde(rename = "PLANNING")]
    Planning,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "COMPLETED")]
    Completed,
    #[serde(rename = "R&D")]
    Research,
    #[serde(rename = "PROTOTYPE")]
    Prototype,
}

impl Status {
    /// Wire form, matching the serde representation.
    pub fn label(self) -> &'static str {
        match self {
            Status::Planning => "PLANNING",
            Status::Active => "ACTIVE",
            Status::Completed => "COMPLETED",
            Status::Research => "R&D",
            Status::Prototype => "PROTOTYPE",
        }
    }

    /// Display symbol for the recognized statuses; `None` for the rest
    /// (callers fall back to plain rendering).
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Status::Planning => Some("◌"),
            Status::Active => Some("●"),
            Status::Completed => Some("✓"),
            Status::Research | Status::Prototype => None,
        }
    }
}

/// A single sustainability project record — the only domain entity.
///
/// Records are created by the seed pipeline and immutable from the API's
/// perspective: no update or delete surface exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Initiative {
    /// Unique identifier, stable across re-seeding (derived from the title).
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: Category,
    pub status: Status,
}

impl Initiative {
    /// Derive the stable seed identifier for a title: `seed-` plus the
    /// lowercased title with whitespace runs collapsed to `-`.
    pub fn seed_id(title: &str) -> String {
        let slug = title
            .to_lowercase()
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("-");
        format!("seed-{slug}")
    }

    /// Build a seeded record, deriving the id from the title.
    pub fn seeded(title: &str, description: &str, category: Category, status: Status) -> Self {
        Initiative {
            id: Self::seed_id(title),
            title: title.to_string(),
            description: description.to_string(),
            category,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_wire_form_is_screaming() {
        let json = serde_json::to_string(&Category::Food).unwrap();
        assert_eq!(json, "\"FOOD\"");
        let back: Category = serde_json::from_str("\"ENERGY\"").unwrap();
        assert_eq!(back, Category::Energy);
    }

    #[test]
    fn category_all_is_endpoint_order() {
        let slugs: Vec<&str> = Category::ALL.iter().map(|c| c.slug()).collect();
        assert_eq!(
            slugs,
            vec!["food", "water", "shelter", "education", "work", "energy"]
        );
    }

    #[test]
    fn status_research_serializes_with_ampersand() {
        let json = serde_json::to_string(&Status::Research).unwrap();
        assert_eq!(json, "\"R&D\"");
        let back: Status = serde_json::from_str("\"R&D\"").unwrap();
        assert_eq!(back, Status::Research);
    }

    #[test]
    fn status_symbols_only_for_recognized() {
        assert!(Status::Planning.symbol().is_some());
        assert!(Status::Active.symbol().is_some());
        assert!(Status::Completed.symbol().is_some());
        assert!(Status::Research.symbol().is_none());
        assert!(Status::Prototype.symbol().is_none());
    }

    #[test]
    fn seed_id_collapses_whitespace() {
        assert_eq!(
            Initiative::seed_id("Vertical Farming Initiative"),
            "seed-vertical-farming-initiative"
        );
        assert_eq!(
            Initiative::seed_id("Thorium  Salt   Reactor R&D"),
            "seed-thorium-salt-reactor-r&d"
        );
    }

    #[test]
    fn initiative_serializes_all_fields() {
        let init = Initiative::seeded(
            "Graphene Filtration",
            "Low-energy desalination.",
            Category::Water,
            Status::Research,
        );
        let json = serde_json::to_value(&init).unwrap();
        assert_eq!(json["id"], "seed-graphene-filtration");
        assert_eq!(json["title"], "Graphene Filtration");
        assert_eq!(json["category"], "WATER");
        assert_eq!(json["status"], "R&D");
    }
}
