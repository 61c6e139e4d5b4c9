//! redb table definitions for the Sustain record store.
//!
//! The single table uses `&str` keys and `&[u8]` values (JSON-serialized
//! records). Keys follow the pattern `{CATEGORY}:{id}` so that one
//! category's records form a contiguous, prefix-scannable key range.

use redb::TableDefinition;
use sustain_core::Category;

/// Initiative records keyed by `{CATEGORY}:{id}`.
pub const INITIATIVES: TableDefinition<&str, &[u8]> = TableDefinition::new("initiatives");

/// Build the composite table key for a record.
pub fn table_key(category: Category, id: &str) -> String {
    format!("{}:{}", category.as_str(), id)
}
