pub mod models;
pub mod views;

use models::entry::Entry;

/// The dataset the tree is seeded from: a pre-order flattening where every
/// entry's descendants follow it directly. Keys are unique; the seed data
/// additionally encodes depth in the key length, which the renderer does not
/// rely on.
pub fn seed_entries() -> Vec<Entry> {
    serde_json::from_str(include_str!("data/folders.json"))
        .expect("bundled folder dataset is valid JSON")
}
