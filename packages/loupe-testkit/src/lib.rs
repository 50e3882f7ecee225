use std::collections::BTreeMap;

use loupe_domain::{Facet, Note, NoteDraft};
use loupe_store::NoteStore;

/// Seed document used across acceptance tests: a handful of notes spread
/// over every facet, including one note with a missing facet entry.
pub const SAMPLE_SEED_JSON: &str = r#"[
	{
		"id": 1,
		"description": "Lunch at the corner cafe",
		"tags": ["food", "Lunch-special"],
		"facets": { "region": "North", "rating": "5", "brand": "Acme", "category": "Cafe", "section": "Clothing" }
	},
	{
		"id": 2,
		"description": "Quiet dinner spot",
		"tags": ["food", "evening"],
		"facets": { "region": "North", "rating": "4", "brand": "Acme", "category": "Restaurant", "section": "Clothing" }
	},
	{
		"id": 3,
		"description": "Weekend market haul",
		"tags": ["shopping"],
		"facets": { "region": "South", "rating": "5", "brand": "La Trattoria", "category": "Shopping", "section": "Clothing" }
	},
	{
		"id": 4,
		"description": "Espresso worth the detour",
		"tags": ["coffee", "food"],
		"facets": { "region": "East", "rating": "3", "brand": "Acme", "category": "Cafe", "section": "Clothing" }
	},
	{
		"id": 5,
		"description": "Untagged find",
		"tags": [],
		"facets": { "region": "South", "rating": "2" }
	}
]"#;

pub fn facets(entries: &[(Facet, &str)]) -> BTreeMap<Facet, String> {
	entries.iter().map(|(facet, value)| (*facet, value.to_string())).collect()
}

pub fn note(id: u64, description: &str, tags: &[&str], entries: &[(Facet, &str)]) -> Note {
	Note {
		id,
		description: description.to_string(),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
		facets: facets(entries),
	}
}

pub fn draft(description: &str, tags: &[&str], entries: &[(Facet, &str)]) -> NoteDraft {
	NoteDraft {
		description: description.to_string(),
		tags: tags.iter().map(|tag| tag.to_string()).collect(),
		facets: facets(entries),
	}
}

/// A note carrying every facet, for tests that only vary one of them.
pub fn full_note(id: u64, description: &str, region: &str, rating: &str) -> Note {
	note(
		id,
		description,
		&[],
		&[
			(Facet::Region, region),
			(Facet::Rating, rating),
			(Facet::Brand, "Acme"),
			(Facet::Category, "Cafe"),
			(Facet::Section, "Clothing"),
		],
	)
}

pub fn sample_store() -> NoteStore {
	NoteStore::from_seed_json(SAMPLE_SEED_JSON).expect("sample seed must parse")
}
