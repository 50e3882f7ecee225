use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::facet::{Facet, UNDEFINED_VALUE};

/// A stored record. Ids are assigned once by the store and never change.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Note {
	pub id: u64,
	pub description: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub facets: BTreeMap<Facet, String>,
}

/// A record as submitted for creation, before the store assigns an id.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct NoteDraft {
	pub description: String,
	#[serde(default)]
	pub tags: Vec<String>,
	#[serde(default)]
	pub facets: BTreeMap<Facet, String>,
}

impl Note {
	/// The record's value for `facet`, substituting the sentinel for a
	/// missing entry. Records are never rejected for incomplete facets.
	pub fn facet_value(&self, facet: Facet) -> &str {
		self.facets.get(&facet).map(String::as_str).unwrap_or(UNDEFINED_VALUE)
	}
}
impl NoteDraft {
	pub fn into_note(self, id: u64) -> Note {
		Note { id, description: self.description, tags: self.tags, facets: self.facets }
	}
}
