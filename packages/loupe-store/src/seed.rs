use std::collections::BTreeMap;

use serde::Deserialize;

use loupe_domain::{Facet, Note};

use crate::{Error, NoteStore, Result};

#[derive(Debug, Deserialize)]
struct SeedRecord {
	id: Option<u64>,
	description: String,
	#[serde(default)]
	tags: Vec<String>,
	#[serde(default)]
	facets: BTreeMap<Facet, String>,
}

pub(crate) fn parse(raw: &str) -> Result<NoteStore> {
	let records: Vec<SeedRecord> =
		serde_json::from_str(raw).map_err(|err| Error::ParseSeed { source: err })?;

	// Explicit ids win; the counter for the unidentified rest starts above
	// the highest one in the document.
	let mut next_id = records.iter().filter_map(|record| record.id).max().map_or(1, |id| id + 1);
	let mut notes = Vec::with_capacity(records.len());

	for record in records {
		let id = match record.id {
			Some(id) => id,
			None => {
				let id = next_id;

				next_id += 1;

				id
			},
		};

		notes.push(Note {
			id,
			description: record.description,
			tags: record.tags,
			facets: record.facets,
		});
	}

	let store = NoteStore::from_notes(notes)?;

	tracing::debug!(count = store.len(), "Seeded note store.");

	Ok(store)
}
