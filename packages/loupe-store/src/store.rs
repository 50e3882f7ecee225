use loupe_domain::{Note, NoteDraft};

use crate::{Error, Result, seed};

/// In-memory record collection. Owns id assignment: a monotonic counter,
/// never a clock, so two appends within the same tick still get distinct
/// ids.
#[derive(Clone, Debug)]
pub struct NoteStore {
	notes: Vec<Note>,
	next_id: u64,
}

impl Default for NoteStore {
	fn default() -> Self {
		Self::new()
	}
}

impl NoteStore {
	pub fn new() -> Self {
		Self { notes: Vec::new(), next_id: 1 }
	}

	/// Builds a store from already-identified records, e.g. a seed set.
	/// Duplicate ids violate the store's uniqueness invariant and are
	/// rejected; later appends continue above the highest id seen.
	pub fn from_notes(notes: Vec<Note>) -> Result<Self> {
		let mut seen = Vec::with_capacity(notes.len());
		let mut next_id = 1;

		for note in &notes {
			if seen.contains(&note.id) {
				return Err(Error::DuplicateSeedId { id: note.id });
			}

			seen.push(note.id);
			next_id = next_id.max(note.id + 1);
		}

		Ok(Self { notes, next_id })
	}

	/// Parses a JSON array of seed records. Records may carry explicit ids
	/// or omit them; omitted ids are assigned monotonically above the
	/// highest explicit id in the document.
	pub fn from_seed_json(raw: &str) -> Result<Self> {
		seed::parse(raw)
	}

	/// Current snapshot, stable until the next mutation.
	pub fn records(&self) -> &[Note] {
		&self.notes
	}

	pub fn len(&self) -> usize {
		self.notes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.notes.is_empty()
	}

	pub fn append(&mut self, draft: NoteDraft) -> Note {
		let id = self.next_id;

		self.next_id += 1;

		let note = draft.into_note(id);

		self.notes.push(note.clone());

		tracing::debug!(id, total = self.notes.len(), "Appended note.");

		note
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use loupe_domain::Facet;

	use super::*;

	fn draft(description: &str) -> NoteDraft {
		NoteDraft {
			description: description.to_string(),
			tags: Vec::new(),
			facets: BTreeMap::from([(Facet::Region, "East".to_string())]),
		}
	}

	#[test]
	fn immediate_appends_get_distinct_ids() {
		let mut store = NoteStore::new();
		let first = store.append(draft("x"));
		let second = store.append(draft("x"));

		assert_ne!(first.id, second.id);
		assert_eq!(store.len(), 2);
	}

	#[test]
	fn append_continues_above_seeded_ids() {
		let notes = vec![draft("a").into_note(10), draft("b").into_note(3)];
		let mut store = NoteStore::from_notes(notes).expect("seed is valid");
		let appended = store.append(draft("c"));

		assert_eq!(appended.id, 11);
	}

	#[test]
	fn duplicate_seed_ids_are_rejected() {
		let notes = vec![draft("a").into_note(5), draft("b").into_note(5)];
		let err = NoteStore::from_notes(notes).expect_err("expected duplicate id error");

		assert!(matches!(err, Error::DuplicateSeedId { id: 5 }));
	}

	#[test]
	fn records_preserve_append_order() {
		let mut store = NoteStore::new();

		store.append(draft("first"));
		store.append(draft("second"));

		let descriptions: Vec<_> =
			store.records().iter().map(|note| note.description.as_str()).collect();

		assert_eq!(descriptions, ["first", "second"]);
	}
}
