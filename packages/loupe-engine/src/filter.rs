use ahash::{AHashMap, AHashSet};

use loupe_domain::{Facet, Note};

/// The user's multi-select facet constraints. A facet that is absent, or
/// mapped to an empty set, imposes no constraint.
#[derive(Clone, Debug, Default)]
pub struct FilterSelection {
	selected: AHashMap<Facet, AHashSet<String>>,
}

impl FilterSelection {
	pub fn new() -> Self {
		Self::default()
	}

	/// Replaces the selection for `facet`. An empty value list clears the
	/// constraint entirely.
	pub fn set(&mut self, facet: Facet, values: Vec<String>) {
		if values.is_empty() {
			self.selected.remove(&facet);
		} else {
			self.selected.insert(facet, values.into_iter().collect());
		}
	}

	pub fn clear(&mut self, facet: Facet) {
		self.selected.remove(&facet);
	}

	pub fn is_active(&self, facet: Facet) -> bool {
		self.selected.get(&facet).map(|values| !values.is_empty()).unwrap_or(false)
	}

	pub fn is_empty(&self) -> bool {
		!Facet::ALL.iter().any(|facet| self.is_active(*facet))
	}

	pub fn accepts(&self, note: &Note) -> bool {
		self.selected
			.iter()
			.filter(|(_, values)| !values.is_empty())
			.all(|(facet, values)| values.contains(note.facet_value(*facet)))
	}
}

/// Whether the record survives the search term and every active facet
/// constraint. The search term matches when empty, or when the lower-cased
/// description or any lower-cased tag contains the lower-cased term.
pub fn matches(note: &Note, search_term: &str, selection: &FilterSelection) -> bool {
	matches_lowered(note, &search_term.to_lowercase(), selection)
}

/// Applies [`matches`] to every record, preserving input order. The term is
/// lower-cased once, not once per record.
pub fn filter_notes(notes: &[Note], search_term: &str, selection: &FilterSelection) -> Vec<Note> {
	let term = search_term.to_lowercase();

	notes.iter().filter(|note| matches_lowered(note, &term, selection)).cloned().collect()
}

fn matches_lowered(note: &Note, term: &str, selection: &FilterSelection) -> bool {
	matches_search(note, term) && selection.accepts(note)
}

fn matches_search(note: &Note, term: &str) -> bool {
	if term.is_empty() {
		return true;
	}

	note.description.to_lowercase().contains(term)
		|| note.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}
