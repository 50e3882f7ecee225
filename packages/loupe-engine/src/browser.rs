use loupe_domain::{Facet, GroupPath, Note, NoteDraft};
use loupe_store::NoteStore;

use crate::{
	catalog::{FacetCatalog, derive_catalog},
	expansion::ExpansionState,
	filter::{FilterSelection, filter_notes},
	group::{GroupNode, group_notes},
};

/// The engine facade: owns the store, the current search/selection state,
/// and every piece of derived data. All mutations funnel through the
/// methods here, and each one re-runs the full derive → filter → group →
/// reconcile pipeline, so the derived state can never go stale.
#[derive(Clone, Debug)]
pub struct NoteBrowser {
	store: NoteStore,
	order: Vec<Facet>,
	reset_expansion_on_change: bool,
	search_term: String,
	selection: FilterSelection,
	catalog: FacetCatalog,
	tree: GroupNode,
	expansion: ExpansionState,
}

impl NoteBrowser {
	pub fn new(store: NoteStore) -> Self {
		Self::with_order(store, Facet::ALL.to_vec())
	}

	/// Builds a browser grouping by `order`. An empty order falls back to
	/// the full facet list rather than producing a single flat leaf.
	pub fn with_order(store: NoteStore, order: Vec<Facet>) -> Self {
		let order = if order.is_empty() { Facet::ALL.to_vec() } else { order };
		let mut browser = Self {
			store,
			order,
			reset_expansion_on_change: false,
			search_term: String::new(),
			selection: FilterSelection::new(),
			catalog: FacetCatalog::default(),
			tree: group_notes(&[], &[]),
			expansion: ExpansionState::new(),
		};

		browser.recompute();

		browser
	}

	/// Restores the naive behavior of forgetting user collapses on every
	/// recomputation.
	pub fn reset_expansion_on_change(mut self, reset: bool) -> Self {
		self.reset_expansion_on_change = reset;

		self
	}

	pub fn group_order(&self) -> &[Facet] {
		&self.order
	}

	pub fn notes(&self) -> &[Note] {
		self.store.records()
	}

	pub fn facet_catalog(&self) -> &FacetCatalog {
		&self.catalog
	}

	pub fn search_term(&self) -> &str {
		&self.search_term
	}

	pub fn set_search_term(&mut self, term: impl Into<String>) {
		self.search_term = term.into();

		self.recompute();
	}

	pub fn set_filter_selection(&mut self, facet: Facet, values: Vec<String>) {
		self.selection.set(facet, values);

		self.recompute();
	}

	pub fn clear_filter_selection(&mut self, facet: Facet) {
		self.selection.clear(facet);

		self.recompute();
	}

	/// The grouped view of the records surviving the current search term
	/// and facet selections.
	pub fn visible_tree(&self) -> &GroupNode {
		&self.tree
	}

	pub fn is_expanded(&self, path: &GroupPath) -> bool {
		self.expansion.is_expanded(path)
	}

	/// Flips a node open or closed. Touches expansion state only; the tree
	/// itself does not change shape.
	pub fn toggle(&mut self, path: &GroupPath) {
		self.expansion.toggle(path);
	}

	/// Appends through the store, then folds the new record into the
	/// derived state.
	pub fn add_note(&mut self, draft: NoteDraft) -> Note {
		let note = self.store.append(draft);

		self.recompute();

		note
	}

	fn recompute(&mut self) {
		self.catalog = derive_catalog(self.store.records());

		let filtered = filter_notes(self.store.records(), &self.search_term, &self.selection);

		tracing::debug!(
			total = self.store.len(),
			matched = filtered.len(),
			"Recomputed filtered record set."
		);

		self.tree = group_notes(&filtered, &self.order);

		if self.reset_expansion_on_change {
			self.expansion.reset(&self.tree);
		} else {
			self.expansion.reconcile(&self.tree);
		}
	}
}
