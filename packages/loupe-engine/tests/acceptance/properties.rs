use loupe_domain::{Facet, GroupPath, UNDEFINED_VALUE};
use loupe_engine::{
	ExpansionState, FilterSelection, derive_catalog, filter_notes, group_notes,
};
use loupe_testkit::sample_store;

#[test]
fn grouping_loses_no_record_and_invents_none() {
	let store = sample_store();
	let mut selection = FilterSelection::new();

	selection.set(Facet::Region, vec!["North".to_string(), "South".to_string()]);

	let filtered = filter_notes(store.records(), "", &selection);
	let tree = group_notes(&filtered, &Facet::ALL);
	let mut grouped_ids: Vec<_> = tree.notes().iter().map(|note| note.id).collect();
	let mut filtered_ids: Vec<_> = filtered.iter().map(|note| note.id).collect();

	grouped_ids.sort_unstable();
	filtered_ids.sort_unstable();

	assert!(!filtered.is_empty());
	assert_eq!(grouped_ids, filtered_ids);
}

#[test]
fn grouping_the_same_set_twice_is_identical() {
	let store = sample_store();
	let filtered = filter_notes(store.records(), "", &FilterSelection::new());
	let first = group_notes(&filtered, &Facet::ALL);
	let second = group_notes(&filtered, &Facet::ALL);

	assert_eq!(first.path_keys(), second.path_keys());
	assert_eq!(first, second);
}

#[test]
fn catalog_lists_exactly_the_observed_values() {
	let store = sample_store();
	let catalog = derive_catalog(store.records());

	for facet in Facet::ALL {
		let mut expected: Vec<&str> = Vec::new();

		for note in store.records() {
			let value = note.facet_value(facet);

			if !expected.contains(&value) {
				expected.push(value);
			}
		}

		assert_eq!(catalog.values(facet), expected.as_slice(), "facet {facet}");
	}

	// The seed's last record omits brand/category/section.
	assert!(catalog.values(Facet::Brand).contains(&UNDEFINED_VALUE.to_string()));
}

#[test]
fn toggle_twice_restores_the_prior_state() {
	let mut state = ExpansionState::new();
	let paths = [
		GroupPath::root().child(Facet::Region, "North"),
		GroupPath::root().child(Facet::Region, "North").child(Facet::Rating, "5"),
	];

	for path in &paths {
		let before = state.is_expanded(path);

		state.toggle(path);
		state.toggle(path);

		assert_eq!(state.is_expanded(path), before);
	}
}

#[test]
fn activating_a_facet_constraint_never_widens_the_result() {
	let store = sample_store();
	let unconstrained = filter_notes(store.records(), "", &FilterSelection::new());

	for value in ["North", "South", "East", "nowhere"] {
		let mut selection = FilterSelection::new();

		selection.set(Facet::Region, vec![value.to_string()]);

		let constrained = filter_notes(store.records(), "", &selection);

		assert!(constrained.len() <= unconstrained.len(), "region {value}");
	}
}

#[test]
fn growing_an_active_selection_never_narrows_the_result() {
	let store = sample_store();
	let mut narrow = FilterSelection::new();
	let mut wide = FilterSelection::new();

	narrow.set(Facet::Region, vec!["North".to_string()]);
	wide.set(Facet::Region, vec!["North".to_string(), "South".to_string()]);

	let narrow_len = filter_notes(store.records(), "", &narrow).len();
	let wide_len = filter_notes(store.records(), "", &wide).len();

	assert!(wide_len >= narrow_len);
}

#[test]
fn removing_search_text_never_narrows_the_result() {
	let store = sample_store();
	let selection = FilterSelection::new();

	for term in ["lunch", "food", "espresso", "zzz-no-match"] {
		let with_term = filter_notes(store.records(), term, &selection).len();
		let without = filter_notes(store.records(), "", &selection).len();

		assert!(without >= with_term, "term {term}");
	}
}

#[test]
fn empty_result_sets_group_to_an_empty_tree_without_error() {
	let store = sample_store();
	let mut selection = FilterSelection::new();

	selection.set(Facet::Region, vec!["Atlantis".to_string()]);

	let filtered = filter_notes(store.records(), "", &selection);
	let tree = group_notes(&filtered, &Facet::ALL);

	assert!(filtered.is_empty());
	assert!(tree.is_empty());
	assert!(tree.path_keys().is_empty());
}
