use loupe_domain::{Facet, GroupPath};
use loupe_engine::{FilterSelection, NoteBrowser, filter_notes, group_notes};
use loupe_store::NoteStore;
use loupe_testkit::{draft, full_note, note};

use super::{descend, leaf_notes, root_values};

#[test]
fn single_record_without_filters_forms_one_chain_to_a_leaf() {
	let records = vec![note(
		1,
		"lunch",
		&["food"],
		&[
			(Facet::Region, "North"),
			(Facet::Rating, "5"),
			(Facet::Brand, "Acme"),
			(Facet::Category, "Cafe"),
			(Facet::Section, "Clothing"),
		],
	)];
	let filtered = filter_notes(&records, "", &FilterSelection::new());

	assert_eq!(filtered.len(), 1);

	let tree = group_notes(&filtered, &Facet::ALL);

	assert_eq!(root_values(&tree), ["North"]);

	let leaf = descend(&tree, &["North", "5", "Acme", "Cafe", "Clothing"]);
	let notes = leaf_notes(leaf);

	assert_eq!(notes.len(), 1);
	assert_eq!(notes[0].id, 1);
}

#[test]
fn non_member_selection_empties_the_tree() {
	let store = NoteStore::from_notes(vec![full_note(1, "lunch", "North", "5")])
		.expect("seed is valid");
	let mut browser = NoteBrowser::new(store);

	browser.set_filter_selection(Facet::Region, vec!["South".to_string()]);

	assert!(browser.visible_tree().is_empty());
	assert!(root_values(browser.visible_tree()).is_empty());
}

#[test]
fn rating_variants_become_siblings_under_the_same_region() {
	let records =
		vec![full_note(1, "first", "North", "5"), full_note(2, "second", "North", "4")];
	let tree = group_notes(&records, &Facet::ALL);

	assert_eq!(root_values(&tree), ["North"]);

	let region = descend(&tree, &["North"]);
	let ratings = root_values(region);

	assert_eq!(ratings, ["5", "4"]);
	assert_eq!(leaf_notes(descend(region, &["5", "Acme", "Cafe", "Clothing"]))[0].id, 1);
	assert_eq!(leaf_notes(descend(region, &["4", "Acme", "Cafe", "Clothing"]))[0].id, 2);
}

#[test]
fn search_matches_descriptions_and_tags_case_insensitively() {
	let records = vec![
		note(1, "Lunch at noon", &[], &[(Facet::Region, "North")]),
		note(2, "midday meal", &["Lunch-special"], &[(Facet::Region, "North")]),
		note(3, "breakfast", &["early"], &[(Facet::Region, "North")]),
	];
	let filtered = filter_notes(&records, "lunch", &FilterSelection::new());
	let ids: Vec<_> = filtered.iter().map(|note| note.id).collect();

	assert_eq!(ids, [1, 2]);
}

#[test]
fn immediate_appends_through_the_browser_get_distinct_ids() {
	let mut browser = NoteBrowser::new(NoteStore::new());
	let first = browser.add_note(draft("x", &[], &[(Facet::Region, "East")]));
	let second = browser.add_note(draft("x", &[], &[(Facet::Region, "East")]));

	assert_ne!(first.id, second.id);
}

#[test]
fn toggling_a_rendered_node_only_touches_expansion_state() {
	let store =
		NoteStore::from_notes(vec![full_note(1, "a", "North", "5")]).expect("seed is valid");
	let mut browser = NoteBrowser::new(store);
	let path = GroupPath::root().child(Facet::Region, "North");
	let tree_before = browser.visible_tree().clone();

	assert!(browser.is_expanded(&path));

	browser.toggle(&path);

	assert!(!browser.is_expanded(&path));
	assert_eq!(browser.visible_tree(), &tree_before);
}
