use ahash::AHashMap;
use serde::Serialize;

use loupe_domain::{Facet, GroupPath, Note};

/// A node of the grouping tree. Internal nodes fan out by the next facet's
/// values; the last facet in the order produces leaves holding the records
/// themselves. Each node knows its full ancestor chain through `path`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GroupNode {
	path: GroupPath,
	children: GroupChildren,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupChildren {
	Groups(Vec<GroupChild>),
	Notes(Vec<Note>),
}

/// One branch of an internal node: the facet value and the subtree under
/// it. Branch order is the order the value first appeared in the incoming
/// record list.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct GroupChild {
	pub value: String,
	pub node: GroupNode,
}

impl GroupNode {
	pub fn path(&self) -> &GroupPath {
		&self.path
	}

	pub fn children(&self) -> &GroupChildren {
		&self.children
	}

	pub fn is_empty(&self) -> bool {
		match &self.children {
			GroupChildren::Groups(children) => children.is_empty(),
			GroupChildren::Notes(notes) => notes.is_empty(),
		}
	}

	/// Every node path below the root, depth-first. These are the keys the
	/// expansion store tracks.
	pub fn path_keys(&self) -> Vec<GroupPath> {
		let mut keys = Vec::new();

		self.collect_paths(&mut keys);

		keys
	}

	/// All records across all leaves, in tree order.
	pub fn notes(&self) -> Vec<&Note> {
		let mut notes = Vec::new();

		self.collect_notes(&mut notes);

		notes
	}

	fn collect_paths(&self, keys: &mut Vec<GroupPath>) {
		if !self.path.is_root() {
			keys.push(self.path.clone());
		}

		if let GroupChildren::Groups(children) = &self.children {
			for child in children {
				child.node.collect_paths(keys);
			}
		}
	}

	fn collect_notes<'a>(&'a self, out: &mut Vec<&'a Note>) {
		match &self.children {
			GroupChildren::Groups(children) =>
				for child in children {
					child.node.collect_notes(out);
				},
			GroupChildren::Notes(notes) => out.extend(notes.iter()),
		}
	}
}

/// Recursively partitions the records by each facet in `order`. Values are
/// grouping keys verbatim; no normalization, so `"North"` and `"north"`
/// land in different branches. Pure and deterministic: the same record list
/// yields an identical tree.
pub fn group_notes(notes: &[Note], order: &[Facet]) -> GroupNode {
	build(notes.to_vec(), GroupPath::root(), order)
}

fn build(notes: Vec<Note>, path: GroupPath, order: &[Facet]) -> GroupNode {
	let Some((facet, rest)) = order.split_first() else {
		return GroupNode { path, children: GroupChildren::Notes(notes) };
	};

	// Single pass: bucket by value, remembering each value's first
	// appearance so branch order stays deterministic.
	let mut value_order: Vec<String> = Vec::new();
	let mut buckets: AHashMap<String, Vec<Note>> = AHashMap::new();

	for note in notes {
		let value = note.facet_value(*facet).to_string();

		if !buckets.contains_key(&value) {
			value_order.push(value.clone());
		}

		buckets.entry(value).or_default().push(note);
	}

	let children = value_order
		.into_iter()
		.map(|value| {
			let bucket = buckets.remove(&value).unwrap_or_default();
			let child_path = path.child(*facet, &value);

			GroupChild { node: build(bucket, child_path, rest), value }
		})
		.collect();

	GroupNode { path, children: GroupChildren::Groups(children) }
}
