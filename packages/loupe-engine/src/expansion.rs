use ahash::{AHashMap, AHashSet};

use loupe_domain::GroupPath;

use crate::group::GroupNode;

/// Per-node open/collapsed state, keyed by the node's structured path. The
/// only mutable state in the engine; everything else is derived.
#[derive(Clone, Debug, Default)]
pub struct ExpansionState {
	open: AHashMap<GroupPath, bool>,
}

impl ExpansionState {
	pub fn new() -> Self {
		Self::default()
	}

	/// Aligns the tracked keys with a freshly grouped tree: paths new to
	/// the tree start expanded, paths that survived keep their last
	/// user-set value, paths that left the tree are dropped.
	pub fn reconcile(&mut self, tree: &GroupNode) {
		let keys = tree.path_keys();

		{
			let keep: AHashSet<&GroupPath> = keys.iter().collect();

			self.open.retain(|path, _| keep.contains(path));
		}

		for key in keys {
			self.open.entry(key).or_insert(true);
		}
	}

	/// Rebuilds the map from scratch, discarding user collapses. The naive
	/// reconciliation, kept behind a config flag.
	pub fn reset(&mut self, tree: &GroupNode) {
		self.open.clear();
		self.reconcile(tree);
	}

	/// Flips the node's state. An untracked path counts as expanded, so the
	/// first toggle collapses it.
	pub fn toggle(&mut self, path: &GroupPath) {
		let open = self.open.entry(path.clone()).or_insert(true);

		*open = !*open;
	}

	pub fn is_expanded(&self, path: &GroupPath) -> bool {
		self.open.get(path).copied().unwrap_or(true)
	}

	pub fn tracked(&self) -> usize {
		self.open.len()
	}
}
