use std::fmt;

use serde::{Deserialize, Serialize};

use crate::facet::Facet;

/// One `facet = value` step on the way down the grouping tree.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct PathSegment {
	pub facet: Facet,
	pub value: String,
}

/// Identity of a grouping tree node: the full chain of (facet, value)
/// segments from the root. Identity lives in the segment list, so a value
/// that happens to contain the display separator cannot collide with
/// another path; the string form exists for rendering only and is never
/// parsed back.
#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct GroupPath {
	segments: Vec<PathSegment>,
}

impl GroupPath {
	pub fn root() -> Self {
		Self::default()
	}

	pub fn child(&self, facet: Facet, value: &str) -> Self {
		let mut segments = self.segments.clone();

		segments.push(PathSegment { facet, value: value.to_string() });

		Self { segments }
	}

	pub fn segments(&self) -> &[PathSegment] {
		&self.segments
	}

	pub fn depth(&self) -> usize {
		self.segments.len()
	}

	pub fn is_root(&self) -> bool {
		self.segments.is_empty()
	}
}
impl fmt::Display for GroupPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (index, segment) in self.segments.iter().enumerate() {
			if index > 0 {
				f.write_str("-")?;
			}

			write!(f, "{}-{}", segment.facet, segment.value)?;
		}

		Ok(())
	}
}
