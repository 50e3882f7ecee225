use std::collections::BTreeMap;

use ahash::AHashSet;
use serde::Serialize;

use loupe_domain::{Facet, Note};

/// The distinct values observed per facet across a record set, in order of
/// first appearance scanning front-to-back. Derived only; never stored
/// independently of the records it was computed from.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct FacetCatalog {
	values: BTreeMap<Facet, Vec<String>>,
}

impl FacetCatalog {
	pub fn values(&self, facet: Facet) -> &[String] {
		self.values.get(&facet).map(Vec::as_slice).unwrap_or_default()
	}

	pub fn iter(&self) -> impl Iterator<Item = (Facet, &[String])> {
		self.values.iter().map(|(facet, values)| (*facet, values.as_slice()))
	}
}

/// Scans the records once and accumulates each facet's ordered-unique value
/// list. A record without an entry for a facet contributes the sentinel
/// value there.
pub fn derive_catalog(notes: &[Note]) -> FacetCatalog {
	let mut values: BTreeMap<Facet, Vec<String>> =
		Facet::ALL.iter().map(|facet| (*facet, Vec::new())).collect();
	let mut seen: AHashSet<(Facet, &str)> = AHashSet::new();

	for note in notes {
		for facet in Facet::ALL {
			let value = note.facet_value(facet);

			if seen.insert((facet, value))
				&& let Some(list) = values.get_mut(&facet)
			{
				list.push(value.to_string());
			}
		}
	}

	FacetCatalog { values }
}
