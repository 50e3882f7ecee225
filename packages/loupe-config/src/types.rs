use std::{path::PathBuf, str::FromStr};

use serde::Deserialize;

use loupe_domain::Facet;

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub browse: Browse,
	pub seed: Option<Seed>,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct Browse {
	pub group_by: Vec<String>,
	/// Restores the naive behavior of rebuilding the expansion map from
	/// scratch on every recomputation, discarding user collapses.
	#[serde(default)]
	pub reset_expansion_on_change: bool,
}

#[derive(Debug, Deserialize)]
pub struct Seed {
	pub path: Option<PathBuf>,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			service: Service { log_level: "info".to_string() },
			browse: Browse {
				group_by: Facet::ALL.iter().map(|facet| facet.as_str().to_string()).collect(),
				reset_expansion_on_change: false,
			},
			seed: None,
		}
	}
}

impl Browse {
	/// The grouping order as facets. Entries are checked by `validate`, so
	/// an unparsable name here can only mean the config was never loaded
	/// through [`crate::load`]; such entries are skipped.
	pub fn group_order(&self) -> Vec<Facet> {
		self.group_by.iter().filter_map(|name| Facet::from_str(name).ok()).collect()
	}
}
