use std::str::FromStr;

use loupe_domain::{Facet, NoteDraft};

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Unknown command '{name}'. Type 'help' for the command list.")]
	UnknownCommand { name: String },
	#[error("{0}")]
	UnknownFacet(#[from] loupe_domain::UnknownFacet),
	#[error("'{name}' expects {expected}.")]
	Usage { name: &'static str, expected: &'static str },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
	/// Empty term clears the search.
	Search(String),
	Filter(Facet, Vec<String>),
	Clear(Facet),
	Toggle(String),
	Add(NoteDraft),
	Tree,
	Catalog,
	Notes,
	Help,
	Quit,
}

impl Command {
	pub fn parse(line: &str) -> Result<Option<Self>> {
		let line = line.trim();

		if line.is_empty() {
			return Ok(None);
		}

		let (name, rest) = match line.split_once(char::is_whitespace) {
			Some((name, rest)) => (name, rest.trim()),
			None => (line, ""),
		};

		match name {
			"search" => Ok(Some(Self::Search(rest.to_string()))),
			"filter" => {
				let (facet, values) = rest.split_once(char::is_whitespace).ok_or(Error::Usage {
					name: "filter",
					expected: "a facet name and a comma-separated value list",
				})?;

				Ok(Some(Self::Filter(Facet::from_str(facet)?, split_values(values))))
			},
			"clear" => {
				if rest.is_empty() {
					return Err(Error::Usage { name: "clear", expected: "a facet name" });
				}

				Ok(Some(Self::Clear(Facet::from_str(rest)?)))
			},
			"toggle" => {
				if rest.is_empty() {
					return Err(Error::Usage { name: "toggle", expected: "a group path key" });
				}

				Ok(Some(Self::Toggle(rest.to_string())))
			},
			"add" => Ok(Some(Self::Add(parse_draft(rest)?))),
			"tree" => Ok(Some(Self::Tree)),
			"catalog" => Ok(Some(Self::Catalog)),
			"notes" => Ok(Some(Self::Notes)),
			"help" => Ok(Some(Self::Help)),
			"quit" | "exit" => Ok(Some(Self::Quit)),
			_ => Err(Error::UnknownCommand { name: name.to_string() }),
		}
	}
}

fn split_values(raw: &str) -> Vec<String> {
	raw.split(',').map(str::trim).filter(|value| !value.is_empty()).map(String::from).collect()
}

/// `add <description> | <tag,tag> | <facet=value,facet=value>`; the tag and
/// facet sections are optional.
fn parse_draft(raw: &str) -> Result<NoteDraft> {
	let mut sections = raw.splitn(3, '|').map(str::trim);
	let description = sections.next().unwrap_or_default();

	if description.is_empty() {
		return Err(Error::Usage {
			name: "add",
			expected: "'<description> | <tag,tag> | <facet=value,...>'",
		});
	}

	let tags = sections.next().map(split_values).unwrap_or_default();
	let mut facets = std::collections::BTreeMap::new();

	if let Some(assignments) = sections.next() {
		for assignment in assignments.split(',').map(str::trim).filter(|a| !a.is_empty()) {
			let (facet, value) = assignment.split_once('=').ok_or(Error::Usage {
				name: "add",
				expected: "facet assignments shaped like 'region=North'",
			})?;

			facets.insert(Facet::from_str(facet.trim())?, value.trim().to_string());
		}
	}

	Ok(NoteDraft { description: description.to_string(), tags, facets })
}
