use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Value a record is treated as carrying for a facet it does not set.
pub const UNDEFINED_VALUE: &str = "undefined";

/// The recognized classification attributes, in grouping priority order.
///
/// The declaration order is load-bearing: `Ord` derives from it, and
/// [`Facet::ALL`] is the default grouping order.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Facet {
	Region,
	Rating,
	Brand,
	Category,
	Section,
}

impl Facet {
	pub const ALL: [Self; 5] =
		[Self::Region, Self::Rating, Self::Brand, Self::Category, Self::Section];

	pub fn as_str(self) -> &'static str {
		match self {
			Self::Region => "region",
			Self::Rating => "rating",
			Self::Brand => "brand",
			Self::Category => "category",
			Self::Section => "section",
		}
	}
}
impl fmt::Display for Facet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
impl FromStr for Facet {
	type Err = UnknownFacet;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"region" => Ok(Self::Region),
			"rating" => Ok(Self::Rating),
			"brand" => Ok(Self::Brand),
			"category" => Ok(Self::Category),
			"section" => Ok(Self::Section),
			_ => Err(UnknownFacet { name: s.to_string() }),
		}
	}
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnknownFacet {
	pub name: String,
}
impl fmt::Display for UnknownFacet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"unknown facet '{}', expected one of region, rating, brand, category, section",
			self.name
		)
	}
}
impl std::error::Error for UnknownFacet {}
