pub mod browser;
pub mod catalog;
pub mod expansion;
pub mod filter;
pub mod group;

pub use browser::NoteBrowser;
pub use catalog::{FacetCatalog, derive_catalog};
pub use expansion::ExpansionState;
pub use filter::{FilterSelection, filter_notes, matches};
pub use group::{GroupChild, GroupChildren, GroupNode, group_notes};
