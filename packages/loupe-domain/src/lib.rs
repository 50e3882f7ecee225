mod facet;
mod note;
mod path;

pub use facet::{Facet, UNDEFINED_VALUE, UnknownFacet};
pub use note::{Note, NoteDraft};
pub use path::{GroupPath, PathSegment};
