mod error;
mod seed;
mod store;

pub use error::Error;
pub use store::NoteStore;

pub type Result<T, E = Error> = std::result::Result<T, E>;
