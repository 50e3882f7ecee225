#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Failed to parse seed document.")]
	ParseSeed { source: serde_json::Error },
	#[error("Duplicate note id {id} in seed document.")]
	DuplicateSeedId { id: u64 },
}
