use thiserror::Error;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage faults. Fatal to the operation that hit them.
#[derive(Debug, Error)]
pub enum StoreError {
	#[error("database error: {0}")]
	Database(#[from] rusqlite::Error),
}
