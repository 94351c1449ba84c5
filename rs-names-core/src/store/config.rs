use std::path::PathBuf;
use std::time::Duration;

/// Where the name store lives and how long a connection waits on locks.
///
/// # Fields
/// - `path`: SQLite database file, created on first open.
/// - `busy_timeout`: how long a connection waits for a concurrent writer
///   before the operation fails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
	pub path: PathBuf,
	pub busy_timeout: Duration,
}

impl StoreConfig {
	/// Creates a configuration for `path` with the default busy timeout.
	pub fn new<P: Into<PathBuf>>(path: P) -> Self {
		Self { path: path.into(), ..Self::default() }
	}

	/// Replaces the busy timeout.
	pub fn with_busy_timeout(mut self, busy_timeout: Duration) -> Self {
		self.busy_timeout = busy_timeout;
		self
	}
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self {
			path: PathBuf::from("names.db"),
			busy_timeout: Duration::from_secs(5),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_values_are_reasonable() {
		let cfg = StoreConfig::default();
		assert_eq!(cfg.path, PathBuf::from("names.db"));
		assert!(cfg.busy_timeout >= Duration::from_secs(1));
	}

	#[test]
	fn new_keeps_the_default_timeout() {
		let cfg = StoreConfig::new("/tmp/other.db").with_busy_timeout(Duration::from_millis(250));
		assert_eq!(cfg.path, PathBuf::from("/tmp/other.db"));
		assert_eq!(cfg.busy_timeout, Duration::from_millis(250));
	}
}
