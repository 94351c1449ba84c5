use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use rs_names_core::store::StoreConfig;

/// Server settings, read from the command line with environment fallbacks.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Pronounceable name generator API", long_about = None)]
pub struct ServerConfig {
	/// SQLite database file holding generated names
	#[arg(long, env = "DB_PATH", value_name = "FILE", default_value = "names.db")]
	pub db_path: PathBuf,

	/// Address to bind
	#[arg(long, env = "HOST", default_value = "0.0.0.0")]
	pub host: String,

	/// Port to bind
	#[arg(long, env = "PORT", default_value_t = 8080)]
	pub port: u16,

	/// How long a request waits on a locked database, in milliseconds
	#[arg(long, env = "DB_BUSY_TIMEOUT_MS", default_value_t = 5000)]
	pub busy_timeout_ms: u64,

	/// Number of HTTP workers (defaults to the number of CPUs)
	#[arg(long, env = "WORKERS")]
	pub workers: Option<usize>,
}

impl ServerConfig {
	/// Derives the store configuration.
	pub fn store_config(&self) -> StoreConfig {
		StoreConfig::new(self.db_path.clone()).with_busy_timeout(Duration::from_millis(self.busy_timeout_ms))
	}

	/// Returns the `(host, port)` pair to bind.
	pub fn bind_address(&self) -> (&str, u16) {
		(self.host.as_str(), self.port)
	}
}
