//! SQLite-backed store of generated names.
//!
//! The store is an append-only log: names are inserted once and never
//! updated or deleted. Every operation opens its own connection and
//! releases it before returning, whatever the outcome.
//!
//! - `NameStore`: insert, count and the three retrieval modes
//! - `StoreConfig`: database location and lock waiting policy
//! - `NameRecord`: one stored name with its id and creation time
//! - `StoreError`: storage faults

use std::path::Path;

use log::debug;
use rand::Rng;
use rusqlite::{Connection, OptionalExtension, params};

/// Database location and connection settings.
pub mod config;

/// Storage fault type.
pub mod error;

/// Stored name representation.
pub mod record;

/// Table definition.
mod schema;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use record::NameRecord;

/// Append-only table of generated names.
///
/// Holds configuration only: no connection outlives the call that opened it,
/// so a `NameStore` can be cloned freely and shared across threads.
///
/// # Invariants
/// - Record ids strictly increase in insertion order
/// - Position-based lookups are ordered by id, oldest first
#[derive(Debug, Clone)]
pub struct NameStore {
	config: StoreConfig,
}

impl NameStore {
	/// Opens the store, creating the `names` table if needed.
	///
	/// # Errors
	/// Returns an error if the database cannot be opened or the schema
	/// cannot be applied.
	pub fn open(config: StoreConfig) -> Result<Self> {
		let store = Self { config };
		let conn = store.connect()?;
		conn.execute_batch(schema::NAMES_SCHEMA)?;
		debug!("Name store ready at {}", store.path().display());
		Ok(store)
	}

	/// Returns the path of the backing database file.
	pub fn path(&self) -> &Path {
		&self.config.path
	}

	/// Opens a connection scoped to a single operation.
	fn connect(&self) -> Result<Connection> {
		let conn = Connection::open(&self.config.path)?;
		conn.busy_timeout(self.config.busy_timeout)?;
		Ok(conn)
	}

	/// Appends a name and returns its id.
	///
	/// The id and timestamp are assigned by the database.
	pub fn insert(&self, name: &str) -> Result<i64> {
		let conn = self.connect()?;
		conn.execute("INSERT INTO names (name) VALUES (?1)", params![name])?;
		let id = conn.last_insert_rowid();
		debug!("Stored '{name}' with id {id}");
		Ok(id)
	}

	/// Returns the total number of stored names.
	pub fn count(&self) -> Result<u64> {
		let conn = self.connect()?;
		let count: i64 = conn.query_row("SELECT COUNT(*) FROM names", [], |row| row.get(0))?;
		Ok(count.max(0) as u64)
	}

	/// Returns the record at a 1-based position in insertion order.
	///
	/// Position 1 is the oldest record. Positions below 1 or past the last
	/// record yield `None`.
	pub fn get_by_index(&self, position: i64) -> Result<Option<NameRecord>> {
		if position < 1 {
			return Ok(None);
		}

		let conn = self.connect()?;
		let record = conn
			.query_row(
				"SELECT id, name, timestamp FROM names ORDER BY id LIMIT 1 OFFSET ?1",
				params![position - 1],
				NameRecord::from_row,
			)
			.optional()?;
		Ok(record)
	}

	/// Returns a random record whose name starts with `letter`.
	///
	/// The comparison is case-insensitive. `letter` may hold more than one
	/// character, in which case it is matched as a prefix.
	pub fn get_by_first_letter<R: Rng + ?Sized>(&self, letter: &str, rng: &mut R) -> Result<Option<NameRecord>> {
		self.random_matching(Some(letter), rng)
	}

	/// Returns a random record, or `None` if the store is empty.
	pub fn get_random<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Option<NameRecord>> {
		self.random_matching(None, rng)
	}

	/// Picks one record uniformly among those matching `prefix`.
	///
	/// Counting and fetching share one read transaction, so the drawn
	/// offset always points inside the counted rows.
	fn random_matching<R: Rng + ?Sized>(&self, prefix: Option<&str>, rng: &mut R) -> Result<Option<NameRecord>> {
		let mut conn = self.connect()?;
		let tx = conn.transaction()?;

		let candidates: i64 = tx.query_row(
			"SELECT COUNT(*) FROM names
			WHERE ?1 IS NULL OR lower(substr(name, 1, length(?1))) = lower(?1)",
			params![prefix],
			|row| row.get(0),
		)?;
		if candidates <= 0 {
			return Ok(None);
		}

		let offset = rng.random_range(0..candidates);
		let record = tx
			.query_row(
				"SELECT id, name, timestamp FROM names
				WHERE ?1 IS NULL OR lower(substr(name, 1, length(?1))) = lower(?1)
				ORDER BY id LIMIT 1 OFFSET ?2",
				params![prefix, offset],
				NameRecord::from_row,
			)
			.optional()?;
		tx.commit()?;

		Ok(record)
	}
}
