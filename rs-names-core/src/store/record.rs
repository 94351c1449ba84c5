use chrono::NaiveDateTime;
use rusqlite::Row;
use serde::{Deserialize, Serialize};

/// A stored name.
///
/// `created_at` is the UTC time the database assigned on insert.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NameRecord {
	pub id: i64,
	pub name: String,
	pub created_at: NaiveDateTime,
}

impl NameRecord {
	/// Maps an `(id, name, timestamp)` row.
	pub(crate) fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
		Ok(Self {
			id: row.get(0)?,
			name: row.get(1)?,
			created_at: row.get(2)?,
		})
	}
}
