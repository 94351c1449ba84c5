/// `names` table: one row per generated name, ordered by `id`.
pub(crate) const NAMES_SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS names (
	id INTEGER PRIMARY KEY AUTOINCREMENT,
	name TEXT NOT NULL,
	timestamp TEXT DEFAULT CURRENT_TIMESTAMP
);
"#;
