use serde::Serialize;

pub const API_RUNNING: &str = "API is running!";
pub const NO_NAME_FOUND: &str = "No name found";
pub const NO_NAMES_FOUND: &str = "No names found";
pub const INDEX_PRIORITY: &str = "Both an index and a letter were provided. Retrieving by index.";

/// Body of `GET /`.
#[derive(Serialize, Debug)]
pub struct HealthResponse {
	pub message: &'static str,
}

/// Body of `POST /generate_name`.
#[derive(Serialize, Debug)]
pub struct GeneratedNameResponse {
	pub generated_name: String,
}

/// Body of `GET /count_names`.
#[derive(Serialize, Debug)]
pub struct CountResponse {
	pub count: u64,
}

/// Body of `GET /retrieve_name`.
///
/// `message` is only present when a letter was ignored in favour of the index.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum RetrieveResponse {
	Found {
		name: String,
		#[serde(skip_serializing_if = "Option::is_none")]
		message: Option<&'static str>,
	},
	Missing {
		error: &'static str,
	},
}

impl RetrieveResponse {
	pub fn new(name: Option<String>, message: Option<&'static str>) -> Self {
		match name {
			Some(name) => RetrieveResponse::Found { name, message },
			None => RetrieveResponse::Missing { error: NO_NAME_FOUND },
		}
	}
}

/// Body of `GET /random_name`.
#[derive(Serialize, Debug)]
#[serde(untagged)]
pub enum RandomNameResponse {
	Found { random_name: String },
	Missing { error: &'static str },
}

impl From<Option<String>> for RandomNameResponse {
	fn from(name: Option<String>) -> Self {
		match name {
			Some(random_name) => RandomNameResponse::Found { random_name },
			None => RandomNameResponse::Missing { error: NO_NAMES_FOUND },
		}
	}
}
