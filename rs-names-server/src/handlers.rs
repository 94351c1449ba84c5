use actix_web::{HttpResponse, get, post, web};
use rs_names_core::model::generator::Generator;
use serde::Deserialize;

use crate::AppState;
use crate::error::ApiError;
use crate::responses::{
	API_RUNNING, CountResponse, GeneratedNameResponse, HealthResponse, INDEX_PRIORITY, RandomNameResponse,
	RetrieveResponse,
};

/// Query parameters for `POST /generate_name`.
#[derive(Deserialize, Debug)]
pub struct GenerateParams {
	length: Option<usize>,
	first_letter: Option<String>,
}

/// Query parameters for `GET /retrieve_name`.
#[derive(Deserialize, Debug)]
pub struct RetrieveParams {
	index: Option<i64>,
	first_letter: Option<String>,
}

/// Query parameters for `GET /random_name`.
#[derive(Deserialize, Debug)]
pub struct RandomParams {
	first_letter: Option<String>,
}

/// How `GET /retrieve_name` looks a name up.
#[derive(Debug, PartialEq, Eq)]
enum Lookup {
	Index(i64),
	FirstLetter(String),
	Random,
}

impl RetrieveParams {
	/// Index wins over letter; neither means a random name.
	///
	/// The second value is the advisory message to return alongside the name.
	fn lookup(self) -> (Lookup, Option<&'static str>) {
		let first_letter = self.first_letter.filter(|letter| !letter.is_empty());
		match (self.index, first_letter) {
			(Some(index), Some(_)) => (Lookup::Index(index), Some(INDEX_PRIORITY)),
			(Some(index), None) => (Lookup::Index(index), None),
			(None, Some(letter)) => (Lookup::FirstLetter(letter), None),
			(None, None) => (Lookup::Random, None),
		}
	}
}

/// HTTP GET endpoint `/`
///
/// Liveness check.
#[get("/")]
pub async fn home() -> HttpResponse {
	HttpResponse::Ok().json(HealthResponse { message: API_RUNNING })
}

/// HTTP POST endpoint `/generate_name`
///
/// Generates a name from the optional `length` and `first_letter`,
/// stores it, and returns it.
#[post("/generate_name")]
pub async fn generate_name(
	data: web::Data<AppState>,
	query: web::Query<GenerateParams>,
) -> Result<HttpResponse, ApiError> {
	let GenerateParams { length, first_letter } = query.into_inner();
	let store = data.store.clone();

	let name = web::block(move || {
		let name = Generator::new().generate(length, first_letter.as_deref());
		store.insert(&name).map(|_| name)
	})
	.await??;

	Ok(HttpResponse::Ok().json(GeneratedNameResponse { generated_name: name }))
}

/// HTTP GET endpoint `/count_names`
#[get("/count_names")]
pub async fn count_names(data: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
	let store = data.store.clone();
	let count = web::block(move || store.count()).await??;
	Ok(HttpResponse::Ok().json(CountResponse { count }))
}

/// HTTP GET endpoint `/retrieve_name`
///
/// Looks a name up by 1-based `index`, by `first_letter`, or at random
/// when neither is given. `index` takes priority over `first_letter`.
#[get("/retrieve_name")]
pub async fn retrieve_name(
	data: web::Data<AppState>,
	query: web::Query<RetrieveParams>,
) -> Result<HttpResponse, ApiError> {
	let (lookup, message) = query.into_inner().lookup();
	let store = data.store.clone();

	let record = web::block(move || {
		let mut rng = rand::rng();
		match lookup {
			Lookup::Index(index) => store.get_by_index(index),
			Lookup::FirstLetter(letter) => store.get_by_first_letter(&letter, &mut rng),
			Lookup::Random => store.get_random(&mut rng),
		}
	})
	.await??;

	let name = record.map(|record| record.name);
	Ok(HttpResponse::Ok().json(RetrieveResponse::new(name, message)))
}

/// HTTP GET endpoint `/random_name`
///
/// Returns a random stored name, optionally restricted to a first letter.
#[get("/random_name")]
pub async fn random_name(
	data: web::Data<AppState>,
	query: web::Query<RandomParams>,
) -> Result<HttpResponse, ApiError> {
	let first_letter = query.into_inner().first_letter.filter(|letter| !letter.is_empty());
	let store = data.store.clone();

	let record = web::block(move || {
		let mut rng = rand::rng();
		match first_letter {
			Some(letter) => store.get_by_first_letter(&letter, &mut rng),
			None => store.get_random(&mut rng),
		}
	})
	.await??;

	let name = record.map(|record| record.name);
	Ok(HttpResponse::Ok().json(RandomNameResponse::from(name)))
}
