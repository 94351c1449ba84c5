use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};
use tempfile::TempDir;

use rs_names_core::store::{NameStore, StoreConfig};
use rs_names_server::{AppState, configure};

fn open_store() -> (TempDir, NameStore) {
	let dir = tempfile::tempdir().unwrap();
	let store = NameStore::open(StoreConfig::new(dir.path().join("names.db"))).unwrap();
	(dir, store)
}

macro_rules! app {
	($store:expr) => {
		test::init_service(App::new().app_data(web::Data::new(AppState::new($store))).configure(configure)).await
	};
}

#[actix_web::test]
async fn home_reports_liveness() {
	let (_dir, store) = open_store();
	let app = app!(store);

	let req = test::TestRequest::get().uri("/").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "message": "API is running!" }));
}

#[actix_web::test]
async fn generated_name_is_stored_and_retrievable_by_index() {
	let (_dir, store) = open_store();
	let app = app!(store);

	let req = test::TestRequest::post().uri("/generate_name?first_letter=t&length=5").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	let name = body["generated_name"].as_str().unwrap().to_owned();
	assert!(name.starts_with('T'), "{name}");
	assert!((5..=6).contains(&name.chars().count()), "{name}");

	let req = test::TestRequest::get().uri("/retrieve_name?index=1").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "name": name }));
}

#[actix_web::test]
async fn generate_without_parameters_uses_default_lengths() {
	let (_dir, store) = open_store();
	let app = app!(store);

	for _ in 0..20 {
		let req = test::TestRequest::post().uri("/generate_name").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		let len = body["generated_name"].as_str().unwrap().chars().count();
		assert!((3..=9).contains(&len));
	}
}

#[actix_web::test]
async fn invalid_first_letter_still_generates() {
	let (_dir, store) = open_store();
	let app = app!(store);

	let req = test::TestRequest::post().uri("/generate_name?first_letter=%40&length=4").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::OK);
	let body: Value = test::read_body_json(resp).await;
	let name = body["generated_name"].as_str().unwrap();
	assert!(name.chars().all(|c| c.is_ascii_alphabetic()), "{name}");
}

#[actix_web::test]
async fn non_numeric_length_is_rejected() {
	let (_dir, store) = open_store();
	let app = app!(store);

	let req = test::TestRequest::post().uri("/generate_name?length=five").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn count_follows_generation() {
	let (_dir, store) = open_store();
	let app = app!(store);

	let req = test::TestRequest::get().uri("/count_names").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "count": 0 }));

	for _ in 0..3 {
		let req = test::TestRequest::post().uri("/generate_name").to_request();
		assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
	}

	let req = test::TestRequest::get().uri("/count_names").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "count": 3 }));
}

#[actix_web::test]
async fn index_wins_over_letter_with_a_message() {
	let (_dir, store) = open_store();
	store.insert("Kora").unwrap();
	store.insert("Mira").unwrap();
	let app = app!(store);

	let req = test::TestRequest::get().uri("/retrieve_name?index=2&first_letter=k").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(
		body,
		json!({
			"name": "Mira",
			"message": "Both an index and a letter were provided. Retrieving by index."
		})
	);
}

#[actix_web::test]
async fn retrieve_by_letter_and_at_random() {
	let (_dir, store) = open_store();
	store.insert("Kora").unwrap();
	store.insert("Mira").unwrap();
	let app = app!(store);

	let req = test::TestRequest::get().uri("/retrieve_name?first_letter=M").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "name": "Mira" }));

	let req = test::TestRequest::get().uri("/retrieve_name").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	let name = body["name"].as_str().unwrap();
	assert!(name == "Kora" || name == "Mira");
}

#[actix_web::test]
async fn retrieve_reports_missing_names() {
	let (_dir, store) = open_store();
	store.insert("Kora").unwrap();
	let app = app!(store);

	for uri in ["/retrieve_name?index=2", "/retrieve_name?index=0", "/retrieve_name?first_letter=z"] {
		let req = test::TestRequest::get().uri(uri).to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK, "{uri}");
		let body: Value = test::read_body_json(resp).await;
		assert_eq!(body, json!({ "error": "No name found" }), "{uri}");
	}
}

#[actix_web::test]
async fn random_name_on_empty_store() {
	let (_dir, store) = open_store();
	let app = app!(store);

	let req = test::TestRequest::get().uri("/random_name").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "error": "No names found" }));
}

#[actix_web::test]
async fn random_name_honours_the_first_letter() {
	let (_dir, store) = open_store();
	store.insert("Kora").unwrap();
	store.insert("Mira").unwrap();
	let app = app!(store);

	for _ in 0..10 {
		let req = test::TestRequest::get().uri("/random_name?first_letter=k").to_request();
		let body: Value = test::call_and_read_body_json(&app, req).await;
		assert_eq!(body, json!({ "random_name": "Kora" }));
	}

	let req = test::TestRequest::get().uri("/random_name?first_letter=z").to_request();
	let body: Value = test::call_and_read_body_json(&app, req).await;
	assert_eq!(body, json!({ "error": "No names found" }));
}

#[actix_web::test]
async fn storage_fault_is_a_bare_server_error() {
	let (dir, store) = open_store();
	let app = app!(store);
	// Removing the directory makes every new connection fail to open
	drop(dir);

	let req = test::TestRequest::post().uri("/generate_name").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
	let body = test::read_body(resp).await;
	assert!(body.is_empty());

	let req = test::TestRequest::get().uri("/count_names").to_request();
	let resp = test::call_service(&app, req).await;
	assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
}
