//! HTTP API for the names service.
//!
//! Wires the name generator and the name store to plain JSON endpoints.
//! The binary in `main.rs` only reads configuration and starts the server;
//! everything routable lives here so it can be exercised in tests.

use actix_web::web;
use rs_names_core::store::NameStore;

/// Command line / environment configuration.
pub mod config;

/// Request failure type and its HTTP mapping.
pub mod error;

/// Endpoint handlers.
pub mod handlers;

/// JSON response bodies.
pub mod responses;

/// State shared by every handler.
///
/// Only the store's configuration is shared: each request opens and
/// releases its own database connection.
#[derive(Debug, Clone)]
pub struct AppState {
	pub store: NameStore,
}

impl AppState {
	pub fn new(store: NameStore) -> Self {
		Self { store }
	}
}

/// Registers every endpoint on an actix `App` or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(handlers::home)
		.service(handlers::generate_name)
		.service(handlers::count_names)
		.service(handlers::retrieve_name)
		.service(handlers::random_name);
}
