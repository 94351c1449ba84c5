use actix_cors::Cors;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use clap::Parser;
use log::info;

use rs_names_core::store::NameStore;
use rs_names_server::config::ServerConfig;
use rs_names_server::{AppState, configure};

/// Main entry point for the server.
///
/// Reads the configuration, opens (and if needed creates) the name store,
/// then starts an Actix-web HTTP server exposing the names API.
///
/// # Notes
/// - Binds to `HOST:PORT` (default 0.0.0.0:8080).
/// - `RUST_LOG` controls logging and defaults to `info`.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	let config = ServerConfig::parse();
	let store = NameStore::open(config.store_config()).map_err(std::io::Error::other)?;
	info!("Serving names from {}", store.path().display());

	let state = web::Data::new(AppState::new(store));
	let mut server = HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.wrap(Cors::permissive())
			.app_data(state.clone())
			.configure(configure)
	});
	if let Some(workers) = config.workers {
		server = server.workers(workers);
	}

	let (host, port) = config.bind_address();
	info!("Listening on {host}:{port}");
	server.bind((host, port))?.run().await
}
