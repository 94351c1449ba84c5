use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use log::error;
use rs_names_core::store::StoreError;
use thiserror::Error;

/// Failures that abort a request.
///
/// Callers only see a bare 500: the cause is logged server-side.
#[derive(Debug, Error)]
pub enum ApiError {
	#[error("storage failure: {0}")]
	Store(#[from] StoreError),
	#[error("blocking task failed: {0}")]
	Blocking(#[from] BlockingError),
}

impl ResponseError for ApiError {
	fn status_code(&self) -> StatusCode {
		StatusCode::INTERNAL_SERVER_ERROR
	}

	fn error_response(&self) -> HttpResponse {
		error!("Request failed: {self}");
		HttpResponse::build(self.status_code()).finish()
	}
}
