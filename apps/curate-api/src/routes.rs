use axum::{
	Json, Router,
	extract::State,
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use crate::state::AppState;
use curate_service::{Error, ProfilesResponse, SearchRequest, SearchResponse};

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/v1/search", post(search))
		.route("/v1/profiles", get(profiles))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn search(
	State(state): State<AppState>,
	Json(payload): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, ApiError> {
	let response = state.service.search(payload).await?;

	Ok(Json(response))
}

async fn profiles(State(state): State<AppState>) -> Json<ProfilesResponse> {
	Json(state.service.profiles())
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error_code: String,
	message: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	fields: Option<Vec<String>>,
	#[serde(skip_serializing_if = "Option::is_none")]
	allowed: Option<Vec<String>>,
}

#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	body: ErrorBody,
}
impl ApiError {
	fn new(
		status: StatusCode,
		error_code: &str,
		message: impl Into<String>,
		fields: Option<Vec<String>>,
		allowed: Option<Vec<String>>,
	) -> Self {
		let body = ErrorBody {
			error_code: error_code.to_string(),
			message: message.into(),
			fields,
			allowed,
		};

		Self { status, body }
	}
}
impl From<Error> for ApiError {
	fn from(err: Error) -> Self {
		match err {
			Error::InvalidRequest { field, message, allowed } => Self::new(
				StatusCode::BAD_REQUEST,
				"invalid_request",
				message,
				Some(vec![field]),
				(!allowed.is_empty()).then_some(allowed),
			),
			Error::Corpus { message } => {
				tracing::error!(error = %message, "Corpus failure while serving a request.");

				Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal", message, None, None)
			},
		}
	}
}
impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(self.body)).into_response()
	}
}
