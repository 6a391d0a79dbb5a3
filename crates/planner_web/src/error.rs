//! Errors returned by the json api.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use route_core::error::{NetworkError, RouteError};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error("Missing query parameter '{0}'")]
    MissingParameter(&'static str),
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Network(NetworkError::Parse(_)) => StatusCode::BAD_REQUEST,
            ApiError::Network(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Route(RouteError::UnknownLocation(_)) => StatusCode::NOT_FOUND,
            ApiError::Route(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::MissingParameter(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        log::debug!("Request failed with {}: {}", status, self);
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
