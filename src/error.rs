use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::api::models::ErrorResponse;

pub const GENERIC_FAILURE_MESSAGE: &str = "There was a problem processing your request.";

/// Everything that can go wrong while proxying one search to the upstream API.
#[derive(Error, Debug)]
pub enum ProxyError {
    #[error("invalid upstream endpoint {0}")]
    InvalidEndpoint(String),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("upstream returned malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("upstream response is missing `{0}`")]
    MissingField(&'static str),

    #[error("upstream field `{field}` is not a number: {value:?}")]
    InvalidNumber { field: &'static str, value: String },
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        // The caller only ever sees the generic message; the cause stays in the logs.
        tracing::error!("search request failed: {:#}", self);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                message: GENERIC_FAILURE_MESSAGE.to_string(),
            }),
        )
            .into_response()
    }
}

/// Failure of a client-side call to the proxy.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("server responded with {status}: {message}")]
    Server { status: u16, message: String },

    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl ApiError {
    /// The text shown to the user for this failure.
    pub fn message(&self) -> String {
        match self {
            ApiError::Server { message, .. } => message.clone(),
            ApiError::Transport(e) => e.to_string(),
        }
    }
}
