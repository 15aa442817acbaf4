use axum::{
    http::{header, HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use crate::core::command::CommandError;
use crate::core::domain::Configuration;
use crate::core::library::LibraryError;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppState {
    pub config: Configuration,
}

impl AppState {
    pub fn new(config: Configuration) -> AppState {
        AppState {
            config,
        }
    }
}

// ErrorResponse is the body returned for every failed request
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: bool,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: true,
            message: message.to_string(),
        }
    }
}

pub(crate) type ServerError = (StatusCode, Json<ErrorResponse>);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    CommandError::from(LibraryError::from(err)).into()
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        let status = match err {
            CommandError::Database { .. } => {
                tracing::error!(error = ?err, "catalog store failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::NotFound { .. } => {
                StatusCode::NOT_FOUND
            }
            CommandError::Runtime { .. } => {
                tracing::error!(error = ?err, "catalog runtime failure");
                StatusCode::INTERNAL_SERVER_ERROR
            }
            CommandError::Serialization { .. } => {
                StatusCode::BAD_REQUEST
            }
            CommandError::Validation { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        (status, Json(ErrorResponse::new(err.to_string().as_str())))
    }
}

// Permissive CORS for the admin page, preflight requests never reach a handler.
pub(crate) async fn cors<B>(req: Request<B>, next: Next<B>) -> Response {
    let mut res = if req.method() == &Method::OPTIONS {
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(req).await
    };
    let headers = res.headers_mut();
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static("GET,HEAD,PUT,PATCH,POST,DELETE"));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static("Content-Type"));
    res
}
