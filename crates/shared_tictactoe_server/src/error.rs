//! HTTP error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use derive_more::{Display, Error, From};
use shared_tictactoe::GameError;
use tracing::error;

/// Error returned by a request handler.
#[derive(Debug, Display, Error, From)]
pub enum ApiError {
    /// The game rejected the request.
    #[display("{}", _0)]
    Game(GameError),

    /// The page could not be rendered.
    #[display("Template error: {}", _0)]
    Render(std::fmt::Error),
}

impl ApiError {
    /// Status code and plain-text body sent to the client.
    pub fn status_and_body(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Game(GameError::GameOver) => (StatusCode::BAD_REQUEST, "Game over"),
            ApiError::Game(GameError::MalformedRequest(_)) => {
                (StatusCode::BAD_REQUEST, "Invalid request parameters")
            }
            ApiError::Game(GameError::InvalidMove { .. }) => (StatusCode::BAD_REQUEST, "Invalid move"),
            ApiError::Render(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Template error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, body).into_response()
    }
}
