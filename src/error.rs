use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::response::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,

    #[error("No seats available")]
    SeatUnavailable,

    #[error("Ticket already cancelled")]
    AlreadyCancelled,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Forbidden")]
    Forbidden,

    #[error("Internal Server Error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Machine-readable kind carried in the response envelope.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::NotFound => "NOT_FOUND",
            AppError::SeatUnavailable => "SEAT_UNAVAILABLE",
            AppError::AlreadyCancelled => "ALREADY_CANCELLED",
            AppError::InvalidInput(_) => "INVALID_INPUT",
            AppError::Forbidden => "FORBIDDEN",
            AppError::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::SeatUnavailable => StatusCode::CONFLICT,
            AppError::AlreadyCancelled => StatusCode::CONFLICT,
            AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::Forbidden => StatusCode::FORBIDDEN,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body: ApiResponse<serde_json::Value> =
            ApiResponse::failure(self.to_string(), self.kind());

        (status, axum::Json(body)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
