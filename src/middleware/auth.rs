use axum::{extract::FromRequestParts, http::header};

use crate::{error::AppError, state::AppState};

/// Marker extracted from a valid `Authorization: Bearer <ADMIN_TOKEN>`
/// header. The admin gate lives here at the boundary; the service
/// operations themselves perform no authorization.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuth;

impl FromRequestParts<AppState> for AdminAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::InvalidInput("Missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::InvalidInput("Invalid Authorization header".into()))?;

        if !auth_str.starts_with("Bearer ") {
            return Err(AppError::InvalidInput("Invalid Authorization scheme".into()));
        }
        let token = auth_str.trim_start_matches("Bearer ").trim();

        if token != state.config.admin_token {
            return Err(AppError::Forbidden);
        }

        Ok(AdminAuth)
    }
}
