use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};

use crate::auth::jwt::verify_token;
use crate::auth::AdminIdentity;
use crate::errors::AppError;
use crate::AppState;

/// The admin mutation gate. Every create/update/delete route is layered
/// behind this; read routes are not.
pub async fn require_admin(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer_token(&request)?;
    let subject = verify_token(&state.config.auth.jwt_secret, &token)
        .map_err(|_| {
            AppError::unauthorized("Invalid authentication credentials")
        })?;
    request.extensions_mut().insert(AdminIdentity(subject));
    Ok(next.run(request).await)
}

fn extract_bearer_token(request: &Request) -> Result<String, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| {
            AppError::unauthorized("Invalid authentication credentials")
        })?;

    if !auth_header.starts_with("Bearer ") {
        return Err(AppError::unauthorized(
            "Invalid authentication credentials",
        ));
    }

    Ok(auth_header[7..].to_string())
}
