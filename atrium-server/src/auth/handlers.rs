use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use atrium_core::admin;
use atrium_model::SuccessResponse;

use crate::auth::jwt;
use crate::auth::AdminIdentity;
use crate::errors::AppResult;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AdminLogin {
    pub username: String,
    pub password: String,
}

/// Admin login. Bad credentials are a non-error response body, not a 401;
/// only internal failures surface as errors.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<AdminLogin>,
) -> AppResult<Json<Value>> {
    let authenticated = admin::authenticate(
        &state.store,
        &credentials.username,
        &credentials.password,
    )
    .await?;

    if !authenticated {
        tracing::warn!(username = %credentials.username, "failed admin login");
        return Ok(Json(json!({
            "success": false,
            "message": "Invalid credentials"
        })));
    }

    let auth = &state.config.auth;
    let access_token = jwt::issue_token(
        &auth.jwt_secret,
        &credentials.username,
        auth.token_expiry_minutes,
    )
    .map_err(|e| anyhow::anyhow!("token issuance failed: {e}"))?;
    state.sessions.insert(&credentials.username);

    Ok(Json(json!({
        "success": true,
        "message": "Login successful",
        "username": credentials.username,
        "access_token": access_token,
        "token_type": "bearer",
        "algorithm": jwt::ALGORITHM,
        "expires_in_minutes": auth.token_expiry_minutes,
    })))
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(identity): Extension<AdminIdentity>,
) -> Json<SuccessResponse> {
    state.sessions.discard(&identity.0);
    Json(SuccessResponse::new("Logged out successfully"))
}
