use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use crate::inbound::http::router::AppState;

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<LoginResponseData>, ApiError> {
    // The email is matched verbatim against the store; a syntactically
    // invalid one simply never matches, same as an unknown one.
    let access_token = state
        .account_service
        .login(&body.email, &body.password)
        .await
        .map_err(ApiError::from)?;

    Ok(Json(LoginResponseData {
        access_token,
        token_type: "bearer".to_string(),
    }))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginResponseData {
    pub access_token: String,
    pub token_type: String,
}
