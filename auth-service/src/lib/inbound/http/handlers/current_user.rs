use axum::Extension;
use axum::Json;
use serde::Serialize;

use crate::inbound::http::middleware::AuthenticatedAccount;

/// Identity lookup for the bearer of a valid token.
///
/// Token verification and account resolution happen in the authentication
/// middleware; by the time this runs the account is known.
pub async fn current_user(
    Extension(account): Extension<AuthenticatedAccount>,
) -> Json<CurrentUserResponseData> {
    Json(CurrentUserResponseData {
        email: account.email,
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUserResponseData {
    pub email: String,
}
