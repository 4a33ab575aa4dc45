//! The user API implementation.

use crate::{
    core::greeting::greeting_service::{self, User},
    infra::{extract::Json, state::AppState},
};
use axum::{routing::get, Router};
use tracing::instrument;

/// The user API endpoints.
pub fn routes() -> Router<AppState> {
    Router::new().route("/user", get(user))
}

/// Returns the built-in user.
#[utoipa::path(
    get,
    path = "/api/user",
    responses(
        (status = 200, description = "Success", body = User),
    )
)]
#[instrument]
pub async fn user() -> Json<User> {
    Json(greeting_service::fixed_user())
}

#[cfg(test)]
mod tests {
    use super::user;

    #[tokio::test]
    async fn user_returns_jim() {
        let response = user().await;

        assert_eq!("Jim", response.0.name);
    }
}
