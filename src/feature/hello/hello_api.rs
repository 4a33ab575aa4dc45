//! Implementation of the hello API. Returns a static greeting, or a
//! personal one based on the posted name.

use crate::{
    core::greeting::greeting_service,
    infra::{extract::Json, state::AppState},
};
use axum::{routing::get, Router};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

/// The hello API endpoints.
pub fn routes() -> Router<AppState> {
    Router::new().route("/hello", get(hello).post(greet))
}

/// A request for a personal greeting.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct GreetRequest {
    /// The name to greet.
    #[schema(example = "Jim")]
    pub name: Option<String>,
}

/// A handler for requests to the hello endpoint.
#[utoipa::path(
    get,
    path = "/api/hello",
    responses(
        (status = 200, description = "Success", body = String, content_type = "text/plain"),
    )
)]
#[instrument]
pub async fn hello() -> String {
    greeting_service::static_greeting()
}

/// A handler greeting the caller by the posted name.
#[utoipa::path(
    post,
    path = "/api/hello",
    request_body = GreetRequest,
    responses(
        (status = 200, description = "Success", body = String, content_type = "text/plain"),
        (status = 400, description = "Bad Request", body = ErrorBody),
    )
)]
#[instrument]
pub async fn greet(Json(request): Json<GreetRequest>) -> String {
    greeting_service::greet(request.name.as_deref())
}

#[cfg(test)]
mod tests {
    use crate::{
        feature::hello::hello_api::{greet, hello, GreetRequest},
        infra::extract::Json,
    };

    #[tokio::test]
    async fn hello_returns_the_static_greeting() {
        let response = hello().await;

        assert_eq!("Hello World", response);
    }

    #[tokio::test]
    async fn greet_without_name_defaults_to_world() {
        let response = greet(Json(GreetRequest { name: None })).await;

        assert_eq!("Hello World", response);
    }

    #[tokio::test]
    async fn greet_with_blank_name_defaults_to_world() {
        let response = greet(Json(GreetRequest {
            name: Some("   ".to_string()),
        }))
        .await;

        assert_eq!("Hello World", response);
    }

    #[tokio::test]
    async fn greet_trims_the_posted_name() {
        let response = greet(Json(GreetRequest {
            name: Some(" Jim ".to_string()),
        }))
        .await;

        assert_eq!("Hello Jim", response);
    }
}
