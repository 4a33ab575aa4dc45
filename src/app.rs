//! The full axum application.
//!
//! # Examples
//!
//! Hello API.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! # let url = greeting_server::app::spawn_app().await;
//! let response = reqwest::get(format!("{}/hello", url)).await.unwrap();
//! assert_eq!(200, response.status());
//! assert_eq!("Hello World", response.text().await.unwrap());
//! # });
//! ```
//!
//! Hello API with name.
//!
//! ```rust
//! # tokio_test::block_on(async {
//! # let url = greeting_server::app::spawn_app().await;
//! let client = reqwest::ClientBuilder::default().build().unwrap();
//! let response = client
//!     .post(format!("{}/hello", url))
//!     .json(&serde_json::json!({"name": "Jim"}))
//!     .send()
//!     .await
//!     .unwrap();
//! assert_eq!(200, response.status());
//! assert_eq!("Hello Jim", response.text().await.unwrap());
//! # });
//! ```

use crate::feature::{hello::hello_api, info::info_api, user::user_api};
use crate::infra::config::Config;
use crate::infra::error::{ClientError, InternalError, PanicHandler};
use crate::infra::middleware::MakeRequestIdSpan;
use crate::infra::openapi::ApiDoc;
use crate::infra::state::AppState;
use axum::error_handling::HandleErrorLayer;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

async fn index() -> Html<&'static str> {
    Html(
        r#"
            <h1>Greeting server</h1>
            <ul>
                <li> <a href="/api/swagger-ui">Swagger UI</a> </li>
                <li> <a href="/api/redoc">Redoc</a> </li>
                <li> <a href="/api/rapidoc">RapiDoc</a> </li>
            </ul>
        "#,
    )
}

/// A handler for requests that match no route.
async fn fallback() -> ClientError {
    ClientError::NotFound
}

/// Constructs the REST API routes.
fn rest_api(state: AppState) -> Router {
    Router::new()
        .merge(info_api::routes())
        .merge(hello_api::routes())
        .merge(user_api::routes())
        .with_state(state)
}

/// Constructs the full axum application.
pub fn app(state: AppState) -> Router {
    let request_timeout = state.config().server.request_timeout;

    // Fallible middleware from tower, mapped to infallible response with [`HandleErrorLayer`].
    let tower_middleware = ServiceBuilder::new()
        .layer(HandleErrorLayer::new(|e| async move {
            InternalError::Other(format!("Tower middleware failed: {e}")).into_response()
        }))
        .concurrency_limit(500);

    // The full application with an index page, API documentation, and a REST API.
    Router::new()
        .route("/", get(index))
        .merge(SwaggerUi::new("/api/swagger-ui").url("/api/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/api/redoc", ApiDoc::openapi()))
        .merge(RapiDoc::new("/api/openapi.json").path("/api/rapidoc"))
        .nest("/api", rest_api(state))
        .fallback(fallback)
        // Layers
        .layer(TimeoutLayer::new(request_timeout))
        .layer(axum::middleware::from_fn(
            crate::infra::middleware::log_request_response,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(MakeRequestIdSpan)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(()),
        )
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(tower_middleware)
        .layer(CatchPanicLayer::custom(PanicHandler))
}

/// Starts the axum server.
pub async fn run_app(addr: TcpListener, config: Config) -> std::io::Result<()> {
    let state = AppState::new(config);
    let app = app(state).into_make_service();

    tracing::info!("Starting axum on {}", addr.local_addr()?);
    let exit_result = axum::serve(addr, app)
        .with_graceful_shutdown(crate::infra::shutdown::shutdown_signal())
        .await;

    match &exit_result {
        Ok(_) => tracing::info!("Successfully shut down"),
        Err(e) => tracing::error!("Shutdown failed: {}", e),
    }

    exit_result
}

/// Spawn a server on a random port.
pub async fn spawn_app() -> String {
    let address = "127.0.0.1";
    let listener = TcpListener::bind(format!("{address}:0")).await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let config = crate::infra::config::load_config().unwrap();
    tokio::spawn(run_app(listener, config));
    format!("http://{address}:{port}/api")
}
