//! OpenAPI configuration.

use crate::core::greeting::greeting_service;
use crate::feature::{hello::hello_api, info::info_api, user::user_api};
use utoipa::OpenApi;

/// OpenApi configuration.
#[derive(OpenApi)]
#[openapi(
    paths(
        info_api::info,
        hello_api::hello,
        hello_api::greet,
        user_api::user,
    ),
    components(
        schemas(
            info_api::AppInfo,
            hello_api::GreetRequest,
            greeting_service::User,
            crate::infra::error::ErrorBody
        )
    )
)]
#[derive(Clone, Copy, Debug)]
pub struct ApiDoc;
