pub mod api;
pub mod config;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;

use crate::config::ServerConfig;
use crate::services::provisioner::AccountProvisioner;
use axum::{Router, middleware::from_fn, routing::post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(api::handlers::signup::signup),
    components(
        schemas(
            api::handlers::signup::SignupRequest,
            api::handlers::signup::SignupResponse,
        )
    ),
    tags(
        (name = "auth", description = "Account provisioning endpoint")
    )
)]
pub struct ApiDoc;

#[derive(Clone)]
pub struct AppState {
    pub provisioner: Arc<dyn AccountProvisioner>,
    pub config: ServerConfig,
}

/// `/signup` is deliberately the only service route; login and session
/// handling happen client-side against the identity provider directly.
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/signup", post(api::handlers::signup::signup))
        .layer(from_fn(api::middleware::request_id::request_id_middleware))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
