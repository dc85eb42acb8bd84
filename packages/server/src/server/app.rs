//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower::ServiceBuilder;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::domains::resources::ResourceCatalog;
use crate::domains::topics::{PgTopicReference, TopicReference};
use crate::server::routes::{
    create_resource, get_resource, health_handler, list_resources, list_topics, publish_resource,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub catalog: ResourceCatalog,
    pub topics: Arc<dyn TopicReference>,
}

impl AppState {
    /// Wire the catalog and topic lookup onto one pool.
    pub fn new(db_pool: PgPool) -> Self {
        let topics: Arc<dyn TopicReference> = Arc::new(PgTopicReference::new(db_pool.clone()));
        let catalog = ResourceCatalog::new(db_pool.clone(), topics.clone());
        Self {
            db_pool,
            catalog,
            topics,
        }
    }
}

fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let parsed: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = %origin, "Ignoring invalid allowed origin");
                    None
                }
            })
            .collect();
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(state: AppState, allowed_origins: &[String]) -> Router {
    Router::new()
        .route("/api/resources", get(list_resources).post(create_resource))
        .route("/api/resources/:id", get(get_resource))
        .route("/api/resources/:id/publish", post(publish_resource))
        .route("/api/topics", get(list_topics))
        .route("/health", get(health_handler))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origins))
                .layer(Extension(state)),
        )
}
