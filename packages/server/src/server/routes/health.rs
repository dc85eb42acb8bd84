use std::time::Duration;

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;

use crate::server::app::AppState;

const PING_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: DatabaseHealth,
    pub pool: PoolStats,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealth {
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct PoolStats {
    pub size: u32,
    pub idle: usize,
    pub max: u32,
}

/// Health check endpoint
///
/// Pings the database (5s budget) and reports pool utilization.
/// 200 when the database answers, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let ping = tokio::time::timeout(
        PING_TIMEOUT,
        sqlx::query("SELECT 1").execute(&state.db_pool),
    )
    .await;

    let database = match ping {
        Ok(Ok(_)) => DatabaseHealth {
            reachable: true,
            error: None,
        },
        Ok(Err(e)) => DatabaseHealth {
            reachable: false,
            error: Some(format!("Query failed: {}", e)),
        },
        Err(_) => DatabaseHealth {
            reachable: false,
            error: Some("Query timeout (>5s)".to_string()),
        },
    };

    let pool = PoolStats {
        size: state.db_pool.size(),
        idle: state.db_pool.num_idle(),
        max: state.db_pool.options().get_max_connections(),
    };

    let (code, status) = if database.reachable {
        (StatusCode::OK, "healthy")
    } else {
        tracing::warn!(error = ?database.error, "Health check failed");
        (StatusCode::SERVICE_UNAVAILABLE, "unhealthy")
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            pool,
        }),
    )
}
