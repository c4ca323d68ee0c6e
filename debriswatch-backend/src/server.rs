//! HTTP surface: debris listing, statistics, health check.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use debriswatch_common::DebrisListing;

use crate::module::catalog::{classify, normalize, stats, CatalogError, CatalogManager};

/// Listing responses carry at most this many views; `count` still reports
/// the full debris total.
pub const LISTING_CAP: usize = 100;

pub struct AppState {
    pub manager: CatalogManager,
    pub default_group: String,
}

#[derive(Debug, Deserialize)]
struct GroupQuery {
    group: Option<String>,
}

/// Build the application router.
pub fn build_router(state: Arc<AppState>, enable_cors: bool) -> Router {
    let cors = if enable_cors {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::permissive()
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/api/debris", get(get_debris))
        .route("/api/stats", get(get_stats))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Debris listing: snapshot → classifier → normalizer, capped for payload
/// size.
async fn get_debris(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GroupQuery>,
) -> Response {
    let group = query.group.as_deref().unwrap_or(&state.default_group);

    match state.manager.get_data(group).await {
        Ok(records) => {
            let debris = classify::filter_debris(&records);
            let mut views = normalize::normalize_records(&debris);
            let count = views.len();
            views.truncate(LISTING_CAP);

            Json(DebrisListing {
                count,
                debris: views,
                total_tracked: records.len(),
            })
            .into_response()
        }
        Err(e) => no_data_response(e),
    }
}

/// Debris statistics: snapshot → classifier → aggregator.
async fn get_stats(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GroupQuery>,
) -> Response {
    let group = query.group.as_deref().unwrap_or(&state.default_group);

    match state.manager.get_data(group).await {
        Ok(records) => {
            let debris = classify::filter_debris(&records);
            Json(stats::summarize(&debris)).into_response()
        }
        Err(e) => no_data_response(e),
    }
}

fn no_data_response(e: CatalogError) -> Response {
    error!("Request failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(serde_json::json!({ "error": "Could not fetch data" })),
    )
        .into_response()
}
