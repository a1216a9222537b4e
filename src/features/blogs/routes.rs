use std::sync::Arc;

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::features::blogs::handlers;
use crate::features::blogs::services::BlogService;

/// Create routes for the blogs feature, including the per-service published
/// listing mounted under `/api/services`
pub fn routes(service: Arc<BlogService>) -> Router {
    Router::new()
        .route("/api/blog", get(handlers::list_blogs))
        .route("/api/blog/create", post(handlers::create_blog))
        .route("/api/blog/slug/{slug}", get(handlers::get_blog_by_slug))
        .route(
            "/api/blog/{id}",
            get(handlers::get_blog).put(handlers::update_blog),
        )
        .route("/api/blog/{id}/status", patch(handlers::update_blog_status))
        .route(
            "/api/services/by-service/{service_id}",
            get(handlers::list_published_blogs_for_service),
        )
        .with_state(service)
}
