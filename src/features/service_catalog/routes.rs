use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::service_catalog::handlers;
use crate::features::service_catalog::services::ServiceCatalogService;

/// Create routes for the service catalog
pub fn routes(service: Arc<ServiceCatalogService>) -> Router {
    Router::new()
        .route(
            "/api/services",
            get(handlers::list_services).post(handlers::create_service),
        )
        .route(
            "/api/services/with-blogs",
            get(handlers::list_services_with_blogs),
        )
        .route(
            "/api/services/{id}",
            get(handlers::get_service)
                .put(handlers::update_service)
                .delete(handlers::delete_service),
        )
        .with_state(service)
}
