use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::contacts::handlers;
use crate::features::contacts::services::ContactService;

/// Create routes for the contacts feature
pub fn routes(service: Arc<ContactService>) -> Router {
    Router::new()
        .route(
            "/api/contact",
            get(handlers::list_contacts).post(handlers::create_contact),
        )
        .route(
            "/api/contact/status/{id}",
            put(handlers::update_contact_status),
        )
        .with_state(service)
}
