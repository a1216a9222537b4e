//! Service catalog: the offerings blogs and contact requests refer to.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/services` | Create service |
//! | GET | `/api/services` | List all services |
//! | GET | `/api/services/with-blogs` | Active services with at least one published blog |
//! | GET | `/api/services/{id}` | Get service |
//! | PUT | `/api/services/{id}` | Replace service |
//! | DELETE | `/api/services/{id}` | Delete service (no cascade) |
//!
//! `/api/services/by-service/{service_id}` is served by the blogs feature.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ServiceCatalogService;
