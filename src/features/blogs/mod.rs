//! Blog posts attached to a service, addressed by id or by a unique slug.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/blog/create` | Create blog (slug derived from title) |
//! | GET | `/api/blog` | List blogs (`page`, `limit`, `search`, `status`) |
//! | GET | `/api/blog/{id}` | Get blog with its service |
//! | GET | `/api/blog/slug/{slug}` | Get blog by slug |
//! | PUT | `/api/blog/{id}` | Replace blog, slug preserved |
//! | PATCH | `/api/blog/{id}/status` | Update status only |
//! | GET | `/api/services/by-service/{service_id}` | Published blogs of a service |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::BlogService;
