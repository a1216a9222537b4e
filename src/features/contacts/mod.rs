//! Contact requests left by site visitors about a service.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/contact` | Submit request (always starts pending) |
//! | GET | `/api/contact` | List requests (`page`, `limit`, `search`, `status`) |
//! | PUT | `/api/contact/status/{id}` | Mark fulfilled or pending |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::ContactService;
