//! Modules layer - Infrastructure components for external integrations
//!
//! Contains the persistence backends behind the feature services.

pub mod store;
