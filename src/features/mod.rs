pub mod blogs;
pub mod contacts;
pub mod service_catalog;
