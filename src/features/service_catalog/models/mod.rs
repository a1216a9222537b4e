mod service;

pub use service::{Service, ServiceData, ServiceRef, ServiceStatus};
