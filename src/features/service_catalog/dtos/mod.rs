mod service_dto;

pub use crate::features::service_catalog::models::ServiceRef;
pub use service_dto::{ServiceRequestDto, ServiceResponseDto};
