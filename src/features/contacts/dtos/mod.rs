mod contact_dto;

pub use contact_dto::{ContactDetailDto, ContactResponseDto, ContactStatusDto, CreateContactDto};
