mod blog_dto;

pub use blog_dto::{BlogDetailDto, BlogRequestDto, BlogResponseDto, BlogStatusDto};
