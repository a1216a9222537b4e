mod blog;

pub use blog::{Blog, BlogData, BlogFilter, BlogStatus, BlogWithService, NewBlog};
