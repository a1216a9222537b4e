mod blog_service;
mod slug_resolver;

pub use blog_service::BlogService;
pub use slug_resolver::resolve_slug;
