//! Persistence interface consumed by the feature services.
//!
//! One trait per collection; [`ContentStore`] bundles them so a single
//! injected handle (`Arc<dyn ContentStore>`) serves every feature. Two
//! backends implement it: [`PgStore`] over sqlx/PostgreSQL and
//! [`MemoryStore`], used by tests and by local runs without a database.

mod memory;
mod postgres;

pub use memory::MemoryStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::features::blogs::models::{Blog, BlogData, BlogFilter, BlogStatus, BlogWithService, NewBlog};
use crate::features::contacts::models::{
    Contact, ContactFilter, ContactStatus, ContactWithService, NewContact,
};
use crate::features::service_catalog::models::{Service, ServiceData, ServiceRef};
use crate::shared::query::PageRequest;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The unique constraint on `blogs.slug` rejected the write
    #[error("slug '{0}' is already taken")]
    SlugTaken(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[async_trait]
pub trait ServiceStore: Send + Sync {
    async fn insert_service(&self, data: &ServiceData) -> StoreResult<Service>;

    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>>;

    /// All services in creation order
    async fn list_services(&self) -> StoreResult<Vec<Service>>;

    async fn update_service(&self, id: Uuid, data: &ServiceData) -> StoreResult<Option<Service>>;

    /// Returns false when nothing was deleted. Referencing blogs and
    /// contacts are left untouched.
    async fn delete_service(&self, id: Uuid) -> StoreResult<bool>;

    /// Active services referenced by at least one published blog, computed
    /// in a single pass over each collection.
    async fn services_with_published_blogs(&self) -> StoreResult<Vec<ServiceRef>>;
}

#[async_trait]
pub trait BlogStore: Send + Sync {
    async fn slug_exists(&self, slug: &str) -> StoreResult<bool>;

    /// Fails with [`StoreError::SlugTaken`] when the slug is already used
    async fn insert_blog(&self, blog: &NewBlog) -> StoreResult<Blog>;

    async fn find_blog(&self, id: Uuid) -> StoreResult<Option<BlogWithService>>;

    async fn find_blog_by_slug(&self, slug: &str) -> StoreResult<Option<BlogWithService>>;

    /// Newest first. `page = None` returns every match.
    async fn list_blogs(
        &self,
        filter: &BlogFilter,
        page: Option<&PageRequest>,
    ) -> StoreResult<Vec<BlogWithService>>;

    async fn count_blogs(&self, filter: &BlogFilter) -> StoreResult<i64>;

    /// Full replace of the writable fields; slug and created_at are kept
    async fn update_blog(&self, id: Uuid, data: &BlogData) -> StoreResult<Option<Blog>>;

    async fn update_blog_status(&self, id: Uuid, status: BlogStatus) -> StoreResult<Option<Blog>>;
}

#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn insert_contact(&self, contact: &NewContact) -> StoreResult<Contact>;

    /// Newest first
    async fn list_contacts(
        &self,
        filter: &ContactFilter,
        page: &PageRequest,
    ) -> StoreResult<Vec<ContactWithService>>;

    async fn count_contacts(&self, filter: &ContactFilter) -> StoreResult<i64>;

    async fn update_contact_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> StoreResult<Option<ContactWithService>>;
}

pub trait ContentStore: ServiceStore + BlogStore + ContactStore {}

impl<T> ContentStore for T where T: ServiceStore + BlogStore + ContactStore {}
