use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::blogs::dtos::{BlogDetailDto, BlogRequestDto, BlogResponseDto, BlogStatusDto};
use crate::features::blogs::models::{BlogFilter, BlogStatus, NewBlog};
use crate::features::blogs::services::resolve_slug;
use crate::features::service_catalog::services::resolve_service_reference;
use crate::modules::store::{BlogStore, ContentStore, StoreError};
use crate::shared::query::{ListQuery, Pagination};
use crate::shared::slug::{slugify, with_suffix};
use crate::shared::validation::{parse_id, validate_request};

fn not_found() -> AppError {
    AppError::NotFound("Blog not found".to_string())
}

/// Service for blog operations
pub struct BlogService {
    store: Arc<dyn ContentStore>,
}

impl BlogService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    /// Create a blog with a unique slug derived from its title.
    ///
    /// If another writer claims the chosen slug between the existence check
    /// and the insert, one more attempt is made with a freshly suffixed slug.
    pub async fn create(&self, dto: BlogRequestDto) -> Result<BlogResponseDto> {
        validate_request(&dto)?;

        let service_id = resolve_service_reference(&*self.store, dto.service_ref()).await?;
        let data = dto.into_data(service_id)?;
        let slug = resolve_slug(&*self.store, &data.title).await?;
        let mut new_blog = NewBlog { slug, data };

        let blog = match self.store.insert_blog(&new_blog).await {
            Ok(blog) => blog,
            Err(StoreError::SlugTaken(taken)) => {
                tracing::warn!("Slug '{}' was claimed concurrently, retrying", taken);
                new_blog.slug = with_suffix(&slugify(&new_blog.data.title));
                self.store.insert_blog(&new_blog).await?
            }
            Err(e) => return Err(e.into()),
        };
        tracing::info!("Blog created: {} ({})", blog.id, blog.slug);

        Ok(blog.into())
    }

    /// Paged listing, newest first, with search and status filters
    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<BlogDetailDto>, Pagination)> {
        let page = query.page_request();
        let filter = BlogFilter {
            search: query.search_term(),
            status: query.status_filter::<BlogStatus>(),
            service_id: None,
        };

        let total = self.store.count_blogs(&filter).await?;
        let blogs = self.store.list_blogs(&filter, Some(&page)).await?;

        Ok((
            blogs.into_iter().map(BlogDetailDto::from).collect(),
            Pagination::new(total, &page),
        ))
    }

    pub async fn get(&self, id: &str) -> Result<BlogDetailDto> {
        let id = parse_id(id).ok_or_else(not_found)?;

        self.store
            .find_blog(id)
            .await?
            .map(BlogDetailDto::from)
            .ok_or_else(not_found)
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<BlogDetailDto> {
        self.store
            .find_blog_by_slug(slug)
            .await?
            .map(BlogDetailDto::from)
            .ok_or_else(|| AppError::NotFound("Blog not found with this slug".to_string()))
    }

    /// Published blogs of one service, newest first. An unknown or malformed
    /// service id simply has none.
    pub async fn list_published_for_service(&self, service_id: &str) -> Result<Vec<BlogDetailDto>> {
        let Some(service_id) = parse_id(service_id) else {
            return Ok(Vec::new());
        };

        let filter = BlogFilter {
            search: None,
            status: Some(BlogStatus::Published),
            service_id: Some(service_id),
        };
        let blogs = self.store.list_blogs(&filter, None).await?;

        Ok(blogs.into_iter().map(BlogDetailDto::from).collect())
    }

    /// Full replace of the writable fields. The slug is kept.
    pub async fn update(&self, id: &str, dto: BlogRequestDto) -> Result<BlogResponseDto> {
        validate_request(&dto)?;
        let id = parse_id(id).ok_or_else(not_found)?;

        if self.store.find_blog(id).await?.is_none() {
            return Err(not_found());
        }
        let service_id = resolve_service_reference(&*self.store, dto.service_ref()).await?;

        let blog = self
            .store
            .update_blog(id, &dto.into_data(service_id)?)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Blog updated: {}", blog.id);

        Ok(blog.into())
    }

    pub async fn update_status(&self, id: &str, dto: BlogStatusDto) -> Result<BlogResponseDto> {
        validate_request(&dto)?;
        let id = parse_id(id).ok_or_else(not_found)?;
        let status = dto.status()?;

        let blog = self
            .store
            .update_blog_status(id, status)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Blog {} status set to {:?}", blog.id, blog.status);

        Ok(blog.into())
    }
}
