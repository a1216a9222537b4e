use std::cmp::Reverse;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{BlogStore, ContactStore, ServiceStore, StoreError, StoreResult};
use crate::features::blogs::models::{Blog, BlogData, BlogFilter, BlogStatus, BlogWithService, NewBlog};
use crate::features::contacts::models::{
    Contact, ContactFilter, ContactStatus, ContactWithService, NewContact,
};
use crate::features::service_catalog::models::{Service, ServiceData, ServiceRef, ServiceStatus};
use crate::shared::query::PageRequest;

/// Process-local store. Documents are kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    services: Vec<Service>,
    blogs: Vec<Blog>,
    contacts: Vec<Contact>,
}

impl State {
    fn service_ref(&self, id: Uuid) -> Option<ServiceRef> {
        self.services
            .iter()
            .find(|s| s.id == id)
            .map(|s| ServiceRef {
                id: s.id,
                name: s.name.clone(),
            })
    }

    fn blog_with_service(&self, blog: &Blog) -> BlogWithService {
        BlogWithService {
            blog: blog.clone(),
            service: self.service_ref(blog.service_id),
        }
    }

    fn contact_with_service(&self, contact: &Contact) -> ContactWithService {
        ContactWithService {
            contact: contact.clone(),
            service: self.service_ref(contact.service_id),
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Newest first; among equal timestamps the later insert comes first
fn newest_first<'a, T, F>(items: impl DoubleEndedIterator<Item = &'a T>, created_at: F) -> Vec<&'a T>
where
    T: 'a,
    F: Fn(&T) -> chrono::DateTime<Utc>,
{
    let mut sorted: Vec<&T> = items.rev().collect();
    sorted.sort_by_key(|item| Reverse(created_at(*item)));
    sorted
}

fn window<T>(items: Vec<T>, page: &PageRequest) -> Vec<T> {
    items
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit as usize)
        .collect()
}

#[async_trait]
impl ServiceStore for MemoryStore {
    async fn insert_service(&self, data: &ServiceData) -> StoreResult<Service> {
        let now = Utc::now();
        let service = Service {
            id: Uuid::now_v7(),
            name: data.name.clone(),
            description: data.description.clone(),
            status: data.status,
            created_at: now,
            updated_at: now,
        };
        self.state.write().await.services.push(service.clone());
        Ok(service)
    }

    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        let state = self.state.read().await;
        Ok(state.services.iter().find(|s| s.id == id).cloned())
    }

    async fn list_services(&self) -> StoreResult<Vec<Service>> {
        Ok(self.state.read().await.services.clone())
    }

    async fn update_service(&self, id: Uuid, data: &ServiceData) -> StoreResult<Option<Service>> {
        let mut state = self.state.write().await;
        let Some(service) = state.services.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        service.name = data.name.clone();
        service.description = data.description.clone();
        service.status = data.status;
        service.updated_at = Utc::now();
        Ok(Some(service.clone()))
    }

    async fn delete_service(&self, id: Uuid) -> StoreResult<bool> {
        let mut state = self.state.write().await;
        let before = state.services.len();
        state.services.retain(|s| s.id != id);
        Ok(state.services.len() < before)
    }

    async fn services_with_published_blogs(&self) -> StoreResult<Vec<ServiceRef>> {
        let state = self.state.read().await;

        let mut published: HashMap<Uuid, usize> = HashMap::new();
        for blog in state.blogs.iter().filter(|b| b.status == BlogStatus::Published) {
            *published.entry(blog.service_id).or_default() += 1;
        }

        Ok(state
            .services
            .iter()
            .filter(|s| s.status == ServiceStatus::Active)
            .filter(|s| published.get(&s.id).copied().unwrap_or(0) >= 1)
            .map(|s| ServiceRef {
                id: s.id,
                name: s.name.clone(),
            })
            .collect())
    }
}

#[async_trait]
impl BlogStore for MemoryStore {
    async fn slug_exists(&self, slug: &str) -> StoreResult<bool> {
        let state = self.state.read().await;
        Ok(state.blogs.iter().any(|b| b.slug == slug))
    }

    async fn insert_blog(&self, blog: &NewBlog) -> StoreResult<Blog> {
        let mut state = self.state.write().await;
        if state.blogs.iter().any(|b| b.slug == blog.slug) {
            return Err(StoreError::SlugTaken(blog.slug.clone()));
        }

        let now = Utc::now();
        let stored = Blog {
            id: Uuid::now_v7(),
            title: blog.data.title.clone(),
            subtitle: blog.data.subtitle.clone(),
            description: blog.data.description.clone(),
            image_url: blog.data.image_url.clone(),
            slug: blog.slug.clone(),
            service_id: blog.data.service_id,
            status: blog.data.status,
            created_at: now,
            updated_at: now,
        };
        state.blogs.push(stored.clone());
        Ok(stored)
    }

    async fn find_blog(&self, id: Uuid) -> StoreResult<Option<BlogWithService>> {
        let state = self.state.read().await;
        Ok(state
            .blogs
            .iter()
            .find(|b| b.id == id)
            .map(|b| state.blog_with_service(b)))
    }

    async fn find_blog_by_slug(&self, slug: &str) -> StoreResult<Option<BlogWithService>> {
        let state = self.state.read().await;
        Ok(state
            .blogs
            .iter()
            .find(|b| b.slug == slug)
            .map(|b| state.blog_with_service(b)))
    }

    async fn list_blogs(
        &self,
        filter: &BlogFilter,
        page: Option<&PageRequest>,
    ) -> StoreResult<Vec<BlogWithService>> {
        let state = self.state.read().await;
        let matches = newest_first(
            state.blogs.iter().filter(|b| filter.matches(b)),
            |b: &Blog| b.created_at,
        );
        let matches = match page {
            Some(page) => window(matches, page),
            None => matches,
        };
        Ok(matches
            .into_iter()
            .map(|b| state.blog_with_service(b))
            .collect())
    }

    async fn count_blogs(&self, filter: &BlogFilter) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.blogs.iter().filter(|b| filter.matches(b)).count() as i64)
    }

    async fn update_blog(&self, id: Uuid, data: &BlogData) -> StoreResult<Option<Blog>> {
        let mut state = self.state.write().await;
        let Some(blog) = state.blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        blog.title = data.title.clone();
        blog.subtitle = data.subtitle.clone();
        blog.description = data.description.clone();
        blog.image_url = data.image_url.clone();
        blog.service_id = data.service_id;
        blog.status = data.status;
        blog.updated_at = Utc::now();
        Ok(Some(blog.clone()))
    }

    async fn update_blog_status(&self, id: Uuid, status: BlogStatus) -> StoreResult<Option<Blog>> {
        let mut state = self.state.write().await;
        let Some(blog) = state.blogs.iter_mut().find(|b| b.id == id) else {
            return Ok(None);
        };
        blog.status = status;
        blog.updated_at = Utc::now();
        Ok(Some(blog.clone()))
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn insert_contact(&self, contact: &NewContact) -> StoreResult<Contact> {
        let now = Utc::now();
        let stored = Contact {
            id: Uuid::now_v7(),
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            message: contact.message.clone(),
            service_id: contact.service_id,
            status: contact.status,
            created_at: now,
            updated_at: now,
        };
        self.state.write().await.contacts.push(stored.clone());
        Ok(stored)
    }

    async fn list_contacts(
        &self,
        filter: &ContactFilter,
        page: &PageRequest,
    ) -> StoreResult<Vec<ContactWithService>> {
        let state = self.state.read().await;
        let matches = newest_first(
            state.contacts.iter().filter(|c| filter.matches(c)),
            |c: &Contact| c.created_at,
        );
        Ok(window(matches, page)
            .into_iter()
            .map(|c| state.contact_with_service(c))
            .collect())
    }

    async fn count_contacts(&self, filter: &ContactFilter) -> StoreResult<i64> {
        let state = self.state.read().await;
        Ok(state.contacts.iter().filter(|c| filter.matches(c)).count() as i64)
    }

    async fn update_contact_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> StoreResult<Option<ContactWithService>> {
        let mut state = self.state.write().await;
        let Some(contact) = state.contacts.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };
        contact.status = status;
        contact.updated_at = Utc::now();
        let updated = contact.clone();
        Ok(Some(state.contact_with_service(&updated)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_data(name: &str, status: ServiceStatus) -> ServiceData {
        ServiceData {
            name: name.to_string(),
            description: "desc".to_string(),
            status,
        }
    }

    fn new_blog(slug: &str, service_id: Uuid, status: BlogStatus) -> NewBlog {
        NewBlog {
            slug: slug.to_string(),
            data: BlogData {
                title: slug.to_string(),
                subtitle: None,
                description: "d".to_string(),
                image_url: "u".to_string(),
                service_id,
                status,
            },
        }
    }

    #[tokio::test]
    async fn test_duplicate_slug_is_rejected() {
        let store = MemoryStore::new();
        let service = store
            .insert_service(&service_data("Web", ServiceStatus::Active))
            .await
            .unwrap();

        store
            .insert_blog(&new_blog("same", service.id, BlogStatus::Draft))
            .await
            .unwrap();
        let err = store
            .insert_blog(&new_blog("same", service.id, BlogStatus::Draft))
            .await
            .unwrap_err();

        assert!(matches!(err, StoreError::SlugTaken(slug) if slug == "same"));
    }

    #[tokio::test]
    async fn test_join_keeps_active_services_with_published_blogs() {
        let store = MemoryStore::new();
        let with_published = store
            .insert_service(&service_data("Published", ServiceStatus::Active))
            .await
            .unwrap();
        let drafts_only = store
            .insert_service(&service_data("Drafts", ServiceStatus::Active))
            .await
            .unwrap();
        let inactive = store
            .insert_service(&service_data("Inactive", ServiceStatus::Inactive))
            .await
            .unwrap();

        store
            .insert_blog(&new_blog("a", with_published.id, BlogStatus::Published))
            .await
            .unwrap();
        store
            .insert_blog(&new_blog("b", drafts_only.id, BlogStatus::Draft))
            .await
            .unwrap();
        store
            .insert_blog(&new_blog("c", inactive.id, BlogStatus::Published))
            .await
            .unwrap();

        let joined = store.services_with_published_blogs().await.unwrap();
        assert_eq!(
            joined,
            vec![ServiceRef {
                id: with_published.id,
                name: "Published".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_list_blogs_newest_first_with_window() {
        let store = MemoryStore::new();
        let service = store
            .insert_service(&service_data("Web", ServiceStatus::Active))
            .await
            .unwrap();
        for slug in ["one", "two", "three"] {
            store
                .insert_blog(&new_blog(slug, service.id, BlogStatus::Draft))
                .await
                .unwrap();
        }

        let page = PageRequest::new(1, 2);
        let listed = store
            .list_blogs(&BlogFilter::default(), Some(&page))
            .await
            .unwrap();
        let slugs: Vec<&str> = listed.iter().map(|b| b.blog.slug.as_str()).collect();
        assert_eq!(slugs, vec!["three", "two"]);

        let rest = store
            .list_blogs(&BlogFilter::default(), Some(&PageRequest::new(2, 2)))
            .await
            .unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].blog.slug, "one");
        assert_eq!(store.count_blogs(&BlogFilter::default()).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_deleted_service_leaves_dangling_blog() {
        let store = MemoryStore::new();
        let service = store
            .insert_service(&service_data("Web", ServiceStatus::Active))
            .await
            .unwrap();
        let blog = store
            .insert_blog(&new_blog("a", service.id, BlogStatus::Published))
            .await
            .unwrap();

        assert!(store.delete_service(service.id).await.unwrap());
        assert!(!store.delete_service(service.id).await.unwrap());

        let found = store.find_blog(blog.id).await.unwrap().unwrap();
        assert_eq!(found.blog.service_id, service.id);
        assert!(found.service.is_none());
    }
}
