use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::service_catalog::dtos::{ServiceRef, ServiceRequestDto, ServiceResponseDto};
use crate::modules::store::{ContentStore, ServiceStore};
use crate::shared::validation::{parse_id, validate_request};

fn not_found() -> AppError {
    AppError::NotFound("Service not found".to_string())
}

/// Resolve the `service` field of a blog or contact write to an existing
/// service id. Malformed ids resolve the same way as unknown ones.
pub async fn resolve_service_reference<S>(store: &S, raw: Option<&str>) -> Result<Uuid>
where
    S: ServiceStore + ?Sized,
{
    let missing = AppError::MissingReference {
        entity: "Service",
        path: "service",
    };

    let Some(id) = raw.and_then(parse_id) else {
        return Err(missing);
    };

    match store.find_service(id).await? {
        Some(service) => Ok(service.id),
        None => Err(missing),
    }
}

/// Service for service catalog operations
pub struct ServiceCatalogService {
    store: Arc<dyn ContentStore>,
}

impl ServiceCatalogService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, dto: ServiceRequestDto) -> Result<ServiceResponseDto> {
        validate_request(&dto)?;

        let service = self.store.insert_service(&dto.into_data()?).await?;
        tracing::info!("Service created: {}", service.id);

        Ok(service.into())
    }

    /// All services, oldest first
    pub async fn list(&self) -> Result<Vec<ServiceResponseDto>> {
        let services = self.store.list_services().await?;
        Ok(services.into_iter().map(ServiceResponseDto::from).collect())
    }

    /// Active services with at least one published blog
    pub async fn list_with_published_blogs(&self) -> Result<Vec<ServiceRef>> {
        Ok(self.store.services_with_published_blogs().await?)
    }

    pub async fn get(&self, id: &str) -> Result<ServiceResponseDto> {
        let id = parse_id(id).ok_or_else(not_found)?;

        self.store
            .find_service(id)
            .await?
            .map(ServiceResponseDto::from)
            .ok_or_else(not_found)
    }

    pub async fn update(&self, id: &str, dto: ServiceRequestDto) -> Result<ServiceResponseDto> {
        validate_request(&dto)?;
        let id = parse_id(id).ok_or_else(not_found)?;

        let service = self
            .store
            .update_service(id, &dto.into_data()?)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Service updated: {}", service.id);

        Ok(service.into())
    }

    /// Referencing blogs and contacts are left in place
    pub async fn delete(&self, id: &str) -> Result<()> {
        let id = parse_id(id).ok_or_else(not_found)?;

        if !self.store.delete_service(id).await? {
            return Err(not_found());
        }
        tracing::info!("Service deleted: {}", id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::store::MemoryStore;
    use serde_json::json;

    fn request(name: &str, status: i64) -> ServiceRequestDto {
        serde_json::from_value(json!({
            "name": name,
            "description": "Full service",
            "status": status,
        }))
        .unwrap()
    }

    fn service() -> ServiceCatalogService {
        ServiceCatalogService::new(Arc::new(MemoryStore::new()))
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let svc = service();
        let created = svc.create(request(" SEO ", 1)).await.unwrap();
        assert_eq!(created.name, "SEO");
        assert_eq!(created.status, 1);

        let fetched = svc.get(&created.id.to_string()).await.unwrap();
        assert_eq!(fetched.id, created.id);
    }

    #[tokio::test]
    async fn test_invalid_create_writes_nothing() {
        let svc = service();
        let err = svc.create(request("", 7)).await.unwrap_err();
        assert!(matches!(err, AppError::Validation(ref e) if e.len() == 2));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_id_is_not_found() {
        let svc = service();
        assert!(matches!(svc.get("not-a-uuid").await, Err(AppError::NotFound(_))));
        assert!(matches!(svc.delete("42").await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let svc = service();
        let created = svc.create(request("Ads", 1)).await.unwrap();
        let id = created.id.to_string();

        let updated = svc.update(&id, request("Paid Ads", 0)).await.unwrap();
        assert_eq!(updated.name, "Paid Ads");
        assert_eq!(updated.status, 0);
        assert_eq!(updated.created_at, created.created_at);

        svc.delete(&id).await.unwrap();
        assert!(matches!(svc.delete(&id).await, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_resolve_service_reference() {
        let store = MemoryStore::new();
        let err = resolve_service_reference(&store, Some("nope")).await.unwrap_err();
        assert!(matches!(err, AppError::MissingReference { path: "service", .. }));

        let err = resolve_service_reference(&store, None).await.unwrap_err();
        assert!(matches!(err, AppError::MissingReference { .. }));

        let unknown = Uuid::now_v7().to_string();
        assert!(resolve_service_reference(&store, Some(&unknown)).await.is_err());
    }
}
