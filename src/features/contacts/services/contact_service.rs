use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::contacts::dtos::{
    ContactDetailDto, ContactResponseDto, ContactStatusDto, CreateContactDto,
};
use crate::features::contacts::models::{ContactFilter, ContactStatus};
use crate::features::service_catalog::services::resolve_service_reference;
use crate::modules::store::{ContactStore, ContentStore};
use crate::shared::query::{ListQuery, Pagination};
use crate::shared::validation::{parse_id, validate_request};

fn not_found() -> AppError {
    AppError::NotFound("Contact not found".to_string())
}

/// Service for contact request operations
pub struct ContactService {
    store: Arc<dyn ContentStore>,
}

impl ContactService {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }

    pub async fn create(&self, dto: CreateContactDto) -> Result<ContactResponseDto> {
        validate_request(&dto)?;

        let service_id = resolve_service_reference(&*self.store, dto.service_ref()).await?;
        let contact = self
            .store
            .insert_contact(&dto.into_new_contact(service_id))
            .await?;
        tracing::info!("Contact request submitted: {}", contact.id);

        Ok(contact.into())
    }

    pub async fn list(&self, query: &ListQuery) -> Result<(Vec<ContactDetailDto>, Pagination)> {
        let page = query.page_request();
        let filter = ContactFilter {
            search: query.search_term(),
            status: query.status_filter::<ContactStatus>(),
        };

        let total = self.store.count_contacts(&filter).await?;
        let contacts = self.store.list_contacts(&filter, &page).await?;

        Ok((
            contacts.into_iter().map(ContactDetailDto::from).collect(),
            Pagination::new(total, &page),
        ))
    }

    pub async fn update_status(&self, id: &str, dto: ContactStatusDto) -> Result<ContactDetailDto> {
        validate_request(&dto)?;
        let id = parse_id(id).ok_or_else(not_found)?;
        let status = dto.status()?;

        let contact = self
            .store
            .update_contact_status(id, status)
            .await?
            .ok_or_else(not_found)?;
        tracing::info!("Contact {} status set to {:?}", contact.contact.id, status);

        Ok(contact.into())
    }
}
