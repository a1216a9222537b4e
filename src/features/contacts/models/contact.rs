use chrono::{DateTime, Utc};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::features::service_catalog::models::ServiceRef;
use crate::shared::query::contains_ignore_case;
use crate::shared::status::EntityStatus;

/// Contact status stored as SMALLINT (1 = fulfilled, 2 = pending)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Type)]
#[repr(i16)]
pub enum ContactStatus {
    Fulfilled = 1,
    #[default]
    Pending = 2,
}

impl EntityStatus for ContactStatus {
    const ALL: &'static [Self] = &[ContactStatus::Fulfilled, ContactStatus::Pending];

    fn code(self) -> i16 {
        self as i16
    }
}

/// Database model for contact request
#[derive(Debug, Clone, FromRow)]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service_id: Uuid,
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service_id: Uuid,
    pub status: ContactStatus,
}

#[derive(Debug, Clone)]
pub struct ContactWithService {
    pub contact: Contact,
    pub service: Option<ServiceRef>,
}

/// Store-level contact filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFilter {
    /// Substring matched against name, email or phone
    pub search: Option<String>,
    pub status: Option<ContactStatus>,
}

impl ContactFilter {
    pub fn matches(&self, contact: &Contact) -> bool {
        if let Some(term) = &self.search {
            let hit = [&contact.name, &contact.email, &contact.phone]
                .iter()
                .any(|field| contains_ignore_case(field, term));
            if !hit {
                return false;
            }
        }
        self.status.map_or(true, |s| s == contact.status)
    }
}
