use chrono::{DateTime, Utc};
use sqlx::{FromRow, Type};
use uuid::Uuid;

use crate::features::service_catalog::models::ServiceRef;
use crate::shared::query::contains_ignore_case;
use crate::shared::status::EntityStatus;

/// Blog status stored as SMALLINT (0 = draft, 1 = published, 2 = archived)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Type)]
#[repr(i16)]
pub enum BlogStatus {
    #[default]
    Draft = 0,
    Published = 1,
    Archived = 2,
}

impl EntityStatus for BlogStatus {
    const ALL: &'static [Self] = &[BlogStatus::Draft, BlogStatus::Published, BlogStatus::Archived];

    fn code(self) -> i16 {
        self as i16
    }
}

/// Database model for blog
#[derive(Debug, Clone, FromRow)]
pub struct Blog {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image_url: String,
    pub slug: String,
    pub service_id: Uuid,
    pub status: BlogStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields written by create and full update; the slug is not among them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogData {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub image_url: String,
    pub service_id: Uuid,
    pub status: BlogStatus,
}

/// Blog ready for insertion, slug already resolved
#[derive(Debug, Clone)]
pub struct NewBlog {
    pub slug: String,
    pub data: BlogData,
}

/// Blog with its service projected to `{id, name}`.
/// `service` is `None` when the referenced service no longer exists.
#[derive(Debug, Clone)]
pub struct BlogWithService {
    pub blog: Blog,
    pub service: Option<ServiceRef>,
}

/// Store-level blog filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlogFilter {
    /// Substring matched against title or subtitle
    pub search: Option<String>,
    pub status: Option<BlogStatus>,
    pub service_id: Option<Uuid>,
}

impl BlogFilter {
    pub fn matches(&self, blog: &Blog) -> bool {
        if let Some(term) = &self.search {
            let hit = contains_ignore_case(&blog.title, term)
                || blog
                    .subtitle
                    .as_deref()
                    .is_some_and(|s| contains_ignore_case(s, term));
            if !hit {
                return false;
            }
        }
        if self.status.is_some_and(|s| s != blog.status) {
            return false;
        }
        if self.service_id.is_some_and(|id| id != blog.service_id) {
            return false;
        }
        true
    }
}
