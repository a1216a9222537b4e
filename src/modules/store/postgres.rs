use async_trait::async_trait;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use super::{BlogStore, ContactStore, ServiceStore, StoreError, StoreResult};
use crate::features::blogs::models::{Blog, BlogData, BlogFilter, BlogStatus, BlogWithService, NewBlog};
use crate::features::contacts::models::{
    Contact, ContactFilter, ContactStatus, ContactWithService, NewContact,
};
use crate::features::service_catalog::models::{Service, ServiceData, ServiceRef, ServiceStatus};
use crate::shared::query::{like_pattern, PageRequest};

const BLOG_SLUG_CONSTRAINT: &str = "blogs_slug_key";

const SERVICE_COLUMNS: &str = "id, name, description, status, created_at, updated_at";

const BLOG_COLUMNS: &str = "id, title, subtitle, description, image_url, slug, service_id, status, created_at, updated_at";

const BLOG_WITH_SERVICE_SELECT: &str = r#"
    SELECT b.id, b.title, b.subtitle, b.description, b.image_url, b.slug,
           b.service_id, b.status, b.created_at, b.updated_at,
           s.name AS service_name
    FROM blogs b
    LEFT JOIN services s ON s.id = b.service_id
"#;

const CONTACT_COLUMNS: &str = "id, name, email, phone, message, service_id, status, created_at, updated_at";

const CONTACT_WITH_SERVICE_SELECT: &str = r#"
    SELECT c.id, c.name, c.email, c.phone, c.message, c.service_id, c.status,
           c.created_at, c.updated_at,
           s.name AS service_name
    FROM contacts c
    LEFT JOIN services s ON s.id = c.service_id
"#;

/// PostgreSQL-backed store
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl std::fmt::Debug for PgStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PgStore").field("pool", &"<PgPool>").finish()
    }
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct BlogRow {
    #[sqlx(flatten)]
    blog: Blog,
    service_name: Option<String>,
}

impl From<BlogRow> for BlogWithService {
    fn from(row: BlogRow) -> Self {
        let service = row.service_name.map(|name| ServiceRef {
            id: row.blog.service_id,
            name,
        });
        Self {
            blog: row.blog,
            service,
        }
    }
}

#[derive(FromRow)]
struct ContactRow {
    #[sqlx(flatten)]
    contact: Contact,
    service_name: Option<String>,
}

impl From<ContactRow> for ContactWithService {
    fn from(row: ContactRow) -> Self {
        let service = row.service_name.map(|name| ServiceRef {
            id: row.contact.service_id,
            name,
        });
        Self {
            contact: row.contact,
            service,
        }
    }
}

/// Map a unique violation on the slug index to [`StoreError::SlugTaken`]
fn map_blog_write_error(e: sqlx::Error, slug: &str) -> StoreError {
    if let sqlx::Error::Database(db_err) = &e {
        if db_err.is_unique_violation() && db_err.constraint() == Some(BLOG_SLUG_CONSTRAINT) {
            return StoreError::SlugTaken(slug.to_string());
        }
    }
    tracing::error!("Failed to write blog: {:?}", e);
    StoreError::Database(e)
}

fn log_db_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |e| {
        tracing::error!("{}: {:?}", context, e);
        StoreError::Database(e)
    }
}

/// Append `AND (col1 ILIKE $n OR col2 ILIKE $n ...)`
fn push_search(qb: &mut QueryBuilder<'_, Postgres>, columns: &[&str], term: &str) {
    let pattern = like_pattern(term);
    qb.push(" AND (");
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            qb.push(" OR ");
        }
        qb.push(*column).push(" ILIKE ").push_bind(pattern.clone());
    }
    qb.push(")");
}

fn push_blog_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &BlogFilter) {
    qb.push(" WHERE TRUE");
    if let Some(term) = &filter.search {
        push_search(qb, &["b.title", "b.subtitle"], term);
    }
    if let Some(status) = filter.status {
        qb.push(" AND b.status = ").push_bind(status);
    }
    if let Some(service_id) = filter.service_id {
        qb.push(" AND b.service_id = ").push_bind(service_id);
    }
}

fn push_contact_filter(qb: &mut QueryBuilder<'_, Postgres>, filter: &ContactFilter) {
    qb.push(" WHERE TRUE");
    if let Some(term) = &filter.search {
        push_search(qb, &["c.name", "c.email", "c.phone"], term);
    }
    if let Some(status) = filter.status {
        qb.push(" AND c.status = ").push_bind(status);
    }
}

#[async_trait]
impl ServiceStore for PgStore {
    async fn insert_service(&self, data: &ServiceData) -> StoreResult<Service> {
        let query = format!(
            r#"
            INSERT INTO services (id, name, description, status)
            VALUES ($1, $2, $3, $4)
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );

        sqlx::query_as::<_, Service>(&query)
            .bind(Uuid::now_v7())
            .bind(&data.name)
            .bind(&data.description)
            .bind(data.status)
            .fetch_one(&self.pool)
            .await
            .map_err(log_db_error("Failed to insert service"))
    }

    async fn find_service(&self, id: Uuid) -> StoreResult<Option<Service>> {
        let query = format!("SELECT {} FROM services WHERE id = $1", SERVICE_COLUMNS);

        sqlx::query_as::<_, Service>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to get service"))
    }

    async fn list_services(&self) -> StoreResult<Vec<Service>> {
        let query = format!(
            "SELECT {} FROM services ORDER BY created_at, id",
            SERVICE_COLUMNS
        );

        sqlx::query_as::<_, Service>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(log_db_error("Failed to list services"))
    }

    async fn update_service(&self, id: Uuid, data: &ServiceData) -> StoreResult<Option<Service>> {
        let query = format!(
            r#"
            UPDATE services
            SET name = $1, description = $2, status = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING {}
            "#,
            SERVICE_COLUMNS
        );

        sqlx::query_as::<_, Service>(&query)
            .bind(&data.name)
            .bind(&data.description)
            .bind(data.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to update service"))
    }

    async fn delete_service(&self, id: Uuid) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM services WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(log_db_error("Failed to delete service"))?;

        Ok(result.rows_affected() > 0)
    }

    async fn services_with_published_blogs(&self) -> StoreResult<Vec<ServiceRef>> {
        sqlx::query_as::<_, ServiceRef>(
            r#"
            SELECT s.id, s.name
            FROM services s
            JOIN (
                SELECT service_id, COUNT(*) AS published
                FROM blogs
                WHERE status = $1
                GROUP BY service_id
            ) b ON b.service_id = s.id
            WHERE s.status = $2 AND b.published >= 1
            ORDER BY s.created_at, s.id
            "#,
        )
        .bind(BlogStatus::Published)
        .bind(ServiceStatus::Active)
        .fetch_all(&self.pool)
        .await
        .map_err(log_db_error("Failed to list services with published blogs"))
    }
}

#[async_trait]
impl BlogStore for PgStore {
    async fn slug_exists(&self, slug: &str) -> StoreResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM blogs WHERE slug = $1)")
            .bind(slug)
            .fetch_one(&self.pool)
            .await
            .map_err(log_db_error("Failed to look up blog slug"))
    }

    async fn insert_blog(&self, blog: &NewBlog) -> StoreResult<Blog> {
        let query = format!(
            r#"
            INSERT INTO blogs (id, title, subtitle, description, image_url, slug, service_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {}
            "#,
            BLOG_COLUMNS
        );

        sqlx::query_as::<_, Blog>(&query)
            .bind(Uuid::now_v7())
            .bind(&blog.data.title)
            .bind(&blog.data.subtitle)
            .bind(&blog.data.description)
            .bind(&blog.data.image_url)
            .bind(&blog.slug)
            .bind(blog.data.service_id)
            .bind(blog.data.status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| map_blog_write_error(e, &blog.slug))
    }

    async fn find_blog(&self, id: Uuid) -> StoreResult<Option<BlogWithService>> {
        let query = format!("{} WHERE b.id = $1", BLOG_WITH_SERVICE_SELECT);

        let row = sqlx::query_as::<_, BlogRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to get blog"))?;

        Ok(row.map(Into::into))
    }

    async fn find_blog_by_slug(&self, slug: &str) -> StoreResult<Option<BlogWithService>> {
        let query = format!("{} WHERE b.slug = $1", BLOG_WITH_SERVICE_SELECT);

        let row = sqlx::query_as::<_, BlogRow>(&query)
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to get blog by slug"))?;

        Ok(row.map(Into::into))
    }

    async fn list_blogs(
        &self,
        filter: &BlogFilter,
        page: Option<&PageRequest>,
    ) -> StoreResult<Vec<BlogWithService>> {
        let mut qb = QueryBuilder::<Postgres>::new(BLOG_WITH_SERVICE_SELECT);
        push_blog_filter(&mut qb, filter);
        qb.push(" ORDER BY b.created_at DESC, b.id DESC");
        if let Some(page) = page {
            qb.push(" LIMIT ")
                .push_bind(page.limit)
                .push(" OFFSET ")
                .push_bind(page.offset());
        }

        let rows = qb
            .build_query_as::<BlogRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(log_db_error("Failed to list blogs"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_blogs(&self, filter: &BlogFilter) -> StoreResult<i64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM blogs b");
        push_blog_filter(&mut qb, filter);

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(log_db_error("Failed to count blogs"))
    }

    async fn update_blog(&self, id: Uuid, data: &BlogData) -> StoreResult<Option<Blog>> {
        let query = format!(
            r#"
            UPDATE blogs
            SET title = $1, subtitle = $2, description = $3, image_url = $4,
                service_id = $5, status = $6, updated_at = NOW()
            WHERE id = $7
            RETURNING {}
            "#,
            BLOG_COLUMNS
        );

        sqlx::query_as::<_, Blog>(&query)
            .bind(&data.title)
            .bind(&data.subtitle)
            .bind(&data.description)
            .bind(&data.image_url)
            .bind(data.service_id)
            .bind(data.status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to update blog"))
    }

    async fn update_blog_status(&self, id: Uuid, status: BlogStatus) -> StoreResult<Option<Blog>> {
        let query = format!(
            "UPDATE blogs SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING {}",
            BLOG_COLUMNS
        );

        sqlx::query_as::<_, Blog>(&query)
            .bind(status)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to update blog status"))
    }
}

#[async_trait]
impl ContactStore for PgStore {
    async fn insert_contact(&self, contact: &NewContact) -> StoreResult<Contact> {
        let query = format!(
            r#"
            INSERT INTO contacts (id, name, email, phone, message, service_id, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {}
            "#,
            CONTACT_COLUMNS
        );

        sqlx::query_as::<_, Contact>(&query)
            .bind(Uuid::now_v7())
            .bind(&contact.name)
            .bind(&contact.email)
            .bind(&contact.phone)
            .bind(&contact.message)
            .bind(contact.service_id)
            .bind(contact.status)
            .fetch_one(&self.pool)
            .await
            .map_err(log_db_error("Failed to insert contact"))
    }

    async fn list_contacts(
        &self,
        filter: &ContactFilter,
        page: &PageRequest,
    ) -> StoreResult<Vec<ContactWithService>> {
        let mut qb = QueryBuilder::<Postgres>::new(CONTACT_WITH_SERVICE_SELECT);
        push_contact_filter(&mut qb, filter);
        qb.push(" ORDER BY c.created_at DESC, c.id DESC LIMIT ")
            .push_bind(page.limit)
            .push(" OFFSET ")
            .push_bind(page.offset());

        let rows = qb
            .build_query_as::<ContactRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(log_db_error("Failed to list contacts"))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn count_contacts(&self, filter: &ContactFilter) -> StoreResult<i64> {
        let mut qb = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM contacts c");
        push_contact_filter(&mut qb, filter);

        qb.build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(log_db_error("Failed to count contacts"))
    }

    async fn update_contact_status(
        &self,
        id: Uuid,
        status: ContactStatus,
    ) -> StoreResult<Option<ContactWithService>> {
        let updated = sqlx::query_scalar::<_, Uuid>(
            "UPDATE contacts SET status = $1, updated_at = NOW() WHERE id = $2 RETURNING id",
        )
        .bind(status)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(log_db_error("Failed to update contact status"))?;

        let Some(id) = updated else {
            return Ok(None);
        };

        let query = format!("{} WHERE c.id = $1", CONTACT_WITH_SERVICE_SELECT);
        let row = sqlx::query_as::<_, ContactRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(log_db_error("Failed to get contact"))?;

        Ok(row.map(Into::into))
    }
}
